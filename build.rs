use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/book_codes.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let books = catalog
        .get("books")
        .and_then(|b| b.as_array())
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Missing 'books' array\n\
                 The catalog must have a top-level 'books' array.\n"
            );
        });

    for (i, book) in books.iter().enumerate() {
        validate_book_fields(book, i);
    }

    let sequence = catalog
        .get("sequence")
        .and_then(|s| s.as_array())
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Missing 'sequence' array\n\
                 The catalog must have a top-level 'sequence' array of book codes.\n"
            );
        });

    assert!(
        sequence.len() == books.len(),
        "\n\nCATALOG BUILD ERROR: 'sequence' has {} entries but 'books' has {}\n\
         Every book must appear exactly once in the print-order sequence.\n",
        sequence.len(),
        books.len()
    );

    println!(
        "cargo:warning=Validated catalog: {} books, {} sequence entries",
        books.len(),
        sequence.len()
    );
}

fn validate_book_fields(book: &serde_json::Value, index: usize) {
    let bbb = book
        .get("bbb")
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Book at index {index} missing 'bbb' field\n")
        });

    assert!(
        bbb.len() == 3 && bbb.starts_with(|c: char| c.is_ascii_uppercase()),
        "\n\nCATALOG BUILD ERROR: Book code '{bbb}' (index {index}) is malformed\n\
         Codes must be three characters and start with an uppercase letter.\n"
    );

    let number = book
        .get("number")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Book '{bbb}' (index {index}) missing 'number' field\n")
        });

    assert!(
        (1..=999).contains(&number),
        "\n\nCATALOG BUILD ERROR: Book '{bbb}' has reference number {number}\n\
         Reference numbers must be in 1..=999.\n"
    );

    assert!(
        book.get("english_names").is_some(),
        "\n\nCATALOG BUILD ERROR: Book '{bbb}' (index {index}) missing 'english_names' field\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/book_codes.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
