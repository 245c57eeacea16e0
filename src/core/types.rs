use serde::{Deserialize, Serialize};

/// Canonical three-character book code ("BBB")
///
/// Always starts with an uppercase letter, so `2 Corinthians` is `CO2`
/// rather than `2CO`. This keeps codes usable as identifiers in formats
/// that require a leading letter (HTML ids, most programming languages).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookCode(pub String);

impl BookCode {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the structural rules for a code: three characters,
    /// letter first, all uppercase
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 3
            && self.0.starts_with(|c: char| c.is_ascii_uppercase())
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    }
}

impl std::fmt::Display for BookCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BookCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// External numbering/abbreviation scheme
///
/// Each scheme has its own code space; a scheme code may legitimately map
/// to more than one canonical book, so reverse lookups return ordered
/// candidate lists (first = preferred).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    Osis,
    Sword,
    Usfm,
    UsfmNumber,
    UsxNumber,
    Ccel,
    Sbl,
    Net,
    Drupal,
    Byzantine,
    Unbound,
    Bibledit,
    Short,
}

impl Scheme {
    /// The secondary scheme tried by non-strict lookups when a code is
    /// absent from this scheme's index. Only OSIS has one: Sword modules
    /// reuse OSIS codes with a handful of divergences, so a code missing
    /// from the OSIS table is often a Sword spelling.
    #[must_use]
    pub fn fallback(self) -> Option<Scheme> {
        match self {
            Self::Osis => Some(Self::Sword),
            _ => None,
        }
    }

    /// Parse a scheme name as given on the command line
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "osis" => Some(Self::Osis),
            "sword" => Some(Self::Sword),
            "usfm" => Some(Self::Usfm),
            "usfm-number" | "usfm_number" | "usfmnumber" => Some(Self::UsfmNumber),
            "usx" | "usx-number" | "usx_number" => Some(Self::UsxNumber),
            "ccel" => Some(Self::Ccel),
            "sbl" => Some(Self::Sbl),
            "net" | "netbible" => Some(Self::Net),
            "drupal" | "drupalbible" => Some(Self::Drupal),
            "byzantine" | "byz" => Some(Self::Byzantine),
            "unbound" => Some(Self::Unbound),
            "bibledit" => Some(Self::Bibledit),
            "short" => Some(Self::Short),
            _ => None,
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Osis => write!(f, "OSIS"),
            Self::Sword => write!(f, "Sword"),
            Self::Usfm => write!(f, "USFM"),
            Self::UsfmNumber => write!(f, "USFM number"),
            Self::UsxNumber => write!(f, "USX number"),
            Self::Ccel => write!(f, "CCEL"),
            Self::Sbl => write!(f, "SBL"),
            Self::Net => write!(f, "NET Bible"),
            Self::Drupal => write!(f, "DrupalBible"),
            Self::Byzantine => write!(f, "Byzantine"),
            Self::Unbound => write!(f, "Unbound Bible"),
            Self::Bibledit => write!(f, "Bibledit"),
            Self::Short => write!(f, "short abbreviation"),
        }
    }
}

/// Typical section of a printed Bible where a book appears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    /// Old Testament
    #[serde(rename = "OT")]
    OldTestament,
    /// Old Testament extras (e.g. extended canon orderings)
    #[serde(rename = "OT+")]
    OldTestamentPlus,
    /// New Testament
    #[serde(rename = "NT")]
    NewTestament,
    /// New Testament extras
    #[serde(rename = "NT+")]
    NewTestamentPlus,
    /// Deuterocanon/Apocrypha
    #[serde(rename = "DC")]
    Deuterocanon,
    /// Psalter additions
    #[serde(rename = "PS")]
    Psalms,
    /// Front matter
    #[serde(rename = "FRT")]
    FrontMatter,
    /// Back matter
    #[serde(rename = "BAK")]
    BackMatter,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OldTestament => write!(f, "OT"),
            Self::OldTestamentPlus => write!(f, "OT+"),
            Self::NewTestament => write!(f, "NT"),
            Self::NewTestamentPlus => write!(f, "NT+"),
            Self::Deuterocanon => write!(f, "DC"),
            Self::Psalms => write!(f, "PS"),
            Self::FrontMatter => write!(f, "FRT"),
            Self::BackMatter => write!(f, "BAK"),
        }
    }
}
