// src/models.rs
use serde::{Deserialize, Serialize};

// Character classes used to build the generation charset. These are fixed
// constants and are never mutated.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

// Characters that are easy to misread for one another
pub const SIMILAR: &str = "0Oo1lI";

// Symbols that tend to cause trouble in shells, URLs and config files
pub const AMBIGUOUS: &str = "{}[]()/\\\"'`~,;.<>";

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    Excellent,
}

impl StrengthLevel {
    // Highest matching threshold wins
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => StrengthLevel::Excellent,
            75..=89 => StrengthLevel::Strong,
            60..=74 => StrengthLevel::Good,
            40..=59 => StrengthLevel::Fair,
            20..=39 => StrengthLevel::Weak,
            _ => StrengthLevel::VeryWeak,
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLevel::VeryWeak => write!(f, "Very weak"),
            StrengthLevel::Weak => write!(f, "Weak"),
            StrengthLevel::Fair => write!(f, "Fair"),
            StrengthLevel::Good => write!(f, "Good"),
            StrengthLevel::Strong => write!(f, "Strong"),
            StrengthLevel::Excellent => write!(f, "Excellent"),
        }
    }
}

/// Structural strength report for a single password. Derived purely from the
/// input string, so analyzing the same password twice yields the same report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub length: usize,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_numbers: bool,
    pub has_symbols: bool,
    pub has_repeated_char: bool,
    pub has_sequential_run: bool,
    pub entropy_bits: f64,
    pub score: u8,
    pub level: StrengthLevel,
    pub suggestions: Vec<String>,
}

impl StrengthReport {
    /// The neutral report returned for an empty password. The scoring path
    /// never runs on empty input.
    pub fn empty() -> Self {
        Self {
            length: 0,
            has_uppercase: false,
            has_lowercase: false,
            has_numbers: false,
            has_symbols: false,
            has_repeated_char: false,
            has_sequential_run: false,
            entropy_bits: 0.0,
            score: 0,
            level: StrengthLevel::VeryWeak,
            suggestions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Info => write!(f, "INFO"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub message: String,
}

// Strength report plus pattern-detection recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedReport {
    pub report: StrengthReport,
    pub recommendations: Vec<Recommendation>,
}
