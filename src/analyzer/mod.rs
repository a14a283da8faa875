// src/analyzer/mod.rs
pub mod patterns;

use crate::models::{ExtendedReport, StrengthLevel, StrengthReport};

// Reference sequences for sequential-run detection: digits, the alphabet
// and the three letter rows of a QWERTY keyboard.
const SEQUENCES: [&str; 5] = [
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "qwertyuiop",
    "asdfghjkl",
    "zxcvbnm",
];

// Nominal alphabet sizes per character class, used by the entropy estimate
const UPPER_SPACE: usize = 26;
const LOWER_SPACE: usize = 26;
const DIGIT_SPACE: usize = 10;
const SYMBOL_SPACE: usize = 32;

fn has_repeated_char(chars: &[char]) -> bool {
    chars
        .iter()
        .enumerate()
        .any(|(i, c)| chars[i + 1..].contains(c))
}

// True if any 3-character window of the lowercased password, read forward
// or backward, is a substring of a reference sequence.
fn has_sequential_run(password: &str) -> bool {
    let lower: Vec<char> = password.to_lowercase().chars().collect();
    lower.windows(3).any(|window| {
        let forward: String = window.iter().collect();
        let backward: String = window.iter().rev().collect();
        SEQUENCES
            .iter()
            .any(|seq| seq.contains(&forward) || seq.contains(&backward))
    })
}

/// Heuristic entropy estimate: `length * log2(alphabet)` where the alphabet
/// is the sum of the nominal sizes of the classes present in the password.
/// This is an approximation over nominal class sizes, not Shannon entropy
/// of the actual string.
pub fn entropy_bits(
    length: usize,
    has_uppercase: bool,
    has_lowercase: bool,
    has_numbers: bool,
    has_symbols: bool,
) -> f64 {
    let mut alphabet = 0usize;
    if has_uppercase {
        alphabet += UPPER_SPACE;
    }
    if has_lowercase {
        alphabet += LOWER_SPACE;
    }
    if has_numbers {
        alphabet += DIGIT_SPACE;
    }
    if has_symbols {
        alphabet += SYMBOL_SPACE;
    }
    if alphabet == 0 {
        return 0.0;
    }
    length as f64 * (alphabet as f64).log2()
}

/// Analyze a password and produce a structural strength report.
///
/// Never fails: an empty password yields the neutral report from
/// [`StrengthReport::empty`] without running the scoring path.
pub fn analyze(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport::empty();
    }

    let chars: Vec<char> = password.chars().collect();
    let length = chars.len();

    let has_uppercase = chars.iter().any(|c| c.is_ascii_uppercase());
    let has_lowercase = chars.iter().any(|c| c.is_ascii_lowercase());
    let has_numbers = chars.iter().any(|c| c.is_ascii_digit());
    let has_symbols = chars.iter().any(|c| !c.is_alphanumeric());
    let has_repeated_char = has_repeated_char(&chars);
    let has_sequential_run = has_sequential_run(password);

    let entropy_bits = entropy_bits(length, has_uppercase, has_lowercase, has_numbers, has_symbols);

    // Signed accumulator, clamped once at the end
    let mut score: i32 = 0;
    if length >= 8 {
        score += 25;
    }
    if length >= 12 {
        score += 15;
    }
    if length >= 16 {
        score += 10;
    }
    if has_uppercase {
        score += 10;
    }
    if has_lowercase {
        score += 10;
    }
    if has_numbers {
        score += 10;
    }
    if has_symbols {
        score += 15;
    }
    if entropy_bits > 40.0 {
        score += 10;
    }
    if entropy_bits > 60.0 {
        score += 5;
    }
    if has_repeated_char {
        score -= 10;
    }
    if has_sequential_run {
        score -= 15;
    }
    if length < 8 {
        score -= 20;
    }
    let score = score.clamp(0, 100) as u8;

    let mut suggestions = Vec::new();
    if length < 8 {
        suggestions.push("Use at least 8 characters".to_string());
    }
    if length < 12 {
        suggestions.push("Consider using 12 or more characters".to_string());
    }
    if !has_uppercase {
        suggestions.push("Add uppercase letters".to_string());
    }
    if !has_lowercase {
        suggestions.push("Add lowercase letters".to_string());
    }
    if !has_numbers {
        suggestions.push("Add numbers".to_string());
    }
    if !has_symbols {
        suggestions.push("Add symbols".to_string());
    }
    if has_repeated_char {
        suggestions.push("Avoid repeated characters".to_string());
    }
    if has_sequential_run {
        suggestions.push("Avoid sequential characters".to_string());
    }

    StrengthReport {
        length,
        has_uppercase,
        has_lowercase,
        has_numbers,
        has_symbols,
        has_repeated_char,
        has_sequential_run,
        entropy_bits,
        score,
        level: StrengthLevel::from_score(score),
        suggestions,
    }
}

/// Full analysis: the structural report plus pattern-detection
/// recommendations.
pub fn analyze_extended(password: &str) -> ExtendedReport {
    let report = analyze(password);
    let recommendations = patterns::detect(password, report.entropy_bits);
    ExtendedReport {
        report,
        recommendations,
    }
}
