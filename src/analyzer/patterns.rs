// src/analyzer/patterns.rs
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{Recommendation, Severity};

// Keyboard rows scanned for 3-character adjacency runs
const KEYBOARD_ROWS: [&str; 4] = ["qwertyuiop", "asdfghjkl", "zxcvbnm", "1234567890"];

// Small fixed wordlist; matching is by case-insensitive substring
const DICTIONARY_WORDS: [&str; 16] = [
    "password", "admin", "user", "login", "welcome", "monkey", "dragon", "master", "shadow",
    "qwerty", "letmein", "secret", "summer", "winter", "spring", "autumn",
];

// Known weak passwords, the usual suspects from public breach lists
const COMMON_PASSWORDS: [&str; 25] = [
    "password", "123456", "12345678", "qwerty", "abc123", "monkey", "1234567", "letmein",
    "trustno1", "dragon", "baseball", "111111", "iloveyou", "master", "sunshine", "ashley",
    "bailey", "passw0rd", "shadow", "123123", "654321", "superman", "qazwsx", "michael",
    "football",
];

lazy_static! {
    // Date-like and year-like shapes that suggest personal information
    static ref PERSONAL_INFO_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}").expect("date pattern"),
        Regex::new(r"(19|20)\d{2}").expect("year pattern"),
        Regex::new(r"\d{8}").expect("compact date pattern"),
    ];

    // Formats frequently seen in leaked credential dumps
    static ref LEAKED_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"^password\d+$").expect("password-digits pattern"),
        Regex::new(r"^\d{4,8}$").expect("bare digits pattern"),
        Regex::new(r"^[a-z]{1,6}$").expect("short alphabetic pattern"),
        Regex::new(r"^[a-z]+\d{1,4}$").expect("word-digits pattern"),
    ];
}

/// True if any 3-character window of a keyboard row appears in the password.
pub fn is_keyboard_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();
    KEYBOARD_ROWS.iter().any(|row| {
        let row: Vec<char> = row.chars().collect();
        row.windows(3)
            .any(|window| lower.contains(&window.iter().collect::<String>()))
    })
}

pub fn is_dictionary_word(password: &str) -> bool {
    let lower = password.to_lowercase();
    DICTIONARY_WORDS.iter().any(|word| lower.contains(word))
}

pub fn might_be_personal_info(password: &str) -> bool {
    PERSONAL_INFO_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(password))
}

/// Classic repeated-block detection: some substring of length 2 or more
/// occurs again later in the password. The cubic scan is fine at password
/// lengths.
pub fn has_repeated_substring(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    let n = chars.len();
    for len in 2..=n / 2 {
        for i in 0..=n - 2 * len {
            let block = &chars[i..i + len];
            if (i + len..=n - len).any(|j| &chars[j..j + len] == block) {
                return true;
            }
        }
    }
    false
}

pub fn is_common_password(password: &str) -> bool {
    let lower = password.to_lowercase();
    COMMON_PASSWORDS.iter().any(|common| lower.contains(common))
}

pub fn matches_leaked_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();
    LEAKED_PATTERNS.iter().any(|pattern| pattern.is_match(&lower))
}

/// Run every detector and collect severity-tagged recommendations in a
/// fixed order: common and leaked matches first (critical), then keyboard,
/// dictionary and personal-info matches (warning), then repetition and low
/// entropy (info).
pub fn detect(password: &str, entropy_bits: f64) -> Vec<Recommendation> {
    if password.is_empty() {
        return Vec::new();
    }

    let mut recommendations = Vec::new();
    let mut push = |severity: Severity, message: &str| {
        recommendations.push(Recommendation {
            severity,
            message: message.to_string(),
        });
    };

    if is_common_password(password) {
        push(
            Severity::Critical,
            "Contains a commonly used password, change it",
        );
    }
    if matches_leaked_pattern(password) {
        push(
            Severity::Critical,
            "Matches a format frequently found in credential leaks",
        );
    }
    if is_keyboard_pattern(password) {
        push(Severity::Warning, "Contains a keyboard pattern");
    }
    if is_dictionary_word(password) {
        push(Severity::Warning, "Contains a dictionary word");
    }
    if might_be_personal_info(password) {
        push(
            Severity::Warning,
            "May contain personal information such as a date or year",
        );
    }
    if has_repeated_substring(password) {
        push(Severity::Info, "Contains a repeated block of characters");
    }
    if entropy_bits < 50.0 {
        push(
            Severity::Info,
            "Low estimated entropy, consider a longer or more varied password",
        );
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_rows_are_detected() {
        assert!(is_keyboard_pattern("xxqwexx"));
        assert!(is_keyboard_pattern("ASDfoo"));
        assert!(is_keyboard_pattern("pw1234"));
        assert!(!is_keyboard_pattern("horse"));
        // Two adjacent keys are not enough
        assert!(!is_keyboard_pattern("qwxx"));
    }

    #[test]
    fn dictionary_words_match_as_substrings() {
        assert!(is_dictionary_word("password"));
        assert!(is_dictionary_word("MyDragonRoars"));
        assert!(!is_dictionary_word("xqzjkvvm"));
    }

    #[test]
    fn personal_info_shapes() {
        assert!(might_be_personal_info("born12/31/1988"));
        assert!(might_be_personal_info("jake1990"));
        assert!(might_be_personal_info("19881231"));
        assert!(!might_be_personal_info("Tr0ub4dor&3"));
    }

    #[test]
    fn repeated_substrings() {
        assert!(has_repeated_substring("abcabc"));
        assert!(has_repeated_substring("xxabyzab"));
        assert!(!has_repeated_substring("abcdef"));
        // Single repeated characters are not a block
        assert!(!has_repeated_substring("aba"));
        assert!(!has_repeated_substring(""));
    }

    #[test]
    fn common_passwords_match_case_insensitively() {
        assert!(is_common_password("password"));
        assert!(is_common_password("PaSsWoRd!!"));
        assert!(is_common_password("xx123456xx"));
        assert!(!is_common_password("K9#mPw2$xQ7!"));
    }

    #[test]
    fn leaked_formats() {
        assert!(matches_leaked_pattern("password123"));
        assert!(matches_leaked_pattern("1234"));
        assert!(matches_leaked_pattern("abc"));
        assert!(matches_leaked_pattern("hello42"));
        assert!(!matches_leaked_pattern("Tr0ub4dor&3"));
    }

    #[test]
    fn detect_emits_in_fixed_severity_order() {
        let recommendations = detect("password123", 56.9);
        let severities: Vec<Severity> =
            recommendations.iter().map(|r| r.severity).collect();
        // common, leaked, keyboard ("123"), dictionary
        assert_eq!(
            severities,
            vec![
                Severity::Critical,
                Severity::Critical,
                Severity::Warning,
                Severity::Warning,
            ]
        );
    }

    #[test]
    fn detect_flags_low_entropy() {
        let recommendations = detect("Xk#9Qm", 30.0);
        assert!(recommendations
            .iter()
            .any(|r| r.severity == Severity::Info && r.message.contains("entropy")));
    }

    #[test]
    fn detect_on_empty_password_is_empty() {
        assert!(detect("", 0.0).is_empty());
    }

    #[test]
    fn clean_password_yields_no_recommendations() {
        assert!(detect("K9#mPw2$xQ7!vZ4&", 105.0).is_empty());
    }
}
