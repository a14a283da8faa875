// tests/end_to_end.rs
//
// Exercises the public API the way a front-end would: generate a password,
// then feed it back into the analyzer.

use passforge::{
    analyze, analyze_extended, generate, GenerationOptions, PasswordHistory, StrengthLevel,
};

#[test]
fn generated_passwords_analyze_as_strong() {
    let options = GenerationOptions {
        length: 20,
        ..GenerationOptions::default()
    };

    for _ in 0..10 {
        let password = generate(&options).unwrap();
        let report = analyze(&password);

        assert_eq!(report.length, 20);
        assert!(report.has_uppercase);
        assert!(report.has_lowercase);
        assert!(report.has_numbers);
        assert!(report.has_symbols);
        // 20 chars over a 94-character alphabet clears both entropy bonuses
        assert!(report.entropy_bits > 60.0);
        assert!(report.level >= StrengthLevel::Good, "level {:?}", report.level);
    }
}

#[test]
fn extended_analysis_of_generated_password_has_no_critical_findings() {
    let options = GenerationOptions {
        length: 24,
        ..GenerationOptions::default()
    };

    for _ in 0..10 {
        let password = generate(&options).unwrap();
        let extended = analyze_extended(&password);
        assert!(extended
            .recommendations
            .iter()
            .all(|r| r.severity != passforge::Severity::Critical));
    }
}

#[test]
fn front_end_history_keeps_recent_unique_passwords() {
    // The history a front-end would keep alongside the generator: bounded,
    // unique, newest first.
    let options = GenerationOptions::default();
    let mut history = PasswordHistory::new();

    let mut generated = Vec::new();
    for _ in 0..12 {
        let password = generate(&options).unwrap();
        history.push(&password);
        generated.push(password);
    }

    // 16-char passwords over a 94-char pool never collide in practice
    assert_eq!(history.len(), 10);
    assert_eq!(history.iter().next(), generated.last().map(String::as_str));
}

#[test]
fn analyzer_accepts_arbitrary_strings() {
    // Not just generator output: unicode, whitespace, control characters
    for input in ["", " ", "\t\n", "héllo wörld", "密码密码", "a"] {
        let report = analyze(input);
        assert!(report.score <= 100);
    }
}
