// src/cli/handlers.rs
use anyhow::Result;
use log::debug;
use serde::Serialize;

use crate::analyzer;
use crate::cli::commands::CliCommand;
use crate::config::Config;
use crate::generators;
use crate::models::{ExtendedReport, GenerationOptions, StrengthReport};

// JSON shape for one generated password
#[derive(Serialize)]
struct GeneratedOutput {
    password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<StrengthReport>,
}

pub fn dispatch(command: CliCommand, config: &Config, json: bool) -> Result<()> {
    match command {
        CliCommand::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
            exclude_similar,
            exclude_ambiguous,
            count,
            analyze,
        } => {
            let mut options = config.generation_defaults();
            if let Some(length) = length {
                options.length = length;
            }
            options.include_uppercase = !no_uppercase;
            options.include_lowercase = !no_lowercase;
            options.include_numbers = !no_numbers;
            options.include_symbols = !no_symbols;
            options.exclude_similar |= exclude_similar;
            options.exclude_ambiguous |= exclude_ambiguous;
            debug!("generating {} password(s) with {:?}", count, options);

            handle_generate(&options, count, analyze, json)
        }
        CliCommand::Analyze { password, extended } => handle_analyze(&password, extended, json),
    }
}

fn handle_generate(options: &GenerationOptions, count: usize, analyze: bool, json: bool) -> Result<()> {
    let mut outputs = Vec::with_capacity(count);

    for _ in 0..count {
        let password = generators::generate(options)?;
        let report = analyze.then(|| analyzer::analyze(&password));
        outputs.push(GeneratedOutput { password, report });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    for output in &outputs {
        println!("{}", output.password);
        if let Some(report) = &output.report {
            print_report(report);
        }
    }
    Ok(())
}

fn handle_analyze(password: &str, extended: bool, json: bool) -> Result<()> {
    if extended {
        let report = analyzer::analyze_extended(password);
        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_extended(&report);
        }
    } else {
        let report = analyzer::analyze(password);
        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }
    }
    Ok(())
}

fn print_report(report: &StrengthReport) {
    println!("  Length:  {}", report.length);
    println!(
        "  Classes: uppercase={} lowercase={} numbers={} symbols={}",
        report.has_uppercase, report.has_lowercase, report.has_numbers, report.has_symbols
    );
    println!("  Entropy: {:.1} bits", report.entropy_bits);
    println!("  Score:   {}/100 ({})", report.score, report.level);
    for suggestion in &report.suggestions {
        println!("  - {}", suggestion);
    }
}

fn print_extended(extended: &ExtendedReport) {
    print_report(&extended.report);
    for recommendation in &extended.recommendations {
        println!("  [{}] {}", recommendation.severity, recommendation.message);
    }
}
