// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Password length (defaults to the configured length)
        #[arg(long, short = 'l')]
        length: Option<usize>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_numbers: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// Drop characters that are easily confused (0Oo1lI)
        #[arg(long)]
        exclude_similar: bool,

        /// Drop symbols that are awkward in shells and URLs
        #[arg(long)]
        exclude_ambiguous: bool,

        /// Number of passwords to generate
        #[arg(long, short = 'c', default_value_t = 1)]
        count: usize,

        /// Print a strength report for each generated password
        #[arg(long)]
        analyze: bool,
    },

    /// Analyze the strength of a password
    Analyze {
        /// The password to analyze
        #[arg(required = true)]
        password: String,

        /// Include pattern detection and recommendations
        #[arg(long)]
        extended: bool,
    },
}
