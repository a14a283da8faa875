// src/generators/password.rs
use log::{debug, warn};
use thiserror::Error;

use crate::models::{
    GenerationOptions, AMBIGUOUS, LOWERCASE, NUMBERS, SIMILAR, SYMBOLS, UPPERCASE,
};
use crate::random::{self, RandomError};

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("no character class selected")]
    NoClassSelected,

    #[error("requested password length is zero")]
    ZeroLength,

    #[error("the {class} class has no characters left after exclusion filtering")]
    EmptyFilteredClass { class: &'static str },

    #[error(transparent)]
    Random(#[from] RandomError),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

// A selected character class after exclusion filtering
struct Pool {
    name: &'static str,
    chars: Vec<char>,
}

// Build the filtered pools for the selected classes, in class order.
// A selected class that ends up empty is an error, not a silent skip.
fn selected_pools(options: &GenerationOptions) -> Result<Vec<Pool>> {
    let mut selected: Vec<(&'static str, &'static str)> = Vec::new();
    if options.include_uppercase {
        selected.push(("uppercase", UPPERCASE));
    }
    if options.include_lowercase {
        selected.push(("lowercase", LOWERCASE));
    }
    if options.include_numbers {
        selected.push(("numbers", NUMBERS));
    }
    if options.include_symbols {
        selected.push(("symbols", SYMBOLS));
    }

    if selected.is_empty() {
        return Err(GeneratorError::NoClassSelected);
    }

    let mut pools = Vec::with_capacity(selected.len());
    for (name, raw) in selected {
        let mut chars: Vec<char> = raw.chars().collect();
        if options.exclude_similar {
            chars.retain(|c| !SIMILAR.contains(*c));
        }
        // The ambiguous filter only applies to the symbol class
        if options.exclude_ambiguous && name == "symbols" {
            chars.retain(|c| !AMBIGUOUS.contains(*c));
        }
        if chars.is_empty() {
            return Err(GeneratorError::EmptyFilteredClass { class: name });
        }
        pools.push(Pool { name, chars });
    }

    Ok(pools)
}

/// Generate a random password satisfying the given options.
///
/// The output always has exactly `options.length` characters and, when the
/// length allows it, at least one character from every selected class.
/// Guaranteed characters are drawn first, the remainder is filled from the
/// union of all selected classes, and the whole sequence is shuffled so the
/// guaranteed characters are not predictably positioned.
pub fn generate(options: &GenerationOptions) -> Result<String> {
    if options.length == 0 {
        return Err(GeneratorError::ZeroLength);
    }

    let pools = selected_pools(options)?;

    // Union of the filtered classes. A character present in more than one
    // class keeps its duplicate entries and is sampled proportionally more
    // often.
    let charset: Vec<char> = pools.iter().flat_map(|p| p.chars.iter().copied()).collect();

    // One guaranteed character per selected class
    let mut chars: Vec<char> = Vec::with_capacity(options.length);
    for pool in &pools {
        chars.push(pool.chars[random::next_index(pool.chars.len())?]);
    }

    // A length below the class count cannot hold one character per class;
    // keep the first `length` guarantees and drop the rest.
    if chars.len() > options.length {
        warn!(
            "length {} is less than the {} selected classes, truncating guarantees",
            options.length,
            pools.len()
        );
        chars.truncate(options.length);
    }

    // Fill the remainder uniformly from the full charset
    while chars.len() < options.length {
        chars.push(charset[random::next_index(charset.len())?]);
    }

    // Fisher-Yates shuffle, driven by the same secure source
    for i in (1..chars.len()).rev() {
        let j = random::next_index(i + 1)?;
        chars.swap(i, j);
    }

    debug!(
        "generated a {}-character password from a {}-character pool",
        chars.len(),
        charset.len()
    );

    Ok(chars.into_iter().collect())
}
