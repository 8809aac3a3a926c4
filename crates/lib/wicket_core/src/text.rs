//! Small text helpers shared across the write paths.

use rand::distr::Alphanumeric;
use rand::{Rng, rng};

/// Uppercase the first character of each space-delimited word.
///
/// Applied to role names and descriptions at write time so stored values
/// follow one display convention regardless of how they were submitted.
pub fn capitalize_words(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate an uppercase alphanumeric string of the given length.
pub fn random_alphanumeric(len: usize) -> String {
    rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(|c| (c as char).to_ascii_uppercase())
        .collect()
}
