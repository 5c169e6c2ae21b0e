//! Input line tokenizer
//!
//! Splits a raw input line into words on runs of whitespace. There is no
//! quoting or escaping; space, tab, carriage return and newline are always
//! delimiters.

use tracing::debug;

/// Upper bound on the number of words taken from one input line.
pub const MAX_ARGUMENTS: usize = 128;

/// Split a line into words.
///
/// Empty or all-whitespace input yields an empty sequence. Words beyond the
/// fixed maximum are dropped silently; the bound is defensive, not a
/// user-facing error.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut words = Vec::new();

    for word in line
        .split([' ', '\t', '\r', '\n'])
        .filter(|w| !w.is_empty())
    {
        if words.len() == MAX_ARGUMENTS - 1 {
            debug!(limit = MAX_ARGUMENTS - 1, "word limit reached, truncating input line");
            break;
        }
        words.push(word.to_string());
    }

    words
}

// ============================================================================
// Tests
// ============================================================================
