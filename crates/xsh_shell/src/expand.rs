//! Variable expansion
//!
//! Rewrites each word independently, replacing every `$NAME` reference with
//! the looked-up value. The reference name is the maximal run of ASCII
//! alphanumeric/underscore characters after `$`, bounded in length. An
//! undefined name expands to the empty string, and a `$` with no following
//! name characters is an empty-name reference: it expands to the empty
//! string, so the `$` itself is dropped. Substituted values are not
//! re-scanned for further references.

use crate::environment::EnvironmentStore;

/// Longest variable name consumed after a `$`. Name characters beyond the
/// bound are left in place as literal text.
pub const MAX_VARIABLE_NAME_LENGTH: usize = 255;

/// Expand `$NAME` references in every word of a stage, in place.
pub fn expand_words(words: &mut [String], env: &EnvironmentStore) {
    for word in words.iter_mut() {
        if word.contains('$') {
            *word = expand_word(word, env);
        }
    }
}

/// Expand `$NAME` references in a single word.
pub fn expand_word(word: &str, env: &EnvironmentStore) -> String {
    let mut result = String::new();
    let mut rest = word;

    while let Some(dollar) = rest.find('$') {
        result.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];

        let name_len = after
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .take(MAX_VARIABLE_NAME_LENGTH)
            .count();
        let name = &after[..name_len];

        result.push_str(env.get(name).unwrap_or(""));
        rest = &after[name_len..];
    }

    result.push_str(rest);
    result
}

// ============================================================================
// Tests
// ============================================================================
