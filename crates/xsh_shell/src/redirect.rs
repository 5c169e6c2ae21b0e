//! Redirection and background-marker analysis
//!
//! Scans a single stage's word list from the end backward, extracting
//! `> file`, `< file` and `&` operator tokens. Extracted tokens are removed
//! and the remaining words are compacted, preserving their relative order.
//! Filenames are taken verbatim; they are removed before variable expansion
//! runs and are never expanded.

use std::mem;

/// Per-pipeline execution options derived from the last stage's words.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Redirection source for the last stage's standard input.
    pub input_file: Option<String>,
    /// Redirection target for the last stage's standard output.
    pub output_file: Option<String>,
    /// Launch the pipeline without waiting for its stages to exit.
    pub background: bool,
}

/// Extract redirection and background operators from a stage's words.
///
/// The scan walks right to left. Every `&` sets the background flag and is
/// removed. A `>` or `<` whose following word is still present captures that
/// word as the output or input file and removes both tokens; when operators
/// repeat, each match overwrites the captured file, so the leftmost
/// occurrence wins. A `>` or `<` with nothing usable after it is left in
/// place as an ordinary word, not treated as an error here.
pub fn analyze_redirections(words: &mut Vec<String>) -> ExecutionOptions {
    let mut opts = ExecutionOptions::default();
    let mut slots: Vec<Option<String>> = mem::take(words).into_iter().map(Some).collect();

    let mut pos = slots.len() as isize - 1;
    while pos >= 0 {
        let index = pos as usize;
        let word = match slots[index].as_deref() {
            Some(word) => word,
            None => {
                pos -= 1;
                continue;
            }
        };

        match word {
            "&" => {
                opts.background = true;
                slots[index] = None;
                pos -= 1;
            }
            ">" if slots.get(index + 1).is_some_and(|next| next.is_some()) => {
                opts.output_file = slots[index + 1].take();
                slots[index] = None;
                pos -= 2;
            }
            "<" if slots.get(index + 1).is_some_and(|next| next.is_some()) => {
                opts.input_file = slots[index + 1].take();
                slots[index] = None;
                pos -= 2;
            }
            _ => pos -= 1,
        }
    }

    *words = slots.into_iter().flatten().collect();
    opts
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn extracts_output_file_and_background() {
        let mut stage = words(&["cmd", "arg", ">", "out.txt", "&"]);
        let opts = analyze_redirections(&mut stage);
        assert_eq!(stage, vec!["cmd", "arg"]);
        assert_eq!(opts.output_file.as_deref(), Some("out.txt"));
        assert_eq!(opts.input_file, None);
        assert!(opts.background);
    }

    #[test]
    fn extracts_input_and_output_in_any_order() {
        let mut stage = words(&["sort", ">", "out", "<", "in"]);
        let opts = analyze_redirections(&mut stage);
        assert_eq!(stage, vec!["sort"]);
        assert_eq!(opts.input_file.as_deref(), Some("in"));
        assert_eq!(opts.output_file.as_deref(), Some("out"));
        assert!(!opts.background);
    }

    #[test]
    fn plain_stage_is_untouched() {
        let mut stage = words(&["cmd", "a", "b"]);
        let opts = analyze_redirections(&mut stage);
        assert_eq!(stage, vec!["cmd", "a", "b"]);
        assert_eq!(opts, ExecutionOptions::default());
    }

    #[test]
    fn leftmost_duplicate_operator_wins() {
        let mut stage = words(&["cmd", ">", "first", ">", "second"]);
        let opts = analyze_redirections(&mut stage);
        assert_eq!(stage, vec!["cmd"]);
        assert_eq!(opts.output_file.as_deref(), Some("first"));
    }

    #[test]
    fn trailing_operator_without_argument_stays_a_word() {
        let mut stage = words(&["cmd", "<"]);
        let opts = analyze_redirections(&mut stage);
        assert_eq!(stage, vec!["cmd", "<"]);
        assert_eq!(opts.input_file, None);
    }

    #[test]
    fn operator_followed_by_removed_token_stays_a_word() {
        // The & is removed first, leaving > with no following word.
        let mut stage = words(&["cmd", ">", "&"]);
        let opts = analyze_redirections(&mut stage);
        assert_eq!(stage, vec!["cmd", ">"]);
        assert_eq!(opts.output_file, None);
        assert!(opts.background);
    }

    #[test]
    fn background_marker_is_removed_wherever_it_appears() {
        let mut stage = words(&["cmd", "&", "arg"]);
        let opts = analyze_redirections(&mut stage);
        assert_eq!(stage, vec!["cmd", "arg"]);
        assert!(opts.background);
    }
}
