//! Pipeline splitting
//!
//! Partitions one line's token stream into per-stage argument vectors on
//! `|`. Empty stages (adjacent, leading, or trailing `|`) are permitted here
//! and rejected by the executor as a resolution failure with an empty
//! program name.

/// Upper bound on the number of stages in one pipeline.
pub const MAX_PIPELINE_STAGES: usize = 20;

/// Split a token sequence into pipeline stages.
///
/// Each `|` token terminates the current stage and starts a new one; a
/// sequence with no `|` yields exactly one stage.
pub fn split_on_pipe(words: Vec<String>) -> Vec<Vec<String>> {
    let mut stages = Vec::new();
    let mut current = Vec::new();

    for word in words {
        if word == "|" {
            stages.push(std::mem::take(&mut current));
        } else {
            current.push(word);
        }
    }
    stages.push(current);

    stages
}

// ============================================================================
// Tests
// ============================================================================
