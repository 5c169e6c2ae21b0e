//! Pipeline execution engine
//!
//! Drives one submitted line end to end: tokenize, split into stages,
//! analyze the final stage's redirection/background operators, expand
//! variables, then either run a single-stage builtin in-process or resolve,
//! launch, wire and supervise the external process chain.
//!
//! Every OS resource involved - pipe endpoints, redirection files, process
//! handles - is an owned value released on every exit path by drop, so an
//! abort cannot leak a handle. A failure mid-pipeline never retracts stages
//! that were already launched; they keep running on their own.

use std::fs::File;
use std::io::{self, PipeReader, PipeWriter, Write};
use std::process::{Child, Command, Stdio};

use tracing::debug;

use crate::builtins::{find_builtin, BuiltinContext};
use crate::errors::ShellError;
use crate::expand::expand_words;
use crate::pipeline::{split_on_pipe, MAX_PIPELINE_STAGES};
use crate::redirect::{analyze_redirections, ExecutionOptions};
use crate::state::ShellState;
use crate::tokenizer::tokenize;
use crate::which::resolve_command_path;

// ============================================================================
// Public API
// ============================================================================

/// Execute one input line, returning the pipeline's exit status.
///
/// Failures are reported to standard error and scoped to this line; no error
/// here terminates the shell session. A foreground pipeline blocks the
/// caller until every stage exits.
pub fn execute_line(line: &str, state: &mut ShellState) -> i32 {
    let words = tokenize(line);
    if words.is_empty() {
        return 0;
    }

    match run_pipeline(split_on_pipe(words), state) {
        Ok(code) => code,
        Err(err) => {
            let _ = writeln!(io::stderr(), "{err}");
            1
        }
    }
}

// ============================================================================
// Pipeline Preparation
// ============================================================================

fn run_pipeline(mut stages: Vec<Vec<String>>, state: &mut ShellState) -> Result<i32, ShellError> {
    if stages.len() > MAX_PIPELINE_STAGES {
        return Err(ShellError::TooManyStages {
            count: stages.len(),
        });
    }

    // Redirection operators are recognized on the final stage only. Its
    // filename words are removed here, before expansion, and stay unexpanded.
    let opts = match stages.last_mut() {
        Some(last) => analyze_redirections(last),
        None => return Ok(0),
    };

    for stage in &mut stages {
        expand_words(stage, state.env());
    }

    // Only a single-stage pipeline is checked against the builtin set; a
    // builtin name elsewhere goes through path resolution like any external
    // program. Builtins ignore redirection and background options.
    if stages.len() == 1 {
        if let Some(builtin) = stages[0].first().and_then(|name| find_builtin(name)) {
            let mut stdout = io::stdout();
            let mut stderr = io::stderr();
            let code = builtin.execute(BuiltinContext {
                args: &stages[0],
                env: state.env_mut(),
                stdout: &mut stdout,
                stderr: &mut stderr,
            });
            return Ok(code);
        }
    }

    launch_stages(&stages, &opts, state)
}

// ============================================================================
// Stage Launch and Supervision
// ============================================================================

fn launch_stages(
    stages: &[Vec<String>],
    opts: &ExecutionOptions,
    state: &ShellState,
) -> Result<i32, ShellError> {
    let stage_count = stages.len();

    // One endpoint pair per adjacent stage boundary, allocated before any
    // stage launches.
    let mut pipes: Vec<(Option<PipeReader>, Option<PipeWriter>)> =
        Vec::with_capacity(stage_count.saturating_sub(1));
    for _ in 1..stage_count {
        let (reader, writer) = io::pipe().map_err(ShellError::PipeCreation)?;
        pipes.push((Some(reader), Some(writer)));
    }

    let mut children: Vec<Child> = Vec::with_capacity(stage_count);

    // Read end displaced when an input-file redirection overrides the last
    // stage's piped stdin. The parent keeps it and drains it so the upstream
    // stage can run to completion with its output discarded.
    let mut displaced_reader: Option<PipeReader> = None;

    for (index, stage) in stages.iter().enumerate() {
        let is_last = index == stage_count - 1;
        let name = stage.first().map(String::as_str).unwrap_or("");
        let program =
            resolve_command_path(name, state.search_paths()).ok_or_else(|| {
                ShellError::CommandNotFound {
                    name: name.to_string(),
                }
            })?;

        let mut command = Command::new(&program);
        command.args(stage.iter().skip(1));

        if index > 0 {
            if let Some(reader) = pipes[index - 1].0.take() {
                if is_last && opts.input_file.is_some() {
                    displaced_reader = Some(reader);
                } else {
                    command.stdin(Stdio::from(reader));
                }
            }
        }
        if !is_last {
            if let Some(writer) = pipes[index].1.take() {
                command.stdout(Stdio::from(writer));
            }
        }

        if is_last {
            // Redirection applies to the final stage only and overrides its
            // piped input; see DESIGN.md.
            if let Some(path) = opts.input_file.as_deref() {
                let file = File::open(path).map_err(|source| ShellError::InputFileOpen {
                    path: path.to_string(),
                    source,
                })?;
                command.stdin(Stdio::from(file));
            }
            if let Some(path) = opts.output_file.as_deref() {
                let file = File::create(path).map_err(|source| ShellError::OutputFileOpen {
                    path: path.to_string(),
                    source,
                })?;
                command.stdout(Stdio::from(file));
            }
        }

        let child = command.spawn().map_err(|source| ShellError::Launch {
            command_line: stage.join(" "),
            source,
        })?;
        debug!(program = %program.display(), pid = child.id(), "launched stage");
        children.push(child);

        // `command` drops here, releasing the parent's copies of the pipe
        // ends handed to this child. A retained write end would stall
        // end-of-stream detection downstream.
    }

    if opts.background {
        // Detach: handles are released without waiting, and the shell does
        // not track or report these processes' eventual exit status.
        for child in &children {
            debug!(pid = child.id(), "detached background stage");
        }
        return Ok(0);
    }

    // Output displaced by an input-file redirection is discarded, not
    // failed: drain it to end-of-stream so the upstream stage never blocks
    // on a full pipe and exits normally.
    if let Some(mut reader) = displaced_reader {
        let _ = io::copy(&mut reader, &mut io::sink());
    }

    let mut exit_code = 0;
    for mut child in children {
        match child.wait() {
            Ok(status) => {
                if exit_code == 0 && !status.success() {
                    exit_code = status.code().unwrap_or(1);
                }
            }
            Err(err) => {
                debug!(%err, "wait for stage failed");
                if exit_code == 0 {
                    exit_code = 1;
                }
            }
        }
    }
    Ok(exit_code)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn system_state() -> ShellState {
        ShellState::from_system()
    }

    #[test]
    fn empty_line_is_a_successful_noop() {
        let mut state = system_state();
        assert_eq!(execute_line("", &mut state), 0);
        assert_eq!(execute_line("   \t ", &mut state), 0);
    }

    #[test]
    fn set_and_unset_route_to_builtins() {
        let mut state = system_state();
        assert_eq!(execute_line("set FOO bar", &mut state), 0);
        assert_eq!(state.env().get("FOO"), Some("bar"));

        assert_eq!(execute_line("unset FOO", &mut state), 0);
        assert_eq!(state.env().get("FOO"), None);
    }

    #[test]
    fn builtin_dispatch_is_case_insensitive() {
        let mut state = system_state();
        assert_eq!(execute_line("SET Foo value", &mut state), 0);
        assert_eq!(state.env().get("foo"), Some("value"));
    }

    #[test]
    fn unknown_command_fails_the_pipeline() {
        let mut state = system_state();
        assert_eq!(execute_line("definitely_missing_xyz_123", &mut state), 1);
    }

    #[test]
    fn empty_stage_is_a_resolution_failure() {
        let mut state = system_state();
        assert_eq!(execute_line("|", &mut state), 1);
    }

    #[test]
    fn too_many_stages_is_rejected() {
        let mut state = system_state();
        let line = vec!["x"; MAX_PIPELINE_STAGES + 1].join(" | ");
        assert_eq!(execute_line(&line, &mut state), 1);
    }

    #[cfg(unix)]
    mod processes {
        use super::*;
        use pretty_assertions::assert_eq;
        use std::fs;

        #[test]
        fn two_stage_pipeline_moves_every_line() {
            let dir = tempfile::tempdir().unwrap();
            let out = dir.path().join("count");
            let mut state = system_state();

            let line = format!("seq 5 | wc -l > {}", out.display());
            assert_eq!(execute_line(&line, &mut state), 0);
            assert_eq!(fs::read_to_string(&out).unwrap().trim(), "5");
        }

        #[test]
        fn pipeline_is_deterministic_across_runs() {
            let dir = tempfile::tempdir().unwrap();
            let out = dir.path().join("count");
            let mut state = system_state();

            for _ in 0..10 {
                let line = format!("seq 100 | wc -l > {}", out.display());
                assert_eq!(execute_line(&line, &mut state), 0);
                assert_eq!(fs::read_to_string(&out).unwrap().trim(), "100");
            }
        }

        #[test]
        fn variable_expansion_reaches_external_stages() {
            let dir = tempfile::tempdir().unwrap();
            let out = dir.path().join("count");
            let mut state = system_state();

            assert_eq!(execute_line("set COUNT 4", &mut state), 0);
            let line = format!("seq $COUNT | wc -l > {}", out.display());
            assert_eq!(execute_line(&line, &mut state), 0);
            assert_eq!(fs::read_to_string(&out).unwrap().trim(), "4");
        }

        #[test]
        fn output_redirection_truncates_and_creates() {
            let dir = tempfile::tempdir().unwrap();
            let out = dir.path().join("numbers");
            let mut state = system_state();

            let line = format!("seq 3 > {}", out.display());
            assert_eq!(execute_line(&line, &mut state), 0);
            assert_eq!(fs::read_to_string(&out).unwrap(), "1\n2\n3\n");
        }

        #[test]
        fn input_redirection_feeds_the_stage() {
            let dir = tempfile::tempdir().unwrap();
            let input = dir.path().join("input");
            let out = dir.path().join("count");
            fs::write(&input, "a\nb\nc\n").unwrap();
            let mut state = system_state();

            let line = format!("wc -l < {} > {}", input.display(), out.display());
            assert_eq!(execute_line(&line, &mut state), 0);
            assert_eq!(fs::read_to_string(&out).unwrap().trim(), "3");
        }

        #[test]
        fn input_redirect_on_last_stage_overrides_piped_input() {
            let dir = tempfile::tempdir().unwrap();
            let input = dir.path().join("input");
            let out = dir.path().join("count");
            fs::write(&input, "x\ny\n").unwrap();
            let mut state = system_state();

            let line = format!("seq 5 | wc -l < {} > {}", input.display(), out.display());
            assert_eq!(execute_line(&line, &mut state), 0);
            // The last stage read the file, not the pipe; the upstream
            // stage's output is discarded.
            assert_eq!(fs::read_to_string(&out).unwrap().trim(), "2");
        }

        #[test]
        fn displaced_upstream_output_is_drained() {
            let dir = tempfile::tempdir().unwrap();
            let input = dir.path().join("input");
            let out = dir.path().join("count");
            fs::write(&input, "only\n").unwrap();
            let mut state = system_state();

            // Upstream output well past the pipe buffer size must not stall
            // the pipeline or fail it.
            let line = format!(
                "seq 200000 | wc -l < {} > {}",
                input.display(),
                out.display()
            );
            assert_eq!(execute_line(&line, &mut state), 0);
            assert_eq!(fs::read_to_string(&out).unwrap().trim(), "1");
        }

        #[test]
        fn missing_input_file_aborts_before_launch() {
            let dir = tempfile::tempdir().unwrap();
            let out = dir.path().join("marker");
            let mut state = system_state();

            let line = format!(
                "wc -l < {}/no_such_input > {}",
                dir.path().display(),
                out.display()
            );
            assert_eq!(execute_line(&line, &mut state), 1);
        }

        #[test]
        fn failed_first_stage_launches_nothing() {
            let dir = tempfile::tempdir().unwrap();
            let marker = dir.path().join("marker");
            let mut state = system_state();

            let line = format!("definitely_missing_xyz_123 | touch {}", marker.display());
            assert_eq!(execute_line(&line, &mut state), 1);
            assert!(!marker.exists());
        }

        #[test]
        fn nonzero_stage_exit_fails_the_pipeline() {
            let mut state = system_state();
            assert_ne!(execute_line("false", &mut state), 0);
            assert_eq!(execute_line("true", &mut state), 0);
        }

        #[test]
        fn background_pipeline_returns_without_waiting() {
            let mut state = system_state();
            assert_eq!(execute_line("sleep 0 &", &mut state), 0);
        }
    }
}
