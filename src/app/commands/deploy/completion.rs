//! Polling a workflow run until it completes.

use std::io::{self, Write};
use std::time::Duration;

use crate::domain::{AppError, Conclusion, format_duration};
use crate::ports::{Clock, GitHubPort};

/// How a run finished, and how long the poll waited for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub conclusion: Conclusion,
    /// Measured from the start of this poll, not from the push.
    pub elapsed: Duration,
}

/// View `run_id` every `interval` until its status is `completed`.
///
/// With `timeout = None` the poll never gives up.
pub fn wait_for_completion(
    github: &dyn GitHubPort,
    clock: &dyn Clock,
    run_id: u64,
    interval: Duration,
    timeout: Option<Duration>,
) -> Result<Completion, AppError> {
    let started = clock.elapsed();
    let mut progress = ProgressLine::default();

    loop {
        let state = github.run_state(run_id)?;
        let elapsed = clock.elapsed().saturating_sub(started);

        if state.status.is_completed() {
            progress.finish();
            let conclusion =
                state.conclusion.unwrap_or_else(|| Conclusion::Other("unknown".to_string()));
            return Ok(Completion { conclusion, elapsed });
        }

        if timeout.is_some_and(|limit| elapsed >= limit) {
            progress.finish();
            return Err(AppError::CompletionTimeout { run_id, waited_secs: elapsed.as_secs() });
        }

        progress.update(&format!("{} {}", state.status, format_duration(elapsed.as_secs())));
        clock.sleep(interval);
    }
}

/// Single console line rewritten in place.
#[derive(Default)]
struct ProgressLine {
    width: usize,
}

impl ProgressLine {
    fn update(&mut self, text: &str) {
        let line = format!("  ... {}", text);
        let pad = self.width.saturating_sub(line.chars().count());
        print!("\r{}{}", line, " ".repeat(pad));
        let _ = io::stdout().flush();
        self.width = self.width.max(line.chars().count());
    }

    fn finish(&mut self) {
        if self.width > 0 {
            println!();
            self.width = 0;
        }
    }
}
