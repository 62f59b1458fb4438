use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a run fetches and renders. A silent reporter
/// swallows everything, which keeps non-interactive output clean.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new_spinner(message: &str, silent: bool) -> Self {
        if silent {
            return Self::silent();
        }

        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
        }
    }

    fn silent() -> Self {
        Self { progress_bar: None }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.to_string());
        }
    }

    pub fn finish_with_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(message.to_string());
        }
    }

    pub fn abandon_with_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.abandon_with_message(message.to_string());
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            if !pb.is_finished() {
                pb.finish_and_clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_reporter_is_inert() {
        let progress = ProgressReporter::new_spinner("Fetching", true);
        assert!(progress.progress_bar.is_none());

        progress.set_message("still silent");
        progress.abandon_with_message("failed");
        progress.finish_with_message("done");
    }

    #[test]
    fn test_spinner_reporter() {
        let progress = ProgressReporter::new_spinner("Fetching", false);
        assert!(progress.progress_bar.is_some());

        progress.finish_with_message("Fetched");
        assert!(progress
            .progress_bar
            .as_ref()
            .is_some_and(|pb| pb.is_finished()));
    }
}
