use crate::core::worker::lock;
use std::sync::{Arc, Mutex};

const MAX_LINES: usize = 2000;
const WARN_MARK: &str = "] WARN ";

/// Timestamped lines shown in the log panel. Every line is also emitted through `tracing`.
#[derive(Clone, Default)]
pub struct RunLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self, message: impl AsRef<str>) {
        let message = message.as_ref();
        tracing::info!("{}", message);
        self.push(message);
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        let message = message.as_ref();
        tracing::warn!("{}", message);
        self.push(&format!("WARN {}", message));
    }

    fn push(&self, message: &str) {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        let mut lines = lock(&self.lines);
        lines.push(format!("[{}] {}", stamp, message));
        if lines.len() > MAX_LINES {
            let excess = lines.len() - MAX_LINES;
            lines.drain(..excess);
        }
    }

    pub fn snapshot(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }

    pub fn clear(&self) {
        lock(&self.lines).clear();
    }

    pub fn is_warning(line: &str) -> bool {
        line.contains(WARN_MARK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_stamped_and_shared() {
        let log = RunLog::new();
        let shared = log.clone();
        shared.info("Terrain Complete");
        shared.warn("Failed to delete");

        let lines = log.snapshot();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("Terrain Complete"));
        assert!(lines[1].ends_with("WARN Failed to delete"));
        assert!(!RunLog::is_warning(&lines[0]));
        assert!(RunLog::is_warning(&lines[1]));
    }

    #[test]
    fn test_log_is_bounded() {
        let log = RunLog::new();
        for i in 0..(MAX_LINES + 10) {
            log.info(format!("line {}", i));
        }
        let lines = log.snapshot();
        assert_eq!(lines.len(), MAX_LINES);
        assert!(lines[0].ends_with("line 10"));
    }
}
