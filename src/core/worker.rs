use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

/// Lock a shared flag or string even if a previous holder panicked.
pub fn lock<T>(shared: &Mutex<T>) -> MutexGuard<'_, T> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct Worker {
    running: Arc<Mutex<bool>>,
    status: Arc<Mutex<String>>,
}

impl Default for Worker {
    fn default() -> Self {
        Self {
            running: Arc::new(Mutex::new(false)),
            status: Arc::new(Mutex::new("Ready".to_string())),
        }
    }
}

impl Worker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start<F>(&self, task: F)
    where
        F: FnOnce(Arc<Mutex<bool>>, Arc<Mutex<String>>) + Send + 'static,
    {
        *lock(&self.running) = true;

        // Clone for the thread
        let running_clone = Arc::clone(&self.running);
        let status_clone = Arc::clone(&self.status);

        thread::spawn(move || {
            task(running_clone, status_clone);
        });
    }

    pub fn stop(&self) {
        self.set_status("Stopping...");
        *lock(&self.running) = false;
    }

    pub fn is_running(&self) -> bool {
        *lock(&self.running)
    }

    pub fn get_status(&self) -> String {
        lock(&self.status).clone()
    }

    pub fn set_status(&self, text: &str) {
        *lock(&self.status) = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_task_sees_stop_and_reports_status() {
        let worker = Worker::new();
        worker.start(|running, status| {
            let deadline = Instant::now() + Duration::from_secs(5);
            while *lock(&running) && Instant::now() < deadline {
                thread::sleep(Duration::from_millis(5));
            }
            *lock(&status) = "Stopped by user".to_string();
        });
        assert!(worker.is_running());

        worker.stop();
        let deadline = Instant::now() + Duration::from_secs(5);
        while worker.get_status() != "Stopped by user" && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!worker.is_running());
        assert_eq!(worker.get_status(), "Stopped by user");
    }
}
