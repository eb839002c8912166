use crate::automation::checkpoint::{Checkpoint, CheckpointGate};
use crate::automation::collector::RunFolder;
use crate::automation::script::{whole_millis, Script, Step};
use crate::core::desktop::{Desktop, Key};
use crate::core::run_log::RunLog;
use crate::core::worker::lock;
use crate::error::{AutomationError, Result};
use crate::settings::{RunConfiguration, ToolSettings};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Longest uninterrupted sleep; Stop is noticed within this slice.
const WAIT_SLICE: Duration = Duration::from_millis(100);

/// Everything one run needs, owned by the worker thread.
pub struct RunContext {
    pub config: RunConfiguration,
    pub tools: ToolSettings,
    pub folder: RunFolder,
    pub log: RunLog,
    desktop: Box<dyn Desktop>,
    running: Arc<Mutex<bool>>,
    status: Arc<Mutex<String>>,
    gate: CheckpointGate,
}

impl RunContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: RunConfiguration,
        tools: ToolSettings,
        folder: RunFolder,
        desktop: Box<dyn Desktop>,
        running: Arc<Mutex<bool>>,
        status: Arc<Mutex<String>>,
        log: RunLog,
        gate: CheckpointGate,
    ) -> Self {
        Self {
            config,
            tools,
            folder,
            log,
            desktop,
            running,
            status,
            gate,
        }
    }

    pub fn desktop(&mut self) -> &mut dyn Desktop {
        self.desktop.as_mut()
    }

    pub fn is_running(&self) -> bool {
        *lock(&self.running)
    }

    pub fn ensure_running(&self) -> Result<()> {
        if self.is_running() {
            Ok(())
        } else {
            Err(AutomationError::Cancelled)
        }
    }

    pub fn set_status(&self, text: impl AsRef<str>) {
        *lock(&self.status) = text.as_ref().to_string();
    }

    /// Update the status line and log the same text.
    pub fn report(&self, text: impl AsRef<str>) {
        let text = text.as_ref();
        self.set_status(text);
        self.log.info(text);
    }

    /// Sleep in short slices, scaled by the pacing setting, bailing out on Stop.
    pub fn wait(&mut self, duration: Duration) -> Result<()> {
        let scale = self.tools.step_delay_scale;
        let mut remaining = if scale.is_finite() && scale > 0.0 && scale != 1.0 {
            duration.mul_f64(f64::from(scale))
        } else {
            duration
        };
        loop {
            self.ensure_running()?;
            if remaining.is_zero() {
                return Ok(());
            }
            let slice = remaining.min(WAIT_SLICE);
            self.desktop.pause(slice);
            remaining -= slice;
        }
    }

    pub fn wait_secs(&mut self, seconds: f32) -> Result<()> {
        self.wait(whole_millis(seconds))
    }

    /// Play a script step by step. Stop is checked before every step.
    pub fn play(&mut self, script: Script) -> Result<()> {
        for step in script {
            self.ensure_running()?;
            match step {
                Step::Note(message) => self.report(message),
                Step::Wait(duration) => self.wait(duration)?,
                Step::MoveTo(point) => self.desktop.move_to(point)?,
                Step::Click(point) => self.desktop.left_click(point)?,
                Step::RightClick(point) => self.desktop.right_click(point)?,
                Step::Drag { to, seconds } => self.desktop.drag_to(to, seconds)?,
                Step::Type(text) => self.desktop.type_text(&text)?,
                Step::Press { key, times } => {
                    for _ in 0..times {
                        self.desktop.press(key)?;
                    }
                }
                Step::Chord(keys) => self.desktop.chord(&keys)?,
            }
        }
        Ok(())
    }

    /// Pause for the operator. Returns the entry text for checkpoints that take one.
    pub fn checkpoint(&mut self, checkpoint: Checkpoint, entry: &str) -> Result<Option<String>> {
        self.set_status(format!("Waiting: {}", checkpoint.title()));
        self.log.info(format!("Checkpoint: {}", checkpoint.title()));
        let answer = self.gate.ask(checkpoint, entry, &self.running)?;
        self.log.info(format!("Continuing after {}", checkpoint.title()));
        Ok(answer)
    }

    pub fn notify(&self, checkpoint: Checkpoint) {
        self.gate.notify(checkpoint);
    }

    /// Win+Up on the focused window unless it is already maximized.
    pub fn maximize_foreground(&mut self) -> Result<()> {
        match self.desktop.foreground_is_maximized() {
            Some(true) => self.wait_secs(5.0),
            _ => {
                self.wait_secs(5.0)?;
                self.desktop.chord(&[Key::Win, Key::Up])
            }
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use crate::automation::checkpoint::{checkpoint_channel, CheckpointHandle};
    use crate::core::desktop::fake::RecordingDesktop;
    use std::path::Path;

    /// A context over a recording desktop; `desktop` is a probe sharing its recording.
    pub struct Harness {
        pub ctx: RunContext,
        pub desktop: RecordingDesktop,
        pub handle: CheckpointHandle,
        pub running: Arc<Mutex<bool>>,
    }

    impl Harness {
        pub fn new(config: RunConfiguration, root: &Path, desktop: RecordingDesktop) -> Self {
            let probe = desktop.clone();
            let running = Arc::new(Mutex::new(true));
            let status = Arc::new(Mutex::new(String::new()));
            let (handle, gate) = checkpoint_channel();
            let folder = RunFolder {
                root: root.to_path_buf(),
                started: chrono::NaiveDate::from_ymd_opt(2024, 6, 28)
                    .and_then(|d| d.and_hms_opt(9, 5, 0))
                    .unwrap_or_default(),
                inputs: root.join("User Input Files"),
                created: true,
            };
            let ctx = RunContext::new(
                config,
                ToolSettings::default(),
                folder,
                Box::new(desktop),
                Arc::clone(&running),
                status,
                RunLog::new(),
                gate,
            );
            Self {
                ctx,
                desktop: probe,
                handle,
                running,
            }
        }
    }
}
