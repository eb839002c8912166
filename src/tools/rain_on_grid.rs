use crate::automation::checkpoint::{
    checkpoint_channel, Checkpoint, CheckpointGate, CheckpointHandle, CheckpointReply,
};
use crate::automation::collector::RunFolder;
use crate::automation::context::RunContext;
use crate::core::desktop::Desktop;
use crate::core::hotkey::hotkey_label;
use crate::core::input::native_desktop;
use crate::core::run_log::RunLog;
use crate::core::worker::{lock, Worker};
use crate::error::{AutomationError, Result};
use crate::phases::{cleanup::CleanupReport, run_all};
use crate::settings::{AppSettings, RunConfiguration, ToolSettings};
use crate::tools::r#trait::Tool;
use crate::ui::checkpoint::{render_checkpoint, CheckpointUiAction};
use crate::ui::run_panel::{render_confirmation, render_run_panel, RunUiAction};
use chrono::NaiveDateTime;
use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub struct RainOnGridTool {
    // Runtime state (Worker)
    worker: Worker,
    log: RunLog,
    checkpoint: Option<CheckpointHandle>,
    last_run: Arc<Mutex<Option<PathBuf>>>,

    // UI state
    confirm_open: bool,
    problems: Option<String>,
    checkpoint_entry: String,
    checkpoint_error: Option<String>,
    shown_checkpoint: Option<Checkpoint>,
}

impl Default for RainOnGridTool {
    fn default() -> Self {
        Self {
            worker: Worker::new(),
            log: RunLog::new(),
            checkpoint: None,
            last_run: Arc::new(Mutex::new(None)),
            confirm_open: false,
            problems: None,
            checkpoint_entry: String::new(),
            checkpoint_error: None,
            shown_checkpoint: None,
        }
    }
}

impl Tool for RainOnGridTool {
    fn stop(&mut self) {
        if !self.worker.is_running() {
            return;
        }
        self.worker.stop();
        self.log.warn("Stop requested");
    }

    fn is_running(&self) -> bool {
        self.worker.is_running()
    }

    fn get_status(&self) -> String {
        self.worker.get_status()
    }

    fn start(&mut self, settings: &AppSettings) {
        if self.worker.is_running() {
            return;
        }
        if let Err(problems) = settings.run.validate() {
            self.worker.set_status("Input Error");
            self.problems = Some(problems);
            return;
        }
        self.problems = None;
        self.launch(settings.run.clone(), settings.tools.clone());
    }

    fn update(&mut self, _ctx: &egui::Context, ui: &mut egui::Ui, settings: &mut AppSettings) {
        let is_running = self.worker.is_running();
        let run_folder = self.last_run_folder();

        let action = render_run_panel(
            ui,
            is_running,
            self.problems.as_deref(),
            run_folder.as_deref(),
            &hotkey_label(&settings.tools.abort_hotkey),
        );

        match action {
            RunUiAction::RequestStart => match settings.run.validate() {
                Ok(()) => {
                    self.problems = None;
                    self.confirm_open = true;
                }
                Err(problems) => {
                    self.worker.set_status("Input Error");
                    self.problems = Some(problems);
                }
            },
            RunUiAction::Stop => self.stop(),
            _ => {}
        }
    }

    fn get_name(&self) -> &str {
        "Rain on Grid"
    }
}

impl RainOnGridTool {
    pub fn log_snapshot(&self) -> Vec<String> {
        self.log.snapshot()
    }

    pub fn last_run_folder(&self) -> Option<PathBuf> {
        lock(&self.last_run).clone()
    }

    /// Confirmation and checkpoint windows. Drawn every frame whatever tab is open.
    /// Returns true when a run was started from the confirmation.
    pub fn render_windows(&mut self, ctx: &egui::Context, settings: &AppSettings) -> bool {
        let mut started = false;

        if self.confirm_open {
            match render_confirmation(ctx) {
                RunUiAction::ConfirmStart => {
                    self.confirm_open = false;
                    self.start(settings);
                    started = self.worker.is_running();
                }
                RunUiAction::CancelStart => {
                    self.confirm_open = false;
                    self.worker.set_status("Ready");
                }
                _ => {}
            }
        }

        if let Some(handle) = &self.checkpoint {
            match handle.pending() {
                Some(pending) => {
                    if self.shown_checkpoint != Some(pending.checkpoint) {
                        self.shown_checkpoint = Some(pending.checkpoint);
                        self.checkpoint_entry = pending.entry.clone();
                        self.checkpoint_error = None;
                    }
                    let action = render_checkpoint(
                        ctx,
                        &pending,
                        &mut self.checkpoint_entry,
                        &mut self.checkpoint_error,
                    );
                    match action {
                        CheckpointUiAction::Continue(entry) => {
                            handle.answer(CheckpointReply::Continue { entry })
                        }
                        CheckpointUiAction::Cancel => handle.answer(CheckpointReply::Cancel),
                        CheckpointUiAction::Dismiss => handle.dismiss(),
                        CheckpointUiAction::None => {}
                    }
                }
                None => self.shown_checkpoint = None,
            }
        }

        started
    }

    fn launch(&mut self, config: RunConfiguration, tools: ToolSettings) {
        self.worker.set_status("Starting...");
        self.log.clear();
        *lock(&self.last_run) = None;

        // One pair per run.
        let (handle, gate) = checkpoint_channel();
        self.checkpoint = Some(handle);
        self.shown_checkpoint = None;

        let log = self.log.clone();
        let last_run = Arc::clone(&self.last_run);
        let started = chrono::Local::now().naive_local();

        self.worker.start(move |running: Arc<Mutex<bool>>, status: Arc<Mutex<String>>| {
            let job = RunJob {
                config,
                tools,
                started,
            };
            let final_status = execute(
                job,
                native_desktop,
                Arc::clone(&running),
                Arc::clone(&status),
                log,
                gate,
                &last_run,
            );
            *lock(&status) = final_status;
            *lock(&running) = false;
        });
    }
}

/// What the worker thread takes with it.
struct RunJob {
    config: RunConfiguration,
    tools: ToolSettings,
    started: NaiveDateTime,
}

/// One run on the worker thread. Returns the final status line.
///
/// The desktop is created on this thread; its COM controller belongs to the creating thread.
fn execute(
    job: RunJob,
    make_desktop: impl FnOnce() -> Result<Box<dyn Desktop>>,
    running: Arc<Mutex<bool>>,
    status: Arc<Mutex<String>>,
    log: RunLog,
    gate: CheckpointGate,
    last_run: &Mutex<Option<PathBuf>>,
) -> String {
    let output = PathBuf::from(job.config.output_folder.trim());
    let folder = match RunFolder::create(&output, &job.started, job.config.area()) {
        Ok(folder) => folder,
        Err(e) => {
            log.warn(format!("Could not create the run folder: {}", e));
            return format!("Error: {}", e);
        }
    };
    log.info(format!("Run folder: {}", folder.root.display()));
    *lock(last_run) = Some(folder.root.clone());

    let desktop = match make_desktop() {
        Ok(desktop) => desktop,
        Err(e) => {
            log.warn(format!("Desktop unavailable: {}", e));
            return format!("Error: {}", e);
        }
    };

    let root = folder.root.clone();
    let mut ctx = RunContext::new(
        job.config,
        job.tools,
        folder,
        desktop,
        running,
        status,
        log.clone(),
        gate,
    );
    let result = run_all(&mut ctx);
    if let Err(e) = &result {
        if !e.is_cancelled() {
            log.warn(format!("Run failed: {}", e));
        }
    }
    finish_status(&result, &root)
}

fn finish_status(result: &Result<CleanupReport>, root: &Path) -> String {
    match result {
        Ok(report) if report.failures.is_empty() => {
            format!("Model complete. Outputs saved to {}", root.display())
        }
        Ok(report) => format!(
            "Model complete with {} file problem(s). Outputs saved to {}",
            report.failures.len(),
            root.display()
        ),
        Err(AutomationError::Cancelled) => "Stopped by user".to_string(),
        Err(e) => format!("Error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::desktop::fake::RecordingDesktop;
    use std::fs;

    fn job(output: &Path) -> RunJob {
        RunJob {
            config: RunConfiguration {
                area_name: "Umlazi".to_string(),
                output_folder: output.display().to_string(),
                ..RunConfiguration::default()
            },
            tools: ToolSettings::default(),
            started: chrono::NaiveDate::from_ymd_opt(2024, 6, 28)
                .and_then(|d| d.and_hms_opt(9, 5, 0))
                .unwrap(),
        }
    }

    fn flags() -> (Arc<Mutex<bool>>, Arc<Mutex<String>>) {
        (
            Arc::new(Mutex::new(true)),
            Arc::new(Mutex::new(String::new())),
        )
    }

    #[test]
    fn test_stop_before_launch_keeps_run_folder() {
        let dir = tempfile::tempdir().unwrap();
        let (running, status) = flags();
        *lock(&running) = false;
        let (_handle, gate) = checkpoint_channel();
        let last_run = Mutex::new(None);
        let desktop = RecordingDesktop::default();
        let recorder = desktop.clone();

        let final_status = execute(
            job(dir.path()),
            move || Ok(Box::new(desktop) as Box<dyn Desktop>),
            running,
            status,
            RunLog::new(),
            gate,
            &last_run,
        );

        assert_eq!(final_status, "Stopped by user");
        let root = dir.path().join("2024-06-28 0905 Umlazi");
        assert_eq!(lock(&last_run).as_deref(), Some(root.as_path()));
        assert!(root.join("User Input Files").is_dir());
        assert!(recorder.actions().is_empty());
    }

    #[test]
    fn test_missing_desktop_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let (running, status) = flags();
        let (_handle, gate) = checkpoint_channel();
        let last_run = Mutex::new(None);
        let log = RunLog::new();

        let final_status = execute(
            job(dir.path()),
            || Err(AutomationError::Unsupported("no display".to_string())),
            running,
            status,
            log.clone(),
            gate,
            &last_run,
        );

        assert_eq!(final_status, "Error: Unsupported platform: no display");
        assert!(log.snapshot().iter().any(|l| l.contains("WARN Desktop unavailable")));
    }

    #[test]
    fn test_unusable_output_folder_stops_early() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not a folder");
        fs::write(&blocker, "x").unwrap();
        let (running, status) = flags();
        let (_handle, gate) = checkpoint_channel();
        let last_run = Mutex::new(None);

        let final_status = execute(
            job(&blocker),
            || panic!("desktop should not be created"),
            running,
            status,
            RunLog::new(),
            gate,
            &last_run,
        );

        assert!(final_status.starts_with("Error: File error"));
        assert!(lock(&last_run).is_none());
    }

    #[test]
    fn test_finish_status_lines() {
        let root = Path::new("out");
        let clean = CleanupReport {
            inputs_copied: 7,
            project_files_copied: 2,
            failures: Vec::new(),
        };
        assert!(finish_status(&Ok(clean), root).starts_with("Model complete. Outputs saved to"));

        let partial = CleanupReport {
            inputs_copied: 6,
            project_files_copied: 2,
            failures: vec!["soil.shp".to_string()],
        };
        assert!(finish_status(&Ok(partial), root).starts_with("Model complete with 1 file problem(s)"));

        assert_eq!(finish_status(&Err(AutomationError::Cancelled), root), "Stopped by user");
        assert_eq!(
            finish_status(&Err(AutomationError::Input("bad".to_string())), root),
            "Error: Input error: bad"
        );
    }

    #[test]
    fn test_invalid_form_does_not_start() {
        let mut tool = RainOnGridTool::default();
        tool.start(&AppSettings::default());
        assert!(!tool.is_running());
        assert_eq!(tool.get_status(), "Input Error");
        assert!(tool.problems.as_deref().unwrap_or("").contains("Area Name"));
        assert!(tool.checkpoint.is_none());
    }
}
