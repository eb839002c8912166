use crate::core::worker::lock;
use crate::error::{AutomationError, Result};
use crate::settings::parse_friction_slope;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const ANSWER_POLL: Duration = Duration::from_millis(100);

/// Manual steps the run pauses for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    BoundaryConditions,
    FixMeshes,
    FrictionSlope,
    ComputationalSettings,
    /// Closing notice. The run is already finished when it shows.
    ModelComplete,
}

impl Checkpoint {
    pub fn title(self) -> &'static str {
        match self {
            Checkpoint::BoundaryConditions => "Boundary Condition Setup",
            Checkpoint::FixMeshes => "Fix all Meshes",
            Checkpoint::FrictionSlope => "Friction Slope Calculation",
            Checkpoint::ComputationalSettings => "Computational Settings",
            Checkpoint::ModelComplete => "2D Rain-On-Grid Model is Complete!",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Checkpoint::BoundaryConditions => {
                "Add the Boundary Conditions and click 'Continue' when completed."
            }
            Checkpoint::FixMeshes => "Fix all remaining Meshes and click 'Continue' when completed.",
            Checkpoint::FrictionSlope => "Please Calculate the Friction Slope and Click Continue.",
            Checkpoint::ComputationalSettings => {
                "Please change any further Computational Settings."
            }
            Checkpoint::ModelComplete => {
                "The Model is Complete!\nOutputs have been copied to the run folder. Close all \
                 programs before deleting anything left in the HEC-RAS project folder."
            }
        }
    }

    pub fn wants_entry(self) -> bool {
        self == Checkpoint::FrictionSlope
    }

    pub fn is_notice(self) -> bool {
        self == Checkpoint::ModelComplete
    }

    /// Check the operator's entry. `Ok(None)` when the checkpoint takes no entry.
    pub fn validate_entry(self, entry: &str) -> std::result::Result<Option<String>, String> {
        if !self.wants_entry() {
            return Ok(None);
        }
        match parse_friction_slope(entry) {
            Some(_) => Ok(Some(entry.trim().to_string())),
            None => Err("Friction slope must be a positive number, e.g. 0.001".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckpointReply {
    Continue { entry: Option<String> },
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingCheckpoint {
    pub checkpoint: Checkpoint,
    /// Initial text of the entry box.
    pub entry: String,
}

/// A fresh UI/worker pair for one run.
pub fn checkpoint_channel() -> (CheckpointHandle, CheckpointGate) {
    let pending = Arc::new(Mutex::new(None));
    let (tx, rx) = mpsc::channel();
    (
        CheckpointHandle {
            pending: Arc::clone(&pending),
            replies: tx,
        },
        CheckpointGate {
            pending,
            replies: rx,
        },
    )
}

/// UI side: shows whatever the worker is waiting on and sends the answer back.
#[derive(Clone)]
pub struct CheckpointHandle {
    pending: Arc<Mutex<Option<PendingCheckpoint>>>,
    replies: Sender<CheckpointReply>,
}

impl CheckpointHandle {
    pub fn pending(&self) -> Option<PendingCheckpoint> {
        lock(&self.pending).clone()
    }

    pub fn answer(&self, reply: CheckpointReply) {
        *lock(&self.pending) = None;
        // Notices have no one waiting; the worker may also be gone already.
        let _ = self.replies.send(reply);
    }

    /// Drop a notice without answering. Used when the window is closed.
    pub fn dismiss(&self) {
        *lock(&self.pending) = None;
    }
}

/// Worker side: blocks the run until the operator answers.
pub struct CheckpointGate {
    pending: Arc<Mutex<Option<PendingCheckpoint>>>,
    replies: Receiver<CheckpointReply>,
}

impl CheckpointGate {
    /// Wait for Continue or Cancel. Returns the entry text on Continue.
    ///
    /// `running` is checked between answer polls so Stop and the abort hotkey also end the wait.
    pub fn ask(
        &self,
        checkpoint: Checkpoint,
        entry: &str,
        running: &Mutex<bool>,
    ) -> Result<Option<String>> {
        // Anything sent before this checkpoint was raised is stale.
        while self.replies.try_recv().is_ok() {}

        *lock(&self.pending) = Some(PendingCheckpoint {
            checkpoint,
            entry: entry.to_string(),
        });
        tracing::info!("Waiting at checkpoint: {}", checkpoint.title());

        let outcome = loop {
            if !*lock(running) {
                break Err(AutomationError::Cancelled);
            }
            match self.replies.recv_timeout(ANSWER_POLL) {
                Ok(CheckpointReply::Continue { entry }) => break Ok(entry),
                Ok(CheckpointReply::Cancel) => {
                    *lock(running) = false;
                    break Err(AutomationError::Cancelled);
                }
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break Err(AutomationError::Cancelled),
            }
        };

        *lock(&self.pending) = None;
        outcome
    }

    /// Show a notice without waiting for it to be closed.
    pub fn notify(&self, checkpoint: Checkpoint) {
        *lock(&self.pending) = Some(PendingCheckpoint {
            checkpoint,
            entry: String::new(),
        });
    }
}
