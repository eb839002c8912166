use crate::automation::context::RunContext;
use crate::core::coords::{pt, Point};
use crate::core::desktop::Key;
use crate::error::{AutomationError, Result};
use std::time::Duration;

const COPY_PAUSE: Duration = Duration::from_millis(100);

pub const TERRAIN_COMPLETE: &str = "Terrain Complete";
pub const LAND_COVER_COMPLETE: &str = "Land cover Layer complete!";
pub const SOILS_COMPLETE: &str = "Soils Layer complete!";
pub const SIMULATION_FINISHED: &str = "Finished Unsteady Flow Simulation";

/// Where to probe, what to look for and how long to wait around each probe.
#[derive(Debug, Clone, PartialEq)]
pub struct PollSpec {
    pub label: &'static str,
    pub probe: Point,
    pub phrases: &'static [&'static str],
    /// Wait before every probe.
    pub lead: Duration,
    /// Wait after a probe that found nothing.
    pub retry: Duration,
    /// Wait after the phrase was found, before the caller moves on.
    pub settle: Duration,
}

impl PollSpec {
    pub fn terrain() -> Self {
        Self {
            label: "terrain",
            probe: pt(479, 414),
            phrases: &[TERRAIN_COMPLETE],
            lead: Duration::from_secs(5),
            retry: Duration::from_secs(20),
            settle: Duration::from_secs(5),
        }
    }

    pub fn land_cover() -> Self {
        Self {
            label: "land cover layer",
            probe: pt(479, 414),
            phrases: &[LAND_COVER_COMPLETE],
            lead: Duration::ZERO,
            retry: Duration::from_secs(2),
            settle: Duration::from_secs(2),
        }
    }

    /// The soils dialog has been seen reporting either text.
    pub fn soils() -> Self {
        Self {
            label: "soils layer",
            phrases: &[SOILS_COMPLETE, LAND_COVER_COMPLETE],
            ..Self::land_cover()
        }
    }

    pub fn simulation() -> Self {
        Self {
            label: "unsteady flow simulation",
            probe: pt(1154, 613),
            phrases: &[SIMULATION_FINISHED],
            lead: Duration::ZERO,
            retry: Duration::from_secs(10),
            settle: Duration::from_secs(5),
        }
    }

    fn cycle(&self) -> Duration {
        self.lead + COPY_PAUSE * 2 + self.retry
    }
}

/// One clipboard snapshot and the phrase it matched, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct PollResult {
    pub text: String,
    pub matched: Option<&'static str>,
    pub checks: u32,
}

impl PollResult {
    pub fn check(text: String, phrases: &[&'static str], checks: u32) -> Self {
        let matched = phrases.iter().copied().find(|p| text.contains(p));
        Self {
            text,
            matched,
            checks,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.matched.is_some()
    }
}

/// Poll until one of the phrases shows up in the operation's status text.
///
/// Each attempt clicks into the text, selects it, copies it and reads the clipboard.
///
/// Unbounded unless `poll_timeout_secs` is set; Stop and the abort hotkey always end it.
pub fn poll_until_complete(ctx: &mut RunContext, poll: &PollSpec) -> Result<PollResult> {
    let limit = ctx.tools.poll_timeout_secs.map(Duration::from_secs);
    let mut waited = Duration::ZERO;
    let mut checks = 0u32;
    ctx.log.info(format!("Waiting for {}", poll.label));

    loop {
        ctx.wait(poll.lead)?;
        checks += 1;
        ctx.set_status(format!("Waiting for {} (check {})", poll.label, checks));

        ctx.desktop().left_click(poll.probe)?;
        ctx.desktop().chord(&[Key::Ctrl, Key::A])?;
        ctx.wait(COPY_PAUSE)?;
        ctx.desktop().chord(&[Key::Ctrl, Key::C])?;
        ctx.wait(COPY_PAUSE)?;

        let text = match ctx.desktop().clipboard_text() {
            Ok(text) => text,
            Err(e) => {
                ctx.log.warn(format!("Clipboard read failed, retrying: {}", e));
                String::new()
            }
        };

        let result = PollResult::check(text, poll.phrases, checks);
        if result.is_complete() {
            let phrase = result.matched.unwrap_or_default();
            ctx.log.info(format!("'{}' seen after {} check(s)", phrase, checks));
            ctx.wait(poll.settle)?;
            return Ok(result);
        }
        tracing::debug!("{} not complete yet: {:?}", poll.label, result.text);

        waited += poll.cycle();
        if let Some(limit) = limit {
            if waited >= limit {
                return Err(AutomationError::PollTimeout {
                    label: poll.label.to_string(),
                    waited_secs: waited.as_secs(),
                });
            }
        }
        ctx.wait(poll.retry)?;
    }
}
