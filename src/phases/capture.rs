use crate::automation::collector::relocate_latest;
use crate::automation::context::RunContext;
use crate::automation::script::Script;
use crate::core::coords::Point;
use crate::core::desktop::Key;
use crate::error::Result;
use std::path::PathBuf;

/// Time the snipping overlay needs before a region can be dragged.
const OVERLAY_DELAY_SECS: f32 = 3.0;
/// Time the OS needs to write a capture to disk.
const WRITE_DELAY_SECS: f32 = 5.0;

/// Open the snipping overlay and drag out `region`.
pub fn snip(region: (Point, Point)) -> Script {
    Script::new()
        .chord(&[Key::Win, Key::Shift, Key::S])
        .wait_secs(OVERLAY_DELAY_SECS)
        .drag(region.0, region.1, 2.0)
}

/// Move the newest capture into the run folder as `file_name`.
///
/// A missing capture is logged and the run goes on; the model itself is unaffected.
pub fn collect(ctx: &mut RunContext, file_name: &str) -> Result<Option<PathBuf>> {
    ctx.wait_secs(WRITE_DELAY_SECS)?;
    let Some(source) = ctx.tools.screenshot_dir() else {
        ctx.log.warn(format!("No screenshot folder known, {} not collected", file_name));
        return Ok(None);
    };
    match relocate_latest(&source, &ctx.folder.root, file_name) {
        Ok(path) => {
            ctx.log.info(format!("Saved {}", file_name));
            Ok(Some(path))
        }
        Err(e) => {
            ctx.log.warn(format!("Could not collect {}: {}", file_name, e));
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::context::testing::Harness;
    use crate::automation::script::Step;
    use crate::core::coords::pt;
    use crate::core::desktop::fake::RecordingDesktop;
    use crate::settings::RunConfiguration;
    use std::fs;

    #[test]
    fn test_snip_opens_overlay_then_drags() {
        let script = snip((pt(3, 58), pt(1916, 1017)));
        assert_eq!(script.steps()[0], Step::Chord(vec![Key::Win, Key::Shift, Key::S]));
        assert_eq!(
            &script.steps()[2..],
            &[
                Step::MoveTo(pt(3, 58)),
                Step::Drag {
                    to: pt(1916, 1017),
                    seconds: 2.0
                },
            ]
        );
    }

    #[test]
    fn test_collect_moves_capture_into_run_folder() {
        let run = tempfile::tempdir().unwrap();
        let shots = tempfile::tempdir().unwrap();
        fs::write(shots.path().join("Screenshot 2024-06-28.png"), b"png").unwrap();

        let mut h = Harness::new(RunConfiguration::default(), run.path(), RecordingDesktop::default());
        h.ctx.tools.screenshot_folder = Some(shots.path().to_path_buf());

        let saved = collect(&mut h.ctx, "Demo Time Series Graph.png").unwrap().unwrap();
        assert_eq!(saved, run.path().join("Demo Time Series Graph.png"));
        assert!(saved.is_file());
        assert_eq!(fs::read_dir(shots.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_capture_is_only_a_warning() {
        let run = tempfile::tempdir().unwrap();
        let shots = tempfile::tempdir().unwrap();
        let mut h = Harness::new(RunConfiguration::default(), run.path(), RecordingDesktop::default());
        h.ctx.tools.screenshot_folder = Some(shots.path().to_path_buf());

        assert_eq!(collect(&mut h.ctx, "Demo Max Depth.png").unwrap(), None);
        assert!(h.ctx.log.snapshot().iter().any(|l| l.contains("Could not collect")));
    }
}
