use super::capture;
use super::layout::capture as snip;
use super::layout::unsteady_flow as flow;
use super::layout::main_window as main;
use crate::automation::collector::RunFolder;
use crate::automation::context::RunContext;
use crate::automation::script::Script;
use crate::core::desktop::Key;
use crate::error::{AutomationError, Result};
use crate::hydrology::intervals::IntervalField;
use crate::hydrology::rainfall::Hyetograph;
use crate::settings::RunConfiguration;
use std::path::Path;

/// The series typed into the precipitation boundary and its time step label.
#[derive(Debug, Clone, PartialEq)]
pub struct Rainfall {
    pub hyetograph: Hyetograph,
    pub interval: String,
    /// Position of `interval` in the precipitation interval combo.
    pub interval_index: usize,
}

/// Read the operator's `.dat` file, or build the SCS Type III storm and save it
/// into the run folder.
pub fn load_rainfall(config: &RunConfiguration, folder: &RunFolder) -> Result<Rainfall> {
    let (hyetograph, interval) = if config.use_rainfall_file {
        let path = Path::new(config.rainfall_file.trim());
        let hyetograph = Hyetograph::read_dat(path)?;
        tracing::info!("Read {} rainfall rows from {}", hyetograph.len(), path.display());
        (hyetograph, config.rainfall_interval.trim().to_string())
    } else {
        let storm = &config.storm;
        let hyetograph = storm.hyetograph(folder.started.date())?;
        let interval = storm.interval_label().ok_or_else(|| {
            AutomationError::Rainfall(format!(
                "No precipitation interval for a {} minute step",
                storm.step_minutes
            ))
        })?;
        let path = folder.path(&storm.file_name(config.area()));
        hyetograph.write_dat(&path)?;
        tracing::info!(
            "Synthetic storm of {:.1} mm written to {}",
            hyetograph.total_mm(),
            path.display()
        );
        (hyetograph, interval)
    };

    let interval_index = IntervalField::Precipitation
        .index_of(&interval)
        .ok_or_else(|| AutomationError::Input(format!("'{}' is not a precipitation interval", interval)))?;
    Ok(Rainfall {
        hyetograph,
        interval,
        interval_index,
    })
}

/// Normal depth downstream boundary with the given friction slope.
pub fn boundary_script(friction_slope: &str) -> Script {
    Script::new()
        .note("Setting the normal depth boundary")
        .wait_secs(2.0)
        .click_wait(super::layout::geometry_editor::TITLE_BAR, 2.0)
        .close_window()
        .wait_secs(5.0)
        .click_wait(main::UNSTEADY_FLOW_EDITOR, 1.0)
        .click_wait(flow::STORAGE_AREAS_TAB, 1.0)
        .click_wait(flow::NORMAL_DEPTH, 1.0)
        .click_wait(flow::FRICTION_SLOPE, 1.0)
        .click_wait(flow::FRICTION_SLOPE, 1.0)
        .drag(flow::FRICTION_SLOPE, flow::FRICTION_SLOPE_START, 1.0)
        .wait_secs(1.0)
        .press(Key::Backspace)
        .wait_secs(1.0)
        .click_wait(flow::FRICTION_SLOPE, 1.0)
        .type_text(friction_slope)
        .wait_secs(1.0)
        .click_wait(flow::FRICTION_SLOPE_OK, 5.0)
        .click_wait(flow::ADD_AREA, 1.0)
        .click_wait(flow::FIRST_AREA, 1.0)
        .click_wait(flow::ADD_ARROW, 1.0)
        .click(flow::ADD_AREA_OK)
}

/// Precipitation boundary: interval, start, ordinate count and every depth.
pub fn hyetograph_script(rainfall: &Rainfall) -> Script {
    let series = &rainfall.hyetograph;
    let mut script = Script::new()
        .note(format!(
            "Entering {} rainfall ordinates at {}",
            series.len(),
            rainfall.interval
        ))
        .wait_secs(2.0)
        .click_wait(flow::BOUNDARY_CELL, 1.0)
        .click_wait(flow::PRECIPITATION, 2.0)
        .click_wait(flow::FIXED_START_TIME, 2.0)
        .combo_at(flow::INTERVAL_COMBO, rainfall.interval_index)
        .wait_secs(1.0)
        .click(flow::START_DATE)
        .type_text(series.start_date())
        .wait_secs(1.0)
        .click(flow::START_TIME)
        .type_text(series.start_time())
        .wait_secs(2.0)
        .click_wait(flow::NO_ORDINATES, 2.0)
        .click(flow::ORDINATE_COUNT)
        .press_times(Key::Backspace, 50)
        .wait_secs(2.0)
        .type_text(series.len().to_string())
        .wait_secs(2.0)
        .press(Key::Enter)
        .wait_secs(2.0)
        .click(flow::FIRST_CELL)
        .click_wait(flow::FIRST_CELL, 2.0);

    for (i, row) in series.rows.iter().enumerate() {
        if i == 0 {
            // The first Enter only commits the cell edit.
            script = script
                .wait_secs(0.5)
                .type_text(&row.entry)
                .press_times(Key::Enter, 2)
                .wait_secs(0.5);
        } else {
            script = script.type_text(&row.entry).press(Key::Enter);
        }
    }
    script
}

pub fn plot_script() -> Script {
    Script::new()
        .wait_secs(2.0)
        .click_wait(flow::PLOT_DATA, 5.0)
        .click_wait(flow::PLOT_TABLE_TAB, 3.0)
        .then(capture::snip(snip::PLOT_REGION))
}

pub fn save_flow_data_script(config: &RunConfiguration) -> Script {
    Script::new()
        .wait_secs(10.0)
        .wait_secs(2.0)
        .click_wait(flow::PLOT_TITLE_BAR, 2.0)
        .close_window()
        .wait_secs(2.0)
        .click_wait(flow::PRECIPITATION_OK, 2.0)
        .note("Saving the unsteady flow data")
        .click_wait(flow::FILE_MENU, 1.0)
        .click_wait(flow::SAVE_AS, 1.0)
        .click(flow::TITLE)
        .type_text(config.unsteady_flow_data_name())
        .wait_secs(1.0)
        .click_wait(flow::SAVE_OK, 2.0)
        .close_window()
}

pub fn run(ctx: &mut RunContext, rainfall: &Rainfall, friction_slope: &str) -> Result<()> {
    ctx.play(boundary_script(friction_slope))?;
    ctx.play(hyetograph_script(rainfall))?;
    ctx.play(plot_script())?;
    let name = format!("{} Time Series Graph.png", ctx.config.area());
    capture::collect(ctx, &name)?;
    ctx.play(save_flow_data_script(&ctx.config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::context::testing::Harness;
    use crate::core::desktop::fake::{Action, RecordingDesktop};
    use crate::hydrology::rainfall::SyntheticStorm;
    use std::fs;

    fn folder(root: &Path) -> RunFolder {
        RunFolder {
            root: root.to_path_buf(),
            started: chrono::NaiveDate::from_ymd_opt(2024, 6, 28)
                .unwrap()
                .and_hms_opt(9, 5, 0)
                .unwrap(),
            inputs: root.join("User Input Files"),
            created: true,
        }
    }

    #[test]
    fn test_synthetic_storm_is_saved_to_run_folder() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfiguration {
            area_name: "Mooi".to_string(),
            ..RunConfiguration::default()
        };
        let rainfall = load_rainfall(&config, &folder(dir.path())).unwrap();

        assert_eq!(rainfall.interval, "5 Minute");
        assert_eq!(rainfall.interval_index, 15);
        assert_eq!(rainfall.hyetograph.len(), 288);
        assert_eq!(rainfall.hyetograph.start_date(), "28JUN2024");
        let saved = dir.path().join("Mooi SA SCS T3 (120mm).dat");
        assert_eq!(Hyetograph::read_dat(&saved).unwrap().len(), 288);
    }

    #[test]
    fn test_user_rainfall_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let dat = dir.path().join("storm.dat");
        fs::write(&dat, "01JAN2024\t0000\t0\n01JAN2024\t0100\t12.5\n01JAN2024\t0200\t3\n").unwrap();
        let config = RunConfiguration {
            area_name: "Mooi".to_string(),
            use_rainfall_file: true,
            rainfall_file: dat.display().to_string(),
            rainfall_interval: "1 Hour".to_string(),
            ..RunConfiguration::default()
        };
        let rainfall = load_rainfall(&config, &folder(dir.path())).unwrap();
        assert_eq!(rainfall.interval_index, 22);
        assert_eq!(rainfall.hyetograph.len(), 3);
        assert!(!dir.path().join("Mooi SA SCS T3 (120mm).dat").exists());
    }

    #[test]
    fn test_unlisted_storm_step_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfiguration {
            storm: SyntheticStorm {
                step_minutes: 7,
                duration_hours: 7,
                ..SyntheticStorm::default()
            },
            ..RunConfiguration::default()
        };
        assert!(load_rainfall(&config, &folder(dir.path())).is_err());
    }

    #[test]
    fn test_every_depth_is_typed_in_order() {
        let hyetograph =
            Hyetograph::parse_dat("01JAN2024\t0000\t0\n01JAN2024\t0100\t12.5\n01JAN2024\t0200\t3\n")
                .unwrap();
        let rainfall = Rainfall {
            hyetograph,
            interval: "1 Hour".to_string(),
            interval_index: 22,
        };
        let dir = tempfile::tempdir().unwrap();
        let mut h = Harness::new(RunConfiguration::default(), dir.path(), RecordingDesktop::default());
        h.ctx.play(hyetograph_script(&rainfall)).unwrap();

        assert_eq!(h.desktop.typed(), vec!["01JAN2024", "0000", "3", "0", "12.5", "3"]);
        assert_eq!(h.desktop.count(&Action::Press(Key::Down)), 22);
    }

    #[test]
    fn test_phase_saves_graph_and_flow_data() {
        let run_dir = tempfile::tempdir().unwrap();
        let shots = tempfile::tempdir().unwrap();
        fs::write(shots.path().join("Screenshot.png"), b"png").unwrap();

        let config = RunConfiguration {
            area_name: "Mooi".to_string(),
            ..RunConfiguration::default()
        };
        let mut h = Harness::new(config, run_dir.path(), RecordingDesktop::default());
        h.ctx.tools.screenshot_folder = Some(shots.path().to_path_buf());
        let rainfall = load_rainfall(&h.ctx.config, &h.ctx.folder).unwrap();
        run(&mut h.ctx, &rainfall, "0.0025").unwrap();

        assert!(run_dir.path().join("Mooi Time Series Graph.png").is_file());
        let typed = h.desktop.typed();
        assert_eq!(typed[0], "0.0025");
        assert_eq!(typed.last().map(String::as_str), Some("Mooi Unsteady Flow Data"));
    }
}
