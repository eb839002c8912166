use super::capture;
use super::layout::capture as rec;
use super::layout::main_window as main;
use super::layout::results;
use crate::automation::context::RunContext;
use crate::automation::script::Script;
use crate::core::coords::{pt, Point};
use crate::core::desktop::Key;
use crate::error::Result;
use crate::settings::RunConfiguration;

/// Clicks that rewind the animation slider to the first time step.
const ANIMATION_REWIND_CLICKS: usize = 50;

/// Result maps captured after the run, in the order they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultLayer {
    Depth,
    Velocity,
    Wse,
}

impl ResultLayer {
    pub const ALL: [ResultLayer; 3] = [ResultLayer::Depth, ResultLayer::Velocity, ResultLayer::Wse];

    pub fn name(self) -> &'static str {
        match self {
            ResultLayer::Depth => "Depth",
            ResultLayer::Velocity => "Velocity",
            ResultLayer::Wse => "WSE",
        }
    }

    /// Tick boxes to toggle: the previous layer off (if any), this layer on.
    fn toggles(self) -> &'static [Point] {
        const DEPTH: &[Point] = &[pt(87, 346)];
        const VELOCITY: &[Point] = &[pt(87, 345), pt(86, 369)];
        const WSE: &[Point] = &[pt(86, 369), pt(85, 386)];
        match self {
            ResultLayer::Depth => DEPTH,
            ResultLayer::Velocity => VELOCITY,
            ResultLayer::Wse => WSE,
        }
    }

    fn label(self) -> Point {
        match self {
            ResultLayer::Depth => pt(111, 342),
            ResultLayer::Velocity => pt(121, 366),
            ResultLayer::Wse => pt(133, 382),
        }
    }

    fn context_menu(self) -> Point {
        match self {
            ResultLayer::Depth => pt(111, 341),
            ResultLayer::Velocity => pt(110, 362),
            ResultLayer::Wse => pt(113, 381),
        }
    }

    fn properties(self) -> Point {
        match self {
            ResultLayer::Depth => pt(164, 353),
            ResultLayer::Velocity => pt(169, 377),
            ResultLayer::Wse => pt(174, 398),
        }
    }

    pub fn animation_file(self, area: &str) -> String {
        format!("{} {} Animation.mp4", area, self.name())
    }

    pub fn profile_file(self, area: &str, profile: &str) -> String {
        format!("{} {} {}.png", area, profile, self.name())
    }
}

/// Seconds to record one animation for a simulation window given as HHMM.
pub fn recording_seconds(starting_time: &str, ending_time: &str) -> u64 {
    let start: i64 = starting_time.trim().parse().unwrap_or(0);
    let end: i64 = ending_time.trim().parse().unwrap_or(0);
    let hours = (end - start + 100) as f64 / 100.0;
    (hours / 3.0 + 1.0).ceil().max(1.0) as u64
}

fn clear_and_type(field: Point, value: &str) -> Script {
    Script::new()
        .wait_secs(2.0)
        .click_wait(field, 2.0)
        .press_times(Key::Backspace, 50)
        .wait_secs(1.0)
        .type_text(value)
}

pub fn open_results_script() -> Script {
    Script::new()
        .note("Opening the results in RAS Mapper")
        .wait_secs(2.0)
        .click_wait(main::RAS_MAPPER_AFTER_RUN, 10.0)
        .click_wait(results::ZOOM_TO_EXTENT, 2.0)
        .click_wait(results::RESULTS_EXPAND, 1.0)
        .click_wait(results::PLAN_RESULTS, 2.0)
        .click_wait(results::GEOMETRY_CHECK, 2.0)
        .click(results::MAP_LAYERS_CHECK)
}

/// Show the layer and give it a fixed colour ramp.
pub fn symbology_script(layer: ResultLayer) -> Script {
    let mut script = Script::new()
        .note(format!("Styling the {} layer", layer.name()))
        .wait_secs(2.0);
    for toggle in layer.toggles() {
        script = script.click(*toggle);
    }
    script = script.wait_secs(2.0).click(layer.label());
    if layer != ResultLayer::Depth {
        for _ in 0..ANIMATION_REWIND_CLICKS {
            script = script.click(results::RESET_ANIMATION);
        }
    }

    script = script
        .wait_secs(2.0)
        .right_click(layer.context_menu())
        .wait_secs(2.0)
        .click_wait(layer.properties(), 2.0)
        .click(results::EDIT_SURFACE);
    script = match layer {
        ResultLayer::Depth | ResultLayer::Velocity => script
            .then(clear_and_type(results::RAMP_MAX, "3.00"))
            .then(clear_and_type(results::RAMP_MIN, "0.00")),
        ResultLayer::Wse => script.then(clear_and_type(results::RAMP_VALUES, "14")),
    };
    script
        .wait_secs(1.0)
        .click_wait(results::CREATE_RAMP, 2.0)
        .click_wait(results::SYMBOLOGY_OK, 2.0)
        .click(results::PROPERTIES_FOCUS)
        .close_window()
}

/// Record the animation and save it straight into the run folder.
pub fn recording_script(layer: ResultLayer, config: &RunConfiguration, run_folder: &str) -> Script {
    let seconds = recording_seconds(&config.starting_time, &config.ending_time);
    Script::new()
        .note(format!("Recording the {} animation ({}s)", layer.name(), seconds))
        .wait_secs(2.0)
        .chord(&[Key::Win, Key::Shift, Key::S])
        .wait_secs(2.0)
        .click_wait(rec::RECORD_MODE, 3.0)
        .drag(rec::MAP_REGION.0, rec::MAP_REGION.1, 2.0)
        .wait_secs(1.0)
        .click_wait(rec::MUTE, 1.0)
        .click_wait(rec::START, 4.0)
        .click(rec::PLAY_ANIMATION)
        .move_to(rec::PARK_CURSOR)
        .wait_secs(seconds as f32)
        .click_wait(rec::STOP, 2.0)
        .click(rec::RECORDER_TITLE_BAR)
        .save()
        .wait_secs(2.0)
        .press_times(Key::Backspace, 100)
        .wait_secs(2.0)
        .type_text(layer.animation_file(config.area()))
        .wait_secs(1.0)
        .click(rec::SAVE_FOLDER_BAR)
        .type_text(run_folder)
        .wait_secs(1.0)
        .press(Key::Enter)
        .wait_secs(3.0)
        .click(rec::SAVE_BUTTON)
        .chord(&[Key::Alt, Key::S])
        .wait_secs(2.0)
        .click(rec::RECORDER_TITLE_BAR)
        .close_window()
}

fn profile_script(button: Point) -> Script {
    Script::new()
        .wait_secs(2.0)
        .click_wait(button, 2.0)
        .then(capture::snip(rec::MAP_REGION))
}

pub fn run(ctx: &mut RunContext) -> Result<()> {
    ctx.play(open_results_script())?;
    let area = ctx.config.area().to_string();
    let run_folder = ctx.folder.root.display().to_string();

    for layer in ResultLayer::ALL {
        ctx.play(symbology_script(layer))?;
        ctx.play(recording_script(layer, &ctx.config, &run_folder))?;
        let animation = ctx.folder.path(&layer.animation_file(&area));
        if !animation.is_file() {
            ctx.log.warn(format!("{} was not found after saving", animation.display()));
        }

        for (button, profile) in [(results::MIN_PROFILE, "Min"), (results::MAX_PROFILE, "Max")] {
            ctx.play(profile_script(button))?;
            capture::collect(ctx, &layer.profile_file(&area, profile))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::context::testing::Harness;
    use crate::automation::script::Step;
    use crate::core::desktop::fake::{Action, RecordingDesktop};
    use std::fs;
    use std::time::Duration;

    #[test]
    fn test_recording_length() {
        assert_eq!(recording_seconds("0100", "1100"), 5);
        assert_eq!(recording_seconds("0000", "2300"), 9);
        assert_eq!(recording_seconds("0100", "0200"), 2);
    }

    #[test]
    fn test_recording_waits_for_the_animation() {
        let config = RunConfiguration {
            area_name: "Mooi".to_string(),
            ..RunConfiguration::default()
        };
        let script = recording_script(ResultLayer::Velocity, &config, r"D:\Runs\2024-06-28 0905 Mooi");
        assert!(script.steps().contains(&Step::Wait(Duration::from_secs(5))));
        assert!(script
            .steps()
            .contains(&Step::Type("Mooi Velocity Animation.mp4".to_string())));
        assert!(script
            .steps()
            .contains(&Step::Type(r"D:\Runs\2024-06-28 0905 Mooi".to_string())));
    }

    #[test]
    fn test_layer_toggles_hand_over_from_the_previous_layer() {
        let clicks = |layer| {
            symbology_script(layer)
                .steps()
                .iter()
                .filter_map(|s| match s {
                    Step::Click(p) => Some(*p),
                    _ => None,
                })
                .take(layer.toggles().len() + 1)
                .collect::<Vec<_>>()
        };
        assert_eq!(clicks(ResultLayer::Depth), vec![pt(87, 346), pt(111, 342)]);
        assert_eq!(
            clicks(ResultLayer::Velocity),
            vec![pt(87, 345), pt(86, 369), pt(121, 366)]
        );
        assert_eq!(
            clicks(ResultLayer::Wse),
            vec![pt(86, 369), pt(85, 386), pt(133, 382)]
        );
    }

    #[test]
    fn test_ramps_per_layer() {
        let typed = |layer| {
            symbology_script(layer)
                .steps()
                .iter()
                .filter_map(|s| match s {
                    Step::Type(t) => Some(t.clone()),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(typed(ResultLayer::Depth), vec!["3.00", "0.00"]);
        assert_eq!(typed(ResultLayer::Velocity), vec!["3.00", "0.00"]);
        assert_eq!(typed(ResultLayer::Wse), vec!["14"]);
    }

    #[test]
    fn test_animation_rewound_for_later_layers() {
        let rewinds = |layer| {
            symbology_script(layer)
                .steps()
                .iter()
                .filter(|s| **s == Step::Click(results::RESET_ANIMATION))
                .count()
        };
        assert_eq!(rewinds(ResultLayer::Depth), 0);
        assert_eq!(rewinds(ResultLayer::Velocity), ANIMATION_REWIND_CLICKS);
        assert_eq!(rewinds(ResultLayer::Wse), ANIMATION_REWIND_CLICKS);
    }

    #[test]
    fn test_min_and_max_maps_are_collected_for_every_layer() {
        let run_dir = tempfile::tempdir().unwrap();
        let shots = tempfile::tempdir().unwrap();
        for i in 0..6 {
            fs::write(shots.path().join(format!("Screenshot {}.png", i)), b"png").unwrap();
        }
        let config = RunConfiguration {
            area_name: "Mooi".to_string(),
            ..RunConfiguration::default()
        };
        let mut h = Harness::new(config, run_dir.path(), RecordingDesktop::default());
        h.ctx.tools.screenshot_folder = Some(shots.path().to_path_buf());
        run(&mut h.ctx).unwrap();

        for layer in ["Depth", "Velocity", "WSE"] {
            for profile in ["Min", "Max"] {
                let name = format!("Mooi {} {}.png", profile, layer);
                assert!(run_dir.path().join(&name).is_file(), "{} missing", name);
            }
        }
        assert_eq!(fs::read_dir(shots.path()).unwrap().count(), 0);
        assert_eq!(h.desktop.count(&Action::Chord(vec![Key::Alt, Key::S])), 3);
    }
}
