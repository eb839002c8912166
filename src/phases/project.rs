use super::layout::main_window as main;
use super::layout::new_project as dialog;
use crate::automation::context::RunContext;
use crate::automation::script::Script;
use crate::core::desktop::Key;
use crate::error::Result;
use crate::settings::RunConfiguration;

/// New project in the Documents folder, titled after the area, with SI units as default.
pub fn script(config: &RunConfiguration, created: &str) -> Script {
    let project_name = config.project_name();
    Script::new()
        .note("Creating the HEC-RAS project")
        .click_wait(main::FILE_MENU, 1.0)
        .click_wait(main::NEW_PROJECT, 1.0)
        .click_wait(dialog::DOCUMENTS, 1.0)
        .click_wait(dialog::NEW_FOLDER, 1.0)
        .click_wait(dialog::FOLDER_NAME, 1.0)
        .type_text(&project_name)
        .wait_secs(1.0)
        .click_wait(dialog::FOLDER_NAME_OK, 2.0)
        .click_wait(dialog::SELECT_FOLDER, 1.0)
        .click_wait(dialog::TITLE, 1.0)
        .type_text(&project_name)
        .wait_secs(1.0)
        // The file name field mirrors the title; select it back to the folder and retype.
        .drag(dialog::FILE_NAME_END, dialog::FILE_NAME_START, 0.5)
        .press(Key::Backspace)
        .wait_secs(1.0)
        .type_text(config.area())
        .press(Key::Enter)
        .wait_secs(1.0)
        .click_wait(dialog::OK, 1.0)
        .click_wait(dialog::DESCRIPTION, 1.0)
        .type_text(config.description(created))
        .wait_secs(1.0)
        .note("Setting SI units as the default unit system")
        .click_wait(main::OPTIONS_MENU, 1.0)
        .click_wait(main::UNIT_SYSTEM, 1.0)
        .click_wait(main::SI_UNITS, 1.0)
        .click_wait(main::SET_AS_DEFAULT, 1.0)
        .click_wait(main::UNIT_SYSTEM_OK, 1.0)
        .click(main::SAVE_PROJECT)
}

pub fn run(ctx: &mut RunContext) -> Result<()> {
    ctx.report("Launching HEC-RAS");
    ctx.wait_secs(5.0)?;
    let prog_id = ctx.tools.ras_prog_id.clone();
    ctx.desktop().show_application(&prog_id)?;
    ctx.wait_secs(5.0)?;

    let script = script(&ctx.config, &ctx.folder.started_label());
    ctx.play(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::context::testing::Harness;
    use crate::core::desktop::fake::{Action, RecordingDesktop};

    fn config() -> RunConfiguration {
        RunConfiguration {
            area_name: "Mooi River".to_string(),
            ..RunConfiguration::default()
        }
    }

    #[test]
    fn test_project_is_named_after_area() {
        let dir = tempfile::tempdir().unwrap();
        let mut h = Harness::new(config(), dir.path(), RecordingDesktop::default());
        run(&mut h.ctx).unwrap();

        let actions = h.desktop.actions();
        assert_eq!(
            actions[0],
            Action::ShowApplication("RAS631.HECRASController".to_string())
        );
        assert_eq!(
            h.desktop.typed(),
            vec![
                "Mooi River HEC-RAS Project".to_string(),
                "Mooi River HEC-RAS Project".to_string(),
                "Mooi River".to_string(),
                "The Simulation of 2D Rainfall at Mooi River, South Africa. (Created: 2024-06-28 0905)"
                    .to_string(),
            ]
        );
        assert_eq!(actions.last(), Some(&Action::LeftClick(main::SAVE_PROJECT)));
    }

    #[test]
    fn test_cancel_before_launch_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut h = Harness::new(config(), dir.path(), RecordingDesktop::default());
        *crate::core::worker::lock(&h.running) = false;
        assert!(run(&mut h.ctx).unwrap_err().is_cancelled());
        assert!(h.desktop.actions().is_empty());
    }
}
