use super::layout::geometry_editor as editor;
use super::layout::main_window as main;
use super::layout::mapper;
use super::mesh::save_edits;
use crate::automation::context::RunContext;
use crate::automation::script::Script;
use crate::error::Result;

pub fn close_mapper_script() -> Script {
    save_edits()
        .note("Closing RAS Mapper")
        .wait_secs(2.0)
        .click_wait(mapper::CLOSE_VIEW, 2.0)
        .close_window()
        .wait_secs(1.0)
        .click_wait(mapper::CONFIRM_CLOSE, 5.0)
        .click(main::GEOMETRY_EDITOR)
}

/// Reopen the mapped geometry in the geometry editor and save it for the plan.
pub fn open_geometry_script() -> Script {
    Script::new()
        .note("Saving the geometry data")
        .wait_secs(2.0)
        .click_wait(editor::FILE_MENU, 1.0)
        .click_wait(editor::OPEN, 1.0)
        .click_wait(editor::FIRST_GEOMETRY, 1.0)
        .click_wait(editor::OPEN_OK, 5.0)
        .click_wait(editor::FILE_MENU, 1.0)
        .click(editor::SAVE)
}

pub fn run(ctx: &mut RunContext) -> Result<()> {
    ctx.play(close_mapper_script())?;
    ctx.maximize_foreground()?;
    ctx.play(open_geometry_script())
}
