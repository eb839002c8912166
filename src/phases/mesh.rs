use super::layout::flow_area as area;
use super::layout::mapper;
use crate::automation::context::RunContext;
use crate::automation::script::Script;
use crate::core::coords::Point;
use crate::core::desktop::Key;
use crate::error::Result;
use crate::settings::RunConfiguration;

/// "Try to fix all meshes" rarely clears every bad cell in one pass.
pub const FIX_MESH_PASSES: usize = 15;

/// Zoom to extent, save and leave edit mode.
pub fn save_edits() -> Script {
    Script::new()
        .wait_secs(2.0)
        .click_wait(mapper::ZOOM_TO_EXTENT, 2.0)
        .click_wait(mapper::FILE_MENU, 2.0)
        .click_wait(mapper::SAVE, 2.0)
        .click(mapper::EDITING_ARROW)
        .click(mapper::STOP_EDITING)
}

fn overwrite(field: Point, value: &str) -> Script {
    Script::new()
        .click(field)
        .press_times(Key::Backspace, 10)
        .type_text(value.trim())
}

fn breakline_value(column: Point, value: &str) -> Script {
    Script::new()
        .click_wait(column, 1.0)
        .click_wait(area::SET_VALUE, 1.0)
        .click_wait(area::VALUE_FIELD, 1.0)
        .type_text(value.trim())
        .wait_secs(1.0)
        .click(area::VALUE_OK)
}

/// Cell spacing and roughness, then generate the computation points.
pub fn flow_area_script(config: &RunConfiguration) -> Script {
    Script::new()
        .note("Generating the 2D mesh")
        .wait_secs(2.0)
        .right_click(area::FLOW_AREAS)
        .wait_secs(1.0)
        .click_wait(area::FLOW_AREA_EDITOR, 2.0)
        .then(overwrite(area::SPACING_DX, &config.point_spacing_dx))
        .wait_secs(1.0)
        .then(overwrite(area::SPACING_DY, &config.point_spacing_dy))
        .wait_secs(1.0)
        .then(overwrite(area::MANNINGS_N, &config.default_mannings_n))
        .wait_secs(5.0)
        .click_wait(area::GENERATE_POINTS, 25.0)
        .click_wait(area::FORCE_RECOMPUTE, 10.0)
        .close_window()
}

pub fn breakline_script(config: &RunConfiguration) -> Script {
    Script::new()
        .note("Setting breakline cell spacing")
        .wait_secs(1.0)
        .right_click(area::BREAKLINE_NODE)
        .wait_secs(2.0)
        .click_wait(area::BREAKLINE_PROPERTIES, 5.0)
        .then(breakline_value(area::NEAR_SPACING_COLUMN, &config.near_spacing_m))
        .wait_secs(2.0)
        .then(breakline_value(area::REPEATS_COLUMN, &config.repeats))
        .wait_secs(2.0)
        .then(breakline_value(area::FAR_SPACING_COLUMN, &config.far_spacing_m))
        .wait_secs(2.0)
        .click(area::BREAKLINE_OK)
}

pub fn fix_meshes_script() -> Script {
    let mut script = Script::new()
        .note("Regenerating the mesh")
        .wait_secs(2.0)
        .right_click(area::FLOW_AREAS_AGAIN)
        .wait_secs(1.0)
        .click_wait(area::RECOMPUTE_ALL, 5.0)
        .click(mapper::RESET_VIEW)
        .note("Fixing meshes");
    for _ in 0..FIX_MESH_PASSES {
        script = script
            .wait_secs(2.0)
            .right_click(area::PERIMETER_MESH)
            .wait_secs(1.0)
            .click_wait(area::FIX_ALL_MESHES, 15.0)
            .close_window();
    }
    script
}

/// Mesh generation after the boundary conditions are drawn.
pub fn run(ctx: &mut RunContext) -> Result<()> {
    ctx.play(save_edits().then(save_edits()))?;
    ctx.play(flow_area_script(&ctx.config))?;
    ctx.play(breakline_script(&ctx.config))?;
    ctx.play(fix_meshes_script())?;
    ctx.play(save_edits().wait_secs(2.0).click(area::FIX_MESH_FOCUS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::context::testing::Harness;
    use crate::core::desktop::fake::{Action, RecordingDesktop};

    #[test]
    fn test_mesh_values_come_from_the_form() {
        let config = RunConfiguration {
            point_spacing_dx: "20".to_string(),
            point_spacing_dy: "25".to_string(),
            default_mannings_n: "0.045".to_string(),
            near_spacing_m: "4".to_string(),
            repeats: "3".to_string(),
            far_spacing_m: "8".to_string(),
            ..RunConfiguration::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let mut h = Harness::new(config, dir.path(), RecordingDesktop::default());
        run(&mut h.ctx).unwrap();

        assert_eq!(h.desktop.typed(), vec!["20", "25", "0.045", "4", "3", "8"]);
        assert_eq!(
            h.desktop.count(&Action::LeftClick(area::FIX_ALL_MESHES)),
            FIX_MESH_PASSES
        );
        assert_eq!(h.desktop.count(&Action::LeftClick(mapper::SAVE)), 3);
    }

    #[test]
    fn test_fields_are_cleared_before_typing() {
        let script = flow_area_script(&RunConfiguration::default());
        let clears = script
            .steps()
            .iter()
            .filter(|s| {
                matches!(
                    s,
                    crate::automation::script::Step::Press {
                        key: Key::Backspace,
                        times: 10
                    }
                )
            })
            .count();
        assert_eq!(clears, 3);
    }
}
