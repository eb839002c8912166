use super::file_name_of;
use super::layout::file_dialog;
use super::layout::flow_area as area;
use super::layout::main_window as main;
use super::layout::mapper;
use crate::automation::context::RunContext;
use crate::automation::poller::{poll_until_complete, PollSpec};
use crate::automation::script::Script;
use crate::core::coords::Point;
use crate::core::desktop::Key;
use crate::error::Result;
use crate::settings::RunConfiguration;

/// Navigate the open-file dialog to the input folder and pick `file`.
fn pick_input(path_bar: Point, folder: &str, file: &str) -> Script {
    Script::new()
        .click_wait(path_bar, 1.0)
        .type_text(folder)
        .press(Key::Enter)
        .wait_secs(2.0)
        .click_wait(file_dialog::FILE_NAME, 1.0)
        .type_text(file_name_of(file))
        .wait_secs(1.0)
        .click_wait(file_dialog::OPEN, 1.0)
}

/// Right-click each point in turn; tree nodes that ignore the first click get the next.
fn coax_menu(points: &[Point]) -> Script {
    let mut script = Script::new();
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            script = script.wait_secs(0.5);
        }
        script = script.right_click(*point);
    }
    script.wait_secs(2.0)
}

pub fn projection_script(config: &RunConfiguration) -> Script {
    Script::new()
        .note("Opening RAS Mapper")
        .click_wait(main::RAS_MAPPER, 3.0)
        .click_wait(mapper::TITLE_BAR, 1.0)
        .click_wait(mapper::PROJECT_MENU, 2.0)
        .click_wait(mapper::SET_PROJECTION, 1.0)
        .click_wait(mapper::PROJECTION_PATH, 1.0)
        .type_text(config.projection_file.trim())
        .wait_secs(1.0)
        .press(Key::Enter)
}

pub fn terrain_script(config: &RunConfiguration) -> Script {
    Script::new()
        .note("Creating the terrain")
        .wait_secs(2.0)
        .right_click(mapper::TERRAINS)
        .click_wait(mapper::CREATE_TERRAIN_MENU, 1.0)
        .click_wait(mapper::ADD_TERRAIN_FILE, 2.0)
        .then(pick_input(
            file_dialog::TERRAIN_PATH_BAR,
            config.input_folder.trim(),
            &config.terrain_file,
        ))
        .click(mapper::CREATE_TERRAIN)
}

fn layer_script(config: &RunConfiguration, kind: Point, file: &str, lead_secs: f32) -> Script {
    Script::new()
        .wait_secs(lead_secs)
        .right_click(mapper::MAP_LAYERS)
        .wait_secs(1.0)
        .click_wait(mapper::CREATE_LAYER_MENU, 1.0)
        .click_wait(kind, 1.0)
        .click_wait(mapper::ADD_LAYER_FILE, 1.0)
        .then(pick_input(file_dialog::PATH_BAR, config.input_folder.trim(), file))
        .click(mapper::CREATE_LAYER)
}

pub fn land_cover_script(config: &RunConfiguration) -> Script {
    Script::new()
        .note("Creating the land cover layer")
        .then(layer_script(config, mapper::LAND_COVER_LAYER, &config.land_use_file, 5.0))
}

pub fn soils_script(config: &RunConfiguration) -> Script {
    Script::new()
        .note("Creating the soils layer")
        .then(layer_script(config, mapper::SOILS_LAYER, &config.soil_file, 2.0))
}

/// Collapse the map layers, save, then add and open the new geometry.
pub fn new_geometry_script(config: &RunConfiguration) -> Script {
    Script::new()
        .wait_secs(2.0)
        .click_wait(mapper::MAP_LAYERS_CHECK, 1.0)
        .click_wait(mapper::MAP_LAYERS_COLLAPSE, 2.0)
        .click_wait(mapper::FILE_MENU, 2.0)
        .click_wait(mapper::SAVE, 2.0)
        .note("Adding the geometry")
        .right_click(mapper::GEOMETRIES)
        .wait_secs(1.0)
        .click_wait(mapper::ADD_GEOMETRY, 1.0)
        .type_text(config.geometry_name())
        .wait_secs(1.0)
        .click_wait(mapper::ADD_GEOMETRY_OK, 2.0)
        .right_click(mapper::NEW_GEOMETRY)
        .wait_secs(1.0)
        .click_wait(mapper::EDIT_GEOMETRY, 1.0)
        .click(mapper::EXPAND_2D_AREAS)
}

pub fn perimeter_script(config: &RunConfiguration) -> Script {
    Script::new()
        .note("Importing the 2D flow area perimeter")
        .wait_secs(2.0)
        .then(coax_menu(&area::PERIMETERS))
        .click_wait(area::IMPORT_PERIMETERS, 5.0)
        .click_wait(area::PERIMETER_SOURCE, 1.0)
        .then(pick_input(
            file_dialog::PATH_BAR,
            config.input_folder.trim(),
            &config.flow_area_file,
        ))
        .click_wait(area::IMPORT_OK, 2.0)
        .note("Renaming the perimeter")
        .right_click(area::PERIMETER_NODE)
        .wait_secs(2.0)
        .click_wait(area::ATTRIBUTE_TABLE, 2.0)
        .click(area::NAME_CELL)
        .click(area::NAME_CELL)
        .click_wait(area::NAME_CELL, 4.0)
        .type_text(config.perimeter_name())
        .press(Key::Enter)
        .wait_secs(2.0)
        .close_window()
}

pub fn breaklines_script(config: &RunConfiguration) -> Script {
    Script::new()
        .note("Importing the breaklines")
        .wait_secs(2.0)
        .then(coax_menu(&area::BREAKLINES))
        .click_wait(area::IMPORT_BREAKLINES, 5.0)
        .click_wait(area::BREAKLINE_SOURCE, 1.0)
        .then(pick_input(
            file_dialog::PATH_BAR,
            config.input_folder.trim(),
            &config.breaklines_file,
        ))
        .click_wait(area::IMPORT_OK, 5.0)
        .click_wait(area::BOUNDARY_CONDITION_TOOL, 2.0)
}

/// RAS Mapper work up to the boundary-condition tool.
pub fn run(ctx: &mut RunContext) -> Result<()> {
    ctx.play(projection_script(&ctx.config))?;

    ctx.play(terrain_script(&ctx.config))?;
    poll_until_complete(ctx, &PollSpec::terrain())?;
    ctx.play(Script::new().close_window())?;

    ctx.play(land_cover_script(&ctx.config))?;
    poll_until_complete(ctx, &PollSpec::land_cover())?;
    ctx.play(Script::new().close_window())?;

    ctx.play(soils_script(&ctx.config))?;
    poll_until_complete(ctx, &PollSpec::soils())?;
    ctx.play(Script::new().close_window())?;

    ctx.play(new_geometry_script(&ctx.config))?;
    ctx.play(perimeter_script(&ctx.config))?;
    ctx.play(breaklines_script(&ctx.config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::context::testing::Harness;
    use crate::automation::poller::{LAND_COVER_COMPLETE, SOILS_COMPLETE, TERRAIN_COMPLETE};
    use crate::automation::script::Step;
    use crate::core::desktop::fake::{Action, RecordingDesktop};

    fn config() -> RunConfiguration {
        RunConfiguration {
            area_name: "Mooi River".to_string(),
            input_folder: r"C:\GIS\Mooi".to_string(),
            projection_file: r"C:\GIS\Mooi\lo31.prj".to_string(),
            terrain_file: r"C:\GIS\Mooi\dem.tif".to_string(),
            flow_area_file: r"C:\GIS\Mooi\perimeter.shp".to_string(),
            breaklines_file: r"C:\GIS\Mooi\roads.shp".to_string(),
            land_use_file: r"C:\GIS\Mooi\landuse.shp".to_string(),
            soil_file: r"C:\GIS\Mooi\soils.shp".to_string(),
            ..RunConfiguration::default()
        }
    }

    #[test]
    fn test_dialogs_get_bare_file_names() {
        let typed = terrain_script(&config())
            .steps()
            .iter()
            .filter_map(|s| match s {
                Step::Type(t) => Some(t.clone()),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(typed, vec![r"C:\GIS\Mooi".to_string(), "dem.tif".to_string()]);
    }

    #[test]
    fn test_perimeter_menu_is_coaxed_with_three_clicks() {
        let script = perimeter_script(&config());
        let right_clicks = script
            .steps()
            .iter()
            .filter(|s| matches!(s, Step::RightClick(_)))
            .count();
        assert_eq!(right_clicks, 4);
    }

    #[test]
    fn test_each_layer_waits_for_its_completion_text() {
        let dir = tempfile::tempdir().unwrap();
        let desktop =
            RecordingDesktop::with_clipboard(&[TERRAIN_COMPLETE, LAND_COVER_COMPLETE, SOILS_COMPLETE]);
        let mut h = Harness::new(config(), dir.path(), desktop);
        run(&mut h.ctx).unwrap();

        assert_eq!(h.desktop.count(&Action::ReadClipboard), 3);
        assert_eq!(
            h.desktop.count(&Action::Chord(vec![Key::Alt, Key::F4])),
            4,
            "three creation dialogs and the attribute table"
        );
        let typed = h.desktop.typed();
        assert!(typed.contains(&r"C:\GIS\Mooi\lo31.prj".to_string()));
        assert!(typed.contains(&"Mooi River_Geometry".to_string()));
        assert!(typed.contains(&"MOOI Perimeter".to_string()));
        assert!(typed.contains(&"roads.shp".to_string()));
        assert_eq!(
            h.desktop.actions().last(),
            Some(&Action::LeftClick(area::BOUNDARY_CONDITION_TOOL))
        );
    }
}
