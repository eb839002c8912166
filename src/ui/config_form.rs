use crate::hydrology::intervals::IntervalField;
use crate::hydrology::rainfall::MAX_STORM_HOURS;
use crate::settings::RunConfiguration;
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormUiAction {
    Changed,
    None,
}

const LABEL_WIDTH: f32 = 190.0;

/// What a Browse button picks.
#[derive(Clone, Copy)]
enum Pick {
    Folder,
    File(&'static str, &'static [&'static str]),
}

fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.add_sized(
        [LABEL_WIDTH, 18.0],
        egui::Label::new(egui::RichText::new(text).strong()),
    );
}

#[cfg(windows)]
fn browse(ui: &mut egui::Ui, value: &mut String, title: &str, pick: Pick) -> bool {
    if !ui.button("Browse...").clicked() {
        return false;
    }
    let dialog = rfd::FileDialog::new().set_title(title);
    let picked = match pick {
        Pick::Folder => dialog.pick_folder(),
        Pick::File(name, extensions) => dialog.add_filter(name, extensions).pick_file(),
    };
    match picked {
        Some(path) => {
            *value = path.display().to_string();
            true
        }
        None => false,
    }
}

#[cfg(not(windows))]
fn browse(_ui: &mut egui::Ui, _value: &mut String, _title: &str, _pick: Pick) -> bool {
    false
}

fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String, width: f32) -> bool {
    ui.horizontal(|ui| {
        field_label(ui, label);
        ui.add(egui::TextEdit::singleline(value).desired_width(width))
            .changed()
    })
    .inner
}

fn path_row(ui: &mut egui::Ui, label: &str, value: &mut String, pick: Pick) -> bool {
    ui.horizontal(|ui| {
        field_label(ui, label);
        let edited = ui
            .add(egui::TextEdit::singleline(value).desired_width(300.0))
            .changed();
        let title = format!("Select {}", label.trim_end_matches(':'));
        edited | browse(ui, value, &title, pick)
    })
    .inner
}

fn interval_row(ui: &mut egui::Ui, field: IntervalField, value: &mut String) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        field_label(ui, &format!("{}:", field.label()));
        egui::ComboBox::from_id_source(field.label())
            .selected_text(if value.is_empty() { "Select..." } else { value.as_str() })
            .width(140.0)
            .show_ui(ui, |ui| {
                for option in field.options() {
                    let selected = value.as_str() == *option;
                    if ui.selectable_label(selected, *option).clicked() && !selected {
                        *value = option.to_string();
                        changed = true;
                    }
                }
            });
    });
    changed
}

fn section(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui) -> bool) -> bool {
    let mut changed = false;
    ui.group(|ui| {
        ui.heading(egui::RichText::new(title).size(14.0).strong());
        ui.add_space(4.0);
        changed = body(ui);
    });
    ui.add_space(6.0);
    changed
}

/// The run form, grouped the way the steps use it. Disabled while a run is active.
pub fn render_config_form(ui: &mut egui::Ui, config: &mut RunConfiguration, enabled: bool) -> FormUiAction {
    let shapefile = Pick::File("Shapefiles", &["shp"]);

    let changed = ui
        .add_enabled_ui(enabled, |ui| {
            let mut changed = section(ui, "Project Information", |ui| {
                let mut c = text_row(ui, "Area Name:", &mut config.area_name, 200.0);
                c |= path_row(ui, "Input Folder:", &mut config.input_folder, Pick::Folder);
                c |= path_row(ui, "Output/Download Folder:", &mut config.output_folder, Pick::Folder);
                c |= path_row(ui, "Documents Folder:", &mut config.documents_folder, Pick::Folder);
                c | path_row(
                    ui,
                    "Projection File (.prj):",
                    &mut config.projection_file,
                    Pick::File("PRJ files", &["prj"]),
                )
            });

            changed |= section(ui, "Geometry Setup", |ui| {
                let mut c = path_row(
                    ui,
                    "Terrain File:",
                    &mut config.terrain_file,
                    Pick::File("TIFF files", &["tif"]),
                );
                c |= path_row(ui, "2D Flow Area Shape File:", &mut config.flow_area_file, shapefile);
                c | path_row(ui, "Breaklines Shape File:", &mut config.breaklines_file, shapefile)
            });

            changed |= section(ui, "Hydraulic Properties", |ui| {
                let mut c = path_row(ui, "Land Use Shape File:", &mut config.land_use_file, shapefile);
                c |= path_row(ui, "Soil Layer Shape File:", &mut config.soil_file, shapefile);
                c | text_row(ui, "Default Manning's n:", &mut config.default_mannings_n, 80.0)
            });

            changed |= section(ui, "2D Flow Area Editor", |ui| {
                let c = text_row(ui, "Points Spacing DX:", &mut config.point_spacing_dx, 80.0);
                c | text_row(ui, "Points Spacing DY:", &mut config.point_spacing_dy, 80.0)
            });

            changed |= section(ui, "Breakline Properties", |ui| {
                let mut c = text_row(ui, "Near Spacing (m):", &mut config.near_spacing_m, 80.0);
                c |= text_row(ui, "Repeats:", &mut config.repeats, 80.0);
                c | text_row(ui, "Far Spacing (m):", &mut config.far_spacing_m, 80.0)
            });

            changed |= section(ui, "Precipitation Data", |ui| render_precipitation(ui, config));

            changed |= section(ui, "Simulation Time Window", |ui| {
                let c = text_row(ui, "Starting Time (HHMM):", &mut config.starting_time, 60.0);
                c | text_row(ui, "Ending Time (HHMM):", &mut config.ending_time, 60.0)
            });

            changed |= section(ui, "Computation Settings", |ui| {
                let mut c = interval_row(ui, IntervalField::Computation, &mut config.computation_interval);
                c |= interval_row(
                    ui,
                    IntervalField::HydrographOutput,
                    &mut config.hydrograph_output_interval,
                );
                c |= interval_row(ui, IntervalField::MappingOutput, &mut config.mapping_output_interval);
                c | interval_row(ui, IntervalField::DetailedOutput, &mut config.detailed_output_interval)
            });
            changed
        })
        .inner;

    if changed {
        FormUiAction::Changed
    } else {
        FormUiAction::None
    }
}

fn render_precipitation(ui: &mut egui::Ui, config: &mut RunConfiguration) -> bool {
    let mut changed = ui
        .checkbox(&mut config.use_rainfall_file, "User Input for Precipitation Data")
        .changed();

    if config.use_rainfall_file {
        changed |= path_row(
            ui,
            "Rainfall Data:",
            &mut config.rainfall_file,
            Pick::File("DAT files", &["dat"]),
        );
        changed |= interval_row(ui, IntervalField::Precipitation, &mut config.rainfall_interval);
    } else {
        ui.label(
            egui::RichText::new("Without a rainfall file an SCS Type III design storm is used.")
                .italics()
                .small(),
        );
        let storm = &mut config.storm;
        ui.horizontal(|ui| {
            field_label(ui, "Total Rainfall (mm):");
            changed |= ui
                .add(egui::DragValue::new(&mut storm.total_depth_mm).clamp_range(1.0..=2000.0).speed(1.0))
                .changed();
        });
        ui.horizontal(|ui| {
            field_label(ui, "Storm Duration (h):");
            changed |= ui
                .add(egui::DragValue::new(&mut storm.duration_hours).clamp_range(1..=MAX_STORM_HOURS))
                .changed();
        });
        ui.horizontal(|ui| {
            field_label(ui, "Time Step (min):");
            changed |= ui
                .add(egui::DragValue::new(&mut storm.step_minutes).clamp_range(1..=60))
                .changed();
        });
        if let Err(e) = storm.validate() {
            ui.colored_label(egui::Color32::from_rgb(255, 100, 100), e.to_string());
        }
    }

    changed |= text_row(ui, "Default Friction Slope:", &mut config.friction_slope, 80.0);
    changed
}
