use crate::hydrology::intervals::IntervalField;
use crate::hydrology::rainfall::SyntheticStorm;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub run: RunConfiguration,

    #[serde(default)]
    pub tools: ToolSettings,
}

/// Every value the operator enters on the form. The whole run reads from one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfiguration {
    // Project
    pub area_name: String,
    pub input_folder: String,
    pub output_folder: String,
    pub documents_folder: String,

    // Spatial inputs
    pub projection_file: String,
    pub terrain_file: String,
    pub flow_area_file: String,
    pub breaklines_file: String,
    pub land_use_file: String,
    pub soil_file: String,

    // Mesh
    pub point_spacing_dx: String,
    pub point_spacing_dy: String,
    pub default_mannings_n: String,
    pub near_spacing_m: String,
    pub repeats: String,
    pub far_spacing_m: String,

    // Rainfall
    pub use_rainfall_file: bool,
    pub rainfall_file: String,
    pub rainfall_interval: String,
    pub storm: SyntheticStorm,
    pub friction_slope: String,

    // Simulation
    pub starting_time: String,
    pub ending_time: String,
    pub computation_interval: String,
    pub hydrograph_output_interval: String,
    pub mapping_output_interval: String,
    pub detailed_output_interval: String,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            area_name: String::new(),
            input_folder: String::new(),
            output_folder: String::new(),
            documents_folder: dirs::document_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            projection_file: String::new(),
            terrain_file: String::new(),
            flow_area_file: String::new(),
            breaklines_file: String::new(),
            land_use_file: String::new(),
            soil_file: String::new(),
            point_spacing_dx: "10".to_string(),
            point_spacing_dy: "10".to_string(),
            default_mannings_n: "0.06".to_string(),
            near_spacing_m: "5".to_string(),
            repeats: "2".to_string(),
            far_spacing_m: "7.5".to_string(),
            use_rainfall_file: false,
            rainfall_file: String::new(),
            rainfall_interval: String::new(),
            storm: SyntheticStorm::default(),
            friction_slope: "0.001".to_string(),
            starting_time: "0100".to_string(),
            ending_time: "1100".to_string(),
            computation_interval: "1 Minute".to_string(),
            hydrograph_output_interval: "1 Hour".to_string(),
            mapping_output_interval: "1 Hour".to_string(),
            detailed_output_interval: "1 Hour".to_string(),
        }
    }
}

impl RunConfiguration {
    /// Labels of required fields left blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut required: Vec<(&'static str, &str)> = vec![
            ("Area Name", self.area_name.as_str()),
            ("Input Folder", self.input_folder.as_str()),
            ("Output Folder", self.output_folder.as_str()),
            ("Documents Folder", self.documents_folder.as_str()),
            ("Projection File", self.projection_file.as_str()),
            ("Terrain File", self.terrain_file.as_str()),
            ("2D Flow Area Shapefile", self.flow_area_file.as_str()),
            ("Breaklines Shapefile", self.breaklines_file.as_str()),
            ("Land Use Shapefile", self.land_use_file.as_str()),
            ("Soil Shapefile", self.soil_file.as_str()),
            ("Point Spacing DX", self.point_spacing_dx.as_str()),
            ("Point Spacing DY", self.point_spacing_dy.as_str()),
            ("Default Mannings n", self.default_mannings_n.as_str()),
            ("Near Spacing", self.near_spacing_m.as_str()),
            ("Near Repeats", self.repeats.as_str()),
            ("Far Spacing", self.far_spacing_m.as_str()),
        ];
        if self.use_rainfall_file {
            required.push(("Rainfall Data File", self.rainfall_file.as_str()));
            required.push((IntervalField::Precipitation.label(), self.rainfall_interval.as_str()));
        }
        required.extend([
            ("Starting Time", self.starting_time.as_str()),
            ("Ending Time", self.ending_time.as_str()),
            (IntervalField::Computation.label(), self.computation_interval.as_str()),
            (
                IntervalField::HydrographOutput.label(),
                self.hydrograph_output_interval.as_str(),
            ),
            (
                IntervalField::MappingOutput.label(),
                self.mapping_output_interval.as_str(),
            ),
            (
                IntervalField::DetailedOutput.label(),
                self.detailed_output_interval.as_str(),
            ),
        ]);

        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| label)
            .collect()
    }

    /// Check the form before a run. The error lists every problem on its own line.
    pub fn validate(&self) -> Result<(), String> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(format!(
                "Please provide values for the following inputs: {}",
                missing.join(", ")
            ));
        }

        let mut problems = Vec::new();
        for (label, value) in [
            ("Point Spacing DX", &self.point_spacing_dx),
            ("Point Spacing DY", &self.point_spacing_dy),
            ("Default Mannings n", &self.default_mannings_n),
            ("Near Spacing", &self.near_spacing_m),
            ("Far Spacing", &self.far_spacing_m),
        ] {
            match value.trim().parse::<f64>() {
                Ok(v) if v > 0.0 => {}
                _ => problems.push(format!("{} must be a positive number", label)),
            }
        }
        if self.repeats.trim().parse::<u32>().is_err() {
            problems.push("Near Repeats must be a whole number".to_string());
        }

        for (label, value) in [
            ("Starting Time", &self.starting_time),
            ("Ending Time", &self.ending_time),
        ] {
            if parse_hhmm(value).is_none() {
                problems.push(format!("{} must be a 24-hour time like 0100", label));
            }
        }
        // The window may run past midnight; the dates come from the rainfall record.

        let mut intervals = vec![
            (IntervalField::Computation, &self.computation_interval),
            (IntervalField::HydrographOutput, &self.hydrograph_output_interval),
            (IntervalField::MappingOutput, &self.mapping_output_interval),
            (IntervalField::DetailedOutput, &self.detailed_output_interval),
        ];
        if self.use_rainfall_file {
            intervals.insert(0, (IntervalField::Precipitation, &self.rainfall_interval));
        } else if let Err(e) = self.storm.validate() {
            problems.push(e.to_string());
        }
        for (field, value) in intervals {
            if field.index_of(value).is_none() {
                problems.push(format!("{} '{}' is not a HEC-RAS option", field.label(), value));
            }
        }

        if !self.friction_slope.trim().is_empty()
            && parse_friction_slope(&self.friction_slope).is_none()
        {
            problems.push("Friction Slope must be a positive number".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("\n"))
        }
    }

    pub fn area(&self) -> &str {
        self.area_name.trim()
    }

    /// First four letters of the area, upper-cased. Used in short HEC-RAS identifiers.
    pub fn prefix(&self) -> String {
        self.area().chars().take(4).collect::<String>().to_uppercase()
    }

    pub fn project_name(&self) -> String {
        format!("{} HEC-RAS Project", self.area())
    }

    pub fn geometry_name(&self) -> String {
        format!("{}_Geometry", self.area())
    }

    pub fn perimeter_name(&self) -> String {
        format!("{} Perimeter", self.prefix())
    }

    pub fn short_id(&self) -> String {
        format!("{} Flow", self.prefix())
    }

    pub fn description(&self, created: &str) -> String {
        format!(
            "The Simulation of 2D Rainfall at {}, South Africa. (Created: {})",
            self.area(),
            created
        )
    }

    pub fn unsteady_flow_data_name(&self) -> String {
        format!("{} Unsteady Flow Data", self.area())
    }

    pub fn plan_data_name(&self) -> String {
        format!("{} Unsteady Flow Plan Data", self.area())
    }
}

/// Minutes after midnight for a valid HHMM string.
pub fn parse_hhmm(value: &str) -> Option<u32> {
    let re = Regex::new(r"^([01]\d|2[0-3])([0-5]\d)$").ok()?;
    let caps = re.captures(value.trim())?;
    let hours: u32 = caps[1].parse().ok()?;
    let minutes: u32 = caps[2].parse().ok()?;
    Some(hours * 60 + minutes)
}

pub fn parse_friction_slope(value: &str) -> Option<f64> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => None,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToolSettings {
    pub abort_hotkey: HotkeyConfig,
    /// Where the OS drops screenshots and recordings. `None` uses Pictures\Screenshots.
    pub screenshot_folder: Option<PathBuf>,
    pub ras_prog_id: String,
    /// Give up on a status poll after this many seconds. `None` polls until cancelled.
    pub poll_timeout_secs: Option<u64>,
    /// Multiplier on every scripted wait; raise it on slow machines.
    pub step_delay_scale: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            abort_hotkey: HotkeyConfig::default(),
            screenshot_folder: None,
            ras_prog_id: "RAS631.HECRASController".to_string(),
            poll_timeout_secs: None,
            step_delay_scale: 1.0,
        }
    }
}

impl ToolSettings {
    pub fn screenshot_dir(&self) -> Option<PathBuf> {
        self.screenshot_folder
            .clone()
            .or_else(|| dirs::picture_dir().map(|p| p.join("Screenshots")))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotkeyConfig {
    pub key: Option<HotkeyKey>,
    #[serde(default)]
    pub modifiers: HotkeyModifiers,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            key: Some(HotkeyKey::F12),
            modifiers: HotkeyModifiers::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotkeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HotkeyKey {
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Escape,
    Pause,
    Insert,
    Home,
    End,
}

impl HotkeyKey {
    pub const ALL: [HotkeyKey; 17] = [
        HotkeyKey::F1,
        HotkeyKey::F2,
        HotkeyKey::F3,
        HotkeyKey::F4,
        HotkeyKey::F5,
        HotkeyKey::F6,
        HotkeyKey::F7,
        HotkeyKey::F8,
        HotkeyKey::F9,
        HotkeyKey::F10,
        HotkeyKey::F11,
        HotkeyKey::F12,
        HotkeyKey::Escape,
        HotkeyKey::Pause,
        HotkeyKey::Insert,
        HotkeyKey::Home,
        HotkeyKey::End,
    ];
}

impl AppSettings {
    const SETTINGS_FILE: &'static str = "rog_automation_settings.json";

    /// Load settings from file, or create default if doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string(Self::SETTINGS_FILE) {
            Ok(contents) => Self::from_json(&contents),
            Err(_) => Self::default(),
        }
    }

    fn from_json(contents: &str) -> Self {
        match serde_json::from_str::<AppSettings>(contents) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring unreadable {}: {}", Self::SETTINGS_FILE, e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;

        fs::write(Self::SETTINGS_FILE, json).map_err(|e| format!("Failed to write file: {}", e))?;

        Ok(())
    }

    /// Auto-save (ignores errors)
    pub fn auto_save(&self) {
        if let Err(e) = self.save() {
            tracing::warn!("{}", e);
        }
    }
}
