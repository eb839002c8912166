use crate::error::{AutomationError, Result};
use crate::hydrology::intervals::minutes_label;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Longest storm the form offers: one week.
pub const MAX_STORM_HOURS: u32 = 168;

/// SCS Type III hourly weights, as used for South African design storms.
pub const SCS_TYPE_III_HOURLY: [f64; 16] = [
    0.01, 0.02, 0.03, 0.05, 0.07, 0.09, 0.11, 0.12, 0.10, 0.08, 0.07, 0.05, 0.04, 0.03, 0.02, 0.01,
];

const DAT_HEADER: &str = "Date\tTime\tPrecipitation (mm)";

/// The fallback storm used when the operator supplies no rainfall file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyntheticStorm {
    pub total_depth_mm: f64,
    pub duration_hours: u32,
    pub step_minutes: u32,
}

impl Default for SyntheticStorm {
    fn default() -> Self {
        Self {
            total_depth_mm: 120.0,
            duration_hours: 24,
            step_minutes: 5,
        }
    }
}

impl SyntheticStorm {
    fn duration_minutes(&self) -> u64 {
        u64::from(self.duration_hours) * 60
    }

    pub fn interval_count(&self) -> usize {
        if self.step_minutes == 0 {
            return 0;
        }
        usize::try_from(self.duration_minutes() / u64::from(self.step_minutes)).unwrap_or(usize::MAX)
    }

    /// Combo label of the storm's time step, e.g. "5 Minute".
    pub fn interval_label(&self) -> Option<String> {
        minutes_label(self.step_minutes)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.total_depth_mm.is_finite() || self.total_depth_mm <= 0.0 {
            return Err(AutomationError::Rainfall(format!(
                "Total rainfall must be positive, got {}",
                self.total_depth_mm
            )));
        }
        if self.duration_hours == 0 || self.step_minutes == 0 {
            return Err(AutomationError::Rainfall(
                "Storm duration and time step must be non-zero".to_string(),
            ));
        }
        if self.duration_hours > MAX_STORM_HOURS {
            return Err(AutomationError::Rainfall(format!(
                "Storm duration is limited to {} hours, got {}",
                MAX_STORM_HOURS, self.duration_hours
            )));
        }
        if self.duration_minutes() % u64::from(self.step_minutes) != 0 {
            return Err(AutomationError::Rainfall(format!(
                "A {} minute step does not divide a {} hour storm",
                self.step_minutes, self.duration_hours
            )));
        }
        if self.interval_label().is_none() {
            return Err(AutomationError::Rainfall(format!(
                "HEC-RAS has no {} minute precipitation interval",
                self.step_minutes
            )));
        }
        Ok(())
    }

    /// Hourly weights stretched over the interval count.
    ///
    /// Bin `i` covers intervals `floor(i*n/16)..floor((i+1)*n/16)`, so every interval gets a
    /// weight and bins differ in length by at most one interval.
    pub fn weights(&self) -> Vec<f64> {
        let count = self.interval_count();
        let bins = SCS_TYPE_III_HOURLY.len();
        let mut weights = Vec::with_capacity(count);
        for (i, weight) in SCS_TYPE_III_HOURLY.iter().enumerate() {
            let from = i * count / bins;
            let to = (i + 1) * count / bins;
            weights.extend(std::iter::repeat(*weight).take(to - from));
        }
        weights
    }

    /// Per-interval depths, normalized so they sum to `total_depth_mm`.
    pub fn depths(&self) -> Vec<f64> {
        let weights = self.weights();
        let sum: f64 = weights.iter().sum();
        if sum <= 0.0 {
            return weights;
        }
        weights
            .iter()
            .map(|w| self.total_depth_mm * w / sum)
            .collect()
    }

    pub fn hyetograph(&self, start: NaiveDate) -> Result<Hyetograph> {
        self.validate()?;
        let origin = start.and_hms_opt(0, 0, 0).ok_or_else(|| {
            AutomationError::Rainfall(format!("Invalid storm start date {}", start))
        })?;
        let rows = self
            .depths()
            .into_iter()
            .enumerate()
            .map(|(i, depth)| {
                let at = origin + Duration::minutes(i as i64 * self.step_minutes as i64);
                RainfallRow {
                    date: at.format("%d%b%Y").to_string().to_uppercase(),
                    time: at.format("%H%M").to_string(),
                    depth_mm: depth,
                    entry: depth.to_string(),
                }
            })
            .collect();
        Ok(Hyetograph { rows })
    }

    /// File the generated storm is saved under in the run folder.
    pub fn file_name(&self, area_name: &str) -> String {
        format!(
            "{} SA SCS T3 ({}mm).dat",
            area_name,
            format_depth(self.total_depth_mm)
        )
    }
}

fn format_depth(depth: f64) -> String {
    if depth.fract() == 0.0 {
        format!("{:.0}", depth)
    } else {
        depth.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RainfallRow {
    pub date: String,
    pub time: String,
    pub depth_mm: f64,
    /// Text typed into the precipitation table.
    pub entry: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hyetograph {
    pub rows: Vec<RainfallRow>,
}

impl Hyetograph {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn start_date(&self) -> &str {
        self.rows.first().map(|r| r.date.as_str()).unwrap_or_default()
    }

    pub fn start_time(&self) -> &str {
        self.rows.first().map(|r| r.time.as_str()).unwrap_or_default()
    }

    pub fn end_date(&self) -> &str {
        self.rows.last().map(|r| r.date.as_str()).unwrap_or_default()
    }

    pub fn total_mm(&self) -> f64 {
        self.rows.iter().map(|r| r.depth_mm).sum()
    }

    /// Parse a tab-delimited `.dat` file: date, time, depth. A header row is allowed.
    pub fn parse_dat(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        let mut seen_first = false;
        for (index, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let is_first = !seen_first;
            seen_first = true;

            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            if fields.len() < 3 {
                return Err(AutomationError::Rainfall(format!(
                    "Line {}: expected date, time and depth separated by tabs",
                    index + 1
                )));
            }
            let depth_mm = match fields[2].parse::<f64>() {
                Ok(depth) => depth,
                Err(_) if is_first => continue,
                Err(_) => {
                    return Err(AutomationError::Rainfall(format!(
                        "Line {}: '{}' is not a rainfall depth",
                        index + 1,
                        fields[2]
                    )))
                }
            };
            rows.push(RainfallRow {
                date: fields[0].to_string(),
                time: fields[1].to_string(),
                depth_mm,
                entry: fields[2].to_string(),
            });
        }
        let hyetograph = Self { rows };
        if hyetograph.is_empty() {
            return Err(AutomationError::Rainfall(
                "Rainfall file contains no data rows".to_string(),
            ));
        }
        Ok(hyetograph)
    }

    pub fn read_dat(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| AutomationError::io(path, e))?;
        Self::parse_dat(&text)
    }

    pub fn to_dat(&self) -> String {
        let mut out = String::from(DAT_HEADER);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format!("{}\t{}\t{}\n", row.date, row.time, row.entry));
        }
        out
    }

    pub fn write_dat(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_dat()).map_err(|e| AutomationError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
    }

    #[test]
    fn test_default_storm_sums_to_total() {
        let storm = SyntheticStorm::default();
        assert_eq!(storm.interval_count(), 288);
        let total: f64 = storm.depths().iter().sum();
        assert!((total - 120.0).abs() < 1e-9, "total was {}", total);
    }

    #[test]
    fn test_default_storm_repeats_each_hour_evenly() {
        let weights = SyntheticStorm::default().weights();
        assert_eq!(weights.len(), 288);
        assert!(weights[..18].iter().all(|w| *w == 0.01));
        assert!(weights[126..144].iter().all(|w| *w == 0.12));
        assert_eq!(weights[287], 0.01);
    }

    #[test]
    fn test_uneven_interval_counts_still_fill_and_sum() {
        for (hours, step) in [(24, 15), (6, 5), (24, 60), (3, 10), (1, 5), (48, 30)] {
            let storm = SyntheticStorm {
                total_depth_mm: 87.5,
                duration_hours: hours,
                step_minutes: step,
            };
            let depths = storm.depths();
            assert_eq!(depths.len(), storm.interval_count());
            let total: f64 = depths.iter().sum();
            assert!((total - 87.5).abs() < 1e-9, "{}h/{}min summed to {}", hours, step, total);
        }
    }

    #[test]
    fn test_hyetograph_timestamps() {
        let hyeto = SyntheticStorm::default().hyetograph(day()).unwrap();
        assert_eq!(hyeto.len(), 288);
        assert_eq!(hyeto.start_date(), "28JUN2024");
        assert_eq!(hyeto.start_time(), "0000");
        assert_eq!(hyeto.rows[1].time, "0005");
        assert_eq!(hyeto.rows[287].time, "2355");
        assert_eq!(hyeto.end_date(), "28JUN2024");
    }

    #[test]
    fn test_multi_day_storm_ends_next_day() {
        let storm = SyntheticStorm {
            duration_hours: 48,
            step_minutes: 60,
            ..Default::default()
        };
        let hyeto = storm.hyetograph(day()).unwrap();
        assert_eq!(hyeto.end_date(), "29JUN2024");
    }

    #[test]
    fn test_invalid_storms_are_rejected() {
        let bad_step = SyntheticStorm {
            step_minutes: 7,
            ..Default::default()
        };
        assert!(bad_step.validate().is_err());
        let no_rain = SyntheticStorm {
            total_depth_mm: 0.0,
            ..Default::default()
        };
        assert!(no_rain.hyetograph(day()).is_err());
    }

    #[test]
    fn test_oversized_storm_from_settings_file_is_rejected() {
        let storm = SyntheticStorm {
            duration_hours: u32::MAX,
            step_minutes: 1,
            ..Default::default()
        };
        assert_eq!(storm.interval_count(), u32::MAX as usize * 60);
        assert!(storm.validate().is_err());
        assert!(storm.hyetograph(day()).is_err());

        let week = SyntheticStorm {
            duration_hours: MAX_STORM_HOURS,
            step_minutes: 60,
            ..Default::default()
        };
        assert_eq!(week.validate().ok(), Some(()));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            SyntheticStorm::default().file_name("Durban"),
            "Durban SA SCS T3 (120mm).dat"
        );
    }

    #[test]
    fn test_parse_user_dat() {
        let text = "01JAN2024\t0100\t0\r\n01JAN2024\t0200\t12.5\n\n01JAN2024\t0300\t3\n";
        let hyeto = Hyetograph::parse_dat(text).unwrap();
        assert_eq!(hyeto.len(), 3);
        assert_eq!(hyeto.start_date(), "01JAN2024");
        assert_eq!(hyeto.start_time(), "0100");
        assert_eq!(hyeto.rows[1].entry, "12.5");
        assert!((hyeto.total_mm() - 15.5).abs() < 1e-12);
    }

    #[test]
    fn test_generated_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storm.dat");
        let hyeto = SyntheticStorm::default().hyetograph(day()).unwrap();
        hyeto.write_dat(&path).unwrap();

        let back = Hyetograph::read_dat(&path).unwrap();
        assert_eq!(back.len(), hyeto.len());
        assert!((back.total_mm() - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_bad_depth_is_an_error() {
        let text = "01JAN2024\t0100\t1\n01JAN2024\t0200\tlots\n";
        assert!(Hyetograph::parse_dat(text).is_err());
        assert!(Hyetograph::parse_dat("01JAN2024 0100 1\n").is_err());
        assert!(Hyetograph::parse_dat("Date\tTime\tPrecipitation (mm)\n").is_err());
        assert!(Hyetograph::parse_dat("\r\n\n").is_err());
    }
}
