// Interval combo options in on-screen order. A combo is driven by pressing Up to the
// first entry and then Down `index` times, so the order must match HEC-RAS exactly.

pub const PRECIPITATION_INTERVALS: &[&str] = &[
    "1 Second", "2 Second", "3 Second", "4 Second", "5 Second", "6 Second",
    "10 Second", "12 Second", "15 Second", "20 Second", "30 Second",
    "1 Minute", "2 Minute", "3 Minute", "4 Minute", "5 Minute", "6 Minute",
    "10 Minute", "12 Minute", "15 Minute", "20 Minute", "30 Minute",
    "1 Hour", "2 Hour", "3 Hour", "4 Hour", "6 Hour", "8 Hour", "12 Hour",
    "1 Day", "1 Week", "1 Month", "1 Year",
];

pub const COMPUTATION_INTERVALS: &[&str] = &[
    "0.1 Second", "0.2 Second", "0.3 Second", "0.4 Second", "0.5 Second",
    "1 Second", "2 Second", "3 Second", "4 Second", "5 Second", "6 Second",
    "10 Second", "12 Second", "15 Second", "20 Second", "30 Second",
    "1 Minute", "2 Minute", "3 Minute", "4 Minute", "5 Minute", "6 Minute",
    "10 Minute", "12 Minute", "15 Minute", "20 Minute", "30 Minute",
    "1 Hour", "2 Hour", "3 Hour", "4 Hour", "6 Hour", "8 Hour", "12 Hour", "1 Day",
];

pub const MAPPING_OUTPUT_INTERVALS: &[&str] = &[
    "Max Profile", "0.1 Second", "0.2 Second", "0.3 Second", "0.4 Second", "0.5 Second",
    "1 Second", "2 Second", "3 Second", "4 Second", "5 Second", "6 Second",
    "10 Second", "12 Second", "15 Second", "20 Second", "30 Second",
    "1 Minute", "2 Minute", "3 Minute", "4 Minute", "5 Minute", "6 Minute",
    "10 Minute", "12 Minute", "15 Minute", "20 Minute", "30 Minute",
    "1 Hour", "2 Hour", "3 Hour", "4 Hour", "6 Hour", "8 Hour", "12 Hour",
    "1 Day", "1 Week", "1 Month", "1 Year",
];

pub const DETAILED_OUTPUT_INTERVALS: &[&str] = &[
    "Max Profile", "1 Second", "2 Second", "3 Second", "4 Second", "5 Second", "6 Second",
    "10 Second", "12 Second", "15 Second", "20 Second", "30 Second",
    "1 Minute", "2 Minute", "3 Minute", "4 Minute", "5 Minute", "6 Minute",
    "10 Minute", "12 Minute", "15 Minute", "20 Minute", "30 Minute",
    "1 Hour", "2 Hour", "3 Hour", "4 Hour", "6 Hour", "8 Hour", "12 Hour",
    "1 Day", "1 Week", "1 Month", "1 Year",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalField {
    Precipitation,
    Computation,
    HydrographOutput,
    MappingOutput,
    DetailedOutput,
}

impl IntervalField {
    pub fn label(self) -> &'static str {
        match self {
            IntervalField::Precipitation => "Rainfall Data Time Interval",
            IntervalField::Computation => "Computation Interval",
            IntervalField::HydrographOutput => "Hydrograph Output Interval",
            IntervalField::MappingOutput => "Mapping Output Interval",
            IntervalField::DetailedOutput => "Detailed Output Interval",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            IntervalField::Precipitation | IntervalField::HydrographOutput => PRECIPITATION_INTERVALS,
            IntervalField::Computation => COMPUTATION_INTERVALS,
            IntervalField::MappingOutput => MAPPING_OUTPUT_INTERVALS,
            IntervalField::DetailedOutput => DETAILED_OUTPUT_INTERVALS,
        }
    }

    pub fn index_of(self, value: &str) -> Option<usize> {
        let value = value.trim();
        self.options().iter().position(|option| *option == value)
    }
}

/// Combo label for a step given in whole minutes, e.g. 5 -> "5 Minute", 60 -> "1 Hour".
pub fn minutes_label(minutes: u32) -> Option<String> {
    if minutes == 0 {
        return None;
    }
    let label = if minutes % 1440 == 0 {
        format!("{} Day", minutes / 1440)
    } else if minutes % 60 == 0 {
        format!("{} Hour", minutes / 60)
    } else {
        format!("{} Minute", minutes)
    };
    IntervalField::Precipitation.index_of(&label).map(|_| label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_combo_position() {
        assert_eq!(IntervalField::Precipitation.index_of("1 Second"), Some(0));
        assert_eq!(IntervalField::Precipitation.index_of("5 Minute"), Some(15));
        assert_eq!(IntervalField::Computation.index_of("1 Minute"), Some(16));
        assert_eq!(IntervalField::MappingOutput.index_of("Max Profile"), Some(0));
        assert_eq!(IntervalField::DetailedOutput.index_of("1 Hour"), Some(23));
    }

    #[test]
    fn test_sub_second_steps_only_in_computation_and_mapping() {
        assert!(IntervalField::Computation.index_of("0.1 Second").is_some());
        assert!(IntervalField::MappingOutput.index_of("0.1 Second").is_some());
        assert!(IntervalField::HydrographOutput.index_of("0.1 Second").is_none());
        assert!(IntervalField::DetailedOutput.index_of("0.1 Second").is_none());
    }

    #[test]
    fn test_minutes_label() {
        assert_eq!(minutes_label(5).as_deref(), Some("5 Minute"));
        assert_eq!(minutes_label(60).as_deref(), Some("1 Hour"));
        assert_eq!(minutes_label(1440).as_deref(), Some("1 Day"));
        assert_eq!(minutes_label(7), None);
        assert_eq!(minutes_label(0), None);
    }
}
