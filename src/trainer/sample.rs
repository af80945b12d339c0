use csv::StringRecord;

/// Single training observation: solar irradiance paired with the derived
/// power output.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub irradiance: f64,
    pub power_output: f64,
}

impl Sample {
    /// Parses a raw CSV record.
    ///
    /// Field 0 is an identifier and is ignored; fields 1, 2 and 3 are the
    /// panel area, irradiance and panel efficiency. Power output is derived
    /// as `area · irradiance · efficiency`. Returns [`None`] for records
    /// with fewer than 4 fields or non-numeric values.
    pub fn from_record(record: &StringRecord) -> Option<Self> {
        if record.len() < 4 {
            return None;
        }
        let area: f64 = record.get(1)?.trim().parse().ok()?;
        let irradiance: f64 = record.get(2)?.trim().parse().ok()?;
        let efficiency: f64 = record.get(3)?.trim().parse().ok()?;
        Some(Self {
            irradiance,
            power_output: area * irradiance * efficiency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_record_ok() {
        let record = StringRecord::from(vec!["2024-06-01T12:00", "2.0", "800.0", "0.2"]);
        let sample = Sample::from_record(&record).unwrap();
        assert_eq!(sample.irradiance, 800.0);
        assert_eq!(sample.power_output, 2.0 * 800.0 * 0.2);
    }

    #[test]
    fn from_record_trims_whitespace_ok() {
        let record = StringRecord::from(vec!["1", " 2.0 ", " 3.0", "0.5 "]);
        let sample = Sample::from_record(&record).unwrap();
        assert_eq!(sample.power_output, 3.0);
    }

    #[test]
    fn from_record_short_ok() {
        let record = StringRecord::from(vec!["1", "2.0", "3.0"]);
        assert!(Sample::from_record(&record).is_none());
    }

    #[test]
    fn from_record_non_numeric_ok() {
        let record = StringRecord::from(vec!["1", "2.0", "n/a", "0.5"]);
        assert!(Sample::from_record(&record).is_none());
    }
}
