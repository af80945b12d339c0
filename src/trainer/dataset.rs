use std::fs::File;
use std::io;
use std::path::Path;

use csv::ReaderBuilder;

use crate::prelude::*;
use crate::trainer::sample::Sample;

/// Training data loaded from a CSV source.
pub struct Dataset {
    /// Valid samples, in input order.
    pub samples: Vec<Sample>,

    /// Number of data lines dropped as malformed.
    pub n_skipped: usize,
}

impl Dataset {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open the training data at `{}`", path.display()))?;
        Self::read(file)
    }

    /// Reads the CSV stream, silently dropping malformed rows.
    ///
    /// The first line is assumed to be a header and is discarded. A data
    /// line is kept only if it has at least 4 fields and fields 1 to 3
    /// parse as numbers; everything else, including record-level read
    /// errors, counts towards [`Dataset::n_skipped`] and the load goes on.
    /// The only fatal condition is an unreadable underlying stream.
    pub fn read(reader: impl io::Read) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut samples = Vec::new();
        let mut n_skipped = 0;
        for record in reader.records() {
            match record {
                Ok(record) => match Sample::from_record(&record) {
                    Some(sample) => samples.push(sample),
                    None => n_skipped += 1,
                },
                Err(_) => n_skipped += 1,
            }
        }

        info!(n_samples = samples.len(), n_skipped, "loaded");
        Ok(Self { samples, n_skipped })
    }
}
