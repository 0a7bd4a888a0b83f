use crate::{
    error::{AppError, AppResult},
    models::SeriesRecord,
};

/// Fills missing episode durations with one constant: the observed mean, rounded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationImputer {
    fill_value: f64,
}

impl DurationImputer {
    /// Learns the fill value from every record that has a duration
    ///
    /// Rounding is to the nearest integer with ties to even.
    pub fn fit(records: &[SeriesRecord]) -> AppResult<Self> {
        let observed: Vec<f64> = records.iter().filter_map(|r| r.duration).collect();

        if observed.is_empty() {
            return Err(AppError::Data(
                "cannot impute duration: no record has an observed duration".to_string(),
            ));
        }

        let mean = observed.iter().sum::<f64>() / observed.len() as f64;
        Ok(Self {
            fill_value: mean.round_ties_even(),
        })
    }

    pub fn fill_value(&self) -> f64 {
        self.fill_value
    }

    /// Writes the fill value into every record missing a duration, returning how many were filled
    pub fn transform(&self, records: &mut [SeriesRecord]) -> usize {
        let mut filled = 0;
        for record in records.iter_mut().filter(|r| r.duration.is_none()) {
            record.duration = Some(self.fill_value);
            filled += 1;
        }
        filled
    }
}
