use crate::error::{AppError, AppResult};

/// Per-column min-max scaler mapping each column's observed range onto [0, 1]
///
/// A constant column has no range and scales to 0.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    data_min: Vec<f64>,
    data_max: Vec<f64>,
}

impl MinMaxScaler {
    pub fn fit<const N: usize>(rows: &[[f64; N]]) -> AppResult<Self> {
        if rows.is_empty() {
            return Err(AppError::Data("cannot scale zero rows".to_string()));
        }

        let mut data_min = vec![f64::INFINITY; N];
        let mut data_max = vec![f64::NEG_INFINITY; N];
        for row in rows {
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(AppError::Data(format!(
                        "non-finite value {} in numeric column {}",
                        value, j
                    )));
                }
                data_min[j] = data_min[j].min(value);
                data_max[j] = data_max[j].max(value);
            }
        }

        Ok(Self { data_min, data_max })
    }

    pub fn transform<const N: usize>(&self, rows: &[[f64; N]]) -> Vec<[f64; N]> {
        rows.iter()
            .map(|row| {
                let mut scaled = [0.0; N];
                for (j, &value) in row.iter().enumerate() {
                    let range = self.data_max[j] - self.data_min[j];
                    scaled[j] = if range > 0.0 {
                        (value - self.data_min[j]) / range
                    } else {
                        0.0
                    };
                }
                scaled
            })
            .collect()
    }

    pub fn fit_transform<const N: usize>(rows: &[[f64; N]]) -> AppResult<Vec<[f64; N]>> {
        Ok(Self::fit(rows)?.transform(rows))
    }
}
