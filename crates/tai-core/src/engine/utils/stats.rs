use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MeanError {
    #[error("Geometric mean of an empty set is undefined")]
    Empty,
    #[error("Geometric mean requires positive values, found {0}")]
    NonPositive(f64),
}

/// Geometric mean of strictly positive values.
///
/// Computed as `exp(mean(ln v))`, equal to `(prod v)^(1/n)` without the product
/// underflowing on long sequences.
pub fn geometric_mean(values: &[f64]) -> Result<f64, MeanError> {
    if values.is_empty() {
        return Err(MeanError::Empty);
    }
    let mut log_sum = 0.0;
    for &v in values {
        if v.is_nan() || v <= 0.0 {
            return Err(MeanError::NonPositive(v));
        }
        log_sum += v.ln();
    }
    Ok((log_sum / values.len() as f64).exp())
}
