/// Degrees-of-freedom convention for the standard deviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Deviation {
    /// Sample standard deviation (divides by n - 1)
    #[default]
    Sample,
    /// Population standard deviation (divides by n)
    Population,
}

impl Deviation {
    fn ddof(&self) -> usize {
        match self {
            Deviation::Sample => 1,
            Deviation::Population => 0,
        }
    }
}

impl std::str::FromStr for Deviation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sample" | "ddof1" => Ok(Deviation::Sample),
            "population" | "ddof0" => Ok(Deviation::Population),
            _ => Err(format!(
                "Unknown deviation convention: {}. Use 'sample' or 'population'",
                s
            )),
        }
    }
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Standard deviation of `values`
///
/// Formula: sd = sqrt( sum((x - mean)^2) / (n - ddof) )
///
/// Returns `None` when `n <= ddof`, i.e. a single value has no sample
/// standard deviation.
pub fn standard_deviation(values: &[f64], deviation: Deviation) -> Option<f64> {
    let n = values.len();
    if n <= deviation.ddof() {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|x| (x - m) * (x - m)).sum();
    Some((ss / (n - deviation.ddof()) as f64).sqrt())
}

/// Standardized deviation of each value from the mean
///
/// Formula: z = (x - mean) / sd
///
/// Returns `None` when the z-scores are undefined: the standard deviation
/// does not exist (too few values) or is zero (all values identical).
/// Identical values are detected directly, since rounding in the mean can
/// leave a tiny nonzero deviation (e.g. `[0.1, 0.1, 0.1]`).
pub fn zscores(values: &[f64], deviation: Deviation) -> Option<Vec<f64>> {
    let first = values.first()?;
    if values.iter().all(|v| v == first) {
        return None;
    }
    let m = mean(values)?;
    let sd = standard_deviation(values, deviation)?;
    if sd == 0.0 || !sd.is_finite() {
        return None;
    }
    Some(values.iter().map(|x| (x - m) / sd).collect())
}
