//! Structured summary builders.
//!
//! These take the fitting routine's native output (posterior draws, or
//! Gaussian-approximation means and standard deviations) and build a
//! [`PrecisTable`] without any text round-trip.

use statrs::distribution::{ContinuousCDF, Normal};

use pt_core::{ColumnLabels, Error, PrecisRow, PrecisTable, Result};

/// Conventional credible-interval mass when the caller does not pick one.
pub const DEFAULT_INTERVAL_MASS: f64 = 0.89;

/// Build a table from posterior draws, one draw vector per parameter.
///
/// Per parameter: mean, sample standard deviation, and the central
/// percentile interval of mass `prob` (bounds at `(1-prob)/2` and
/// `1-(1-prob)/2`, linear interpolation between order statistics).
pub fn precis_from_draws(
    names: &[String],
    draws: &[Vec<f64>],
    prob: f64,
) -> Result<PrecisTable> {
    validate_prob(prob)?;
    if names.is_empty() {
        return Err(Error::Validation("at least one parameter required".into()));
    }
    if names.len() != draws.len() {
        return Err(Error::Validation(format!(
            "names and draws must have the same length, got {} and {}",
            names.len(),
            draws.len()
        )));
    }

    let tail = (1.0 - prob) / 2.0;
    let mut rows = Vec::with_capacity(names.len());

    for (name, param_draws) in names.iter().zip(draws.iter()) {
        if param_draws.is_empty() {
            return Err(Error::Validation(format!("no draws for parameter '{}'", name)));
        }
        if let Some(bad) = param_draws.iter().find(|v| !v.is_finite()) {
            return Err(Error::Validation(format!(
                "non-finite draw for parameter '{}': {}",
                name, bad
            )));
        }

        let mean = param_draws.iter().sum::<f64>() / param_draws.len() as f64;
        let sd = sample_sd(param_draws, mean);

        let mut sorted = param_draws.clone();
        sorted.sort_by(f64::total_cmp);
        let lower = percentile(&sorted, tail);
        let upper = percentile(&sorted, 1.0 - tail);

        rows.push(PrecisRow { name: name.clone(), mean, sd, lower, upper });
    }

    PrecisTable::new(rows, ColumnLabels::for_interval(prob), prob)
}

/// Build a table from a Gaussian approximation of the posterior.
///
/// Interval bounds are `mean ± z * sd` with `z` the standard-normal
/// quantile at `1 - (1-prob)/2`.
pub fn precis_from_gaussian(
    names: &[String],
    means: &[f64],
    sds: &[f64],
    prob: f64,
) -> Result<PrecisTable> {
    validate_prob(prob)?;
    if names.is_empty() {
        return Err(Error::Validation("at least one parameter required".into()));
    }
    if names.len() != means.len() || names.len() != sds.len() {
        return Err(Error::Validation(format!(
            "names, means and sds must have the same length, got {}, {} and {}",
            names.len(),
            means.len(),
            sds.len()
        )));
    }

    for (i, &m) in means.iter().enumerate() {
        if !m.is_finite() {
            return Err(Error::Validation(format!(
                "mean for parameter '{}' must be finite, got {}",
                names[i], m
            )));
        }
    }
    for (i, &s) in sds.iter().enumerate() {
        if !s.is_finite() || s < 0.0 {
            return Err(Error::Validation(format!(
                "sd for parameter '{}' must be finite and >= 0, got {}",
                names[i], s
            )));
        }
    }

    let normal = Normal::new(0.0, 1.0).expect("Normal(0,1) should be valid");
    let z = normal.inverse_cdf(1.0 - (1.0 - prob) / 2.0);

    let rows = names
        .iter()
        .zip(means.iter().zip(sds.iter()))
        .map(|(name, (&mean, &sd))| PrecisRow {
            name: name.clone(),
            mean,
            sd,
            lower: mean - z * sd,
            upper: mean + z * sd,
        })
        .collect();

    PrecisTable::new(rows, ColumnLabels::for_interval(prob), prob)
}

fn validate_prob(prob: f64) -> Result<()> {
    if !prob.is_finite() || prob <= 0.0 || prob >= 1.0 {
        return Err(Error::Validation(format!(
            "interval mass must lie in (0, 1), got {}",
            prob
        )));
    }
    Ok(())
}

/// Sample standard deviation (n-1 denominator); 0 for a single draw.
fn sample_sd(draws: &[f64], mean: f64) -> f64 {
    let n = draws.len();
    if n < 2 {
        return 0.0;
    }
    let ss: f64 = draws.iter().map(|v| (v - mean) * (v - mean)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Percentile of sorted data, linear interpolation between order
/// statistics (the R type-7 rule).
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}
