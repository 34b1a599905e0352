use std::path::Path;

use anyhow::{bail, Result};

use crate::data::loader;

/// 1 lb in kg.
pub const LB_TO_KG: f64 = 0.454;

/// Age the batch pipeline extrapolates to, in months.
pub const DEFAULT_QUERY_AGE: f64 = 21.0;

/// Precision of the reported estimate, in significant figures.
pub const SIG_FIGS: usize = 3;

// ---------------------------------------------------------------------------
// Least-squares line fit
// ---------------------------------------------------------------------------

/// Best-fit line `y = slope * x + intercept` through a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    /// Fit by ordinary least squares.
    ///
    /// Errors when fewer than two points are given or all `x` values
    /// coincide, since no single line is determined then.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            bail!(
                "mismatched columns: {} x values but {} y values",
                xs.len(),
                ys.len()
            );
        }
        if xs.len() < 2 {
            bail!("a line fit needs at least 2 points, got {}", xs.len());
        }

        let n = xs.len() as f64;
        let sum_x: f64 = xs.iter().sum();
        let sum_y: f64 = ys.iter().sum();
        let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
        let sum_xx: f64 = xs.iter().map(|x| x * x).sum();

        let denom = n * sum_xx - sum_x * sum_x;
        if denom == 0.0 {
            bail!("all x values are identical; the fit is degenerate");
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denom;
        let intercept = (sum_y - slope * sum_x) / n;
        Ok(LinearModel { slope, intercept })
    }

    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

/// Estimate the mass in kilograms at `query_age` months from the sample
/// table at `path`.
///
/// Masses are converted from pounds with the fixed [`LB_TO_KG`] factor, the
/// best-fit line goes through the kg points, and the result is formatted to
/// [`SIG_FIGS`] significant figures.
pub fn mass_at_age(path: &Path, query_age: f64) -> Result<String> {
    let table = loader::load_table(path)?;
    let masses_kg: Vec<f64> = table.masses.iter().map(|m| m * LB_TO_KG).collect();
    let model = LinearModel::fit(&table.ages, &masses_kg)?;
    Ok(format_sig_figs(model.predict(query_age), SIG_FIGS))
}

// ---------------------------------------------------------------------------
// Significant-figure formatting
// ---------------------------------------------------------------------------

/// Format `value` to `digits` significant figures.
///
/// Matches printf `%g` conventions: fixed notation with trailing zeros
/// stripped while the decimal exponent is in `[-4, digits)`, scientific
/// notation (`1.23e+03`) outside that range.
pub fn format_sig_figs(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let exp = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(digits as i32 - 1 - exp);
    let rounded = (value * scale).round() / scale;
    // Rounding can carry into the next decade (999.6 → 1000).
    let exp = rounded.abs().log10().floor() as i32;

    if exp < -4 || exp >= digits as i32 {
        let mantissa = rounded / 10f64.powi(exp);
        let sign = if exp < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_zeros(format!("{:.*}", digits - 1, mantissa)),
            sign,
            exp.abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        strip_zeros(format!("{rounded:.decimals$}"))
    }
}

fn strip_zeros(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn recovers_a_perfect_line() {
        let xs: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x + 3.0).collect();
        let model = LinearModel::fit(&xs, &ys).unwrap();
        assert!((model.slope - 2.0).abs() < 1e-9);
        assert!((model.intercept - 3.0).abs() < 1e-9);
        assert!((model.predict(21.0) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_identical_x_values() {
        let xs = vec![5.0, 5.0, 5.0];
        let ys = vec![1.0, 2.0, 3.0];
        assert!(LinearModel::fit(&xs, &ys).is_err());
    }

    #[test]
    fn rejects_single_point() {
        assert!(LinearModel::fit(&[1.0], &[2.0]).is_err());
    }

    #[test]
    fn sig_fig_shapes() {
        assert_eq!(format_sig_figs(469.482, 3), "469");
        assert_eq!(format_sig_figs(45.64, 3), "45.6");
        assert_eq!(format_sig_figs(1.0, 3), "1");
        assert_eq!(format_sig_figs(0.0, 3), "0");
        assert_eq!(format_sig_figs(-45.64, 3), "-45.6");
        assert_eq!(format_sig_figs(1234.5, 3), "1.23e+03");
        assert_eq!(format_sig_figs(0.0001234, 3), "0.000123");
        assert_eq!(format_sig_figs(0.00001234, 3), "1.23e-05");
        // Rounding that carries into the next decade.
        assert_eq!(format_sig_figs(999.9999, 3), "1e+03");
    }

    #[test]
    fn noise_free_table_extrapolates_exactly() {
        // Rows (0,264), (2.5,364), …, (27.5,1364): slope 40 lb/month.
        // At 21 months: 1104 lb × 0.454 = 501.216 kg → "501".
        let dir = tempdir().unwrap();
        let path = dir.path().join("linear.csv");
        let mut contents = String::from("# Age (months),Mass (lb)\n");
        for i in 0..12 {
            let age = i as f64 * 2.5;
            let mass = 264.0 + i as f64 * 100.0;
            contents.push_str(&format!("{age},{mass:.2}\n"));
        }
        std::fs::write(&path, contents).unwrap();

        assert_eq!(mass_at_age(&path, 21.0).unwrap(), "501");
    }

    #[test]
    fn query_age_is_overridable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("linear.csv");
        std::fs::write(&path, "# h\n0,100.00\n10,200.00\n").unwrap();
        // At age 0 the fit passes through 100 lb = 45.4 kg.
        assert_eq!(mass_at_age(&path, 0.0).unwrap(), "45.4");
    }
}
