//! Common data types for partab

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Label of the synthesized parameter-name column.
///
/// Legacy summary headers name only the numeric columns; the name column
/// is implicit and is surfaced under this label.
pub const PARAM_COLUMN: &str = "Param";

/// One parameter's summary: point estimate, spread, credible interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecisRow {
    /// Parameter name.
    pub name: String,
    /// Point estimate (posterior mean).
    pub mean: f64,
    /// Standard deviation of the estimate.
    pub sd: f64,
    /// Lower credible bound.
    pub lower: f64,
    /// Upper credible bound.
    pub upper: f64,
}

/// Labels of the four numeric columns, as printed by the producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnLabels {
    /// Point-estimate column label.
    pub mean: String,
    /// Spread column label.
    pub sd: String,
    /// Lower-bound column label.
    pub lower: String,
    /// Upper-bound column label.
    pub upper: String,
}

impl ColumnLabels {
    /// Labels for a central interval of mass `prob`, e.g. `5.5%`/`94.5%`
    /// for the conventional 0.89 mass.
    pub fn for_interval(prob: f64) -> Self {
        let tail = 100.0 * (1.0 - prob) / 2.0;
        Self {
            mean: "Mean".into(),
            sd: "StdDev".into(),
            lower: format!("{}%", trim_pct(tail)),
            upper: format!("{}%", trim_pct(100.0 - tail)),
        }
    }
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self::for_interval(0.89)
    }
}

fn trim_pct(v: f64) -> String {
    // "5.5" not "5.50", "50" not "50.0"
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Ordered parameter-estimate table. Insertion order = source order.
///
/// Parameter names are expected unique in practice but no uniqueness is
/// enforced here; the producer's guarantees carry through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecisTable {
    rows: Vec<PrecisRow>,
    labels: ColumnLabels,
    interval_mass: f64,
}

impl PrecisTable {
    /// Create a table from rows. `interval_mass` must lie in (0, 1).
    pub fn new(rows: Vec<PrecisRow>, labels: ColumnLabels, interval_mass: f64) -> Result<Self> {
        if !interval_mass.is_finite() || interval_mass <= 0.0 || interval_mass >= 1.0 {
            return Err(Error::Validation(format!(
                "interval mass must lie in (0, 1), got {}",
                interval_mass
            )));
        }
        Ok(Self { rows, labels, interval_mass })
    }

    /// Rows in source order.
    pub fn rows(&self) -> &[PrecisRow] {
        &self.rows
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Numeric column labels, as printed by the producer.
    pub fn labels(&self) -> &ColumnLabels {
        &self.labels
    }

    /// Posterior mass of the credible interval (e.g. 0.89).
    pub fn interval_mass(&self) -> f64 {
        self.interval_mass
    }

    /// Parameter names in source order.
    pub fn param_names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.name.as_str()).collect()
    }

    /// Numeric column by label. Returns `None` for an unknown label and
    /// for [`PARAM_COLUMN`] (the name column is text; use
    /// [`param_names`](Self::param_names)).
    pub fn column(&self, label: &str) -> Option<Vec<f64>> {
        let pick: fn(&PrecisRow) -> f64 = if label == self.labels.mean {
            |r| r.mean
        } else if label == self.labels.sd {
            |r| r.sd
        } else if label == self.labels.lower {
            |r| r.lower
        } else if label == self.labels.upper {
            |r| r.upper
        } else {
            return None;
        };
        Some(self.rows.iter().map(pick).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn one_row() -> PrecisRow {
        PrecisRow { name: "a".into(), mean: 1.2, sd: 0.3, lower: 0.71, upper: 1.69 }
    }

    #[test]
    fn test_table_accessors() {
        let t = PrecisTable::new(vec![one_row()], ColumnLabels::default(), 0.89).unwrap();
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
        assert_eq!(t.param_names(), vec!["a"]);
        assert_eq!(t.labels().lower, "5.5%");
        assert_eq!(t.labels().upper, "94.5%");

        let means = t.column("Mean").unwrap();
        assert_abs_diff_eq!(means[0], 1.2, epsilon = 1e-12);
        let lower = t.column("5.5%").unwrap();
        assert_abs_diff_eq!(lower[0], 0.71, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_column_is_none() {
        let t = PrecisTable::new(vec![one_row()], ColumnLabels::default(), 0.89).unwrap();
        assert!(t.column("Median").is_none());
        assert!(t.column(PARAM_COLUMN).is_none());
    }

    #[test]
    fn test_bad_interval_mass() {
        assert!(PrecisTable::new(vec![], ColumnLabels::default(), 0.0).is_err());
        assert!(PrecisTable::new(vec![], ColumnLabels::default(), 1.0).is_err());
        assert!(PrecisTable::new(vec![], ColumnLabels::default(), f64::NAN).is_err());
    }

    #[test]
    fn test_interval_labels() {
        let l = ColumnLabels::for_interval(0.95);
        assert_eq!(l.lower, "2.5%");
        assert_eq!(l.upper, "97.5%");
        let l = ColumnLabels::for_interval(0.5);
        assert_eq!(l.lower, "25%");
        assert_eq!(l.upper, "75%");
    }

    #[test]
    fn test_json_roundtrip() {
        let t = PrecisTable::new(vec![one_row()], ColumnLabels::default(), 0.89).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        let back: PrecisTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
