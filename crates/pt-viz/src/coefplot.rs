//! Coefficient plot artifact (numbers-first).

use std::time::{SystemTime, UNIX_EPOCH};

use pt_core::{Error, PrecisTable, Result};
use serde::{Deserialize, Serialize};

/// Data behind a coefficient plot: one dot-and-interval entry per
/// parameter, in display order (top to bottom).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoefPlotArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Producer metadata.
    pub meta: CoefPlotMeta,
    /// One entry per parameter, display order.
    pub entries: Vec<CoefEntry>,
}

/// Producer metadata for a coefficient plot artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoefPlotMeta {
    /// Producing tool name.
    pub tool: String,
    /// Producing tool version.
    pub tool_version: String,
    /// Creation time (Unix ms).
    pub created_unix_ms: u128,
    /// Posterior mass of the plotted intervals.
    pub interval_mass: f64,
}

/// One parameter's dot-and-interval entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoefEntry {
    /// Parameter name (row label).
    pub name: String,
    /// Point estimate (dot position).
    pub estimate: f64,
    /// Standard deviation of the estimate.
    pub sd: f64,
    /// Lower interval bound.
    pub lower: f64,
    /// Upper interval bound.
    pub upper: f64,
}

fn now_unix_ms() -> Result<u128> {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::Validation(format!("system time error: {}", e)))?;
    Ok(d.as_millis())
}

/// Build a coefficient plot artifact from a [`PrecisTable`].
///
/// Entry order matches table order. Every estimate and bound must be
/// finite and each interval must satisfy `lower <= upper`; no recovery
/// is attempted for malformed rows.
pub fn coefplot_artifact(table: &PrecisTable) -> Result<CoefPlotArtifact> {
    let mut entries = Vec::with_capacity(table.len());
    for row in table.rows() {
        if !row.mean.is_finite() || !row.lower.is_finite() || !row.upper.is_finite() {
            return Err(Error::Validation(format!(
                "non-finite estimate for parameter '{}': mean={} lower={} upper={}",
                row.name, row.mean, row.lower, row.upper
            )));
        }
        if row.lower > row.upper {
            return Err(Error::Validation(format!(
                "inverted interval for parameter '{}': [{}, {}]",
                row.name, row.lower, row.upper
            )));
        }
        entries.push(CoefEntry {
            name: row.name.clone(),
            estimate: row.mean,
            sd: row.sd,
            lower: row.lower,
            upper: row.upper,
        });
    }

    Ok(CoefPlotArtifact {
        schema_version: "partab_coefplot_v0".to_string(),
        meta: CoefPlotMeta {
            tool: "partab".to_string(),
            tool_version: pt_core::VERSION.to_string(),
            created_unix_ms: now_unix_ms()?,
            interval_mass: table.interval_mass(),
        },
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pt_core::{ColumnLabels, PrecisRow};

    fn table(rows: Vec<PrecisRow>) -> PrecisTable {
        PrecisTable::new(rows, ColumnLabels::default(), 0.89).unwrap()
    }

    fn row(name: &str, mean: f64, lower: f64, upper: f64) -> PrecisRow {
        PrecisRow { name: name.into(), mean, sd: 0.1, lower, upper }
    }

    #[test]
    fn test_artifact_preserves_order() {
        let t = table(vec![row("b", 0.5, 0.3, 0.7), row("a", -1.0, -1.4, -0.6)]);
        let art = coefplot_artifact(&t).unwrap();
        assert_eq!(art.schema_version, "partab_coefplot_v0");
        assert_eq!(art.entries.len(), 2);
        assert_eq!(art.entries[0].name, "b");
        assert_eq!(art.entries[1].name, "a");
        assert!((art.meta.interval_mass - 0.89).abs() < 1e-12);
    }

    #[test]
    fn test_artifact_rejects_non_finite() {
        let t = table(vec![row("a", f64::NAN, 0.0, 1.0)]);
        assert!(coefplot_artifact(&t).is_err());
        let t = table(vec![row("a", 0.5, f64::NEG_INFINITY, 1.0)]);
        assert!(coefplot_artifact(&t).is_err());
    }

    #[test]
    fn test_artifact_rejects_inverted_interval() {
        let t = table(vec![row("a", 0.5, 1.0, 0.3)]);
        let err = coefplot_artifact(&t).unwrap_err();
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn test_artifact_json_shape() {
        let t = table(vec![row("a", 1.2, 0.71, 1.69)]);
        let art = coefplot_artifact(&t).unwrap();
        let json = serde_json::to_string(&art).unwrap();
        assert!(json.contains("\"schema_version\":\"partab_coefplot_v0\""));
        assert!(json.contains("\"entries\""));

        let back: CoefPlotArtifact = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entries.len(), 1);
        assert_eq!(back.entries[0].name, "a");
    }

    #[test]
    fn test_empty_table_gives_empty_artifact() {
        let t = table(vec![]);
        let art = coefplot_artifact(&t).unwrap();
        assert!(art.entries.is_empty());
    }

    #[test]
    fn test_from_parsed_summary() {
        let t = pt_table::parse_precis("Mean StdDev 5.5% 94.5%\na 1.20 0.30 0.71 1.69\n").unwrap();
        let art = coefplot_artifact(&t).unwrap();
        assert_eq!(art.entries[0].estimate, 1.20);
        assert_eq!(art.entries[0].lower, 0.71);
        assert_eq!(art.entries[0].upper, 1.69);
    }
}
