//! Legacy printed-summary parser.
//!
//! Compatibility shim for whitespace-delimited summary text as printed
//! by model-fitting tools: a header line naming the numeric columns,
//! then one line per parameter whose first field is the parameter name.
//! The name column is absent from the header and is synthesized as
//! [`PARAM_COLUMN`](pt_core::PARAM_COLUMN).
//!
//! Re-parsing printed output is inherently fragile; prefer the
//! structured builders in [`crate::summary`] whenever the fit result is
//! available in native form.

use pt_core::{ColumnLabels, Error, PrecisRow, PrecisTable, Result};

use crate::seq::{first, rest};
use crate::summary::DEFAULT_INTERVAL_MASS;

/// Parse a printed summary into a [`PrecisTable`].
///
/// Errors embed the raw offending line; a field-count mismatch is
/// always an error, never a silent column misalignment. Columns beyond
/// the four summary statistics (e.g. effective-sample-size columns) are
/// validated as numeric and dropped.
pub fn parse_precis(text: &str) -> Result<PrecisTable> {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let header_line =
        *first(&lines).ok_or_else(|| Error::Parse("empty summary text".into()))?;
    let header: Vec<&str> = header_line.split_whitespace().collect();
    if header.len() < 4 {
        return Err(Error::Parse(format!(
            "expected at least 4 column labels, got {}: '{}'",
            header.len(),
            header_line
        )));
    }

    let map = ColumnMap::from_header(&header);

    // `rest` degrades to a missing marker for header-only input; that
    // simply yields an empty table.
    let data_lines = rest(&lines).unwrap_or(&[]);

    let mut rows = Vec::new();
    for &line in data_lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != header.len() + 1 {
            return Err(Error::Parse(format!(
                "expected {} fields (name + {} columns), got {}: '{}'",
                header.len() + 1,
                header.len(),
                fields.len(),
                line
            )));
        }

        let name = fields[0].to_string();
        let mut values = Vec::with_capacity(header.len());
        for field in &fields[1..] {
            let v: f64 = field.parse().map_err(|_| {
                Error::Parse(format!("invalid number '{}' in line '{}'", field, line))
            })?;
            values.push(v);
        }

        rows.push(PrecisRow {
            name,
            mean: values[map.mean],
            sd: values[map.sd],
            lower: values[map.lower],
            upper: values[map.upper],
        });
    }

    let labels = ColumnLabels {
        mean: header[map.mean].to_string(),
        sd: header[map.sd].to_string(),
        lower: header[map.lower].to_string(),
        upper: header[map.upper].to_string(),
    };

    PrecisTable::new(rows, labels, map.interval_mass)
}

/// Positions of the four summary columns within the header, plus the
/// interval mass recovered from `%` labels.
struct ColumnMap {
    mean: usize,
    sd: usize,
    lower: usize,
    upper: usize,
    interval_mass: f64,
}

impl ColumnMap {
    fn from_header(header: &[&str]) -> Self {
        // Interval columns: the first two %-suffixed labels, ordered by
        // their percentage. Without them, the last two columns.
        let pct: Vec<(usize, f64)> = header
            .iter()
            .enumerate()
            .filter_map(|(i, label)| {
                label.strip_suffix('%').and_then(|p| p.parse::<f64>().ok()).map(|p| (i, p))
            })
            .collect();

        let (lower, upper, interval_mass) = match pct.as_slice() {
            [(i, pi), (j, pj), ..] => {
                let (lo, lo_pct, hi, hi_pct) =
                    if pi <= pj { (*i, *pi, *j, *pj) } else { (*j, *pj, *i, *pi) };
                let mass = (hi_pct - lo_pct) / 100.0;
                let mass = if mass > 0.0 && mass < 1.0 { mass } else { DEFAULT_INTERVAL_MASS };
                (lo, hi, mass)
            }
            _ => (header.len() - 2, header.len() - 1, DEFAULT_INTERVAL_MASS),
        };

        // Point estimate and spread: the first two remaining columns.
        let mut remaining = (0..header.len()).filter(|&i| i != lower && i != upper);
        let mean = remaining.next().unwrap_or(0);
        let sd = remaining.next().unwrap_or(1);

        Self { mean, sd, lower, upper, interval_mass }
    }
}
