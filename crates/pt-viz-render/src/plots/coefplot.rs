use pt_viz::CoefPlotArtifact;

use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::{draw_frame, draw_x_axis};
use crate::primitives::*;

/// Render a coefficient plot artifact to SVG string.
///
/// One row per parameter: label, horizontal interval bar, estimate
/// marker. A dashed vertical reference line marks zero; the x-range is
/// widened so that zero always sits inside the frame.
pub fn render(artifact: &CoefPlotArtifact, config: &VizConfig) -> crate::Result<String> {
    let entries = &artifact.entries;
    let n_total = entries.len();
    if n_total == 0 {
        return Ok(empty_svg());
    }
    let n = config.coefplot.max_rows.unwrap_or(n_total).min(n_total);
    let entries = &entries[..n];

    let row_h = 20.0;
    let fig_w = config.figure.width;
    let fig_h = (row_h * n as f64 + 80.0).max(200.0);

    let mut canvas = Canvas::new(fig_w, fig_h);

    // Left label column sized to the widest parameter name.
    let label_w = {
        let style = TextStyle { size: config.font.tick_size, ..Default::default() };
        entries.iter().map(|e| canvas.measure_text(&e.name, &style).width).fold(0.0_f64, f64::max)
            + 10.0
    };

    let area = PlotArea::manual(label_w + 15.0, 15.0, fig_w - label_w - 30.0, row_h * n as f64);

    // X axis spans all intervals and always contains zero.
    let data_min = entries.iter().map(|e| e.lower).fold(0.0_f64, f64::min);
    let data_max = entries.iter().map(|e| e.upper).fold(0.0_f64, f64::max);
    let x_axis = Axis::auto_linear(data_min, data_max, 6).with_label(x_label(artifact, config));

    draw_x_axis(&mut canvas, &area, &x_axis, config);

    // Zero reference line.
    let zero_px = x_axis.data_to_pixel(0.0, area.left, area.right());
    canvas.line(
        zero_px,
        area.top,
        zero_px,
        area.bottom(),
        &LineStyle::dashed(config.colors.reference, 0.8),
    );

    // Draw each entry.
    for (i, entry) in entries.iter().enumerate() {
        let y = area.top + (i as f64 + 0.5) * row_h;

        let label_style = TextStyle {
            size: config.font.tick_size,
            anchor: TextAnchor::End,
            baseline: TextBaseline::Central,
            ..Default::default()
        };
        canvas.text(area.left - 5.0, y, &entry.name, &label_style);

        let lo_px = x_axis.data_to_pixel(entry.lower, area.left, area.right());
        let hi_px = x_axis.data_to_pixel(entry.upper, area.left, area.right());
        canvas.error_bar_h(lo_px, hi_px, y, 5.0, &LineStyle::solid(config.colors.interval, 1.1));

        let est_px = x_axis.data_to_pixel(entry.estimate, area.left, area.right());
        canvas.marker(
            est_px,
            y,
            &MarkerStyle { color: config.colors.estimate, size: 2.5, fill: true },
        );
    }

    draw_frame(&mut canvas, &area);

    Ok(canvas.finish_svg())
}

fn x_label(artifact: &CoefPlotArtifact, config: &VizConfig) -> String {
    if config.coefplot.show_interval_mass {
        format!("{} ({}% interval)", config.coefplot.x_label, fmt_pct(artifact.meta.interval_mass))
    } else {
        config.coefplot.x_label.clone()
    }
}

fn fmt_pct(mass: f64) -> String {
    let s = format!("{:.1}", mass * 100.0);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn empty_svg() -> String {
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"><text x="10" y="30">No coefficient entries</text></svg>"#.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pt_core::{ColumnLabels, PrecisRow, PrecisTable};
    use pt_viz::coefplot_artifact;

    fn artifact(rows: Vec<PrecisRow>) -> CoefPlotArtifact {
        let t = PrecisTable::new(rows, ColumnLabels::default(), 0.89).unwrap();
        coefplot_artifact(&t).unwrap()
    }

    fn row(name: &str, mean: f64, lower: f64, upper: f64) -> PrecisRow {
        PrecisRow { name: name.into(), mean, sd: 0.1, lower, upper }
    }

    #[test]
    fn renders_one_marker_per_entry() {
        let art = artifact(vec![row("a", 1.2, 0.7, 1.7), row("b", -0.4, -0.9, 0.1)]);
        let svg = render(&art, &VizConfig::default()).unwrap();
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(">a<"));
        assert!(svg.contains(">b<"));
        assert!(svg.contains("stroke-dasharray=\"5 3\""));
    }

    #[test]
    fn axis_label_names_interval_mass() {
        let art = artifact(vec![row("a", 1.2, 0.7, 1.7)]);
        let svg = render(&art, &VizConfig::default()).unwrap();
        assert!(svg.contains("Estimate (89% interval)"));
    }

    #[test]
    fn empty_artifact_renders_placeholder() {
        let art = artifact(vec![]);
        let svg = render(&art, &VizConfig::default()).unwrap();
        assert!(svg.contains("No coefficient entries"));
    }

    #[test]
    fn max_rows_caps_output() {
        let art = artifact(vec![
            row("a", 1.0, 0.5, 1.5),
            row("b", 2.0, 1.5, 2.5),
            row("c", 3.0, 2.5, 3.5),
        ]);
        let mut config = VizConfig::default();
        config.coefplot.max_rows = Some(2);
        let svg = render(&art, &config).unwrap();
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(!svg.contains(">c<"));
    }

    #[test]
    fn all_positive_estimates_still_show_zero() {
        let art = artifact(vec![row("a", 5.0, 4.0, 6.0)]);
        let svg = render(&art, &VizConfig::default()).unwrap();
        // Zero tick label present because the range is widened to include 0.
        assert!(svg.contains(">0<"));
    }
}
