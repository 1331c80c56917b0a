use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::VizConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;
use crate::primitives::*;

/// Draw the axes frame only (no ticks); row plots render their own labels.
pub fn draw_frame(canvas: &mut Canvas, area: &PlotArea) {
    let style = LineStyle::solid(Color::rgb(0, 0, 0), 0.8);
    canvas.line(area.left, area.top, area.right(), area.top, &style);
    canvas.line(area.left, area.bottom(), area.right(), area.bottom(), &style);
    canvas.line(area.left, area.top, area.left, area.bottom(), &style);
    canvas.line(area.right(), area.top, area.right(), area.bottom(), &style);
}

/// Draw the bottom x-axis: ticks, tick labels, vertical grid lines and
/// the axis label.
pub fn draw_x_axis(canvas: &mut Canvas, area: &PlotArea, x_axis: &Axis, config: &VizConfig) {
    let frame_color = Color::rgb(0, 0, 0);
    let tick_style_line = LineStyle::solid(frame_color, 0.6);

    let inward = config.axes.tick_direction == "in";
    let tl = config.axes.tick_length;

    let tick_label_style = TextStyle {
        size: config.font.tick_size,
        color: frame_color,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Hanging,
        ..Default::default()
    };

    for (i, &val) in x_axis.tick_positions.iter().enumerate() {
        let px = x_axis.data_to_pixel(val, area.left, area.right());
        if px < area.left - 0.5 || px > area.right() + 0.5 {
            continue;
        }

        if config.grid.show {
            let grid_style = LineStyle {
                color: config.grid.color.with_alpha(config.grid.alpha),
                width: 0.5,
                dash: Some("3 3".into()),
            };
            canvas.line(px, area.top, px, area.bottom(), &grid_style);
        }

        if inward {
            canvas.line(px, area.bottom(), px, area.bottom() - tl, &tick_style_line);
        } else {
            canvas.line(px, area.bottom(), px, area.bottom() + tl, &tick_style_line);
        }

        if let Some(label) = x_axis.tick_labels.get(i) {
            let label_y = if inward { area.bottom() + 3.0 } else { area.bottom() + tl + 3.0 };
            canvas.text(px, label_y, label, &tick_label_style);
        }
    }

    if !x_axis.label.is_empty() {
        let label_style = TextStyle {
            size: config.font.label_size,
            color: frame_color,
            anchor: TextAnchor::Middle,
            ..Default::default()
        };
        let label_y = if inward {
            area.bottom() + config.font.tick_size + 14.0
        } else {
            area.bottom() + tl + config.font.tick_size + 14.0
        };
        canvas.text(area.left + area.width / 2.0, label_y, &x_axis.label, &label_style);
    }
}
