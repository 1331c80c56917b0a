use serde::Deserialize;

use crate::color::Color;
use crate::theme::BuiltinTheme;

/// Top-level visualization configuration (YAML or programmatic).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub theme: String,
    pub figure: FigureConfig,
    pub font: FontConfig,
    pub axes: AxesConfig,
    pub grid: GridConfig,
    pub colors: ColorsConfig,
    pub output: OutputConfig,
    pub coefplot: CoefPlotConfig,
}

impl Default for VizConfig {
    fn default() -> Self {
        BuiltinTheme::Report.base_config()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    /// Figure width in points; height follows the row count.
    pub width: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 446.4, // 6.2" * 72
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub label_size: f64,
    pub tick_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { label_size: 11.0, tick_size: 8.5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    pub tick_direction: String,
    pub tick_length: f64,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self { tick_direction: "out".into(), tick_length: 4.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub show: bool,
    pub color: Color,
    pub alpha: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { show: true, color: Color::hex("#CBD5E1"), alpha: 0.55 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Estimate marker.
    pub estimate: Color,
    /// Interval bar.
    pub interval: Color,
    /// Zero reference line.
    pub reference: Color,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            estimate: Color::hex("#111827"),
            interval: Color::hex("#1D4ED8"),
            reference: Color::hex("#9CA3AF"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Raster resolution for PNG output.
    pub dpi: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dpi: 220 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoefPlotConfig {
    /// Cap on the number of rows drawn (all rows when `None`).
    pub max_rows: Option<usize>,
    /// X-axis label.
    pub x_label: String,
    /// Whether to annotate the axis label with the interval mass.
    pub show_interval_mass: bool,
}

impl Default for CoefPlotConfig {
    fn default() -> Self {
        Self { max_rows: None, x_label: "Estimate".into(), show_interval_mass: true }
    }
}

/// Resolve a VizConfig from optional YAML string.
/// Priority: user YAML overrides → theme base config.
pub fn resolve_config(user_yaml: Option<&str>) -> crate::Result<VizConfig> {
    match user_yaml {
        None => Ok(VizConfig::default()),
        Some(yaml) => {
            let config: VizConfig = serde_yaml_ng::from_str(yaml)
                .map_err(|e| crate::RenderError::Config(e.to_string()))?;
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_report_theme() {
        let c = VizConfig::default();
        assert_eq!(c.theme, "report");
        assert!(c.figure.width > 0.0);
    }

    #[test]
    fn yaml_overrides() {
        let c = resolve_config(Some("figure:\n  width: 600\ncoefplot:\n  x_label: beta\n"))
            .unwrap();
        assert!((c.figure.width - 600.0).abs() < 1e-9);
        assert_eq!(c.coefplot.x_label, "beta");
        // Untouched sections keep defaults.
        assert!((c.font.tick_size - 8.5).abs() < 1e-9);
    }

    #[test]
    fn bad_yaml_is_config_error() {
        assert!(resolve_config(Some("figure: [not a map")).is_err());
    }
}
