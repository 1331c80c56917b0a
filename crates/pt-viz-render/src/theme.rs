use crate::config::*;

/// Built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTheme {
    /// Default paper/report figure style.
    Report,
    /// Stripped-down style without grid.
    Minimal,
    /// Larger fonts for slides.
    Slide,
}

impl BuiltinTheme {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "minimal" => Self::Minimal,
            "slide" => Self::Slide,
            _ => Self::Report,
        }
    }

    pub fn base_config(self) -> VizConfig {
        match self {
            Self::Report => report(),
            Self::Minimal => minimal(),
            Self::Slide => slide(),
        }
    }
}

fn report() -> VizConfig {
    VizConfig {
        theme: "report".into(),
        figure: FigureConfig::default(),
        font: FontConfig::default(),
        axes: AxesConfig::default(),
        grid: GridConfig::default(),
        colors: ColorsConfig::default(),
        output: OutputConfig::default(),
        coefplot: CoefPlotConfig::default(),
    }
}

fn minimal() -> VizConfig {
    VizConfig {
        theme: "minimal".into(),
        figure: FigureConfig { width: 396.0 },
        font: FontConfig { label_size: 10.0, tick_size: 8.0 },
        grid: GridConfig { show: false, ..GridConfig::default() },
        ..report()
    }
}

fn slide() -> VizConfig {
    VizConfig {
        theme: "slide".into(),
        figure: FigureConfig { width: 576.0 },
        font: FontConfig { label_size: 14.0, tick_size: 11.0 },
        ..report()
    }
}
