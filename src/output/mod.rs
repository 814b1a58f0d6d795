//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use serde::{Deserialize, Serialize};

use crate::models::Evaluation;

/// Trait for rendering a calculation to an output format.
pub trait OutputRenderer {
    /// Render the evaluation to a string, including the trailing newline.
    fn render(&self, evaluation: &Evaluation) -> String;
}

/// Output format options, selectable by flag, env var, or config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render an evaluation using the renderer for this format.
    pub fn render(&self, evaluation: &Evaluation) -> String {
        match self {
            OutputFormat::Terminal => terminal::TerminalRenderer.render(evaluation),
            OutputFormat::Json => json::JsonRenderer.render(evaluation),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" | "text" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported output format: '{other}'. Supported: terminal, json"
            )),
        }
    }
}
