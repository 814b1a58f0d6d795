//! Terminal renderer: a single styled `a op b = result` line.

use colored::Colorize;

use crate::models::Evaluation;
use crate::output::OutputRenderer;

/// Terminal output renderer with colored text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, evaluation: &Evaluation) -> String {
        format!(
            "{} {} {} {} {}\n",
            evaluation.a,
            evaluation.operation.symbol().to_string().cyan(),
            evaluation.b,
            "=".dimmed(),
            evaluation.result.to_string().green().bold(),
        )
    }
}
