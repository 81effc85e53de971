//! Console output formatter for topic listings

use colored::Colorize;

const SUMMARY_TITLE: &str = "List of topics:";
const NO_TOPIC: &str = "No topic found in this file";

/// Formats topic information for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the subsection listing shown in summary mode
    pub fn format_topic_summary<S: AsRef<str>>(names: &[S], color: bool) -> String {
        if names.is_empty() {
            return format!("{}\n", NO_TOPIC);
        }

        let mut output = String::new();
        output.push_str(&Self::heading(SUMMARY_TITLE, color));
        output.push('\n');
        output.push_str(&"=".repeat(SUMMARY_TITLE.len()));
        output.push('\n');
        for name in names {
            output.push_str(&format!("  * {}\n", name.as_ref()));
        }
        output
    }

    /// Describe which subsections a session is built from
    pub fn format_selection<S: AsRef<str>>(selected: &[S]) -> String {
        if selected.is_empty() {
            "all subsections".to_string()
        } else {
            selected
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    fn heading(title: &str, color: bool) -> String {
        if color {
            title.cyan().bold().to_string()
        } else {
            title.to_string()
        }
    }
}
