//! Rendering of command results to stdout

use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

/// Output format selected with `--output`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns or a one-line summary
    #[default]
    Table,
    /// The full payload as pretty-printed JSON
    Json,
}

/// Result of a command, printable in either format
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    value: Value,
    text: String,
}

impl Report {
    /// Report whose table form is the given rows under `headers`.
    pub fn table<T: Serialize>(payload: &T, headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self { value: to_value(payload), text: render_table(headers, &rows) }
    }

    /// Report whose table form is a short message.
    pub fn message<T: Serialize>(payload: &T, text: impl Into<String>) -> Self {
        Self { value: to_value(payload), text: text.into() }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.text.clone(),
            OutputFormat::Json => {
                serde_json::to_string_pretty(&self.value).unwrap_or_else(|_| self.value.to_string())
            }
        }
    }
}

fn to_value<T: Serialize>(payload: &T) -> Value {
    serde_json::to_value(payload).unwrap_or(Value::Null)
}

/// Left-aligned columns separated by two spaces.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "(no results)".to_string();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(headers.to_vec())];
    out.extend(rows.iter().map(|row| line(row.iter().map(String::as_str).collect())));
    out.join("\n")
}

/// Shorten `text` to `max` characters, marking the cut with `...`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn columns_are_padded_to_widest_cell() {
        let table = render_table(
            &["ID", "TITLE"],
            &[
                vec!["j1".into(), "Rust Engineer".into()],
                vec!["job-22".into(), "QA".into()],
            ],
        );
        assert_eq!(table, "ID      TITLE\nj1      Rust Engineer\njob-22  QA");
    }

    #[test]
    fn empty_table_says_so() {
        assert_eq!(render_table(&["ID"], &[]), "(no results)");
    }

    #[test]
    fn json_output_uses_payload() {
        let report = Report::message(&json!({"ok": true}), "done");
        assert_eq!(report.render(OutputFormat::Table), "done");
        assert_eq!(report.render(OutputFormat::Json), "{\n  \"ok\": true\n}");
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Senior Backend Engineer", 10), "Senior ...");
    }
}
