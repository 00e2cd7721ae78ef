use crate::api::enrich::WARNINGS_KEY;
use crate::api::pagination::{self, PAGINATION_INFO_KEY};
use crate::error::{AppError, CliError};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;
use serde_json::Value;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns shown when present, in display order
const PREFERRED_COLUMNS: &[&str] = &[
    "congress",
    "type",
    "number",
    "bioguideId",
    "systemCode",
    "name",
    "title",
    "chamber",
    "state",
    "district",
    "partyName",
    "latestAction",
    "updateDate",
];

const MAX_COLUMNS: usize = 6;
const MAX_CELL_WIDTH: usize = 60;

/// Renders list responses as terminal tables
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    /// Terminal width clamped to 40..=200, 80 when unknown
    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _rows)) => Some((cols as usize).clamp(40, 200)),
            Err(_) => Some(80),
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Render the result list of a response, followed by paging and warning
    /// lines when the response carries them.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Output` when the response has no result list.
    pub fn render_response(&self, response: &Value) -> Result<String, AppError> {
        let has_list = pagination::RESULT_KEYS
            .iter()
            .any(|key| response.get(*key).is_some_and(Value::is_array));
        if !has_list {
            return Err(CliError::Output(
                "Response has no list results to tabulate; use --format json".to_string(),
            )
            .into());
        }

        let mut output = self.render_items(pagination::extract_results(response));

        if let Some(info) = response.get(PAGINATION_INFO_KEY) {
            output.push('\n');
            output.push_str(&page_summary(info));
        } else if let Some(count) = response.get("count").and_then(Value::as_u64) {
            output.push_str(&format!("\n{} result(s)", count));
        }

        if let Some(Value::Array(warnings)) = response.get(WARNINGS_KEY) {
            for warning in warnings.iter().filter_map(Value::as_str) {
                output.push_str(&format!("\nwarning: {}", warning));
            }
        }

        Ok(output)
    }

    /// Render items as a table, one row per item
    pub fn render_items(&self, items: &[Value]) -> String {
        if items.is_empty() {
            return "No results found.".to_string();
        }

        let columns = select_columns(items);
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        self.configure_table_width(&mut table);

        if self.use_colors {
            table.set_header(
                columns
                    .iter()
                    .map(|c| Cell::new(c).add_attribute(Attribute::Bold).fg(Color::Green)),
            );
        } else {
            table.set_header(columns.iter().map(Cell::new));
        }

        for item in items {
            let row = columns.iter().enumerate().map(|(i, column)| {
                let text = item
                    .get(column)
                    .map(|value| self.format_cell_value(value))
                    .unwrap_or_else(|| "-".to_string());
                if self.use_colors && i == 0 {
                    Cell::new(text).fg(Color::Cyan)
                } else {
                    Cell::new(text)
                }
            });
            table.add_row(row);
        }

        table.to_string()
    }

    fn configure_table_width(&self, table: &mut Table) {
        let width = self.max_width.unwrap_or(80).max(40);
        table.set_width(width as u16);
    }

    /// Cell text for a JSON value; nested action objects show their text
    pub fn format_cell_value(&self, value: &Value) -> String {
        match value {
            Value::Null => "-".to_string(),
            Value::String(s) => truncate_text(s, MAX_CELL_WIDTH),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(arr) if arr.is_empty() => "[]".to_string(),
            Value::Array(arr) => format!("[{} items]", arr.len()),
            Value::Object(obj) => match obj.get("text").and_then(Value::as_str) {
                Some(text) => truncate_text(text, MAX_CELL_WIDTH),
                None if obj.is_empty() => "{}".to_string(),
                None => format!("{{{} items}}", obj.len()),
            },
        }
    }
}

/// Preferred columns present in the first item, else its first scalar fields
fn select_columns(items: &[Value]) -> Vec<String> {
    let Some(first) = items.first().and_then(Value::as_object) else {
        return vec!["value".to_string()];
    };

    let preferred: Vec<String> = PREFERRED_COLUMNS
        .iter()
        .filter(|column| first.contains_key(**column))
        .take(MAX_COLUMNS)
        .map(|column| column.to_string())
        .collect();
    if !preferred.is_empty() {
        return preferred;
    }

    first
        .iter()
        .filter(|(_, value)| !value.is_array() && !value.is_object())
        .take(MAX_COLUMNS)
        .map(|(key, _)| key.clone())
        .collect()
}

fn page_summary(info: &Value) -> String {
    let total = info.get("total_count").and_then(Value::as_u64).unwrap_or(0);
    match info.get("next_offset").and_then(Value::as_u64) {
        Some(next) => format!("{} total, more available (next offset {})", total, next),
        None => format!("{} total", total),
    }
}

/// Truncate to a display width, ending with "..." when cut
fn truncate_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let ellipsis = "...";
    let target_width = max_width.saturating_sub(ellipsis.width());
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push_str(ellipsis);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain() -> TableDisplay {
        TableDisplay::new().with_colors(false).with_max_width(120)
    }

    #[test]
    fn test_select_columns_prefers_known_fields() {
        let items = vec![json!({
            "number": "3076",
            "type": "HR",
            "congress": 118,
            "title": "Postal Service Reform Act",
            "url": "https://api.congress.gov/v3/bill/118/hr/3076"
        })];
        assert_eq!(select_columns(&items), vec!["congress", "type", "number", "title"]);
    }

    #[test]
    fn test_select_columns_falls_back_to_scalars() {
        let items = vec![json!({"alpha": 1, "nested": {"a": 1}, "list": [1], "beta": "x"})];
        assert_eq!(select_columns(&items), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_render_items() {
        let items = vec![
            json!({"bioguideId": "P000197", "name": "Pelosi, Nancy", "state": "California"}),
            json!({"bioguideId": "S000148", "name": "Schumer, Charles E.", "state": "New York"}),
        ];
        let output = plain().render_items(&items);
        assert!(output.contains("bioguideId"));
        assert!(output.contains("P000197"));
        assert!(output.contains("Schumer, Charles E."));
    }

    #[test]
    fn test_render_items_empty() {
        assert_eq!(plain().render_items(&[]), "No results found.");
    }

    #[test]
    fn test_render_response_with_paging_and_warnings() {
        let response = json!({
            "bills": [{"number": "1", "title": "A"}],
            "pagination_info": {"total_count": 40, "has_more": true, "next_offset": 20},
            "_warnings": ["Failed to fetch details from /bill/118/hr/2"]
        });
        let output = plain().render_response(&response).expect("render");
        assert!(output.contains("40 total, more available (next offset 20)"));
        assert!(output.contains("warning: Failed to fetch details from /bill/118/hr/2"));
    }

    #[test]
    fn test_render_response_aggregated() {
        let response = json!({"results": [{"name": "x"}], "count": 1});
        let output = plain().render_response(&response).expect("render");
        assert!(output.contains("1 result(s)"));
    }

    #[test]
    fn test_render_response_without_list_is_error() {
        let result = plain().render_response(&json!({"bill": {"number": "1"}}));
        assert!(matches!(result, Err(AppError::Cli(CliError::Output(_)))));
    }

    #[test]
    fn test_format_cell_value() {
        let display = plain();
        assert_eq!(display.format_cell_value(&json!(null)), "-");
        assert_eq!(display.format_cell_value(&json!([1, 2])), "[2 items]");
        assert_eq!(
            display.format_cell_value(&json!({"actionDate": "2024-01-01", "text": "Became law"})),
            "Became law"
        );
        assert_eq!(display.format_cell_value(&json!({"a": 1})), "{1 items}");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghijkl", 8), "abcde...");
    }
}
