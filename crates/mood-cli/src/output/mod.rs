use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, table_options()))
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            table_options(),
        )),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, table_options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    headers.sort();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        label: &'static str,
        score: f64,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            label: "Positive",
            score: 0.62,
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["label"], "Positive");
        assert_eq!(parsed["score"], 0.62);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example {
            label: "Neutral",
            score: 0.0,
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let value = Example {
            label: "Negative",
            score: -0.8,
        };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("label"));
        assert!(out.contains("-0.8"));
    }

    #[test]
    fn table_render_for_records_has_one_row_each() {
        let rows = vec![
            Example {
                label: "Positive",
                score: 0.5,
            },
            Example {
                label: "Negative",
                score: -0.5,
            },
        ];
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("label") && lines[0].contains("score"));
    }

    #[test]
    fn empty_array_table() {
        let rows: Vec<Example> = Vec::new();
        assert_eq!(render(&rows, OutputFormat::Table).unwrap(), "(no rows)");
    }
}
