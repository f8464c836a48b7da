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

/// Print rows under fixed, ordered headers.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    println!("{}", table::render_entity_table(headers, rows, table_options()));
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();

    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value]) -> String {
    let options = table_options();

    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => {
            let joined = items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            if joined.is_empty() {
                String::from("-")
            } else {
                joined
            }
        }
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{render, table::render_entity_table};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        decision: &'static str,
        matched_rules: Vec<&'static str>,
    }

    fn example() -> Example {
        Example {
            decision: "BLOCK",
            matched_rules: vec!["prohibited_medical_claim", "chemical_hazard"],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&example(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["decision"], "BLOCK");
        assert_eq!(parsed["matched_rules"][1], "chemical_hazard");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&example(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(serde_json::from_str::<serde_json::Value>(&out).is_ok());
    }

    #[test]
    fn table_render_joins_string_lists() {
        let out = render(&example(), OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("prohibited_medical_claim, chemical_hazard"));
    }

    #[test]
    fn table_render_for_empty_array() {
        let empty: Vec<Example> = Vec::new();
        assert_eq!(render(&empty, OutputFormat::Table).unwrap(), "(no rows)");
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["creator", "decision", "summary"];
        let rows = vec![
            vec!["@a".to_string(), "APPROVE".to_string(), "short".to_string()],
            vec![
                "@SpainOnAFork".to_string(),
                "BLOCK".to_string(),
                "a much longer summary".to_string(),
            ],
        ];

        let table = render_entity_table(
            &headers,
            &rows,
            super::table::TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("creator"));
        assert!(lines[0].contains("summary"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }
}
