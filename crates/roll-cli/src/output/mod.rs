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

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    Ok(match value {
        Value::Array(items) => render_array(&items),
        Value::Object(map) => {
            // Nested collections get their own table below the key/value block.
            let mut sections = Vec::new();
            let mut rows = Vec::new();
            for (key, value) in map {
                match value {
                    Value::Array(items) if items.iter().all(Value::is_object) => {
                        sections.push(format!("\n{key}:\n{}", render_array(&items)));
                    }
                    other => rows.push(vec![key, cell(&other)]),
                }
            }
            let mut out = table::render_rows(&["key", "value"], &rows, options());
            for section in sections {
                out.push_str(&section);
            }
            out
        }
        scalar => table::render_rows(&["value"], &[vec![cell(&scalar)]], options()),
    })
}

fn render_array(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render_rows(&["value"], &rows, options());
    }

    // Union of keys across rows; a row missing a key shows `-`.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_rows(&header_refs, &rows, options())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        Value::Array(items) => format!("[{}]", items.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        id: i64,
        title: &'static str,
    }

    #[derive(Serialize)]
    struct Detail {
        id: i64,
        title: &'static str,
        description: Option<&'static str>,
        files: Vec<Row>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&Row { id: 3, title: "Optics" }, OutputFormat::Json).expect("render");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], 3);
        assert_eq!(parsed["title"], "Optics");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Row { id: 3, title: "Optics" }, OutputFormat::Raw).expect("render");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_lists_columns() {
        let rows = vec![Row { id: 1, title: "Optics" }, Row { id: 2, title: "Waves" }];
        let out = render(&rows, OutputFormat::Table).expect("render");
        let header = out.lines().next().expect("header line");
        assert!(header.find("id") < header.find("title"));
        assert!(out.contains("Waves"));
    }

    #[test]
    fn nested_collections_render_as_sections() {
        let detail = Detail {
            id: 2,
            title: "Optics",
            description: None,
            files: vec![Row { id: 11, title: "slides.pdf" }],
        };
        let out = render(&detail, OutputFormat::Table).expect("render");
        assert!(out.contains("\nfiles:\n"));
        assert!(out.contains("slides.pdf"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(render(&rows, OutputFormat::Table).expect("render"), "(no rows)");
    }
}
