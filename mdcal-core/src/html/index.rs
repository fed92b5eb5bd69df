//! Index page generation: a listing of previously generated calendars.

use serde::{Deserialize, Serialize};

use crate::html::escape_html;

/// One generated calendar found in the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Display name (the output base name).
    pub name: String,
    /// File name of the calendar page, relative to the index.
    pub html_file: String,
    /// File name of the iCal sibling, when one exists.
    pub ics_file: Option<String>,
}

/// Render the index page. Entries are rendered in the order given; the
/// caller decides the ordering (the CLI sorts by name).
pub fn render_index(entries: &[IndexEntry], title: &str) -> String {
    let items: Vec<String> = entries.iter().map(render_entry).collect();

    let listing = if items.is_empty() {
        "    <p class=\"empty\">No calendars generated yet.</p>".to_string()
    } else {
        format!("    <ul class=\"calendars\">\n{}\n    </ul>", items.join("\n"))
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{STYLE}    </style>
</head>
<body>
    <h1>{title}</h1>
{listing}
</body>
</html>
"#,
        title = escape_html(title),
        listing = listing,
    )
}

fn render_entry(entry: &IndexEntry) -> String {
    let ical_link = match &entry.ics_file {
        Some(ics) => format!(
            r#" <a class="ical" href="{}" download>iCal</a>"#,
            escape_html(ics)
        ),
        None => String::new(),
    };

    format!(
        r#"        <li><a href="{href}">{name}</a>{ical_link}</li>"#,
        href = escape_html(&entry.html_file),
        name = escape_html(&entry.name),
        ical_link = ical_link,
    )
}

const STYLE: &str = r#"        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            max-width: 700px;
            margin: 40px auto;
            padding: 0 20px;
            line-height: 1.6;
            color: #333;
        }
        h1 {
            color: #2c3e50;
            border-bottom: 3px solid #3498db;
            padding-bottom: 10px;
        }
        ul.calendars {
            list-style: none;
            padding: 0;
        }
        ul.calendars li {
            background: #f8f9fa;
            border-left: 4px solid #3498db;
            border-radius: 4px;
            margin: 12px 0;
            padding: 14px 20px;
        }
        ul.calendars a {
            color: #2980b9;
            text-decoration: none;
            font-weight: 500;
        }
        ul.calendars a:hover {
            text-decoration: underline;
        }
        ul.calendars a.ical {
            float: right;
            font-size: 0.9em;
        }
        .empty {
            color: #7f8c8d;
        }
"#;
