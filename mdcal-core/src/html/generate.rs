//! Calendar page generation.

use std::collections::BTreeSet;

use crate::event::Event;
use crate::html::escape_html;

/// Render the calendar page: header with an optional iCal download
/// link, a tag filter bar, one card per event, and the filtering
/// script. Events are rendered in the order given (document order).
pub fn generate_html(events: &[Event], title: &str, ical_filename: Option<&str>) -> String {
    // Distinct tags across all events, sorted for a stable filter bar.
    // Recomputed per call; no state survives a conversion run.
    let all_tags: BTreeSet<&str> = events
        .iter()
        .flat_map(|e| e.tags.iter().map(String::as_str))
        .collect();

    let download_link = match ical_filename {
        Some(name) => format!(
            r#"<a href="{}" class="download-link" download>&#128197; Download iCal</a>"#,
            escape_html(name)
        ),
        None => String::new(),
    };

    let filter_section = if all_tags.is_empty() {
        String::new()
    } else {
        let filter_tags: Vec<String> = all_tags
            .iter()
            .map(|tag| {
                let tag = escape_html(tag);
                format!(
                    r##"        <span class="filter-tag" data-tag="{tag}" onclick="filterByTag('{tag}')">#{tag}</span>"##
                )
            })
            .collect();
        format!(
            "    <div class=\"tag-filter-section\">\n{}\n    </div>\n",
            filter_tags.join("\n")
        )
    };

    let cards: Vec<String> = events.iter().map(render_event_card).collect();

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
    <div class="header">
        <h1>{title}</h1>
        {download_link}
    </div>
{filter_section}{events_section}
    <script>
{SCRIPT}    </script>
</body>
</html>
"#,
        title = escape_html(title),
        download_link = download_link,
        filter_section = filter_section,
        events_section = cards.join("\n"),
    )
}

fn render_event_card(event: &Event) -> String {
    let tags_attr = escape_html(&event.tags.join(","));

    let tags_html = if event.tags.is_empty() {
        String::new()
    } else {
        let pills: Vec<String> = event
            .tags
            .iter()
            .map(|tag| {
                let tag = escape_html(tag);
                format!(
                    r##"                <span class="tag" onclick="filterByTag('{tag}')">#{tag}</span>"##
                )
            })
            .collect();
        format!(
            "            <div class=\"event-tags\">\n{}\n            </div>\n",
            pills.join("\n")
        )
    };

    let description_html = match &event.description {
        Some(desc) => format!(
            "        <div class=\"event-description\">{}</div>\n",
            escape_html(desc)
        ),
        None => String::new(),
    };

    let link_html = match &event.link {
        Some(link) => {
            let link = escape_html(link);
            format!(
                "        <div class=\"event-link\">&#128279; <a href=\"{link}\" target=\"_blank\">{link}</a></div>\n"
            )
        }
        None => String::new(),
    };

    format!(
        r#"    <div class="event" data-tags="{tags_attr}">
        <div class="event-title">{title}</div>
        <div class="event-date-tags">
            <span class="event-date">&#128197; {date}</span>
{tags_html}        </div>
{description_html}{link_html}    </div>"#,
        title = escape_html(&event.title),
        date = escape_html(&event.date_label()),
    )
}

const STYLE: &str = r#"        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            max-width: 900px;
            margin: 40px auto;
            padding: 0 20px;
            line-height: 1.6;
            color: #333;
        }
        .header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            border-bottom: 3px solid #3498db;
            padding-bottom: 10px;
            margin-bottom: 20px;
            gap: 20px;
            flex-wrap: wrap;
        }
        h1 {
            color: #2c3e50;
            margin: 0;
            flex: 1;
        }
        .download-link {
            background: #3498db;
            color: white;
            padding: 10px 20px;
            border-radius: 6px;
            text-decoration: none;
            display: inline-block;
            font-weight: 500;
            box-shadow: 0 2px 4px rgba(0,0,0,0.2);
            transition: background 0.3s;
            white-space: nowrap;
        }
        .download-link:hover {
            background: #2980b9;
        }
        .event {
            background: #f8f9fa;
            border-left: 4px solid #3498db;
            padding: 20px;
            margin: 20px 0;
            border-radius: 4px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        .event-title {
            font-size: 1.5em;
            font-weight: bold;
            color: #2c3e50;
            margin: 0 0 10px 0;
        }
        .event-date-tags {
            display: flex;
            align-items: center;
            gap: 12px;
            flex-wrap: wrap;
            margin: 5px 0;
        }
        .event-date {
            color: #7f8c8d;
            font-size: 0.95em;
        }
        .event-description {
            margin: 10px 0;
            color: #555;
            white-space: pre-line;
        }
        .event-link {
            margin: 10px 0;
        }
        .event-link a {
            color: #3498db;
            text-decoration: none;
            word-break: break-all;
        }
        .event-link a:hover {
            text-decoration: underline;
        }
        .event-tags {
            display: flex;
            flex-wrap: wrap;
            gap: 8px;
        }
        .tag {
            background: #e8f4f8;
            color: #2980b9;
            padding: 4px 12px;
            border-radius: 12px;
            font-size: 0.85em;
            font-weight: 500;
            cursor: pointer;
            transition: background 0.2s, color 0.2s;
        }
        .tag:hover {
            background: #d0e9f2;
        }
        .tag-filter-section {
            display: flex;
            flex-wrap: wrap;
            gap: 8px;
            margin-bottom: 20px;
        }
        .filter-tag {
            background: #e8f4f8;
            color: #2980b9;
            padding: 6px 14px;
            border-radius: 12px;
            font-size: 0.9em;
            font-weight: 500;
            cursor: pointer;
            transition: background 0.2s, color 0.2s;
        }
        .filter-tag:hover {
            background: #d0e9f2;
        }
        .filter-tag.active {
            background: #3498db;
            color: white;
        }
        .event.hidden {
            display: none;
        }
"#;

// Click a tag to filter to it, click it again to clear.
const SCRIPT: &str = r#"        let currentFilter = null;

        function filterByTag(tag) {
            if (currentFilter === tag) {
                clearFilter();
                return;
            }

            currentFilter = tag;

            document.querySelectorAll('.event').forEach(event => {
                const tags = event.getAttribute('data-tags');
                if (tags && tags.split(',').includes(tag)) {
                    event.classList.remove('hidden');
                } else {
                    event.classList.add('hidden');
                }
            });

            document.querySelectorAll('.filter-tag').forEach(filterTag => {
                filterTag.classList.toggle('active', filterTag.getAttribute('data-tag') === tag);
            });

            window.scrollTo({ top: 0, behavior: 'smooth' });
        }

        function clearFilter() {
            currentFilter = null;

            document.querySelectorAll('.event').forEach(event => {
                event.classList.remove('hidden');
            });

            document.querySelectorAll('.filter-tag').forEach(filterTag => {
                filterTag.classList.remove('active');
            });
        }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_event(title: &str, tags: &[&str]) -> Event {
        Event {
            title: title.to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
            end_date: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: None,
            link: None,
        }
    }

    #[test]
    fn test_page_embeds_title_and_event() {
        let html = generate_html(&[make_event("Trail Run", &[])], "My Events", None);

        assert!(html.contains("<title>My Events</title>"));
        assert!(html.contains("Trail Run"));
        assert!(html.contains("15.12.2025"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let html = generate_html(&[make_event("Tom & Jerry <live>", &[])], "Events", None);

        assert!(html.contains("Tom &amp; Jerry &lt;live&gt;"));
        assert!(!html.contains("Tom & Jerry <live>"));
    }

    #[test]
    fn test_download_link_present_only_with_ical() {
        let events = [make_event("A", &[])];

        let with = generate_html(&events, "Events", Some("events.ics"));
        assert!(with.contains(r#"href="events.ics""#));

        let without = generate_html(&events, "Events", None);
        assert!(!without.contains("download-link\" download"));
    }

    #[test]
    fn test_filter_bar_lists_distinct_tags_sorted() {
        let events = [
            make_event("A", &["race", "trailrun"]),
            make_event("B", &["race", "alpine"]),
        ];
        let html = generate_html(&events, "Events", None);

        let alpine = html.find(r#"data-tag="alpine""#).expect("alpine missing");
        let race = html.find(r#"data-tag="race""#).expect("race missing");
        let trail = html.find(r#"data-tag="trailrun""#).expect("trailrun missing");
        assert!(alpine < race && race < trail, "filter bar should be sorted");

        // Each distinct tag appears once in the bar
        assert_eq!(html.matches(r#"data-tag="race""#).count(), 1);
    }

    #[test]
    fn test_no_filter_bar_without_tags() {
        let html = generate_html(&[make_event("A", &[])], "Events", None);
        assert!(!html.contains("tag-filter-section"));
    }

    #[test]
    fn test_cards_carry_data_tags_for_the_filter_script() {
        let html = generate_html(&[make_event("A", &["trailrun", "race"])], "Events", None);
        assert!(html.contains(r#"data-tags="trailrun,race""#));
        assert!(html.contains("function filterByTag"));
        assert!(html.contains("function clearFilter"));
    }

    #[test]
    fn test_description_and_link_render_when_present() {
        let mut event = make_event("A", &[]);
        event.description = Some("Fun race".to_string());
        event.link = Some("https://example.com".to_string());

        let html = generate_html(&[event], "Events", None);

        assert!(html.contains("Fun race"));
        assert!(html.contains(r#"<a href="https://example.com" target="_blank">"#));
    }
}
