//! ICS file generation.

use chrono::{Duration, NaiveDate, Utc};
use icalendar::{Calendar, Component, Property, ValueType};

use crate::event::Event;

const PRODID: &str = "-//mdcal//mdcal//EN";

/// Generate a VCALENDAR wrapping one VEVENT per event, in the order
/// given (document order).
///
/// Text escaping and 75-octet line folding are handled by the icalendar
/// crate; the output is post-processed for the pieces the crate does
/// not expose directly (PRODID, METHOD, CATEGORIES).
pub fn generate_ics(events: &[Event]) -> String {
    let mut cal = Calendar::new();

    for event in events {
        cal.push(generate_vevent(event));
    }

    let cal = cal.done();
    finalize_ics(&cal.to_string(), events)
}

fn generate_vevent(event: &Event) -> icalendar::Event {
    let mut vevent = icalendar::Event::new();
    vevent.uid(&event_uid(event));
    vevent.summary(&event.title);
    vevent.timestamp(Utc::now());

    // All-day semantics: DTEND is exclusive, so a single-day event ends
    // the next day and a range ends the day after its last day.
    let last_day = event.end_date.unwrap_or(event.start_date);
    add_date_property(&mut vevent, "DTSTART", event.start_date);
    add_date_property(&mut vevent, "DTEND", last_day + Duration::days(1));

    // Description carries the link too, for clients that hide URL
    let mut description_parts: Vec<String> = Vec::new();
    if let Some(ref desc) = event.description {
        description_parts.push(desc.clone());
    }
    if let Some(ref link) = event.link {
        description_parts.push(format!("Link: {link}"));
        vevent.add_property("URL", link);
    }
    if !description_parts.is_empty() {
        vevent.description(&description_parts.join("\n"));
    }

    vevent.done()
}

/// Deterministic UID so regenerating the same source keeps the same
/// event identities across calendar subscriptions.
fn event_uid(event: &Event) -> String {
    format!(
        "{}-{}@mdcal",
        event.start_date.format("%Y%m%d"),
        slug::slugify(&event.title)
    )
}

/// Add a VALUE=DATE property (all-day, no time component, no timezone).
fn add_date_property(vevent: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    vevent.append_property(prop);
}

/// Post-process the icalendar crate's output:
/// - replace the crate's PRODID with ours
/// - add METHOD:PUBLISH right after BEGIN:VCALENDAR
/// - inject CATEGORIES into each VEVENT (the crate would escape the
///   commas separating the values; tags themselves cannot contain
///   commas, so the joined line needs no escaping)
fn finalize_ics(ics: &str, events: &[Event]) -> String {
    let mut result = String::with_capacity(ics.len());
    let mut vevent_index = 0;

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!("PRODID:{PRODID}\r\n"));
            continue;
        }

        if line == "BEGIN:VCALENDAR" {
            result.push_str("BEGIN:VCALENDAR\r\nMETHOD:PUBLISH\r\n");
            continue;
        }

        if line == "END:VEVENT" {
            if let Some(event) = events.get(vevent_index) {
                if !event.tags.is_empty() {
                    result.push_str(&format!("CATEGORIES:{}\r\n", event.tags.join(",")));
                }
            }
            vevent_index += 1;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
