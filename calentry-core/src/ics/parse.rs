//! Re-import of generated documents, using the `icalendar` crate's parser.
//!
//! Only the subset of fields generation emits is recovered; anything else in
//! the document is ignored.

use chrono::NaiveDateTime;
use icalendar::parser::{read_calendar, unfold};

use super::escape::unescape_text;
use crate::event::{EventRecord, Recurrence};

/// Parse ICS content back into event records, in document order.
///
/// Returns `None` when the content is not a parseable VCALENDAR or a VEVENT
/// is missing a required field.
pub fn parse_records(content: &str) -> Option<Vec<EventRecord>> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).ok()?;

    let mut records = Vec::new();
    for vevent in calendar.components.iter().filter(|c| c.name == "VEVENT") {
        let uid = vevent.find_prop("UID")?.val.to_string();
        let start = parse_datetime(vevent.find_prop("DTSTART")?.val.as_ref())?;
        let end = parse_datetime(vevent.find_prop("DTEND")?.val.as_ref())?;
        let description = vevent
            .find_prop("SUMMARY")
            .map(|p| unescape_text(p.val.as_ref()))
            .unwrap_or_default();
        let recurrence = match vevent.find_prop("RRULE") {
            Some(prop) => parse_rrule(prop.val.as_ref())?,
            None => Recurrence::None,
        };

        records.push(EventRecord::with_uid(uid, start, end, recurrence, description).ok()?);
    }

    Some(records)
}

/// Basic local-time format, the only one generation produces.
fn parse_datetime(val: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(val, "%Y%m%dT%H%M%S").ok()
}

fn parse_rrule(val: &str) -> Option<Recurrence> {
    val.strip_prefix("FREQ=").and_then(Recurrence::from_freq)
}
