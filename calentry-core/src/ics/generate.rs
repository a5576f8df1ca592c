//! ICS document generation.

use super::escape::escape_text;
use crate::error::SerializationError;
use crate::event::EventRecord;

/// Product identifier emitted on the PRODID line.
pub const PRODID: &str = "-//calentry//calentry-core//EN";

/// Basic ICS local-time format, no timezone suffix (floating time)
const DT_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Soft content-line limit from RFC 5545 §3.1, in octets
const FOLD_LIMIT: usize = 75;

/// Serialize the record sequence into a single ICS document.
///
/// Pure and deterministic: the same input yields byte-identical output (no
/// DTSTAMP, no generated identifiers; UIDs were assigned at record
/// creation). One VEVENT block per record, in input order. On error nothing
/// is emitted; a partially-invalid document is never produced.
pub fn serialize(records: &[EventRecord]) -> Result<String, SerializationError> {
    let mut out = String::new();
    push_folded(&mut out, "BEGIN:VCALENDAR");
    push_folded(&mut out, "VERSION:2.0");
    push_folded(&mut out, &format!("PRODID:{PRODID}"));
    push_folded(&mut out, "CALSCALE:GREGORIAN");

    for (index, record) in records.iter().enumerate() {
        // Store validation should have caught this; re-check so a corrupted
        // record can never reach a consumer's calendar.
        if record.start > record.end {
            return Err(SerializationError::InvalidRecord { index });
        }

        let summary = escape_text(&record.description)
            .map_err(|codepoint| SerializationError::ControlCharacter { index, codepoint })?;

        push_folded(&mut out, "BEGIN:VEVENT");
        push_folded(&mut out, &format!("UID:{}", record.uid));
        push_folded(&mut out, &format!("DTSTART:{}", record.start.format(DT_FORMAT)));
        push_folded(&mut out, &format!("DTEND:{}", record.end.format(DT_FORMAT)));
        if let Some(freq) = record.recurrence.freq() {
            push_folded(&mut out, &format!("RRULE:FREQ={freq}"));
        }
        push_folded(&mut out, &format!("SUMMARY:{summary}"));
        push_folded(&mut out, "END:VEVENT");
    }

    push_folded(&mut out, "END:VCALENDAR");
    Ok(out)
}

/// Append a content line, folding it at 75 octets with CRLF + single space
/// on UTF-8 character boundaries.
fn push_folded(out: &mut String, line: &str) {
    if line.len() <= FOLD_LIMIT {
        out.push_str(line);
        out.push_str("\r\n");
        return;
    }

    let mut budget = FOLD_LIMIT;
    let mut used = 0;
    for c in line.chars() {
        let width = c.len_utf8();
        if used + width > budget {
            out.push_str("\r\n ");
            used = 0;
            // The leading space counts against continuation lines
            budget = FOLD_LIMIT - 1;
        }
        out.push(c);
        used += width;
    }
    out.push_str("\r\n");
}
