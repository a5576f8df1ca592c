//! The event record: the validated unit of data the store and serializer
//! operate on.
//!
//! Times are [`NaiveDateTime`], i.e. floating local time with no timezone
//! attached; the ICS output carries no TZID and no UTC marker, so consumers
//! interpret the values in the viewer's local zone.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// How often an event repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Annually,
}

impl Recurrence {
    /// The ICS `FREQ` value for this recurrence, or `None` when the event
    /// does not repeat (no RRULE line is emitted at all).
    ///
    /// Note the one non-obvious mapping: iCalendar spells yearly recurrence
    /// `YEARLY`, not `ANNUALLY`.
    pub fn freq(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Daily => Some("DAILY"),
            Self::Weekly => Some("WEEKLY"),
            Self::Monthly => Some("MONTHLY"),
            Self::Annually => Some("YEARLY"),
        }
    }

    /// Inverse of [`Recurrence::freq`], for re-importing generated documents.
    pub fn from_freq(freq: &str) -> Option<Self> {
        match freq {
            "DAILY" => Some(Self::Daily),
            "WEEKLY" => Some(Self::Weekly),
            "MONTHLY" => Some(Self::Monthly),
            "YEARLY" => Some(Self::Annually),
            _ => None,
        }
    }
}

/// A single calendar event, immutable once created.
///
/// Corrections are modeled as appending a new record (plus optionally
/// deleting the old one), never as mutation in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique identifier, assigned at creation and stable for the record's
    /// lifetime. Pre-assigned so that serialization stays deterministic.
    pub uid: String,
    /// Floating local start time.
    pub start: NaiveDateTime,
    /// Floating local end time; never before `start`.
    pub end: NaiveDateTime,
    pub recurrence: Recurrence,
    /// Free text, may be empty.
    pub description: String,
}

impl EventRecord {
    /// Create a record with a fresh v4 UUID, enforcing `start <= end`.
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        recurrence: Recurrence,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_uid(Uuid::new_v4().to_string(), start, end, recurrence, description)
    }

    /// Create a record with a caller-supplied UID (re-import, tests).
    pub fn with_uid(
        uid: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        recurrence: Recurrence,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::EndBeforeStart { start, end });
        }

        Ok(Self {
            uid: uid.into(),
            start,
            end,
            recurrence,
            description: description.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 20)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn new_assigns_unique_uids() {
        let a = EventRecord::new(dt(9, 0), dt(10, 0), Recurrence::None, "a").unwrap();
        let b = EventRecord::new(dt(9, 0), dt(10, 0), Recurrence::None, "b").unwrap();
        assert_ne!(a.uid, b.uid);
        assert!(!a.uid.is_empty());
    }

    #[test]
    fn new_rejects_end_before_start() {
        let err = EventRecord::new(dt(10, 0), dt(9, 0), Recurrence::None, "x").unwrap_err();
        assert_eq!(
            err,
            ValidationError::EndBeforeStart {
                start: dt(10, 0),
                end: dt(9, 0),
            }
        );
    }

    #[test]
    fn zero_length_event_is_valid() {
        assert!(EventRecord::new(dt(9, 0), dt(9, 0), Recurrence::None, "").is_ok());
    }

    #[test]
    fn recurrence_freq_mapping_is_exact() {
        assert_eq!(Recurrence::None.freq(), None);
        assert_eq!(Recurrence::Daily.freq(), Some("DAILY"));
        assert_eq!(Recurrence::Weekly.freq(), Some("WEEKLY"));
        assert_eq!(Recurrence::Monthly.freq(), Some("MONTHLY"));
        // iCalendar says YEARLY, not ANNUALLY
        assert_eq!(Recurrence::Annually.freq(), Some("YEARLY"));
    }

    #[test]
    fn recurrence_from_freq_inverts_freq() {
        for rec in [
            Recurrence::Daily,
            Recurrence::Weekly,
            Recurrence::Monthly,
            Recurrence::Annually,
        ] {
            assert_eq!(Recurrence::from_freq(rec.freq().unwrap()), Some(rec));
        }
        assert_eq!(Recurrence::from_freq("ANNUALLY"), None);
    }

    #[test]
    fn recurrence_uses_uppercase_wire_strings() {
        assert_eq!(
            serde_json::to_string(&Recurrence::Annually).unwrap(),
            "\"ANNUALLY\""
        );
        assert_eq!(
            serde_json::from_str::<Recurrence>("\"NONE\"").unwrap(),
            Recurrence::None
        );
    }
}
