//! The interval allocator: credits attendance time to concepts.
//!
//! This is the arithmetic heart of the crate. Given an attendance window
//! and a snapshot of the concept roster, it intersects the attendance
//! window against each concept's window on the unrolled 0-48h timeline and
//! reports the overlap in half-hour increments.
//!
//! The function is pure and total: it performs no I/O, keeps no state, and
//! cannot fail for any well-formed input. Callers may invoke it from any
//! number of threads without synchronization.

use std::collections::HashMap;

use crate::concept::{Concept, ConceptId};
use crate::error::ValidationError;
use crate::window::TimeWindow;

/// Round to the nearest half hour, half-up: 1.24 -> 1.0, 1.25 -> 1.5.
fn round_half_hour(hours: f64) -> f64 {
    (hours * 2.0 + 0.5).floor() / 2.0
}

/// Credit the overlap between the attendance window and each concept's
/// window, in half-hour increments.
///
/// The midnight-wraparound rule applies to the attendance window and to
/// each concept window independently, each against its own bounds; a night
/// concept `18:00-06:00` overlaps a day attendance `07:00-18:30` by half an
/// hour regardless of which side of midnight either nominally lives on.
///
/// The result has one entry per *distinct* id: concepts sharing an id
/// overwrite earlier entries, last write wins. Use [`allocate_strict`] to
/// reject duplicated ids instead.
pub fn allocate(concepts: &[Concept], attendance: TimeWindow) -> HashMap<ConceptId, f64> {
    let mut credited = HashMap::with_capacity(concepts.len());
    for concept in concepts {
        let hours = round_half_hour(attendance.overlap_hours(&concept.window));
        credited.insert(concept.id, hours);
    }
    credited
}

/// Like [`allocate`], but fails on the first duplicated concept id rather
/// than quietly overwriting the earlier entry.
pub fn allocate_strict(
    concepts: &[Concept],
    attendance: TimeWindow,
) -> Result<HashMap<ConceptId, f64>, ValidationError> {
    let mut credited = HashMap::with_capacity(concepts.len());
    for concept in concepts {
        let hours = round_half_hour(attendance.overlap_hours(&concept.window));
        if credited.insert(concept.id, hours).is_some() {
            return Err(ValidationError::DuplicateConceptId(concept.id));
        }
    }
    Ok(credited)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: &str, end: &str) -> TimeWindow {
        TimeWindow::new(start.parse().unwrap(), end.parse().unwrap())
    }

    fn concept(id: ConceptId, name: &str, start: &str, end: &str) -> Concept {
        Concept::new(id, name, window(start, end))
    }

    #[test]
    fn rounds_half_up_at_half_hour_granularity() {
        assert_eq!(round_half_hour(1.24), 1.0);
        assert_eq!(round_half_hour(1.25), 1.5);
        assert_eq!(round_half_hour(1.26), 1.5);
        assert_eq!(round_half_hour(0.0), 0.0);
        assert_eq!(round_half_hour(9.5), 9.5);
    }

    #[test]
    fn night_concept_catches_the_wraparound_sliver() {
        let concepts = [concept(1, "Night overtime", "18:00", "06:00")];
        let credited = allocate(&concepts, window("07:00", "18:30"));
        assert_eq!(credited[&1], 0.5);
    }

    #[test]
    fn workday_roster_with_duplicate_id() {
        // Duplicate id 2: the night concept's result overwrites overtime's.
        let concepts = [
            concept(1, "Ordinary hours", "07:00", "17:00"),
            concept(2, "Overtime", "17:00", "18:00"),
            concept(2, "Night overtime", "18:00", "06:00"),
        ];
        let credited = allocate(&concepts, window("07:30", "18:30"));
        assert_eq!(credited.len(), 2);
        assert_eq!(credited[&1], 9.5);
        assert_eq!(credited[&2], 0.5);
    }

    #[test]
    fn empty_attendance_credits_nothing() {
        // Both clocks absent: a zero-length window at midnight.
        let concepts = [
            concept(1, "Ordinary hours", "07:00", "17:00"),
            concept(2, "Overtime", "17:00", "18:00"),
        ];
        let credited = allocate(&concepts, TimeWindow::default());
        assert_eq!(credited[&1], 0.0);
        assert_eq!(credited[&2], 0.0);
    }

    #[test]
    fn wrapped_attendance_still_credits_day_concepts() {
        // 09:00-08:00 wraps to 9..32; 07:00-17:00 contributes 9..17.
        let concepts = [concept(1, "Ordinary hours", "07:00", "17:00")];
        let credited = allocate(&concepts, window("09:00", "08:00"));
        assert_eq!(credited[&1], 8.0);
    }

    #[test]
    fn empty_roster_yields_empty_result() {
        let credited = allocate(&[], window("07:30", "18:30"));
        assert!(credited.is_empty());
    }

    #[test]
    fn strict_mode_rejects_duplicate_ids() {
        let concepts = [
            concept(1, "Ordinary hours", "07:00", "17:00"),
            concept(2, "Overtime", "17:00", "18:00"),
            concept(2, "Night overtime", "18:00", "06:00"),
        ];
        assert_eq!(
            allocate_strict(&concepts, window("07:30", "18:30")),
            Err(ValidationError::DuplicateConceptId(2))
        );
    }

    #[test]
    fn strict_mode_matches_allocate_on_distinct_ids() {
        let concepts = [
            concept(1, "Ordinary hours", "07:00", "17:00"),
            concept(2, "Overtime", "17:00", "18:00"),
            concept(3, "Night overtime", "18:00", "06:00"),
        ];
        let attendance = window("07:30", "18:30");
        let strict = allocate_strict(&concepts, attendance).unwrap();
        assert_eq!(strict, allocate(&concepts, attendance));
        assert_eq!(strict[&1], 9.5);
        assert_eq!(strict[&2], 1.0);
        assert_eq!(strict[&3], 0.5);
    }
}
