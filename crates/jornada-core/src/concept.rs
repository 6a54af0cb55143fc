//! Allocation concepts and the editable roster that holds them.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::window::TimeWindow;

/// Unique identifier for a concept within a roster.
///
/// Uniqueness is conventional, not enforced: rosters with repeated ids are
/// representable and the allocator resolves them with last-write-wins (see
/// [`crate::allocate::allocate_strict`] for the checked variant).
pub type ConceptId = u32;

/// A named allocation bucket with its own time window.
///
/// Serialized flat as `{id, name, start, end}`, the record shape callers
/// exchange with the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub id: ConceptId,
    pub name: String,
    #[serde(flatten)]
    pub window: TimeWindow,
}

impl Concept {
    pub fn new(id: ConceptId, name: impl Into<String>, window: TimeWindow) -> Self {
        Self {
            id,
            name: name.into(),
            window,
        }
    }
}

/// The editable, ordered list of concepts.
///
/// This is the explicit-state replacement for form-held row state: callers
/// own a roster, mutate it through these operations, and hand the allocator
/// a read-only snapshot on every recalculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptRoster {
    concepts: Vec<Concept>,
}

impl ConceptRoster {
    pub fn new(concepts: Vec<Concept>) -> Self {
        Self { concepts }
    }

    pub fn empty() -> Self {
        Self {
            concepts: Vec::new(),
        }
    }

    /// Read-only snapshot for the allocator.
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Concept> {
        self.concepts.iter()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// First concept carrying the given id, if any.
    pub fn get(&self, id: ConceptId) -> Option<&Concept> {
        self.concepts.iter().find(|c| c.id == id)
    }

    fn next_id(&self) -> ConceptId {
        self.concepts.iter().map(|c| c.id).max().map_or(1, |m| m + 1)
    }

    /// Append a new concept with the next free id and a zero-length
    /// `00:00-00:00` window. The name defaults to `Concept {id}` when not
    /// given. Returns the id assigned.
    pub fn add(&mut self, name: Option<&str>) -> ConceptId {
        let id = self.next_id();
        let name = match name {
            Some(n) if !n.trim().is_empty() => n.to_string(),
            _ => format!("Concept {id}"),
        };
        self.concepts
            .push(Concept::new(id, name, TimeWindow::default()));
        id
    }

    /// Remove every concept carrying the given id. Returns how many rows
    /// were removed (more than one when the id was duplicated).
    pub fn remove(&mut self, id: ConceptId) -> usize {
        let before = self.concepts.len();
        self.concepts.retain(|c| c.id != id);
        before - self.concepts.len()
    }

    /// Rename every concept carrying the given id.
    pub fn rename(&mut self, id: ConceptId, name: &str) -> Result<(), ValidationError> {
        self.edit(id, |c| c.name = name.to_string())
    }

    /// Replace the window of every concept carrying the given id.
    pub fn set_window(&mut self, id: ConceptId, window: TimeWindow) -> Result<(), ValidationError> {
        self.edit(id, |c| c.window = window)
    }

    fn edit(
        &mut self,
        id: ConceptId,
        mut apply: impl FnMut(&mut Concept),
    ) -> Result<(), ValidationError> {
        let mut touched = false;
        for concept in self.concepts.iter_mut().filter(|c| c.id == id) {
            apply(concept);
            touched = true;
        }
        if touched {
            Ok(())
        } else {
            Err(ValidationError::UnknownConcept(id))
        }
    }
}

impl Default for ConceptRoster {
    /// The stock workday roster: ordinary hours, overtime and night
    /// overtime.
    fn default() -> Self {
        fn window(start: &str, end: &str) -> TimeWindow {
            // The literals below are well-formed by construction.
            TimeWindow::new(
                start.parse().unwrap_or(crate::ClockTime::MIDNIGHT),
                end.parse().unwrap_or(crate::ClockTime::MIDNIGHT),
            )
        }

        Self::new(vec![
            Concept::new(1, "Ordinary hours", window("07:00", "17:00")),
            Concept::new(2, "Overtime", window("17:00", "18:00")),
            Concept::new(3, "Night overtime", window("18:00", "06:00")),
        ])
    }
}

impl From<Vec<Concept>> for ConceptRoster {
    fn from(concepts: Vec<Concept>) -> Self {
        Self::new(concepts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: &str, end: &str) -> TimeWindow {
        TimeWindow::new(start.parse().unwrap(), end.parse().unwrap())
    }

    #[test]
    fn default_roster_covers_the_workday() {
        let roster = ConceptRoster::default();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.get(1).unwrap().name, "Ordinary hours");
        assert_eq!(roster.get(3).unwrap().window, window("18:00", "06:00"));
    }

    #[test]
    fn add_assigns_max_plus_one() {
        let mut roster = ConceptRoster::default();
        let id = roster.add(None);
        assert_eq!(id, 4);
        assert_eq!(roster.get(4).unwrap().name, "Concept 4");
        assert!(roster.get(4).unwrap().window.is_empty());
    }

    #[test]
    fn add_to_empty_roster_starts_at_one() {
        let mut roster = ConceptRoster::empty();
        assert_eq!(roster.add(Some("Standby")), 1);
        assert_eq!(roster.get(1).unwrap().name, "Standby");
    }

    #[test]
    fn add_skips_over_gaps() {
        let mut roster = ConceptRoster::new(vec![
            Concept::new(1, "a", TimeWindow::default()),
            Concept::new(5, "b", TimeWindow::default()),
        ]);
        assert_eq!(roster.add(None), 6);
    }

    #[test]
    fn remove_drops_every_row_with_the_id() {
        let mut roster = ConceptRoster::new(vec![
            Concept::new(1, "a", TimeWindow::default()),
            Concept::new(2, "b", TimeWindow::default()),
            Concept::new(2, "c", TimeWindow::default()),
        ]);
        assert_eq!(roster.remove(2), 2);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.remove(2), 0);
    }

    #[test]
    fn edits_touch_every_duplicate() {
        let mut roster = ConceptRoster::new(vec![
            Concept::new(2, "b", TimeWindow::default()),
            Concept::new(2, "c", TimeWindow::default()),
        ]);
        roster.set_window(2, window("17:00", "18:00")).unwrap();
        for concept in roster.iter() {
            assert_eq!(concept.window, window("17:00", "18:00"));
        }
    }

    #[test]
    fn edits_of_unknown_ids_fail() {
        let mut roster = ConceptRoster::default();
        assert_eq!(
            roster.rename(9, "ghost"),
            Err(ValidationError::UnknownConcept(9))
        );
        assert_eq!(
            roster.set_window(9, TimeWindow::default()),
            Err(ValidationError::UnknownConcept(9))
        );
    }

    #[test]
    fn concept_serializes_flat() {
        let concept = Concept::new(1, "Ordinary hours", window("07:00", "17:00"));
        let json = serde_json::to_value(&concept).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Ordinary hours",
                "start": "07:00",
                "end": "17:00",
            })
        );
        let decoded: Concept = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, concept);
    }
}
