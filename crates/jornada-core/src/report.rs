//! Presentation-ready allocation reports.
//!
//! The allocator returns a bare id -> hours map; this module joins that map
//! back to the roster so callers can render names, windows and a coarse
//! emphasis band per concept.

use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::concept::{ConceptId, ConceptRoster};
use crate::window::TimeWindow;

/// Coarse band for a credited-hours figure, used for display emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursBand {
    /// No time credited.
    Zero,
    /// Under four hours.
    Light,
    /// Four to under eight hours.
    Standard,
    /// Eight hours or more.
    Extended,
}

impl HoursBand {
    pub fn from_hours(hours: f64) -> Self {
        if hours <= 0.0 {
            HoursBand::Zero
        } else if hours < 4.0 {
            HoursBand::Light
        } else if hours < 8.0 {
            HoursBand::Standard
        } else {
            HoursBand::Extended
        }
    }
}

impl fmt::Display for HoursBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HoursBand::Zero => "zero",
            HoursBand::Light => "light",
            HoursBand::Standard => "standard",
            HoursBand::Extended => "extended",
        };
        write!(f, "{label}")
    }
}

/// One concept's line in an allocation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub id: ConceptId,
    pub name: String,
    #[serde(flatten)]
    pub window: TimeWindow,
    pub hours: f64,
    pub band: HoursBand,
}

/// An allocation joined back to the roster for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    /// The attendance window the allocation was computed for.
    pub attendance: TimeWindow,
    /// One line per distinct credited id, in roster order.
    pub lines: Vec<ReportLine>,
    /// Sum of the lines' credited hours.
    pub total_hours: f64,
    /// Timestamp when the report was assembled.
    pub generated_at: DateTime<Utc>,
}

impl AllocationReport {
    /// Join an id -> hours mapping back to the roster.
    ///
    /// Lines come out in roster order, one per distinct id; a duplicated id
    /// is represented by its first roster row. Credited entries whose id no
    /// longer matches any roster concept are silently dropped, tolerating a
    /// roster that changed between allocation and display.
    pub fn build(
        roster: &ConceptRoster,
        attendance: TimeWindow,
        credited: &HashMap<ConceptId, f64>,
    ) -> Self {
        let mut seen = HashSet::new();
        let mut lines = Vec::new();
        for concept in roster.iter() {
            if !seen.insert(concept.id) {
                continue;
            }
            if let Some(&hours) = credited.get(&concept.id) {
                lines.push(ReportLine {
                    id: concept.id,
                    name: concept.name.clone(),
                    window: concept.window,
                    hours,
                    band: HoursBand::from_hours(hours),
                });
            }
        }
        let total_hours = lines.iter().map(|l| l.hours).sum();
        Self {
            attendance,
            lines,
            total_hours,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocate::allocate;
    use crate::concept::Concept;

    fn window(start: &str, end: &str) -> TimeWindow {
        TimeWindow::new(start.parse().unwrap(), end.parse().unwrap())
    }

    #[test]
    fn bands_follow_the_display_thresholds() {
        assert_eq!(HoursBand::from_hours(0.0), HoursBand::Zero);
        assert_eq!(HoursBand::from_hours(0.5), HoursBand::Light);
        assert_eq!(HoursBand::from_hours(3.5), HoursBand::Light);
        assert_eq!(HoursBand::from_hours(4.0), HoursBand::Standard);
        assert_eq!(HoursBand::from_hours(7.5), HoursBand::Standard);
        assert_eq!(HoursBand::from_hours(8.0), HoursBand::Extended);
    }

    #[test]
    fn report_follows_roster_order_with_totals() {
        let roster = ConceptRoster::default();
        let attendance = window("07:30", "18:30");
        let credited = allocate(roster.concepts(), attendance);
        let report = AllocationReport::build(&roster, attendance, &credited);

        let ids: Vec<_> = report.lines.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(report.total_hours, 11.0);
        assert_eq!(report.lines[0].band, HoursBand::Extended);
        assert_eq!(report.lines[2].hours, 0.5);
    }

    #[test]
    fn stale_credited_ids_are_dropped() {
        let roster = ConceptRoster::new(vec![Concept::new(
            1,
            "Ordinary hours",
            window("07:00", "17:00"),
        )]);
        let mut credited = HashMap::new();
        credited.insert(1, 2.0);
        credited.insert(42, 5.0); // concept no longer exists

        let report = AllocationReport::build(&roster, window("08:00", "10:00"), &credited);
        assert_eq!(report.lines.len(), 1);
        assert_eq!(report.lines[0].id, 1);
        assert_eq!(report.total_hours, 2.0);
    }

    #[test]
    fn duplicate_ids_show_the_first_roster_row() {
        let roster = ConceptRoster::new(vec![
            Concept::new(2, "Overtime", window("17:00", "18:00")),
            Concept::new(2, "Night overtime", window("18:00", "06:00")),
        ]);
        let attendance = window("07:30", "18:30");
        let credited = allocate(roster.concepts(), attendance);
        let report = AllocationReport::build(&roster, attendance, &credited);

        assert_eq!(report.lines.len(), 1);
        assert_eq!(report.lines[0].name, "Overtime");
        // The figure is the allocator's last-write-wins value for id 2.
        assert_eq!(report.lines[0].hours, 0.5);
    }
}
