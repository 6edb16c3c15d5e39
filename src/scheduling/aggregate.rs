//! Slot aggregator
//!
//! Turns the flat collection of availability facts for one event into
//! per-slot participant groups. The representation is sparse: a slot nobody
//! declared never appears.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::AvailabilityFact;

/// One date/time slot annotated with the users free during it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Distinct user ids, in insertion order from the input facts.
    /// Order is not significant to callers.
    pub participants: Vec<i64>,
}

impl AvailabilitySlot {
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Identity set used for exact-equality comparison between slots
    pub fn participant_set(&self) -> BTreeSet<i64> {
        self.participants.iter().copied().collect()
    }
}

/// Group availability facts by exact (date, time) equality.
///
/// Every distinct (date, time) in the input appears exactly once in the
/// output, carrying the distinct users who declared it. An empty fact set
/// yields an empty sequence.
pub fn aggregate_slots(facts: &[AvailabilityFact]) -> Vec<AvailabilitySlot> {
    let mut grouped: BTreeMap<(NaiveDate, NaiveTime), Vec<i64>> = BTreeMap::new();

    for fact in facts {
        let participants = grouped
            .entry((fact.available_date, fact.available_time))
            .or_default();
        if !participants.contains(&fact.user_id) {
            participants.push(fact.user_id);
        }
    }

    grouped
        .into_iter()
        .map(|((date, time), participants)| AvailabilitySlot {
            date,
            time,
            participants,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fact(user_id: i64, date: (i32, u32, u32), time: (u32, u32)) -> AvailabilityFact {
        AvailabilityFact {
            id: 0,
            event_id: 1,
            user_id,
            available_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            available_time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_facts_yield_no_slots() {
        assert!(aggregate_slots(&[]).is_empty());
    }

    #[test]
    fn test_grouping_is_exact() {
        let facts = vec![
            fact(1, (2025, 7, 20), (9, 0)),
            fact(2, (2025, 7, 20), (9, 0)),
            fact(1, (2025, 7, 20), (9, 30)),
            fact(2, (2025, 7, 21), (9, 0)),
        ];

        let slots = aggregate_slots(&facts);
        assert_eq!(slots.len(), 3);

        let nine = slots
            .iter()
            .find(|s| s.date == NaiveDate::from_ymd_opt(2025, 7, 20).unwrap()
                && s.time == NaiveTime::from_hms_opt(9, 0, 0).unwrap())
            .unwrap();
        assert_eq!(nine.participants, vec![1, 2]);
    }

    #[test]
    fn test_aggregation_totality() {
        // every distinct (date, time) appears exactly once, with the count
        // of distinct users who declared it
        let facts = vec![
            fact(1, (2025, 7, 20), (10, 0)),
            fact(2, (2025, 7, 20), (10, 0)),
            fact(3, (2025, 7, 20), (10, 0)),
            fact(3, (2025, 7, 20), (10, 0)),
        ];

        let slots = aggregate_slots(&facts);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].participant_count(), 3);
    }

    #[test]
    fn test_participant_order_is_insertion_order() {
        let facts = vec![
            fact(7, (2025, 7, 20), (9, 0)),
            fact(3, (2025, 7, 20), (9, 0)),
            fact(5, (2025, 7, 20), (9, 0)),
        ];

        let slots = aggregate_slots(&facts);
        assert_eq!(slots[0].participants, vec![7, 3, 5]);
    }

    #[test]
    fn test_participant_set_ignores_order() {
        let a = AvailabilitySlot {
            date: NaiveDate::from_ymd_opt(2025, 7, 20).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            participants: vec![1, 2],
        };
        let b = AvailabilitySlot {
            participants: vec![2, 1],
            ..a.clone()
        };
        assert_eq!(a.participant_set(), b.participant_set());
    }
}
