//! Contiguous-block merger
//!
//! Merges adjacent slots that share an identical participant set into
//! multi-slot meeting windows, dropping windows shorter than a minimum
//! duration.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::aggregate::AvailabilitySlot;
use super::slot::{minutes_of_day, slot_end, SLOT_MINUTES};

/// Default minimum total span of a block, in minutes
pub const DEFAULT_MIN_BLOCK_MINUTES: u32 = 60;

/// A maximal run of adjacent slots with the same participants.
///
/// Always non-empty; constructed only by [`merge_contiguous`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContiguousBlock {
    slots: Vec<AvailabilitySlot>,
}

impl ContiguousBlock {
    pub fn slots(&self) -> &[AvailabilitySlot] {
        &self.slots
    }

    pub fn date(&self) -> NaiveDate {
        self.slots[0].date
    }

    pub fn start_time(&self) -> NaiveTime {
        self.slots[0].time
    }

    /// The moment the last slot's 30 minutes end (00:00 for a block
    /// running to midnight)
    pub fn end_time(&self) -> NaiveTime {
        slot_end(self.slots[self.slots.len() - 1].time)
    }

    pub fn participants(&self) -> &[i64] {
        &self.slots[0].participants
    }

    pub fn span_minutes(&self) -> u32 {
        self.slots.len() as u32 * SLOT_MINUTES
    }
}

/// Merge a slot sequence into contiguous blocks meeting the duration
/// threshold, in chronological order.
///
/// A slot extends the open block iff it is on the same date, exactly 30
/// minutes after the previous slot, and has a set-equal participant set.
/// Count equality alone never merges two slots.
pub fn merge_contiguous(
    slots: &[AvailabilitySlot],
    min_duration_minutes: u32,
) -> Vec<ContiguousBlock> {
    let mut sorted: Vec<AvailabilitySlot> = slots.to_vec();
    sorted.sort_by_key(|slot| (slot.date, slot.time));

    let mut blocks = Vec::new();
    let mut open: Vec<AvailabilitySlot> = Vec::new();

    for slot in sorted {
        let extends = open.last().map_or(false, |last| {
            slot.date == last.date
                && minutes_of_day(slot.time) == minutes_of_day(last.time) + SLOT_MINUTES
                && slot.participant_set() == last.participant_set()
        });

        if extends {
            open.push(slot);
        } else {
            close_block(&mut blocks, std::mem::take(&mut open), min_duration_minutes);
            open.push(slot);
        }
    }
    close_block(&mut blocks, open, min_duration_minutes);

    blocks
}

fn close_block(
    blocks: &mut Vec<ContiguousBlock>,
    slots: Vec<AvailabilitySlot>,
    min_duration_minutes: u32,
) {
    if slots.is_empty() {
        return;
    }
    if slots.len() as u32 * SLOT_MINUTES >= min_duration_minutes {
        blocks.push(ContiguousBlock { slots });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(date: (i32, u32, u32), time: (u32, u32), participants: Vec<i64>) -> AvailabilitySlot {
        AvailabilitySlot {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
            participants,
        }
    }

    #[test]
    fn test_empty_input_yields_no_blocks() {
        assert!(merge_contiguous(&[], DEFAULT_MIN_BLOCK_MINUTES).is_empty());
    }

    #[test]
    fn test_contiguous_merge_scenario() {
        // 0900 {A,B}, 0930 {A,B}, 1000 {A} with a 60-minute threshold:
        // one block 0900-1000 over the first two slots, the lone third
        // slot discarded
        let slots = vec![
            slot((2025, 7, 20), (9, 0), vec![1, 2]),
            slot((2025, 7, 20), (9, 30), vec![1, 2]),
            slot((2025, 7, 20), (10, 0), vec![1]),
        ];

        let blocks = merge_contiguous(&slots, 60);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].slots().len(), 2);
        assert_eq!(blocks[0].start_time(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(blocks[0].end_time(), NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(blocks[0].span_minutes(), 60);
    }

    #[test]
    fn test_single_slot_discarded_above_threshold() {
        let slots = vec![slot((2025, 7, 20), (9, 0), vec![1])];

        assert!(merge_contiguous(&slots, 60).is_empty());
        assert_eq!(merge_contiguous(&slots, 30).len(), 1);
    }

    #[test]
    fn test_same_count_different_people_never_merge() {
        let slots = vec![
            slot((2025, 7, 20), (9, 0), vec![1, 2]),
            slot((2025, 7, 20), (9, 30), vec![1, 3]),
        ];

        assert!(merge_contiguous(&slots, 60).is_empty());
    }

    #[test]
    fn test_participant_order_does_not_break_merge() {
        let slots = vec![
            slot((2025, 7, 20), (9, 0), vec![2, 1]),
            slot((2025, 7, 20), (9, 30), vec![1, 2]),
        ];

        let blocks = merge_contiguous(&slots, 60);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].span_minutes(), 60);
    }

    #[test]
    fn test_date_boundary_closes_block() {
        // 2330 on one day and 0000 on the next are not adjacent
        let slots = vec![
            slot((2025, 7, 20), (23, 0), vec![1]),
            slot((2025, 7, 20), (23, 30), vec![1]),
            slot((2025, 7, 21), (0, 0), vec![1]),
        ];

        let blocks = merge_contiguous(&slots, 60);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].date(), NaiveDate::from_ymd_opt(2025, 7, 20).unwrap());
        assert_eq!(blocks[0].end_time(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_gap_closes_block() {
        let slots = vec![
            slot((2025, 7, 20), (9, 0), vec![1]),
            slot((2025, 7, 20), (9, 30), vec![1]),
            slot((2025, 7, 20), (10, 30), vec![1]),
            slot((2025, 7, 20), (11, 0), vec![1]),
        ];

        let blocks = merge_contiguous(&slots, 60);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].start_time(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(blocks[1].start_time(), NaiveTime::from_hms_opt(10, 30, 0).unwrap());
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let slots = vec![
            slot((2025, 7, 20), (9, 30), vec![1]),
            slot((2025, 7, 20), (9, 0), vec![1]),
        ];

        let blocks = merge_contiguous(&slots, 60);
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_contiguity_invariants_hold_within_blocks() {
        let slots = vec![
            slot((2025, 7, 20), (9, 0), vec![1, 2]),
            slot((2025, 7, 20), (9, 30), vec![1, 2]),
            slot((2025, 7, 20), (10, 0), vec![1, 2]),
            slot((2025, 7, 21), (9, 0), vec![1, 2]),
            slot((2025, 7, 21), (9, 30), vec![1, 2]),
        ];

        for block in merge_contiguous(&slots, 60) {
            assert!(block.span_minutes() >= 60);
            for pair in block.slots().windows(2) {
                assert_eq!(pair[1].date, pair[0].date);
                assert_eq!(
                    minutes_of_day(pair[1].time),
                    minutes_of_day(pair[0].time) + SLOT_MINUTES
                );
                assert_eq!(pair[1].participant_set(), pair[0].participant_set());
            }
        }
    }
}
