//! Best-time ranker
//!
//! Orders aggregated slots by desirability: participant count descending,
//! then date and time ascending so equal-popularity slots always come out in
//! the same order.

use std::cmp::Reverse;

use super::aggregate::AvailabilitySlot;

/// Default number of candidate slots surfaced to callers
pub const DEFAULT_BEST_SLOT_LIMIT: usize = 10;

/// Return the top `limit` slots under the composite ordering.
///
/// The ordering is total and ties are broken solely by (date, time), never by
/// participant identity. `limit == 0` yields an empty sequence; a limit past
/// the input length yields every slot, sorted.
pub fn rank_slots(slots: &[AvailabilitySlot], limit: usize) -> Vec<AvailabilitySlot> {
    let mut ranked: Vec<AvailabilitySlot> = slots.to_vec();
    ranked.sort_by_key(|slot| (Reverse(slot.participant_count()), slot.date, slot.time));
    ranked.truncate(limit);
    ranked
}
