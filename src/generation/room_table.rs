//! Weighted room-type roll table.
//!
//! A roll in `0..=ROOM_ROLL_MAX` selects the first entry whose exclusive
//! upper bound exceeds it. Bounds must be strictly increasing and the last one
//! must exceed `ROOM_ROLL_MAX` so every roll lands somewhere.

use crate::constants::ROOM_ROLL_MAX;
use crate::room::RoomType;

/// `(exclusive upper bound, type)` pairs walked in order
pub const ROOM_TYPE_TABLE: &[(u32, RoomType)] = &[
    (60, RoomType::Combat),
    (75, RoomType::Elite),
    (85, RoomType::Treasure),
    (92, RoomType::Shop),
    (ROOM_ROLL_MAX + 1, RoomType::Fountain),
];

const _: () = assert!(
    bands_cover_roll_range(ROOM_TYPE_TABLE),
    "ROOM_TYPE_TABLE bounds must increase and end past ROOM_ROLL_MAX"
);

/// Bounds strictly increase and the last one exceeds `ROOM_ROLL_MAX`
const fn bands_cover_roll_range(table: &[(u32, RoomType)]) -> bool {
    if table.is_empty() {
        return false;
    }
    let mut i = 1;
    while i < table.len() {
        if table[i].0 <= table[i - 1].0 {
            return false;
        }
        i += 1;
    }
    table[table.len() - 1].0 > ROOM_ROLL_MAX
}

/// Map a roll to a room type. Rolls past `ROOM_ROLL_MAX` clamp into the last band.
pub fn room_type_for_roll(roll: u32) -> RoomType {
    let roll = roll.min(ROOM_ROLL_MAX);
    let band = ROOM_TYPE_TABLE.partition_point(|(upper, _)| *upper <= roll);
    ROOM_TYPE_TABLE[band].1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_partitions_roll_range() {
        assert!(bands_cover_roll_range(ROOM_TYPE_TABLE));
    }

    #[test]
    fn test_broken_tables_are_rejected() {
        assert!(!bands_cover_roll_range(&[]));
        assert!(!bands_cover_roll_range(&[(60, RoomType::Combat), (90, RoomType::Elite)]));
        assert!(!bands_cover_roll_range(&[
            (60, RoomType::Combat),
            (60, RoomType::Elite),
            (ROOM_ROLL_MAX + 1, RoomType::Shop),
        ]));
    }

    #[test]
    fn test_roll_past_range_clamps_to_last_band() {
        assert_eq!(room_type_for_roll(ROOM_ROLL_MAX + 1), RoomType::Fountain);
        assert_eq!(room_type_for_roll(u32::MAX), RoomType::Fountain);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(room_type_for_roll(0), RoomType::Combat);
        assert_eq!(room_type_for_roll(59), RoomType::Combat);
        assert_eq!(room_type_for_roll(60), RoomType::Elite);
        assert_eq!(room_type_for_roll(74), RoomType::Elite);
        assert_eq!(room_type_for_roll(75), RoomType::Treasure);
        assert_eq!(room_type_for_roll(84), RoomType::Treasure);
        assert_eq!(room_type_for_roll(85), RoomType::Shop);
        assert_eq!(room_type_for_roll(91), RoomType::Shop);
        assert_eq!(room_type_for_roll(92), RoomType::Fountain);
        assert_eq!(room_type_for_roll(100), RoomType::Fountain);
    }

    #[test]
    fn test_band_sizes() {
        let mut counts = std::collections::HashMap::new();
        for roll in 0..=ROOM_ROLL_MAX {
            *counts.entry(room_type_for_roll(roll)).or_insert(0u32) += 1;
        }
        assert_eq!(counts[&RoomType::Combat], 60);
        assert_eq!(counts[&RoomType::Elite], 15);
        assert_eq!(counts[&RoomType::Treasure], 10);
        assert_eq!(counts[&RoomType::Shop], 7);
        assert_eq!(counts[&RoomType::Fountain], 9);
        assert!(!counts.contains_key(&RoomType::Boss));
        assert!(!counts.contains_key(&RoomType::MiniBoss));
    }
}
