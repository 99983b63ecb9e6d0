//! Tests for codepoint lookup and name search.

use super::*;
use crate::test_harness::sample_data;

// ===== lookup =====

#[test]
fn lookup_finds_exact_value() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    assert_eq!(index.lookup(0x41), 1);
    assert_eq!(index.lookup(0x1F600), 11);
}

#[test]
fn lookup_below_first_entry_returns_first() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    assert_eq!(index.lookup(0), 0);
}

#[test]
fn lookup_above_last_entry_returns_last() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    assert_eq!(index.lookup(MAX_CODEPOINT), 11);
}

#[test]
fn lookup_picks_numerically_closer_neighbour() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    // 0x44 sits between 0x43 (index 3) and 0x61 (index 4)
    assert_eq!(index.lookup(0x44), 3);
    assert_eq!(index.lookup(0x60), 4);
}

#[test]
fn lookup_tie_favours_lower_entry() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    // 0x52 is 0x0F from both 0x43 and 0x61
    assert_eq!(index.lookup(0x52), 3);
}

// ===== offset =====

#[test]
fn offset_shifts_by_value_not_index() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    // 0x41 + 0x1000 = 0x1041, nearest is 0x3B1 rather than 0x4E00
    assert_eq!(index.offset(1, 0x1000), 9);
}

#[test]
fn offset_clamps_past_the_end() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    assert_eq!(index.offset(11, 0x1000), 11);
}

#[test]
fn offset_clamps_below_zero() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    assert_eq!(index.offset(1, -0x1000), 0);
}

#[test]
fn offset_round_trip_returns_to_snapped_value() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    for i in 0..index.len() {
        let there = index.offset(i, 0x80);
        let back = index.offset(there, -0x80);
        let expected = index.lookup(index.value_at(there).saturating_sub(0x80));
        assert_eq!(back, expected, "round trip from index {i}");
    }
}

// ===== find_name =====

#[test]
fn find_name_moves_forward_from_start() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    assert_eq!(index.find_name("alpha", 0, Direction::Forward), Some(8));
    assert_eq!(index.find_name("alpha", 8, Direction::Forward), Some(9));
}

#[test]
fn find_name_wraps_forward() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    assert_eq!(index.find_name("alpha", 9, Direction::Forward), Some(8));
}

#[test]
fn find_name_wraps_backward() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    assert_eq!(index.find_name("capital", 0, Direction::Backward), Some(8));
}

#[test]
fn find_name_single_match_found_from_any_start_and_direction() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    for start in 0..index.len() {
        for direction in [Direction::Forward, Direction::Backward] {
            assert_eq!(
                index.find_name("grinning", start, direction),
                Some(11),
                "start {start} direction {direction:?}"
            );
        }
    }
}

#[test]
fn find_name_without_match_terminates() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    assert_eq!(index.find_name("no such name", 3, Direction::Forward), None);
    assert_eq!(index.find_name("no such name", 3, Direction::Backward), None);
}

#[test]
fn find_name_is_case_sensitive() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    assert_eq!(index.find_name("GRINNING", 0, Direction::Forward), None);
}

// ===== NameSearch =====

#[test]
fn name_search_without_history_fails() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    let mut search = NameSearch::new();
    assert_eq!(search.find(&index, None, 0, Direction::Forward), None);
    assert_eq!(search.find(&index, Some(""), 0, Direction::Forward), None);
}

#[test]
fn name_search_repeats_last_successful_query() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    let mut search = NameSearch::new();

    assert_eq!(search.find(&index, Some("acute"), 0, Direction::Forward), Some(5));
    assert_eq!(search.last(), Some("acute"));
    assert_eq!(search.find(&index, None, 5, Direction::Forward), Some(7));
    assert_eq!(search.find(&index, Some(""), 7, Direction::Forward), Some(5));
    assert_eq!(search.find(&index, None, 5, Direction::Backward), Some(7));
}

#[test]
fn name_search_failed_query_keeps_previous_history() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    let mut search = NameSearch::new();

    search.find(&index, Some("greek"), 0, Direction::Forward);
    assert_eq!(search.find(&index, Some("klingon"), 0, Direction::Forward), None);
    assert_eq!(search.last(), Some("greek"));
}

// ===== read_hex =====

#[test]
fn read_hex_accepts_plain_and_prefixed_values() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    assert_eq!(index.read_hex("41"), Some(1));
    assert_eq!(index.read_hex("U+41"), Some(1));
    assert_eq!(index.read_hex("1f600"), Some(11));
}

#[test]
fn read_hex_snaps_to_nearest_entry() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    assert_eq!(index.read_hex("10FFFF"), Some(11));
    assert_eq!(index.read_hex("44"), Some(3));
}

#[test]
fn read_hex_rejects_invalid_text() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    assert_eq!(index.read_hex(""), None);
    assert_eq!(index.read_hex("U+"), None);
    assert_eq!(index.read_hex("41x"), None);
    assert_eq!(index.read_hex(" 41"), None);
    assert_eq!(index.read_hex("-1"), None);
    assert_eq!(index.read_hex("110000"), None);
    assert_eq!(index.read_hex("FFFFFFFFFF"), None);
}

// ===== read_single_character =====

#[test]
fn read_single_character_accepts_exactly_one_char() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    assert_eq!(index.read_single_character("A"), Some(1));
    assert_eq!(index.read_single_character("é"), Some(5));
    assert_eq!(index.read_single_character("😀"), Some(11));
}

#[test]
fn read_single_character_rejects_zero_or_many() {
    let data = sample_data();
    let index = CodepointIndex::new(&data);
    assert_eq!(index.read_single_character(""), None);
    assert_eq!(index.read_single_character("AB"), None);
    assert_eq!(index.read_single_character("e\u{301}"), None);
}
