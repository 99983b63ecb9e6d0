//! Regression tests: no key sequence or terminal size may panic the view.

use crate::model::UnicodeData;
use crate::test_harness::{shared_sample_data, AcceptanceTestHarness};
use crossterm::event::{KeyCode, KeyModifiers};

const EVERY_COMMAND: &[KeyCode] = &[
    KeyCode::Down,
    KeyCode::Up,
    KeyCode::Right,
    KeyCode::Left,
    KeyCode::Char(' '),
    KeyCode::Backspace,
    KeyCode::PageDown,
    KeyCode::PageUp,
    KeyCode::Char('}'),
    KeyCode::Char('{'),
    KeyCode::Char('['),
    KeyCode::Char(']'),
    KeyCode::Char('n'),
    KeyCode::Char('p'),
    KeyCode::Char('v'),
    KeyCode::Char('x'),
    KeyCode::Char('?'),
    KeyCode::Char('x'),
    KeyCode::Char('j'),
    KeyCode::Down,
    KeyCode::Char('}'),
    KeyCode::Char('?'),
    KeyCode::Char('x'),
    KeyCode::Enter,
    KeyCode::Char('b'),
    KeyCode::Char('{'),
    KeyCode::Esc,
];

/// Press every command, rendering after each key.
fn exercise(harness: &mut AcceptanceTestHarness) {
    for key in EVERY_COMMAND {
        harness.send_key(*key);
        let _ = harness.render_to_string();
    }
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("latin");
    let _ = harness.render_to_string();
    harness.send_key(KeyCode::Enter);
    harness.send_key(KeyCode::Char('u'));
    harness.type_text("10ffff");
    let _ = harness.render_to_string();
    harness.send_key(KeyCode::Enter);
    let _ = harness.render_to_string();
}

#[test]
fn all_commands_on_tiny_terminals() {
    for (width, height) in [(1, 1), (3, 2), (8, 4), (9, 3), (10, 2)] {
        let mut harness =
            AcceptanceTestHarness::with_view(shared_sample_data(), width, height, |_| {});
        exercise(&mut harness);
        assert!(harness.is_running(), "exited at {width}x{height}");
    }
}

#[test]
fn all_commands_on_bundled_data() {
    let data = UnicodeData::bundled().expect("bundled data loads");
    let mut harness = AcceptanceTestHarness::with_view(data, 80, 24, |_| {});
    exercise(&mut harness);
    assert!(harness.is_running());
}

#[test]
fn resize_storm_keeps_view_consistent() {
    let mut harness = AcceptanceTestHarness::sample();
    harness.send_key(KeyCode::Char('['));
    harness.send_key(KeyCode::Char(' '));
    for (width, height) in [(200, 60), (1, 1), (17, 2), (2, 1), (45, 7), (9, 30), (80, 24)] {
        harness.resize(width, height);
        let _ = harness.render_to_string();
        let view = harness.state().view();
        assert!(view.column_count >= 1);
        assert!(view.scroll_index < shared_sample_data().len());
    }
}

#[test]
fn resize_storm_while_typing() {
    let mut harness = AcceptanceTestHarness::sample();
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("combining grave accent");
    for (width, height) in [(30, 5), (2, 2), (1, 1), (120, 40)] {
        harness.resize(width, height);
        let _ = harness.render_to_string();
    }
    harness.send_key_with_mods(KeyCode::Char('u'), KeyModifiers::CONTROL);
    harness.type_text("alpha");
    harness.send_key(KeyCode::Enter);
    assert!(harness.is_running());
}

#[test]
fn held_down_arrow_runs_off_the_end() {
    let mut harness = AcceptanceTestHarness::sample();
    for _ in 0..50 {
        harness.send_key(KeyCode::Down);
    }
    let screen = harness.render_to_string();
    assert!(screen.lines().last().unwrap_or_default().ends_with("1F600]"));
}
