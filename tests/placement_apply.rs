use randomizer::placement::{
    apply_to_window, read_from_window, PlacementRecord, Rect, ShowCmd, PLACEMENT_RECORD_SIZE,
};

use mock_window::MockWindow;

fn stale(show_cmd: u32) -> PlacementRecord {
    PlacementRecord {
        length: 12,
        flags: 7,
        show_cmd,
        normal_position: Rect::new(100, 200, 260, 320),
        ..Default::default()
    }
}

#[test]
fn apply_forces_length_and_flags() {
    let window = MockWindow::default();
    apply_to_window(&window, stale(ShowCmd::Normal.raw()));

    let applied = window.applied();
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].length, PLACEMENT_RECORD_SIZE);
    assert_eq!(applied[0].flags, 0);
    assert_eq!(applied[0].normal_position, Rect::new(100, 200, 260, 320));
}

#[test]
fn apply_never_restores_minimized() {
    let window = MockWindow::default();
    for cmd in [
        ShowCmd::Minimized,
        ShowCmd::Minimize,
        ShowCmd::MinNoActive,
        ShowCmd::ForceMinimize,
    ] {
        apply_to_window(&window, stale(cmd.raw()));
    }
    let applied = window.applied();
    assert_eq!(applied.len(), 4);
    for placement in applied {
        assert_eq!(placement.show_state(), Some(ShowCmd::Normal));
    }
}

#[test]
fn apply_keeps_other_show_states() {
    let window = MockWindow::default();
    apply_to_window(&window, stale(ShowCmd::Maximized.raw()));
    apply_to_window(&window, stale(ShowCmd::Normal.raw()));

    let applied = window.applied();
    assert_eq!(applied[0].show_state(), Some(ShowCmd::Maximized));
    assert_eq!(applied[1].show_state(), Some(ShowCmd::Normal));
}

#[test]
fn apply_failure_is_not_surfaced() {
    let window = MockWindow::failing();
    apply_to_window(&window, stale(ShowCmd::Normal.raw()));
    assert_eq!(window.applied().len(), 1);
}

#[test]
fn read_returns_os_placement_unmodified() {
    let reported = PlacementRecord {
        length: PLACEMENT_RECORD_SIZE,
        flags: 2,
        show_cmd: ShowCmd::Minimized.raw(),
        normal_position: Rect::new(5, 6, 7, 8),
        ..Default::default()
    };
    let window = MockWindow::with_placement(reported);
    assert_eq!(read_from_window(&window), Some(reported));
}

#[test]
fn read_failure_is_none() {
    let window = MockWindow::failing();
    assert_eq!(read_from_window(&window), None);
}
