use eframe::egui;
use randomizer::display::{DisplayController, MAX_NUMBER, MIN_NUMBER, PALETTE};

use mock_ctx::MockCtx;

#[test]
fn starts_blank() {
    let display = DisplayController::from_seed(1);
    assert_eq!(display.text(), "");
    assert_eq!(display.color_index(), None);
}

#[test]
fn numbers_stay_in_range() {
    let mut display = DisplayController::from_seed(7);
    for _ in 0..2000 {
        let reading = display.on_pointer_enter();
        assert!((MIN_NUMBER..=MAX_NUMBER).contains(&reading.number));
        assert_eq!(display.text(), reading.number.to_string());
    }
}

#[test]
fn draws_cover_both_bounds() {
    let mut display = DisplayController::from_seed(42);
    let numbers: Vec<u32> = (0..5000).map(|_| display.on_pointer_enter().number).collect();
    assert!(numbers.contains(&MIN_NUMBER));
    assert!(numbers.contains(&MAX_NUMBER));
}

#[test]
fn colors_cycle_through_palette() {
    let mut display = DisplayController::from_seed(3);
    for n in 0..23 {
        let reading = display.on_pointer_enter();
        assert_eq!(reading.color_index, n % PALETTE.len());
        assert_eq!(reading.color, PALETTE[n % PALETTE.len()]);
        assert_eq!(display.color(), reading.color);
        assert_eq!(display.color_index(), Some(reading.color_index));
    }
}

#[test]
fn same_seed_same_numbers() {
    let mut a = DisplayController::from_seed(11);
    let mut b = DisplayController::from_seed(11);
    for _ in 0..50 {
        assert_eq!(a.on_pointer_enter(), b.on_pointer_enter());
    }
}

#[test]
fn primary_press_starts_drag() {
    let ctx = MockCtx::default();
    let display = DisplayController::from_seed(1);

    assert!(display.on_pointer_down(&ctx, egui::PointerButton::Primary));
    assert!(!display.on_pointer_down(&ctx, egui::PointerButton::Secondary));
    assert!(!display.on_pointer_down(&ctx, egui::PointerButton::Middle));

    let cmds = ctx.take_commands();
    assert_eq!(cmds.len(), 1);
    assert!(matches!(cmds[0], egui::ViewportCommand::StartDrag));
}

#[test]
fn escape_closes_window() {
    let ctx = MockCtx::default();
    let display = DisplayController::from_seed(1);

    assert!(!display.on_key_down(&ctx, egui::Key::Enter));
    assert!(ctx.take_commands().is_empty());

    assert!(display.on_key_down(&ctx, egui::Key::Escape));
    let cmds = ctx.take_commands();
    assert_eq!(cmds.len(), 1);
    assert!(matches!(cmds[0], egui::ViewportCommand::Close));
}

#[test]
fn keep_on_top_sets_window_level() {
    let ctx = MockCtx::default();
    let display = DisplayController::from_seed(1);

    display.on_toggle_keep_on_top(&ctx, true);
    display.on_toggle_keep_on_top(&ctx, false);

    let cmds = ctx.take_commands();
    assert_eq!(cmds.len(), 2);
    assert!(matches!(
        cmds[0],
        egui::ViewportCommand::WindowLevel(egui::viewport::WindowLevel::AlwaysOnTop)
    ));
    assert!(matches!(
        cmds[1],
        egui::ViewportCommand::WindowLevel(egui::viewport::WindowLevel::Normal)
    ));
}
