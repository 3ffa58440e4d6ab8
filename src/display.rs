use crate::visibility::{apply_keep_on_top, apply_show_in_taskbar, ViewportCtx};
use crate::win_util::NativeWindow;
use eframe::egui::{self, Color32};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Colors cycled through on every pointer enter, in order.
pub const PALETTE: [Color32; 5] = [
    Color32::from_rgb(90, 139, 238),
    Color32::from_rgb(185, 96, 240),
    Color32::from_rgb(105, 190, 80),
    Color32::from_rgb(204, 172, 90),
    Color32::from_rgb(222, 89, 95),
];

pub const MIN_NUMBER: u32 = 1;
pub const MAX_NUMBER: u32 = 100;

/// Value shown after a pointer enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub number: u32,
    pub color_index: usize,
    pub color: Color32,
}

/// Visible state of the widget's label and the input handlers driving it.
pub struct DisplayController {
    rng: StdRng,
    color_index: Option<usize>,
    text: String,
    color: Color32,
}

impl DisplayController {
    /// Create a controller using randomness from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a controller with a fixed seed (useful for deterministic tests).
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            color_index: None,
            text: String::new(),
            color: PALETTE[0],
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Index into [`PALETTE`] of the current color, `None` before the first event.
    pub fn color_index(&self) -> Option<usize> {
        self.color_index
    }

    fn next_color_index(&mut self) -> usize {
        let next = match self.color_index {
            Some(i) => (i + 1) % PALETTE.len(),
            None => 0,
        };
        self.color_index = Some(next);
        next
    }

    pub fn on_pointer_enter(&mut self) -> Reading {
        let color_index = self.next_color_index();
        let number = self.rng.gen_range(MIN_NUMBER..=MAX_NUMBER);
        self.color = PALETTE[color_index];
        self.text = number.to_string();
        tracing::trace!(number, color_index, "pointer entered");
        Reading {
            number,
            color_index,
            color: self.color,
        }
    }

    /// Start an interactive move for the primary button. Returns whether a
    /// drag was requested.
    pub fn on_pointer_down<C: ViewportCtx + ?Sized>(
        &self,
        ctx: &C,
        button: egui::PointerButton,
    ) -> bool {
        if button != egui::PointerButton::Primary {
            return false;
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
        true
    }

    /// Close the window on Escape. The regular exit path still runs.
    pub fn on_key_down<C: ViewportCtx + ?Sized>(&self, ctx: &C, key: egui::Key) -> bool {
        if key != egui::Key::Escape {
            return false;
        }
        tracing::info!("escape pressed; closing");
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        true
    }

    pub fn on_toggle_keep_on_top<C: ViewportCtx + ?Sized>(&self, ctx: &C, checked: bool) {
        apply_keep_on_top(ctx, checked);
    }

    pub fn on_toggle_show_in_taskbar(&self, window: Option<&dyn NativeWindow>, checked: bool) {
        apply_show_in_taskbar(window, checked);
    }
}

impl Default for DisplayController {
    fn default() -> Self {
        Self::new()
    }
}
