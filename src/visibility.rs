use crate::win_util::NativeWindow;
use eframe::egui;

/// Abstraction over an egui context that can receive viewport commands.
pub trait ViewportCtx {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand);
    fn request_repaint(&self);
}

impl ViewportCtx for egui::Context {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        egui::Context::send_viewport_cmd(self, cmd);
    }

    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

/// Window level matching the "keep on top" toggle.
pub fn window_level(keep_on_top: bool) -> egui::viewport::WindowLevel {
    if keep_on_top {
        egui::viewport::WindowLevel::AlwaysOnTop
    } else {
        egui::viewport::WindowLevel::Normal
    }
}

pub fn apply_keep_on_top<C: ViewportCtx + ?Sized>(ctx: &C, keep_on_top: bool) {
    tracing::debug!(keep_on_top, "updating window level");
    ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(window_level(keep_on_top)));
    ctx.request_repaint();
}

/// Show or hide the taskbar entry.
///
/// Without a native window there is nothing to change and the call is a no-op.
pub fn apply_show_in_taskbar(window: Option<&dyn NativeWindow>, show: bool) {
    let Some(window) = window else {
        tracing::debug!(show, "no native window; taskbar visibility unchanged");
        return;
    };
    tracing::debug!(show, "updating taskbar visibility");
    if !window.set_show_in_taskbar(show) {
        tracing::warn!(show, "failed to update taskbar visibility");
    }
}
