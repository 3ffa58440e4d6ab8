use crate::placement;
use crate::settings::Settings;
use crate::visibility::{apply_keep_on_top, apply_show_in_taskbar, ViewportCtx};
use crate::win_util::NativeWindow;
use std::path::Path;

/// State of the two menu toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowToggles {
    pub keep_on_top: bool,
    pub show_in_taskbar: bool,
}

impl From<&Settings> for WindowToggles {
    fn from(settings: &Settings) -> Self {
        Self {
            keep_on_top: settings.keep_on_top,
            show_in_taskbar: settings.show_in_taskbar,
        }
    }
}

/// Restore the stored placement and toggles once the native window exists.
///
/// A missing or unreadable placement leaves the window where the toolkit put
/// it.
pub fn restore<C: ViewportCtx + ?Sized>(
    ctx: &C,
    window: Option<&dyn NativeWindow>,
    settings: &Settings,
) -> WindowToggles {
    match (window, placement::decode(settings.main_window_placement.as_deref())) {
        (Some(window), Some(record)) => placement::apply_to_window(window, record),
        (None, Some(_)) => tracing::debug!("no native window; stored placement not applied"),
        (_, None) => tracing::debug!("no stored placement; using default position"),
    }
    let toggles = WindowToggles::from(settings);
    apply_keep_on_top(ctx, toggles.keep_on_top);
    apply_show_in_taskbar(window, toggles.show_in_taskbar);
    toggles
}

/// Copy the current placement and toggles into `settings`.
///
/// If the placement cannot be read the previously stored value is kept.
pub fn capture(window: Option<&dyn NativeWindow>, toggles: WindowToggles, settings: &mut Settings) {
    if let Some(record) = window.and_then(|w| placement::read_from_window(w)) {
        let xml = placement::encode(&record);
        if !xml.is_empty() {
            settings.main_window_placement = Some(xml);
        }
    }
    settings.keep_on_top = toggles.keep_on_top;
    settings.show_in_taskbar = toggles.show_in_taskbar;
}

/// Save `settings`, logging rather than surfacing failures.
pub fn persist(settings: &Settings, path: &Path) {
    match settings.save(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "settings saved"),
        Err(e) => tracing::error!(path = %path.display(), error = %e, "failed to save settings"),
    }
}
