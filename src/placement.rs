use crate::win_util::NativeWindow;
use serde::{Deserialize, Serialize};

/// Size in bytes of the native `WINDOWPLACEMENT` structure.
pub const PLACEMENT_RECORD_SIZE: u32 = std::mem::size_of::<PlacementRecord>() as u32;

const _: () = assert!(std::mem::size_of::<PlacementRecord>() == 44);

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    #[serde(rename = "X")]
    pub x: i32,
    #[serde(rename = "Y")]
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    #[serde(rename = "Left")]
    pub left: i32,
    #[serde(rename = "Top")]
    pub top: i32,
    #[serde(rename = "Right")]
    pub right: i32,
    #[serde(rename = "Bottom")]
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Position, size and show state of a top-level window.
///
/// The layout mirrors the Win32 `WINDOWPLACEMENT` structure field for field
/// so the record can be handed to `GetWindowPlacement`/`SetWindowPlacement`
/// by reference. The XML element names match the ones used by the settings
/// file.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "WINDOWPLACEMENT")]
pub struct PlacementRecord {
    pub length: u32,
    pub flags: u32,
    #[serde(rename = "showCmd")]
    pub show_cmd: u32,
    #[serde(rename = "minPosition")]
    pub min_position: Point,
    #[serde(rename = "maxPosition")]
    pub max_position: Point,
    #[serde(rename = "normalPosition")]
    pub normal_position: Rect,
}

/// Window show state as reported in [`PlacementRecord::show_cmd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowCmd {
    Hide,
    Normal,
    Minimized,
    Maximized,
    NoActivate,
    Show,
    Minimize,
    MinNoActive,
    ShowNa,
    Restore,
    Default,
    ForceMinimize,
}

impl ShowCmd {
    pub fn from_raw(value: u32) -> Option<Self> {
        Some(match value {
            0 => ShowCmd::Hide,
            1 => ShowCmd::Normal,
            2 => ShowCmd::Minimized,
            3 => ShowCmd::Maximized,
            4 => ShowCmd::NoActivate,
            5 => ShowCmd::Show,
            6 => ShowCmd::Minimize,
            7 => ShowCmd::MinNoActive,
            8 => ShowCmd::ShowNa,
            9 => ShowCmd::Restore,
            10 => ShowCmd::Default,
            11 => ShowCmd::ForceMinimize,
            _ => return None,
        })
    }

    pub fn raw(self) -> u32 {
        match self {
            ShowCmd::Hide => 0,
            ShowCmd::Normal => 1,
            ShowCmd::Minimized => 2,
            ShowCmd::Maximized => 3,
            ShowCmd::NoActivate => 4,
            ShowCmd::Show => 5,
            ShowCmd::Minimize => 6,
            ShowCmd::MinNoActive => 7,
            ShowCmd::ShowNa => 8,
            ShowCmd::Restore => 9,
            ShowCmd::Default => 10,
            ShowCmd::ForceMinimize => 11,
        }
    }

    pub fn is_minimized(self) -> bool {
        matches!(
            self,
            ShowCmd::Minimized | ShowCmd::Minimize | ShowCmd::MinNoActive | ShowCmd::ForceMinimize
        )
    }
}

impl PlacementRecord {
    pub fn show_state(&self) -> Option<ShowCmd> {
        ShowCmd::from_raw(self.show_cmd)
    }

    /// Prepare a record for `SetWindowPlacement`.
    ///
    /// `length` and `flags` are overwritten regardless of what was decoded and
    /// any minimized state is restored as normal.
    pub fn sanitized(mut self) -> Self {
        self.length = PLACEMENT_RECORD_SIZE;
        self.flags = 0;
        if self.show_state().map(ShowCmd::is_minimized).unwrap_or(false) {
            self.show_cmd = ShowCmd::Normal.raw();
        }
        self
    }
}

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Parse a stored placement string.
///
/// Absent, blank or malformed text all mean "no placement".
pub fn decode(text: Option<&str>) -> Option<PlacementRecord> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }
    match quick_xml::de::from_str::<PlacementRecord>(text) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring unreadable window placement");
            None
        }
    }
}

pub fn encode(record: &PlacementRecord) -> String {
    match quick_xml::se::to_string(record) {
        Ok(body) => format!("{XML_DECLARATION}{body}"),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize window placement");
            String::new()
        }
    }
}

/// Restore `record` on `window` after sanitizing it.
///
/// The outcome of the native call is logged but not reported.
pub fn apply_to_window(window: &dyn NativeWindow, record: PlacementRecord) {
    let placement = record.sanitized();
    tracing::debug!(
        show_cmd = placement.show_cmd,
        left = placement.normal_position.left,
        top = placement.normal_position.top,
        right = placement.normal_position.right,
        bottom = placement.normal_position.bottom,
        "applying window placement"
    );
    if !window.set_placement(&placement) {
        tracing::warn!("SetWindowPlacement failed; keeping default position");
    }
}

/// Current placement as reported by the OS, or `None` if the query failed.
pub fn read_from_window(window: &dyn NativeWindow) -> Option<PlacementRecord> {
    let placement = window.get_placement();
    if placement.is_none() {
        tracing::warn!("GetWindowPlacement failed");
    }
    placement
}
