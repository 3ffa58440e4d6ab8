use crate::placement::PlacementRecord;
#[cfg(target_os = "windows")]
use windows::Win32::Foundation::HWND;
#[cfg(target_os = "windows")]
use raw_window_handle::{HasWindowHandle, RawWindowHandle};

/// Native window operations the widget relies on.
///
/// Implemented over a Win32 `HWND` on Windows; tests provide their own
/// recording implementation.
pub trait NativeWindow {
    /// Query the current placement. `None` when the native call fails.
    fn get_placement(&self) -> Option<PlacementRecord>;
    /// Hand `placement` to the OS unchanged. Returns whether the call succeeded.
    fn set_placement(&self, placement: &PlacementRecord) -> bool;
    fn set_show_in_taskbar(&self, show: bool) -> bool;
}

#[cfg(target_os = "windows")]
impl From<PlacementRecord> for windows::Win32::UI::WindowsAndMessaging::WINDOWPLACEMENT {
    fn from(record: PlacementRecord) -> Self {
        use windows::Win32::Foundation::{POINT, RECT};
        use windows::Win32::UI::WindowsAndMessaging::WINDOWPLACEMENT_FLAGS;

        Self {
            length: record.length,
            flags: WINDOWPLACEMENT_FLAGS(record.flags),
            showCmd: record.show_cmd,
            ptMinPosition: POINT {
                x: record.min_position.x,
                y: record.min_position.y,
            },
            ptMaxPosition: POINT {
                x: record.max_position.x,
                y: record.max_position.y,
            },
            rcNormalPosition: RECT {
                left: record.normal_position.left,
                top: record.normal_position.top,
                right: record.normal_position.right,
                bottom: record.normal_position.bottom,
            },
        }
    }
}

#[cfg(target_os = "windows")]
impl From<windows::Win32::UI::WindowsAndMessaging::WINDOWPLACEMENT> for PlacementRecord {
    fn from(wp: windows::Win32::UI::WindowsAndMessaging::WINDOWPLACEMENT) -> Self {
        use crate::placement::{Point, Rect};

        Self {
            length: wp.length,
            flags: wp.flags.0,
            show_cmd: wp.showCmd,
            min_position: Point::new(wp.ptMinPosition.x, wp.ptMinPosition.y),
            max_position: Point::new(wp.ptMaxPosition.x, wp.ptMaxPosition.y),
            normal_position: Rect::new(
                wp.rcNormalPosition.left,
                wp.rcNormalPosition.top,
                wp.rcNormalPosition.right,
                wp.rcNormalPosition.bottom,
            ),
        }
    }
}

#[cfg(target_os = "windows")]
const _: () = assert!(
    std::mem::size_of::<windows::Win32::UI::WindowsAndMessaging::WINDOWPLACEMENT>()
        == std::mem::size_of::<PlacementRecord>()
);

#[cfg(target_os = "windows")]
#[derive(Debug, Clone, Copy)]
pub struct Win32Window {
    hwnd: HWND,
}

#[cfg(target_os = "windows")]
impl Win32Window {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }
}

#[cfg(target_os = "windows")]
impl NativeWindow for Win32Window {
    fn get_placement(&self) -> Option<PlacementRecord> {
        use windows::Win32::UI::WindowsAndMessaging::{GetWindowPlacement, WINDOWPLACEMENT};

        let mut placement = WINDOWPLACEMENT::default();
        placement.length = std::mem::size_of::<WINDOWPLACEMENT>() as u32;
        if unsafe { GetWindowPlacement(self.hwnd, &mut placement) }.is_err() {
            return None;
        }
        Some(placement.into())
    }

    fn set_placement(&self, placement: &PlacementRecord) -> bool {
        use windows::Win32::UI::WindowsAndMessaging::{SetWindowPlacement, WINDOWPLACEMENT};

        let native: WINDOWPLACEMENT = (*placement).into();
        unsafe { SetWindowPlacement(self.hwnd, &native) }.is_ok()
    }

    fn set_show_in_taskbar(&self, show: bool) -> bool {
        use windows::Win32::UI::WindowsAndMessaging::{
            GetWindowLongPtrW, IsWindowVisible, SetWindowLongPtrW, SetWindowPos, ShowWindow,
            GWL_EXSTYLE, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER,
            SW_HIDE, SW_SHOWNA, WS_EX_APPWINDOW, WS_EX_TOOLWINDOW,
        };

        unsafe {
            let style = GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE) as u32;
            let next = if show {
                (style | WS_EX_APPWINDOW.0) & !WS_EX_TOOLWINDOW.0
            } else {
                (style | WS_EX_TOOLWINDOW.0) & !WS_EX_APPWINDOW.0
            };
            if next == style {
                return true;
            }
            // The shell only re-reads the style when the window is shown again.
            let visible = IsWindowVisible(self.hwnd).as_bool();
            if visible {
                let _ = ShowWindow(self.hwnd, SW_HIDE);
            }
            let _ = SetWindowLongPtrW(self.hwnd, GWL_EXSTYLE, next as _);
            let moved = SetWindowPos(
                self.hwnd,
                HWND::default(),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE | SWP_FRAMECHANGED,
            )
            .is_ok();
            if visible {
                let _ = ShowWindow(self.hwnd, SW_SHOWNA);
            }
            moved
        }
    }
}

#[cfg(target_os = "windows")]
pub fn get_hwnd(frame: &eframe::Frame) -> Option<HWND> {
    frame
        .window_handle()
        .ok()
        .and_then(|wh| match wh.as_raw() {
            RawWindowHandle::Win32(handle) => {
                Some(HWND(handle.hwnd.get() as *mut core::ffi::c_void))
            }
            _ => None,
        })
}

/// Native window behind `frame`, if the platform exposes one.
#[cfg(target_os = "windows")]
pub fn native_window(frame: &eframe::Frame) -> Option<Box<dyn NativeWindow>> {
    get_hwnd(frame).map(|hwnd| Box::new(Win32Window::new(hwnd)) as Box<dyn NativeWindow>)
}

#[cfg(not(target_os = "windows"))]
pub fn native_window(_frame: &eframe::Frame) -> Option<Box<dyn NativeWindow>> {
    None
}
