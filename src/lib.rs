pub mod display;
pub mod gui;
pub mod lifecycle;
pub mod logging;
pub mod placement;
pub mod settings;
pub mod visibility;
pub mod win_util;
