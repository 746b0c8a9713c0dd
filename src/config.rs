use log::Level;

use crate::scroll_spy::ScanOrder;

/// Added to the scroll offset before looking up the active section, so a
/// section lights up slightly before its top edge reaches the viewport.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn scan_order() -> ScanOrder {
    ScanOrder::LastMatchWins
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn check_layout_on_mount() -> bool {
    true
}

#[cfg(not(debug_assertions))]
pub fn check_layout_on_mount() -> bool {
    false
}
