//! Widgets shared by every tab.

pub mod status_bar;
pub mod tab_bar;
