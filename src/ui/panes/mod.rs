//! TUI pane rendering modules
//!
//! Each pane is a stateless render function plus the data struct it draws from.
//!
//! # Pane Modules
//!
//! - [`algorithms`]: Algorithm list grouped into sorting and searching
//! - [`bars`]: Bar chart of the current snapshot
//! - [`info`]: Description, complexity bounds and search target
//! - [`status`]: Status bar with step counter, keybindings and playback state

pub mod algorithms;
pub mod bars;
pub mod info;
pub mod status;

// Re-export render functions for convenience
pub use algorithms::render_algorithm_list;
pub use bars::{render_bars_pane, BarsRenderData};
pub use info::{render_info_pane, InfoRenderData, SearchOutcome};
pub use status::{render_status_bar, StatusRenderData};
