//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, search target input mode
//! - **[`panes`]**: stateless render functions for each visible pane (algorithm
//!   list, bar chart, info, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Visualizer`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Visualizer`]: crate::playback::Visualizer
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
