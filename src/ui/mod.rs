//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus,
//!   token/tree selection
//! - **[`panes`]** — stateless render functions for each visible pane
//!   (source, tokens, tree, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with the source
//! text, its token list, and its structure tree, then call [`App::run`] to
//! start the event loop.  All three inputs are browsed read-only; the UI
//! never mutates the tree.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
