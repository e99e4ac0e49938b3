//! Painter Application
//!
//! The application shell: the four editor variants, key bindings, event
//! handling, the session frame loop and the headless command line driver.

mod app;
mod config;
mod error;
mod event_handler;
mod session;
mod shortcuts;
mod variants;

pub use app::{App, Cli, load_events};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use event_handler::{EditorState, EventHandler, NO_PATTERN};
pub use session::{EventSource, Heading, Session};
pub use shortcuts::{Command, Shortcut, ShortcutRegistry};
pub use variants::{Variant, stamp_shapes};
