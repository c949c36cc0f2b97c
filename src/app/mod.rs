//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod manager;
pub mod render_scene;
/// Application State
///
/// Hält Mesh-Manager, Optionen, Darstellung und Undo-History.
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use manager::{EditTarget, FocusState, PatchManager};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, ViewState};
