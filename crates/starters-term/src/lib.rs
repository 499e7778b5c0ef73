//! Terminal picker for example chat prompts.
//!
//! Renders a fixed catalog of example prompts as a selectable list and
//! forwards the activated entry's value to a caller-supplied handler. Ships
//! as a library for chat TUIs that want a starter-prompt screen, plus a
//! standalone binary that prints the picked prompt to stdout.

pub mod application;
pub mod configuration;
pub mod domain;

pub use application::ui::{destruct_terminal_for_panic, render_list, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Catalog, Entry, Event, OnPicked};
pub use domain::services::{EventsService, Picker};
