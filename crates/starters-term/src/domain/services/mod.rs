mod events;
mod picker;

pub use events::EventsService;
pub use picker::Picker;
