mod catalog;
mod event;
mod handler;

pub use catalog::Catalog;
pub use catalog::Entry;
pub use event::Event;
pub use handler::OnPicked;
