#[cfg(test)]
#[path = "picker_test.rs"]
mod tests;

use crate::domain::models::Catalog;
use crate::domain::models::Entry;
use crate::domain::models::OnPicked;

/// Cursor over an immutable catalog. The catalog is owned here rather than
/// read from module-scoped state so hosts and tests can swap it freely.
pub struct Picker {
    catalog: Catalog,
    position: usize,
}

impl Picker {
    pub fn new(catalog: Catalog) -> Picker {
        return Picker {
            catalog,
            position: 0,
        };
    }

    pub fn catalog(&self) -> &Catalog {
        return &self.catalog;
    }

    pub fn position(&self) -> Option<usize> {
        if self.catalog.is_empty() {
            return None;
        }

        return Some(self.position);
    }

    pub fn selected(&self) -> Option<&Entry> {
        return self.catalog.get(self.position);
    }

    pub fn previous(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn next(&mut self) {
        if self.position + 1 < self.catalog.len() {
            self.position += 1;
        }
    }

    /// Jump the cursor, used by the mouse click path. Out-of-range indexes
    /// are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.catalog.len() {
            return false;
        }

        self.position = index;
        return true;
    }

    /// Invoke the handler with the selected entry's value. Exactly one call
    /// per activation; an empty catalog never fires.
    pub fn activate(&self, on_picked: &mut OnPicked) -> bool {
        if let Some(entry) = self.catalog.get(self.position) {
            on_picked(entry.value.clone());
            return true;
        }

        return false;
    }
}
