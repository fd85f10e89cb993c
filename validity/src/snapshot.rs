//! Field snapshot handed to rule predicates.

use formdom::Element;

/// Immutable view of a field at evaluation time.
///
/// Rules are pure functions of this view; they never touch the live tree.
/// The engine rebuilds the snapshot on every evaluation, so a predicate
/// always sees the field's current value.
#[derive(Debug, Clone, Default)]
pub struct FieldSnapshot {
    /// Element ID.
    pub id: String,
    /// Submission name, if the host assigned one.
    pub name: Option<String>,
    /// Current value.
    pub value: String,
    /// Placeholder-restore text.
    pub title: String,
    /// Ordered marker tags.
    pub markers: Vec<String>,
}

impl FieldSnapshot {
    /// Check whether a marker is present.
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }
}

impl From<&Element> for FieldSnapshot {
    fn from(el: &Element) -> Self {
        Self {
            id: el.id.clone(),
            name: el.name.clone(),
            value: el.value.clone(),
            title: el.title.clone(),
            markers: el.markers.clone(),
        }
    }
}
