//! Records which elements an engine has attached handlers to.

use std::collections::HashMap;

/// The event kind a binding fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    KeyUp,
    Blur,
    Submit,
}

/// Append-only record of the element ids bound per trigger.
///
/// Binding is not deduplicated: binding the same element twice records two
/// entries, and the engine runs its handler twice per event. Hosts that
/// re-scan a document after adding fields should bind once, up front, or
/// accept the repeat.
#[derive(Debug, Default, Clone)]
pub struct Bindings {
    bound: HashMap<Trigger, Vec<String>>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a binding of `id` on `trigger`.
    pub fn bind(&mut self, trigger: Trigger, id: impl Into<String>) {
        self.bound.entry(trigger).or_default().push(id.into());
    }

    /// All ids bound on `trigger`, in binding order, repeats included.
    pub fn bound(&self, trigger: Trigger) -> &[String] {
        self.bound.get(&trigger).map(Vec::as_slice).unwrap_or(&[])
    }

    /// How many times `id` is bound on `trigger`.
    pub fn count(&self, trigger: Trigger, id: &str) -> usize {
        self.bound(trigger).iter().filter(|b| b.as_str() == id).count()
    }

    /// Total number of recorded bindings across all triggers.
    pub fn len(&self) -> usize {
        self.bound.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
