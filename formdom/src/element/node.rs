use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// What kind of document node an element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// A single input field.
    Field,
    /// A submission unit containing fields.
    Form,
    /// A plain container with no form semantics.
    Group,
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Form data (meaningful for fields)
    /// Current input value.
    pub value: String,
    /// Placeholder-restore text. An inactive field displays this text as its
    /// value until the user enters real content.
    pub title: String,
    /// Submission name, if the host assigns one.
    pub name: Option<String>,

    // Validation wiring
    /// Ordered marker tags. Markers opt elements into behavior (`validate`)
    /// and record status (`validated`, `inactive`); the set is ordered and
    /// duplicate-free.
    pub markers: Vec<String>,
    /// Ordered rule names. Rules are resolved against a registry and
    /// evaluated in this declared order.
    pub rules: Vec<String>,

    // Tree
    pub children: Vec<Element>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Group,
            value: String::new(),
            title: String::new(),
            name: None,
            markers: Vec::new(),
            rules: Vec::new(),
            children: Vec::new(),
        }
    }
}

impl Element {
    /// Create an input field.
    pub fn field() -> Self {
        Self {
            id: generate_id("field"),
            tag: Tag::Field,
            ..Default::default()
        }
    }

    /// Create a form.
    pub fn form() -> Self {
        Self {
            id: generate_id("form"),
            tag: Tag::Form,
            ..Default::default()
        }
    }

    /// Create a plain container.
    pub fn group() -> Self {
        Self {
            id: generate_id("group"),
            tag: Tag::Group,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Form data
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    // Markers
    /// Attach a marker tag.
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.add_marker(marker);
        self
    }

    /// Attach several marker tags in order.
    pub fn markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for marker in markers {
            self.add_marker(marker);
        }
        self
    }

    // Rules
    /// Declare a rule name to evaluate against this element.
    pub fn rule(mut self, name: impl Into<String>) -> Self {
        self.rules.push(name.into());
        self
    }

    /// Declare several rule names, evaluated in the given order.
    pub fn rules<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.extend(names.into_iter().map(Into::into));
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(new_children);
        self
    }

    // Marker access
    /// Check whether a marker is present.
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    /// Add a marker if not already present. Order of first addition is kept.
    pub fn add_marker(&mut self, marker: impl Into<String>) {
        let marker = marker.into();
        if !self.has_marker(&marker) {
            self.markers.push(marker);
        }
    }

    /// Remove a marker if present.
    pub fn remove_marker(&mut self, marker: &str) {
        self.markers.retain(|m| m != marker);
    }
}
