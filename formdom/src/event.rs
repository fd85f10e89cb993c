/// Interaction events a host feeds through the validation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keystroke finished editing a field's value. The target is the
    /// focused element, if any.
    KeyUp { target: Option<String> },
    /// A field lost focus.
    Blur { target: String },
    /// A form's native submit was requested.
    Submit { target: String },
}

impl Event {
    /// Keystroke event targeting the given element.
    pub fn key_up(target: impl Into<String>) -> Self {
        Event::KeyUp {
            target: Some(target.into()),
        }
    }

    /// Focus-loss event for the given element.
    pub fn blur(target: impl Into<String>) -> Self {
        Event::Blur {
            target: target.into(),
        }
    }

    /// Submit request for the given form.
    pub fn submit(target: impl Into<String>) -> Self {
        Event::Submit {
            target: target.into(),
        }
    }

    /// The element this event targets, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::KeyUp { target } => target.as_deref(),
            Event::Blur { target } | Event::Submit { target } => Some(target),
        }
    }
}
