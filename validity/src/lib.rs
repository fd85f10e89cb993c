pub mod bindings;
pub mod config;
pub mod engine;
pub mod markers;
pub mod outcome;
pub mod registry;
pub mod rules;
pub mod snapshot;

pub use bindings::{Bindings, Trigger};
pub use config::{Config, MarkError, MarkOk};
pub use engine::Engine;
pub use outcome::Outcome;
pub use registry::{Rule, RuleRegistry};
pub use rules::RuleError;
pub use snapshot::FieldSnapshot;

pub mod prelude {
    pub use crate::bindings::Trigger;
    pub use crate::config::Config;
    pub use crate::engine::Engine;
    pub use crate::markers;
    pub use crate::outcome::Outcome;
    pub use crate::registry::{Rule, RuleRegistry};
    pub use crate::rules;
    pub use crate::snapshot::FieldSnapshot;

    pub use formdom::{find_element, find_element_mut, Element, Event};
}
