pub mod element;
pub mod event;
pub mod query;

pub use element::{find_element, find_element_mut, Element, Tag};
pub use event::Event;
pub use query::{fields_in_form, fields_with_marker, forms_with_marker};
