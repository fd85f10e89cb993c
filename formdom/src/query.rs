//! Marker-based selection over the element tree.
//!
//! All collection functions walk the tree in pre-order, so results come back
//! in document order.

use crate::element::{find_element, Element, Tag};

/// Collect the IDs of all fields carrying the given marker.
pub fn fields_with_marker(root: &Element, marker: &str) -> Vec<String> {
    let mut ids = Vec::new();
    collect_with_marker(root, Tag::Field, marker, &mut ids);
    ids
}

/// Collect the IDs of all forms carrying the given marker.
pub fn forms_with_marker(root: &Element, marker: &str) -> Vec<String> {
    let mut ids = Vec::new();
    collect_with_marker(root, Tag::Form, marker, &mut ids);
    ids
}

/// Collect the IDs of fields carrying the given marker inside a form.
/// Returns an empty list when the form ID is unknown.
pub fn fields_in_form(root: &Element, form_id: &str, marker: &str) -> Vec<String> {
    match find_element(root, form_id) {
        Some(form) => fields_with_marker(form, marker),
        None => Vec::new(),
    }
}

fn collect_with_marker(el: &Element, tag: Tag, marker: &str, out: &mut Vec<String>) {
    if el.tag == tag && el.has_marker(marker) {
        out.push(el.id.clone());
    }

    for child in &el.children {
        collect_with_marker(child, tag, marker, out);
    }
}
