use formdom::{fields_in_form, fields_with_marker, forms_with_marker, Element};

fn survey_page() -> Element {
    Element::group()
        .id("page")
        .child(
            Element::form()
                .id("profile")
                .marker("validate")
                .child(Element::field().id("name").marker("validate"))
                .child(Element::field().id("nickname"))
                .child(
                    Element::group()
                        .id("contact-row")
                        .child(Element::field().id("email").marker("validate")),
                ),
        )
        .child(
            Element::form()
                .id("search")
                .child(Element::field().id("query").marker("validate")),
        )
        .child(Element::field().id("stray").marker("validate"))
}

// ============================================================================
// Marker Selection
// ============================================================================

#[test]
fn test_fields_with_marker_in_document_order() {
    let page = survey_page();

    assert_eq!(
        fields_with_marker(&page, "validate"),
        vec!["name", "email", "query", "stray"]
    );
}

#[test]
fn test_fields_without_marker_are_skipped() {
    let page = survey_page();

    let ids = fields_with_marker(&page, "validate");
    assert!(!ids.contains(&"nickname".to_string()));
}

#[test]
fn test_forms_with_marker_ignores_fields() {
    let page = survey_page();

    // Only the "profile" form carries the marker; "search" and the marked
    // fields do not count.
    assert_eq!(forms_with_marker(&page, "validate"), vec!["profile"]);
}

#[test]
fn test_no_matches_yields_empty() {
    let page = survey_page();

    assert!(fields_with_marker(&page, "nonexistent").is_empty());
    assert!(forms_with_marker(&page, "nonexistent").is_empty());
}

// ============================================================================
// Form Scoping
// ============================================================================

#[test]
fn test_fields_in_form_scopes_to_subtree() {
    let page = survey_page();

    // Fields in other forms and stray fields outside the form are excluded.
    assert_eq!(
        fields_in_form(&page, "profile", "validate"),
        vec!["name", "email"]
    );
    assert_eq!(fields_in_form(&page, "search", "validate"), vec!["query"]);
}

#[test]
fn test_fields_in_unknown_form_is_empty() {
    let page = survey_page();

    assert!(fields_in_form(&page, "missing", "validate").is_empty());
}

#[test]
fn test_fields_in_nested_form_are_included() {
    // A form inside a form contributes its fields to the outer form's scan,
    // matching descendant selection.
    let page = Element::form()
        .id("outer")
        .child(Element::field().id("a").marker("validate"))
        .child(
            Element::form()
                .id("inner")
                .child(Element::field().id("b").marker("validate")),
        );

    assert_eq!(fields_in_form(&page, "outer", "validate"), vec!["a", "b"]);
}
