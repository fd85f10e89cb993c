use std::sync::{Arc, Mutex};

use formdom::{find_element_mut, Element, Event};
use validity::{markers, rules, Bindings, Config, Engine, Trigger};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mark {
    Ok(String),
    Error(String, String),
}

fn recording_engine() -> (Engine, Arc<Mutex<Vec<Mark>>>) {
    let marks: Arc<Mutex<Vec<Mark>>> = Arc::new(Mutex::new(Vec::new()));
    let ok_marks = Arc::clone(&marks);
    let err_marks = Arc::clone(&marks);

    let mut engine = Engine::new();
    engine.configure(
        Config::new()
            .rule("required", rules::required("This field is required"))
            .mark_ok(move |field| {
                ok_marks.lock().unwrap().push(Mark::Ok(field.id.clone()));
            })
            .mark_error(move |field, message| {
                err_marks
                    .lock()
                    .unwrap()
                    .push(Mark::Error(field.id.clone(), message.to_string()));
            }),
    );
    (engine, marks)
}

fn recorded(marks: &Mutex<Vec<Mark>>) -> Vec<Mark> {
    marks.lock().unwrap().clone()
}

// ============================================================================
// Binding Records
// ============================================================================

#[test]
fn test_bindings_record_ids_per_trigger() {
    let mut bindings = Bindings::new();
    assert!(bindings.is_empty());

    bindings.bind(Trigger::KeyUp, "name");
    bindings.bind(Trigger::Blur, "name");
    bindings.bind(Trigger::KeyUp, "email");

    assert_eq!(bindings.bound(Trigger::KeyUp), vec!["name", "email"]);
    assert_eq!(bindings.bound(Trigger::Blur), vec!["name"]);
    assert!(bindings.bound(Trigger::Submit).is_empty());
    assert_eq!(bindings.len(), 3);
}

#[test]
fn test_bindings_keep_repeats() {
    let mut bindings = Bindings::new();
    bindings.bind(Trigger::KeyUp, "name");
    bindings.bind(Trigger::KeyUp, "name");

    assert_eq!(bindings.count(Trigger::KeyUp, "name"), 2);
    assert_eq!(bindings.count(Trigger::Blur, "name"), 0);
    assert_eq!(bindings.count(Trigger::KeyUp, "email"), 0);
}

// ============================================================================
// Tree Scanning
// ============================================================================

#[test]
fn test_binds_only_marked_elements_of_the_right_kind() {
    let page = Element::group()
        .id("page")
        .child(
            Element::form()
                .id("signup")
                .marker(markers::VALIDATE)
                .child(Element::field().id("name").marker(markers::VALIDATE))
                .child(Element::field().id("nickname")),
        )
        .child(Element::form().id("search"));

    let (mut engine, _marks) = recording_engine();
    engine.bind_key_up(&page);
    engine.bind_blur(&page);
    engine.bind_submit(&page);

    // Field triggers attach to marked fields only; the marked form is not
    // a keyup target, and the unmarked form gets no interceptor.
    assert_eq!(engine.bindings().bound(Trigger::KeyUp), vec!["name"]);
    assert_eq!(engine.bindings().bound(Trigger::Blur), vec!["name"]);
    assert_eq!(engine.bindings().bound(Trigger::Submit), vec!["signup"]);
}

#[test]
fn test_fields_added_later_need_rebinding() {
    let (mut engine, marks) = recording_engine();
    let mut page = Element::form()
        .id("signup")
        .marker(markers::VALIDATE)
        .child(
            Element::field()
                .id("name")
                .marker(markers::VALIDATE)
                .rule("required")
                .value("Bob"),
        );
    engine.bind_blur(&page);

    // The host grows the form after binding.
    page.children.push(
        Element::field()
            .id("email")
            .marker(markers::VALIDATE)
            .rule("required")
            .value("bob@example.com"),
    );

    // The new field is invisible to the engine until the next scan.
    engine.process_events(&mut page, &[Event::blur("email")]);
    assert!(recorded(&marks).is_empty());

    engine.bind_blur(&page);
    engine.process_events(&mut page, &[Event::blur("email")]);
    assert_eq!(recorded(&marks), vec![Mark::Ok("email".to_string())]);
}

// ============================================================================
// Duplicate Bindings
// ============================================================================

#[test]
fn test_rebinding_runs_handlers_twice() {
    let (mut engine, marks) = recording_engine();
    let mut page = Element::form()
        .id("signup")
        .marker(markers::VALIDATE)
        .child(
            Element::field()
                .id("name")
                .marker(markers::VALIDATE)
                .rule("required"),
        );

    // Re-scanning appends rather than replacing, so the field is now bound
    // twice and one blur draws two marks.
    engine.bind_blur(&page);
    engine.bind_blur(&page);
    assert_eq!(engine.bindings().count(Trigger::Blur, "name"), 2);

    engine.process_events(&mut page, &[Event::blur("name")]);
    assert_eq!(recorded(&marks).len(), 2);
}

#[test]
fn test_duplicate_submit_interceptors_still_gate_the_event_once() {
    let (mut engine, marks) = recording_engine();
    let mut page = Element::form()
        .id("signup")
        .marker(markers::VALIDATE)
        .child(
            Element::field()
                .id("name")
                .marker(markers::VALIDATE)
                .rule("required"),
        );
    engine.bind_submit(&page);
    engine.bind_submit(&page);

    // Both interceptors run and both report the failure, but the submit
    // event itself is simply dropped.
    let remaining = engine.process_events(&mut page, &[Event::submit("signup")]);
    assert!(remaining.is_empty());
    assert_eq!(recorded(&marks).len(), 2);

    // Once the form passes, the event still comes through exactly once.
    if let Some(name) = find_element_mut(&mut page, "name") {
        name.value = "Bob".to_string();
    }
    let remaining = engine.process_events(&mut page, &[Event::submit("signup")]);
    assert_eq!(remaining, vec![Event::submit("signup")]);
}
