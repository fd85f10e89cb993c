//! Scripted signup-form walkthrough.
//!
//! Drives the engine with a canned interaction sequence instead of a live
//! UI: a few keystrokes into the email field, a blur past the empty name
//! field, a blocked submit, then a clean one. Engine logs land in
//! signup.log.

use std::collections::HashMap;
use std::fs::File;
use std::sync::{Arc, Mutex};

use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use validity::prelude::*;
use validity::rules;

fn signup_page() -> Element {
    Element::group().id("page").child(
        Element::form()
            .id("signup")
            .marker(markers::VALIDATE)
            .child(
                Element::field()
                    .id("name")
                    .name("name")
                    .marker(markers::VALIDATE)
                    .rule("required"),
            )
            .child(
                Element::field()
                    .id("email")
                    .name("email")
                    .marker(markers::VALIDATE)
                    .rules(["required", "email"]),
            )
            .child(
                Element::field()
                    .id("password")
                    .name("password")
                    .marker(markers::VALIDATE)
                    .rules(["required", "password-length"]),
            )
            .child(
                Element::field()
                    .id("referral")
                    .name("referral")
                    .markers([markers::VALIDATE, markers::INACTIVE])
                    .rule("referral-code")
                    .title("Who sent you?")
                    .value("Who sent you?"),
            ),
    )
}

/// Overwrite a field's value, the way a host applies an edit before
/// reporting the keystroke.
fn type_into(page: &mut Element, id: &str, value: &str) {
    if let Some(field) = find_element_mut(page, id) {
        field.value = value.to_string();
    }
}

fn print_form(page: &Element, errors: &Mutex<HashMap<String, String>>) {
    let errors = errors.lock().unwrap();
    for id in ["name", "email", "password", "referral"] {
        let field = find_element(page, id).expect("demo field exists");
        let status = if field.has_marker("error") {
            "✗"
        } else if field.has_marker("ok") {
            "✓"
        } else {
            " "
        };
        let message = errors.get(id).map(String::as_str).unwrap_or("");
        println!("  {status} {:>8}: {:?} {message}", id, field.value);
    }
    println!();
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("signup.log")?;
    WriteLogger::init(LevelFilter::Debug, LogConfig::default(), log_file)
        .expect("Failed to initialize logger");

    let mut page = signup_page();

    // Field status lives in markers; messages go to host-side state the
    // callbacks close over.
    let errors: Arc<Mutex<HashMap<String, String>>> = Arc::new(Mutex::new(HashMap::new()));

    let mut engine = Engine::new();
    let ok_errors = Arc::clone(&errors);
    let err_errors = Arc::clone(&errors);
    engine.configure(
        Config::new()
            .rules([
                ("required", rules::required("This field is required")),
                ("email", rules::email("Please enter a valid email address")),
                ("password-length", rules::min_length(8, "Use at least 8 characters")),
                ("referral-code", rules::positive_number("Referral codes are numeric")),
            ])
            .mark_ok(move |field| {
                field.remove_marker("error");
                field.add_marker("ok");
                ok_errors.lock().unwrap().remove(&field.id);
            })
            .mark_error(move |field, message| {
                field.remove_marker("ok");
                field.add_marker("error");
                err_errors
                    .lock()
                    .unwrap()
                    .insert(field.id.clone(), message.to_string());
            }),
    );

    engine.bind_key_up(&page);
    engine.bind_blur(&page);
    engine.bind_submit(&page);

    println!("Typing a half-finished address stays quiet:");
    type_into(&mut page, "email", "bob@");
    engine.process_events(&mut page, &[Event::key_up("email")]);
    print_form(&page, &errors);

    println!("The keystroke that completes it gets the checkmark:");
    type_into(&mut page, "email", "bob@example.com");
    engine.process_events(&mut page, &[Event::key_up("email")]);
    print_form(&page, &errors);

    println!("Tabbing past the empty name field criticizes immediately:");
    engine.process_events(&mut page, &[Event::blur("name")]);
    print_form(&page, &errors);

    println!("Submitting now is blocked; the referral placeholder survives:");
    let leftover = engine.process_events(&mut page, &[Event::submit("signup")]);
    println!(
        "  native submit proceeds: {}",
        leftover.contains(&Event::submit("signup"))
    );
    print_form(&page, &errors);

    println!("Once validated, the same half-finished address draws the error:");
    type_into(&mut page, "email", "bob@");
    engine.process_events(&mut page, &[Event::key_up("email")]);
    print_form(&page, &errors);

    println!("Fixing everything lets the submit through:");
    type_into(&mut page, "name", "Bob");
    type_into(&mut page, "email", "bob@example.com");
    type_into(&mut page, "password", "correct horse battery");
    let leftover = engine.process_events(
        &mut page,
        &[
            Event::key_up("name"),
            Event::key_up("email"),
            Event::key_up("password"),
            Event::submit("signup"),
        ],
    );
    println!(
        "  native submit proceeds: {}",
        leftover.contains(&Event::submit("signup"))
    );
    print_form(&page, &errors);

    Ok(())
}
