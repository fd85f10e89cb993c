//! The validation engine.
//!
//! An [`Engine`] owns a rule registry, an optional pair of marking
//! callbacks, and a record of which elements it is bound to. It never owns
//! the document: every operation takes the host's element tree as an
//! argument, reads markers and values from it, and reports verdicts back
//! through the callbacks.
//!
//! The typical flow is configure, bind, then feed events:
//!
//! ```
//! use validity::prelude::*;
//!
//! let mut page = Element::form()
//!     .id("signup")
//!     .marker(markers::VALIDATE)
//!     .child(
//!         Element::field()
//!             .id("name")
//!             .marker(markers::VALIDATE)
//!             .rule("required"),
//!     );
//!
//! let mut engine = Engine::new();
//! engine.configure(
//!     Config::new()
//!         .rule("required", rules::required("This field is required"))
//!         .mark_error(|field, _| field.add_marker("error")),
//! );
//! engine.bind_submit(&page);
//!
//! // The empty required field blocks the form, so the submit is dropped.
//! let leftover = engine.process_events(&mut page, &[Event::submit("signup")]);
//! assert!(leftover.is_empty());
//! ```

use formdom::{
    fields_in_form, fields_with_marker, find_element, find_element_mut, forms_with_marker, Element,
    Event,
};
use log::debug;

use crate::bindings::{Bindings, Trigger};
use crate::config::{Config, MarkError, MarkOk};
use crate::markers::{INACTIVE, VALIDATE, VALIDATED};
use crate::outcome::Outcome;
use crate::registry::RuleRegistry;
use crate::snapshot::FieldSnapshot;

/// Drives validation for one document tree.
///
/// Construct with [`Engine::new`], apply one or more [`Config`]s, bind the
/// triggers against the current tree, then hand interaction events to
/// [`Engine::process_events`]. The individual operations ([`evaluate`],
/// [`validate`], [`submit`]) are public so hosts with their own event
/// plumbing can drive validation directly.
///
/// [`evaluate`]: Engine::evaluate
/// [`validate`]: Engine::validate
/// [`submit`]: Engine::submit
#[derive(Default)]
pub struct Engine {
    registry: RuleRegistry,
    mark_ok: Option<MarkOk>,
    mark_error: Option<MarkError>,
    bindings: Bindings,
}

impl Engine {
    // ========================================================================
    // Construction & Configuration
    // ========================================================================

    /// Create an engine with no rules, no callbacks, and no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a config.
    ///
    /// Rules merge into the registry, replacing same-named entries.
    /// Callbacks replace the current ones only when the config sets them,
    /// so repeated configures compose: the last config to set a callback
    /// wins, and untouched callbacks survive.
    pub fn configure(&mut self, config: Config) {
        let Config {
            mark_ok,
            mark_error,
            rules,
        } = config;

        if let Some(f) = mark_ok {
            debug!("Installing mark_ok callback");
            self.mark_ok = Some(f);
        }
        if let Some(f) = mark_error {
            debug!("Installing mark_error callback");
            self.mark_error = Some(f);
        }
        self.registry.register_all(rules);
    }

    /// The engine's rule registry.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// The engine's recorded trigger bindings.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    // ========================================================================
    // Trigger Binding
    // ========================================================================
    //
    // Each bind scans the tree once, at call time. Fields added afterwards
    // are not covered until the host binds again, and re-binding appends:
    // an element bound twice gets its handler run twice per event.

    /// Bind the keystroke trigger to every field carrying the `validate`
    /// marker.
    pub fn bind_key_up(&mut self, root: &Element) {
        for id in fields_with_marker(root, VALIDATE) {
            debug!("Binding keyup on field '{id}'");
            self.bindings.bind(Trigger::KeyUp, id);
        }
    }

    /// Bind the focus-loss trigger to every field carrying the `validate`
    /// marker.
    pub fn bind_blur(&mut self, root: &Element) {
        for id in fields_with_marker(root, VALIDATE) {
            debug!("Binding blur on field '{id}'");
            self.bindings.bind(Trigger::Blur, id);
        }
    }

    /// Bind the submit interceptor to every form carrying the `validate`
    /// marker.
    pub fn bind_submit(&mut self, root: &Element) {
        for id in forms_with_marker(root, VALIDATE) {
            debug!("Binding submit interceptor on form '{id}'");
            self.bindings.bind(Trigger::Submit, id);
        }
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Run a field's rules, in declared order, against its current state.
    ///
    /// Stops at the first rule that does not pass and returns its outcome;
    /// a failing rule later in the list is never consulted. Rule names with
    /// no registered predicate are skipped. A field with no rules, or an
    /// unknown field ID, evaluates to [`Outcome::Ok`].
    ///
    /// Evaluation is read-only: no callback fires and no marker changes.
    pub fn evaluate(&self, root: &Element, field_id: &str) -> Outcome {
        let Some(field) = find_element(root, field_id) else {
            debug!("No element '{field_id}' to evaluate");
            return Outcome::Ok;
        };

        let snapshot = FieldSnapshot::from(field);
        for name in &field.rules {
            let Some(rule) = self.registry.lookup(name) else {
                debug!("Skipping unknown rule '{name}' on '{field_id}'");
                continue;
            };
            let outcome = rule(&snapshot);
            if !outcome.is_ok() {
                debug!("Rule '{name}' on '{field_id}': {outcome:?}");
                return outcome;
            }
        }
        Outcome::Ok
    }

    /// Fully validate a field: evaluate it, invoke the matching callback,
    /// and set its `validated` marker.
    ///
    /// A pass invokes `mark_ok`, a failure invokes `mark_error` with the
    /// failing rule's message. An [`Outcome::Pending`] verdict invokes
    /// neither; the rule's own out-of-band work is expected to mark the
    /// field once it resolves. The `validated` marker is set in every case,
    /// pending included.
    pub fn validate(&self, root: &mut Element, field_id: &str) -> Outcome {
        let outcome = self.evaluate(root, field_id);
        match &outcome {
            Outcome::Ok => self.call_mark_ok(root, field_id),
            Outcome::Failed(message) => self.call_mark_error(root, field_id, message),
            Outcome::Pending => {
                debug!("Verdict for '{field_id}' pending, leaving it unmarked");
            }
        }
        if let Some(field) = find_element_mut(root, field_id) {
            field.add_marker(VALIDATED);
        }
        outcome
    }

    /// The keystroke handler: quiet until the field first passes, full
    /// validation ever after.
    ///
    /// While a field has never been validated, a keystroke that still fails
    /// shows nothing; the first keystroke where the field passes marks it
    /// `validated` and invokes `mark_ok`. Once the `validated` marker is
    /// present (set here, by a blur, or by a submit attempt) every
    /// keystroke re-runs full validation and updates the mark.
    fn approve_then_validate(&self, root: &mut Element, field_id: &str) {
        let never_validated = find_element(root, field_id)
            .map(|field| !field.has_marker(VALIDATED))
            .unwrap_or(true);

        if !never_validated {
            self.validate(root, field_id);
            return;
        }

        if self.evaluate(root, field_id).is_ok() {
            if let Some(field) = find_element_mut(root, field_id) {
                field.add_marker(VALIDATED);
            }
            self.call_mark_ok(root, field_id);
        }
    }

    // ========================================================================
    // Submit Interception
    // ========================================================================

    /// Validate a whole form for submission. Returns whether the native
    /// submit may proceed.
    ///
    /// Only fields carrying the `validate` marker inside the form take
    /// part; everything else is left alone. Participating fields that also
    /// carry `inactive` have their values cleared first, so rules see an
    /// empty value instead of placeholder text. Every participating field
    /// is then evaluated; failures invoke `mark_error` per field, and a
    /// pending verdict blocks the submit without invoking anything. All
    /// participating fields come out marked `validated`.
    ///
    /// When anything blocked, the cleared fields get their placeholder
    /// `title` text put back before this returns, since the form stays on
    /// screen. On a clean pass the cleared values stay cleared and the
    /// submit proceeds.
    pub fn submit(&self, root: &mut Element, form_id: &str) -> bool {
        let field_ids = fields_in_form(root, form_id, VALIDATE);

        for id in &field_ids {
            if let Some(field) = find_element_mut(root, id)
                && field.has_marker(INACTIVE)
            {
                debug!("Clearing inactive field '{id}' for submit");
                field.value.clear();
            }
        }

        let mut blockers = 0;
        for id in &field_ids {
            let outcome = self.evaluate(root, id);
            match &outcome {
                Outcome::Ok => {}
                Outcome::Failed(message) => {
                    self.call_mark_error(root, id, message);
                    blockers += 1;
                }
                Outcome::Pending => {
                    debug!("Field '{id}' pending at submit, blocking");
                    blockers += 1;
                }
            }
            if let Some(field) = find_element_mut(root, id) {
                field.add_marker(VALIDATED);
            }
        }

        if blockers == 0 {
            debug!("Form '{form_id}' passed, allowing submit");
            return true;
        }

        debug!("Form '{form_id}' blocked by {blockers} field(s)");
        for id in &field_ids {
            if let Some(field) = find_element_mut(root, id)
                && field.has_marker(INACTIVE)
            {
                field.value = field.title.clone();
            }
        }
        false
    }

    // ========================================================================
    // Event Stream
    // ========================================================================

    /// Run the bound handlers against a batch of events and return the
    /// events the host should still act on.
    ///
    /// Keystrokes and blurs on bound fields run their trigger logic, once
    /// per recorded binding, and pass through for the host's own handling.
    /// A submit on a bound form passes through only when every bound
    /// interceptor allows it; a blocked submit is dropped so the native
    /// submit never happens. Events targeting unbound elements pass
    /// through untouched, in order.
    pub fn process_events(&self, root: &mut Element, events: &[Event]) -> Vec<Event> {
        let mut remaining = Vec::new();

        for event in events {
            match event {
                Event::KeyUp { target: Some(id) } => {
                    for _ in 0..self.bindings.count(Trigger::KeyUp, id) {
                        self.approve_then_validate(root, id);
                    }
                    remaining.push(event.clone());
                }
                Event::Blur { target } => {
                    for _ in 0..self.bindings.count(Trigger::Blur, target) {
                        self.validate(root, target);
                    }
                    remaining.push(event.clone());
                }
                Event::Submit { target } => {
                    let mut allowed = true;
                    for _ in 0..self.bindings.count(Trigger::Submit, target) {
                        if !self.submit(root, target) {
                            allowed = false;
                        }
                    }
                    if allowed {
                        remaining.push(event.clone());
                    }
                }
                Event::KeyUp { target: None } => remaining.push(event.clone()),
            }
        }

        remaining
    }

    // ========================================================================
    // Callback Dispatch
    // ========================================================================

    fn call_mark_ok(&self, root: &mut Element, field_id: &str) {
        if let Some(mark_ok) = &self.mark_ok
            && let Some(field) = find_element_mut(root, field_id)
        {
            debug!("Marking field '{field_id}' ok");
            mark_ok(field);
        }
    }

    fn call_mark_error(&self, root: &mut Element, field_id: &str, message: &str) {
        if let Some(mark_error) = &self.mark_error
            && let Some(field) = find_element_mut(root, field_id)
        {
            debug!("Marking field '{field_id}' error: {message}");
            mark_error(field, message);
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("registry", &self.registry)
            .field("mark_ok", &self.mark_ok.is_some())
            .field("mark_error", &self.mark_error.is_some())
            .field("bindings", &self.bindings)
            .finish()
    }
}
