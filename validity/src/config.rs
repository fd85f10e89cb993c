//! Engine configuration - the callback pair and a rule set to merge.

use std::sync::Arc;

use formdom::Element;

use crate::registry::Rule;

/// Callback invoked when a field passes validation.
pub type MarkOk = Arc<dyn Fn(&mut Element) + Send + Sync>;

/// Callback invoked when a field fails validation, with the failing rule's
/// message.
pub type MarkError = Arc<dyn Fn(&mut Element, &str) + Send + Sync>;

/// Configuration applied to an engine by [`Engine::configure`].
///
/// Callbacks are optional: a config that does not set one leaves the
/// engine's current callback untouched, so the last configure to mention a
/// callback wins. Rules always merge into the engine's registry, replacing
/// same-named entries.
///
/// The callbacks receive the field element itself; how a pass or failure is
/// presented is entirely the host's business.
///
/// [`Engine::configure`]: crate::Engine::configure
#[derive(Default, Clone)]
pub struct Config {
    pub(crate) mark_ok: Option<MarkOk>,
    pub(crate) mark_error: Option<MarkError>,
    pub(crate) rules: Vec<(String, Rule)>,
}

impl Config {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pass callback.
    pub fn mark_ok<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Element) + Send + Sync + 'static,
    {
        self.mark_ok = Some(Arc::new(f));
        self
    }

    /// Set the failure callback.
    pub fn mark_error<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Element, &str) + Send + Sync + 'static,
    {
        self.mark_error = Some(Arc::new(f));
        self
    }

    /// Add a rule to merge into the engine's registry.
    pub fn rule(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.rules.push((name.into(), rule));
        self
    }

    /// Add several rules to merge into the engine's registry.
    pub fn rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = (S, Rule)>,
        S: Into<String>,
    {
        self.rules
            .extend(rules.into_iter().map(|(name, rule)| (name.into(), rule)));
        self
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule_names: Vec<&str> = self.rules.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("Config")
            .field("mark_ok", &self.mark_ok.is_some())
            .field("mark_error", &self.mark_error.is_some())
            .field("rules", &rule_names)
            .finish()
    }
}
