//! Rule registry - named validation predicates.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::outcome::Outcome;
use crate::snapshot::FieldSnapshot;

/// A validation predicate.
///
/// Pure function of a field snapshot. Returns [`Outcome::Ok`] when the field
/// passes, [`Outcome::Failed`] with a human-readable message when it does
/// not, or [`Outcome::Pending`] when the verdict arrives out of band and
/// nothing should be marked yet.
pub type Rule = Arc<dyn Fn(&FieldSnapshot) -> Outcome + Send + Sync>;

/// Registry of validation rules keyed by name.
///
/// Registration merges: registering under an existing name replaces that
/// rule. There is no removal.
#[derive(Default, Clone)]
pub struct RuleRegistry {
    rules: HashMap<String, Rule>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule, replacing any existing rule with the same name.
    pub fn register(&mut self, name: impl Into<String>, rule: Rule) {
        let name = name.into();
        debug!("Registering rule: {name}");
        self.rules.insert(name, rule);
    }

    /// Merge a batch of rules into the registry.
    pub fn register_all<I>(&mut self, rules: I)
    where
        I: IntoIterator<Item = (String, Rule)>,
    {
        for (name, rule) in rules {
            self.register(name, rule);
        }
    }

    /// Look up a rule by name.
    pub fn lookup(&self, name: &str) -> Option<Rule> {
        self.rules.get(name).cloned()
    }

    /// Check whether a rule with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names of all registered rules, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rules.keys().cloned().collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}
