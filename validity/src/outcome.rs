/// Result of evaluating a field's rules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Every rule passed.
    #[default]
    Ok,
    /// A rule failed, with the host-supplied message to display.
    Failed(String),
    /// A rule deferred to an out-of-band check; nothing is marked now.
    Pending,
}

impl Outcome {
    /// Check if the field passed.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok)
    }

    /// Check if a rule failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Check if the verdict is still pending out of band.
    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }

    /// Check if this outcome blocks a submit. Both failures and pending
    /// verdicts do: a form never submits on an unresolved check.
    pub fn blocks_submit(&self) -> bool {
        !self.is_ok()
    }

    /// Get the failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
