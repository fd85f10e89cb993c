//! Marker names the engine recognizes on document elements.
//!
//! Markers are plain strings so hosts can mix their own in freely; the
//! engine only ever looks at these three.

/// Opt-in marker. Binding passes pick up fields carrying this marker, and
/// submit interception evaluates forms carrying it.
pub const VALIDATE: &str = "validate";

/// Set by the engine on a field the first time the field is validated.
/// Never removed by the engine; its presence switches keyup handling from
/// approve-only to full validation.
pub const VALIDATED: &str = "validated";

/// Placeholder flag. A `validate` field also carrying this marker gets its
/// value cleared at the start of submit handling, before any rule runs,
/// and restored to its `title` when the submit is blocked. On fields
/// without `validate` the marker means nothing to the engine.
pub const INACTIVE: &str = "inactive";
