use regex::Regex;
use std::sync::LazyLock;

/// Field names double as capture-group names, so they must be plain identifiers.
pub static FIELD_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Upper bound on any single repetition count accepted in a shape.
pub const MAX_REPEAT: usize = 1000;
