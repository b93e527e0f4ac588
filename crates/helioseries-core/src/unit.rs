//! Physical unit tags attached to series axes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named physical unit with an "is time" marker.
///
/// Units are plain value types with equality semantics; the core never
/// interprets the name. The `is_time` flag lets rendering code pick a
/// calendar axis for time-typed quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    /// Unit name as provided by the acquisition source (for example `"nT"`).
    pub name: String,
    /// Whether values carrying this unit are timestamps.
    pub is_time: bool,
}

impl Unit {
    /// A non-time unit with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_time: false,
        }
    }

    /// A time unit with the given name.
    pub fn time(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_time: true,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_compare_by_value() {
        assert_eq!(Unit::new("nT"), Unit::new("nT"));
        assert_ne!(Unit::new("s"), Unit::time("s"));
        assert_eq!(Unit::time("s").to_string(), "s");
        assert!(!Unit::default().is_time);
    }
}
