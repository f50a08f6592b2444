//! Attribute maps and typed views over them

use serde_json::Value;

/// Free-form attributes attached to a node or mark
pub type Attrs = serde_json::Map<String, Value>;

/// A heading level between 1 and 6
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Create a level, rejecting values outside 1..=6
    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(Self(level))
    }

    /// Read a level from an attribute value.
    ///
    /// Editors emit either a number (`2`) or a numeric string (`"2"`).
    pub fn from_value(value: &Value) -> Option<Self> {
        let level = match value {
            Value::Number(n) => n.as_u64()?,
            Value::String(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        Self::new(u8::try_from(level).ok()?)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Look up a string attribute
pub(crate) fn str_attr<'a>(attrs: Option<&'a Attrs>, name: &str) -> Option<&'a str> {
    attrs?.get(name)?.as_str()
}
