//! Canonical display form for list items and table cells.

use std::fmt;

/// A value ready for display: either text or the empty sentinel.
///
/// Callers convert their data into a `Value` before it reaches the block
/// model, so the renderer only ever deals with strings. `None` (and
/// anything converted from `Option::None`) renders as an empty string.
///
/// # Examples
///
/// ```
/// use simdoc::Value;
///
/// assert_eq!(Value::from("x").as_str(), "x");
/// assert_eq!(Value::from(42).as_str(), "42");
/// assert!(Value::from(None::<&str>).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Value(Option<String>);

impl Value {
    /// The empty sentinel.
    pub const EMPTY: Value = Value(None);

    /// Create a text value.
    pub fn text(text: impl Into<String>) -> Self {
        Self(Some(text.into()))
    }

    /// Returns true for the empty sentinel.
    ///
    /// An empty string is still text; only absent values are empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Display text, `""` for the empty sentinel.
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self(Some(text))
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Self::text(text.as_str())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self(Some(value.to_string()))
                }
            }
        )*
    };
}

impl_from_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentinel() {
        assert!(Value::EMPTY.is_empty());
        assert_eq!(Value::EMPTY.as_str(), "");
        assert_eq!(Value::default(), Value::EMPTY);
    }

    #[test]
    fn test_empty_string_is_text() {
        let value = Value::from("");
        assert!(!value.is_empty());
        assert_eq!(value.as_str(), "");
    }

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Value::from(3).as_str(), "3");
        assert_eq!(Value::from(1.5).as_str(), "1.5");
        assert_eq!(Value::from(true).as_str(), "true");
        assert_eq!(Value::from('x').as_str(), "x");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(Some("a")), Value::text("a"));
        assert_eq!(Value::from(None::<i32>), Value::EMPTY);
    }
}
