use super::types::{Enumeration, UnknownValue};

/// Values requested for one query parameter.
///
/// An empty selection means "everything". A single string becomes a
/// one-element selection; it is never split into characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Vec<String>);

impl Selection {
    /// Select the full enumeration
    #[must_use]
    pub fn all() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.0
    }

    /// Validate every value against `E`, preserving the caller's order.
    ///
    /// An empty selection resolves to `E::variants()`. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns the first value that is not part of the enumeration.
    pub fn resolve<E: Enumeration>(&self) -> Result<Vec<E>, UnknownValue> {
        if self.is_all() {
            return Ok(E::variants().to_vec());
        }
        self.0.iter().map(|v| E::parse_value(v)).collect()
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Self::all()
        } else {
            Self(vec![value.to_string()])
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl<T: Into<Selection>> From<Option<T>> for Selection {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::all, Into::into)
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Selection {
    fn from(values: Vec<S>) -> Self {
        Self(values.iter().map(|v| v.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for Selection {
    fn from(values: &[S]) -> Self {
        Self(values.iter().map(|v| v.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Selection {
    fn from(values: [S; N]) -> Self {
        Self(values.iter().map(|v| v.as_ref().to_string()).collect())
    }
}
