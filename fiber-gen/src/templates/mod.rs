//! Embedded template store and placeholder substitution

use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::GenerateError;

pub mod files;
pub use files::*;

/// Token replaced with the project name in every template
pub const PLACEHOLDER: &str = "{AppName}";

/// Read-only store of template contents keyed by identifier
///
/// Identifiers are slash-separated logical paths such as `go/app.go`.
/// The store is built once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    entries: HashMap<String, Cow<'static, str>>,
}

impl TemplateStore {
    /// Store holding every template compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        EMBEDDED.iter().copied().collect()
    }

    /// Look up the content registered for `id`
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::TemplateNotFound`] if `id` is not in the store.
    pub fn resolve(&self, id: &str) -> Result<&str, GenerateError> {
        self.entries
            .get(id)
            .map(AsRef::as_ref)
            .ok_or_else(|| GenerateError::TemplateNotFound { id: id.to_string() })
    }

    /// Whether `id` is registered
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of registered templates
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TemplateStore
where
    K: Into<String>,
    V: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(id, content)| (id.into(), content.into()))
                .collect(),
        }
    }
}

/// Replace every occurrence of `token` in `content` with `value`
///
/// Occurrences are matched left to right without overlap, and the inserted
/// `value` is never scanned again. An empty `token` matches nothing.
#[must_use]
pub fn substitute(content: &str, token: &str, value: &str) -> String {
    if token.is_empty() {
        return content.to_string();
    }
    content.replace(token, value)
}
