//! Message configuration for the async bridging helper
//! ([`Notifier::promise`](crate::notifier::Notifier::promise)).

use std::fmt;

/// A toast message that is either a fixed string or derived from the settled
/// value at settle time.
///
/// The derived form receives a reference to the resolved value (or the error,
/// for the failure message) and produces the text to display. Resolution
/// happens when the wrapped operation settles, never at request time.
///
/// `&str` and `String` convert into the literal form:
///
/// ```rust,ignore
/// use crouton_core::promise::TextSpec;
///
/// let fixed: TextSpec<u32> = "Done".into();
/// let derived = TextSpec::derived(|n: &u32| format!("Got {n}"));
/// ```
pub enum TextSpec<V> {
    /// A fixed message.
    Literal(String),
    /// A message computed from the settled value.
    Derived(Box<dyn Fn(&V) -> String + Send + Sync>),
}

impl<V> TextSpec<V> {
    /// Create a derived message.
    pub fn derived(f: impl Fn(&V) -> String + Send + Sync + 'static) -> Self {
        TextSpec::Derived(Box::new(f))
    }

    /// Resolve the message against the settled value.
    pub fn resolve(&self, value: &V) -> String {
        match self {
            TextSpec::Literal(text) => text.clone(),
            TextSpec::Derived(f) => f(value),
        }
    }
}

impl<V> From<&str> for TextSpec<V> {
    fn from(text: &str) -> Self {
        TextSpec::Literal(text.to_owned())
    }
}

impl<V> From<String> for TextSpec<V> {
    fn from(text: String) -> Self {
        TextSpec::Literal(text)
    }
}

impl<V> fmt::Debug for TextSpec<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSpec::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            TextSpec::Derived(_) => f.debug_tuple("Derived").field(&"<fn>").finish(),
        }
    }
}

/// The three messages shown across a wrapped operation's lifetime: a loading
/// toast while it is in flight, then a success or error toast once it
/// settles.
///
/// All fields have defaults, so `PromiseMessages::default()` works for the
/// fire-and-forget case, and the builder methods override individual entries:
///
/// ```rust,ignore
/// use crouton_core::promise::{PromiseMessages, TextSpec};
///
/// let messages = PromiseMessages::<u32, String>::default()
///     .loading("Uploading...")
///     .success(TextSpec::derived(|n| format!("Uploaded {n} files")))
///     .error("Upload failed");
/// ```
#[derive(Debug)]
pub struct PromiseMessages<T, E> {
    /// Shown immediately, as a manual-dismiss info toast.
    pub loading: String,
    /// Shown when the operation resolves.
    pub success: TextSpec<T>,
    /// Shown when the operation fails.
    pub error: TextSpec<E>,
}

impl<T, E> Default for PromiseMessages<T, E> {
    fn default() -> Self {
        Self {
            loading: "Procesando...".to_owned(),
            success: TextSpec::Literal("\u{a1}Completado!".to_owned()),
            error: TextSpec::Literal("Error".to_owned()),
        }
    }
}

impl<T, E> PromiseMessages<T, E> {
    /// Override the loading message.
    pub fn loading(mut self, text: impl Into<String>) -> Self {
        self.loading = text.into();
        self
    }

    /// Override the success message.
    pub fn success(mut self, spec: impl Into<TextSpec<T>>) -> Self {
        self.success = spec.into();
        self
    }

    /// Override the error message.
    pub fn error(mut self, spec: impl Into<TextSpec<E>>) -> Self {
        self.error = spec.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_ignores_the_value() {
        let spec: TextSpec<u32> = "fixed".into();
        assert_eq!(spec.resolve(&1), "fixed");
        assert_eq!(spec.resolve(&99), "fixed");
    }

    #[test]
    fn derived_sees_the_value() {
        let spec = TextSpec::derived(|n: &u32| format!("Got {n}"));
        assert_eq!(spec.resolve(&42), "Got 42");
    }

    #[test]
    fn defaults_match_policy() {
        let messages = PromiseMessages::<(), ()>::default();
        assert_eq!(messages.loading, "Procesando...");
        assert_eq!(messages.success.resolve(&()), "¡Completado!");
        assert_eq!(messages.error.resolve(&()), "Error");
    }

    #[test]
    fn builder_overrides_entries() {
        let messages = PromiseMessages::<u32, String>::default()
            .loading("wait")
            .success(TextSpec::derived(|n| format!("{n} ok")))
            .error("nope");
        assert_eq!(messages.loading, "wait");
        assert_eq!(messages.success.resolve(&3), "3 ok");
        assert_eq!(messages.error.resolve(&"x".to_owned()), "nope");
    }
}
