//! Focus on a field of an instance that may be absent.
//!
//! Reading a field that neither the instance nor its prototype holds yields
//! `None`, so field optics only promise a partial focus.
//!
//! # Laws
//!
//! Whenever `get_option(&source)` is `Some(current)`:
//!
//! - writing `current` back gives an instance equal to `source`;
//! - after `set(source, value)`, `get_option` reads `Some(&value)`.
//!
//! When the focus is absent, `set` returns `source` untouched.

/// Read and copy-on-write access to a value `A` inside an `S`.
pub trait Optional<S, A> {
    /// The focused value, if `source` holds one.
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a A>;

    /// A copy of `source` with the focus replaced by `value`.
    fn set(&self, source: S, value: A) -> S;

    /// Applies `function` to the focus, or returns `None` when it is absent.
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get_option(&source)?.clone();
        Some(self.set(source, function(current)))
    }

    /// Applies `function` to the focus; an absent focus leaves `source` as is.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        match self.get_option(&source).cloned() {
            Some(current) => self.set(source, function(current)),
            None => source,
        }
    }

    /// Whether `source` holds the focus.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }
}
