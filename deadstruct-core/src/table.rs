//! Declaration/usage table - the sole state carrier of an analysis run.
//!
//! Maps each declared struct name to a `used` flag. The flag is monotonic:
//! once a name is marked used it stays used, and once a name is inserted it
//! is never removed. Iteration order is first-declaration order, so report
//! output is deterministic regardless of how many files re-declare a name.

use std::collections::HashMap;

/// Mutable table of struct declarations and their usage flags.
///
/// Owned by a single analysis run and passed by `&mut` into the traversal
/// visitors; there is no global state, so independent runs never interfere.
#[derive(Debug, Default)]
pub struct UsageTable {
    /// Name -> used flag.
    entries: HashMap<String, bool>,
    /// Names in first-declaration order.
    order: Vec<String>,
}

impl UsageTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a struct declaration.
    ///
    /// Returns `true` if the name was newly inserted. Re-declaring a known
    /// name (e.g. from a second file) is a no-op and never resets its flag.
    pub fn declare(&mut self, name: &str) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), false);
        self.order.push(name.to_string());
        true
    }

    /// Marks a declared name as used.
    ///
    /// Returns `true` if the name is present in the table. A usage of a name
    /// that was never declared in the scanned set (a builtin, an external
    /// type) is silently ignored. Idempotent: the flag only ever goes
    /// `false -> true`.
    pub fn mark_used(&mut self, name: &str) -> bool {
        match self.entries.get_mut(name) {
            Some(used) => {
                *used = true;
                true
            }
            None => false,
        }
    }

    /// Whether `name` has been declared.
    pub fn is_declared(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Whether `name` is declared and marked used.
    pub fn is_used(&self, name: &str) -> bool {
        self.entries.get(name).copied().unwrap_or(false)
    }

    /// All declared names, first-declaration order.
    pub fn declared(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Lazy sequence of names whose flag is still `false`, in
    /// first-declaration order.
    pub fn unused(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter(|name| !self.entries[name.as_str()])
            .map(String::as_str)
    }

    /// Number of declared names.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no names have been declared.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
