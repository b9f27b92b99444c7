// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A single-slot cache holding the most recent value of a stream.
///
/// `Latest` behaves like a replay buffer of size one: each [`set`](Self::set)
/// replaces the stored value, and every reader sees only the newest one.
/// A monotonically increasing revision counter bumps on every store, so
/// observers can tell whether anything arrived since they last looked
/// without comparing values.
#[derive(Clone, Debug, PartialEq)]
pub struct Latest<T> {
    value: Option<T>,
    revision: u64,
}

impl<T> Default for Latest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Latest<T> {
    /// Creates an empty slot at revision 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: None,
            revision: 0,
        }
    }

    /// Stores `value`, replacing any previous one, and returns the new revision.
    ///
    /// Storing an equal value still bumps the revision: the slot records
    /// arrivals, not changes.
    pub fn set(&mut self, value: T) -> u64 {
        self.value = Some(value);
        self.revision = self.revision.wrapping_add(1);
        self.revision
    }

    /// Returns the stored value, if any.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns `true` if no value has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the current revision counter.
    ///
    /// The revision is 0 until the first [`set`](Self::set).
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
