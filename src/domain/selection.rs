// SPDX-License-Identifier: MPL-2.0
//! Toggle sets used for starring and hearting photos.

use super::photo::PhotoId;
use std::collections::HashSet;

/// Set of photo ids where membership is a boolean flag.
///
/// Toggling an id twice leaves the set unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<PhotoId>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the membership of `id`. Returns `true` if it is now selected.
    pub fn toggle(&mut self, id: PhotoId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: PhotoId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
