// SPDX-License-Identifier: MPL-2.0
//! Thumbnail cache for album rows.
//!
//! Thumbnails are downloaded lazily for the rows of the current view and
//! kept as decoded image handles.
//!
//! # Design
//!
//! - **LRU eviction**: least recently inserted or requested thumbnails go first
//! - **Count-bounded**: capacity is a number of thumbnails, not bytes
//! - **Id-keyed**: thumbnails are indexed by photo id
//! - **No retries**: a failed download is remembered and not requested again
//!   for the lifetime of the cache

use crate::domain::{PhotoId, PhotoRecord};
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// A thumbnail download to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailRequest {
    pub id: PhotoId,
    pub url: String,
}

pub struct ThumbnailCache {
    images: LruCache<PhotoId, Handle>,
    pending: HashSet<PhotoId>,
    failed: HashSet<PhotoId>,
}

impl std::fmt::Debug for ThumbnailCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailCache")
            .field("cached", &self.images.len())
            .field("pending", &self.pending.len())
            .field("failed", &self.failed.len())
            .finish()
    }
}

impl ThumbnailCache {
    /// Creates a cache holding at most `capacity` thumbnails (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            images: LruCache::new(capacity),
            pending: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    /// Returns the cached thumbnail without touching the LRU order.
    #[must_use]
    pub fn get(&self, id: PhotoId) -> Option<&Handle> {
        self.images.peek(&id)
    }

    #[cfg(test)]
    fn is_pending(&self, id: PhotoId) -> bool {
        self.pending.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Picks up to `limit` rows of `view` whose thumbnail still has to be
    /// downloaded and marks them pending.
    ///
    /// Rows already cached are promoted so they survive eviction.
    pub fn plan(&mut self, view: &[PhotoRecord], limit: usize) -> Vec<ThumbnailRequest> {
        let mut requests = Vec::new();

        for record in view.iter().take(limit) {
            if self.images.get(&record.id).is_some()
                || self.pending.contains(&record.id)
                || self.failed.contains(&record.id)
            {
                continue;
            }
            self.pending.insert(record.id);
            requests.push(ThumbnailRequest {
                id: record.id,
                url: record.thumbnail_url.clone(),
            });
        }

        requests
    }

    /// Stores downloaded image bytes for `id`.
    pub fn insert(&mut self, id: PhotoId, bytes: Vec<u8>) {
        self.pending.remove(&id);
        self.images.put(id, Handle::from_bytes(bytes));
    }

    /// Records a failed download so it is not attempted again.
    pub fn mark_failed(&mut self, id: PhotoId) {
        self.pending.remove(&id);
        self.failed.insert(id);
    }
}
