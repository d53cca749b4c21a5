// SPDX-License-Identifier: MPL-2.0
//! State container for the album browser.
//!
//! The browser owns the fetched records, the album selector, the derived
//! view and the two favorite sets. All asynchronous work (the fetch and the
//! delayed filter) is started by the caller; the results come back through
//! [`BrowserState::records_loaded`] and [`BrowserState::apply_filter`], which
//! drop anything stale.
//!
//! Staleness is decided with two counters:
//! - the *session*, fixed when the screen is mounted, guards every result
//! - the *generation*, bumped on every selector change, guards the filter
//!
//! Generations restart with each mount, so a filter result is only applied
//! when both its session and its generation match.

use super::filter::derive_view;
use crate::domain::{AlbumGroup, PhotoId, PhotoRecord, SelectionSet};
use crate::error::Error;
use std::sync::Arc;

/// Which part of the screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Waiting for the photo list. The whole screen is a spinner.
    Loading,
    /// The view is up to date.
    Ready,
    /// A selector change is pending. The list is replaced by a spinner.
    FilterRecomputing,
}

/// A recomputation to run after the artificial delay.
#[derive(Debug, Clone)]
pub struct FilterRequest {
    pub session: u64,
    pub generation: u64,
    pub group: AlbumGroup,
    pub records: Arc<[PhotoRecord]>,
}

#[derive(Debug, Clone)]
pub struct BrowserState {
    session: u64,
    records: Arc<[PhotoRecord]>,
    selector: AlbumGroup,
    view: Vec<PhotoRecord>,
    phase: LoadingPhase,
    generation: u64,
    starred: SelectionSet,
    hearted: SelectionSet,
}

impl BrowserState {
    /// Creates the state for a freshly mounted screen, waiting for its fetch.
    #[must_use]
    pub fn new(session: u64) -> Self {
        Self {
            session,
            records: Arc::from(Vec::new()),
            selector: AlbumGroup::All,
            view: Vec::new(),
            phase: LoadingPhase::Loading,
            generation: 0,
            starred: SelectionSet::new(),
            hearted: SelectionSet::new(),
        }
    }

    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    #[must_use]
    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    #[must_use]
    pub fn selector(&self) -> AlbumGroup {
        self.selector
    }

    /// Records currently shown.
    #[must_use]
    pub fn view(&self) -> &[PhotoRecord] {
        &self.view
    }

    #[cfg(test)]
    pub(crate) fn records(&self) -> &[PhotoRecord] {
        &self.records
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Applies the fetch result for `session`.
    ///
    /// Returns `false` (and changes nothing) when the result belongs to
    /// another mount. A failed fetch is logged and leaves an empty list.
    pub fn records_loaded(
        &mut self,
        session: u64,
        result: Result<Vec<PhotoRecord>, Error>,
    ) -> bool {
        if session != self.session {
            tracing::debug!(
                session,
                current = self.session,
                "discarding photo list from a previous screen"
            );
            return false;
        }

        let records = match result {
            Ok(records) => {
                tracing::info!(count = records.len(), "photo list loaded");
                records
            }
            Err(err) => {
                tracing::error!("failed to fetch photo list: {err}");
                Vec::new()
            }
        };

        self.records = Arc::from(records);
        // Any recomputation scheduled against the old list is now stale.
        self.generation += 1;
        self.view = derive_view(&self.records, self.selector);
        self.phase = LoadingPhase::Ready;
        true
    }

    /// Selects an album group and schedules the recomputation of the view.
    ///
    /// Every call supersedes the previous pending recomputation.
    pub fn set_selector(&mut self, group: AlbumGroup) -> FilterRequest {
        self.selector = group;
        self.generation += 1;
        if self.phase != LoadingPhase::Loading {
            self.phase = LoadingPhase::FilterRecomputing;
        }

        FilterRequest {
            session: self.session,
            generation: self.generation,
            group,
            records: Arc::clone(&self.records),
        }
    }

    /// Applies a finished recomputation.
    ///
    /// Returns `false` and keeps the current view when the result was
    /// scheduled by another mount or `generation` is not the latest one.
    pub fn apply_filter(
        &mut self,
        session: u64,
        generation: u64,
        view: Vec<PhotoRecord>,
    ) -> bool {
        if session != self.session {
            tracing::debug!(
                session,
                current = self.session,
                "discarding album filter from a previous screen"
            );
            return false;
        }
        if generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "discarding stale album filter"
            );
            return false;
        }

        self.view = view;
        self.phase = LoadingPhase::Ready;
        true
    }

    /// Flips the star on `id`. Returns `true` if the photo is now starred.
    pub fn toggle_star(&mut self, id: PhotoId) -> bool {
        self.starred.toggle(id)
    }

    /// Flips the heart on `id`. Returns `true` if the photo is now hearted.
    pub fn toggle_heart(&mut self, id: PhotoId) -> bool {
        self.hearted.toggle(id)
    }

    #[must_use]
    pub fn is_starred(&self, id: PhotoId) -> bool {
        self.starred.contains(id)
    }

    #[must_use]
    pub fn is_hearted(&self, id: PhotoId) -> bool {
        self.hearted.contains(id)
    }

    #[must_use]
    pub fn starred(&self) -> &SelectionSet {
        &self.starred
    }

    #[must_use]
    pub fn hearted(&self) -> &SelectionSet {
        &self.hearted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;

    fn record(id: u64, album_id: u32) -> PhotoRecord {
        PhotoRecord {
            id,
            album_id,
            title: format!("photo {id}"),
            url: String::new(),
            thumbnail_url: String::new(),
        }
    }

    fn loaded(records: Vec<PhotoRecord>) -> BrowserState {
        let mut state = BrowserState::new(1);
        assert!(state.records_loaded(1, Ok(records)));
        state
    }

    fn run(request: &FilterRequest) -> Vec<PhotoRecord> {
        derive_view(&request.records, request.group)
    }

    fn view_ids(state: &BrowserState) -> Vec<u64> {
        state.view().iter().map(|r| r.id).collect()
    }

    #[test]
    fn new_state_is_loading_with_empty_sets() {
        let state = BrowserState::new(4);
        assert_eq!(state.phase(), LoadingPhase::Loading);
        assert_eq!(state.selector(), AlbumGroup::All);
        assert!(state.view().is_empty());
        assert!(state.starred().is_empty());
        assert!(state.hearted().is_empty());
    }

    #[test]
    fn successful_fetch_shows_every_record() {
        let state = loaded(vec![record(1, 1), record(2, 1), record(3, 2)]);
        assert_eq!(state.phase(), LoadingPhase::Ready);
        assert_eq!(view_ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn failed_fetch_degrades_to_empty_ready_state() {
        let mut state = BrowserState::new(1);
        let applied = state.records_loaded(1, Err(HttpError::Status(500).into()));

        assert!(applied);
        assert_eq!(state.phase(), LoadingPhase::Ready);
        assert!(state.records().is_empty());
        assert!(state.view().is_empty());
    }

    #[test]
    fn fetch_from_another_session_is_ignored() {
        let mut state = BrowserState::new(2);
        assert!(!state.records_loaded(1, Ok(vec![record(1, 1)])));
        assert_eq!(state.phase(), LoadingPhase::Loading);
        assert!(state.records().is_empty());
    }

    #[test]
    fn selecting_groups_filters_after_recompute() {
        let mut state = loaded(vec![record(1, 1), record(2, 1), record(3, 2)]);

        let request = state.set_selector(AlbumGroup::Album(1));
        assert_eq!(state.phase(), LoadingPhase::FilterRecomputing);
        assert!(state.apply_filter(request.session, request.generation, run(&request)));
        assert_eq!(state.phase(), LoadingPhase::Ready);
        assert_eq!(view_ids(&state), vec![1, 2]);

        let request = state.set_selector(AlbumGroup::Album(3));
        assert!(state.apply_filter(request.session, request.generation, run(&request)));
        assert!(state.view().is_empty());
    }

    #[test]
    fn only_the_latest_selection_is_applied() {
        let mut state = loaded(vec![record(1, 1), record(2, 1), record(3, 2)]);

        let first = state.set_selector(AlbumGroup::Album(1));
        let second = state.set_selector(AlbumGroup::Album(2));

        // The newer timer fires first, the older one afterwards.
        assert!(state.apply_filter(second.session, second.generation, run(&second)));
        assert!(!state.apply_filter(first.session, first.generation, run(&first)));

        assert_eq!(state.selector(), AlbumGroup::Album(2));
        assert_eq!(view_ids(&state), vec![3]);
        assert_eq!(state.phase(), LoadingPhase::Ready);
    }

    #[test]
    fn stale_completion_keeps_spinner_until_latest_arrives() {
        let mut state = loaded(vec![record(1, 1), record(2, 2)]);

        let first = state.set_selector(AlbumGroup::Album(1));
        let second = state.set_selector(AlbumGroup::Album(2));

        assert!(!state.apply_filter(first.session, first.generation, run(&first)));
        assert_eq!(state.phase(), LoadingPhase::FilterRecomputing);

        assert!(state.apply_filter(second.session, second.generation, run(&second)));
        assert_eq!(view_ids(&state), vec![2]);
    }

    #[test]
    fn filter_scheduled_before_load_is_superseded_by_load() {
        let mut state = BrowserState::new(1);
        let early = state.set_selector(AlbumGroup::All);
        assert_eq!(state.phase(), LoadingPhase::Loading);

        state.records_loaded(1, Ok(vec![record(1, 1)]));

        assert!(!state.apply_filter(early.session, early.generation, run(&early)));
        assert_eq!(view_ids(&state), vec![1]);
    }

    #[test]
    fn filter_from_a_previous_mount_is_ignored() {
        let records = vec![record(1, 1), record(2, 1), record(3, 2)];

        let mut first_mount = BrowserState::new(1);
        first_mount.records_loaded(1, Ok(records.clone()));
        let stale = first_mount.set_selector(AlbumGroup::Album(1));

        let mut second_mount = BrowserState::new(2);
        second_mount.records_loaded(2, Ok(records));
        let current = second_mount.set_selector(AlbumGroup::Album(2));
        assert_eq!(stale.generation, current.generation);

        assert!(!second_mount.apply_filter(stale.session, stale.generation, run(&stale)));
        assert_eq!(second_mount.phase(), LoadingPhase::FilterRecomputing);

        assert!(second_mount.apply_filter(current.session, current.generation, run(&current)));
        assert_eq!(view_ids(&second_mount), vec![3]);
    }

    #[test]
    fn toggles_are_independent() {
        let mut state = loaded(vec![record(1, 1), record(2, 1)]);

        assert!(state.toggle_heart(1));
        assert!(!state.is_starred(1));
        assert!(state.starred().is_empty());

        assert!(state.toggle_star(2));
        assert!(state.is_hearted(1));
        assert!(!state.is_hearted(2));
        assert_eq!(state.hearted().len(), 1);
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let mut state = loaded(vec![record(1, 1)]);
        let before = state.starred().clone();

        state.toggle_star(1);
        state.toggle_star(1);

        assert_eq!(state.starred(), &before);
    }

    #[test]
    fn favorites_survive_filter_changes() {
        let mut state = loaded(vec![record(1, 1), record(2, 2)]);
        state.toggle_star(1);
        state.toggle_heart(1);

        let away = state.set_selector(AlbumGroup::Album(2));
        state.apply_filter(away.session, away.generation, run(&away));
        assert!(state.view().iter().all(|r| r.id != 1));

        let back = state.set_selector(AlbumGroup::All);
        state.apply_filter(back.session, back.generation, run(&back));
        assert!(state.is_starred(1));
        assert!(state.is_hearted(1));
    }
}
