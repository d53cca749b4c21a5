// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component `update` functions stay free of side effects; the handlers here
//! turn their events into navigation and into `Task`s for the network and the
//! filter timer.

use super::{Message, Navigator, Screen};
use crate::albums::{delayed_view, fetch, FilterRequest, ThumbnailRequest};
use crate::config::Config;
use crate::error::{Error, HttpError};
use crate::ui::albums_screen::{self, Event as AlbumsEvent, State as AlbumsState};
use crate::ui::signup_form::{self, Event as SignUpFormEvent};
use crate::ui::signup_screen::{self, Event as SignUpScreenEvent};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub config: &'a Config,
    pub client: Option<&'a reqwest::Client>,
    pub navigator: &'a mut Navigator,
    pub signup_form: &'a mut signup_form::State,
    pub albums: &'a mut Option<AlbumsState>,
    pub next_session: &'a mut u64,
}

/// Handles sign-up form messages.
pub fn handle_signup_form_message(
    ctx: &mut UpdateContext<'_>,
    message: signup_form::Message,
) -> Task<Message> {
    match signup_form::update(ctx.signup_form, message) {
        SignUpFormEvent::None => Task::none(),
        SignUpFormEvent::Submitted(_) => open_albums(ctx),
        SignUpFormEvent::OpenSignUp => {
            ctx.navigator.navigate(Screen::SignUp);
            Task::none()
        }
    }
}

/// Handles placeholder sign-up screen messages.
pub fn handle_signup_screen_message(
    ctx: &mut UpdateContext<'_>,
    message: signup_screen::Message,
) -> Task<Message> {
    match signup_screen::update(message) {
        SignUpScreenEvent::Back => {
            ctx.navigator.back();
            Task::none()
        }
    }
}

/// Handles albums screen messages, including late async completions.
pub fn handle_albums_message(
    ctx: &mut UpdateContext<'_>,
    message: albums_screen::Message,
) -> Task<Message> {
    let Some(state) = ctx.albums.as_mut() else {
        tracing::debug!("albums screen is not mounted, dropping message");
        return Task::none();
    };
    let session = state.browser().session();

    match albums_screen::update(state, message) {
        AlbumsEvent::None => Task::none(),
        AlbumsEvent::Back => {
            ctx.navigator.back();
            // Unmount: results still in flight for this session are dropped.
            *ctx.albums = None;
            Task::none()
        }
        AlbumsEvent::Recompute(request) => schedule_filter(ctx.config, request),
        AlbumsEvent::FetchThumbnails(requests) => {
            fetch_thumbnails(ctx.client, session, requests)
        }
    }
}

/// Navigates to the albums screen and mounts a fresh browser with its fetch.
fn open_albums(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.next_session += 1;
    let session = *ctx.next_session;

    ctx.navigator.navigate(Screen::Albums);
    *ctx.albums = Some(AlbumsState::new(session, ctx.config));

    let Some(client) = ctx.client else {
        let err: Error = HttpError::Transport("HTTP client unavailable".into()).into();
        return Task::done(Message::Albums(albums_screen::Message::PhotosLoaded {
            session,
            result: Err(err),
        }));
    };

    Task::perform(
        fetch::fetch_photos(client.clone(), ctx.config.albums.endpoint().to_string()),
        move |result| Message::Albums(albums_screen::Message::PhotosLoaded { session, result }),
    )
}

fn schedule_filter(config: &Config, request: FilterRequest) -> Task<Message> {
    let FilterRequest {
        session,
        generation,
        group,
        records,
    } = request;
    tracing::debug!(session, generation, album = ?group.as_option(), "scheduling album filter");

    Task::perform(
        delayed_view(records, group, config.albums.filter_delay()),
        move |view| {
            Message::Albums(albums_screen::Message::FilterApplied {
                session,
                generation,
                view,
            })
        },
    )
}

fn fetch_thumbnails(
    client: Option<&reqwest::Client>,
    session: u64,
    requests: Vec<ThumbnailRequest>,
) -> Task<Message> {
    let Some(client) = client else {
        return Task::none();
    };

    Task::batch(requests.into_iter().map(|ThumbnailRequest { id, url }| {
        Task::perform(fetch::fetch_thumbnail(client.clone(), url), move |result| {
            Message::Albums(albums_screen::Message::ThumbnailLoaded {
                session,
                id,
                result,
            })
        })
    }))
}
