// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the sign-up form and the
//! album browser.
//!
//! The `App` struct wires together the screens, localization and settings and
//! translates component events into navigation and asynchronous work (photo
//! fetch, filter delay, thumbnail downloads).

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{Navigator, Screen};

use crate::albums::fetch;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::albums_screen::State as AlbumsState;
use crate::ui::signup_form;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    navigator: Navigator,
    signup_form: signup_form::State,
    /// Present only while the albums screen is on the navigation stack.
    albums: Option<AlbumsState>,
    /// Number of the last albums mount, used to drop late results.
    session: u64,
    client: Option<reqwest::Client>,
    /// Resolved once at startup, including the desktop preference.
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.navigator.current())
            .field("albums_mounted", &self.albums.is_some())
            .field("session", &self.session)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, applies CLI overrides and opens on the sign-up form.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        if let Some(endpoint) = flags.endpoint {
            config.albums.endpoint = Some(endpoint);
        }
        if let Some(delay) = flags.filter_delay_ms {
            config.albums.filter_delay_ms = Some(delay);
        }

        let i18n = I18n::new(flags.lang, &config);
        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let client = match fetch::build_client() {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!("failed to build HTTP client: {err}");
                None
            }
        };

        tracing::info!(
            endpoint = config.albums.endpoint(),
            locale = %i18n.current_locale(),
            "application started"
        );

        let app = App {
            i18n,
            theme: config.general.theme_mode.theme(),
            config,
            navigator: Navigator::default(),
            signup_form: signup_form::State::new(),
            albums: None,
            session: 0,
            client,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let albums_busy = self.albums.as_ref().is_some_and(AlbumsState::is_busy);
        subscription::create_spinner_subscription(self.navigator.current(), albums_busy)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &self.config,
            client: self.client.as_ref(),
            navigator: &mut self.navigator,
            signup_form: &mut self.signup_form,
            albums: &mut self.albums,
            next_session: &mut self.session,
        };

        match message {
            Message::SignUpForm(form_message) => {
                update::handle_signup_form_message(&mut ctx, form_message)
            }
            Message::Albums(albums_message) => {
                update::handle_albums_message(&mut ctx, albums_message)
            }
            Message::SignUpScreen(screen_message) => {
                update::handle_signup_screen_message(&mut ctx, screen_message)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.navigator.current(),
            signup_form: &self.signup_form,
            albums: self.albums.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::albums::LoadingPhase;
    use crate::domain::{AlbumGroup, PhotoRecord};
    use crate::signup::FormField;
    use crate::ui::albums_screen;
    use crate::ui::signup_screen;
    use tempfile::tempdir;

    fn new_app() -> (tempfile::TempDir, App) {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            lang: Some("en-US".into()),
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        };
        let (app, _task) = App::new(flags);
        (dir, app)
    }

    fn record(id: u64, album_id: u32) -> PhotoRecord {
        PhotoRecord {
            id,
            album_id,
            title: format!("photo {id}"),
            url: String::new(),
            thumbnail_url: String::new(),
        }
    }

    fn fill_valid_form(app: &mut App) {
        for (field, value) in [
            (FormField::Name, "Ada"),
            (FormField::Email, "ada@example.com"),
            (FormField::Password, "abcdefgh"),
        ] {
            let _ = app.update(Message::SignUpForm(signup_form::Message::FieldChanged(
                field,
                value.to_string(),
            )));
        }
    }

    fn submit(app: &mut App) {
        let _ = app.update(Message::SignUpForm(signup_form::Message::Submit));
    }

    fn albums_message(app: &mut App, message: albums_screen::Message) {
        let _ = app.update(Message::Albums(message));
    }

    #[test]
    fn new_starts_on_sign_up_form_without_albums() {
        let (_dir, app) = new_app();
        assert_eq!(app.navigator.current(), Screen::SignUpForm);
        assert!(app.albums.is_none());
        assert_eq!(app.title(), "Iced Albums");
    }

    #[test]
    fn cli_flags_override_config() {
        let dir = tempdir().expect("temp dir");
        let (app, _task) = App::new(Flags {
            endpoint: Some("http://127.0.0.1:1/photos".into()),
            filter_delay_ms: Some(0),
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        });
        assert_eq!(app.config.albums.endpoint(), "http://127.0.0.1:1/photos");
        assert!(app.config.albums.filter_delay().is_zero());
    }

    #[test]
    fn invalid_submit_stays_on_form() {
        let (_dir, mut app) = new_app();
        submit(&mut app);
        assert_eq!(app.navigator.current(), Screen::SignUpForm);
        assert!(app.albums.is_none());
    }

    #[test]
    fn valid_submit_mounts_albums_in_loading_state() {
        let (_dir, mut app) = new_app();
        fill_valid_form(&mut app);
        submit(&mut app);

        assert_eq!(app.navigator.current(), Screen::Albums);
        let albums = app.albums.as_ref().expect("albums mounted");
        assert_eq!(albums.browser().phase(), LoadingPhase::Loading);
        assert_eq!(albums.browser().session(), 1);
    }

    #[test]
    fn back_from_albums_unmounts_and_drops_late_fetch() {
        let (_dir, mut app) = new_app();
        fill_valid_form(&mut app);
        submit(&mut app);

        albums_message(&mut app, albums_screen::Message::Back);
        assert_eq!(app.navigator.current(), Screen::SignUpForm);
        assert!(app.albums.is_none());

        albums_message(
            &mut app,
            albums_screen::Message::PhotosLoaded {
                session: 1,
                result: Ok(vec![record(1, 1)]),
            },
        );
        assert!(app.albums.is_none());
    }

    #[test]
    fn fetch_from_previous_mount_is_ignored_after_remount() {
        let (_dir, mut app) = new_app();
        fill_valid_form(&mut app);
        submit(&mut app);
        albums_message(&mut app, albums_screen::Message::Back);
        submit(&mut app);

        albums_message(
            &mut app,
            albums_screen::Message::PhotosLoaded {
                session: 1,
                result: Ok(vec![record(1, 1)]),
            },
        );

        let albums = app.albums.as_ref().expect("albums mounted");
        assert_eq!(albums.browser().session(), 2);
        assert_eq!(albums.browser().phase(), LoadingPhase::Loading);
    }

    #[test]
    fn form_values_survive_a_round_trip_to_albums() {
        let (_dir, mut app) = new_app();
        fill_valid_form(&mut app);
        submit(&mut app);
        albums_message(&mut app, albums_screen::Message::Back);

        assert_eq!(app.signup_form.form().value(FormField::Name), "Ada");
    }

    #[test]
    fn selection_flow_applies_latest_filter() {
        let (_dir, mut app) = new_app();
        fill_valid_form(&mut app);
        submit(&mut app);
        albums_message(
            &mut app,
            albums_screen::Message::PhotosLoaded {
                session: 1,
                result: Ok(vec![record(1, 1), record(2, 1), record(3, 2)]),
            },
        );

        albums_message(&mut app, albums_screen::Message::SelectGroup(AlbumGroup::Album(1)));
        albums_message(&mut app, albums_screen::Message::SelectGroup(AlbumGroup::Album(2)));
        let generation = app.albums.as_ref().expect("mounted").browser().generation();

        // An older completion arrives after the newest selection.
        albums_message(
            &mut app,
            albums_screen::Message::FilterApplied {
                session: 1,
                generation: generation - 1,
                view: vec![record(1, 1), record(2, 1)],
            },
        );
        assert_eq!(
            app.albums.as_ref().expect("mounted").browser().phase(),
            LoadingPhase::FilterRecomputing
        );

        albums_message(
            &mut app,
            albums_screen::Message::FilterApplied {
                session: 1,
                generation,
                view: vec![record(3, 2)],
            },
        );
        let browser = app.albums.as_ref().expect("mounted").browser();
        assert_eq!(browser.phase(), LoadingPhase::Ready);
        assert_eq!(browser.view().len(), 1);
        assert_eq!(browser.view()[0].id, 3);
    }

    #[test]
    fn filter_started_before_back_is_ignored_by_next_mount() {
        let (_dir, mut app) = new_app();
        let photos = vec![record(1, 1), record(2, 1), record(3, 2)];
        fill_valid_form(&mut app);

        submit(&mut app);
        albums_message(
            &mut app,
            albums_screen::Message::PhotosLoaded {
                session: 1,
                result: Ok(photos.clone()),
            },
        );
        albums_message(&mut app, albums_screen::Message::SelectGroup(AlbumGroup::Album(1)));
        let stale_generation = app.albums.as_ref().expect("mounted").browser().generation();
        albums_message(&mut app, albums_screen::Message::Back);

        submit(&mut app);
        albums_message(
            &mut app,
            albums_screen::Message::PhotosLoaded {
                session: 2,
                result: Ok(photos),
            },
        );
        albums_message(&mut app, albums_screen::Message::SelectGroup(AlbumGroup::Album(2)));
        assert_eq!(
            app.albums.as_ref().expect("mounted").browser().generation(),
            stale_generation
        );

        albums_message(
            &mut app,
            albums_screen::Message::FilterApplied {
                session: 1,
                generation: stale_generation,
                view: vec![record(1, 1), record(2, 1)],
            },
        );

        let browser = app.albums.as_ref().expect("mounted").browser();
        assert_eq!(browser.selector(), AlbumGroup::Album(2));
        assert_eq!(browser.phase(), LoadingPhase::FilterRecomputing);
    }

    #[test]
    fn sign_up_prompt_opens_placeholder_and_back_returns() {
        let (_dir, mut app) = new_app();
        let _ = app.update(Message::SignUpForm(signup_form::Message::OpenSignUp));
        assert_eq!(app.navigator.current(), Screen::SignUp);

        let _ = app.update(Message::SignUpScreen(signup_screen::Message::Back));
        assert_eq!(app.navigator.current(), Screen::SignUpForm);
    }

    #[test]
    fn theme_follows_config() {
        let (_dir, app) = new_app();
        assert_eq!(app.theme(), Theme::Light);

        let dir = tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join("settings.toml"),
            "[general]\ntheme_mode = \"dark\"\n",
        )
        .expect("write settings");
        let (app, _task) = App::new(Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        });
        assert_eq!(app.theme(), Theme::Dark);
    }
}
