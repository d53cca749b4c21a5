// SPDX-License-Identifier: MPL-2.0
//! Album browser screen.
//!
//! Wraps a [`BrowserState`] and a [`ThumbnailCache`] and renders the header,
//! the horizontal album selector and the photo rows. Network and timer work
//! is requested from the parent through [`Event`]s.

use crate::albums::{BrowserState, FilterRequest, LoadingPhase, ThumbnailCache, ThumbnailRequest};
use crate::config::Config;
use crate::domain::{AlbumGroup, PhotoId, PhotoRecord};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::spinner;
use iced::{
    font::Weight,
    widget::{
        button, container, image, scrollable, scrollable::Viewport, text, Column, Row, Text,
    },
    Alignment, Color, Element, Font, Length,
};
use std::ops::Range;

const STAR_GLYPH: &str = "★";
const HEART_GLYPH: &str = "♥";
const BACK_GLYPH: &str = "‹";

/// Star color for a photo: black when starred, gray otherwise.
#[must_use]
pub fn star_color(starred: bool) -> Color {
    if starred {
        palette::STAR_ON
    } else {
        palette::STAR_OFF
    }
}

/// Heart color for a photo: red when hearted, pink otherwise.
#[must_use]
pub fn heart_color(hearted: bool) -> Color {
    if hearted {
        palette::HEART_ON
    } else {
        palette::HEART_OFF
    }
}

#[derive(Debug)]
pub struct State {
    browser: BrowserState,
    thumbnails: ThumbnailCache,
    group_count: u32,
    prefetch: usize,
    spinner_rotation: f32,
}

impl State {
    /// Creates the screen for mount number `session`, waiting for its fetch.
    #[must_use]
    pub fn new(session: u64, config: &Config) -> Self {
        Self {
            browser: BrowserState::new(session),
            thumbnails: ThumbnailCache::new(config.albums.thumbnail_cache_size()),
            group_count: config.albums.group_count(),
            prefetch: config.albums.thumbnail_prefetch(),
            spinner_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn browser(&self) -> &BrowserState {
        &self.browser
    }

    #[must_use]
    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    /// Whether a spinner is on screen.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.browser.phase() != LoadingPhase::Ready
    }

    /// Plans downloads for the first rows of a freshly shown view.
    fn plan_thumbnails(&mut self) -> Event {
        self.plan_rows(0..0)
    }

    /// Plans downloads for `visible` rows plus the prefetch window after them.
    fn plan_rows(&mut self, visible: Range<usize>) -> Event {
        let view = self.browser.view();
        let start = visible.start.min(view.len());
        let limit = visible.len() + self.prefetch;
        let requests = self.thumbnails.plan(&view[start..], limit);
        if requests.is_empty() {
            Event::None
        } else {
            Event::FetchThumbnails(requests)
        }
    }
}

/// Indices of the rows inside the scrolled viewport.
///
/// Rows are assumed to share the content height evenly.
fn visible_rows(
    len: usize,
    offset: f32,
    viewport_height: f32,
    content_height: f32,
) -> Range<usize> {
    if len == 0 || content_height <= 0.0 {
        return 0..0;
    }
    let row_height = content_height / len as f32;
    let start = ((offset / row_height).floor().max(0.0) as usize).min(len);
    let end = (((offset + viewport_height) / row_height).ceil().max(0.0) as usize).min(len);
    start..end.max(start)
}

/// Contextual data needed to render the albums screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    SelectGroup(AlbumGroup),
    ToggleStar(PhotoId),
    ToggleHeart(PhotoId),
    PhotosLoaded {
        session: u64,
        result: Result<Vec<PhotoRecord>, Error>,
    },
    FilterApplied {
        session: u64,
        generation: u64,
        view: Vec<PhotoRecord>,
    },
    RowsScrolled {
        offset: f32,
        viewport_height: f32,
        content_height: f32,
    },
    ThumbnailLoaded {
        session: u64,
        id: PhotoId,
        result: Result<Vec<u8>, Error>,
    },
    SpinnerTick,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Back,
    /// Run the delayed recomputation and report it as [`Message::FilterApplied`].
    Recompute(FilterRequest),
    /// Download these thumbnails and report each as [`Message::ThumbnailLoaded`].
    FetchThumbnails(Vec<ThumbnailRequest>),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Back => Event::Back,
        Message::SelectGroup(group) => Event::Recompute(state.browser.set_selector(group)),
        Message::ToggleStar(id) => {
            let starred = state.browser.toggle_star(id);
            tracing::debug!(id, starred, "toggled star");
            Event::None
        }
        Message::ToggleHeart(id) => {
            let hearted = state.browser.toggle_heart(id);
            tracing::debug!(id, hearted, "toggled heart");
            Event::None
        }
        Message::PhotosLoaded { session, result } => {
            if state.browser.records_loaded(session, result) {
                state.plan_thumbnails()
            } else {
                Event::None
            }
        }
        Message::FilterApplied {
            session,
            generation,
            view,
        } => {
            if state.browser.apply_filter(session, generation, view) {
                state.plan_thumbnails()
            } else {
                Event::None
            }
        }
        Message::RowsScrolled {
            offset,
            viewport_height,
            content_height,
        } => {
            if state.browser.phase() != LoadingPhase::Ready {
                return Event::None;
            }
            let len = state.browser.view().len();
            state.plan_rows(visible_rows(len, offset, viewport_height, content_height))
        }
        Message::ThumbnailLoaded {
            session,
            id,
            result,
        } => {
            if session != state.browser.session() {
                return Event::None;
            }
            match result {
                Ok(bytes) => state.thumbnails.insert(id, bytes),
                Err(err) => {
                    tracing::debug!(id, "thumbnail download failed: {err}");
                    state.thumbnails.mark_failed(id);
                }
            }
            Event::None
        }
        Message::SpinnerTick => {
            state.spinner_rotation = spinner::advance(state.spinner_rotation);
            Event::None
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let browser = ctx.state.browser();

    if browser.phase() == LoadingPhase::Loading {
        return centered_spinner(ctx.state.spinner_rotation);
    }

    let body: Element<'a, Message> = match browser.phase() {
        LoadingPhase::Ready if browser.view().is_empty() => container(
            text(ctx.i18n.tr("albums-empty"))
                .size(typography::BODY_LG)
                .color(palette::GRAY_600),
        )
        .center(Length::Fill)
        .into(),
        LoadingPhase::Ready => build_rows(&ctx),
        LoadingPhase::Loading | LoadingPhase::FilterRecomputing => {
            centered_spinner(ctx.state.spinner_rotation)
        }
    };

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(build_header(&ctx))
        .push(
            text(ctx.i18n.tr("albums-caption"))
                .size(typography::TITLE_SM)
                .color(palette::GRAY_600),
        )
        .push(build_group_selector(&ctx))
        .push(body)
        .into()
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::default()
    }
}

fn centered_spinner<'a>(rotation: f32) -> Element<'a, Message> {
    container(spinner::spinner(rotation))
        .center(Length::Fill)
        .into()
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let back = button(text(BACK_GLYPH).size(typography::TITLE_MD))
        .padding([0.0, spacing::XS])
        .style(styles::button::pill)
        .on_press(Message::Back);

    let title = Text::new(ctx.i18n.tr("albums-title"))
        .size(typography::TITLE_MD)
        .font(bold());

    Row::new()
        .width(Length::Fill)
        .align_y(Alignment::Center)
        .spacing(spacing::MD)
        .push(back)
        .push(container(title).align_right(Length::Fill))
        .into()
}

fn group_label(i18n: &I18n, group: AlbumGroup) -> String {
    match group {
        AlbumGroup::All => i18n.tr("albums-all"),
        AlbumGroup::Album(number) => {
            i18n.tr_with_args("album-chip", &[("number", &number.to_string())])
        }
    }
}

fn build_group_selector<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let selected = ctx.state.browser().selector();

    let mut chips = Row::new().spacing(spacing::XS).padding([0.0, spacing::XS]);
    for group in AlbumGroup::choices(ctx.state.group_count) {
        chips = chips.push(
            button(
                container(text(group_label(ctx.i18n, group)).size(typography::BODY_LG))
                    .center_y(Length::Fill),
            )
            .height(Length::Fixed(sizing::CHIP_HEIGHT))
            .padding([0.0, spacing::SM])
            .style(styles::button::chip(group == selected))
            .on_press(Message::SelectGroup(group)),
        );
    }

    scrollable(chips)
        .direction(scrollable::Direction::Horizontal(scrollable::Scrollbar::new()))
        .width(Length::Fill)
        .into()
}

fn build_rows<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::SM).width(Length::Fill);
    for record in ctx.state.browser().view() {
        rows = rows.push(build_row(ctx, record));
    }

    scrollable(rows)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::RowsScrolled {
            offset: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        })
        .into()
}

fn build_row<'a>(ctx: &ViewContext<'a>, record: &PhotoRecord) -> Element<'a, Message> {
    let browser = ctx.state.browser();

    let thumbnail: Element<'a, Message> = match ctx.state.thumbnails().get(record.id) {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .into(),
        None => container(text(""))
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .style(styles::container::thumbnail_placeholder)
            .into(),
    };

    let album_id = text(ctx.i18n.tr_with_args(
        "album-id-label",
        &[("id", &record.album_id.to_string())],
    ))
    .size(typography::LABEL_LG)
    .font(bold());

    let star = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Alignment::Center)
            .push(
                text(STAR_GLYPH)
                    .size(sizing::STAR_ICON)
                    .color(star_color(browser.is_starred(record.id))),
            )
            .push(
                text(ctx.i18n.tr("photo-star-label"))
                    .size(typography::BODY)
                    .font(bold()),
            ),
    )
    .padding([spacing::XXS, spacing::MD])
    .style(styles::button::pill)
    .on_press(Message::ToggleStar(record.id));

    let heart = button(text(HEART_GLYPH).size(sizing::HEART_ICON))
        .style(styles::button::icon(heart_color(browser.is_hearted(record.id))))
        .on_press(Message::ToggleHeart(record.id));

    let actions = Row::new()
        .width(Length::Fill)
        .align_y(Alignment::Center)
        .push(star)
        .push(container(heart).align_right(Length::Fill));

    let details = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XXS)
        .push(album_id)
        .push(text(record.title.clone()).size(typography::BODY))
        .push(actions);

    container(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Alignment::Center)
            .push(thumbnail)
            .push(details),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}
