// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::albums_screen::{self, State as AlbumsState};
use crate::ui::design_tokens::typography;
use crate::ui::signup_form;
use crate::ui::signup_screen;
use iced::{
    widget::{Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub signup_form: &'a signup_form::State,
    pub albums: Option<&'a AlbumsState>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::SignUpForm => signup_form::view(signup_form::ViewContext {
            i18n: ctx.i18n,
            state: ctx.signup_form,
        })
        .map(Message::SignUpForm),
        Screen::Albums => view_albums(ctx.albums, ctx.i18n),
        Screen::SignUp => signup_screen::view(ctx.i18n).map(Message::SignUpScreen),
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_albums<'a>(albums: Option<&'a AlbumsState>, i18n: &'a I18n) -> Element<'a, Message> {
    match albums {
        Some(state) => albums_screen::view(albums_screen::ViewContext { i18n, state })
            .map(Message::Albums),
        // Albums state is created on navigation, so this is not expected.
        None => Container::new(Text::new(i18n.tr("albums-empty")).size(typography::BODY))
            .center(Length::Fill)
            .into(),
    }
}

