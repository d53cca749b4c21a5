// SPDX-License-Identifier: MPL-2.0
//! Sign-up form screen.
//!
//! Shows the name, email and password inputs with inline validation, the
//! third-party sign-in buttons and a link to the account creation screen.
//! A valid submit is reported to the parent, which navigates to the albums.

use crate::i18n::fluent::I18n;
use crate::signup::{FormField, SignUpForm, SubmittedValues, ValidationError};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    font::Weight,
    widget::{
        button, container,
        image::{Handle, Image},
        scrollable, text, text_input, Column, Row, Text,
    },
    Alignment, Element, Font, Length,
};

/// Third-party identity providers offered below the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Apple,
    Google,
}

impl SocialProvider {
    pub const ALL: [SocialProvider; 2] = [SocialProvider::Apple, SocialProvider::Google];

    fn label_key(self) -> &'static str {
        match self {
            SocialProvider::Apple => "social-apple",
            SocialProvider::Google => "social-google",
        }
    }

    fn icon(self) -> Image<Handle> {
        match self {
            SocialProvider::Apple => icons::apple(),
            SocialProvider::Google => icons::google(),
        }
    }
}

impl std::fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocialProvider::Apple => f.write_str("Apple"),
            SocialProvider::Google => f.write_str("Google"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    form: SignUpForm,
    password_visible: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn form(&self) -> &SignUpForm {
        &self.form
    }

    #[must_use]
    pub fn password_visible(&self) -> bool {
        self.password_visible
    }
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(FormField, String),
    TogglePasswordVisibility,
    Submit,
    SocialSignIn(SocialProvider),
    OpenSignUp,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submitted(SubmittedValues),
    OpenSignUp,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FieldChanged(field, value) => {
            state.form.set(field, value);
            Event::None
        }
        Message::TogglePasswordVisibility => {
            state.password_visible = !state.password_visible;
            Event::None
        }
        Message::Submit => match state.form.submit() {
            Ok(values) => {
                tracing::info!(name = %values.name, email = %values.email, "sign-up submitted");
                Event::Submitted(values)
            }
            Err(errors) => {
                tracing::debug!(failing = errors.len(), "sign-up form rejected");
                Event::None
            }
        },
        Message::SocialSignIn(provider) => {
            tracing::info!(%provider, "social sign-in requested");
            Event::None
        }
        Message::OpenSignUp => Event::OpenSignUp,
    }
}

/// Translates a validation error with its arguments.
fn error_message(i18n: &I18n, error: ValidationError) -> String {
    let args = error.i18n_args();
    let args_refs: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
    i18n.tr_with_args(error.i18n_key(), &args_refs)
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::default()
    };

    let logo = icons::logo()
        .width(Length::Fixed(sizing::LOGO))
        .height(Length::Fixed(sizing::LOGO));

    let title = Text::new(ctx.i18n.tr("signup-form-title"))
        .size(typography::TITLE_MD)
        .font(bold);
    let subtitle = Text::new(ctx.i18n.tr("signup-form-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_600);

    let mut fields = Column::new().spacing(spacing::MD);
    for field in FormField::ALL {
        fields = fields.push(build_field(&ctx, field));
    }

    let form = ctx.state.form();
    let submit = button(
        container(text(ctx.i18n.tr("signup-submit-button")).size(typography::BODY_LG))
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary)
    .on_press_maybe(form.can_submit().then_some(Message::Submit));

    let separator = container(
        text(ctx.i18n.tr("signup-or-continue-with"))
            .size(typography::CAPTION)
            .color(palette::GRAY_600),
    )
    .center_x(Length::Fill);

    let mut social = Row::new().spacing(spacing::SM);
    for provider in SocialProvider::ALL {
        let label = Row::new()
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
            .push(
                provider
                    .icon()
                    .width(Length::Fixed(sizing::SOCIAL_ICON))
                    .height(Length::Fixed(sizing::SOCIAL_ICON)),
            )
            .push(text(ctx.i18n.tr(provider.label_key())));
        social = social.push(
            button(container(label).center_x(Length::Fill))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::social)
                .on_press(Message::SocialSignIn(provider)),
        );
    }

    let prompt = Row::new()
        .spacing(spacing::XXS)
        .align_y(Alignment::Center)
        .push(
            text(ctx.i18n.tr("signup-prompt-question"))
                .size(typography::CAPTION)
                .color(palette::GRAY_600),
        )
        .push(
            button(
                text(ctx.i18n.tr("signup-prompt-link"))
                    .size(typography::CAPTION)
                    .font(bold),
            )
            .padding(0)
            .style(styles::button::link)
            .on_press(Message::OpenSignUp),
        );

    let content = Column::new()
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .push(logo)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .width(Length::Fill)
                .push(title)
                .push(subtitle),
        )
        .push(fields)
        .push(submit)
        .push(separator)
        .push(social)
        .push(prompt);

    scrollable(container(content).center_x(Length::Fill)).into()
}

/// Label, input and (once touched) the validation message of one field.
fn build_field<'a>(ctx: &ViewContext<'a>, field: FormField) -> Element<'a, Message> {
    let form = ctx.state.form();
    let placeholder = ctx.i18n.tr(field.placeholder_key());
    let masked = field == FormField::Password && !ctx.state.password_visible();

    let input = text_input(placeholder.as_str(), form.value(field))
        .on_input(move |value| Message::FieldChanged(field, value))
        .on_submit(Message::Submit)
        .secure(masked)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    let input_row: Element<'a, Message> = if field == FormField::Password {
        let toggle_key = if ctx.state.password_visible() {
            "password-hide"
        } else {
            "password-show"
        };
        Row::new()
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
            .push(input)
            .push(
                button(text(ctx.i18n.tr(toggle_key)).size(typography::BODY))
                    .style(styles::button::link)
                    .on_press(Message::TogglePasswordVisibility),
            )
            .into()
    } else {
        input.into()
    };

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(text(ctx.i18n.tr(field.label_key())).size(typography::BODY))
        .push(input_row);

    if let Some(error) = form.visible_error(field) {
        column = column.push(
            text(error_message(ctx.i18n, error))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn type_in(state: &mut State, field: FormField, value: &str) -> Event {
        update(state, Message::FieldChanged(field, value.to_string()))
    }

    #[test]
    fn password_is_masked_until_toggled() {
        let mut state = State::new();
        assert!(!state.password_visible());

        update(&mut state, Message::TogglePasswordVisibility);
        assert!(state.password_visible());

        update(&mut state, Message::TogglePasswordVisibility);
        assert!(!state.password_visible());
    }

    #[test]
    fn valid_submit_emits_submitted() {
        let mut state = State::new();
        type_in(&mut state, FormField::Name, "Ada");
        type_in(&mut state, FormField::Email, "ada@example.com");
        type_in(&mut state, FormField::Password, "abcdefgh");

        match update(&mut state, Message::Submit) {
            Event::Submitted(values) => assert_eq!(values.email, "ada@example.com"),
            other => panic!("expected Submitted, got {other:?}"),
        }
    }

    #[test]
    fn invalid_submit_stays_and_reveals_errors() {
        let mut state = State::new();
        type_in(&mut state, FormField::Email, "a@b.com");

        assert!(matches!(update(&mut state, Message::Submit), Event::None));
        assert!(state.form().visible_error(FormField::Name).is_some());
    }

    #[test]
    fn social_sign_in_is_a_no_op() {
        let mut state = State::new();
        let event = update(&mut state, Message::SocialSignIn(SocialProvider::Google));
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn sign_up_prompt_requests_navigation() {
        let mut state = State::new();
        assert!(matches!(
            update(&mut state, Message::OpenSignUp),
            Event::OpenSignUp
        ));
    }

    #[test]
    fn error_messages_are_localized_with_arguments() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(
            error_message(&i18n, ValidationError::TooShort { min: 8 }),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            error_message(&i18n, ValidationError::Required(FormField::Name)),
            "Name is required"
        );
    }
}
