// SPDX-License-Identifier: MPL-2.0
//! Activity indicator drawn on a canvas.
//!
//! The widget is stateless: the caller owns the rotation angle and advances
//! it on each tick.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, path::Arc, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Rotation added on every tick, in radians.
pub const STEP: f32 = 0.15;

const STROKE_WIDTH: f32 = 3.0;

/// Advances `rotation` by one step, wrapping at a full turn.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + STEP) % TAU
}

struct Spinner {
    rotation: f32,
    color: Color,
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color { a: 0.2, ..self.color }),
        );

        // Half-turn arc starting at the top.
        let start = self.rotation - FRAC_PI_2;
        let arc = Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(start + PI),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

/// Large spinner in the accent blue, rotated by `rotation` radians.
pub fn spinner<'a, Message: 'a>(rotation: f32) -> Element<'a, Message> {
    Canvas::new(Spinner {
        rotation,
        color: palette::SPINNER,
    })
    .width(Length::Fixed(sizing::SPINNER))
    .height(Length::Fixed(sizing::SPINNER))
    .into()
}
