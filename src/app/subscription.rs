// SPDX-License-Identifier: MPL-2.0
//! Periodic subscriptions for the application.

use super::{Message, Screen};
use crate::ui::albums_screen;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between spinner animation frames.
const SPINNER_TICK: Duration = Duration::from_millis(50);

/// Drives the spinner while the albums screen is loading or filtering.
pub fn create_spinner_subscription(screen: Screen, albums_busy: bool) -> Subscription<Message> {
    if screen == Screen::Albums && albums_busy {
        time::every(SPINNER_TICK).map(|_| Message::Albums(albums_screen::Message::SpinnerTick))
    } else {
        Subscription::none()
    }
}
