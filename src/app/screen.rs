// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and the navigation stack.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SignUpForm,
    Albums,
    SignUp,
}

/// Stack of visited screens. The bottom entry is never popped.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Screen::SignUpForm)
    }
}

impl Navigator {
    #[must_use]
    pub fn new(root: Screen) -> Self {
        Self { stack: vec![root] }
    }

    #[must_use]
    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::SignUpForm)
    }

    /// Pushes `screen` on top of the stack.
    pub fn navigate(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.current(), to = ?screen, "navigate");
        self.stack.push(screen);
    }

    /// Pops the current screen and returns it, unless it is the root.
    pub fn back(&mut self) -> Option<Screen> {
        if self.stack.len() > 1 {
            let left = self.stack.pop();
            tracing::debug!(from = ?left, to = ?self.current(), "navigate back");
            left
        } else {
            None
        }
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.stack.len()
    }
}
