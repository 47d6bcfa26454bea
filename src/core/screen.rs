//! Screen identifiers and the view controller
//!
//! The whole front-end is a single page; "navigation" is an in-memory
//! state machine over four screens. Transitions are total: any screen can
//! be reached from any other, there are no guards and no terminal state.

/// The mutually exclusive top-level screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    Login,
    Signup,
    Booking,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::Login => "login",
            Screen::Signup => "signup",
            Screen::Booking => "booking",
        }
    }

    /// Login and signup share the same auth shell.
    pub fn is_auth(&self) -> bool {
        matches!(self, Screen::Login | Screen::Signup)
    }
}

/// Single source of truth for which screen is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewController {
    current: Screen,
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            current: Screen::Landing,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Unconditionally switch to `target`. Always succeeds.
    pub fn navigate(&mut self, target: Screen) {
        self.current = target;
    }
}
