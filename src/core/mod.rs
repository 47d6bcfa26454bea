//! Core UI state for the landing front-end
//!
//! Everything in this module is plain, signal-free state: the view
//! controller, theme preference, booking selection, notice lifecycle and
//! metric cursor, plus the static page copy. The `ui` module wraps these
//! in reactive contexts.

mod booking;
mod content;
mod metrics;
mod notice;
mod screen;
mod theme;
#[cfg(test)]
mod tests;

pub use booking::*;
pub use content::*;
pub use metrics::*;
pub use notice::*;
pub use screen::*;
pub use theme::*;
