//! Screen components
//!
//! One component per top-level screen:
//! - Landing (hero, metric card, narrative sections)
//! - Auth (login and signup share one shell)
//! - Booking (mock reservation form)

mod auth;
mod booking;
mod landing;

pub use auth::AuthPage;
pub use booking::BookingPage;
pub use landing::LandingPage;
