//! Leptos contexts and components for the landing front-end

pub mod chrome;
pub mod nav;
pub mod notice;
pub mod pages;
pub mod theme;

pub use chrome::{PageShell, TopBar};
pub use nav::{ViewContext, provide_view_context, use_view_context};
pub use notice::{NoticeContext, NoticeToast, provide_notice_context, use_notice_context};
pub use theme::{ThemeContext, provide_theme_context, use_theme_context};
