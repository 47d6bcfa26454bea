use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::core::Screen;
use crate::ui::pages::{AuthPage, BookingPage, LandingPage};
use crate::ui::{provide_notice_context, provide_theme_context, provide_view_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // App-wide state: theme preference, active screen, notice toast.
    provide_theme_context();
    provide_notice_context();
    let nav = provide_view_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/campnou.css"/>

        // sets the document title
        <Title text="Camp-nou - Agentic AI Classroom Scheduling"/>

        // render whichever screen the view controller points at
        {move || match nav.screen() {
            Screen::Landing => view! { <LandingPage/> }.into_any(),
            Screen::Login | Screen::Signup => view! { <AuthPage/> }.into_any(),
            Screen::Booking => view! { <BookingPage/> }.into_any(),
        }}
    }
}
