//! Shared page chrome: spotlight shell, decorative orbs, and the top bar

use leptos::prelude::*;

use crate::core::Screen;
use crate::ui::nav::use_view_context;
use crate::ui::theme::use_theme_context;

/// Track the pointer across the page and expose its position as the
/// `--spot-x`/`--spot-y` custom properties the stylesheet's gradient reads.
fn track_spotlight(ev: &leptos::ev::MouseEvent) {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::wasm_bindgen::JsCast;

        let Some(target) = ev.current_target() else {
            return;
        };
        let Some(element) = target.dyn_ref::<leptos::web_sys::HtmlElement>() else {
            return;
        };
        let rect = element.get_bounding_client_rect();
        let x = ev.client_x() as f64 - rect.left();
        let y = ev.client_y() as f64 - rect.top();
        let style = element.style();
        let _ = style.set_property("--spot-x", &format!("{x}px"));
        let _ = style.set_property("--spot-y", &format!("{y}px"));
    }
    #[cfg(feature = "ssr")]
    {
        let _ = ev;
    }
}

/// Page wrapper every screen renders into: cursor-tracked gradient plus
/// the three background orbs. Exposes the active screen as a data
/// attribute for per-screen styling.
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    let nav = use_view_context();

    view! {
        <div
            class="page"
            data-screen=move || nav.screen().as_str()
            on:mousemove=move |ev| track_spotlight(&ev)
        >
            <div class="orb orb-one"></div>
            <div class="orb orb-two"></div>
            <div class="orb orb-three"></div>
            {children()}
        </div>
    }
}

/// Fixed top bar: brand button back to the landing screen, theme toggle,
/// and screen-dependent navigation actions.
#[component]
pub fn TopBar() -> impl IntoView {
    let nav = use_view_context();
    let theme = use_theme_context();

    view! {
        <header class="topbar">
            <button
                type="button"
                class="brand"
                on:click=move |_| nav.navigate(Screen::Landing)
            >
                "Camp-nou"
            </button>
            <div class="nav-actions">
                <button
                    type="button"
                    class="btn ghost theme-toggle"
                    on:click=move |_| theme.toggle()
                >
                    {move || theme.theme().toggle_label()}
                </button>
                {move || {
                    if nav.screen() == Screen::Landing {
                        view! {
                            <>
                                <button
                                    type="button"
                                    class="btn ghost"
                                    on:click=move |_| nav.navigate(Screen::Login)
                                >
                                    "Login"
                                </button>
                                <button
                                    type="button"
                                    class="btn primary"
                                    on:click=move |_| nav.navigate(Screen::Signup)
                                >
                                    "Sign up"
                                </button>
                            </>
                        }
                            .into_any()
                    } else {
                        view! {
                            <button
                                type="button"
                                class="btn ghost"
                                on:click=move |_| nav.navigate(Screen::Landing)
                            >
                                "Back to overview"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}
