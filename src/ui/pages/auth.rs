//! Auth page component
//!
//! Login and signup share this shell; the active screen decides the copy
//! and whether the confirm-password field shows. The form is a deliberate
//! stub: no credentials are read and the only wired action moves on to the
//! booking screen.

use leptos::prelude::*;

use crate::core::{ROLES, Screen};
use crate::ui::chrome::{PageShell, TopBar};
use crate::ui::nav::use_view_context;

/// Auth page component covering both the login and signup screens
#[component]
pub fn AuthPage() -> impl IntoView {
    let nav = use_view_context();
    let is_signup = move || nav.screen() == Screen::Signup;

    view! {
        <PageShell>
            <TopBar />

            <section class="auth-shell">
                <div class="auth-copy">
                    <span class="eyebrow">"Agentic AI Scheduling"</span>
                    <h1>
                        {move || if is_signup() { "Create your workspace" } else { "Welcome back" }}
                    </h1>
                    <p class="lede">
                        {move || {
                            if is_signup() {
                                "Set up your access profile to start scheduling instantly."
                            } else {
                                "Access the intelligent allocation dashboard based on your role."
                            }
                        }}
                    </p>
                    <div class="role-grid">
                        {ROLES
                            .iter()
                            .map(|role| {
                                view! {
                                    <div class="role-card">
                                        <h3>{role.title}</h3>
                                        <p>{role.text}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="auth-card">
                    <div class="auth-header">
                        <span>{move || if is_signup() { "Sign Up" } else { "Login" }}</span>
                        <span class="pill">"No backend yet"</span>
                    </div>
                    <form class="auth-form">
                        <label>
                            "Email"
                            <input type="email" placeholder="name@institution.edu" />
                        </label>
                        <label>
                            "Password"
                            <input type="password" placeholder="••••••••" />
                        </label>
                        <Show when=is_signup>
                            <label>
                                "Confirm password"
                                <input type="password" placeholder="••••••••" />
                            </label>
                        </Show>
                        <div class="role-select">
                            <span>"Role"</span>
                            <div class="role-buttons">
                                <button type="button" class="pill">"Admin"</button>
                                <button type="button" class="pill">"Teacher"</button>
                                <button type="button" class="pill">"Student"</button>
                            </div>
                        </div>
                        <button
                            type="button"
                            class="btn primary full"
                            on:click=move |_| nav.navigate(Screen::Booking)
                        >
                            {move || if is_signup() { "Create account" } else { "Login" }}
                        </button>
                    </form>
                    <div class="auth-footer">
                        {move || {
                            if is_signup() {
                                view! {
                                    <p>
                                        "Already have access? "
                                        <button
                                            type="button"
                                            class="link"
                                            on:click=move |_| nav.navigate(Screen::Login)
                                        >
                                            "Login"
                                        </button>
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <p>
                                        "Need an account? "
                                        <button
                                            type="button"
                                            class="link"
                                            on:click=move |_| nav.navigate(Screen::Signup)
                                        >
                                            "Sign up"
                                        </button>
                                    </p>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </section>
        </PageShell>
    }
}
