//! Landing page component
//!
//! The marketing overview for Camp-nou featuring:
//! - SEO meta tags for search engine optimization
//! - Hero section with CTAs and a cycling metric card
//! - Core narrative, workflow, capabilities, agent roles, scope and
//!   future-enhancement sections rendered from the static copy
//! - Finale call-to-action

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::{AGENTS, CAPABILITIES, FUTURES, MetricCursor, NARRATIVE, SCOPE, Screen, WORKFLOW};
use crate::ui::chrome::{PageShell, TopBar};
use crate::ui::nav::use_view_context;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let nav = use_view_context();

    view! {
        <SeoMeta />

        <PageShell>
            <TopBar />

            <header class="hero">
                <div class="hero-copy">
                    <span class="eyebrow">"Agentic AI Scheduling"</span>
                    <h1>"Camp-nou"</h1>
                    <p class="lede">
                        "Camp-Nou — Where Decisions Score Big. Agentic AI that assigns students to
                        classrooms with fairness, speed, and auditable decision-making."
                    </p>
                    <div class="cta-row">
                        <button
                            type="button"
                            class="btn primary"
                            on:click=move |_| nav.navigate(Screen::Signup)
                        >
                            "Explore the system"
                        </button>
                        <button
                            type="button"
                            class="btn ghost"
                            on:click=move |_| nav.navigate(Screen::Login)
                        >
                            "View dashboard"
                        </button>
                    </div>
                    <div class="meta-grid">
                        <div>
                            <span class="meta-label">"Core flow"</span>
                            <span class="meta-value">"Excel upload → Agentic allocation"</span>
                        </div>
                        <div>
                            <span class="meta-label">"Backend"</span>
                            <span class="meta-value">"LangGraph + Python agents"</span>
                        </div>
                        <div>
                            <span class="meta-label">"Security"</span>
                            <span class="meta-value">"RBAC for every stakeholder"</span>
                        </div>
                    </div>
                </div>

                <div class="hero-visual">
                    <MetricCard />

                    <div class="signal-grid">
                        <div class="signal-item">
                            <span class="signal-tag">"Agentic"</span>
                            <p>"Decentralized decisions without a single point of failure."</p>
                        </div>
                        <div class="signal-item">
                            <span class="signal-tag">"Adaptive"</span>
                            <p>"Policy changes and emergencies handled in minutes."</p>
                        </div>
                        <div class="signal-item">
                            <span class="signal-tag">"Auditable"</span>
                            <p>"Every allocation has a logged rationale."</p>
                        </div>
                    </div>
                </div>
            </header>

            <section class="section">
                <div class="section-head">
                    <h2>"Core Narrative"</h2>
                    <p>"Concise signals that explain why the system exists."</p>
                </div>
                <div class="cards">
                    {NARRATIVE
                        .iter()
                        .map(|story| {
                            view! {
                                <article class="card">
                                    <h3>{story.title}</h3>
                                    <p>{story.text}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section-head">
                    <h2>"How It Works"</h2>
                    <p>"Three steps that turn raw data into fair schedules."</p>
                </div>
                <div class="timeline">
                    {WORKFLOW
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <div class="step">
                                    <span class="step-index">{format!("0{}", index + 1)}</span>
                                    <div>
                                        <h3>{step.title}</h3>
                                        <p>{step.text}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section-head">
                    <h2>"System Capabilities"</h2>
                    <p>"Built for fairness, speed, and continuous institutional alignment."</p>
                </div>
                <div class="chip-grid">
                    {CAPABILITIES
                        .iter()
                        .map(|item| view! { <span class="chip">{*item}</span> })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section-head">
                    <h2>"Agent Roles"</h2>
                    <p>"Specialized agents collaborate to resolve conflicts and optimize usage."</p>
                </div>
                <div class="cards">
                    {AGENTS
                        .iter()
                        .map(|item| {
                            view! {
                                <article class="card compact">
                                    <p>{*item}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section-head">
                    <h2>"Project Scope"</h2>
                    <p>"Precisely scoped to avoid feature bloat and maximize impact."</p>
                </div>
                <div class="scope-list">
                    {SCOPE
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="scope-item">
                                    <span class="scope-dot"></span>
                                    <p>{*item}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section-head">
                    <h2>"Future Enhancements"</h2>
                    <p>"Next steps once the core system is fully deployed."</p>
                </div>
                <div class="chip-grid">
                    {FUTURES
                        .iter()
                        .map(|item| view! { <span class="chip ghost">{*item}</span> })
                        .collect_view()}
                </div>
            </section>

            <section class="finale">
                <div>
                    <h2>"Experience the intelligent scheduler"</h2>
                    <p>
                        "Built to replace manual timetables with agentic allocation, auditability, and
                        real-time flexibility."
                    </p>
                </div>
                <div class="cta-row">
                    <button
                        type="button"
                        class="btn primary"
                        on:click=move |_| nav.navigate(Screen::Signup)
                    >
                        "Create account"
                    </button>
                    <button
                        type="button"
                        class="btn ghost"
                        on:click=move |_| nav.navigate(Screen::Login)
                    >
                        "Login"
                    </button>
                </div>
            </section>
        </PageShell>
    }
}

/// Hero metric card cycling through the key performance targets.
#[component]
fn MetricCard() -> impl IntoView {
    let cursor = RwSignal::new(MetricCursor::new());

    view! {
        <div class="metric-card">
            <div class="metric-header">
                <span>"Key performance targets"</span>
                <button
                    type="button"
                    class="pill"
                    on:click=move |_| cursor.update(|cursor| cursor.cycle())
                >
                    "Tap to cycle"
                </button>
            </div>
            <div class="metric-value">{move || cursor.with(|cursor| cursor.current().value)}</div>
            <div class="metric-label">{move || cursor.with(|cursor| cursor.current().label)}</div>
            <p class="metric-note">{move || cursor.with(|cursor| cursor.current().note)}</p>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Camp-nou - Agentic AI Classroom Scheduling" />

        <Meta
            name="description"
            content="Agentic AI that assigns students to classrooms with fairness, speed, and auditable decision-making."
        />
        <Meta
            name="keywords"
            content="classroom scheduling, agentic AI, room allocation, timetable, campus scheduling"
        />

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Camp-nou - Agentic AI Classroom Scheduling" />
        <Meta
            property="og:description"
            content="Replace manual timetables with agentic allocation, auditability, and real-time flexibility."
        />
    }
}
