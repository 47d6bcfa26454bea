//! Booking page component
//!
//! A mock reservation flow: pick a club and a venue (chips or selects,
//! kept in sync), pick a date, and "book". Submission is guarded by the
//! selection being complete and only produces the confirmation toast;
//! nothing is persisted.

use leptos::prelude::*;

use crate::core::{BookingSelection, CLUBS, VENUES};
use crate::ui::chrome::{PageShell, TopBar};
use crate::ui::notice::{NoticeToast, use_notice_context};

/// Booking page component
#[component]
pub fn BookingPage() -> impl IntoView {
    let notice = use_notice_context();
    // Selection state lives with the screen: leaving the booking view
    // discards it.
    let selection = RwSignal::new(BookingSelection::new());

    let can_submit = move || selection.with(|selection| selection.can_submit());
    let on_book = move |_| {
        if let Some(message) = selection.with(|selection| selection.submit()) {
            notice.show(message);
        }
    };

    view! {
        <PageShell>
            <TopBar />

            <section class="booking-shell">
                <div class="booking-copy">
                    <span class="eyebrow">"Club Booking"</span>
                    <h1>"Reserve halls with confidence"</h1>
                    <p class="lede">
                        "Pick your club, select a venue, and lock in the date. The system will
                        confirm instantly."
                    </p>
                    <div class="booking-grid">
                        <div class="booking-card">
                            <h3>"Available Clubs"</h3>
                            <div class="chip-grid">
                                {CLUBS
                                    .iter()
                                    .copied()
                                    .map(|club| {
                                        view! {
                                            <button
                                                type="button"
                                                class="chip selectable"
                                                class:active=move || {
                                                    selection.with(|selection| selection.club() == Some(club))
                                                }
                                                on:click=move |_| {
                                                    selection.update(|selection| selection.select_club(club))
                                                }
                                            >
                                                {club}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="booking-card">
                            <h3>"Venues"</h3>
                            <div class="chip-grid">
                                {VENUES
                                    .iter()
                                    .copied()
                                    .map(|venue| {
                                        view! {
                                            <button
                                                type="button"
                                                class="chip selectable"
                                                class:active=move || {
                                                    selection.with(|selection| selection.venue() == Some(venue))
                                                }
                                                on:click=move |_| {
                                                    selection.update(|selection| selection.select_venue(venue))
                                                }
                                            >
                                                {venue}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>

                <div class="booking-panel">
                    <div class="booking-card highlight">
                        <div class="booking-header">
                            <span>"Booking details"</span>
                            <span class="pill">"No backend yet"</span>
                        </div>
                        <div class="booking-form">
                            <label class="field">
                                "Club"
                                <select
                                    prop:value=move || {
                                        selection
                                            .with(|selection| selection.club().unwrap_or("").to_string())
                                    }
                                    on:change=move |ev| {
                                        selection
                                            .update(|selection| {
                                                selection.select_club(event_target_value(&ev))
                                            })
                                    }
                                >
                                    <option value="">"Select club"</option>
                                    {CLUBS
                                        .iter()
                                        .copied()
                                        .map(|club| view! { <option value=club>{club}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                            <label class="field">
                                "Venue"
                                <select
                                    prop:value=move || {
                                        selection
                                            .with(|selection| selection.venue().unwrap_or("").to_string())
                                    }
                                    on:change=move |ev| {
                                        selection
                                            .update(|selection| {
                                                selection.select_venue(event_target_value(&ev))
                                            })
                                    }
                                >
                                    <option value="">"Select venue"</option>
                                    {VENUES
                                        .iter()
                                        .copied()
                                        .map(|venue| view! { <option value=venue>{venue}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                            <label class="field">
                                "Date"
                                <input
                                    type="date"
                                    prop:value=move || {
                                        selection
                                            .with(|selection| selection.date().unwrap_or("").to_string())
                                    }
                                    on:input=move |ev| {
                                        selection
                                            .update(|selection| {
                                                selection.select_date(event_target_value(&ev))
                                            })
                                    }
                                />
                            </label>
                            <button
                                type="button"
                                class="btn primary full"
                                disabled=move || !can_submit()
                                on:click=on_book
                            >
                                "Book now"
                            </button>
                            <p class="booking-hint">
                                "Bookings are confirmed instantly and logged for audit review."
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <NoticeToast />
        </PageShell>
    }
}
