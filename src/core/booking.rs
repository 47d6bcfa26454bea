//! Mock booking selection state
//!
//! Three independent selections and a derived submit guard. There is no
//! backing store and no conflict checking; a successful submit only
//! produces the confirmation text for the notice toast.

/// In-memory record of an unsubmitted mock reservation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingSelection {
    club: Option<String>,
    venue: Option<String>,
    date: Option<String>,
}

impl BookingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the club. The empty string clears the field, mirroring the
    /// placeholder option of the form's select.
    pub fn select_club(&mut self, name: impl Into<String>) {
        self.club = non_empty(name.into());
    }

    pub fn select_venue(&mut self, name: impl Into<String>) {
        self.venue = non_empty(name.into());
    }

    pub fn select_date(&mut self, iso_date: impl Into<String>) {
        self.date = non_empty(iso_date.into());
    }

    pub fn club(&self) -> Option<&str> {
        self.club.as_deref()
    }

    pub fn venue(&self) -> Option<&str> {
        self.venue.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// True iff club, venue and date are all selected.
    pub fn can_submit(&self) -> bool {
        self.club.is_some() && self.venue.is_some() && self.date.is_some()
    }

    /// Produce the confirmation text, or `None` while the guard fails.
    pub fn submit(&self) -> Option<String> {
        match (&self.club, &self.venue, &self.date) {
            (Some(club), Some(venue), Some(date)) => {
                Some(format!("Booked {} at {} on {}", club, venue, date))
            }
            _ => None,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
