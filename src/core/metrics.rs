//! Metric card records and the cycling cursor

/// One record of the hero metric card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

/// Key performance targets shown on the landing hero.
pub static METRICS: [Metric; 3] = [
    Metric {
        label: "Conflict Reduction Target",
        value: "80%",
        note: "Focused on minimizing scheduling clashes campus-wide.",
    },
    Metric {
        label: "Room Utilization Gain",
        value: "60%",
        note: "Improved capacity usage through intelligent allocation.",
    },
    Metric {
        label: "Reschedule Response",
        value: "Minutes",
        note: "From hours to minutes for urgent changes.",
    },
];

/// Index into [`METRICS`], kept in range by modulo wraparound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricCursor {
    index: usize,
}

impl MetricCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance by one, wrapping to 0 after the last record.
    pub fn cycle(&mut self) {
        self.index = (self.index + 1) % METRICS.len();
    }

    pub fn current(&self) -> &'static Metric {
        &METRICS[self.index]
    }
}
