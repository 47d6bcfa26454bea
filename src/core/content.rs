//! Static landing-page copy
//!
//! Everything here is descriptive text; the capabilities it mentions are
//! product narrative, not implemented behavior.

/// A titled blurb used by the narrative, workflow and role sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Story {
    pub title: &'static str,
    pub text: &'static str,
}

pub static NARRATIVE: [Story; 3] = [
    Story {
        title: "Problem",
        text: "Manual scheduling causes conflicts, wasted rooms, and uneven access.",
    },
    Story {
        title: "Insight",
        text: "Agentic negotiation and policy-driven rules outperform rigid timetables.",
    },
    Story {
        title: "Outcome",
        text: "Faster decisions, fairer distribution, and measurable efficiency gains.",
    },
];

pub static WORKFLOW: [Story; 3] = [
    Story {
        title: "Upload",
        text: "Admins upload student and course data via Excel.",
    },
    Story {
        title: "Allocate",
        text: "Agentic AI assigns students to classes using capacity and policy rules.",
    },
    Story {
        title: "Audit",
        text: "Every decision is logged for accountability and review.",
    },
];

pub static ROLES: [Story; 3] = [
    Story {
        title: "Admin",
        text: "Uploads data, monitors allocations, and manages policies.",
    },
    Story {
        title: "Teacher",
        text: "Views assigned classrooms and flags conflicts.",
    },
    Story {
        title: "Student",
        text: "Receives class assignments and schedule updates.",
    },
];

pub static SCOPE: [&str; 5] = [
    "Automate classroom and facility allocation with intelligent conflict resolution.",
    "Adapt to policy changes like priority rules and exam occupancy limits.",
    "Distribute resources fairly across departments, clubs, and exam cells.",
    "Generate transparent audit logs with decision rationale.",
    "Scale across departments with role-based access and security.",
];

pub static AGENTS: [&str; 6] = [
    "Department Agents for requests and preferences.",
    "Facility Management Agent for rooms and maintenance.",
    "Scheduling Optimization Agent for global conflict resolution.",
    "Policy Enforcement Agent for priorities and compliance.",
    "Exam Cell Agent for high-priority scheduling.",
    "Club Agents for event space allocation.",
];

pub static CAPABILITIES: [&str; 5] = [
    "Automated conflict detection and resolution.",
    "Dynamic prioritization: classes, admin units, then clubs.",
    "Emergency reallocation with real-time updates.",
    "Secure RBAC-based access for each stakeholder role.",
    "RAG-backed decisions grounded in institutional data.",
];

pub static FUTURES: [&str; 4] = [
    "Multi-institution resource sharing.",
    "Predictive analytics for demand forecasting.",
    "Reinforcement learning for smarter negotiations.",
    "Real-time room availability monitoring.",
];

/// Clubs offered in the booking form.
pub static CLUBS: [&str; 8] = [
    "EXCEL",
    "IEDC",
    "MACS",
    "IEEE",
    "EMF",
    "FOSS",
    "Bharatham",
    "TEDx",
];

/// Bookable venues.
pub static VENUES: [&str; 5] = [
    "SDPK",
    "Internal Auditorium",
    "External Auditorium",
    "Media Hall",
    "Amphie Theater",
];
