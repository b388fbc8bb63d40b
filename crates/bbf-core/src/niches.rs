//! Descriptive "boring business" niche metadata.
//!
//! These are display constants only. Categories outside the list flow through
//! every stage unchanged.

pub const NICHES: &[&str] = &[
    "garage organizers",
    "irrigation systems",
    "pressure washing",
    "junk removal",
    "mobile mechanic",
    "pool service",
    "lawn care",
    "gutter cleaning",
    "appliance repair",
    "locksmith",
    "fence installation",
    "tree service",
    "carpet cleaning",
    "window cleaning",
    "pest control",
    "other",
];

/// A display heading and the niches listed beneath it.
#[derive(Debug, Clone, Copy)]
pub struct NicheGroup {
    pub icon: &'static str,
    pub title: &'static str,
    pub niches: [&'static str; 4],
}

pub const NICHE_GROUPS: &[NicheGroup] = &[
    NicheGroup {
        icon: "🚗",
        title: "Automotive",
        niches: [
            "mobile mechanic",
            "mobile diesel repair",
            "mobile detailing",
            "windshield repair",
        ],
    },
    NicheGroup {
        icon: "🏠",
        title: "Home Services",
        niches: [
            "garage organizers",
            "gutter cleaning",
            "pressure washing",
            "window cleaning",
        ],
    },
    NicheGroup {
        icon: "🌳",
        title: "Outdoor",
        niches: [
            "irrigation systems",
            "tree service",
            "lawn care",
            "fence installation",
        ],
    },
    NicheGroup {
        icon: "🔧",
        title: "Repair",
        niches: [
            "appliance repair",
            "locksmith",
            "handyman services",
            "HVAC maintenance",
        ],
    },
    NicheGroup {
        icon: "🧹",
        title: "Cleaning",
        niches: [
            "carpet cleaning",
            "pool service",
            "junk removal",
            "chimney sweep",
        ],
    },
    NicheGroup {
        icon: "🐛",
        title: "Specialty",
        niches: [
            "pest control",
            "mold remediation",
            "septic services",
            "wildlife removal",
        ],
    },
];

/// True when `category` is one of the known niches (case-insensitive).
#[must_use]
pub fn is_known_niche(category: &str) -> bool {
    let wanted = category.trim().to_lowercase();
    NICHES.iter().any(|n| *n == wanted)
}
