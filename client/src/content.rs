//! Static event content rendered by the page sections.
//!
//! DESIGN
//! ======
//! Everything the hero, tracks, venue, and confirmation sections print lives
//! here as `'static` data so components stay pure renderers and copy edits
//! never touch markup.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Fixed facts about the meetup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventDetails {
    pub title: &'static str,
    pub edition: &'static str,
    pub tagline: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub city: &'static str,
    pub venue_address: &'static str,
    pub venue_area: &'static str,
    pub venue_building: &'static str,
    pub expected_attendees: &'static str,
    pub support_email: &'static str,
}

pub const EVENT: EventDetails = EventDetails {
    title: "AppDirect India",
    edition: "Tech Meetup 2025",
    tagline: "Cloud Innovation & Developer Excellence",
    date: "November 22, 2025 (Saturday)",
    time: "10:00 AM - 2:00 PM IST",
    city: "Pune, Maharashtra, India",
    venue_address: "Level 6, Tower 12, Magarpatta Inner Circle, Cybercity, Magarpatta, Hadapsar, Pune, Maharashtra 411013",
    venue_area: "Magarpatta City, Pune",
    venue_building: "Level 6, Tower 12, Magarpatta Inner Circle",
    expected_attendees: "200+",
    support_email: "events@appdirect.com",
};

/// Icon, heading, and one-line blurb. Used for hero feature cards and
/// venue notes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const HERO_FEATURES: &[InfoCard] = &[
    InfoCard { icon: "🎯", title: "Expert Workshops", body: "Hands-on sessions with industry experts" },
    InfoCard { icon: "🤝", title: "Networking", body: "Connect with 200+ developers" },
    InfoCard { icon: "🍕", title: "Food & Drinks", body: "Delicious refreshments & networking" },
];

pub const VENUE_NOTES: &[InfoCard] = &[
    InfoCard { icon: "🅿️", title: "Parking", body: "Free parking available in the building" },
    InfoCard { icon: "🚌", title: "Public Transport", body: "Well connected by bus and auto-rickshaw" },
];

pub const TRAVEL_OPTIONS: &[InfoCard] = &[
    InfoCard { icon: "🚗", title: "By Car", body: "Free parking available. Use Google Maps for best route." },
    InfoCard { icon: "🚌", title: "By Bus", body: "Multiple bus routes connect to Magarpatta area." },
    InfoCard { icon: "🚕", title: "By Auto/Taxi", body: "Auto-rickshaws and cabs readily available." },
];

// =============================================================================
// TRACKS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Speaker {
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub avatar: &'static str,
    pub expertise: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub icon: &'static str,
    /// CSS modifier selecting the header gradient, e.g. `track-card--purple`.
    pub accent: &'static str,
    pub speakers: &'static [Speaker],
    pub sessions: &'static [&'static str],
}

pub const TRACKS: &[Track] = &[
    Track {
        title: "AI-Powered Development",
        icon: "🤖",
        accent: "purple",
        speakers: &[Speaker {
            name: "Nikita Mourya",
            title: "Senior Software Engineer",
            company: "AppDirect",
            avatar: "👩‍💻",
            expertise: "AI Tools, Cursor IDE, CloudRun",
        }],
        sessions: &["Build Smarter, Deploy Faster: AI-Powered Apps with Cursor & CloudRun"],
    },
    Track {
        title: "Modern Development Practices",
        icon: "⚡",
        accent: "green",
        speakers: &[Speaker {
            name: "Ankita",
            title: "Software Engineer",
            company: "Tech Innovator",
            avatar: "👩‍💻",
            expertise: "Modern Coding, Development Tools",
        }],
        sessions: &["Vibe Coding - Modern Development Practices"],
    },
    Track {
        title: "AI Tools & Cloud Deployment",
        icon: "🚀",
        accent: "orange",
        speakers: &[Speaker {
            name: "Muskan",
            title: "Cloud Engineer",
            company: "Cloud Solutions",
            avatar: "👩‍🔧",
            expertise: "AI Tools, Cursor IDE, Google Cloud",
        }],
        sessions: &["Launchpad: Build, Deploy & Scale Modern Sites with AI Tools on Cursor IDE & Google Cloud"],
    },
];

/// Counts shown in the tracks call-to-action banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackSummary {
    pub tracks: usize,
    pub speakers: usize,
    pub sessions: usize,
}

impl TrackSummary {
    #[must_use]
    pub fn of(tracks: &[Track]) -> Self {
        Self {
            tracks: tracks.len(),
            speakers: tracks.iter().map(|t| t.speakers.len()).sum(),
            sessions: tracks.iter().map(|t| t.sessions.len()).sum(),
        }
    }
}
