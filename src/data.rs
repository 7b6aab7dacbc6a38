//! The compiled-in gift table. Each entry backs one personalised link.

use crate::model::{Gift, RevealKind};

pub static GIFTS: &[Gift] = &[
    Gift {
        slug: "aoife",
        recipient_name: "Aoife",
        title: "INTRO TO SEA KAYAKING – STRANGFORD LOUGH",
        subtitle: "",
        intro: "A full-day guided paddle for first-timers: sheltered water, \
                seals if we're lucky, and a proper lunch on an island only \
                boats can reach.",
        hero_image: "/strangford-kayak.svg",
        included_title: "What's Included",
        included_items: &[
            "Kayak, paddle & all safety kit fitted for you",
            "Introduction to the <strong>forward and sweep strokes</strong>",
            "<strong>Full day on the lough</strong> with a qualified guide",
            "Island stop with <strong>lunch provided</strong>",
        ],
        extra_title: Some("Suggested Dates"),
        extra_items: Some(&["Saturday 16th May", "Saturday 13th June"]),
        christmas: true,
        reveal: Some(RevealKind::Climb),
        avatar_image: None,
    },
    Gift {
        slug: "ruairi",
        recipient_name: "Ruairí",
        title: "STARGAZING NIGHT – DAVAGH DARK SKY PARK",
        subtitle: "OM Dark Sky Park & Observatory",
        intro: "An evening at the observatory followed by a guided walk under \
                one of the darkest skies on the island. Bring a flask; the \
                telescopes are warmer than the car park.",
        hero_image: "/davagh-skies.svg",
        included_title: "What's Planned",
        included_items: &[
            "Observatory tour and <strong>telescope session</strong>",
            "Guided night walk through the forest",
            "Hot chocolate stop at the visitor centre",
        ],
        extra_title: None,
        extra_items: None,
        christmas: true,
        reveal: Some(RevealKind::Unwrap),
        avatar_image: None,
    },
    Gift {
        slug: "niamh",
        recipient_name: "Niamh",
        title: "POTTERY TASTER FOR TWO – BELFAST",
        subtitle: "Wheel-throwing studio, Cathedral Quarter",
        intro: "Two hours at the wheel making bowls we will absolutely claim \
                were meant to look like that. Your pieces get fired and \
                posted out a few weeks later.",
        hero_image: "/pottery-wheel.svg",
        included_title: "What's Included",
        included_items: &[
            "Wheel-throwing taster for <strong>two people</strong>",
            "All clay, tools and aprons",
            "Glazing & firing of your best piece",
        ],
        extra_title: Some("Notes"),
        extra_items: Some(&[
            "Studio is fully booked until February",
            "We'll pick a weekend that suits you",
        ]),
        christmas: false,
        reveal: Some(RevealKind::Scratch),
        avatar_image: None,
    },
    Gift {
        slug: "fern",
        recipient_name: "Fern",
        title: "GIG TICKETS – ULSTER HALL",
        subtitle: "",
        intro: "Two tickets to the spring show, standing, down the front if \
                we queue early enough. Pre-gig dinner is on me as well.",
        hero_image: "/ulster-hall.svg",
        included_title: "What's Included",
        included_items: &[
            "<strong>Two standing tickets</strong> for the spring show",
            "Dinner beforehand, your pick",
        ],
        extra_title: None,
        extra_items: None,
        christmas: false,
        reveal: Some(RevealKind::Balloons),
        avatar_image: Some("/fern-avatar.svg"),
    },
];

/// Look up a gift by slug, case-insensitively.
pub fn gift_by_slug(slug: &str) -> Option<&'static Gift> {
    GIFTS.iter().find(|g| g.slug.eq_ignore_ascii_case(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let gift = gift_by_slug("AOIFE").expect("slug should match");
        assert_eq!(gift.recipient_name, "Aoife");
        assert!(gift_by_slug("aoife").is_some());
    }

    #[test]
    fn unknown_slug_returns_none() {
        assert!(gift_by_slug("nobody").is_none());
        assert!(gift_by_slug("").is_none());
    }

    #[test]
    fn slugs_are_unique_ignoring_case() {
        for (i, a) in GIFTS.iter().enumerate() {
            for b in GIFTS.iter().skip(i + 1) {
                assert!(!a.slug.eq_ignore_ascii_case(b.slug), "duplicate slug {}", a.slug);
            }
        }
    }

    #[test]
    fn every_mechanic_appears_in_the_table() {
        use crate::model::RevealKind::*;
        for kind in [Climb, Scratch, Unwrap, Balloons] {
            assert!(GIFTS.iter().any(|g| g.reveal_kind() == kind));
        }
    }
}
