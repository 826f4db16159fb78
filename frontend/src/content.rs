//! Literal page content. Nothing here changes at runtime.

use crate::components::card_list::CardRecord;
use crate::components::icons::Icon;
use crate::config::image_url;

pub const NAV_ITEMS: [&str; 4] = ["Services", "About", "Results", "Reviews"];

/// In-page anchor for a nav label, e.g. `Services` -> `#services`.
pub fn section_anchor(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

pub const HERO_PHOTO: &str = "photo-1560750588-73207b1ef5b8";
pub const ABOUT_PHOTO: &str = "photo-1512290923902-8a9f81dc236c";

pub const PHONE: &str = "(555) 123-4567";
pub const ADDRESS_LINES: [&str; 2] = ["123 Aesthetic Way, Suite 100", "Beverly Hills, CA 90210"];
pub const OPENING_HOURS: &str = "Mon - Sat: 9am - 7pm";

#[derive(Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub photo: &'static str,
    pub price: &'static str,
}

pub static SERVICES: [Service; 4] = [
    Service {
        title: "Facial Rejuvenation",
        description: "Customized facials, chemical peels, and microneedling for a glowing complexion.",
        photo: "photo-1570172619644-dfd03ed5d881",
        price: "From $150",
    },
    Service {
        title: "Injectables & Fillers",
        description: "Expertly administered Botox and dermal fillers for natural-looking results.",
        photo: "photo-1612349317150-e413f6a5b16d",
        price: "From $300",
    },
    Service {
        title: "Body Contouring",
        description: "Non-invasive treatments to sculpt and tone your body with zero downtime.",
        photo: "photo-1519823551278-64ac92734fb1",
        price: "From $450",
    },
    Service {
        title: "Laser Therapy",
        description: "Advanced laser solutions for hair removal, skin tightening, and pigmentation.",
        photo: "photo-1522335789203-aabd1fc54bc9",
        price: "From $200",
    },
];

impl CardRecord for Service {
    fn label(&self) -> &'static str {
        self.title
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn image(&self) -> Option<String> {
        Some(image_url(self.photo))
    }

    fn detail(&self) -> Option<&'static str> {
        Some(self.price)
    }
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { value: "15k+", label: "Happy Clients" },
    Stat { value: "12+", label: "Years Experience" },
    Stat { value: "24", label: "Specialists" },
    Stat { value: "50+", label: "Treatments" },
];

// The figure is what the strip shows big, so it takes the label slot.
impl CardRecord for Stat {
    fn label(&self) -> &'static str {
        self.value
    }

    fn description(&self) -> &'static str {
        self.label
    }
}

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub photo: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Jenkins",
        role: "Regular Client",
        quote: "The most professional med spa I've ever visited. The results from my laser treatment were beyond my expectations.",
        photo: "photo-1438761681033-6461ffad8d80",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Skincare Enthusiast",
        quote: "The staff is incredibly knowledgeable. They took the time to explain every step of my facial rejuvenation process.",
        photo: "photo-1472099645785-5658abf4ff4e",
    },
    Testimonial {
        name: "Elena Rodriguez",
        role: "Bridal Package",
        quote: "I did the bridal glow package and my skin looked flawless on my wedding day. Highly recommend Lumina Spa!",
        photo: "photo-1544005313-94ddf0286df2",
    },
];

impl CardRecord for Testimonial {
    fn label(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.quote
    }

    fn image(&self) -> Option<String> {
        Some(image_url(self.photo))
    }

    fn detail(&self) -> Option<&'static str> {
        Some(self.role)
    }
}

#[derive(Debug, PartialEq)]
pub struct Reason {
    pub title: &'static str,
    pub description: &'static str,
}

pub static REASONS: [Reason; 3] = [
    Reason {
        title: "Expert Practitioners",
        description: "Our team consists of board-certified dermatologists and licensed aesthetic nurses.",
    },
    Reason {
        title: "Advanced Technology",
        description: "We invest in the latest FDA-approved medical devices for safe and effective results.",
    },
    Reason {
        title: "Personalized Care",
        description: "No two faces are the same. We create custom treatment plans for every individual.",
    },
];

impl CardRecord for Reason {
    fn label(&self) -> &'static str {
        self.title
    }

    fn description(&self) -> &'static str {
        self.description
    }
}

#[derive(Debug, PartialEq)]
pub struct TrustBadge {
    pub icon: Icon,
    pub label: &'static str,
}

pub static TRUST_BADGES: [TrustBadge; 4] = [
    TrustBadge { icon: Icon::ShieldCheck, label: "FDA APPROVED" },
    TrustBadge { icon: Icon::Heart, label: "BOARD CERTIFIED" },
    TrustBadge { icon: Icon::CheckCircle, label: "TOP RATED 2023" },
    TrustBadge { icon: Icon::Star, label: "5-STAR SERVICE" },
];

#[derive(Debug, PartialEq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static QUICK_LINKS: [FooterLink; 4] = [
    FooterLink { label: "Treatments", href: "#" },
    FooterLink { label: "Our Team", href: "#" },
    FooterLink { label: "Pricing", href: "#" },
    FooterLink { label: "Gift Cards", href: "#" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_anchors_are_lowercase_fragments() {
        let anchors: Vec<String> = NAV_ITEMS.iter().map(|item| section_anchor(item)).collect();
        assert_eq!(anchors, vec!["#services", "#about", "#results", "#reviews"]);
    }

    #[test]
    fn photo_cards_carry_images() {
        assert!(SERVICES.iter().all(|service| service.image().is_some()));
        assert!(TESTIMONIALS.iter().all(|testimonial| testimonial.image().is_some()));
        assert!(STATS.iter().all(|stat| stat.image().is_none()));
        assert!(REASONS.iter().all(|reason| reason.image().is_none()));
    }

    #[test]
    fn stat_figure_is_the_card_label() {
        assert_eq!(STATS[0].label(), "15k+");
        assert_eq!(STATS[0].description(), "Happy Clients");
    }

    #[test]
    fn service_price_is_the_detail() {
        let prices: Vec<_> = SERVICES.iter().filter_map(|service| service.detail()).collect();
        assert_eq!(prices, vec!["From $150", "From $300", "From $450", "From $200"]);
    }
}
