//! Static copy for the landing page. Everything here is read during render and
//! never mutated.

use crate::config;

/// Scroll-addressable regions of the page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Hero,
    Services,
    Process,
    Work,
    About,
    Pricing,
    Faq,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::Services,
        Section::Process,
        Section::Work,
        Section::About,
        Section::Pricing,
        Section::Faq,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Services => "services",
            Section::Process => "process",
            Section::Work => "work",
            Section::About => "about",
            Section::Pricing => "pricing",
            Section::Faq => "faq",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Sections tagged `data-animate` fade in the first time they enter the viewport.
    pub fn animates(self) -> bool {
        matches!(self, Section::Process | Section::About | Section::Contact)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Section,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingPlan {
    pub title: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    /// Highlighted card.
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AboutFact {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterLink {
    pub label: &'static str,
    pub target: Section,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [FooterLink],
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Services", target: Section::Services },
    NavLink { label: "Process", target: Section::Process },
    NavLink { label: "Work", target: Section::Work },
    NavLink { label: "About", target: Section::About },
    NavLink { label: "Pricing", target: Section::Pricing },
    NavLink { label: "FAQ", target: Section::Faq },
    NavLink { label: "Contact", target: Section::Contact },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Website Design & Rebuilds",
        description: "Fast, mobile-first and SEO-ready websites that convert visitors into customers.",
        icon: "🚀",
    },
    Service {
        title: "SEO & Search Optimisation",
        description: "Keyword research, on-page improvements, and technical fixes to boost your rankings.",
        icon: "📈",
    },
    Service {
        title: "Monthly Analytics & Reporting",
        description: "GA4 & Search Console reports explained in simple language you can act on.",
        icon: "📊",
    },
    Service {
        title: "Website Care & Performance",
        description: "Speed optimisation, security updates, and monthly maintenance for peak performance.",
        icon: "⚙️",
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Discovery Call",
        description: "Understand your business goals and current challenges",
        icon: "🎯",
    },
    ProcessStep {
        step: "02",
        title: "Audit & Proposal",
        description: "Analyze your site and provide a detailed action plan",
        icon: "📊",
    },
    ProcessStep {
        step: "03",
        title: "Implementation",
        description: "Execute the strategy with precision and care",
        icon: "⚡",
    },
    ProcessStep {
        step: "04",
        title: "Monthly Growth",
        description: "Track results and optimize for continuous improvement",
        icon: "📈",
    },
];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "Amplifyd — Software Engineering",
        description: "Working as a software engineer on a large-scale platform. Focused on building high-performance features, API integrations, dynamic UI components, and system-level enhancements to support business scaling.",
    },
    CaseStudy {
        title: "Ansely (UK Client) — Web Application",
        description: "Developed complete web application setup including UI/UX, modular components, backend logic, and deployment. Improved performance and conversions for UK-based service operations.",
    },
    CaseStudy {
        title: "Amplifyd — SEO, Analytics & Ads",
        description: "Managed SEO strategy, Google Analytics (GA4) tracking, Google Ads campaigns, performance dashboards, and real-time reporting automation. Delivered measurable growth in visibility and user acquisition.",
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm Dirushan, a Software Engineering graduate from the University of Kelaniya (GPA 3.23). I specialise in building fast SEO-friendly websites, improving search rankings, and providing clear monthly analytics reports for small European businesses.",
    "With a technical background, I focus on clean, data-driven solutions and reliable personal support. My mission is to help European businesses grow their online presence with websites they can trust.",
];

pub const ABOUT_BADGES: &[&str] = &[
    "Technical Degree",
    "SEO + Analytics Expertise",
    "Fast Communication",
    "EU-Friendly Time Zones",
];

pub const ABOUT_FACTS: &[AboutFact] = &[
    AboutFact { icon: "📍", label: "Location", value: "Sri Lanka (EU Hours)" },
    AboutFact { icon: "🎓", label: "Education", value: "BSc (Hons) Software Engineering" },
];

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        title: "Starter SEO & Analytics",
        price: "€300",
        period: "/month",
        features: &[
            "On-page SEO fixes",
            "Keyword insights & recommendations",
            "Monthly GA4 report",
            "Email support",
        ],
        featured: false,
    },
    PricingPlan {
        title: "Website + SEO Setup",
        price: "€700",
        period: "one-time",
        features: &[
            "5–6 page website",
            "SEO structure & technical setup",
            "Speed optimisation",
            "GA4 & Search Console connected",
        ],
        featured: true,
    },
];

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "How long does a website project take?",
        answer: "Typically 3-4 weeks from kickoff to launch, depending on complexity and revisions.",
    },
    FaqEntry {
        question: "Do you work with European clients?",
        answer: "Yes! I specialise in serving European small businesses. I'm in Sri Lanka but work EU-friendly hours.",
    },
    FaqEntry {
        question: "What is included in SEO?",
        answer: "Keyword research, on-page optimisation, technical SEO fixes, internal linking, and performance monitoring.",
    },
    FaqEntry {
        question: "How often do I get reports?",
        answer: "Monthly reports delivered via email with clear insights and recommendations you can act on.",
    },
    FaqEntry {
        question: "Do you require long contracts?",
        answer: "No contracts. Starter plans are month-to-month. Website builds are one-time projects with fixed pricing.",
    },
    FaqEntry {
        question: "Can you work on my existing website?",
        answer: "Absolutely. I can audit, optimise, and rebuild any existing site for better performance and SEO.",
    },
];

pub const CONTACT_CARDS: &[ContactCard] = &[
    ContactCard {
        icon: "📱",
        title: "Phone / WhatsApp",
        value: config::PHONE_DISPLAY,
        link: Some(config::TEL_URI),
    },
    ContactCard {
        icon: "✉️",
        title: "Email Response",
        value: "Within 24 hours",
        link: None,
    },
    ContactCard {
        icon: "⏰",
        title: "Working Hours",
        value: "EU Friendly Times",
        link: None,
    },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Services",
        links: &[
            FooterLink { label: "Website Design", target: Section::Services },
            FooterLink { label: "SEO Optimisation", target: Section::Services },
            FooterLink { label: "Analytics & Reports", target: Section::Services },
            FooterLink { label: "Website Maintenance", target: Section::Services },
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            FooterLink { label: "About", target: Section::About },
            FooterLink { label: "Process", target: Section::Process },
            FooterLink { label: "Pricing", target: Section::Pricing },
            FooterLink { label: "FAQ", target: Section::Faq },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("testimonials"), None);
    }

    #[test]
    fn nav_links_cover_every_section_but_hero() {
        let targets: HashSet<Section> = NAV_LINKS.iter().map(|link| link.target).collect();
        assert_eq!(NAV_LINKS.len(), 7);
        assert_eq!(targets.len(), 7);
        assert!(!targets.contains(&Section::Hero));
    }

    #[test]
    fn only_process_about_and_contact_animate() {
        let animated: Vec<Section> = Section::ALL.into_iter().filter(|s| s.animates()).collect();
        assert_eq!(animated, vec![Section::Process, Section::About, Section::Contact]);
    }

    #[test]
    fn fixed_item_counts() {
        assert_eq!(SERVICES.len(), 4);
        assert_eq!(PROCESS_STEPS.len(), 4);
        assert_eq!(CASE_STUDIES.len(), 3);
        assert_eq!(FAQ_ENTRIES.len(), 6);
        assert_eq!(CONTACT_CARDS.len(), 3);
        assert_eq!(ABOUT_BADGES.len(), 4);
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        let labels: Vec<&str> = PROCESS_STEPS.iter().map(|s| s.step).collect();
        assert_eq!(labels, ["01", "02", "03", "04"]);
    }

    #[test]
    fn pricing_has_monthly_and_one_time_plans() {
        assert_eq!(PRICING_PLANS.len(), 2);

        let starter = &PRICING_PLANS[0];
        assert_eq!((starter.price, starter.period), ("€300", "/month"));
        assert_eq!(starter.features.len(), 4);
        assert!(!starter.featured);

        let setup = &PRICING_PLANS[1];
        assert_eq!((setup.price, setup.period), ("€700", "one-time"));
        assert_eq!(setup.features.len(), 4);
        assert!(setup.featured);
    }

    #[test]
    fn only_the_phone_card_links_out() {
        let linked: Vec<&str> = CONTACT_CARDS
            .iter()
            .filter_map(|card| card.link)
            .collect();
        assert_eq!(linked, [config::TEL_URI]);
        assert_eq!(CONTACT_CARDS[0].value, config::PHONE_DISPLAY);
    }
}
