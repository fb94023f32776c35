//! Static site content.

use crate::typewriter::{Fragment, Segment};

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub images: &'static [&'static str],
    pub skills: &'static [&'static str],
}

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub color: &'static str,
    pub new_tab: bool,
}

pub const OWNER_NAME: &str = "Joshua";

pub const PROJECTS: &[Project] = &[
    Project {
        title: "JeepSieLog – Jeepney Travel Time Tracking System",
        description: "Tracks how long jeepneys take to travel between waiting areas, \
            giving commuters and planners data on the efficiency of a common mode of \
            public transportation.",
        images: &[
            "jeepsielog/1.png",
            "jeepsielog/2.png",
            "jeepsielog/3.png",
            "jeepsielog/4.png",
            "jeepsielog/5.png",
            "jeepsielog/6.png",
            "jeepsielog/7.png",
            "jeepsielog/8.png",
        ],
        skills: &["React Js", "JavaScript (ES6+)", "CSS3", "Google Maps API", "Geolocation API"],
    },
    Project {
        title: "NIA Employee Documents Management",
        description: "Central store for National Irrigation Administration employee \
            records with access control and automated document workflows.",
        images: &[
            "nia/1.png",
            "nia/2.png",
            "nia/3.png",
            "nia/4.png",
            "nia/5.png",
            "nia/6.png",
            "nia/7.png",
            "nia/8.png",
            "nia/9.png",
        ],
        skills: &["React Js", "JavaScript (ES6+)", "TailwindCSS", "Node.js", "Express.js", "MariaDB"],
    },
    Project {
        title: "Fluiguard - Sustainable Hybrid Control of Water Aeration System for Aquaponics",
        description: "Hybrid aeration controller for aquaponics that watches tilapia \
            behavior in real time and adjusts oxygenation to balance fish welfare \
            against energy use.",
        images: &[
            "fluiguard/1.png",
            "fluiguard/2.png",
            "fluiguard/3.png",
            "fluiguard/4.png",
            "fluiguard/5.png",
            "fluiguard/6.png",
            "fluiguard/7.png",
            "fluiguard/8.png",
            "fluiguard/9.png",
            "fluiguard/10.png",
        ],
        skills: &["Python", "Raspberry", "IoT", "Machine Learning", "Data Analysis", "Hardware Integration"],
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend Development",
        skills: &["React.js", "JavaScript (ES6+)", "HTML5", "CSS3", "TailwindCSS"],
    },
    SkillCategory {
        name: "Backend Development",
        skills: &["Node.js", "Express.js", "Php", "Laravel", "MariaDB"],
    },
    SkillCategory {
        name: "Tools & Technologies",
        skills: &["Git & GitHub", "RESTful APIs", "Google Maps API", "IoT & Raspberry Pi", "Machine Learning"],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Download CV",
        href: "/resume.pdf",
        color: "#3b82f6",
        new_tab: false,
    },
    SocialLink {
        label: "Facebook",
        href: "https://www.facebook.com/joshua.linaii",
        color: "#1877f2",
        new_tab: true,
    },
    SocialLink {
        label: "Email",
        href: "mailto:lina.joshuacruz@gmail.com",
        color: "#ea4335",
        new_tab: false,
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/AmbotheGreat",
        color: "#333",
        new_tab: true,
    },
];

const HEADLINE_ACCENT: &str = "headline-accent";

/// Fragments cycled by the home page headline.
pub fn headline_fragments() -> Vec<Fragment> {
    ["An aspiring ", "A passionate ", "A growing ", "A modern "]
        .into_iter()
        .map(|lead| {
            vec![
                Segment::plain(lead),
                Segment::styled("Web Developer", HEADLINE_ACCENT),
            ]
        })
        .collect()
}
