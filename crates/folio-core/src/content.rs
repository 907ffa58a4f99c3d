//! Static site content.

use crate::background::{ACCENT_COLOR, CYAN_COLOR, CardSpec};
use crate::tween::Rgb;

/// Icons referenced by content. The client maps these onto its icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    GraduationCap,
    Briefcase,
    Users,
    Video,
    FileText,
    Film,
    Code,
    Globe,
    Database,
    Brain,
    Zap,
    Github,
    Linkedin,
    Twitter,
    Mail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub full_name: &'static str,
    pub initials: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub resume: &'static str,
    pub about: &'static str,
    pub status: &'static [&'static str],
    pub focus: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    first_name: "Utkarsh",
    last_name: "Gupta",
    full_name: "Utkarsh Kumar Gupta",
    initials: "UG",
    title: "Full-Stack Developer",
    location: "Bengaluru, India",
    image: "/profile-placeholder.jpg",
    resume: "/resume.pdf",
    about: "Computer Science Student & Full Stack Developer with knowledge of Gen AI. \
            I build modern web applications and love solving real-world problems with code. \
            Besides development, I am also skilled in Data Structures & Algorithms and \
            practice daily LeetCode problems with Java.",
    status: &["Available for work", "Open to freelance"],
    focus: &["Full-Stack Development", "DSA & Problem Solving"],
};

/// A navbar entry; `section` is the element id scrolled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub section: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", section: "home" },
    NavItem { name: "Education", section: "education" },
    NavItem { name: "Experience", section: "experience" },
    NavItem { name: "Projects", section: "projects" },
    NavItem { name: "Skills", section: "skills" },
    NavItem { name: "Contact", section: "contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

impl SocialLink {
    /// `mailto:` links open in place; everything else in a new tab.
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub const GITHUB_URL: &str = "https://github.com/utkarsh240";

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Resume",
        href: "/resume.pdf",
        icon: Icon::FileText,
    },
    SocialLink {
        label: "X",
        href: "https://x.com/utkarshh_24",
        icon: Icon::Twitter,
    },
    SocialLink {
        label: "GitHub",
        href: GITHUB_URL,
        icon: Icon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/utkarsh-gupta-53647b217",
        icon: Icon::Linkedin,
    },
    SocialLink {
        label: "Email",
        href: "mailto:utkarsh@example.com",
        icon: Icon::Mail,
    },
];

/// Links in the footer: the hero links minus resume and email.
pub fn footer_links() -> impl Iterator<Item = &'static SocialLink> {
    SOCIAL_LINKS
        .iter()
        .filter(|l| matches!(l.icon, Icon::Github | Icon::Linkedin | Icon::Twitter))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub logo: Option<&'static str>,
    pub icon: Icon,
}

pub const EDUCATION: &[Education] = &[Education {
    institution: "KIIT University",
    degree: "B.Tech Computer Science and Engineering",
    period: "2021 - 2025",
    description: "Pursuing Bachelor of Technology in Computer Science and Engineering with focus \
                  on software development, algorithms, and emerging technologies.",
    logo: Some("/kiit-logo.jpg"),
    icon: Icon::GraduationCap,
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Ekaant",
        role: "Software Developer Intern",
        period: "May 2024 - July 2024",
        description: "Worked on scalable web applications using React.js, Tailwind CSS, \
                      TypeScript, Docker, and AWS. Collaborated with cross-functional teams to \
                      deliver robust solutions.",
        icon: Icon::Briefcase,
    },
    Experience {
        company: "WebXstreet",
        role: "Cofounder",
        period: "Feb 2022 - March 2023",
        description: "Co-founded a web solutions startup, leading product development, client \
                      acquisition, and project delivery. Specialized in modern web technologies \
                      and business growth.",
        icon: Icon::Users,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub repository: &'static str,
    pub icon: Icon,
}

impl Project {
    /// Features shown on the card.
    pub fn highlights(&self) -> &'static [&'static str] {
        &self.features[..self.features.len().min(3)]
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Screensend",
        category: "Full Stack",
        description: "Full-stack screen recording & video sharing platform built with Next.js, \
                      Bunny.net & Arcjet. Features Better Auth, video uploads, sharing via link, \
                      privacy settings, AI transcripts, and more.",
        technologies: &["Next.js", "TypeScript", "Bunny.net", "Arcjet", "Better Auth"],
        features: &[
            "Screen recording & video sharing",
            "Privacy settings & link sharing",
            "AI transcripts & Better Auth",
            "Video upload with Bunny.net",
        ],
        repository: "https://github.com/utkarsh240/screensend",
        icon: Icon::Video,
    },
    Project {
        title: "PDF Analysis",
        category: "AI/ML",
        description: "Built a PDF-based question answering system using Streamlit, LangChain, \
                      OpenAI (GPT-4), and Qdrant for intelligent document analysis.",
        technologies: &["Python", "Streamlit", "LangChain", "OpenAI GPT-4", "Qdrant"],
        features: &[
            "PDF document processing",
            "Question answering with GPT-4",
            "Vector search with Qdrant",
            "Interactive Streamlit interface",
        ],
        repository: "https://github.com/utkarsh240/Pdf_analysis",
        icon: Icon::FileText,
    },
    Project {
        title: "FilmFinder",
        category: "Frontend",
        description: "Developed a responsive movie discovery app using React.js, Tailwind CSS, \
                      and Vite, integrated with the TMDB API for real-time movie data.",
        technologies: &["React.js", "Tailwind CSS", "Vite", "TMDB API"],
        features: &[
            "Movie discovery & search",
            "Real-time data from TMDB API",
            "Responsive design",
            "Fast Vite build system",
        ],
        repository: "https://github.com/utkarsh240/FilmFinder",
        icon: Icon::Film,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming Languages",
        icon: Icon::Code,
        skills: &["Java", "JavaScript", "TypeScript", "Python"],
    },
    SkillCategory {
        title: "Web Technologies",
        icon: Icon::Globe,
        skills: &[
            "React.js",
            "Next.js",
            "Express.js",
            "Tailwind CSS",
            "Node.js",
            "HTML",
            "CSS",
            "Streamlit",
        ],
    },
    SkillCategory {
        title: "Databases",
        icon: Icon::Database,
        skills: &["MongoDB", "SQL", "Qdrant"],
    },
    SkillCategory {
        title: "AI/ML & APIs",
        icon: Icon::Brain,
        skills: &["OpenAI GPT-4", "LangChain", "LangGraph"],
    },
    SkillCategory {
        title: "Tools/Platforms",
        icon: Icon::Zap,
        skills: &[
            "Git",
            "GitHub",
            "Postman",
            "Docker",
            "Vercel",
            "Vite",
            "Bunny.net",
            "Arcjet",
            "Better Auth",
        ],
    },
];

/// Labels dropped into the background scene.
pub const BACKGROUND_LABELS: &[&str] = &["React.js", "Next.js", "TypeScript", "Python", "Java"];

/// One card per background label, alternating accent colours.
pub fn background_cards() -> Vec<CardSpec> {
    const PALETTE: [Rgb; 2] = [CYAN_COLOR, ACCENT_COLOR];
    BACKGROUND_LABELS
        .iter()
        .zip(PALETTE.iter().cycle())
        .map(|(label, color)| CardSpec::for_label(label, *color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_are_unique() {
        let mut sections: Vec<_> = NAV_ITEMS.iter().map(|n| n.section).collect();
        sections.sort_unstable();
        sections.dedup();
        assert_eq!(sections.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_project_highlights_capped() {
        for project in PROJECTS {
            assert!(project.highlights().len() <= 3);
            assert!(!project.technologies.is_empty());
            assert!(project.repository.starts_with("https://github.com/"));
        }
    }

    #[test]
    fn test_footer_links() {
        let labels: Vec<_> = footer_links().map(|l| l.label).collect();
        assert_eq!(labels, vec!["X", "GitHub", "LinkedIn"]);
        assert!(SOCIAL_LINKS.iter().any(|l| !l.opens_new_tab()));
    }

    #[test]
    fn test_background_cards() {
        let cards = background_cards();
        assert_eq!(cards.len(), BACKGROUND_LABELS.len());
        assert_eq!(cards[0].color, CYAN_COLOR);
        assert_eq!(cards[1].color, ACCENT_COLOR);
    }
}
