//! Static portfolio content. Data only, no behavior beyond lookups.

use colored::Color;

pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub blurb: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    pub resume_path: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Arman Rafiee",
    tagline: "Full-Stack Developer & Student",
    blurb: "Passionate developer studying at the University of Florida, \
            building innovative solutions with modern technologies.",
    email: "arman.rafiee99@gmail.com",
    github_url: "https://github.com/armand0e",
    linkedin_url: "https://linkedin.com/in/arman-rafiee-0601ba235",
    resume_path: "/resume.pdf",
};

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        label: "Years Coding",
        value: "5+",
    },
    Stat {
        label: "Technologies",
        value: "15+",
    },
    Stat {
        label: "Projects",
        value: "20+",
    },
    Stat {
        label: "Coffee Cups",
        value: "Infinity",
    },
];

pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Full-Stack Developer",
        description: "Building modern web applications with React, Next.js, and Python",
    },
    Highlight {
        title: "UF Student",
        description: "Studying Microbiology & Cell Science with CS Engineering minor",
    },
    Highlight {
        title: "Problem Solver",
        description: "Hardware troubleshooting, system administration, and innovation",
    },
];

pub struct FeaturedProject {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: &'static str,
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
}

pub const CATEGORIES: [&str; 7] = [
    "All",
    "Web Development",
    "Full-Stack",
    "System Administration",
    "Data Science",
    "Mobile",
    "Game Development",
];

pub const FEATURED_PROJECTS: [FeaturedProject; 4] = [
    FeaturedProject {
        title: "Portfolio Website",
        description: "A modern, multi-page portfolio built with Next.js, shadcn/ui, and \
                      Framer Motion. Features responsive design, dark mode, and smooth \
                      animations.",
        technologies: &[
            "Next.js",
            "TypeScript",
            "Tailwind CSS",
            "Framer Motion",
            "shadcn/ui",
        ],
        category: "Web Development",
        github: Some("https://github.com/armand0e/portfolio"),
        live: Some("https://arman-rafiee.vercel.app"),
    },
    FeaturedProject {
        title: "FastlyFixed Business Platform",
        description: "Complete business management system for my tech repair company, \
                      handling customer management, inventory tracking, and service \
                      scheduling.",
        technologies: &["Python", "Django", "PostgreSQL", "HTML/CSS", "JavaScript"],
        category: "Full-Stack",
        github: None,
        live: None,
    },
    FeaturedProject {
        title: "Smart Home Server",
        description: "Custom-built home server with GPU mining capabilities, \
                      network-attached storage, and automated backup systems.",
        technologies: &["Linux", "Docker", "Python", "Bash", "Networking"],
        category: "System Administration",
        github: None,
        live: None,
    },
    FeaturedProject {
        title: "Academic Research Tools",
        description: "Data analysis and visualization tools for microbiology research, \
                      helping streamline lab data processing and statistical analysis.",
        technologies: &["Python", "Pandas", "Matplotlib", "Jupyter", "NumPy"],
        category: "Data Science",
        github: None,
        live: None,
    },
];

pub fn projects_in(category: &str) -> Vec<&'static FeaturedProject> {
    FEATURED_PROJECTS
        .iter()
        .filter(|p| category == "All" || p.category == category)
        .collect()
}

pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub kind: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

pub const EXPERIENCE: [ExperienceEntry; 2] = [
    ExperienceEntry {
        title: "Audio Visual Technician",
        company: "Professional Events",
        period: "2020 - Present",
        kind: "Professional Employment",
        location: "Florida",
        description: "Set up and ran conferences and conventions throughout Florida, \
                      including high-profile events for major organizations.",
        skills: &[
            "Event Management",
            "Audio/Visual Equipment",
            "Team Coordination",
            "Problem Solving",
        ],
    },
    ExperienceEntry {
        title: "Engineering Shadowing Program",
        company: "Motorola Solutions",
        period: "Summer 2019",
        kind: "Internship",
        location: "Florida",
        description: "Intensive week-long program shadowing electrical engineers and \
                      participating in hands-on technical activities.",
        skills: &[
            "Electrical Engineering",
            "Radio Technology",
            "Testing Procedures",
            "Technical Documentation",
        ],
    },
];

pub struct SpokenLanguage {
    pub name: &'static str,
    pub level: &'static str,
}

pub const SPOKEN_LANGUAGES: [SpokenLanguage; 3] = [
    SpokenLanguage {
        name: "English",
        level: "Native",
    },
    SpokenLanguage {
        name: "Spanish",
        level: "Conversational",
    },
    SpokenLanguage {
        name: "Farsi",
        level: "Conversational",
    },
];

pub struct Milestone {
    pub title: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: [Milestone; 6] = [
    Milestone {
        title: "IB Diploma Program Graduate",
        description: "Completed the rigorous International Baccalaureate program",
    },
    Milestone {
        title: "High School National Science Honor Society",
        description: "Selected for outstanding academic performance in science",
    },
    Milestone {
        title: "FAU Math Competition - 47th Place",
        description: "Ranked 47th out of 500 elite students in mathematics",
    },
    Milestone {
        title: "FastlyFixed Founder & Owner",
        description: "Founded company specializing in iPhone, iPod, and iPad screen repairs",
    },
    Milestone {
        title: "Custom Electric Guitar Build",
        description: "IB Personal Project: Built Gibson Explorer from two wood slabs",
    },
    Milestone {
        title: "GPU Mining Rig & Home Server",
        description: "Built custom cryptocurrency mining rig and network server",
    },
];

pub fn language_color(language: &str) -> Color {
    match language {
        "JavaScript" => Color::Yellow,
        "TypeScript" => Color::Blue,
        "Python" => Color::Green,
        "Java" => Color::BrightRed,
        "C++" => Color::Magenta,
        "HTML" => Color::Red,
        "CSS" => Color::BrightBlue,
        "Shell" => Color::BrightBlack,
        "Go" => Color::Cyan,
        "Rust" => Color::BrightYellow,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::{projects_in, FEATURED_PROJECTS};

    #[test]
    fn all_category_keeps_every_project() {
        assert_eq!(projects_in("All").len(), FEATURED_PROJECTS.len());
    }

    #[test]
    fn category_filter_is_exact() {
        let projects = projects_in("Web Development");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Portfolio Website");
    }

    #[test]
    fn unknown_category_yields_nothing() {
        assert!(projects_in("Basket Weaving").is_empty());
    }
}
