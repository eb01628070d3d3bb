//! Static portfolio content

/// Site owner details shown in the hero and contact sections
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub const PROFILE: Profile = Profile {
    name: "Boya Siva Sai Kumar",
    headline: "Computer Science & AI Engineer",
    tagline: "Final-year B.Tech student passionate about AI, full-stack development, and turning innovative ideas into digital solutions.",
    email: "sivasai78342@gmail.com",
    phone: "+91 6300389607",
    location: "Kurnool, Andhra Pradesh, India",
    links: &[
        ("LinkedIn", "https://www.linkedin.com/in/siva-sai-251b04280"),
        ("Email", "mailto:sivasai78342@gmail.com"),
        ("GitHub", "https://github.com/siva1511"),
    ],
};

pub const BACKGROUND: &[&str] = &[
    "I'm a passionate final-year B.Tech student specializing in Computer Science and Engineering with AI at G. Pullaiah College of Engineering and Technology, Kurnool. My journey in technology began with a diploma in Mechanical Engineering, which gave me a strong foundation in problem-solving and analytical thinking.",
    "Beyond coding, I express my creativity through painting, music, and writing, which helps me approach technical challenges with innovative perspectives.",
];

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "B.Tech in CSE-AI (2022-2026)",
        institution: "G. Pullaiah College of Engineering and Technology, Kurnool",
    },
    Education {
        degree: "Diploma in Mechanical Engineering (2020-2023)",
        institution: "ESC Govt Polytechnic College Nandyal",
    },
    Education {
        degree: "SSC (2020)",
        institution: "Sri Chaithyna EM High School",
    },
];

/// A portfolio card
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub link: Option<&'static str>,
    /// Headline figures as (value, caption)
    pub stats: &'static [(&'static str, &'static str)],
    pub features: &'static [&'static str],
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "GrainPalette - Rice Grain Classification System",
        summary: "A deep learning-based classification system for different rice grain types including Arborio, Basmati, Ipsala, Jasmine, and Karacadag. Developed using TensorFlow and CNNs with a well-organized dataset and Streamlit-based user interface for predictions.",
        link: Some("https://github.com/siva1511"),
        stats: &[
            ("94%", "accuracy"),
            ("5", "models"),
            ("1K+", "datasets"),
            ("Real-time", "predictions"),
        ],
        features: &[
            "Multi-class rice grain classification",
            "Deep learning CNN architecture",
            "Interactive Streamlit web interface",
            "Comprehensive dataset management",
            "Real-time prediction capabilities",
        ],
        tags: &["Python", "TensorFlow", "Streamlit", "CNN", "Deep Learning"],
    },
    Project {
        title: "Password Manager Project",
        summary: "Full-stack application enabling secure password management and categorization. Features encryption, user authentication, and intuitive interface for managing digital credentials safely.",
        link: None,
        stats: &[],
        features: &[],
        tags: &["Full Stack", "Java", "MySQL"],
    },
];

/// How a skill group is drawn
pub enum SkillSet {
    /// Named skills with a proficiency bar
    Bars {
        skills: &'static [&'static str],
        level: f64,
    },
    Badges(&'static [&'static str]),
}

pub struct SkillGroup {
    pub title: &'static str,
    pub set: SkillSet,
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "Programming Languages",
        set: SkillSet::Bars {
            skills: &["Java", "Python", "HTML", "CSS"],
            level: 0.8,
        },
    },
    SkillGroup {
        title: "Databases",
        set: SkillSet::Bars {
            skills: &["MySQL", "MongoDB"],
            level: 0.6,
        },
    },
    SkillGroup {
        title: "Soft Skills",
        set: SkillSet::Badges(&[
            "Team Leadership",
            "Communication",
            "Problem Solving",
            "Creative Thinking",
        ]),
    },
];

/// An internship, course or certification
pub struct Experience {
    pub organization: &'static str,
    pub role: &'static str,
    pub period: Option<&'static str>,
    pub description: &'static str,
    /// Extra labelled facts, such as certificate ids
    pub details: &'static [(&'static str, &'static str)],
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        organization: "SkillDzire",
        role: "Artificial Intelligence Internship",
        period: Some("May 2025 - June 2025"),
        description: "Successfully completed a comprehensive short-term internship program focused on Artificial Intelligence technologies and applications.",
        details: &[("Certificate ID", "SDST-25-16945"), ("Duration", "6 weeks")],
    },
    Experience {
        organization: "Make Skilled",
        role: "Full Stack Development Bootcamp",
        period: None,
        description: "Comprehensive training in full-stack web development covering modern technologies and best practices.",
        details: &[],
    },
];

pub const CONTACT_BLURB: &str = "I'm always open to discussing new opportunities, innovative projects, or just having a conversation about technology and AI. Feel free to reach out!";

pub const FOOTER: &str = "© 2024 Boya Siva Sai Kumar. All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_are_fractions() {
        for group in SKILLS {
            if let SkillSet::Bars { level, skills } = &group.set {
                assert!((0.0..=1.0).contains(level));
                assert!(!skills.is_empty());
            }
        }
    }

    #[test]
    fn test_every_project_is_tagged() {
        assert!(PROJECTS.iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn test_profile_email_matches_mailto_link() {
        let mailto = PROFILE
            .links
            .iter()
            .find(|(label, _)| *label == "Email")
            .map(|(_, url)| *url);
        assert_eq!(mailto, Some(format!("mailto:{}", PROFILE.email).as_str()));
    }
}
