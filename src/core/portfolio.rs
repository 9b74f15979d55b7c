//! Embedded portfolio content
//!
//! All content is fixed at build time. There are no runtime operations that
//! create, delete, or mutate projects - the catalog is a static slice.

/// One portfolio item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub short_description: &'static str,
    pub full_description: &'static str,
    pub link: &'static str,
}

/// Site owner details shown on the home page and footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub biography: &'static str,
    pub github_link: &'static str,
    pub copyright: &'static str,
}

static PROJECTS: [Project; 2] = [
    Project {
        title: "EmailGenie",
        short_description: "An efficient email generation and management tool.",
        full_description: "EmailGenie is a powerful tool designed to streamline email \
            communication. It uses advanced AI algorithms to generate contextually appropriate \
            emails, manage your inbox, and organize your correspondence efficiently. With \
            features like smart categorization, automated responses, and personalized \
            templates, EmailGenie significantly reduces the time spent on email management.",
        link: "https://rahydv-email-genie-capstone-2.hf.space",
    },
    Project {
        title: "GROQ-based Website Content Diagram Generator",
        short_description: "Visualize website content structure using GROQ.",
        full_description: "This innovative tool leverages the power of GROQ \
            (Graph-Relational Object Queries) to analyze and visualize the content structure \
            of websites. It provides developers and content strategists with intuitive, \
            interactive diagrams that represent the hierarchical and relational aspects of \
            web content. This tool is particularly useful for complex content management \
            systems, helping to optimize information architecture and improve overall user \
            experience.",
        link: "https://rahydv-daigrams.hf.space",
    },
];

static PROFILE: Profile = Profile {
    name: "Rahul Yadav",
    subtitle: "Software Engineer",
    biography: "I'm a software engineer passionate about crafting efficient solutions to \
        complex challenges. With a focus on innovative technologies, I strive to create \
        impactful software that drives progress.",
    github_link: "https://github.com/dashboard",
    copyright: "\u{a9} 2024 Rahul Yadav. All rights reserved.",
};

/// The fixed project catalog, in display order
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// The site owner profile
pub fn profile() -> &'static Profile {
    &PROFILE
}
