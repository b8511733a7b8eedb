//! The signed-in candidate's own profile sheet.

pub struct Position {
    pub title: &'static str,
    pub organisation: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

pub const HEADLINE: &str = "Senior Software Engineer";
pub const LOCATION: &str = "San Francisco, CA";

pub const CONTACT: &[(&str, &str)] = &[
    ("Email", "john.doe@email.com"),
    ("Phone", "+1 (555) 123-4567"),
    ("LinkedIn", "linkedin.com/in/johndoe"),
    ("GitHub", "github.com/johndoe"),
];

pub const RESUME_FILE: &str = "Resume_JohnDoe_2024.pdf";
pub const RESUME_META: &str = "Updated 2 weeks ago • 245 KB";

pub const ABOUT: &str = "Experienced software engineer with 8+ years in full-stack development. \
Passionate about building scalable web applications and leading technical teams. \
Specialized in React, Node.js, and cloud technologies.";

pub const SKILLS: &[&str] = &["React", "TypeScript", "Node.js", "Python", "AWS"];

pub const EXPERIENCE: &[Position] = &[
    Position {
        title: "Senior Software Engineer",
        organisation: "TechCorp Inc.",
        period: "2020 - Present • 4 years",
        summary: "Led development of cloud-based SaaS platform serving 100k+ users. \
Managed team of 5 engineers and improved system performance by 40%.",
    },
    Position {
        title: "Software Engineer",
        organisation: "StartupXYZ",
        period: "2017 - 2020 • 3 years",
        summary: "Built and maintained multiple web applications using React and Node.js. \
Implemented CI/CD pipelines and automated testing.",
    },
];

pub const EDUCATION: &[Position] = &[Position {
    title: "Bachelor of Science in Computer Science",
    organisation: "University of California, Berkeley",
    period: "2013 - 2017",
    summary: "",
}];

/// (name, issuer and year)
pub const CERTIFICATIONS: &[(&str, &str)] = &[
    ("AWS Certified Solutions Architect", "Amazon Web Services • 2023"),
    ("Professional Scrum Master I", "Scrum.org • 2022"),
];
