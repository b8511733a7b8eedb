/// A posting on the candidate job board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub salary: &'static str,
    pub kind: &'static str,
    pub experience: &'static str,
    pub posted: &'static str,
    pub skills: &'static [&'static str],
    pub description: &'static str,
    /// One-step application straight from the board.
    pub quick_apply: bool,
}

impl JobListing {
    /// Salary band in thousands, parsed from strings like `$120k - $180k`.
    pub fn salary_band_k(&self) -> Option<(u32, u32)> {
        let mut bounds = self.salary.split('-').map(|part| {
            part.trim()
                .trim_start_matches('$')
                .trim_end_matches(['k', 'K', '+'])
                .trim()
                .parse::<u32>()
                .ok()
        });
        let low = bounds.next()??;
        let high = match bounds.next() {
            Some(high) => high?,
            None => low,
        };
        Some((low, high))
    }
}

pub const JOB_LISTINGS: &[JobListing] = &[
    JobListing {
        id: "1",
        title: "Senior Software Engineer",
        company: "TechCorp Inc.",
        location: "San Francisco, CA",
        salary: "$120k - $180k",
        kind: "Full-time",
        experience: "5+ years",
        posted: "2 days ago",
        skills: &["React", "TypeScript", "Node.js", "AWS"],
        description: "We are looking for a senior software engineer to join our platform team...",
        quick_apply: true,
    },
    JobListing {
        id: "2",
        title: "Product Designer",
        company: "Design Studio",
        location: "Remote",
        salary: "$90k - $130k",
        kind: "Full-time",
        experience: "3+ years",
        posted: "1 week ago",
        skills: &["Figma", "UI/UX", "User Research", "Prototyping"],
        description: "Join our design team to create beautiful user experiences...",
        quick_apply: true,
    },
    JobListing {
        id: "3",
        title: "Data Scientist",
        company: "Analytics Pro",
        location: "New York, NY",
        salary: "$110k - $160k",
        kind: "Full-time",
        experience: "4+ years",
        posted: "3 days ago",
        skills: &["Python", "Machine Learning", "SQL", "TensorFlow"],
        description: "Help us build AI-powered analytics solutions for enterprise clients...",
        quick_apply: false,
    },
    JobListing {
        id: "4",
        title: "Frontend Developer",
        company: "WebDev Solutions",
        location: "Austin, TX",
        salary: "$85k - $120k",
        kind: "Full-time",
        experience: "2+ years",
        posted: "5 days ago",
        skills: &["React", "JavaScript", "CSS", "HTML"],
        description: "Build modern web applications with the latest technologies...",
        quick_apply: true,
    },
    JobListing {
        id: "5",
        title: "DevOps Engineer",
        company: "Cloud Systems",
        location: "Seattle, WA",
        salary: "$100k - $150k",
        kind: "Full-time",
        experience: "3+ years",
        posted: "1 day ago",
        skills: &["Docker", "Kubernetes", "AWS", "CI/CD"],
        description: "Manage and optimize our cloud infrastructure...",
        quick_apply: true,
    },
    JobListing {
        id: "6",
        title: "Marketing Manager",
        company: "Growth Co.",
        location: "Boston, MA",
        salary: "$75k - $110k",
        kind: "Full-time",
        experience: "4+ years",
        posted: "1 week ago",
        skills: &["Digital Marketing", "SEO", "Content Strategy", "Analytics"],
        description: "Lead our marketing initiatives and drive growth...",
        quick_apply: false,
    },
];
