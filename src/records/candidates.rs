#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PipelineStatus {
    Screening,
    HrReview,
    Interview,
    Offer,
}

impl PipelineStatus {
    pub const ALL: [PipelineStatus; 4] = [
        PipelineStatus::Screening,
        PipelineStatus::HrReview,
        PipelineStatus::Interview,
        PipelineStatus::Offer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PipelineStatus::Screening => "Screening",
            PipelineStatus::HrReview => "HR Review",
            PipelineStatus::Interview => "Interview",
            PipelineStatus::Offer => "Offer",
        }
    }
}

/// An applicant as seen by HR for a vacancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub current_position: &'static str,
    /// Pre-computed display percentage; nothing here derives it.
    pub match_score: u8,
    pub skills: &'static [&'static str],
    pub status: PipelineStatus,
}

impl CandidateProfile {
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub const CANDIDATES: &[CandidateProfile] = &[
    CandidateProfile {
        id: "1",
        name: "Sarah Johnson",
        current_position: "Senior Frontend Developer at Google",
        match_score: 94,
        skills: &["React", "TypeScript", "Node.js", "GraphQL"],
        status: PipelineStatus::Screening,
    },
    CandidateProfile {
        id: "2",
        name: "Michael Chen",
        current_position: "Full Stack Engineer at Meta",
        match_score: 88,
        skills: &["React", "Python", "AWS", "Docker"],
        status: PipelineStatus::HrReview,
    },
    CandidateProfile {
        id: "3",
        name: "Emily Rodriguez",
        current_position: "Frontend Lead at Stripe",
        match_score: 85,
        skills: &["React", "TypeScript", "Next.js", "Testing"],
        status: PipelineStatus::Interview,
    },
    CandidateProfile {
        id: "4",
        name: "David Kim",
        current_position: "Software Engineer at Amazon",
        match_score: 82,
        skills: &["React", "JavaScript", "Redux", "CSS"],
        status: PipelineStatus::Screening,
    },
    CandidateProfile {
        id: "5",
        name: "Jessica Taylor",
        current_position: "UI Engineer at Airbnb",
        match_score: 78,
        skills: &["React", "Vue.js", "Tailwind", "Figma"],
        status: PipelineStatus::Screening,
    },
    CandidateProfile {
        id: "6",
        name: "Alex Rivera",
        current_position: "Frontend Developer at Shopify",
        match_score: 75,
        skills: &["React", "TypeScript", "Redux", "Jest"],
        status: PipelineStatus::HrReview,
    },
    CandidateProfile {
        id: "7",
        name: "Chris Anderson",
        current_position: "Web Developer at Microsoft",
        match_score: 71,
        skills: &["React", "Angular", "TypeScript", "Azure"],
        status: PipelineStatus::Screening,
    },
    CandidateProfile {
        id: "8",
        name: "Lisa Wang",
        current_position: "Software Engineer at Netflix",
        match_score: 68,
        skills: &["React", "Node.js", "MongoDB", "Docker"],
        status: PipelineStatus::Screening,
    },
];
