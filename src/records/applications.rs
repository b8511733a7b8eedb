#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationStatus {
    Applied,
    Screening,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Screening => "In Screening",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Offer => "Offer Received",
            ApplicationStatus::Rejected => "Not Selected",
        }
    }

    /// Still moving through the pipeline.
    pub fn is_active(self) -> bool {
        !matches!(self, ApplicationStatus::Rejected | ApplicationStatus::Offer)
    }

    /// Counted on the "Active" tile and tab badge. Unlike the tab's list,
    /// this includes offers.
    pub fn is_open(self) -> bool {
        self != ApplicationStatus::Rejected
    }
}

/// One of the signed-in candidate's submitted applications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: &'static str,
    pub job_title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub applied_on: &'static str,
    pub status: ApplicationStatus,
    pub current_stage: &'static str,
    /// Pipeline progress in percent.
    pub progress: u8,
    pub next_step: Option<&'static str>,
    pub interview_on: Option<&'static str>,
}

pub const APPLICATIONS: &[Application] = &[
    Application {
        id: "1",
        job_title: "Senior Software Engineer",
        company: "TechCorp Inc.",
        location: "San Francisco, CA",
        applied_on: "2024-10-25",
        status: ApplicationStatus::Interview,
        current_stage: "Technical Interview",
        progress: 75,
        next_step: Some("Final Round Interview"),
        interview_on: Some("2024-11-05"),
    },
    Application {
        id: "2",
        job_title: "Product Designer",
        company: "Design Studio",
        location: "Remote",
        applied_on: "2024-10-28",
        status: ApplicationStatus::Screening,
        current_stage: "Resume Review",
        progress: 50,
        next_step: Some("Portfolio Review"),
        interview_on: None,
    },
    Application {
        id: "3",
        job_title: "Frontend Developer",
        company: "WebDev Solutions",
        location: "Austin, TX",
        applied_on: "2024-10-30",
        status: ApplicationStatus::Applied,
        current_stage: "Application Submitted",
        progress: 25,
        next_step: None,
        interview_on: None,
    },
    Application {
        id: "4",
        job_title: "Full Stack Developer",
        company: "StartupXYZ",
        location: "New York, NY",
        applied_on: "2024-10-20",
        status: ApplicationStatus::Offer,
        current_stage: "Offer Extended",
        progress: 100,
        next_step: Some("Decision deadline: Nov 10"),
        interview_on: None,
    },
    Application {
        id: "5",
        job_title: "UI/UX Designer",
        company: "Creative Agency",
        location: "Los Angeles, CA",
        applied_on: "2024-10-15",
        status: ApplicationStatus::Rejected,
        current_stage: "Application Rejected",
        progress: 0,
        next_step: None,
        interview_on: None,
    },
];
