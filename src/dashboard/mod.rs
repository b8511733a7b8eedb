//! Role-specific dashboard shells.
//!
//! A shell owns the active sidebar section and the state of the one view
//! mounted for it. Switching sections drops the old view and mounts a fresh
//! one, so nothing survives leaving a section.

use crate::auth::Role;
use crate::views::{
    CandidateList, JobBoard, MyApplications, MyProfile, UserManagement, VacancyTable, VacancyWizard,
};

/// A sidebar entry that knows how to mount its view.
pub trait Section: Copy + PartialEq + Sized + 'static {
    type Content;
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
    fn mount(self) -> Self::Content;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Sidebar,
    Content,
}

pub struct Shell<S: Section> {
    section: S,
    pub content: S::Content,
    pub pane: Pane,
}

impl<S: Section> Shell<S> {
    pub fn new(section: S) -> Self {
        Self {
            section,
            content: section.mount(),
            pane: Pane::Sidebar,
        }
    }

    pub fn section(&self) -> S {
        self.section
    }

    fn index(&self) -> usize {
        S::ALL.iter().position(|s| *s == self.section).unwrap_or(0)
    }

    /// Mount `section`, discarding whatever the previous view held.
    pub fn select(&mut self, section: S) {
        tracing::debug!(section = section.label(), "section mounted");
        self.section = section;
        self.content = section.mount();
    }

    pub fn select_next(&mut self) {
        let next = (self.index() + 1) % S::ALL.len();
        self.select(S::ALL[next]);
    }

    pub fn select_prev(&mut self) {
        let len = S::ALL.len();
        let prev = (self.index() + len - 1) % len;
        self.select(S::ALL[prev]);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSection {
    Profile,
    Applications,
    Jobs,
    Settings,
}

pub enum CandidateContent {
    Profile(MyProfile),
    Applications(MyApplications),
    Jobs(JobBoard),
    Settings,
}

impl Section for CandidateSection {
    type Content = CandidateContent;
    const ALL: &'static [Self] = &[
        CandidateSection::Profile,
        CandidateSection::Applications,
        CandidateSection::Jobs,
        CandidateSection::Settings,
    ];

    fn label(self) -> &'static str {
        match self {
            CandidateSection::Profile => "My Profile",
            CandidateSection::Applications => "My Applications",
            CandidateSection::Jobs => "Job Board",
            CandidateSection::Settings => "Settings",
        }
    }

    fn mount(self) -> CandidateContent {
        match self {
            CandidateSection::Profile => CandidateContent::Profile(MyProfile::new()),
            CandidateSection::Applications => CandidateContent::Applications(MyApplications::new()),
            CandidateSection::Jobs => CandidateContent::Jobs(JobBoard::new()),
            CandidateSection::Settings => CandidateContent::Settings,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrSection {
    Dashboard,
    Vacancies,
    Candidates,
    Analytics,
    Templates,
    Settings,
}

pub enum HrContent {
    Home(VacancyTable),
    Wizard(VacancyWizard),
    Candidates(CandidateList),
    Analytics,
    Templates,
    Settings,
}

impl Section for HrSection {
    type Content = HrContent;
    const ALL: &'static [Self] = &[
        HrSection::Dashboard,
        HrSection::Vacancies,
        HrSection::Candidates,
        HrSection::Analytics,
        HrSection::Templates,
        HrSection::Settings,
    ];

    fn label(self) -> &'static str {
        match self {
            HrSection::Dashboard => "Dashboard",
            HrSection::Vacancies => "My Vacancies",
            HrSection::Candidates => "Candidates",
            HrSection::Analytics => "Analytics",
            HrSection::Templates => "Templates",
            HrSection::Settings => "Settings",
        }
    }

    fn mount(self) -> HrContent {
        match self {
            HrSection::Dashboard => HrContent::Home(VacancyTable::new()),
            HrSection::Vacancies => HrContent::Wizard(VacancyWizard::new()),
            HrSection::Candidates => HrContent::Candidates(CandidateList::new()),
            HrSection::Analytics => HrContent::Analytics,
            HrSection::Templates => HrContent::Templates,
            HrSection::Settings => HrContent::Settings,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Dashboard,
    Users,
    Logs,
    Settings,
}

pub enum AdminContent {
    Home,
    Users(UserManagement),
    Logs,
    Settings,
}

impl Section for AdminSection {
    type Content = AdminContent;
    const ALL: &'static [Self] = &[
        AdminSection::Dashboard,
        AdminSection::Users,
        AdminSection::Logs,
        AdminSection::Settings,
    ];

    fn label(self) -> &'static str {
        match self {
            AdminSection::Dashboard => "System Dashboard",
            AdminSection::Users => "User Management",
            AdminSection::Logs => "Logs & Monitoring",
            AdminSection::Settings => "System Settings",
        }
    }

    fn mount(self) -> AdminContent {
        match self {
            AdminSection::Dashboard => AdminContent::Home,
            AdminSection::Users => AdminContent::Users(UserManagement::new()),
            AdminSection::Logs => AdminContent::Logs,
            AdminSection::Settings => AdminContent::Settings,
        }
    }
}

pub enum Dashboard {
    Candidate(Shell<CandidateSection>),
    Hr(Shell<HrSection>),
    Admin(Shell<AdminSection>),
}

impl Dashboard {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Candidate => Dashboard::Candidate(Shell::new(CandidateSection::Jobs)),
            Role::HrManager => Dashboard::Hr(Shell::new(HrSection::Dashboard)),
            Role::Administrator => Dashboard::Admin(Shell::new(AdminSection::Dashboard)),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Dashboard::Candidate(_) => Role::Candidate,
            Dashboard::Hr(_) => Role::HrManager,
            Dashboard::Admin(_) => Role::Administrator,
        }
    }

    /// Sidebar labels with the index of the active one.
    pub fn menu(&self) -> (Vec<&'static str>, usize) {
        fn collect<S: Section>(shell: &Shell<S>) -> (Vec<&'static str>, usize) {
            (S::ALL.iter().map(|s| s.label()).collect(), shell.index())
        }
        match self {
            Dashboard::Candidate(shell) => collect(shell),
            Dashboard::Hr(shell) => collect(shell),
            Dashboard::Admin(shell) => collect(shell),
        }
    }

    pub fn pane(&self) -> Pane {
        match self {
            Dashboard::Candidate(shell) => shell.pane,
            Dashboard::Hr(shell) => shell.pane,
            Dashboard::Admin(shell) => shell.pane,
        }
    }

    pub fn set_pane(&mut self, pane: Pane) {
        match self {
            Dashboard::Candidate(shell) => shell.pane = pane,
            Dashboard::Hr(shell) => shell.pane = pane,
            Dashboard::Admin(shell) => shell.pane = pane,
        }
    }

    pub fn select_next_section(&mut self) {
        match self {
            Dashboard::Candidate(shell) => shell.select_next(),
            Dashboard::Hr(shell) => shell.select_next(),
            Dashboard::Admin(shell) => shell.select_next(),
        }
    }

    pub fn select_prev_section(&mut self) {
        match self {
            Dashboard::Candidate(shell) => shell.select_prev(),
            Dashboard::Hr(shell) => shell.select_prev(),
            Dashboard::Admin(shell) => shell.select_prev(),
        }
    }
}
