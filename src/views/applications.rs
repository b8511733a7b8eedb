use crate::filter::{Criteria, FilterView};
use crate::records::applications::{Application, ApplicationStatus, APPLICATIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicationTab {
    #[default]
    All,
    Active,
    Interview,
    Offer,
}

impl ApplicationTab {
    pub const ALL: [ApplicationTab; 4] = [
        ApplicationTab::All,
        ApplicationTab::Active,
        ApplicationTab::Interview,
        ApplicationTab::Offer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ApplicationTab::All => "All",
            ApplicationTab::Active => "Active",
            ApplicationTab::Interview => "Interview",
            ApplicationTab::Offer => "Offer",
        }
    }

    pub fn admits(self, status: ApplicationStatus) -> bool {
        match self {
            ApplicationTab::All => true,
            ApplicationTab::Active => status.is_active(),
            ApplicationTab::Interview => status == ApplicationStatus::Interview,
            ApplicationTab::Offer => status == ApplicationStatus::Offer,
        }
    }
}

#[derive(Default)]
pub struct ApplicationCriteria {
    pub tab: ApplicationTab,
}

impl Criteria<Application> for ApplicationCriteria {
    fn matches(&self, item: &Application) -> bool {
        self.tab.admits(item.status)
    }
}

/// Tally shown in the header tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationCounts {
    pub total: usize,
    pub active: usize,
    pub interview: usize,
    pub offer: usize,
}

pub struct MyApplications {
    pub list: FilterView<Application, ApplicationCriteria>,
}

impl Default for MyApplications {
    fn default() -> Self {
        Self::new()
    }
}

impl MyApplications {
    pub fn new() -> Self {
        Self {
            list: FilterView::new(APPLICATIONS),
        }
    }

    pub fn tab(&self) -> ApplicationTab {
        self.list.criteria.tab
    }

    pub fn next_tab(&mut self) {
        let idx = ApplicationTab::ALL
            .iter()
            .position(|t| *t == self.tab())
            .unwrap_or(0);
        self.list.criteria.tab = ApplicationTab::ALL[(idx + 1) % ApplicationTab::ALL.len()];
    }

    pub fn prev_tab(&mut self) {
        let idx = ApplicationTab::ALL
            .iter()
            .position(|t| *t == self.tab())
            .unwrap_or(0);
        let len = ApplicationTab::ALL.len();
        self.list.criteria.tab = ApplicationTab::ALL[(idx + len - 1) % len];
    }

    pub fn counts(&self) -> ApplicationCounts {
        let records = self.list.records();
        let count = |tab: ApplicationTab| records.iter().filter(|a| tab.admits(a.status)).count();
        ApplicationCounts {
            total: records.len(),
            active: records.iter().filter(|a| a.status.is_open()).count(),
            interview: count(ApplicationTab::Interview),
            offer: count(ApplicationTab::Offer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let view = MyApplications::new();
        assert_eq!(
            view.counts(),
            ApplicationCounts {
                total: 5,
                active: 4,
                interview: 1,
                offer: 1,
            }
        );
    }

    #[test]
    fn test_tabs_filter_and_wrap() {
        let mut view = MyApplications::new();
        assert_eq!(view.list.count(), 5);
        view.next_tab();
        assert_eq!(view.tab(), ApplicationTab::Active);
        assert_eq!(view.list.count(), 3);
        assert_eq!(view.counts().active, 4);
        assert!(view
            .list
            .results()
            .iter()
            .all(|a| a.status != ApplicationStatus::Rejected && a.status != ApplicationStatus::Offer));
        view.next_tab();
        view.next_tab();
        assert_eq!(view.list.results()[0].job_title, "Full Stack Developer");
        view.next_tab();
        assert_eq!(view.tab(), ApplicationTab::All);
        view.prev_tab();
        assert_eq!(view.tab(), ApplicationTab::Offer);
    }
}
