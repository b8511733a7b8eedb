use std::collections::BTreeSet;

use crate::filter::{any_field_contains, Choice, Criteria, FilterView, RangeFilter};
use crate::input::{FocusOrder, TextInput};
use crate::notify::Notice;
use crate::records::jobs::{JobListing, JOB_LISTINGS};

const LOCATIONS: &[(&str, &str)] = &[
    ("Remote", "Remote"),
    ("San Francisco", "San Francisco"),
    ("New York", "New York"),
    ("Austin", "Austin"),
    ("Seattle", "Seattle"),
    ("Boston", "Boston"),
];

const EXPERIENCE: &[(&str, &str)] = &[
    ("2+ years", "2+"),
    ("3+ years", "3+"),
    ("4+ years", "4+"),
    ("5+ years", "5+"),
];

pub struct JobCriteria {
    pub search: TextInput,
    pub location: Choice<&'static str>,
    pub experience: Choice<&'static str>,
    /// Thousands per year.
    pub salary: RangeFilter,
}

impl Default for JobCriteria {
    fn default() -> Self {
        Self {
            search: TextInput::new(),
            location: Choice::new(LOCATIONS),
            experience: Choice::new(EXPERIENCE),
            salary: RangeFilter::new(0, 200, 10),
        }
    }
}

impl Criteria<JobListing> for JobCriteria {
    fn matches(&self, job: &JobListing) -> bool {
        let text = [job.title, job.company]
            .into_iter()
            .chain(job.skills.iter().copied());
        any_field_contains(text, self.search.value())
            && self.location.admits(|loc| job.location.contains(loc))
            && self.experience.admits(|exp| job.experience.contains(exp))
            && job
                .salary_band_k()
                .map_or(true, |(low, high)| self.salary.overlaps(low, high))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobBoardFocus {
    Search,
    Location,
    Experience,
    SalaryMin,
    SalaryMax,
    Results,
}

impl FocusOrder for JobBoardFocus {
    const ORDER: &'static [Self] = &[
        JobBoardFocus::Search,
        JobBoardFocus::Location,
        JobBoardFocus::Experience,
        JobBoardFocus::SalaryMin,
        JobBoardFocus::SalaryMax,
        JobBoardFocus::Results,
    ];
}

pub struct JobBoard {
    pub list: FilterView<JobListing, JobCriteria>,
    pub focus: JobBoardFocus,
    saved: BTreeSet<&'static str>,
}

impl Default for JobBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl JobBoard {
    pub fn new() -> Self {
        Self {
            list: FilterView::new(JOB_LISTINGS),
            focus: JobBoardFocus::Search,
            saved: BTreeSet::new(),
        }
    }

    pub fn is_saved(&self, job: &JobListing) -> bool {
        self.saved.contains(job.id)
    }

    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    /// Quick-apply to the highlighted listing.
    pub fn apply_selected(&self) -> Option<Notice> {
        let job = self.list.selected()?;
        tracing::debug!(job = job.id, quick = job.quick_apply, "apply requested");
        Some(if job.quick_apply {
            Notice::success(format!("Applied to {}!", job.title))
                .with_description(format!("Your application to {} has been submitted", job.company))
        } else {
            Notice::info(format!("{} uses an external application flow", job.title))
        })
    }

    pub fn toggle_save_selected(&mut self) -> Option<Notice> {
        let job = self.list.selected()?;
        Some(if self.saved.remove(job.id) {
            Notice::info("Job removed from saved")
        } else {
            self.saved.insert(job.id);
            Notice::success("Job saved!")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastKind;

    fn titles(board: &JobBoard) -> Vec<&'static str> {
        board.list.results().iter().map(|j| j.title).collect()
    }

    #[test]
    fn test_default_shows_every_listing() {
        let board = JobBoard::new();
        assert_eq!(board.list.count(), JOB_LISTINGS.len());
        assert_eq!(titles(&board)[0], JOB_LISTINGS[0].title);
    }

    #[test]
    fn test_search_covers_skills() {
        let mut board = JobBoard::new();
        board.list.criteria.search.set("figma");
        assert_eq!(titles(&board), ["Product Designer"]);
    }

    #[test]
    fn test_location_and_experience_choices() {
        let mut board = JobBoard::new();
        board.list.criteria.location.next();
        assert_eq!(board.list.criteria.location.label(), "Remote");
        assert!(board
            .list
            .results()
            .iter()
            .all(|j| j.location.contains("Remote")));

        board.list.clear_filters();
        for _ in 0..4 {
            board.list.criteria.experience.next();
        }
        assert!(board
            .list
            .results()
            .iter()
            .all(|j| j.experience.contains("5+")));
        assert!(board.list.count() < JOB_LISTINGS.len());
    }

    #[test]
    fn test_salary_range_narrows_and_clear_restores() {
        let mut board = JobBoard::new();
        for _ in 0..15 {
            board.list.criteria.salary.raise_min();
        }
        assert_eq!(board.list.criteria.salary.min, 150);
        assert!(board
            .list
            .results()
            .iter()
            .all(|j| j.salary_band_k().is_some_and(|(_, high)| high >= 150)));
        assert!(board.list.count() < JOB_LISTINGS.len());
        board.list.clear_filters();
        assert_eq!(board.list.count(), JOB_LISTINGS.len());
    }

    #[test]
    fn test_apply_and_save_toasts() {
        let mut board = JobBoard::new();
        let notice = board.apply_selected().unwrap();
        assert_eq!(notice.kind, ToastKind::Success);
        assert_eq!(notice.title, format!("Applied to {}!", JOB_LISTINGS[0].title));

        assert_eq!(board.toggle_save_selected().unwrap().title, "Job saved!");
        assert!(board.is_saved(&JOB_LISTINGS[0]));
        assert_eq!(
            board.toggle_save_selected().unwrap().title,
            "Job removed from saved"
        );
        assert_eq!(board.saved_count(), 0);
    }

    #[test]
    fn test_external_listing_is_informational() {
        let mut board = JobBoard::new();
        let external = JOB_LISTINGS.iter().position(|j| !j.quick_apply).unwrap();
        for _ in 0..external {
            board.list.select_next();
        }
        let notice = board.apply_selected().unwrap();
        assert_eq!(notice.kind, ToastKind::Info);
        assert!(notice.title.ends_with("uses an external application flow"));
    }

    #[test]
    fn test_no_results_no_action() {
        let mut board = JobBoard::new();
        board.list.criteria.search.set("zzz-no-match");
        assert!(board.apply_selected().is_none());
        assert!(board.toggle_save_selected().is_none());
    }
}
