use crate::filter::{any_field_contains, Criteria, FilterView, RangeFilter, TagSet};
use crate::input::{FocusOrder, TextInput};
use crate::records::candidates::{CandidateProfile, PipelineStatus, CANDIDATES};

/// Colour band for a match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Strong,
    Fair,
    Weak,
}

impl MatchTier {
    /// Candidate match score.
    pub fn of(score: u8) -> Self {
        match score {
            80..=u8::MAX => MatchTier::Strong,
            60..=79 => MatchTier::Fair,
            _ => MatchTier::Weak,
        }
    }

    /// Average match rate of a vacancy's applicant pool.
    pub fn of_vacancy(rate: u8) -> Self {
        match rate {
            70..=u8::MAX => MatchTier::Strong,
            50..=69 => MatchTier::Fair,
            _ => MatchTier::Weak,
        }
    }
}

pub struct CandidateCriteria {
    pub search: TextInput,
    pub match_score: RangeFilter,
    pub statuses: TagSet<PipelineStatus>,
}

impl Default for CandidateCriteria {
    fn default() -> Self {
        Self {
            search: TextInput::new(),
            match_score: RangeFilter::new(0, 100, 5),
            statuses: TagSet::default(),
        }
    }
}

impl Criteria<CandidateProfile> for CandidateCriteria {
    fn matches(&self, item: &CandidateProfile) -> bool {
        any_field_contains([item.name, item.current_position], self.search.value())
            && self.match_score.contains(u32::from(item.match_score))
            && self.statuses.admits(item.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateFocus {
    Search,
    MinScore,
    MaxScore,
    Status,
    Results,
}

impl FocusOrder for CandidateFocus {
    const ORDER: &'static [Self] = &[
        CandidateFocus::Search,
        CandidateFocus::MinScore,
        CandidateFocus::MaxScore,
        CandidateFocus::Status,
        CandidateFocus::Results,
    ];
}

pub struct CandidateList {
    pub list: FilterView<CandidateProfile, CandidateCriteria>,
    pub focus: CandidateFocus,
    /// Highlighted checkbox in the status group.
    pub status_cursor: usize,
}

impl Default for CandidateList {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateList {
    pub fn new() -> Self {
        Self {
            list: FilterView::new(CANDIDATES),
            focus: CandidateFocus::Search,
            status_cursor: 0,
        }
    }

    pub fn toggle_highlighted_status(&mut self) {
        let status = PipelineStatus::ALL[self.status_cursor % PipelineStatus::ALL.len()];
        self.list.criteria.statuses.toggle(status);
    }

    pub fn move_status_cursor(&mut self, forward: bool) {
        let len = PipelineStatus::ALL.len();
        self.status_cursor = if forward {
            (self.status_cursor + 1) % len
        } else {
            (self.status_cursor + len - 1) % len
        };
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} candidates",
            self.list.count(),
            self.list.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_tiers() {
        assert_eq!(MatchTier::of(94), MatchTier::Strong);
        assert_eq!(MatchTier::of(80), MatchTier::Strong);
        assert_eq!(MatchTier::of(79), MatchTier::Fair);
        assert_eq!(MatchTier::of(60), MatchTier::Fair);
        assert_eq!(MatchTier::of(59), MatchTier::Weak);
    }

    #[test]
    fn test_vacancy_tiers_sit_lower() {
        assert_eq!(MatchTier::of_vacancy(72), MatchTier::Strong);
        assert_eq!(MatchTier::of(72), MatchTier::Fair);
        assert_eq!(MatchTier::of_vacancy(55), MatchTier::Fair);
        assert_eq!(MatchTier::of_vacancy(49), MatchTier::Weak);
    }

    #[test]
    fn test_search_over_name_and_position() {
        let mut view = CandidateList::new();
        view.list.criteria.search.set("NETFLIX");
        let names: Vec<_> = view.list.results().iter().map(|c| c.name).collect();
        assert_eq!(names, ["Lisa Wang"]);
        view.list.criteria.search.set("chen");
        assert_eq!(view.list.count(), 1);
    }

    #[test]
    fn test_status_set_and_range_compose() {
        let mut view = CandidateList::new();
        view.toggle_highlighted_status();
        assert_eq!(view.list.count(), 5);
        for _ in 0..16 {
            view.list.criteria.match_score.raise_min();
        }
        assert_eq!(view.list.criteria.match_score.min, 80);
        let names: Vec<_> = view.list.results().iter().map(|c| c.name).collect();
        assert_eq!(names, ["Sarah Johnson", "David Kim"]);

        view.move_status_cursor(true);
        view.toggle_highlighted_status();
        assert_eq!(view.list.count(), 3);
        assert_eq!(view.summary(), "Showing 3 of 8 candidates");

        view.list.clear_filters();
        assert_eq!(view.list.count(), CANDIDATES.len());
        let statuses = &view.list.criteria.statuses;
        assert!(CANDIDATES.iter().all(|c| statuses.admits(c.status)));
    }
}
