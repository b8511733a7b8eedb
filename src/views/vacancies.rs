use crate::filter::{contains_ignore_case, Choice, Criteria, FilterView};
use crate::input::{FocusOrder, TextInput};
use crate::records::vacancies::{Vacancy, VacancyStats, VacancyStatus, VACANCIES};

const STATUSES: &[(&str, VacancyStatus)] = &[
    ("Active", VacancyStatus::Active),
    ("Closed", VacancyStatus::Closed),
];

pub struct VacancyCriteria {
    pub search: TextInput,
    pub status: Choice<VacancyStatus>,
}

impl Default for VacancyCriteria {
    fn default() -> Self {
        Self {
            search: TextInput::new(),
            status: Choice::new(STATUSES),
        }
    }
}

impl Criteria<Vacancy> for VacancyCriteria {
    fn matches(&self, item: &Vacancy) -> bool {
        contains_ignore_case(item.job_title, self.search.value())
            && self.status.admits(|status| item.status == status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VacancyFocus {
    Search,
    Status,
    Results,
}

impl FocusOrder for VacancyFocus {
    const ORDER: &'static [Self] = &[VacancyFocus::Search, VacancyFocus::Status, VacancyFocus::Results];
}

/// HR overview: headline tiles plus the searchable vacancy table.
pub struct VacancyTable {
    pub list: FilterView<Vacancy, VacancyCriteria>,
    pub focus: VacancyFocus,
}

impl Default for VacancyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl VacancyTable {
    pub fn new() -> Self {
        Self {
            list: FilterView::new(VACANCIES),
            focus: VacancyFocus::Search,
        }
    }

    /// Tiles are computed over every vacancy, not the filtered rows.
    pub fn stats(&self) -> VacancyStats {
        VacancyStats::of(self.list.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_choice() {
        let mut table = VacancyTable::new();
        table.list.criteria.status.next();
        assert_eq!(table.list.count(), 5);
        table.list.criteria.status.next();
        let titles: Vec<_> = table.list.results().iter().map(|v| v.job_title).collect();
        assert_eq!(titles, ["Backend Engineer"]);
    }

    #[test]
    fn test_search_does_not_move_stats() {
        let mut table = VacancyTable::new();
        table.list.criteria.search.set("manager");
        assert_eq!(table.list.count(), 2);
        assert_eq!(table.stats().total_applicants, 309);
        table.list.clear_filters();
        assert_eq!(table.list.count(), 6);
    }
}
