#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VacancyStatus {
    Active,
    Closed,
}

impl VacancyStatus {
    pub fn label(self) -> &'static str {
        match self {
            VacancyStatus::Active => "Active",
            VacancyStatus::Closed => "Closed",
        }
    }
}

/// A posted vacancy in the HR overview table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacancy {
    pub id: &'static str,
    pub job_title: &'static str,
    pub created_on: &'static str,
    /// Display count only; not derived from any application records.
    pub applicants: u32,
    pub match_rate: u8,
    pub status: VacancyStatus,
    pub department: &'static str,
}

pub const VACANCIES: &[Vacancy] = &[
    Vacancy {
        id: "1",
        job_title: "Senior Frontend Developer",
        created_on: "2025-10-15",
        applicants: 45,
        match_rate: 72,
        status: VacancyStatus::Active,
        department: "Engineering",
    },
    Vacancy {
        id: "2",
        job_title: "Product Manager",
        created_on: "2025-10-20",
        applicants: 63,
        match_rate: 68,
        status: VacancyStatus::Active,
        department: "Product",
    },
    Vacancy {
        id: "3",
        job_title: "UX Designer",
        created_on: "2025-10-12",
        applicants: 28,
        match_rate: 81,
        status: VacancyStatus::Active,
        department: "Design",
    },
    Vacancy {
        id: "4",
        job_title: "Data Scientist",
        created_on: "2025-10-08",
        applicants: 52,
        match_rate: 64,
        status: VacancyStatus::Active,
        department: "Data",
    },
    Vacancy {
        id: "5",
        job_title: "Backend Engineer",
        created_on: "2025-09-28",
        applicants: 87,
        match_rate: 58,
        status: VacancyStatus::Closed,
        department: "Engineering",
    },
    Vacancy {
        id: "6",
        job_title: "Marketing Manager",
        created_on: "2025-10-22",
        applicants: 34,
        match_rate: 75,
        status: VacancyStatus::Active,
        department: "Marketing",
    },
];

/// Headline numbers for the HR overview tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VacancyStats {
    pub active: usize,
    pub total_applicants: u32,
    /// Mean match rate, rounded half up.
    pub average_match_rate: u32,
}

impl VacancyStats {
    pub fn of(vacancies: &[Vacancy]) -> Self {
        let active = vacancies
            .iter()
            .filter(|v| v.status == VacancyStatus::Active)
            .count();
        let total_applicants = vacancies.iter().map(|v| v.applicants).sum();
        let average_match_rate = if vacancies.is_empty() {
            0
        } else {
            let sum: u32 = vacancies.iter().map(|v| u32::from(v.match_rate)).sum();
            let n = vacancies.len() as u32;
            (sum * 2 + n) / (2 * n)
        };
        Self {
            active,
            total_applicants,
            average_match_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_stats() {
        let stats = VacancyStats::of(VACANCIES);
        assert_eq!(stats.active, 5);
        assert_eq!(stats.total_applicants, 309);
        // (72 + 68 + 81 + 64 + 58 + 75) / 6 = 69.67
        assert_eq!(stats.average_match_rate, 70);
    }

    #[test]
    fn test_empty_stats() {
        let stats = VacancyStats::of(&[]);
        assert_eq!(stats.average_match_rate, 0);
        assert_eq!(stats.active, 0);
    }
}
