//! Static sample data. Every record set is a `'static` slice that views
//! filter but never mutate.

pub mod analytics;
pub mod applications;
pub mod candidates;
pub mod jobs;
pub mod profile;
pub mod system;
pub mod users;
pub mod vacancies;

#[cfg(test)]
mod tests {
    use super::jobs::JOB_LISTINGS;
    use super::*;

    #[test]
    fn test_salary_bands_parse() {
        let bands: Vec<_> = JOB_LISTINGS.iter().map(|j| j.salary_band_k()).collect();
        assert_eq!(bands[0], Some((120, 180)));
        assert_eq!(bands[5], Some((75, 110)));
        assert!(bands.iter().all(Option::is_some));
    }

    #[test]
    fn test_candidate_initials() {
        assert_eq!(candidates::CANDIDATES[0].initials(), "SJ");
    }

    #[test]
    fn test_record_ids_are_unique() {
        let mut ids: Vec<_> = users::MANAGED_USERS.iter().map(|u| u.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), users::MANAGED_USERS.len());
    }
}
