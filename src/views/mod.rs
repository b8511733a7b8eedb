//! Per-section view state. Each struct is built fresh when its section is
//! mounted and dropped when the user leaves it.

pub mod applications;
pub mod candidates;
pub mod job_board;
pub mod profile;
pub mod tags;
pub mod users;
pub mod vacancies;
pub mod wizard;

pub use applications::MyApplications;
pub use candidates::CandidateList;
pub use job_board::JobBoard;
pub use profile::MyProfile;
pub use users::UserManagement;
pub use vacancies::VacancyTable;
pub use wizard::VacancyWizard;
