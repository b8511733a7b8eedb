//! Mock authentication: session routing, form validation and password scoring.

pub mod error;
pub mod forms;
pub mod session;
pub mod strength;

pub use error::FormError;
pub use session::{Role, SessionRouter, View};
