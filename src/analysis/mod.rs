pub mod patterns;
pub mod profile;
pub mod recommendations;

pub use patterns::analyze;
pub use profile::{department_totals, hourly_profile};
pub use recommendations::recommend;
