pub mod models;
pub mod store;

pub use models::{ApplicantRecord, NewApplicant};
pub use store::{ApplicantStore, PgApplicantStore};
