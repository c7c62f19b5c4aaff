pub(crate) mod health;
pub mod meetings;
pub mod reports;
pub mod transcripts;

pub use health::health_check;
