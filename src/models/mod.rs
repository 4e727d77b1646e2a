pub mod card;
pub mod submission;
pub mod token;
