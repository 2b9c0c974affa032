pub mod providers;
pub mod service;

pub use service::{AnswerService, AnswerSettings};
