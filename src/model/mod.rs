pub mod person;
pub mod meeting;

// Re-exports for convenience
pub use person::Person;
pub use meeting::{Meeting, MeetingCategory, MeetingType};
