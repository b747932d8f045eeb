pub mod json_file;
pub mod meeting_repo;

pub use meeting_repo::MeetingRepo;
