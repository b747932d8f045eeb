pub mod meeting_ops;
