pub mod meeting_queries;
