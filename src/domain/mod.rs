pub mod comment;
pub mod project;
pub mod queries;
pub mod stats;
pub mod task;
pub mod workspace;
