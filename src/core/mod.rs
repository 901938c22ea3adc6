pub mod basics;
pub mod report;
pub mod stats;
pub mod student;
pub mod text;
