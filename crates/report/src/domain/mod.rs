pub mod report;
pub mod requests;
