pub mod prompt;
pub mod report;
pub mod session;
