pub mod analytics;
pub mod chart;
pub mod dashboard;
pub mod decision;
pub mod log_record;
pub mod page;
pub mod report;
pub mod session;
