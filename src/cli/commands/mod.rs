pub mod analyze;
pub mod config;
pub mod dashboard;
pub mod decisions;
pub mod login;
pub mod logout;
pub mod logs;
pub mod metrics;
pub mod report;
pub mod reports;
pub mod whoami;
