pub mod admin;
pub mod badges;
pub mod charts;
pub mod dashboard;
pub mod format;
pub mod table;
