pub mod file_store;
#[cfg(test)]
pub mod memory_store;
pub mod report_writer;
