pub mod http;
pub mod navigation;
pub mod storage;
