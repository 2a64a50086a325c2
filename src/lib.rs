pub mod batch;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod storage;
pub mod types;
