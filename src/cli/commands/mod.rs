pub mod config;
pub mod export;
pub mod init;
pub mod remarks;
pub mod render;
pub mod summary;
