pub mod cli;
pub mod config;
pub mod detection;
pub mod errors;
pub mod frames;
pub mod pipeline;
pub mod report;
