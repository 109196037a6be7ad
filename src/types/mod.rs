pub mod analysis;
pub mod config;
pub mod scoring;
pub mod team;
