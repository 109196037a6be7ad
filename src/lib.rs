//! Cricket team strength scoring and match prediction.
//!
//! [`scoring`] holds the deterministic strength score; [`provider`],
//! [`tools`] and [`agent`] wire it to a sports data service and to the
//! prediction engines.

pub mod agent;
pub mod config;
pub mod error;
pub mod mock;
pub mod provider;
pub mod report;
pub mod scoring;
pub mod tools;
pub mod types;
