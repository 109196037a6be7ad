pub mod http;

use crate::error::Result;
use crate::types::team::TeamRecord;
use async_trait::async_trait;

pub use http::HttpTeamProvider;

/// Source of team records, keyed by the data service's team id.
#[async_trait]
pub trait TeamProvider: Send + Sync {
    async fn get_team(&self, team_id: u32) -> Result<TeamRecord>;
}
