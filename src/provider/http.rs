use super::TeamProvider;
use crate::error::{PredictorError, Result};
use crate::types::config::DataConfig;
use crate::types::team::TeamRecord;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Team provider backed by the sports data service's REST API.
pub struct HttpTeamProvider {
    base_url: String,
    http: Client,
}

impl HttpTeamProvider {
    pub fn new(config: &DataConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn team_url(&self, team_id: u32) -> String {
        format!("{}/teams/{}", self.base_url, team_id)
    }
}

#[async_trait]
impl TeamProvider for HttpTeamProvider {
    async fn get_team(&self, team_id: u32) -> Result<TeamRecord> {
        let url = self.team_url(team_id);
        debug!(%url, "fetching team");

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(team_id, error = %e, "team fetch failed");
            PredictorError::Http(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!(team_id, "team not found");
            return Err(PredictorError::TeamNotFound(team_id));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(team_id, status = status.as_u16(), "data service error");
            return Err(PredictorError::DataService {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let team: TeamRecord = serde_json::from_str(&body)
            .map_err(|source| PredictorError::MalformedTeam { team_id, source })?;
        debug!(team_id, players = team.players.len(), "team fetched");
        Ok(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_url_strips_trailing_slash() {
        let provider = HttpTeamProvider::new(&DataConfig {
            base_url: "http://localhost:8000/".to_string(),
            timeout_secs: 5,
        })
        .expect("client should build");

        assert_eq!(provider.base_url(), "http://localhost:8000");
        assert_eq!(provider.team_url(7), "http://localhost:8000/teams/7");
    }
}
