use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::Result;
use crate::model::{
    MatchEvent, RecentEventsResponse, TeamSearchResponse, UpcomingEventsResponse,
};

const SPORTSDB_BASE: &str = "https://www.thesportsdb.com/api/v1/json";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Read-only gateway to the sports-data provider.
///
/// Every operation distinguishes "nothing found" (`None` / empty vec) from
/// an actual failure; the provider models empty result sets as JSON null.
#[async_trait]
pub trait MatchDataClient: Send + Sync {
    /// Resolve a display name to the provider's team id. The provider's
    /// ranking is authoritative: the first hit wins, `None` means no match.
    async fn resolve_team_id(&self, team_name: &str) -> Result<Option<String>>;

    /// The provider's recent-events set for a team, unfiltered and in
    /// provider order (assumed reverse-chronological).
    async fn recent_results(&self, team_id: &str) -> Result<Vec<MatchEvent>>;

    /// The team's next scheduled match, if any.
    async fn next_fixture(&self, team_id: &str) -> Result<Option<MatchEvent>>;

    /// All events of a league season.
    async fn season_events(&self, league_id: u32, season: &str) -> Result<Vec<MatchEvent>>;
}

/// TheSportsDB v1 JSON API client.
pub struct SportsDbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SportsDbClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(SPORTSDB_BASE, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.api_key, name)
    }
}

#[async_trait]
impl MatchDataClient for SportsDbClient {
    async fn resolve_team_id(&self, team_name: &str) -> Result<Option<String>> {
        let resp = self
            .client
            .get(self.endpoint("searchteams.php"))
            .query(&[("t", team_name)])
            .send()
            .await?
            .error_for_status()?;
        let data = resp.json::<TeamSearchResponse>().await?;
        let id = data
            .teams
            .and_then(|teams| teams.into_iter().next())
            .map(|team| team.id);
        debug!(team_name, ?id, "resolved provider team id");
        Ok(id)
    }

    async fn recent_results(&self, team_id: &str) -> Result<Vec<MatchEvent>> {
        let resp = self
            .client
            .get(self.endpoint("eventslast.php"))
            .query(&[("id", team_id)])
            .send()
            .await?
            .error_for_status()?;
        let data = resp.json::<RecentEventsResponse>().await?;
        Ok(data.results.unwrap_or_default())
    }

    async fn next_fixture(&self, team_id: &str) -> Result<Option<MatchEvent>> {
        let resp = self
            .client
            .get(self.endpoint("eventsnext.php"))
            .query(&[("id", team_id)])
            .send()
            .await?
            .error_for_status()?;
        let data = resp.json::<UpcomingEventsResponse>().await?;
        Ok(data.events.and_then(|events| events.into_iter().next()))
    }

    async fn season_events(&self, league_id: u32, season: &str) -> Result<Vec<MatchEvent>> {
        let resp = self
            .client
            .get(self.endpoint("eventsseason.php"))
            .query(&[("id", &league_id.to_string()), ("s", &season.to_string())])
            .send()
            .await?
            .error_for_status()?;
        let data = resp.json::<UpcomingEventsResponse>().await?;
        Ok(data.events.unwrap_or_default())
    }
}
