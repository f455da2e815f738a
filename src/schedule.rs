//! League-wide fixture list for the schedule view.

use crate::catalog::TeamCatalog;
use crate::data::MatchDataClient;
use crate::error::Result;
use crate::model::MatchEvent;

/// TheSportsDB league id for the English Premier League.
pub const PREMIER_LEAGUE_ID: u32 = 4328;
pub const SEASON: &str = "2024-2025";

/// Fetch the season's fixtures, keeping only matches where both sides are
/// catalog members. The provider's season feed mixes in cup ties and
/// relegated/promoted sides from adjacent seasons; those are dropped here.
///
/// Unlike per-team stats, a failure here surfaces to the caller: the
/// schedule view has nothing to render without it.
pub async fn season_fixtures(
    client: &dyn MatchDataClient,
    catalog: &TeamCatalog,
) -> Result<Vec<MatchEvent>> {
    let events = client.season_events(PREMIER_LEAGUE_ID, SEASON).await?;
    Ok(filter_league_fixtures(events, catalog))
}

fn filter_league_fixtures(events: Vec<MatchEvent>, catalog: &TeamCatalog) -> Vec<MatchEvent> {
    events
        .into_iter()
        .filter(|event| catalog.contains(&event.home_team) && catalog.contains(&event.away_team))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(home: &str, away: &str) -> MatchEvent {
        MatchEvent {
            home_team: home.to_string(),
            away_team: away.to_string(),
            date: Some("2025-04-05".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn keeps_only_fixtures_between_catalog_teams() {
        let catalog = TeamCatalog::premier_league();
        let events = vec![
            event("Arsenal", "Chelsea"),
            event("Arsenal", "Bayern Munich"),
            event("PSV Eindhoven", "Liverpool"),
            event("Fulham", "Everton"),
        ];

        let fixtures = filter_league_fixtures(events, &catalog);
        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures[0].away_team, "Chelsea");
        assert_eq!(fixtures[1].home_team, "Fulham");
    }

    #[test]
    fn team_name_whitespace_does_not_break_the_filter() {
        let catalog = TeamCatalog::premier_league();
        let events = vec![event(" Arsenal ", "Chelsea")];
        assert_eq!(filter_league_fixtures(events, &catalog).len(), 1);
    }
}
