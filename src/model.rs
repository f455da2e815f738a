use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// `searchteams.php` response. The provider sends `"teams": null` rather
/// than an empty array when nothing matches.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct TeamSearchResponse {
    pub teams: Option<Vec<ProviderTeam>>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderTeam {
    #[serde(rename = "idTeam")]
    pub id: String,
    #[serde(rename = "strTeam")]
    pub name: Option<String>,
}

/// `eventslast.php` response.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct RecentEventsResponse {
    pub results: Option<Vec<MatchEvent>>,
}

/// `eventsnext.php` and `eventsseason.php` responses.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct UpcomingEventsResponse {
    pub events: Option<Vec<MatchEvent>>,
}

/// One match as the provider reports it. Scores come over the wire as
/// strings ("2") or null; null means unplayed or a data gap, never 0-0.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct MatchEvent {
    #[serde(rename = "idEvent")]
    pub id: Option<String>,
    #[serde(rename = "strHomeTeam")]
    pub home_team: String,
    #[serde(rename = "strAwayTeam")]
    pub away_team: String,
    #[serde(rename = "intHomeScore")]
    pub home_score: Option<String>,
    #[serde(rename = "intAwayScore")]
    pub away_score: Option<String>,
    #[serde(rename = "dateEvent")]
    pub date: Option<String>,
    #[serde(rename = "strTime")]
    pub time: Option<String>,
}

impl MatchEvent {
    /// Both final scores, when present and numeric. A missing or garbled
    /// score leaves the event unresolved; callers skip it rather than
    /// guessing.
    pub fn resolved_scores(&self) -> Option<(i32, i32)> {
        let home = self.home_score.as_deref()?.trim().parse().ok()?;
        let away = self.away_score.as_deref()?.trim().parse().ok()?;
        Some((home, away))
    }
}

/// Win/draw/loss tally over the bounded recent window.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSummary {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl FormSummary {
    pub fn total(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

/// Next scheduled match, as far as the provider knows. `date` and
/// `opponent` are `None` together when no future fixture exists.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct UpcomingFixture {
    pub date: Option<String>,
    pub opponent: Option<String>,
    pub opponent_logo: Option<String>,
}

/// Aggregated per-team display state. `form` stays `None` when the
/// recent-results step failed; the UI renders whatever is present.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStatsSnapshot {
    pub team_name: String,
    pub form: Option<FormSummary>,
    pub fixture: UpcomingFixture,
}

/// Payload for `POST /predict`, field names exactly as the classifier's
/// pydantic model declares them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub home_team: String,
    pub away_team: String,
    pub month: i32,
    pub weekday: i32,
    pub year: i32,
    pub last_5_home_wins: i32,
    pub last_5_away_wins: i32,
    pub is_weekend: i32,
    pub is_first_half_season: i32,
}

/// Classifier response. A 2xx body may still carry `error` instead of a
/// prediction; the orchestrator treats that as a failure.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResponse {
    pub prediction: Option<String>,
    #[serde(default)]
    pub probabilities: HashMap<String, f64>,
    pub error: Option<String>,
}

/// Validated prediction outcome handed to the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub predicted_outcome: String,
    pub probabilities: HashMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SEARCH: &str = r#"{
        "teams": [
            { "idTeam": "133613", "strTeam": "Manchester City", "strLeague": "English Premier League" }
        ]
    }"#;

    const SAMPLE_RESULTS: &str = r#"{
        "results": [
            {
                "idEvent": "2070740",
                "strHomeTeam": "Manchester City",
                "strAwayTeam": "Everton",
                "intHomeScore": "2",
                "intAwayScore": "1",
                "dateEvent": "2025-03-08",
                "strTime": "15:00:00"
            },
            {
                "idEvent": "2070755",
                "strHomeTeam": "Manchester City",
                "strAwayTeam": "Chelsea",
                "intHomeScore": null,
                "intAwayScore": null,
                "dateEvent": "2025-03-22",
                "strTime": null
            }
        ]
    }"#;

    #[test]
    fn deserialize_team_search() {
        let data: TeamSearchResponse = serde_json::from_str(SAMPLE_SEARCH).unwrap();
        let teams = data.teams.unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].id, "133613");
    }

    #[test]
    fn deserialize_empty_search_as_null() {
        let data: TeamSearchResponse = serde_json::from_str(r#"{ "teams": null }"#).unwrap();
        assert!(data.teams.is_none());
    }

    #[test]
    fn deserialize_recent_results() {
        let data: RecentEventsResponse = serde_json::from_str(SAMPLE_RESULTS).unwrap();
        let results = data.results.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].resolved_scores(), Some((2, 1)));
        assert_eq!(results[1].resolved_scores(), None);
    }

    #[test]
    fn garbled_score_is_unresolved() {
        let event = MatchEvent {
            home_score: Some("2".into()),
            away_score: Some("n/a".into()),
            ..Default::default()
        };
        assert_eq!(event.resolved_scores(), None);
    }

    #[test]
    fn deserialize_prediction_response_with_error_field() {
        let body = r#"{ "error": "Invalid team name provided." }"#;
        let data: PredictionResponse = serde_json::from_str(body).unwrap();
        assert!(data.prediction.is_none());
        assert_eq!(data.error.as_deref(), Some("Invalid team name provided."));
    }

    #[test]
    fn serialize_prediction_request_keys() {
        let request = PredictionRequest {
            home_team: "Man City".into(),
            away_team: "Arsenal".into(),
            month: 3,
            weekday: 6,
            year: 2025,
            last_5_home_wins: 3,
            last_5_away_wins: 2,
            is_weekend: 1,
            is_first_half_season: 0,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["home_team"], "Man City");
        assert_eq!(value["last_5_away_wins"], 2);
        assert_eq!(value["is_first_half_season"], 0);
    }
}
