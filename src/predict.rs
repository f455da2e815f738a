//! Prediction request assembly, validation, and submission.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::catalog::TeamCatalog;
use crate::error::{GoalsightError, Result};
use crate::features::DateFeatures;
use crate::model::{PredictionRequest, PredictionResponse, PredictionResult};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Raw form state as the user supplies it. Numeric fields stay strings
/// until validation; an empty string is "missing", while "0" is a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionInput {
    pub home_team: String,
    pub away_team: String,
    pub month: String,
    pub weekday: String,
    pub year: String,
    pub last_5_home_wins: String,
    pub last_5_away_wins: String,
    pub is_weekend: String,
    pub is_first_half_season: String,
}

impl PredictionInput {
    /// Overwrite the five date-derived fields from the encoder. Called when
    /// the match date changes; the fields stay individually editable
    /// afterwards, and manual edits win until the date changes again.
    pub fn apply_date_features(&mut self, features: &DateFeatures) {
        self.month = features.month.to_string();
        self.weekday = features.weekday.to_string();
        self.year = features.year.to_string();
        self.is_weekend = u8::from(features.is_weekend).to_string();
        self.is_first_half_season = u8::from(features.is_first_half_season).to_string();
    }

    /// True once every field has a value, mirroring the submit gate.
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|(_, value)| !value.trim().is_empty())
    }

    fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("home_team", &self.home_team),
            ("away_team", &self.away_team),
            ("month", &self.month),
            ("weekday", &self.weekday),
            ("year", &self.year),
            ("last_5_home_wins", &self.last_5_home_wins),
            ("last_5_away_wins", &self.last_5_away_wins),
            ("is_weekend", &self.is_weekend),
            ("is_first_half_season", &self.is_first_half_season),
        ]
    }
}

/// Validate the nine required fields and assemble the wire request.
///
/// Runs before any network I/O. Team names are mapped to the identifiers
/// the classifier was trained on, falling back to the raw display name so
/// untracked teams still produce a request.
pub fn build_request(
    input: &PredictionInput,
    catalog: &TeamCatalog,
) -> Result<PredictionRequest> {
    for (name, value) in input.fields() {
        if value.trim().is_empty() {
            return Err(GoalsightError::Validation(format!(
                "required field '{name}' is missing"
            )));
        }
    }

    let numeric = |name: &str, value: &str| -> Result<i32> {
        value.trim().parse().map_err(|_| {
            GoalsightError::Validation(format!("field '{name}' must be numeric, got '{value}'"))
        })
    };

    Ok(PredictionRequest {
        home_team: catalog.model_identifier(input.home_team.trim()).to_string(),
        away_team: catalog.model_identifier(input.away_team.trim()).to_string(),
        month: numeric("month", &input.month)?,
        weekday: numeric("weekday", &input.weekday)?,
        year: numeric("year", &input.year)?,
        last_5_home_wins: numeric("last_5_home_wins", &input.last_5_home_wins)?,
        last_5_away_wins: numeric("last_5_away_wins", &input.last_5_away_wins)?,
        is_weekend: numeric("is_weekend", &input.is_weekend)?,
        is_first_half_season: numeric("is_first_half_season", &input.is_first_half_season)?,
    })
}

/// The remote match-outcome classifier.
#[async_trait]
pub trait ClassifierClient: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult>;
}

/// HTTP client for the classifier service.
pub struct HttpClassifier {
    client: Client,
    base_url: String,
}

impl HttpClassifier {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ClassifierClient for HttpClassifier {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        let url = format!("{}/predict", self.base_url);
        let resp = self.client.post(&url).json(request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GoalsightError::Transport(format!("HTTP {status}")));
        }

        // A 2xx body can still carry an embedded error instead of a
        // prediction; the service reports unknown teams this way.
        let body = resp.json::<PredictionResponse>().await?;
        if let Some(message) = body.error {
            return Err(GoalsightError::RemoteLogical(message));
        }
        let Some(predicted_outcome) = body.prediction else {
            return Err(GoalsightError::RemoteLogical(
                "classifier returned neither prediction nor error".to_string(),
            ));
        };

        Ok(PredictionResult {
            predicted_outcome,
            probabilities: body.probabilities,
        })
    }
}

/// Validate, assemble, and submit one prediction. Validation failures never
/// reach the network; remote failures are returned as-is and the caller
/// clears any stale result.
pub async fn predict(
    client: &dyn ClassifierClient,
    catalog: &TeamCatalog,
    input: &PredictionInput,
) -> Result<PredictionResult> {
    let request = build_request(input, catalog)?;
    info!(
        home = %request.home_team,
        away = %request.away_team,
        "submitting prediction request"
    );
    client.predict(&request).await
}
