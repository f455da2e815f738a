//! Per-team form and fixture aggregation.
//!
//! One selected team drives one pipeline: resolve the provider id, then
//! fetch recent results and the next fixture concurrently. Any step may
//! fail without sinking the rest; the snapshot carries whatever resolved.

use tracing::{debug, warn};

use crate::catalog::TeamCatalog;
use crate::data::MatchDataClient;
use crate::model::{FormSummary, MatchEvent, TeamStatsSnapshot, UpcomingFixture};

/// Recent-form window: at most this many home matches are classified.
pub const FORM_WINDOW: usize = 5;

/// Tally wins/draws/losses from the team's recent home matches.
///
/// Away matches are excluded by design: the signal is home form, for both
/// panels. The window cap is applied before the score check, so events with
/// missing scores shrink the classified pool below the cap rather than
/// pulling in later events.
pub fn compute_form(team_name: &str, events: &[MatchEvent]) -> FormSummary {
    let mut form = FormSummary::default();
    for event in events
        .iter()
        .filter(|e| e.home_team == team_name)
        .take(FORM_WINDOW)
    {
        let Some((home_score, away_score)) = event.resolved_scores() else {
            continue;
        };
        if home_score > away_score {
            form.wins += 1;
        } else if home_score < away_score {
            form.losses += 1;
        } else {
            form.draws += 1;
        }
    }
    form
}

/// Extract the next opponent and date, joining the opponent against the
/// catalog for its logo. An opponent outside the league keeps its date but
/// gets no logo. No event means an empty fixture, which is a valid state.
pub fn resolve_fixture(
    team_name: &str,
    event: Option<&MatchEvent>,
    catalog: &TeamCatalog,
) -> UpcomingFixture {
    let Some(event) = event else {
        return UpcomingFixture::default();
    };
    let opponent = if event.home_team == team_name {
        &event.away_team
    } else {
        &event.home_team
    };
    let opponent_logo = catalog
        .lookup(opponent)
        .map(|record| record.logo.to_string());
    UpcomingFixture {
        date: event.date.clone(),
        opponent: Some(opponent.clone()),
        opponent_logo,
    }
}

/// A finished pipeline run. `degraded` marks that at least one remote step
/// failed or found nothing, so the snapshot is best-effort partial.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotOutcome {
    pub snapshot: TeamStatsSnapshot,
    pub degraded: bool,
}

/// Run the three-step pipeline for one team.
///
/// `on_progress` fires when the pipeline moves from resolving the id to
/// aggregating results, letting the caller surface intermediate state.
pub async fn fetch_team_snapshot(
    client: &dyn MatchDataClient,
    catalog: &TeamCatalog,
    team_name: &str,
    mut on_progress: impl FnMut(PanelPhase),
) -> SnapshotOutcome {
    let mut snapshot = TeamStatsSnapshot {
        team_name: team_name.to_string(),
        form: None,
        fixture: UpcomingFixture::default(),
    };

    let team_id = match client.resolve_team_id(team_name).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            debug!(team_name, "provider has no match for team");
            return SnapshotOutcome {
                snapshot,
                degraded: true,
            };
        }
        Err(err) => {
            warn!(team_name, %err, "team id resolution failed");
            return SnapshotOutcome {
                snapshot,
                degraded: true,
            };
        }
    };

    on_progress(PanelPhase::Aggregating);

    let (recent, next) = tokio::join!(
        client.recent_results(&team_id),
        client.next_fixture(&team_id)
    );

    let mut degraded = false;
    match recent {
        Ok(events) => snapshot.form = Some(compute_form(team_name, &events)),
        Err(err) => {
            warn!(team_name, %err, "recent results unavailable");
            degraded = true;
        }
    }
    match next {
        Ok(event) => snapshot.fixture = resolve_fixture(team_name, event.as_ref(), catalog),
        Err(err) => {
            warn!(team_name, %err, "next fixture unavailable");
            degraded = true;
        }
    }

    SnapshotOutcome { snapshot, degraded }
}

/// Lifecycle of one selection panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Idle,
    Resolving,
    Aggregating,
    Ready,
    PartialFailure,
}

/// Display state for one panel, guarded by a monotonic selection token.
///
/// Every new selection bumps the token; a pipeline result is committed only
/// if it still carries the current token. A response that arrives after the
/// user has re-selected is dropped, so the panel never shows a superseded
/// team's data.
#[derive(Debug)]
pub struct PanelState {
    token: u64,
    phase: PanelPhase,
    snapshot: Option<TeamStatsSnapshot>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            token: 0,
            phase: PanelPhase::Idle,
            snapshot: None,
        }
    }

    /// Start a fresh pipeline for a new selection. Returns the token the
    /// pipeline must present at commit time.
    pub fn begin_selection(&mut self) -> u64 {
        self.token += 1;
        self.phase = PanelPhase::Resolving;
        self.snapshot = None;
        self.token
    }

    /// Empty the panel (selection cleared). Also invalidates any in-flight
    /// pipeline.
    pub fn clear(&mut self) {
        self.token += 1;
        self.phase = PanelPhase::Idle;
        self.snapshot = None;
    }

    /// Record an intermediate phase, ignored when stale.
    pub fn note_phase(&mut self, token: u64, phase: PanelPhase) {
        if token == self.token {
            self.phase = phase;
        }
    }

    /// Commit a finished pipeline. Returns false (and changes nothing) when
    /// the result is stale.
    pub fn commit(&mut self, token: u64, outcome: SnapshotOutcome) -> bool {
        if token != self.token {
            debug!(token, current = self.token, "dropping stale snapshot");
            return false;
        }
        self.phase = if outcome.degraded {
            PanelPhase::PartialFailure
        } else {
            PanelPhase::Ready
        };
        self.snapshot = Some(outcome.snapshot);
        true
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn snapshot(&self) -> Option<&TeamStatsSnapshot> {
        self.snapshot.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GoalsightError, Result};
    use async_trait::async_trait;

    fn event(home: &str, away: &str, score: Option<(i32, i32)>) -> MatchEvent {
        MatchEvent {
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score: score.map(|(h, _)| h.to_string()),
            away_score: score.map(|(_, a)| a.to_string()),
            date: Some("2025-03-15".to_string()),
            ..Default::default()
        }
    }

    #[derive(Default)]
    struct FakeClient {
        team_id: Option<&'static str>,
        fail_resolve: bool,
        fail_recent: bool,
        fail_next: bool,
        recent: Vec<MatchEvent>,
        next: Option<MatchEvent>,
    }

    #[async_trait]
    impl MatchDataClient for FakeClient {
        async fn resolve_team_id(&self, _team_name: &str) -> Result<Option<String>> {
            if self.fail_resolve {
                return Err(GoalsightError::Transport("connection refused".into()));
            }
            Ok(self.team_id.map(String::from))
        }

        async fn recent_results(&self, _team_id: &str) -> Result<Vec<MatchEvent>> {
            if self.fail_recent {
                return Err(GoalsightError::Transport("timeout".into()));
            }
            Ok(self.recent.clone())
        }

        async fn next_fixture(&self, _team_id: &str) -> Result<Option<MatchEvent>> {
            if self.fail_next {
                return Err(GoalsightError::Transport("timeout".into()));
            }
            Ok(self.next.clone())
        }

        async fn season_events(&self, _league_id: u32, _season: &str) -> Result<Vec<MatchEvent>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn away_matches_are_excluded_from_form() {
        let events = vec![
            event("Arsenal", "Chelsea", Some((2, 1))),
            event("Arsenal", "Fulham", Some((0, 0))),
            event("Arsenal", "Everton", Some((1, 3))),
            event("Liverpool", "Arsenal", Some((0, 4))),
            event("Brentford", "Arsenal", Some((0, 1))),
        ];
        let form = compute_form("Arsenal", &events);
        assert_eq!(
            form,
            FormSummary {
                wins: 1,
                draws: 1,
                losses: 1
            }
        );
    }

    #[test]
    fn window_caps_at_five_home_matches() {
        let events: Vec<MatchEvent> = (0..8)
            .map(|_| event("Arsenal", "Chelsea", Some((2, 0))))
            .collect();
        let form = compute_form("Arsenal", &events);
        assert_eq!(form.wins, 5);
        assert_eq!(form.total(), FORM_WINDOW as u32);
    }

    #[test]
    fn unresolved_scores_are_skipped_not_drawn() {
        let events = vec![
            event("Arsenal", "Chelsea", Some((3, 1))),
            event("Arsenal", "Fulham", None),
            event("Arsenal", "Everton", None),
            event("Arsenal", "Brentford", Some((1, 1))),
            event("Arsenal", "Bournemouth", Some((0, 2))),
            // Sixth home event stays outside the window even though two
            // events above were skipped.
            event("Arsenal", "Southampton", Some((5, 0))),
        ];
        let form = compute_form("Arsenal", &events);
        assert_eq!(
            form,
            FormSummary {
                wins: 1,
                draws: 1,
                losses: 1
            }
        );
    }

    #[test]
    fn empty_event_list_yields_zero_form() {
        assert_eq!(compute_form("Arsenal", &[]), FormSummary::default());
    }

    #[test]
    fn fixture_opponent_is_symmetric() {
        let catalog = TeamCatalog::premier_league();
        let fixture_event = event("Chelsea", "Arsenal", None);

        let as_away = resolve_fixture("Arsenal", Some(&fixture_event), &catalog);
        assert_eq!(as_away.opponent.as_deref(), Some("Chelsea"));

        let as_home = resolve_fixture("Chelsea", Some(&fixture_event), &catalog);
        assert_eq!(as_home.opponent.as_deref(), Some("Arsenal"));
    }

    #[test]
    fn fixture_against_unknown_opponent_keeps_date() {
        let catalog = TeamCatalog::premier_league();
        let cup_tie = event("Arsenal", "Bayern Munich", None);
        let fixture = resolve_fixture("Arsenal", Some(&cup_tie), &catalog);
        assert_eq!(fixture.date.as_deref(), Some("2025-03-15"));
        assert_eq!(fixture.opponent.as_deref(), Some("Bayern Munich"));
        assert!(fixture.opponent_logo.is_none());
    }

    #[test]
    fn no_fixture_is_a_valid_empty_state() {
        let catalog = TeamCatalog::premier_league();
        let fixture = resolve_fixture("Arsenal", None, &catalog);
        assert_eq!(fixture, UpcomingFixture::default());
    }

    #[tokio::test]
    async fn pipeline_produces_full_snapshot() {
        let catalog = TeamCatalog::premier_league();
        let client = FakeClient {
            team_id: Some("133604"),
            recent: vec![
                event("Arsenal", "Chelsea", Some((2, 1))),
                event("Liverpool", "Arsenal", Some((1, 1))),
            ],
            next: Some(event("Fulham", "Arsenal", None)),
            ..Default::default()
        };

        let mut phases = Vec::new();
        let outcome =
            fetch_team_snapshot(&client, &catalog, "Arsenal", |phase| phases.push(phase)).await;

        assert!(!outcome.degraded);
        assert_eq!(phases, vec![PanelPhase::Aggregating]);
        assert_eq!(
            outcome.snapshot.form,
            Some(FormSummary {
                wins: 1,
                draws: 0,
                losses: 0
            })
        );
        assert_eq!(outcome.snapshot.fixture.opponent.as_deref(), Some("Fulham"));
        assert!(outcome.snapshot.fixture.opponent_logo.is_some());
    }

    #[tokio::test]
    async fn unknown_team_degrades_to_empty_snapshot() {
        let catalog = TeamCatalog::premier_league();
        let client = FakeClient::default();

        let outcome = fetch_team_snapshot(&client, &catalog, "Nowhere FC", |_| {}).await;

        assert!(outcome.degraded);
        assert!(outcome.snapshot.form.is_none());
        assert_eq!(outcome.snapshot.fixture, UpcomingFixture::default());
    }

    #[tokio::test]
    async fn recent_results_failure_keeps_fixture() {
        let catalog = TeamCatalog::premier_league();
        let client = FakeClient {
            team_id: Some("133604"),
            fail_recent: true,
            next: Some(event("Arsenal", "Chelsea", None)),
            ..Default::default()
        };

        let outcome = fetch_team_snapshot(&client, &catalog, "Arsenal", |_| {}).await;

        assert!(outcome.degraded);
        assert!(outcome.snapshot.form.is_none());
        assert_eq!(outcome.snapshot.fixture.opponent.as_deref(), Some("Chelsea"));
    }

    #[tokio::test]
    async fn transport_failure_at_resolve_degrades() {
        let catalog = TeamCatalog::premier_league();
        let client = FakeClient {
            fail_resolve: true,
            ..Default::default()
        };

        let outcome = fetch_team_snapshot(&client, &catalog, "Arsenal", |_| {}).await;
        assert!(outcome.degraded);
        assert!(outcome.snapshot.form.is_none());
    }

    fn snapshot_for(team: &str) -> SnapshotOutcome {
        SnapshotOutcome {
            snapshot: TeamStatsSnapshot {
                team_name: team.to_string(),
                form: Some(FormSummary::default()),
                fixture: UpcomingFixture::default(),
            },
            degraded: false,
        }
    }

    #[test]
    fn stale_pipeline_result_is_dropped() {
        let mut panel = PanelState::new();

        // User picks team A, then team B before A's pipeline finishes.
        let token_a = panel.begin_selection();
        let token_b = panel.begin_selection();

        // B's response lands first and commits.
        assert!(panel.commit(token_b, snapshot_for("Team B")));
        // A's late response must be discarded.
        assert!(!panel.commit(token_a, snapshot_for("Team A")));

        assert_eq!(panel.snapshot().unwrap().team_name, "Team B");
        assert_eq!(panel.phase(), PanelPhase::Ready);
    }

    #[test]
    fn clearing_selection_invalidates_in_flight_pipeline() {
        let mut panel = PanelState::new();
        let token = panel.begin_selection();
        panel.clear();

        assert!(!panel.commit(token, snapshot_for("Team A")));
        assert!(panel.snapshot().is_none());
        assert_eq!(panel.phase(), PanelPhase::Idle);
    }

    #[test]
    fn stale_phase_notes_are_ignored() {
        let mut panel = PanelState::new();
        let old = panel.begin_selection();
        let _new = panel.begin_selection();

        panel.note_phase(old, PanelPhase::Aggregating);
        assert_eq!(panel.phase(), PanelPhase::Resolving);
    }

    #[test]
    fn degraded_outcome_lands_in_partial_failure() {
        let mut panel = PanelState::new();
        let token = panel.begin_selection();
        let mut outcome = snapshot_for("Arsenal");
        outcome.degraded = true;

        assert!(panel.commit(token, outcome));
        assert_eq!(panel.phase(), PanelPhase::PartialFailure);
    }
}
