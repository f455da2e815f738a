use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use tui_big_text::{BigText, PixelSize};

use goalsight::catalog::TeamCatalog;
use goalsight::data::{MatchDataClient, SportsDbClient};
use goalsight::error::GoalsightError;
use goalsight::features::DateFeatures;
use goalsight::model::{MatchEvent, PredictionResult, TeamStatsSnapshot};
use goalsight::predict::{self, HttpClassifier, PredictionInput};
use goalsight::schedule;
use goalsight::stats::{self, PanelPhase, PanelState, SnapshotOutcome};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TheSportsDB API key ("3" is the free tier)
    #[arg(long, default_value = "3")]
    api_key: String,

    /// Base URL of the classifier service
    #[arg(long, default_value = "http://localhost:8000")]
    classifier_url: String,

    /// Log file path (the TUI owns the terminal, so logs go to a file)
    #[arg(long, default_value = "goalsight.log")]
    log_file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelSide {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    HomeList,
    AwayList,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Predict,
    Schedule,
}

#[derive(Debug)]
enum AppMsg {
    PanelPhase {
        panel: PanelSide,
        token: u64,
        phase: PanelPhase,
    },
    Snapshot {
        panel: PanelSide,
        token: u64,
        outcome: SnapshotOutcome,
    },
    Prediction {
        seq: u64,
        result: std::result::Result<PredictionResult, GoalsightError>,
    },
    Schedule(std::result::Result<Vec<MatchEvent>, GoalsightError>),
}

#[derive(Debug)]
enum ScheduleState {
    NotLoaded,
    Loading,
    Loaded(Vec<MatchEvent>),
    Failed(String),
}

/// Ordered editable form fields. Index 0 is the date; editing it re-runs
/// the encoder over the five derived fields.
const FORM_FIELDS: [&str; 8] = [
    "Match date (YYYY-MM-DD)",
    "Month (1-12)",
    "Weekday (0=Sun..6=Sat)",
    "Year",
    "Last 5 Home Wins",
    "Last 5 Away Wins",
    "Is Weekend? (1/0)",
    "First Half Season? (1/0)",
];

struct App {
    should_quit: bool,
    team_names: Vec<String>,
    focus: Focus,
    view: View,
    home_list: ListState,
    away_list: ListState,
    home_panel: PanelState,
    away_panel: PanelState,
    home_team: Option<String>,
    away_team: Option<String>,
    date_input: String,
    form: PredictionInput,
    form_cursor: usize,
    predicting: bool,
    prediction_seq: u64,
    result: Option<PredictionResult>,
    error: Option<String>,
    schedule: ScheduleState,
    schedule_scroll: usize,
}

impl App {
    fn new(catalog: &TeamCatalog) -> Self {
        let team_names = catalog
            .teams()
            .iter()
            .map(|t| t.display_name.to_string())
            .collect();
        let mut home_list = ListState::default();
        home_list.select(Some(0));
        let mut away_list = ListState::default();
        away_list.select(Some(0));
        Self {
            should_quit: false,
            team_names,
            focus: Focus::HomeList,
            view: View::Predict,
            home_list,
            away_list,
            home_panel: PanelState::new(),
            away_panel: PanelState::new(),
            home_team: None,
            away_team: None,
            date_input: String::new(),
            form: PredictionInput::default(),
            form_cursor: 0,
            predicting: false,
            prediction_seq: 0,
            result: None,
            error: None,
            schedule: ScheduleState::NotLoaded,
            schedule_scroll: 0,
        }
    }

    fn next_focus(&mut self) {
        self.focus = match self.focus {
            Focus::HomeList => Focus::AwayList,
            Focus::AwayList => Focus::Form,
            Focus::Form => Focus::HomeList,
        };
    }

    fn focused_list(&mut self) -> &mut ListState {
        match self.focus {
            Focus::AwayList => &mut self.away_list,
            _ => &mut self.home_list,
        }
    }

    fn list_next(&mut self) {
        let len = self.team_names.len();
        let state = self.focused_list();
        let i = match state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        state.select(Some(i));
    }

    fn list_previous(&mut self) {
        let len = self.team_names.len();
        let state = self.focused_list();
        let i = match state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        state.select(Some(i));
    }

    fn panel_state(&mut self, panel: PanelSide) -> &mut PanelState {
        match panel {
            PanelSide::Home => &mut self.home_panel,
            PanelSide::Away => &mut self.away_panel,
        }
    }

    /// Clear the focused panel's selection; the fresh token invalidates any
    /// pipeline still in flight for it.
    fn clear_focused_panel(&mut self) {
        match self.focus {
            Focus::HomeList => {
                self.home_team = None;
                self.form.home_team.clear();
                self.home_panel.clear();
            }
            Focus::AwayList => {
                self.away_team = None;
                self.form.away_team.clear();
                self.away_panel.clear();
            }
            Focus::Form => {}
        }
    }

    fn reset_all(&mut self) {
        self.home_team = None;
        self.away_team = None;
        self.home_panel.clear();
        self.away_panel.clear();
        self.date_input.clear();
        self.form = PredictionInput::default();
        self.result = None;
        self.error = None;
        self.predicting = false;
        self.prediction_seq += 1;
    }

    fn form_field_mut(&mut self) -> &mut String {
        match self.form_cursor {
            0 => &mut self.date_input,
            1 => &mut self.form.month,
            2 => &mut self.form.weekday,
            3 => &mut self.form.year,
            4 => &mut self.form.last_5_home_wins,
            5 => &mut self.form.last_5_away_wins,
            6 => &mut self.form.is_weekend,
            _ => &mut self.form.is_first_half_season,
        }
    }

    fn form_field_value(&self, index: usize) -> &str {
        match index {
            0 => &self.date_input,
            1 => &self.form.month,
            2 => &self.form.weekday,
            3 => &self.form.year,
            4 => &self.form.last_5_home_wins,
            5 => &self.form.last_5_away_wins,
            6 => &self.form.is_weekend,
            _ => &self.form.is_first_half_season,
        }
    }

    /// Re-encode when the date parses. Manual edits to the derived fields
    /// stick until the date changes again.
    fn maybe_apply_date(&mut self) {
        if let Ok(date) = NaiveDate::parse_from_str(self.date_input.trim(), "%Y-%m-%d") {
            let features = DateFeatures::encode(date);
            self.form.apply_date_features(&features);
        }
    }
}

struct Services {
    data: Arc<SportsDbClient>,
    classifier: Arc<HttpClassifier>,
    catalog: Arc<TeamCatalog>,
    tx: mpsc::Sender<AppMsg>,
}

impl Services {
    fn spawn_snapshot(&self, panel: PanelSide, token: u64, team: String) {
        let data = self.data.clone();
        let catalog = self.catalog.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let progress_tx = tx.clone();
            let client: &dyn MatchDataClient = data.as_ref();
            let outcome = stats::fetch_team_snapshot(client, &catalog, &team, |phase| {
                let _ = progress_tx.try_send(AppMsg::PanelPhase { panel, token, phase });
            })
            .await;
            let _ = tx
                .send(AppMsg::Snapshot {
                    panel,
                    token,
                    outcome,
                })
                .await;
        });
    }

    fn spawn_prediction(&self, seq: u64, input: PredictionInput) {
        let classifier = self.classifier.clone();
        let catalog = self.catalog.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = predict::predict(classifier.as_ref(), &catalog, &input).await;
            let _ = tx.send(AppMsg::Prediction { seq, result }).await;
        });
    }

    fn spawn_schedule(&self) {
        let data = self.data.clone();
        let catalog = self.catalog.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let client: &dyn MatchDataClient = data.as_ref();
            let result = schedule::season_fixtures(client, &catalog).await;
            let _ = tx.send(AppMsg::Schedule(result)).await;
        });
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = std::fs::File::create(&args.log_file)?;
    let (log_writer, _log_guard) = tracing_appender::non_blocking(log_file);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(log_writer)
        .with_ansi(false)
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let catalog = Arc::new(TeamCatalog::premier_league());
    let (tx, mut rx) = mpsc::channel::<AppMsg>(100);
    let services = Services {
        data: Arc::new(SportsDbClient::new(&args.api_key)),
        classifier: Arc::new(HttpClassifier::new(&args.classifier_url)),
        catalog: catalog.clone(),
        tx,
    };

    let mut app = App::new(&catalog);
    let res = run_app(&mut terminal, &mut app, &services, &mut rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    services: &Services,
    rx: &mut mpsc::Receiver<AppMsg>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                on_key(app, services, key.code);
            }
        }

        while let Ok(msg) = rx.try_recv() {
            on_message(app, msg);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn on_key(app: &mut App, services: &Services, code: KeyCode) {
    if app.view == View::Schedule {
        match code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('s') | KeyCode::Esc => app.view = View::Predict,
            KeyCode::Down | KeyCode::Char('j') => app.schedule_scroll += 1,
            KeyCode::Up | KeyCode::Char('k') => {
                app.schedule_scroll = app.schedule_scroll.saturating_sub(1)
            }
            _ => {}
        }
        return;
    }

    // Text entry into the focused form field takes precedence.
    if app.focus == Focus::Form {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                app.form_field_mut().push(c);
                if app.form_cursor == 0 {
                    app.maybe_apply_date();
                }
                return;
            }
            KeyCode::Backspace => {
                app.form_field_mut().pop();
                if app.form_cursor == 0 {
                    app.maybe_apply_date();
                }
                return;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.form_cursor = (app.form_cursor + 1) % FORM_FIELDS.len();
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.form_cursor = app
                    .form_cursor
                    .checked_sub(1)
                    .unwrap_or(FORM_FIELDS.len() - 1);
                return;
            }
            KeyCode::Enter => {
                start_prediction(app, services);
                return;
            }
            _ => {}
        }
    }

    match code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Tab => app.next_focus(),
        KeyCode::Down | KeyCode::Char('j') => app.list_next(),
        KeyCode::Up | KeyCode::Char('k') => app.list_previous(),
        KeyCode::Enter => select_team(app, services),
        KeyCode::Char('x') => app.clear_focused_panel(),
        KeyCode::Char('p') => start_prediction(app, services),
        KeyCode::Char('r') => app.reset_all(),
        KeyCode::Char('s') => {
            app.view = View::Schedule;
            if matches!(app.schedule, ScheduleState::NotLoaded) {
                app.schedule = ScheduleState::Loading;
                services.spawn_schedule();
            }
        }
        _ => {}
    }
}

fn select_team(app: &mut App, services: &Services) {
    let panel = match app.focus {
        Focus::HomeList => PanelSide::Home,
        Focus::AwayList => PanelSide::Away,
        Focus::Form => return,
    };
    let Some(index) = app.focused_list().selected() else {
        return;
    };
    let team = app.team_names[index].clone();

    match panel {
        PanelSide::Home => {
            app.home_team = Some(team.clone());
            app.form.home_team = team.clone();
        }
        PanelSide::Away => {
            app.away_team = Some(team.clone());
            app.form.away_team = team.clone();
        }
    }
    let token = app.panel_state(panel).begin_selection();
    services.spawn_snapshot(panel, token, team);
}

fn start_prediction(app: &mut App, services: &Services) {
    if app.predicting {
        return;
    }
    app.prediction_seq += 1;
    app.result = None;
    app.error = None;
    app.predicting = true;
    services.spawn_prediction(app.prediction_seq, app.form.clone());
}

fn on_message(app: &mut App, msg: AppMsg) {
    match msg {
        AppMsg::PanelPhase {
            panel,
            token,
            phase,
        } => {
            app.panel_state(panel).note_phase(token, phase);
        }
        AppMsg::Snapshot {
            panel,
            token,
            outcome,
        } => {
            app.panel_state(panel).commit(token, outcome);
        }
        AppMsg::Prediction { seq, result } => {
            // A reset while the request was in flight makes it stale.
            if seq != app.prediction_seq {
                return;
            }
            app.predicting = false;
            match result {
                Ok(result) => {
                    app.result = Some(result);
                    app.error = None;
                }
                Err(err) => {
                    app.result = None;
                    app.error = Some(err.to_string());
                }
            }
        }
        AppMsg::Schedule(result) => {
            app.schedule = match result {
                Ok(fixtures) => ScheduleState::Loaded(fixtures),
                Err(err) => ScheduleState::Failed(err.to_string()),
            };
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    match app.view {
        View::Predict => draw_predict(f, app),
        View::Schedule => draw_schedule(f, app),
    }
}

fn draw_predict(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(16),    // Team panels
            Constraint::Length(12), // Prediction form
            Constraint::Min(6),     // Result / error
            Constraint::Length(1),  // Help line
        ])
        .split(f.area());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(42),
            Constraint::Percentage(16),
            Constraint::Percentage(42),
        ])
        .split(chunks[0]);

    draw_team_panel(f, app, PanelSide::Home, panels[0]);
    draw_vs_banner(f, panels[1]);
    draw_team_panel(f, app, PanelSide::Away, panels[2]);
    draw_form(f, app, chunks[1]);
    draw_result(f, app, chunks[2]);

    let help = Paragraph::new(
        " q quit | Tab focus | j/k move | Enter select/predict | x clear | p predict | r reset | s schedule",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn draw_team_panel(f: &mut Frame, app: &mut App, panel: PanelSide, area: Rect) {
    let (title, focused, selected_team) = match panel {
        PanelSide::Home => (
            " HOME ",
            app.focus == Focus::HomeList,
            app.home_team.clone(),
        ),
        PanelSide::Away => (
            " AWAY ",
            app.focus == Focus::AwayList,
            app.away_team.clone(),
        ),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(8)])
        .split(area);

    let items: Vec<ListItem> = app
        .team_names
        .iter()
        .map(|name| ListItem::new(name.as_str()))
        .collect();
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray)
                .fg(Color::White),
        );
    let state = match panel {
        PanelSide::Home => &mut app.home_list,
        PanelSide::Away => &mut app.away_list,
    };
    f.render_stateful_widget(list, chunks[0], state);

    let panel_state = match panel {
        PanelSide::Home => &app.home_panel,
        PanelSide::Away => &app.away_panel,
    };
    let stats = stats_lines(selected_team.as_deref(), panel_state);
    let stats_block = Paragraph::new(stats)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" STATS ").borders(Borders::ALL));
    f.render_widget(stats_block, chunks[1]);
}

fn stats_lines<'a>(team: Option<&'a str>, panel: &'a PanelState) -> Vec<Line<'a>> {
    let Some(team) = team else {
        return vec![Line::from(Span::styled(
            "No team selected",
            Style::default().fg(Color::DarkGray),
        ))];
    };

    let mut lines = vec![Line::from(Span::styled(
        team,
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    match panel.phase() {
        PanelPhase::Idle => {}
        PanelPhase::Resolving => lines.push(Line::from("Resolving team...")),
        PanelPhase::Aggregating => lines.push(Line::from("Fetching results...")),
        PanelPhase::Ready | PanelPhase::PartialFailure => {
            if let Some(snapshot) = panel.snapshot() {
                lines.extend(snapshot_lines(snapshot));
            }
            if panel.phase() == PanelPhase::PartialFailure {
                lines.push(Line::from(Span::styled(
                    "(partial data)",
                    Style::default().fg(Color::Yellow),
                )));
            }
        }
    }
    lines
}

fn snapshot_lines(snapshot: &TeamStatsSnapshot) -> Vec<Line<'_>> {
    let mut lines = Vec::new();

    let form_line = match &snapshot.form {
        Some(form) => Line::from(vec![
            Span::raw("Last 5 Home: "),
            Span::styled(
                format!("{}W ", form.wins),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{}D ", form.draws)),
            Span::styled(
                format!("{}L", form.losses),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from("Last 5 Home: no data"),
    };
    lines.push(form_line);

    match (&snapshot.fixture.date, &snapshot.fixture.opponent) {
        (date, Some(opponent)) => {
            let date = date.as_deref().unwrap_or("TBD");
            lines.push(Line::from(format!("Next: vs {opponent} on {date}")));
        }
        _ => lines.push(Line::from("No upcoming fixture")),
    }

    lines
}

fn draw_vs_banner(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);
    let vs = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(Color::White))
        .lines(vec!["VS".into()])
        .alignment(Alignment::Center)
        .build();
    f.render_widget(vs, chunks[1]);
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Form;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut lines = vec![Line::from(vec![
        Span::raw("Home: "),
        Span::styled(
            app.home_team.as_deref().unwrap_or("—"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Away: "),
        Span::styled(
            app.away_team.as_deref().unwrap_or("—"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];

    for (i, label) in FORM_FIELDS.iter().enumerate() {
        let value = app.form_field_value(i);
        let marker = if focused && i == app.form_cursor {
            "> "
        } else {
            "  "
        };
        let style = if focused && i == app.form_cursor {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{label}: {value}"),
            style,
        )));
    }

    let title = if app.form.is_complete() {
        " PREDICT MATCH OUTCOME (ready) "
    } else {
        " PREDICT MATCH OUTCOME "
    };
    let form = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(form, area);
}

fn draw_result(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if app.predicting {
        lines.push(Line::from("Predicting..."));
    } else if let Some(error) = &app.error {
        lines.push(Line::from(Span::styled(
            format!("Error: {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else if let Some(result) = &app.result {
        lines.push(Line::from(Span::styled(
            format!("Prediction: {}", result.predicted_outcome),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        let mut probs: Vec<(&String, &f64)> = result.probabilities.iter().collect();
        probs.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
        for (label, p) in probs {
            lines.push(Line::from(format!("  {label:<10} {:>6.2}%", p * 100.0)));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "Pick both teams, fill the form, press p to predict",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let result = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" RESULT ").borders(Borders::ALL));
    f.render_widget(result, area);
}

fn draw_schedule(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(f.area());

    let lines: Vec<Line> = match &app.schedule {
        ScheduleState::NotLoaded | ScheduleState::Loading => {
            vec![Line::from("Loading fixtures...")]
        }
        ScheduleState::Failed(err) => vec![Line::from(Span::styled(
            format!("Error loading fixtures: {err}"),
            Style::default().fg(Color::Red),
        ))],
        ScheduleState::Loaded(fixtures) if fixtures.is_empty() => {
            vec![Line::from("No Premier League fixtures found.")]
        }
        ScheduleState::Loaded(fixtures) => {
            app.schedule_scroll = app.schedule_scroll.min(fixtures.len().saturating_sub(1));
            fixtures
                .iter()
                .skip(app.schedule_scroll)
                .map(|m| {
                    let date = m.date.as_deref().unwrap_or("TBD");
                    let time = m.time.as_deref().unwrap_or("");
                    Line::from(vec![
                        Span::styled(
                            format!("{:<24}", m.home_team),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" vs "),
                        Span::styled(
                            format!("{:<24}", m.away_team),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  {date} {time}"),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ])
                })
                .collect()
        }
    };

    let schedule = Paragraph::new(lines).block(
        Block::default()
            .title(" PREMIER LEAGUE FIXTURES 2024/25 ")
            .borders(Borders::ALL),
    );
    f.render_widget(schedule, chunks[0]);

    let help = Paragraph::new(" q quit | j/k scroll | s/Esc back")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
