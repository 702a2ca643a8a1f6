mod logger;
mod model;

use std::{
    collections::HashMap,
    env, fs,
    path::Path,
    time::{Duration, Instant},
};

use chrono::TimeZone;
use crossterm::{
    event::{self, Event as CEvent, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use logger::{LogLevel, Logger};
use model::clock::{academy_offset, DashboardClock};
use model::overrides::{EffectiveRoomState, RoomOverrides};
use model::rooms::{
    room_category, room_display_name, same_room, schedule_code_to_id, schematic_name_to_id,
};
use model::sample_day::sample_academy;
use model::schedule::{Assignment, AssignmentKind, Period, PeriodKind};
use model::status::{derive_snapshot, AcademyData, LiveSnapshot, StudentStatus};
use model::students::Student;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Terminal,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AcademyConfig {
    periods: Vec<PeriodConfig>,
    assignments: Vec<AssignmentConfig>,
    #[serde(default)]
    students: Vec<StudentConfig>,
    /// Group code -> track name ("industrial" / "service")
    #[serde(default)]
    tracks: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct PeriodConfig {
    name: String,
    start: String,
    end: String,
    /// "class" or "break"
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct AssignmentConfig {
    id: u32,
    day: String,
    period: String,
    group: String,
    classroom: String,
    instructors: Vec<String>,
    #[serde(default)]
    topic: String,
    /// "Technical" or "Professional Development"
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct StudentConfig {
    #[serde(rename = "navaId")]
    nava_id: String,
    name: String,
    surname: String,
    #[serde(default)]
    company: String,
    #[serde(rename = "techGroup")]
    tech_group: String,
}

fn main() {
    let logger = Logger::new(LogLevel::Debug);
    let args: Vec<String> = env::args().collect();

    if let Some(config_path) = parse_config_path(&args) {
        if let Err(err) = run_tui_with_config(&config_path, &logger) {
            logger.error(&format!("Failed to run dashboard from config: {}", err));
            std::process::exit(1);
        }
    } else {
        logger.info("No config file provided - running built-in walkthrough");
        run_examples(&logger);
        logger.info("\nWalkthrough complete");
    }
}

fn parse_config_path(args: &[String]) -> Option<String> {
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => return iter.next().cloned(),
            path => return Some(path.to_string()),
        }
    }
    None
}

const TAB_TITLES: [&str; 3] = ["Rooms", "Classes", "Students"];

struct App {
    data: AcademyData,
    clock: DashboardClock,
    overrides: RoomOverrides,
    snapshot: LiveSnapshot,
    /// Distinct classrooms from the weekly plan, in schedule naming,
    /// sorted by display name
    rooms: Vec<String>,
    selected_room: usize,
    status_tab: usize,
    /// Some while the operator is typing an out-of-service reason
    reason_input: Option<String>,
    tick_rate: Duration,
    last_tick: Instant,
    title: String,
}

impl App {
    fn new(data: AcademyData, title: String) -> Self {
        let clock = DashboardClock::new();
        let snapshot = derive_snapshot(&data, clock.now(), clock.is_simulated());
        let rooms = academy_rooms(&data.assignments);
        App {
            data,
            clock,
            overrides: RoomOverrides::new(),
            snapshot,
            rooms,
            selected_room: 0,
            status_tab: 0,
            reason_input: None,
            tick_rate: Duration::from_secs(1),
            last_tick: Instant::now(),
            title,
        }
    }

    fn refresh(&mut self) {
        self.snapshot = derive_snapshot(&self.data, self.clock.now(), self.clock.is_simulated());
    }

    fn selected_room_display(&self) -> Option<String> {
        self.rooms.get(self.selected_room).map(|r| room_display_name(r))
    }
}

/// Distinct schedule-naming room codes from the weekly plan, sorted by
/// their display names so the floor list reads naturally
fn academy_rooms(assignments: &[Assignment]) -> Vec<String> {
    let mut rooms: Vec<String> = Vec::new();
    for assignment in assignments {
        if !rooms.contains(&assignment.classroom) {
            rooms.push(assignment.classroom.clone());
        }
    }
    rooms.sort_by_key(|r| room_display_name(r));
    rooms
}

fn run_tui_with_config(config_path: &str, logger: &Logger) -> Result<(), Box<dyn std::error::Error>> {
    let data = load_academy_from_config(config_path, logger)?;
    let mut app = App::new(data, format!("AcademyLive - {}", config_path));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, logger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn load_academy_from_config(
    config_path: &str,
    logger: &Logger,
) -> Result<AcademyData, Box<dyn std::error::Error>> {
    logger.info(&format!("Loading academy config from {}", config_path));

    let path = Path::new(config_path);
    if !path.exists() {
        return Err(format!("Config file not found at {}", config_path).into());
    }

    let contents = fs::read_to_string(path)?;
    let config: AcademyConfig = serde_json::from_str(&contents)?;

    let mut periods = Vec::new();
    for period_cfg in &config.periods {
        let kind = match period_cfg.kind.as_str() {
            "break" => PeriodKind::Break,
            "class" => PeriodKind::Class,
            other => {
                logger.warning(&format!(
                    "Period {} has unknown type '{}', treating as class",
                    period_cfg.name, other
                ));
                PeriodKind::Class
            }
        };
        let period = Period::new(&period_cfg.name, &period_cfg.start, &period_cfg.end, kind);
        // Malformed boundaries never crash the engine, but they make the
        // period permanently inactive, which is always a data defect.
        if period.start_minute().is_none() || period.end_minute().is_none() {
            logger.warning(&format!(
                "Period {} has unparsable boundaries {}-{} and will never be active",
                period.name, period.start, period.end
            ));
        }
        periods.push(period);
    }

    let mut assignments = Vec::new();
    for assignment_cfg in &config.assignments {
        let kind = match assignment_cfg.kind.as_str() {
            "Technical" => AssignmentKind::Technical,
            "Professional Development" => AssignmentKind::ProfessionalDevelopment,
            other => {
                logger.warning(&format!(
                    "Assignment {} has unknown type '{}', treating as Professional Development",
                    assignment_cfg.id, other
                ));
                AssignmentKind::ProfessionalDevelopment
            }
        };
        if assignment_cfg.instructors.is_empty() {
            logger.warning(&format!("Assignment {} has no instructors", assignment_cfg.id));
        }
        assignments.push(Assignment {
            id: assignment_cfg.id,
            day: assignment_cfg.day.clone(),
            period: assignment_cfg.period.clone(),
            group: assignment_cfg.group.clone(),
            classroom: assignment_cfg.classroom.clone(),
            instructors: assignment_cfg.instructors.clone(),
            topic: assignment_cfg.topic.clone(),
            kind,
        });
    }
    warn_on_double_bookings(&assignments, logger);

    let students = config
        .students
        .iter()
        .map(|s| Student {
            nava_id: s.nava_id.clone(),
            name: s.name.clone(),
            surname: s.surname.clone(),
            company: s.company.clone(),
            tech_group: s.tech_group.clone(),
        })
        .collect();

    Ok(AcademyData {
        periods,
        assignments,
        students,
        tracks: config.tracks,
    })
}

/// The uniqueness invariant (one room per group, one group per room, per
/// (day, period)) is a property of the authored data. The engine tolerates
/// violations with first/last-wins behavior, so surface them at load time.
fn warn_on_double_bookings(assignments: &[Assignment], logger: &Logger) {
    let mut groups: HashMap<(&str, &str, &str), u32> = HashMap::new();
    let mut rooms: HashMap<(&str, &str, &str), u32> = HashMap::new();
    for a in assignments {
        if let Some(first) = groups.insert((&a.day, &a.period, &a.group), a.id) {
            logger.warning(&format!(
                "Group {} is double-booked on {} {} (assignments {} and {})",
                a.group, a.day, a.period, first, a.id
            ));
        }
        if let Some(first) = rooms.insert((&a.day, &a.period, &a.classroom), a.id) {
            logger.warning(&format!(
                "Room {} is double-booked on {} {} (assignments {} and {})",
                a.classroom, a.day, a.period, first, a.id
            ));
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    logger: &Logger,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| draw_ui(f, app))?;

        let timeout = app
            .tick_rate
            .checked_sub(app.last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let CEvent::Key(KeyEvent { code, kind: KeyEventKind::Press, .. }) = event::read()? {
                if app.reason_input.is_some() {
                    handle_reason_key(app, code, logger);
                } else if handle_key(app, code, logger) {
                    return Ok(());
                }
            }
        }

        // The single ticker: once a second recompute the snapshot from the
        // composed clock. Mode switches only mutate the clock, so there is
        // never a second interval to clear.
        if app.last_tick.elapsed() >= app.tick_rate {
            app.refresh();
            app.last_tick = Instant::now();
        }
    }
}

/// Returns true when the app should quit
fn handle_key(app: &mut App, code: KeyCode, logger: &Logger) -> bool {
    match code {
        KeyCode::Char('q') => return true,
        KeyCode::Tab => {
            app.status_tab = (app.status_tab + 1) % TAB_TITLES.len();
        }
        KeyCode::BackTab => {
            app.status_tab = (app.status_tab + TAB_TITLES.len() - 1) % TAB_TITLES.len();
        }
        KeyCode::Up => {
            app.selected_room = app.selected_room.saturating_sub(1);
        }
        KeyCode::Down => {
            if app.selected_room + 1 < app.rooms.len() {
                app.selected_room += 1;
            }
        }
        KeyCode::Char('o') => {
            if app.selected_room_display().is_some() {
                app.reason_input = Some(String::new());
            }
        }
        KeyCode::Char('a') => {
            if let Some(room) = app.selected_room_display() {
                app.overrides.set_available(&room);
                logger.info(&format!("Room {} marked available", room));
            }
        }
        KeyCode::Char('s') => {
            if app.clock.is_simulated() {
                app.clock.set_simulated_time(None);
                logger.info("Simulation off - back to live clock");
            } else {
                app.clock
                    .set_simulated_time(Some(app.clock.now().timestamp_millis()));
                logger.info("Simulation on - date pinned to today");
            }
            app.refresh();
        }
        KeyCode::Left => {
            app.clock.scrub_days(-1);
            app.refresh();
        }
        KeyCode::Right => {
            app.clock.scrub_days(1);
            app.refresh();
        }
        _ => {}
    }
    false
}

/// Reason-entry mode for the out-of-service override. The non-empty check
/// lives here at the UI boundary; the store itself accepts anything.
fn handle_reason_key(app: &mut App, code: KeyCode, logger: &Logger) {
    match code {
        KeyCode::Esc => {
            app.reason_input = None;
        }
        KeyCode::Enter => {
            let reason = app.reason_input.take().unwrap_or_default();
            let reason = reason.trim().to_string();
            if reason.is_empty() {
                // Keep the prompt open until there is a real reason
                app.reason_input = Some(String::new());
                return;
            }
            if let Some(room) = app.selected_room_display() {
                app.overrides.set_out_of_service(&room, &reason);
                logger.info(&format!("Room {} out of service: {}", room, reason));
            }
        }
        KeyCode::Backspace => {
            if let Some(buffer) = app.reason_input.as_mut() {
                buffer.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(buffer) = app.reason_input.as_mut() {
                buffer.push(c);
            }
        }
        _ => {}
    }
}

fn draw_ui(f: &mut ratatui::Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)].as_ref())
        .split(f.size());

    draw_overview(f, chunks[0], app);

    if app.reason_input.is_some() {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
            .split(chunks[1]);
        draw_status_tabs(f, right[0], app);
        draw_reason_prompt(f, right[1], app);
    } else {
        draw_status_tabs(f, chunks[1], app);
    }
}

fn draw_overview(f: &mut ratatui::Frame, area: Rect, app: &App) {
    let snapshot = &app.snapshot;

    let mode = match app.clock.simulated_date() {
        Some(date) => format!("Simulating {}", date.format("%Y-%m-%d")),
        None => "Live".to_string(),
    };
    let period_line = match &snapshot.current_period {
        Some(period) => {
            let remaining = snapshot
                .minutes_remaining
                .map(|m| format!(" | {} min left", m))
                .unwrap_or_default();
            format!(
                "Period: {} ({}-{}){} [{:.0}%]",
                period.name,
                period.start,
                period.end,
                remaining,
                snapshot.period_progress * 100.0
            )
        }
        None => "Period: -".to_string(),
    };
    let in_class = snapshot
        .live_students
        .iter()
        .filter(|s| s.status == StudentStatus::InClass)
        .count();

    let lines = vec![
        Line::from(app.title.clone()),
        Line::from(format!("Mode: {}", mode)),
        Line::from(format!(
            "Now: {} {} (week {})",
            snapshot.day_name,
            snapshot.now.format("%d %b %Y %H:%M:%S"),
            snapshot.week_number
        )),
        Line::from(format!("Status: {}", snapshot.overall_status)),
        Line::from(format!(
            "Operational hours: {}",
            if snapshot.is_operational_hours { "yes" } else { "no" }
        )),
        Line::from(period_line),
        Line::from(format!(
            "Classes running: {} | Students in class: {}/{}",
            snapshot.live_classes.len(),
            in_class,
            snapshot.live_students.len()
        )),
        Line::from("Controls:"),
        Line::from("  tab   - switch panel"),
        Line::from("  up/dn - select room"),
        Line::from("  o     - mark room out of service"),
        Line::from("  a     - mark room available"),
        Line::from("  s     - toggle date simulation"),
        Line::from("  arrows- scrub simulated day"),
        Line::from("  q     - quit"),
    ];

    let overview = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Academy"))
        .wrap(Wrap { trim: true });

    f.render_widget(overview, area);
}

fn draw_status_tabs(f: &mut ratatui::Frame, area: Rect, app: &App) {
    let tabs_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(area);

    let titles: Vec<Line> = TAB_TITLES.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .select(app.status_tab)
        .block(Block::default().borders(Borders::ALL).title("Floor"))
        .highlight_style(Style::default().fg(Color::Yellow));
    f.render_widget(tabs, tabs_area[0]);

    match app.status_tab {
        0 => draw_rooms(f, tabs_area[1], app),
        1 => draw_classes(f, tabs_area[1], app),
        _ => draw_students(f, tabs_area[1], app),
    }
}

fn draw_rooms(f: &mut ratatui::Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for (idx, room) in app.rooms.iter().enumerate() {
        let display = room_display_name(room);
        let category = room_category(room).unwrap_or("Room");
        let occupied = app.snapshot.occupancy.contains_key(room);

        // Manual overrides beat the derived occupancy
        let state = match app.overrides.effective_state(&display, occupied) {
            EffectiveRoomState::OutOfService(reason) => format!("OUT OF SERVICE - {}", reason),
            EffectiveRoomState::Occupied => {
                let entry = &app.snapshot.occupancy[room];
                format!(
                    "{} [{} / {}] - {} ({})",
                    entry.group,
                    entry.track_type.as_str(),
                    entry.session_type.as_str(),
                    entry.topic,
                    entry.instructors.join(", ")
                )
            }
            EffectiveRoomState::Free => "Free".to_string(),
        };

        let marker = if idx == app.selected_room { ">" } else { " " };
        lines.push(Line::from(format!(
            "{} {} [{}]: {}",
            marker, display, category, state
        )));
    }

    let para = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn draw_classes(f: &mut ratatui::Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    if app.snapshot.live_classes.is_empty() {
        lines.push(Line::from("No classes in session"));
    }
    for class in &app.snapshot.live_classes {
        lines.push(Line::from(format!(
            "{} [{} / {}] in {}: {} ({})",
            class.group,
            class.track_type.as_str(),
            class.session_type.as_str(),
            room_display_name(&class.classroom),
            class.topic,
            class.instructors.join(", ")
        )));
    }

    let para = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn draw_students(f: &mut ratatui::Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for student in &app.snapshot.live_students {
        lines.push(Line::from(format!(
            "{} {} ({}): {} | {} | {}",
            student.nava_id,
            student.full_name,
            student.tech_group,
            student.status.as_str(),
            student.location,
            student.current_period.as_deref().unwrap_or("-")
        )));
    }

    let para = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn draw_reason_prompt(f: &mut ratatui::Frame, area: Rect, app: &App) {
    let buffer = app.reason_input.as_deref().unwrap_or("");
    let room = app.selected_room_display().unwrap_or_default();
    let para = Paragraph::new(Line::from(format!("{}_", buffer))).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Reason for {} (Enter confirm, Esc cancel)", room)),
    );
    f.render_widget(para, area);
}

fn run_examples(logger: &Logger) {
    logger.debug("Dashboard walkthrough started");

    let data = sample_academy();
    let companies: std::collections::HashSet<&str> =
        data.students.iter().map(|s| s.company.as_str()).collect();
    logger.info(&format!(
        "Sample academy: {} periods, {} assignments, {} students from {} sponsor companies",
        data.periods.len(),
        data.assignments.len(),
        data.students.len(),
        companies.len()
    ));

    // ============================================================
    // Example 1: a Sunday from before opening to after close
    // ============================================================
    logger.info("\n=== Example 1: One day of live status ===");
    let sunday = |h: u32, m: u32| {
        academy_offset()
            .with_ymd_and_hms(2025, 3, 2, h, m, 0)
            .unwrap()
    };

    for (label, hour, minute) in [
        ("Before opening", 7, 30),
        ("Mid P1", 8, 45),
        ("Morning break", 9, 40),
        ("Mid P3", 12, 30),
        ("After close", 16, 0),
    ] {
        let snapshot = derive_snapshot(&data, sunday(hour, minute), false);
        logger.info(&format!(
            "{} ({:02}:{:02}): status={} period={} classes={} occupied_rooms={}",
            label,
            hour,
            minute,
            snapshot.overall_status,
            snapshot
                .current_period
                .as_ref()
                .map(|p| p.name.as_str())
                .unwrap_or("-"),
            snapshot.live_classes.len(),
            snapshot.occupancy.len()
        ));
        if let Some(student) = snapshot.live_students.first() {
            logger.info(&format!(
                "  e.g. {}: {} | {}",
                student.full_name,
                student.status.as_str(),
                student.location
            ));
        }
    }

    // ============================================================
    // Example 2: correlating the two room vocabularies
    // ============================================================
    logger.info("\n=== Example 2: Room code normalization ===");
    for (schedule_code, schematic_name) in [("2.01", "C-201"), ("1.05", "L-105"), ("WS-0.13", "WS-13")] {
        let schedule_id = schedule_code_to_id(schedule_code);
        let schematic_id = schematic_name_to_id(schematic_name);
        logger.info(&format!(
            "schedule {} -> {} | schematic {} -> {} | same room: {}",
            schedule_code,
            schedule_id,
            schematic_name,
            schematic_id,
            same_room(&schedule_id, &schematic_id)
        ));
    }

    // ============================================================
    // Example 3: manual override beats the schedule
    // ============================================================
    logger.info("\n=== Example 3: Out-of-service override ===");
    let mut overrides = RoomOverrides::new();
    overrides.set_out_of_service("C-201", "Projector replacement");
    let snapshot = derive_snapshot(&data, sunday(8, 45), false);
    let occupied = snapshot.occupancy.contains_key("2.01");
    match overrides.effective_state("C-201", occupied) {
        EffectiveRoomState::OutOfService(reason) => {
            logger.info(&format!(
                "C-201 is scheduled (occupied={}) but shows OUT OF SERVICE: {}",
                occupied, reason
            ));
        }
        other => logger.warning(&format!("Unexpected state for C-201: {:?}", other)),
    }
    overrides.set_available("C-201");
    logger.debug(&format!("C-201 override now {:?}", overrides.status("C-201")));
    logger.info("C-201 back in service");

    // ============================================================
    // Example 4: date simulation keeps seconds ticking
    // ============================================================
    logger.info("\n=== Example 4: Date simulation ===");
    let mut clock = DashboardClock::new();
    clock.scrub_days(-7);
    logger.info(&format!(
        "Pinned to {} - now reads {}",
        clock
            .simulated_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        clock.now().format("%A %H:%M:%S")
    ));
    let preview = derive_snapshot(&data, clock.now(), clock.is_simulated());
    logger.info(&format!(
        "Preview: status={} operational_hours={} (forced on under simulation)",
        preview.overall_status, preview.is_operational_hours
    ));
    clock.set_simulated_time(None);
    logger.info("Back to live clock");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn parse_config_path_supports_flags_and_positionals() {
        let args = vec![
            "academylive".to_string(),
            "--config".to_string(),
            "path/a.json".to_string(),
        ];
        assert_eq!(parse_config_path(&args), Some("path/a.json".to_string()));

        let args = vec![
            "academylive".to_string(),
            "-c".to_string(),
            "path/b.json".to_string(),
        ];
        assert_eq!(parse_config_path(&args), Some("path/b.json".to_string()));

        let args = vec!["academylive".to_string(), "path/c.json".to_string()];
        assert_eq!(parse_config_path(&args), Some("path/c.json".to_string()));

        let args = vec!["academylive".to_string()];
        assert_eq!(parse_config_path(&args), None);
    }

    #[test]
    fn load_academy_from_config_builds_model_types() {
        let logger = Logger::new(LogLevel::Error);
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("academylive_test_{}.json", timestamp));

        let config = serde_json::json!({
            "periods": [
                { "name": "P1", "start": "08:00", "end": "09:30", "type": "class" },
                { "name": "Break", "start": "09:30", "end": "09:45", "type": "break" }
            ],
            "assignments": [{
                "id": 1,
                "day": "Sunday",
                "period": "P1",
                "group": "DPIT-01",
                "classroom": "2.01",
                "instructors": ["Hesham"],
                "topic": "U20 Networking Basics",
                "type": "Technical"
            }],
            "students": [{
                "navaId": "N1001",
                "name": "Omar",
                "surname": "Alharbi",
                "company": "Nava",
                "techGroup": "DPIT-01"
            }],
            "tracks": { "DPIT-01": "industrial" }
        });

        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let data = load_academy_from_config(path.to_str().unwrap(), &logger).unwrap();
        assert_eq!(data.periods.len(), 2);
        assert_eq!(data.periods[0].kind, PeriodKind::Class);
        assert_eq!(data.periods[1].kind, PeriodKind::Break);
        assert_eq!(data.assignments.len(), 1);
        assert_eq!(data.assignments[0].kind, AssignmentKind::Technical);
        assert_eq!(data.students.len(), 1);
        assert_eq!(data.students[0].tech_group, "DPIT-01");
        assert_eq!(data.tracks.get("DPIT-01").map(String::as_str), Some("industrial"));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn unknown_kinds_degrade_with_warnings() {
        let logger = Logger::new(LogLevel::Error);
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("academylive_kinds_{}.json", timestamp));

        let config = serde_json::json!({
            "periods": [
                { "name": "P1", "start": "8am", "end": "09:30", "type": "lecture" }
            ],
            "assignments": [{
                "id": 1,
                "day": "Sunday",
                "period": "P1",
                "group": "DPIT-01",
                "classroom": "2.01",
                "instructors": ["Hesham"],
                "type": "Elective"
            }]
        });

        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        // Unknown strings degrade to defaults instead of failing the load
        let data = load_academy_from_config(path.to_str().unwrap(), &logger).unwrap();
        assert_eq!(data.periods[0].kind, PeriodKind::Class);
        assert_eq!(
            data.assignments[0].kind,
            AssignmentKind::ProfessionalDevelopment
        );
        // The malformed start time stays as-authored; the period just never
        // becomes active.
        assert_eq!(data.periods[0].start_minute(), None);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn academy_rooms_are_unique_and_display_sorted() {
        let data = sample_academy();
        let rooms = academy_rooms(&data.assignments);

        let mut dedup = rooms.clone();
        dedup.dedup();
        assert_eq!(rooms.len(), dedup.len());

        let names: Vec<String> = rooms.iter().map(|r| room_display_name(r)).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(rooms.contains(&"2.01".to_string()));
        assert!(rooms.contains(&"WS-0.13".to_string()));
    }
}
