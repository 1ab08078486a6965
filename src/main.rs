use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use bf_terminal::feed;
use bf_terminal::locale::{self, Locale};
use bf_terminal::match_fetch::format_timestamp;
use bf_terminal::routes::Route;
use bf_terminal::state::{self, apply_delta, AppState, ProviderCommand, Screen};

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: mpsc::Sender<ProviderCommand>,
}

impl App {
    fn new(cmd_tx: mpsc::Sender<ProviderCommand>, state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
            cmd_tx,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match self.state.screen {
            Screen::Home => self.on_home_key(key),
            Screen::Matches => self.on_matches_key(key),
        }
    }

    fn on_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit_player_id(),
            KeyCode::Backspace => {
                self.state.input.pop();
            }
            KeyCode::Tab => {
                self.state.game_type = self.state.game_type.toggled();
            }
            KeyCode::Char(c) if !c.is_control() => self.state.input.push(c),
            _ => {}
        }
    }

    fn on_matches_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('b') | KeyCode::Esc => self.state.screen = Screen::Home,
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('r') => self.request_matches(None),
            KeyCode::Char('o') => {
                let cursor = self.state.before_cursor();
                if cursor.is_some() {
                    self.request_matches(cursor);
                } else {
                    self.state.push_log("[INFO] No cursor for older matches yet");
                }
            }
            KeyCode::Char('g') => {
                self.state.game_type = self.state.game_type.toggled();
                self.request_matches(None);
            }
            _ => {}
        }
    }

    fn submit_player_id(&mut self) {
        let player_id = self.state.input.trim().to_string();
        if player_id.is_empty() {
            self.state.push_log("[INFO] Enter a player ID first");
            return;
        }
        self.state.player_id = player_id;
        self.state.screen = Screen::Matches;
        self.request_matches(None);
    }

    fn request_matches(&mut self, before: Option<String>) {
        if self.state.player_id.is_empty() {
            self.state.push_log("[INFO] No player selected");
            return;
        }
        let cmd = ProviderCommand::FetchMatches {
            player_id: self.state.player_id.clone(),
            game_type: self.state.game_type,
            before,
        };
        if self.cmd_tx.send(cmd).is_err() {
            self.state.push_log("[WARN] Match fetch unavailable");
        } else {
            self.state.loading = true;
            self.state.error = None;
            self.state.push_log(format!(
                "[INFO] Fetching {} matches for {}",
                self.state.game_type, self.state.player_id
            ));
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    // Deep links like `/bf1/matches/42` resolve before state construction,
    // so the matches view starts with its parameters already in place.
    let route = std::env::args().nth(1).map(|arg| Route::parse(&arg));
    let params = route.as_ref().and_then(Route::params);
    let initial = AppState::with_route(Locale::from_env(), params);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    feed::spawn_provider(tx, cmd_rx);

    let mut app = App::new(cmd_tx, initial);
    if app.state.screen == Screen::Matches {
        let player_id = app.state.player_id.clone();
        app.state.push_log(format!("[INFO] Direct link to {player_id}"));
        app.request_matches(None);
    }

    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<state::Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header =
        Paragraph::new(header_text(&app.state)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::Home => render_home(frame, chunks[1], &app.state),
        Screen::Matches => render_matches(frame, chunks[1], &app.state),
    }

    render_console(frame, chunks[2], &app.state);

    let footer =
        Paragraph::new(footer_text(&app.state)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[3]);
}

fn header_text(state: &AppState) -> String {
    match state.screen {
        Screen::Home => "BATTLEFIELD MATCHES".to_string(),
        Screen::Matches => {
            let status = if state.loading {
                " | loading..."
            } else if state.error.is_some() {
                " | fetch failed"
            } else {
                ""
            };
            format!(
                "BATTLEFIELD MATCHES | {} | {} | {} rows{status}",
                state.game_type,
                state.player_id,
                state.rows.len()
            )
        }
    }
}

fn footer_text(state: &AppState) -> String {
    match state.screen {
        Screen::Home => {
            "Type Player ID | Tab Game (bf1/bfv) | Enter Fetch | Esc Quit".to_string()
        }
        Screen::Matches => {
            "j/k/↑/↓ Move | r Refresh | o Older page | g Game | b/Esc Back | q Quit".to_string()
        }
    }
}

fn render_home(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = vec![
        String::new(),
        format!("  Game      : {}", state.game_type),
        format!("  Player ID : {}_", state.input),
        String::new(),
        "  Enter an Origin player ID to load match history.".to_string(),
        "  A path argument like /bf1/matches/42 opens a player directly.".to_string(),
    ];
    let body = Paragraph::new(lines.join("\n"));
    frame.render_widget(body, area);
}

fn render_matches(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let widths = [
        Constraint::Length(18),
        Constraint::Length(28),
        Constraint::Length(18),
        Constraint::Min(10),
    ];
    render_row_cells(
        frame,
        sections[0],
        &widths,
        ["TIME", "MAP", "MODE", "SERVER"],
        Style::default().fg(Color::Cyan),
    );

    let list_area = sections[1];
    if let Some(error) = &state.error {
        let line = Paragraph::new(format!("Fetch failed: {error}"))
            .style(Style::default().fg(Color::Red));
        frame.render_widget(line, list_area);
    } else if state.rows.is_empty() {
        let text = if state.loading {
            "Loading match history..."
        } else {
            "No matches found"
        };
        let empty = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
    } else {
        render_match_rows(frame, list_area, state, &widths);
    }

    let report = state
        .selected_report_url()
        .map(|url| format!("Report: {url}"))
        .unwrap_or_default();
    let report_line = Paragraph::new(report).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(report_line, sections[2]);
}

fn render_match_rows(frame: &mut Frame, area: Rect, state: &AppState, widths: &[Constraint; 4]) {
    if area.height == 0 {
        return;
    }
    let visible = area.height as usize;
    let (start, end) = visible_range(state.selected, state.rows.len(), visible);

    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + i as u16,
            width: area.width,
            height: 1,
        };

        let selected = idx == state.selected;
        let row_style = if selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };
        if selected {
            frame.render_widget(Block::default().style(row_style), row_area);
        }

        let row = &state.rows[idx];
        let time = row
            .timestamp
            .map(format_timestamp)
            .unwrap_or_else(|| "-".to_string());
        let map = locale::map_name(&row.map_code, state.locale);
        let mode = locale::mode_name(&row.mode_code, state.locale);

        render_row_cells(
            frame,
            row_area,
            widths,
            [&time, map, mode, &row.server],
            row_style,
        );
    }
}

fn render_row_cells(
    frame: &mut Frame,
    area: Rect,
    widths: &[Constraint; 4],
    cells: [&str; 4],
    style: Style,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(*widths)
        .split(area);
    for (col, text) in cols.iter().zip(cells) {
        frame.render_widget(Paragraph::new(text.to_string()).style(style), *col);
    }
}

fn render_console(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = state
        .logs
        .iter()
        .take(area.height.saturating_sub(1) as usize)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");
    let console = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(console, area);
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total <= visible {
        return (0, total);
    }
    let half = visible / 2;
    let start = selected.saturating_sub(half).min(total - visible);
    (start, start + visible)
}
