//! Terminal selection list with checkable rows.
//!
//! This is the presentation surface the engine hands its candidates to:
//! it renders them as a checkable list and reports back the identifiers
//! whose check-state is true when the operator commits. Aborting leaves
//! every file untouched.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};

use crate::models::{Candidate, Category};

// ---------------------------------------------------------------------------
// App state
// ---------------------------------------------------------------------------

struct App {
    candidates: Vec<Candidate>,
    checked: Vec<bool>,
    cursor: usize,
    committed: bool,
    should_quit: bool,
}

impl App {
    fn new(candidates: Vec<Candidate>) -> Self {
        let checked = candidates.iter().map(|c| c.preselected).collect();
        Self {
            candidates,
            checked,
            cursor: 0,
            committed: false,
            should_quit: false,
        }
    }

    fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_down(&mut self) {
        if self.cursor + 1 < self.candidates.len() {
            self.cursor += 1;
        }
    }

    fn toggle(&mut self) {
        if let Some(checked) = self.checked.get_mut(self.cursor) {
            *checked = !*checked;
        }
    }

    fn toggle_all(&mut self) {
        let all_checked = !self.checked.is_empty() && self.checked.iter().all(|c| *c);
        for checked in &mut self.checked {
            *checked = !all_checked;
        }
    }

    fn checked_count(&self) -> usize {
        self.checked.iter().filter(|c| **c).count()
    }

    /// Identifiers of the checked rows, in list order.
    fn selected_identifiers(&self) -> Vec<String> {
        self.candidates
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(candidate, _)| candidate.identifier.clone())
            .collect()
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Char(' ') => app.toggle(),
        KeyCode::Char('a') => app.toggle_all(),
        KeyCode::Enter => {
            app.committed = true;
            app.should_quit = true;
        }
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, app: &App, category: Category) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    draw_list(frame, app, category, chunks[0]);
    draw_status(frame, app, chunks[1]);
}

fn draw_list(frame: &mut Frame, app: &App, category: Category, area: Rect) {
    let items: Vec<ListItem> = app
        .candidates
        .iter()
        .zip(&app.checked)
        .map(|(candidate, checked)| {
            let marker = if *checked { "[x] " } else { "[ ] " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::raw(candidate.display_text.as_str()),
            ]))
        })
        .collect();

    let title = format!(" {} ({} found) ", category, app.candidates.len());
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if !app.candidates.is_empty() {
        state.select(Some(app.cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let status = format!(
        " {}/{} selected | space toggle | a all | enter commit | q abort",
        app.checked_count(),
        app.candidates.len()
    );
    let paragraph = Paragraph::new(Line::from(Span::styled(
        status,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run the selection list and return the checked identifiers in list
/// order, or `None` if the operator aborted without committing.
pub fn run(category: Category, candidates: Vec<Candidate>) -> Result<Option<Vec<String>>> {
    let mut app = App::new(candidates);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = terminal::disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
        original_hook(info);
    }));

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, category);

    terminal::disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result?;

    Ok(app.committed.then(|| app.selected_identifiers()))
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    category: Category,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app, category))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }
        if app.should_quit {
            return Ok(());
        }
    }
}
