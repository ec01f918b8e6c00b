//! Hub Browser TUI Application
//!
//! A terminal user interface for browsing models, datasets, spaces and
//! collections on the Hub.

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

use hfhub_client::config::{BASE_URL_ENV, TOKEN_ENV};
use hfhub_client::{ConfigOption, Gated, HubClient};

// ============================================================================
// Application State
// ============================================================================

/// Represents the current screen being displayed
#[derive(Debug, Clone, PartialEq)]
enum AppScreen {
    /// Token input screen - user enters the API token
    TokenInput,
    /// Resource kind selection screen
    KindSelection,
    /// Loading listings from API
    Loading,
    /// Listing table screen
    ListingTable,
}

/// The listings the browser can show
#[derive(Debug, Clone, Copy, PartialEq)]
enum ResourceKind {
    Models,
    Datasets,
    Spaces,
    Collections,
}

impl ResourceKind {
    const ALL: [ResourceKind; 4] = [
        ResourceKind::Models,
        ResourceKind::Datasets,
        ResourceKind::Spaces,
        ResourceKind::Collections,
    ];

    fn label(self) -> &'static str {
        match self {
            ResourceKind::Models => "Models",
            ResourceKind::Datasets => "Datasets",
            ResourceKind::Spaces => "Spaces",
            ResourceKind::Collections => "Collections",
        }
    }
}

/// One table row, flattened from whichever DTO the listing returned
struct ListingRow {
    id: String,
    author: String,
    likes: i64,
    gated: String,
}

/// Main application state
struct AppState {
    /// Current screen being displayed
    screen: AppScreen,
    /// API token entered by user
    token: String,
    /// Optional base URL override, taken from the environment
    base_url: Option<String>,
    /// Initialized API client
    client: Option<HubClient>,
    /// Currently selected resource kind index
    selected_kind_index: usize,
    /// Rows of the current listing
    rows: Vec<ListingRow>,
    /// Currently selected row in table
    selected_row: usize,
    /// Error message to display
    error_message: Option<String>,
    /// Should the application quit?
    should_quit: bool,
}

impl AppState {
    fn new() -> Self {
        Self {
            screen: AppScreen::TokenInput,
            token: std::env::var(TOKEN_ENV).unwrap_or_default(),
            base_url: std::env::var(BASE_URL_ENV).ok(),
            client: None,
            selected_kind_index: 0,
            rows: Vec::new(),
            selected_row: 0,
            error_message: None,
            should_quit: false,
        }
    }

    fn selected_kind(&self) -> ResourceKind {
        ResourceKind::ALL[self.selected_kind_index]
    }

    /// Initialize the API client with the current token
    fn init_client(&mut self) -> Result<(), String> {
        let options = self.base_url.clone().map(ConfigOption::BaseUrl);
        match HubClient::new(&self.token, options) {
            Ok(client) => {
                self.client = Some(client);
                Ok(())
            }
            Err(e) => Err(format!("Failed to create client: {}", e)),
        }
    }

    /// Fetch the listing for the selected resource kind
    fn fetch_rows(&mut self) -> Result<(), String> {
        let client = self.client.as_ref().ok_or("Client not initialized")?;
        let kind = self.selected_kind();
        let search = client.search();

        let rows = match kind {
            ResourceKind::Models => search.models().map(|items| {
                items
                    .into_iter()
                    .map(|m| ListingRow {
                        id: m.id,
                        author: m.author.unwrap_or_default(),
                        likes: m.likes,
                        gated: format_gated(&m.gated),
                    })
                    .collect::<Vec<_>>()
            }),
            ResourceKind::Datasets => search.datasets().map(|items| {
                items
                    .into_iter()
                    .map(|d| ListingRow {
                        id: d.id,
                        author: d.author.unwrap_or_default(),
                        likes: d.likes,
                        gated: format_gated(&d.gated),
                    })
                    .collect()
            }),
            ResourceKind::Spaces => search.spaces().map(|items| {
                items
                    .into_iter()
                    .map(|s| ListingRow {
                        id: s.id,
                        author: s.author.unwrap_or_default(),
                        likes: s.likes,
                        gated: "-".to_string(),
                    })
                    .collect()
            }),
            ResourceKind::Collections => client.collections().list().map(|items| {
                items
                    .into_iter()
                    .map(|c| ListingRow {
                        id: c.slug,
                        author: c.owner.name,
                        likes: c.upvotes,
                        gated: if c.gating { "yes" } else { "no" }.to_string(),
                    })
                    .collect()
            }),
        };

        match rows {
            Ok(rows) => {
                self.rows = rows;
                self.selected_row = 0;
                Ok(())
            }
            Err(e) => Err(format!("Failed to fetch {}: {}", kind.label().to_lowercase(), e)),
        }
    }

    /// Clear any error message
    fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }
}

// ============================================================================
// Terminal Setup
// ============================================================================

/// Setup the terminal for TUI mode
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to its original state
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ============================================================================
// UI Rendering
// ============================================================================

fn title_block(text: String) -> Paragraph<'static> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn help_line(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
}

fn highlight(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Render the token input screen
fn render_token_input(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Input
            Constraint::Length(2), // Help
            Constraint::Min(1),    // Spacer
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    f.render_widget(title_block("Hub Browser".to_string()), chunks[0]);

    // Never echo the token itself
    let masked = "*".repeat(state.token.chars().count());
    let input_block = Block::default()
        .title(" API Token ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let input_text = Paragraph::new(masked.as_str())
        .style(Style::default().fg(Color::White))
        .block(input_block);
    f.render_widget(input_text, chunks[1]);

    let cursor_x = chunks[1].x + masked.len() as u16 + 1;
    let cursor_y = chunks[1].y + 1;
    f.set_cursor_position((cursor_x, cursor_y));

    f.render_widget(
        help_line("Press Enter to connect | Esc to quit"),
        chunks[2],
    );

    render_status_bar(f, chunks[4], state);
}

/// Render the loading screen
fn render_loading(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Loading message
            Constraint::Min(1),    // Spacer
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    f.render_widget(title_block("Hub Browser".to_string()), chunks[0]);

    let loading = Paragraph::new(format!(
        "Loading {}...",
        state.selected_kind().label().to_lowercase()
    ))
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(loading, chunks[1]);

    render_status_bar(f, chunks[3], state);
}

/// Render the resource kind selection screen
fn render_kind_selection(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Kind list
            Constraint::Length(2), // Help
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    f.render_widget(title_block("Select Listing".to_string()), chunks[0]);

    let rows: Vec<Row> = ResourceKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            Row::new(vec![Cell::from(kind.label())]).style(highlight(i == state.selected_kind_index))
        })
        .collect();

    let table = Table::new(rows, [Constraint::Min(20)])
        .block(Block::default().borders(Borders::ALL).title(" Resources "));
    f.render_widget(table, chunks[1]);

    f.render_widget(help_line("Enter: Select | Esc: Back | q: Quit"), chunks[2]);

    render_status_bar(f, chunks[3], state);
}

/// Render the listing table screen
fn render_listing_table(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Listing table
            Constraint::Length(2), // Help
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    let title_text = format!("{} | {} entries", state.selected_kind().label(), state.rows.len());
    f.render_widget(title_block(title_text), chunks[0]);

    let rows: Vec<Row> = state
        .rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Row::new(vec![
                Cell::from(truncate(&r.id, 40)),
                Cell::from(truncate(&r.author, 20)),
                Cell::from(format_number(r.likes)),
                Cell::from(r.gated.clone()),
            ])
            .style(highlight(i == state.selected_row))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(42),
            Constraint::Length(22),
            Constraint::Length(10),
            Constraint::Min(8),
        ],
    )
    .header(
        Row::new(vec!["Id", "Author", "Likes", "Gated"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", state.selected_kind().label())),
    );
    f.render_widget(table, chunks[1]);

    f.render_widget(help_line("r: Reload | b: Back | q: Quit"), chunks[2]);

    render_status_bar(f, chunks[3], state);
}

/// Render the status bar at the bottom
fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let status_text = if let Some(ref error) = state.error_message {
        format!(" Error: {}", error)
    } else {
        let url = state
            .client
            .as_ref()
            .map(|c| c.transport().config().base_url().to_string())
            .unwrap_or_else(|| "not connected".to_string());
        format!(" Connected to: {}", url)
    };

    let style = if state.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    let status = Paragraph::new(status_text)
        .style(style)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}

/// Main render function that dispatches to the appropriate screen renderer
fn render(f: &mut Frame, state: &AppState) {
    match state.screen {
        AppScreen::TokenInput => render_token_input(f, state),
        AppScreen::KindSelection => render_kind_selection(f, state),
        AppScreen::Loading => render_loading(f, state),
        AppScreen::ListingTable => render_listing_table(f, state),
    }
}

// ============================================================================
// Event Handling
// ============================================================================

/// Handle keyboard input for token input screen
fn handle_token_input(event: KeyEvent, state: &mut AppState) {
    match event.code {
        KeyCode::Char(c) => {
            state.token.push(c);
            state.clear_error();
        }
        KeyCode::Backspace => {
            state.token.pop();
            state.clear_error();
        }
        KeyCode::Enter => {
            if let Err(e) = state.init_client() {
                state.set_error(e);
            } else {
                state.clear_error();
                state.screen = AppScreen::KindSelection;
            }
        }
        KeyCode::Esc => {
            state.should_quit = true;
        }
        _ => {}
    }
}

/// Handle keyboard input for kind selection screen
fn handle_kind_selection(event: KeyEvent, state: &mut AppState) {
    match event.code {
        KeyCode::Up => {
            state.selected_kind_index = state.selected_kind_index.saturating_sub(1);
        }
        KeyCode::Down => {
            if state.selected_kind_index < ResourceKind::ALL.len() - 1 {
                state.selected_kind_index += 1;
            }
        }
        KeyCode::Enter => {
            state.clear_error();
            state.screen = AppScreen::Loading;
        }
        KeyCode::Esc => {
            state.screen = AppScreen::TokenInput;
        }
        _ => {}
    }
}

/// Handle keyboard input for listing table screen
fn handle_listing_table(event: KeyEvent, state: &mut AppState) {
    match event.code {
        KeyCode::Up => {
            state.selected_row = state.selected_row.saturating_sub(1);
        }
        KeyCode::Down => {
            if state.selected_row < state.rows.len().saturating_sub(1) {
                state.selected_row += 1;
            }
        }
        KeyCode::Char('r') => {
            state.screen = AppScreen::Loading;
        }
        KeyCode::Char('b') | KeyCode::Esc => {
            state.screen = AppScreen::KindSelection;
            state.clear_error();
        }
        _ => {}
    }
}

/// Main event handler that dispatches to the appropriate screen handler
fn handle_event(event: Event, state: &mut AppState) {
    if let Event::Key(key_event) = event {
        // 'q' quits everywhere except while typing the token
        if key_event.code == KeyCode::Char('q')
            && state.screen != AppScreen::TokenInput
            && key_event.modifiers == KeyModifiers::NONE
        {
            state.should_quit = true;
            return;
        }

        match state.screen {
            AppScreen::TokenInput => handle_token_input(key_event, state),
            AppScreen::KindSelection => handle_kind_selection(key_event, state),
            AppScreen::ListingTable => handle_listing_table(key_event, state),
            AppScreen::Loading => {}
        }
    }
}

// ============================================================================
// Application Logic
// ============================================================================

/// Fetch data while the loading screen is shown
fn process_state(state: &mut AppState) {
    if state.screen != AppScreen::Loading {
        return;
    }
    match state.fetch_rows() {
        Ok(()) => state.screen = AppScreen::ListingTable,
        Err(e) => {
            state.set_error(e);
            state.screen = AppScreen::KindSelection;
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Render a gated flag the way the hub reports it
fn format_gated(gated: &Gated) -> String {
    match gated {
        Gated::Absent => "-".to_string(),
        Gated::Bool(b) => String::from(if *b { "yes" } else { "no" }),
        Gated::Text(mode) => mode.clone(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

/// Format a number with thousand separators
fn format_number(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    if n < 0 {
        result.insert(0, '-');
    }
    result
}

// ============================================================================
// Main Application
// ============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = setup_terminal()?;
    let mut state = AppState::new();

    loop {
        terminal.draw(|f| render(f, &state))?;

        // Loading screens fetch after being drawn once
        process_state(&mut state);

        if state.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            handle_event(event, &mut state);
        }
    }

    restore_terminal(&mut terminal)?;

    Ok(())
}
