//! Interactive TUI mode.
//!
//! Network calls run inline in the event loop: the screen does not redraw
//! while a lookup is in flight.

mod app;
mod events;
mod terminal;

use anyhow::Result;
use dex_core::models::ability_display_name;
use dex_core::viewer::{Entry, ViewState};
use dex_core::HttpCatalogue;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use app::{App, InputMode};
use events::EventHandler;
use terminal::Terminal;

/// Run the TUI application.
pub async fn run(catalogue: HttpCatalogue) -> Result<()> {
    let mut terminal = Terminal::enter()?;
    let mut app = App::new(catalogue);

    run_app(&mut terminal, &mut app).await
}

/// Main application loop.
async fn run_app(terminal: &mut Terminal, app: &mut App) -> Result<()> {
    let events = EventHandler::default();

    // Show the loading screen before the first blocking fetch.
    terminal.draw(|frame| ui(frame, app))?;
    if let Err(e) = app.session.start().await {
        tracing::debug!("Startup lookup failed: {}", e);
    }

    loop {
        terminal.draw(|frame| ui(frame, app))?;

        if let Some(key) = events.next_key()?
            && let Some(action) = app.handle_key(key)
        {
            app.perform(action).await;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI.
fn ui(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::vertical([
        Constraint::Length(2), // Header
        Constraint::Min(1),    // Content
        Constraint::Length(2), // Footer
    ])
    .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Pokédex ",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.base_url.as_str(), Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    if app.show_help {
        render_help(frame, layout[1]);
    } else {
        render_main(frame, layout[1], app.session.view());
    }

    render_footer(frame, layout[2], app);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.input_mode {
        InputMode::Search => Line::from(vec![
            Span::styled(" Search: ", Style::default().fg(Color::Yellow)),
            Span::raw(app.input.as_str()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        InputMode::Normal => Line::from(vec![
            Span::styled(" ←/→ ", Style::default().fg(Color::Yellow)),
            Span::raw("prev/next  "),
            Span::styled(" / ", Style::default().fg(Color::Yellow)),
            Span::raw("search  "),
            Span::styled(" s ", Style::default().fg(Color::Yellow)),
            Span::raw("shiny  "),
            Span::styled(" q ", Style::default().fg(Color::Yellow)),
            Span::raw("quit  "),
            Span::styled(" ? ", Style::default().fg(Color::Yellow)),
            Span::raw("help"),
        ]),
    };

    let footer = Paragraph::new(line).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

/// Render the main content area.
fn render_main(frame: &mut Frame, area: Rect, view: &ViewState) {
    match view {
        ViewState::Loading => render_message(frame, area, &view.title(), None),
        ViewState::StartupFailed => {
            render_message(frame, area, &view.title(), Some("Press r to retry"))
        }
        ViewState::NotFound { .. } => render_entry(frame, area, &view.title(), None),
        ViewState::Loaded(entry) => render_entry(frame, area, &view.title(), Some(entry)),
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, hint: Option<&str>) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area);

    let mut lines = vec![Line::from(Span::styled(
        message.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(hint) = hint {
        lines.push(Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
}

/// Renders the entry layout. With no entry every detail field is blank.
fn render_entry(frame: &mut Frame, area: Rect, title: &str, entry: Option<&Entry>) {
    let abilities_height = entry.map_or(0, |e| e.record.abilities.len() as u16) + 2;

    let [title_area, types_area, sprite_area, description_area, details_area, abilities_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(4),
            Constraint::Length(abilities_height),
        ])
        .areas(area);

    let title = Paragraph::new(Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    frame.render_widget(types_line(entry), types_area);

    let sprite = entry
        .map(|e| e.sprite_url().unwrap_or("no image").to_string())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(sprite)
            .alignment(Alignment::Center)
            .block(boxed(" Sprite ")),
        sprite_area,
    );

    let description = entry
        .and_then(|e| e.species.as_ref())
        .map(|s| s.description.clone())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(description)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(boxed(" Description ")),
        description_area,
    );

    frame.render_widget(
        Paragraph::new(detail_lines(entry))
            .alignment(Alignment::Center)
            .block(boxed(" Details ")),
        details_area,
    );

    let abilities: Vec<Line> = entry
        .map(|e| {
            e.record
                .abilities
                .iter()
                .map(|a| Line::from(ability_display_name(a)))
                .collect()
        })
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(abilities)
            .alignment(Alignment::Center)
            .block(boxed(" Abilities ")),
        abilities_area,
    );
}

fn boxed(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Type badges plus the shiny checkbox. A missing second type shows as N/A.
fn types_line(entry: Option<&Entry>) -> Paragraph<'static> {
    let Some(entry) = entry else {
        return Paragraph::new("");
    };

    let badge = |name: Option<&str>| {
        let text = name.map_or("N/A".to_string(), str::to_uppercase);
        Span::styled(
            format!(" {} ", text),
            Style::default().add_modifier(Modifier::REVERSED),
        )
    };
    let checkbox = if entry.shiny { "[x] Shiny" } else { "[ ] Shiny" };

    Paragraph::new(Line::from(vec![
        badge(entry.record.type_at(0)),
        Span::raw("  "),
        badge(entry.record.type_at(1)),
        Span::raw("    "),
        Span::styled(checkbox, Style::default().fg(Color::Yellow)),
    ]))
    .alignment(Alignment::Center)
}

fn detail_lines(entry: Option<&Entry>) -> Vec<Line<'static>> {
    let Some(entry) = entry else {
        return vec![];
    };
    let record = &entry.record;
    let genus = entry
        .species
        .as_ref()
        .map(|s| s.genus.clone())
        .unwrap_or_default();

    vec![
        Line::from(format!(
            "HEIGHT: {:<12}WEIGHT: {}",
            record.height_display(),
            record.weight_display()
        )),
        Line::from(format!("SPECIES: {:<11}ID: {}", genus, record.id)),
    ]
}

/// Render the help overlay.
fn render_help(frame: &mut Frame, area: Rect) {
    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<8}", k), Style::default().fg(Color::Yellow)),
            Span::raw(what),
        ])
    };

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        key("← h p", "Previous Pokémon"),
        key("→ l n", "Next Pokémon"),
        key("/", "Search by name or number (Enter to submit)"),
        key("s", "Toggle shiny sprite"),
        key("r", "Retry after a failed start"),
        key("?", "Toggle this help"),
        key("Esc", "Close help / cancel search"),
        key("q", "Quit the application"),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(help, area);
}
