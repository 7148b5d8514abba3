// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use hrs_app::{
    Action, ActionTarget, AppCommand, AppEvent, AppMode, AppState, BRAND_MARK, COMPANY_NAME,
    ContactField, ContactForm, ContactOutcome, ContentBlock, FAQ_DISPLAY_LIMIT, FOOTER_LINKS,
    FaqEntry, INVENTORY_NOTE, InventoryCommand, InventoryEvent, InventoryRecord, InventoryView, REQUEST_CONSULT,
    TAGLINE, TabKind, actions_for, sections_for, table_model,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap,
};
use std::collections::BTreeSet;
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use time::OffsetDateTime;

const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(4);
const SEARCH_PLACEHOLDER: &str = "Search model, serial, brand, description...";

/// What the UI needs from the process that launched it.
pub trait AppRuntime {
    fn inventory(&self) -> Arc<[InventoryRecord]>;
    fn faqs(&self) -> &[FaqEntry];
    /// Where the inventory came from, shown under the table.
    fn dataset_label(&self) -> String;
    fn submit_contact(&mut self, form: &ContactForm) -> Result<ContactOutcome>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub show_prices: bool,
    pub faq_limit: usize,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            show_prices: false,
            faq_limit: FAQ_DISPLAY_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FaqUiState {
    cursor: usize,
    expanded: BTreeSet<usize>,
}

#[derive(Debug, Clone)]
struct ViewData {
    inventory: InventoryView,
    row_cursor: usize,
    faqs: Vec<FaqEntry>,
    faq: FaqUiState,
    action_cursor: usize,
    contact: ContactForm,
    dataset_label: String,
    help_visible: bool,
    status_token: u64,
    year: i32,
}

impl ViewData {
    fn new<R: AppRuntime>(runtime: &R, options: UiOptions) -> Self {
        Self {
            inventory: InventoryView::new(runtime.inventory(), options.show_prices),
            row_cursor: 0,
            faqs: runtime
                .faqs()
                .iter()
                .take(options.faq_limit)
                .cloned()
                .collect(),
            faq: FaqUiState::default(),
            action_cursor: 0,
            contact: ContactForm::default(),
            dataset_label: runtime.dataset_label(),
            help_visible: false,
            status_token: 0,
            year: OffsetDateTime::now_utc().year(),
        }
    }
}

pub fn run_app<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    options: UiOptions,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::new(runtime, options);
    let (internal_tx, internal_rx) = mpsc::channel();
    tracing::info!(
        tab = state.active_tab.as_str(),
        records = view_data.inventory.total_count(),
        faqs = view_data.faqs.len(),
        "ui started"
    );

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        match next_key() {
            Ok(Some(key)) => {
                if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                    break;
                }
            }
            Ok(None) => {}
            Err(error) => {
                result = Err(error);
                break;
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    tracing::info!("ui stopped");
    result
}

fn next_key() -> Result<Option<KeyEvent>> {
    if !event::poll(Duration::from_millis(120)).context("poll event")? {
        return Ok(None);
    }
    match event::read().context("read event")? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_CLEAR_DELAY);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.help_visible = false;
            emit_status(state, view_data, internal_tx, "help hidden");
        }
        return false;
    }

    match state.mode {
        AppMode::Search => {
            handle_search_key(state, view_data, internal_tx, key);
            false
        }
        AppMode::Contact => {
            handle_contact_key(state, runtime, view_data, internal_tx, key);
            false
        }
        AppMode::Nav => handle_nav_key(state, view_data, internal_tx, key),
    }
}

fn has_command_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn handle_search_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.dispatch(AppCommand::EndSearch);
            let message = match_status(&view_data.inventory);
            emit_status(state, view_data, internal_tx, message);
        }
        KeyCode::Backspace => {
            let events = view_data.inventory.pop_query_char();
            apply_inventory_events(view_data, &events);
        }
        KeyCode::Char(ch) if !has_command_modifier(key.modifiers) => {
            let events = view_data.inventory.push_query_char(ch);
            apply_inventory_events(view_data, &events);
        }
        _ => {}
    }
}

fn match_status(inventory: &InventoryView) -> String {
    if inventory.query_text().is_empty() {
        return format!("showing all {} items", inventory.total_count());
    }
    format!(
        "{} of {} items match {:?}",
        inventory.match_count(),
        inventory.total_count(),
        inventory.query_text()
    )
}

fn apply_inventory_events(view_data: &mut ViewData, events: &[InventoryEvent]) {
    for event in events {
        if let InventoryEvent::QueryChanged { .. } = event {
            view_data.row_cursor = 0;
        }
    }
}

fn handle_contact_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            state.dispatch(AppCommand::ExitToNav);
            emit_status(state, view_data, internal_tx, "nav");
        }
        KeyCode::Tab => {
            view_data.contact.move_field(1);
        }
        KeyCode::BackTab => {
            view_data.contact.move_field(-1);
        }
        KeyCode::Enter => submit_contact(state, runtime, view_data, internal_tx),
        KeyCode::Backspace => view_data.contact.pop_char(),
        KeyCode::Char(ch) if !has_command_modifier(key.modifiers) => {
            view_data.contact.push_char(ch);
        }
        _ => {}
    }
}

fn submit_contact<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    match runtime.submit_contact(&view_data.contact) {
        Ok(ContactOutcome::NotSent { reason }) => {
            view_data.contact.clear();
            state.dispatch(AppCommand::ExitToNav);
            emit_status(state, view_data, internal_tx, reason);
        }
        Err(error) => {
            emit_status(state, view_data, internal_tx, error.to_string());
        }
    }
}

fn handle_nav_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return true,
        (KeyCode::Char('?'), _) => {
            view_data.help_visible = true;
            emit_status(state, view_data, internal_tx, "help open");
            return false;
        }
        (KeyCode::Char('f'), KeyModifiers::NONE) | (KeyCode::Right, _) => {
            change_tab(state, view_data, AppCommand::NextTab);
            return false;
        }
        (KeyCode::Char('b'), KeyModifiers::NONE) | (KeyCode::Left, _) => {
            change_tab(state, view_data, AppCommand::PrevTab);
            return false;
        }
        (KeyCode::Char(ch @ '1'..='8'), KeyModifiers::NONE) => {
            let index = ch as usize - '1' as usize;
            if let Some(tab) = TabKind::ALL.get(index) {
                change_tab(state, view_data, AppCommand::SelectTab(*tab));
            }
            return false;
        }
        (KeyCode::Char('c'), KeyModifiers::NONE) => {
            activate_action(state, view_data, internal_tx, REQUEST_CONSULT);
            return false;
        }
        _ => {}
    }

    match state.active_tab {
        TabKind::Inventory => handle_inventory_key(state, view_data, internal_tx, key),
        TabKind::Faq => handle_faq_key(view_data, key),
        TabKind::Contact => {
            if matches!(key.code, KeyCode::Char('i') | KeyCode::Enter) {
                state.dispatch(AppCommand::BeginContact);
                let field = view_data.contact.active_field();
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("editing {}", field.placeholder()),
                );
            }
        }
        tab => handle_action_key(state, view_data, internal_tx, tab, key),
    }
    false
}

fn change_tab(state: &mut AppState, view_data: &mut ViewData, command: AppCommand) {
    for event in state.dispatch(command) {
        if let AppEvent::TabChanged(tab) = event {
            view_data.action_cursor = 0;
            tracing::debug!(tab = tab.as_str(), "tab changed");
        }
    }
}

fn handle_inventory_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let last_row = view_data.inventory.match_count().saturating_sub(1);
    match key.code {
        KeyCode::Char('/') => {
            state.dispatch(AppCommand::BeginSearch);
            emit_status(state, view_data, internal_tx, "search");
        }
        KeyCode::Char('x') => {
            let events = view_data.inventory.dispatch(InventoryCommand::ClearQuery);
            apply_inventory_events(view_data, &events);
            emit_status(state, view_data, internal_tx, "search cleared");
        }
        KeyCode::Char('p') => {
            let events = view_data.inventory.dispatch(InventoryCommand::TogglePrices);
            if let Some(InventoryEvent::PricesVisibilityChanged(visible)) = events.first() {
                let message = if *visible {
                    "prices shown"
                } else {
                    "prices hidden"
                };
                emit_status(state, view_data, internal_tx, message);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            view_data.row_cursor = (view_data.row_cursor + 1).min(last_row);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.row_cursor = view_data.row_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => view_data.row_cursor = 0,
        KeyCode::Char('G') => view_data.row_cursor = last_row,
        _ => {}
    }
}

fn handle_faq_key(view_data: &mut ViewData, key: KeyEvent) {
    let last = view_data.faqs.len().saturating_sub(1);
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            view_data.faq.cursor = (view_data.faq.cursor + 1).min(last);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.faq.cursor = view_data.faq.cursor.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if view_data.faqs.is_empty() {
                return;
            }
            let cursor = view_data.faq.cursor;
            if !view_data.faq.expanded.remove(&cursor) {
                view_data.faq.expanded.insert(cursor);
            }
        }
        _ => {}
    }
}

fn handle_action_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    tab: TabKind,
    key: KeyEvent,
) {
    let actions = actions_for(tab);
    if actions.is_empty() {
        return;
    }
    let len = actions.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
            view_data.action_cursor = (view_data.action_cursor + 1) % len;
        }
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
            view_data.action_cursor = (view_data.action_cursor + len - 1) % len;
        }
        KeyCode::Enter => {
            let action = actions[view_data.action_cursor.min(len - 1)];
            activate_action(state, view_data, internal_tx, action);
        }
        _ => {}
    }
}

fn activate_action(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    action: Action,
) {
    tracing::debug!(label = action.label, "action activated");
    match action.target {
        ActionTarget::OpenTab(tab) => {
            change_tab(state, view_data, AppCommand::SelectTab(tab));
            emit_status(state, view_data, internal_tx, action.label);
        }
        ActionTarget::SearchInventory(term) => {
            let events = view_data
                .inventory
                .dispatch(InventoryCommand::SetQuery(term.to_owned()));
            apply_inventory_events(view_data, &events);
            view_data.row_cursor = 0;
            change_tab(state, view_data, AppCommand::SelectTab(TabKind::Inventory));
            let message = match_status(&view_data.inventory);
            emit_status(state, view_data, internal_tx, message);
        }
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, layout[0], state);

    match state.active_tab {
        TabKind::Inventory => render_inventory(frame, layout[1], state, view_data),
        TabKind::Faq => render_faq(frame, layout[1], view_data),
        TabKind::Contact => render_contact(frame, layout[1], state, view_data),
        tab => {
            let body = Paragraph::new(section_lines(tab, Some(view_data.action_cursor)))
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(tab.label()));
            frame.render_widget(body, layout[1]);
        }
    }

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title_bottom(footer_text(view_data.year)),
        );
    frame.render_widget(status, layout[2]);

    if view_data.help_visible {
        let area = centered_rect(80, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_header(frame: &mut ratatui::Frame<'_>, area: Rect, state: &AppState) {
    let titles = TabKind::ALL
        .iter()
        .map(|tab| format!("{} {}", tab.position() + 1, tab.label()))
        .collect::<Vec<String>>();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{BRAND_MARK} {COMPANY_NAME}"))
                .title_top(
                    Line::from(format!("{TAGLINE} | c: {}", REQUEST_CONSULT.label))
                        .right_aligned(),
                ),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(state.active_tab.position());
    frame.render_widget(tabs, area);
}

fn render_inventory(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let searching = state.mode == AppMode::Search;
    let query = view_data.inventory.query_text();
    let search_line = if query.is_empty() && !searching {
        Line::from(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else if searching {
        Line::from(vec![Span::raw(query), Span::raw("█")])
    } else {
        Line::from(query)
    };
    let search_title = if searching {
        "search (enter/esc done)"
    } else {
        "search (/ edit, x clear)"
    };
    let search = Paragraph::new(search_line)
        .block(Block::default().borders(Borders::ALL).title(search_title));
    frame.render_widget(search, chunks[0]);

    let snapshot = view_data.inventory.snapshot();
    let title = format!(
        "Available Inventory ({} of {})",
        snapshot.records.len(),
        snapshot.total_count
    );
    let model = table_model(&snapshot);

    if model.rows.is_empty() {
        let empty = Paragraph::new(format!("No items match {query:?}."))
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(empty, chunks[1]);
    } else {
        let header = Row::new(model.columns.iter().map(|column| {
            Cell::from(*column).style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        }));

        let mut rows = model
            .rows
            .iter()
            .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))))
            .collect::<Vec<_>>();
        if let Some(totals) = &model.totals {
            rows.push(
                Row::new(vec![
                    Cell::from(""),
                    Cell::from(""),
                    Cell::from(""),
                    Cell::from(totals.label),
                    Cell::from(totals.cost.as_str()),
                    Cell::from(totals.list_price.as_str()),
                ])
                .style(Style::default().add_modifier(Modifier::BOLD)),
            );
        }

        let mut widths = vec![
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(18),
            Constraint::Min(20),
        ];
        if snapshot.prices_visible {
            widths.extend([Constraint::Length(13), Constraint::Length(13)]);
        }

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title))
            .row_highlight_style(Style::default().bg(Color::DarkGray));
        let mut table_state =
            TableState::default().with_selected(Some(view_data.row_cursor.min(model.rows.len() - 1)));
        frame.render_stateful_widget(table, chunks[1], &mut table_state);
    }

    let note = Paragraph::new(format!(
        "{INVENTORY_NOTE} Source: {}.",
        view_data.dataset_label
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(note, chunks[2]);
}

fn render_faq(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    let mut lines = Vec::new();
    let mut cursor_line = 0;
    if view_data.faqs.is_empty() {
        lines.push(Line::from("No FAQs loaded."));
    }
    for (index, entry) in view_data.faqs.iter().enumerate() {
        let expanded = view_data.faq.expanded.contains(&index);
        let marker = if expanded { "▾" } else { "▸" };
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if index == view_data.faq.cursor {
            cursor_line = lines.len();
            style = style.fg(Color::Black).bg(Color::Cyan);
        }
        lines.push(Line::from(Span::styled(
            format!("{marker} {}", entry.question),
            style,
        )));
        if expanded {
            lines.push(Line::from(format!("  {}", entry.answer)));
        }
    }
    for section in sections_for(TabKind::Faq) {
        lines.push(Line::default());
        lines.extend(block_lines(section.blocks, None, &mut 0));
    }

    let visible = area.height.saturating_sub(2) as usize;
    let offset = cursor_line.saturating_sub(visible.saturating_sub(2));
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(section_title(TabKind::Faq)),
        );
    frame.render_widget(body, area);
}

fn render_contact(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let editing = state.mode == AppMode::Contact;
    let mut lines = Vec::new();
    let input = view_data.contact.input();
    for field in ContactField::ALL {
        let active = editing && field == view_data.contact.active_field();
        let value = input.value(field);
        let mut spans = vec![Span::raw(if active { "> " } else { "  " })];
        if value.is_empty() {
            spans.push(Span::styled(
                field.placeholder(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(value));
        }
        if active {
            spans.push(Span::raw("█"));
        }
        lines.push(Line::from(spans));
    }
    let send_style = if editing {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("[ Send ]", send_style)));
    lines.push(Line::default());
    for section in sections_for(TabKind::Contact) {
        lines.extend(block_lines(section.blocks, None, &mut 0));
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(section_title(TabKind::Contact)),
    );
    frame.render_widget(body, area);
}

fn section_title(tab: TabKind) -> &'static str {
    sections_for(tab)
        .first()
        .map_or(tab.label(), |section| section.title)
}

fn section_lines(tab: TabKind, selected_action: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut action_index = 0;
    for section in sections_for(tab) {
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(block_lines(
            section.blocks,
            selected_action,
            &mut action_index,
        ));
        lines.push(Line::default());
    }
    lines
}

fn block_lines(
    blocks: &'static [ContentBlock],
    selected_action: Option<usize>,
    action_index: &mut usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            ContentBlock::Paragraph(text) => lines.push(Line::from(*text)),
            ContentBlock::Bullets(items) => {
                lines.extend(items.iter().map(|item| Line::from(format!("  • {item}"))));
            }
            ContentBlock::Steps(items) => {
                lines.extend(
                    items
                        .iter()
                        .enumerate()
                        .map(|(index, item)| Line::from(format!("  {}. {item}", index + 1))),
                );
            }
            ContentBlock::Buttons(actions) | ContentBlock::Chips(actions) => {
                let chips = matches!(block, ContentBlock::Chips(_));
                let mut spans = Vec::new();
                for action in actions.iter() {
                    let label = if chips {
                        format!("({})", action.label)
                    } else {
                        format!("[ {} ]", action.label)
                    };
                    let style = if selected_action == Some(*action_index) {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    spans.push(Span::styled(label, style));
                    spans.push(Span::raw(" "));
                    *action_index += 1;
                }
                lines.push(Line::from(spans));
            }
            ContentBlock::Note(text) => lines.push(Line::from(Span::styled(
                *text,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))),
        }
    }
    lines
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.help_visible {
        return String::new();
    }

    let mode = match state.mode {
        AppMode::Nav => "NAV",
        AppMode::Search => "SEARCH",
        AppMode::Contact => "CONTACT",
    };
    let mut hints = key_hints(state).to_owned();
    if state.mode == AppMode::Contact {
        hints = format!(
            "field: {} | {hints}",
            view_data.contact.active_field().placeholder()
        );
    }
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {hints}"),
        None => format!("{mode} | {hints}"),
    }
}

fn key_hints(state: &AppState) -> &'static str {
    match state.mode {
        AppMode::Search => "type to filter | backspace | enter/esc done",
        AppMode::Contact => "tab/shift+tab field | enter send | esc back",
        AppMode::Nav => match state.active_tab {
            TabKind::Inventory => "/ search | x clear | p prices | j/k rows | f/b tabs | ? | q",
            TabKind::Faq => "j/k move | enter expand | f/b tabs | ? | q",
            TabKind::Contact => "i edit | f/b tabs | ? | q",
            _ => "j/k select | enter open | c consult | f/b tabs | ? | q",
        },
    }
}

fn footer_text(year: i32) -> String {
    format!("© {year} {COMPANY_NAME} | {}", FOOTER_LINKS.join(" | "))
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | q quit (nav) | ? help\n\
tabs: f/b or right/left next/prev | 1-8 jump | c request a consult\n\
pages: j/k select button | enter open\n\
inventory: / search | enter/esc finish search | x clear | p prices | j/k g/G rows\n\
faqs: j/k move | enter/space expand or collapse\n\
contact: i/enter edit | tab/shift+tab field | enter send | esc back"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
