//! Main application logic for the terminal user interface.
//!
//! `App` owns the runtime state behind the four screens (task list,
//! analytics, capture form, settings). Input handling and rendering both
//! dispatch on the active screen, and [`App::run`] is the event loop the
//! binary sits in.

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Gauge, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};

use crate::analytics;
use crate::fields::*;
use crate::store::TaskStore;
use crate::{
    tui::colors::{ALERT_RED, AMBER, DONE_GREEN, EMERALD, PRIMARY, ROSE, SOFT_BLUE},
    tui::{
        task_form::{
            TaskForm, ASSIGNEE_FIELD, ASSIGNEE_SUGGESTIONS, DESCRIPTION_FIELD, DUE_FIELD,
            PRIORITY_FIELD, SECTOR_FIELD, SECTOR_SUGGESTIONS, TAGS_FIELD, TITLE_FIELD,
        },
        utils::centered_rect,
    },
};

/// Badge color for a priority.
fn priority_color(p: Priority) -> Color {
    match p {
        Priority::Alta => ALERT_RED,
        Priority::Media => AMBER,
        Priority::Baixa => SOFT_BLUE,
    }
}

/// Badge color for a status.
fn status_color(s: Status) -> Color {
    match s {
        Status::Todo | Status::InProgress => PRIMARY,
        Status::Done => DONE_GREEN,
    }
}

/// Main application state for the terminal user interface.
///
/// The store owns the task sequence and the active screen; everything
/// else here is presentation state: the list filter and selection, the
/// capture form draft, and the status bar message.
pub struct App {
    store: TaskStore,
    task_list_state: TableState,
    filtered_tasks: Vec<u64>,
    status_filter: StatusFilter,
    task_form: TaskForm,
    status_message: String,
}

impl App {
    /// Create a new App over the seeded demo board.
    pub fn new() -> Self {
        Self::with_store(TaskStore::seeded())
    }

    /// Create a new App over a caller-supplied store.
    pub fn with_store(store: TaskStore) -> Self {
        let mut app = App {
            store,
            task_list_state: TableState::default(),
            filtered_tasks: Vec::new(),
            status_filter: StatusFilter::All,
            task_form: TaskForm::new(),
            status_message: String::new(),
        };
        app.update_filtered_tasks();
        app
    }

    /// Update the filtered task list from the store and the status filter.
    ///
    /// Runs after every filter or sequence change. Order always follows
    /// the store sequence; the selection stays on the same task when it
    /// survives the recompute.
    fn update_filtered_tasks(&mut self) {
        // Note which task is selected before the list changes under it
        let old_selected_id = self
            .task_list_state
            .selected()
            .and_then(|idx| self.filtered_tasks.get(idx))
            .copied();

        self.filtered_tasks = self
            .store
            .tasks()
            .iter()
            .filter(|t| self.status_filter.matches(t.status))
            .map(|t| t.id)
            .collect();

        // Follow the task to its new position, else fall back to the top
        if let Some(old_id) = old_selected_id {
            if let Some(new_idx) = self.filtered_tasks.iter().position(|&id| id == old_id) {
                self.task_list_state.select(Some(new_idx));
            } else {
                self.task_list_state
                    .select(if self.filtered_tasks.is_empty() {
                        None
                    } else {
                        Some(0)
                    });
            }
        } else if !self.filtered_tasks.is_empty() && self.task_list_state.selected().is_none() {
            self.task_list_state.select(Some(0));
        } else if self.filtered_tasks.is_empty() {
            self.task_list_state.select(None);
        }
    }

    /// Set a status message to display in the status bar.
    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    /// Clear the current status message.
    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Open the capture screen with a fresh draft.
    ///
    /// The draft never survives leaving the screen, so a reopened form
    /// always starts from the same blank state.
    fn open_task_form(&mut self) {
        self.task_form = TaskForm::new();
        self.store.set_view(View::NewTask);
    }

    /// Handle the number keys shared by the navigation bar screens.
    /// Returns true when the key was consumed.
    fn handle_nav_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('1') => {
                self.store.set_view(View::Tasks);
                true
            }
            KeyCode::Char('2') => {
                self.store.set_view(View::Analytics);
                true
            }
            KeyCode::Char('3') => {
                self.store.set_view(View::Settings);
                true
            }
            _ => false,
        }
    }

    /// Handle keyboard input when in the task list view.
    ///
    /// Returns true if the application should quit.
    fn handle_task_list_input(
        &mut self,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> io::Result<bool> {
        if self.handle_nav_key(key) {
            return Ok(false);
        }

        match key {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
            KeyCode::Esc => {
                if self.status_filter != StatusFilter::All {
                    self.status_filter = StatusFilter::All;
                    self.update_filtered_tasks();
                } else {
                    return Ok(true);
                }
            }
            KeyCode::Up => {
                if let Some(selected) = self.task_list_state.selected() {
                    if selected > 0 {
                        self.task_list_state.select(Some(selected - 1));
                    }
                } else if !self.filtered_tasks.is_empty() {
                    self.task_list_state.select(Some(0));
                }
            }
            KeyCode::Down => {
                if let Some(selected) = self.task_list_state.selected() {
                    if selected + 1 < self.filtered_tasks.len() {
                        self.task_list_state.select(Some(selected + 1));
                    }
                } else if !self.filtered_tasks.is_empty() {
                    self.task_list_state.select(Some(0));
                }
            }
            KeyCode::Left => {
                self.status_filter = self.status_filter.prev();
                self.update_filtered_tasks();
                self.set_status_message(format!("Filtro: {}", format_filter(self.status_filter)));
            }
            KeyCode::Right => {
                self.status_filter = self.status_filter.next();
                self.update_filtered_tasks();
                self.set_status_message(format!("Filtro: {}", format_filter(self.status_filter)));
            }
            KeyCode::Char('n') | KeyCode::Char('a') => {
                self.open_task_form();
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handle keyboard input on the analytics and settings screens.
    ///
    /// Returns true if the application should quit.
    fn handle_secondary_input(
        &mut self,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> io::Result<bool> {
        if self.handle_nav_key(key) {
            return Ok(false);
        }

        match key {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
            KeyCode::Esc => {
                self.store.set_view(View::Tasks);
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handle keyboard input when in the capture form.
    ///
    /// Returns true if the application should quit (it never does; Esc
    /// abandons the draft and lands back on the list).
    fn handle_form_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> io::Result<bool> {
        match key {
            KeyCode::Esc => {
                self.store.set_view(View::Tasks);
                self.set_status_message("Criação cancelada".to_string());
            }
            KeyCode::Tab | KeyCode::Down => {
                self.task_form.next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.task_form.prev_field();
            }
            KeyCode::Left => {
                self.task_form.handle_left_right(false);
            }
            KeyCode::Right => {
                self.task_form.handle_left_right(true);
            }
            KeyCode::Backspace => {
                self.task_form.handle_backspace();
            }
            KeyCode::Delete => {
                self.task_form.handle_delete();
            }
            KeyCode::Enter => {
                // On the tags field Enter commits the pending tag; on any
                // other field it submits the form.
                if self.task_form.current_field == TAGS_FIELD {
                    self.task_form.commit_tag();
                } else {
                    self.submit_task_form();
                }
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.task_form.handle_char(c);
            }
            _ => {}
        }
        Ok(false)
    }

    /// Validate the draft and, on success, hand the built record to the
    /// store. Validation failures keep the form on screen with its values
    /// and per-field messages intact.
    fn submit_task_form(&mut self) {
        if !self.task_form.validate() {
            self.set_status_message("Corrija os campos obrigatórios".to_string());
            return;
        }

        let task = self.task_form.build_task(self.store.next_id());
        let title = task.title.clone();
        self.store.add_task(task);
        self.update_filtered_tasks();
        self.set_status_message(format!("Tarefa criada: {title}"));
    }

    /// Poll for one input event and dispatch it to the active screen.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.clear_status_message();

                let should_quit = match self.store.view() {
                    View::Tasks => self.handle_task_list_input(key.code, key.modifiers)?,
                    View::Analytics | View::Settings => {
                        self.handle_secondary_input(key.code, key.modifiers)?
                    }
                    View::NewTask => self.handle_form_input(key.code, key.modifiers)?,
                };
                if should_quit {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Render the task list view: banner, filter pills and the table.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let today = Local::now().date_naive();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // banner
                Constraint::Length(1), // filter pills
                Constraint::Min(0),    // table
            ])
            .split(area);

        let banner_text = vec![Line::from(vec![
            Span::styled(
                "GIC - BELÉM DIGITAL",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("Central de Tarefas  Filtro: {}", format_filter(self.status_filter)),
                Style::default().fg(PRIMARY).add_modifier(Modifier::ITALIC),
            ),
        ])];
        let banner = Paragraph::new(banner_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(banner, chunks[0]);

        self.render_filter_bar(f, chunks[1]);

        let table_title = format!(
            "Tarefas ({}/{})",
            self.filtered_tasks.len(),
            self.store.tasks().len()
        );

        if self.filtered_tasks.is_empty() {
            let placeholder = Paragraph::new(vec![
                Line::from(""),
                Line::from("Nenhuma tarefa encontrada."),
            ])
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(table_title));
            f.render_widget(placeholder, chunks[2]);
            return;
        }

        let header_cells = ["ID", "Setor", "Título", "Prioridade", "Status", "Prazo"]
            .iter()
            .map(|h| {
                ratatui::widgets::Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD))
            });
        let header = Row::new(header_cells)
            .style(Style::default().bg(PRIMARY).fg(Color::White))
            .height(1);

        let rows: Vec<Row> = self
            .filtered_tasks
            .iter()
            .filter_map(|&id| self.store.get(id))
            .map(|task| {
                let tags_str = if task.tags.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", task.tags.join(","))
                };

                let style = match task.status {
                    Status::Done => Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                    Status::InProgress => {
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                    }
                    Status::Todo => Style::default().fg(Color::White),
                };

                let due_style = if analytics::is_overdue(task, today) {
                    Style::default().fg(ALERT_RED).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                Row::new(vec![
                    ratatui::widgets::Cell::from(format!("#{}", task.id)),
                    ratatui::widgets::Cell::from(task.sector.clone()),
                    ratatui::widgets::Cell::from(format!("{}{}", task.title, tags_str)),
                    ratatui::widgets::Cell::from(format_priority(task.priority))
                        .style(Style::default().fg(priority_color(task.priority))),
                    ratatui::widgets::Cell::from(format_status(task.status))
                        .style(Style::default().fg(status_color(task.status))),
                    ratatui::widgets::Cell::from(task.due_date.clone()).style(due_style),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(4),  // ID
            Constraint::Length(16), // Setor
            Constraint::Min(24),    // Título
            Constraint::Length(10), // Prioridade
            Constraint::Length(12), // Status
            Constraint::Length(10), // Prazo
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(table_title))
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, chunks[2], &mut self.task_list_state);
    }

    /// Render the filter pills, active pill highlighted.
    fn render_filter_bar(&mut self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        for filter in StatusFilter::BAR {
            let style = if filter == self.status_filter {
                Style::default()
                    .fg(Color::White)
                    .bg(PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} ", format_filter(filter)), style));
            spans.push(Span::raw(" "));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Render the analytics dashboard: the two live counters on top, the
    /// mock daily and weekly figures below.
    fn render_analytics(&mut self, f: &mut Frame, area: Rect) {
        let today = Local::now().date_naive();
        let active = analytics::active_count(self.store.tasks());
        let overdue = analytics::overdue_count(self.store.tasks(), today);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(4), // summary cards
                Constraint::Length(3), // daily progress gauge
                Constraint::Length(1), // goal line
                Constraint::Min(8),    // weekly chart
                Constraint::Length(3), // insight
            ])
            .split(area);

        let header = Paragraph::new("Indicadores de Desempenho")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(header, chunks[0]);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(chunks[1]);

        let ativas = Paragraph::new(active.to_string())
            .style(Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Ativas"));
        f.render_widget(ativas, cards[0]);

        let hoje = Paragraph::new(analytics::DONE_TODAY.to_string())
            .style(Style::default().fg(EMERALD).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Hoje"));
        f.render_widget(hoje, cards[1]);

        // Always two digits, as on the card design.
        let atrasadas = Paragraph::new(format!("{overdue:02}"))
            .style(Style::default().fg(ROSE).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Atrasadas"));
        f.render_widget(atrasadas, cards[2]);

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Progresso Diário"))
            .gauge_style(Style::default().fg(PRIMARY))
            .percent(analytics::DAILY_PROGRESS_PCT)
            .label(format!(
                "{}/{} Tarefas",
                analytics::DONE_TODAY,
                analytics::DAILY_GOAL
            ));
        f.render_widget(gauge, chunks[2]);

        let goal_line = Paragraph::new(format!(
            "Faltam apenas {} tarefas para bater a meta diária do setor GIC.",
            analytics::DAILY_REMAINING
        ))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
        f.render_widget(goal_line, chunks[3]);

        let weekly = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Desempenho Semanal  Últimos 7 dias  {}",
                analytics::WEEKLY_TREND
            )))
            .data(&analytics::WEEKLY_PERFORMANCE[..])
            .bar_width(5)
            .bar_gap(2)
            .bar_style(Style::default().fg(PRIMARY))
            .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        f.render_widget(weekly, chunks[4]);

        let insight = Paragraph::new(analytics::DAILY_INSIGHT)
            .style(Style::default().fg(PRIMARY))
            .block(Block::default().borders(Borders::ALL).title("Insight do Dia"))
            .wrap(Wrap { trim: true });
        f.render_widget(insight, chunks[5]);
    }

    /// Render the capture form: text fields on the left, the priority
    /// selector, tags and hints on the right.
    fn render_task_form(&mut self, f: &mut Frame, area: Rect) {
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // header
                Constraint::Length(3), // Título
                Constraint::Length(4), // Descrição (taller)
                Constraint::Length(3), // Setor
                Constraint::Length(3), // Responsável
                Constraint::Length(3), // Data de Vencimento
                Constraint::Min(0),
            ])
            .split(main_chunks[0]);

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Prioridade
                Constraint::Length(3), // Tags input
                Constraint::Length(3), // Tag chips
                Constraint::Length(4), // Sugestões
                Constraint::Length(4), // Dica de Produtividade
                Constraint::Min(1),    // Atalhos
            ])
            .split(main_chunks[1]);

        // LEFT COLUMN - header and text fields

        let header_text = vec![
            Line::from(Span::styled(
                "Nova Tarefa",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Sistema GIC - Belém Digital",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let header = Paragraph::new(header_text).block(Block::default().borders(Borders::ALL));
        f.render_widget(header, left_chunks[0]);

        // Título (field 0)
        let title_label = match self.task_form.errors.title {
            Some(msg) => format!("Título da Tarefa * ({msg})"),
            None => "Título da Tarefa *".to_string(),
        };
        let title_style = if self.task_form.errors.title.is_some() {
            Style::default().fg(ALERT_RED)
        } else if self.task_form.current_field == TITLE_FIELD {
            Style::default().fg(PRIMARY)
        } else {
            Style::default()
        };
        let title_input = Paragraph::new(self.task_form.title.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title_label)
                .border_style(title_style),
        );
        f.render_widget(title_input, left_chunks[1]);

        // Descrição (field 1)
        let desc_style = if self.task_form.current_field == DESCRIPTION_FIELD {
            Style::default().fg(PRIMARY)
        } else {
            Style::default()
        };
        let desc_input = Paragraph::new(self.task_form.description.value.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Descrição Detalhada")
                    .border_style(desc_style),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(desc_input, left_chunks[2]);

        // Setor (field 2)
        let sector_label = match self.task_form.errors.sector {
            Some(msg) => format!("Setor Responsável * ({msg})"),
            None => "Setor Responsável *".to_string(),
        };
        let sector_style = if self.task_form.errors.sector.is_some() {
            Style::default().fg(ALERT_RED)
        } else if self.task_form.current_field == SECTOR_FIELD {
            Style::default().fg(PRIMARY)
        } else {
            Style::default()
        };
        let sector_input = Paragraph::new(self.task_form.sector.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(sector_label)
                .border_style(sector_style),
        );
        f.render_widget(sector_input, left_chunks[3]);

        // Responsável (field 3)
        let assignee_label = match self.task_form.errors.assignee {
            Some(msg) => format!("Responsável * ({msg})"),
            None => "Responsável *".to_string(),
        };
        let assignee_style = if self.task_form.errors.assignee.is_some() {
            Style::default().fg(ALERT_RED)
        } else if self.task_form.current_field == ASSIGNEE_FIELD {
            Style::default().fg(PRIMARY)
        } else {
            Style::default()
        };
        let assignee_input = Paragraph::new(self.task_form.assignee.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(assignee_label)
                .border_style(assignee_style),
        );
        f.render_widget(assignee_input, left_chunks[4]);

        // Data de Vencimento (field 4)
        let due_label = match self.task_form.errors.due_date {
            Some(msg) => format!("Data de Vencimento * ({msg})"),
            None => "Data de Vencimento * (AAAA-MM-DD)".to_string(),
        };
        let due_style = if self.task_form.errors.due_date.is_some() {
            Style::default().fg(ALERT_RED)
        } else if self.task_form.current_field == DUE_FIELD {
            Style::default().fg(PRIMARY)
        } else {
            Style::default()
        };
        let due_input = Paragraph::new(self.task_form.due_date.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(due_label)
                .border_style(due_style),
        );
        f.render_widget(due_input, left_chunks[5]);

        // RIGHT COLUMN - priority selector, tags and hints

        // Prioridade (field 5)
        let priority_style = if self.task_form.current_field == PRIORITY_FIELD {
            Style::default().fg(PRIMARY)
        } else {
            Style::default()
        };
        let priority_text = format!("< {} >", format_priority(self.task_form.selected_priority()));
        let priority_selector = Paragraph::new(priority_text)
            .style(Style::default().fg(priority_color(self.task_form.selected_priority())))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Prioridade")
                    .border_style(priority_style),
            )
            .alignment(Alignment::Center);
        f.render_widget(priority_selector, right_chunks[0]);

        // Tags (field 6)
        let tags_style = if self.task_form.current_field == TAGS_FIELD {
            Style::default().fg(PRIMARY)
        } else {
            Style::default()
        };
        let tags_input = Paragraph::new(self.task_form.tag_input.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Tags (Enter adiciona)")
                .border_style(tags_style),
        );
        f.render_widget(tags_input, right_chunks[1]);

        // Chips of committed tags. With the buffer empty the arrow keys
        // highlight a chip and Backspace/Delete removes it.
        let picking =
            self.task_form.current_field == TAGS_FIELD && self.task_form.tag_input.is_empty();
        let mut chip_spans = Vec::new();
        for (idx, tag) in self.task_form.tags.iter().enumerate() {
            let style = if picking && idx == self.task_form.tag_cursor {
                Style::default()
                    .fg(Color::White)
                    .bg(PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(PRIMARY)
            };
            chip_spans.push(Span::styled(format!(" {tag} x"), style));
            chip_spans.push(Span::raw(" "));
        }
        if self.task_form.tags.is_empty() {
            chip_spans.push(Span::styled("sem tags", Style::default().fg(Color::DarkGray)));
        }
        let chips = Paragraph::new(Line::from(chip_spans))
            .block(Block::default().borders(Borders::ALL).title("Tags ativas"));
        f.render_widget(chips, right_chunks[2]);

        let suggestions = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Setores: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(SECTOR_SUGGESTIONS.join(", ")),
            ]),
            Line::from(vec![
                Span::styled("Equipe: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(ASSIGNEE_SUGGESTIONS.join(", ")),
            ]),
        ])
        .block(Block::default().borders(Borders::ALL).title("Sugestões"))
        .wrap(Wrap { trim: true });
        f.render_widget(suggestions, right_chunks[3]);

        let tip = Paragraph::new(
            "Tarefas com prioridade Alta serão destacadas no dashboard da equipe responsável.",
        )
        .style(Style::default().fg(PRIMARY))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Dica de Produtividade"),
        )
        .wrap(Wrap { trim: true });
        f.render_widget(tip, right_chunks[4]);

        let instructions = Paragraph::new(
            "Tab/Setas: navegar  Esq/Dir: prioridade ou cursor  Enter: salvar (no campo Tags: adicionar)  Backspace/Del: remover tag marcada  Esc: cancelar",
        )
        .block(Block::default().borders(Borders::ALL).title("Atalhos"))
        .wrap(Wrap { trim: true });
        f.render_widget(instructions, right_chunks[5]);

        // Render cursor for active text fields
        let cursor_field = match self.task_form.current_field {
            TITLE_FIELD => Some((left_chunks[1], &self.task_form.title)),
            DESCRIPTION_FIELD => Some((left_chunks[2], &self.task_form.description)),
            SECTOR_FIELD => Some((left_chunks[3], &self.task_form.sector)),
            ASSIGNEE_FIELD => Some((left_chunks[4], &self.task_form.assignee)),
            DUE_FIELD => Some((left_chunks[5], &self.task_form.due_date)),
            PRIORITY_FIELD => None, // selector needs no cursor
            TAGS_FIELD => Some((right_chunks[1], &self.task_form.tag_input)),
            _ => None,
        };

        if let Some((chunk, field)) = cursor_field {
            f.set_cursor_position((chunk.x + field.cursor as u16 + 1, chunk.y + 1));
        }
    }

    /// Render the settings placeholder card.
    fn render_settings(&mut self, f: &mut Frame, area: Rect) {
        let card = centered_rect(50, 40, area);
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Configurações",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Opções do sistema em breve."),
        ];
        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, card);
    }

    /// Render the bottom navigation bar with the three numbered tabs.
    fn render_nav_bar(&mut self, f: &mut Frame, area: Rect) {
        let tabs = [
            ('1', "Tasks", View::Tasks),
            ('2', "Analytics", View::Analytics),
            ('3', "Settings", View::Settings),
        ];
        let mut spans = vec![Span::raw(" ")];
        for (key, label, view) in tabs {
            let style = if self.store.view() == view {
                Style::default()
                    .fg(Color::White)
                    .bg(PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" [{key}] {label} "), style));
            spans.push(Span::raw(" "));
        }
        if self.store.view() == View::Tasks {
            spans.push(Span::styled(
                " [n] Nova Tarefa",
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Render the status bar: a transient message, or contextual hints.
    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.store.view() {
                View::Tasks => format!(
                    "Tarefas: {} | Setas: filtro e seleção  n: nova tarefa  q: sair",
                    self.filtered_tasks.len()
                ),
                View::Analytics => {
                    "Indicadores | 1/2/3: trocar de tela  Esc: voltar  q: sair".to_string()
                }
                View::Settings => {
                    "Configurações | 1/2/3: trocar de tela  Esc: voltar  q: sair".to_string()
                }
                View::NewTask => "Nova Tarefa | Enter: salvar  Esc: cancelar".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(PRIMARY).fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(status, area);
    }

    /// Main render function that dispatches to the active screen.
    ///
    /// The capture screen hides the navigation bar; every other screen
    /// shows it above the status bar.
    fn render(&mut self, f: &mut Frame) {
        let view = self.store.view();

        let chunks = if view == View::NewTask {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(f.area())
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(f.area())
        };

        match view {
            View::Tasks => self.render_task_list(f, chunks[0]),
            View::Analytics => self.render_analytics(f, chunks[0]),
            View::NewTask => self.render_task_form(f, chunks[0]),
            View::Settings => self.render_settings(f, chunks[0]),
        }

        if view == View::NewTask {
            self.render_status_bar(f, chunks[1]);
        } else {
            self.render_nav_bar(f, chunks[1]);
            self.render_status_bar(f, chunks[2]);
        }
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.clear_status_message();
        match app.store.view() {
            View::Tasks => app.handle_task_list_input(code, KeyModifiers::NONE).unwrap(),
            View::Analytics | View::Settings => {
                app.handle_secondary_input(code, KeyModifiers::NONE).unwrap()
            }
            View::NewTask => app.handle_form_input(code, KeyModifiers::NONE).unwrap(),
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_filtered_tasks_are_ordered_subset_of_store() {
        let mut app = App::new();
        for filter in StatusFilter::BAR {
            app.status_filter = filter;
            app.update_filtered_tasks();
            let expected: Vec<u64> = app
                .store
                .tasks()
                .iter()
                .filter(|t| filter.matches(t.status))
                .map(|t| t.id)
                .collect();
            assert_eq!(app.filtered_tasks, expected, "filter {filter:?}");
        }
    }

    #[test]
    fn test_arrow_keys_cycle_filter_pills() {
        let mut app = App::new();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.status_filter, StatusFilter::Only(Status::Todo));
        assert_eq!(app.filtered_tasks, vec![2]);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.status_filter, StatusFilter::All);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.status_filter, StatusFilter::Only(Status::Done));
        assert_eq!(app.filtered_tasks, vec![3]);
    }

    #[test]
    fn test_esc_resets_filter_before_quitting() {
        let mut app = App::new();
        press(&mut app, KeyCode::Right);
        assert!(!press(&mut app, KeyCode::Esc));
        assert_eq!(app.status_filter, StatusFilter::All);
        assert_eq!(app.filtered_tasks.len(), 3);
        assert!(press(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_number_keys_switch_screens() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.store.view(), View::Analytics);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.store.view(), View::Settings);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.store.view(), View::Tasks);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_new_task_key_always_opens_a_fresh_draft() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.view(), View::NewTask);
        type_text(&mut app, "rascunho");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.store.view(), View::Tasks);
        assert_eq!(app.store.tasks().len(), 3);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.store.view(), View::NewTask);
        assert!(app.task_form.title.is_empty());
    }

    #[test]
    fn test_submit_with_missing_fields_stays_on_form() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Só o título");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.view(), View::NewTask);
        assert_eq!(app.store.tasks().len(), 3);
        assert!(app.task_form.errors.title.is_none());
        assert!(app.task_form.errors.sector.is_some());
        assert_eq!(app.task_form.title.value, "Só o título");
    }

    #[test]
    fn test_capture_flow_creates_task_and_returns_to_list() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Patch review");
        press(&mut app, KeyCode::Tab); // Descrição
        press(&mut app, KeyCode::Tab); // Setor
        type_text(&mut app, "Software");
        press(&mut app, KeyCode::Tab); // Responsável
        type_text(&mut app, "Ana");
        press(&mut app, KeyCode::Tab); // Data
        type_text(&mut app, "2025-01-01");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.view(), View::Tasks);
        assert_eq!(app.store.tasks().len(), 4);
        let created = &app.store.tasks()[0];
        assert_eq!(created.id, 4);
        assert_eq!(created.title, "Patch review");
        assert_eq!(created.description, "");
        assert_eq!(created.sector, "SOFTWARE");
        assert_eq!(created.assignee, "Ana");
        assert_eq!(created.due_date, "2025-01-01");
        assert_eq!(created.status, Status::Todo);
        assert_eq!(created.priority, Priority::Media);
        assert_eq!(created.tags, vec!["Urgente", "Marketing"]);
        assert_eq!(app.filtered_tasks.first(), Some(&4));
    }

    #[test]
    fn test_enter_on_tags_field_commits_instead_of_submitting() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::BackTab); // wraps to the tags field
        assert_eq!(app.task_form.current_field, TAGS_FIELD);

        type_text(&mut app, " Infra ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.task_form.tags, vec!["Urgente", "Marketing", "Infra"]);
        assert_eq!(app.store.view(), View::NewTask);

        // With an empty buffer Enter is a no-op, never a submit.
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.task_form.tags.len(), 3);
        assert_eq!(app.store.view(), View::NewTask);
        assert_eq!(app.store.tasks().len(), 3);
    }

    #[test]
    fn test_selection_follows_task_across_filter_change() {
        let mut app = App::new();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.task_list_state.selected(), Some(2));
        press(&mut app, KeyCode::Left); // Done pill; task 3 survives
        assert_eq!(app.filtered_tasks, vec![3]);
        assert_eq!(app.task_list_state.selected(), Some(0));
    }

    #[test]
    fn test_empty_filter_result_clears_selection() {
        let mut app = App::with_store(TaskStore::new());
        assert!(app.filtered_tasks.is_empty());
        assert_eq!(app.task_list_state.selected(), None);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.task_list_state.selected(), None);
    }

    #[test]
    fn test_ctrl_c_quits_list_but_never_types_into_form() {
        let mut app = App::new();
        assert!(app
            .handle_task_list_input(KeyCode::Char('c'), KeyModifiers::CONTROL)
            .unwrap());

        let mut app = App::new();
        press(&mut app, KeyCode::Char('n'));
        app.handle_form_input(KeyCode::Char('c'), KeyModifiers::CONTROL)
            .unwrap();
        assert!(app.task_form.title.is_empty());
    }

    #[test]
    fn test_render_every_screen_smoke() {
        let backend = TestBackend::new(110, 34);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new();
        for view in [View::Tasks, View::Analytics, View::NewTask, View::Settings] {
            app.store.set_view(view);
            terminal.draw(|f| app.render(f)).unwrap();
        }

        // Empty board renders the placeholder path.
        let mut empty = App::with_store(TaskStore::new());
        terminal.draw(|f| empty.render(f)).unwrap();

        // Validation messages render inside the field titles.
        app.store.set_view(View::NewTask);
        app.task_form.validate();
        terminal.draw(|f| app.render(f)).unwrap();
    }
}
