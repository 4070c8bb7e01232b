//! Application module.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use futures::channel::mpsc::UnboundedSender;
use ghsearch_models::{InputEvent, UiState};
use tui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::state::ResultsState;

const PLACEHOLDER: &str = "Search GitHub User Profile";
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub struct App<'a> {
    pub title: &'a str,
    pub should_quit: bool,
    pub input: String,
    pub results: ResultsState,
    spinner_frame: usize,
    events: UnboundedSender<InputEvent>,
}

impl<'a> App<'a> {
    pub fn new(title: &'a str, events: UnboundedSender<InputEvent>) -> Self {
        Self {
            title,
            should_quit: false,
            input: String::new(),
            results: ResultsState::new(),
            spinner_frame: 0,
            events,
        }
    }

    fn send_input(&self) {
        if self
            .events
            .unbounded_send(InputEvent::new(self.input.clone()))
            .is_err()
        {
            tracing::trace!("Query pipeline is gone");
        }
    }

    pub fn draw_title<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let title = Spans::from(vec![Span::styled(
            self.title,
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]);
        let p = Paragraph::new(title).alignment(Alignment::Center);
        f.render_widget(p, area);
    }

    pub fn draw_input<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let text = if self.input.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.input.as_str())
        };

        let paragraph =
            Paragraph::new(text).block(Block::default().title("Search").borders(Borders::ALL));
        f.render_widget(paragraph, area);

        let cursor_offset = u16::try_from(self.input.chars().count()).unwrap_or(u16::MAX);
        f.set_cursor(
            area.x
                .saturating_add(1)
                .saturating_add(cursor_offset)
                .min(area.right().saturating_sub(2)),
            area.y + 1,
        );
    }

    pub fn draw_results<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect) {
        let block = Block::default().title("Users").borders(Borders::ALL);

        let message = match &self.results.ui_state {
            UiState::Results(users) => {
                let items: Vec<ListItem> = users
                    .iter()
                    .map(|user| {
                        ListItem::new(Spans::from(vec![
                            Span::styled(
                                user.login.as_str(),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                            Span::raw(format!(" (#{}) ", user.id)),
                            Span::styled(
                                user.avatar_url.as_str(),
                                Style::default().fg(Color::Blue),
                            ),
                        ]))
                    })
                    .collect();

                let list = List::new(items)
                    .block(block.title(format!("Users ({})", users.len())))
                    .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                    .highlight_symbol(">> ");
                f.render_stateful_widget(list, area, &mut self.results.list_state);
                return;
            }
            UiState::Idle => Span::raw(""),
            UiState::Loading => Span::styled(
                format!("{} Loading...", SPINNER[self.spinner_frame]),
                Style::default().fg(Color::Yellow),
            ),
            UiState::Empty => Span::styled("No User", Style::default().add_modifier(Modifier::BOLD)),
            UiState::Error(message) => {
                Span::styled(message.as_str(), Style::default().fg(Color::Red))
            }
        };

        let paragraph = Paragraph::new(Spans::from(message))
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    pub fn draw_help<B: Backend>(f: &mut Frame<B>, area: Rect) {
        let text = Spans::from(vec![
            Span::styled("UP/DOWN", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" - Move selection  "),
            Span::styled("CTRL+U", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" - Clear search  "),
            Span::styled("ESC", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" - Quit"),
        ]);

        let paragraph =
            Paragraph::new(text).block(Block::default().title("Help").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    pub fn draw<B: Backend>(&mut self, f: &mut Frame<B>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(1),
                    Constraint::Length(3),
                    Constraint::Min(3),
                    Constraint::Length(3),
                ]
                .as_ref(),
            )
            .split(f.size());

        self.draw_title(f, chunks[0]);
        self.draw_input(f, chunks[1]);
        self.draw_results(f, chunks[2]);
        Self::draw_help(f, chunks[3]);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => {
                if !self.input.is_empty() {
                    self.input.clear();
                    self.send_input();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                self.send_input();
            }
            KeyCode::Backspace => {
                if self.input.pop().is_some() {
                    self.send_input();
                }
            }
            KeyCode::Up => self.results.previous_user(),
            KeyCode::Down => self.results.next_user(),
            _ => (),
        }
    }

    pub fn on_state(&mut self, ui_state: UiState) {
        self.results.set_ui_state(ui_state);
    }

    pub fn on_tick(&mut self) {
        if self.results.ui_state.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        }
    }
}
