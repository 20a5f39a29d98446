//! Terminal keypad
//!
//! Renders the two-line display above a clickable button grid using ratatui,
//! and reads keyboard and mouse input with crossterm. The divide-by-zero
//! notice goes to the status line and rings the terminal bell.

use super::FrontendError;
use crate::config::CalcConfig;
use crate::keymap::{Button, KeyInput, KEYPAD};
use crate::runtime::{Calculator, Notifier};
use crate::state_machine::CalcError;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::io::{self, stdout, Stdout, Write};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

const HELP: &str = " Esc clear  Del delete  q quit";

/// Background of the activated button
const HIGHLIGHT_BG: Color = Color::Rgb(0xff, 0xcc, 0x80);

/// Latest notice for the status line, plus a pending bell
#[derive(Debug, Default)]
pub struct StatusLine {
    notice: Option<String>,
    bell: bool,
}

impl Notifier for StatusLine {
    fn notify(&mut self, error: &CalcError) {
        self.notice = Some(error.to_string());
        self.bell = true;
    }
}

#[derive(Debug, Clone, Copy)]
struct Highlight {
    position: (usize, usize),
    until: Instant,
}

/// Keypad state between frames
pub struct KeypadApp {
    calculator: Calculator<StatusLine>,
    highlight_for: Duration,
    highlight: Option<Highlight>,
    /// Button rectangles from the last render, for mouse hit testing
    button_areas: Vec<(Rect, KeyInput)>,
    quit: bool,
}

impl KeypadApp {
    pub fn new(highlight_for: Duration) -> Self {
        Self {
            calculator: Calculator::new(StatusLine::default()),
            highlight_for,
            highlight: None,
            button_areas: Vec::new(),
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || key.code == KeyCode::Char('q') {
            tracing::info!("Quit requested");
            self.quit = true;
            return;
        }

        if let Some(input) = convert_key(key.code) {
            self.press(input, now);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let hit = self
            .button_areas
            .iter()
            .find(|(area, _)| contains(*area, mouse.column, mouse.row))
            .map(|(_, key)| *key);

        if let Some(key) = hit {
            self.press(key, now);
        }
    }

    /// Drop an expired highlight
    pub fn tick(&mut self, now: Instant) {
        if self.highlight.is_some_and(|h| now >= h.until) {
            self.highlight = None;
        }
    }

    /// Whether a notice arrived since the last call
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.calculator.notifier_mut().bell)
    }

    fn press(&mut self, key: KeyInput, now: Instant) {
        self.calculator.notifier_mut().notice = None;
        if self.calculator.press(key).is_some() {
            self.highlight = Button::position_for_key(key).map(|position| Highlight {
                position,
                until: now + self.highlight_for,
            });
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let [display_area, keypad_area, status_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_display(frame, display_area);
        self.render_keypad(frame, keypad_area);
        self.render_status(frame, status_area);
    }

    fn render_display(&self, frame: &mut Frame, area: Rect) {
        let display = self.calculator.display();
        let lines = vec![
            Line::from(Span::styled(
                display.secondary,
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                display.primary,
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(Block::bordered().title(" keypad-calc "));

        frame.render_widget(paragraph, area);
    }

    fn render_keypad(&mut self, frame: &mut Frame, area: Rect) {
        self.button_areas.clear();

        let rows = Layout::vertical([Constraint::Fill(1); KEYPAD.len()]).split(area);

        for (row_idx, (buttons, row_area)) in KEYPAD.iter().zip(rows.iter()).enumerate() {
            // "0" spans two columns on the bottom row
            let constraints = buttons.iter().map(|b| {
                if b.label == "0" {
                    Constraint::Fill(2)
                } else {
                    Constraint::Fill(1)
                }
            });
            let cells = Layout::horizontal(constraints).split(*row_area);

            for (col_idx, (button, cell)) in buttons.iter().zip(cells.iter()).enumerate() {
                let highlighted = self
                    .highlight
                    .is_some_and(|h| h.position == (row_idx, col_idx));
                frame.render_widget(button_widget(button, highlighted), *cell);
                self.button_areas.push((*cell, button.key));
            }
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.calculator.notifier().notice {
            Some(notice) => Line::from(Span::styled(
                format!(" {notice}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(HELP, Style::default().fg(Color::DarkGray))),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn button_widget(button: &Button, highlighted: bool) -> Paragraph<'static> {
    let is_digit = matches!(button.key, KeyInput::Char(c) if c.is_ascii_digit() || c == '.');
    let style = if highlighted {
        Style::default().bg(HIGHLIGHT_BG).fg(Color::Black)
    } else if is_digit {
        Style::default()
    } else {
        Style::default().fg(Color::Yellow)
    };

    Paragraph::new(button.label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::bordered())
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Convert crossterm `KeyCode` to `KeyInput`.
fn convert_key(code: KeyCode) -> Option<KeyInput> {
    match code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Esc => Some(KeyInput::Escape),
        KeyCode::Backspace | KeyCode::Delete => Some(KeyInput::Backspace),
        _ => None,
    }
}

/// Owns the terminal: raw mode, alternate screen and mouse capture are
/// undone on drop.
struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    fn new() -> Result<Self, FrontendError> {
        enable_raw_mode()?;
        stdout()
            .execute(EnterAlternateScreen)?
            .execute(EnableMouseCapture)?;

        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self { terminal })
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(DisableMouseCapture);
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// Run the keypad until the user quits
pub fn run(config: &CalcConfig) -> Result<(), FrontendError> {
    let mut tui = Tui::new()?;
    let mut app = KeypadApp::new(config.highlight);
    tracing::info!("Keypad started");

    while !app.should_quit() {
        tui.terminal.draw(|frame| app.render(frame))?;

        if app.take_bell() {
            ring_bell()?;
        }

        if event::poll(POLL_INTERVAL)? {
            let now = Instant::now();
            match event::read()? {
                TermEvent::Key(key) => app.handle_key(key, now),
                TermEvent::Mouse(mouse) => app.handle_mouse(mouse, now),
                _ => {}
            }
        }

        app.tick(Instant::now());
    }

    Ok(())
}

fn ring_bell() -> io::Result<()> {
    let mut out = stdout();
    out.write_all(b"\x07")?;
    out.flush()
}
