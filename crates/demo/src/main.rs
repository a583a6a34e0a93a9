//! Demo application: three combo pickers over one shared candidate list.
//!
//! Each picker is built with different capabilities, so all three
//! presentation strategies are on screen at once. They share candidates: a
//! custom value committed in one picker is mirrored into the other two, which
//! is exactly the host-side write-back the effect drain exists for.
//!
//! Keys: `Ctrl-N` switches the active picker, `Ctrl-C` quits. Everything else
//! goes to the active picker. Logs go to `combo-picker-demo.log`.

use std::io::Stdout;

use anyhow::{Context, Result};
use combo_picker_core::{Capabilities, FnFormatter, InputHint, PickerEffect, PickerModel};
use combo_picker_tui::ComboPicker;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tracing::info;

/// Integer model with a `# 42`-style label, like a quantity picker.
#[derive(Clone, Debug, PartialEq)]
struct NumberModel {
    value: i64,
}

impl PickerModel for NumberModel {
    type Value = i64;

    fn from_value(value: i64) -> Self {
        NumberModel { value }
    }

    fn from_text(text: &str) -> Option<Self> {
        text.trim().parse().ok().map(|value| NumberModel { value })
    }

    fn label(&self) -> String {
        format!("# {}", self.value)
    }

    fn value(&self) -> i64 {
        self.value
    }

    fn manual_input_text(&self) -> Option<String> {
        Some(self.value.to_string())
    }
}

fn number_label(model: &NumberModel) -> String {
    model.label()
}

type Picker = ComboPicker<NumberModel, FnFormatter<fn(&NumberModel) -> String>>;

struct DemoApp {
    pickers: Vec<Picker>,
    active: usize,
    quit: bool,
}

impl DemoApp {
    fn new() -> Self {
        let candidates: Vec<NumberModel> = (1..=100).map(NumberModel::from_value).collect();
        let formatter = FnFormatter(number_label as fn(&NumberModel) -> String);

        let wheel = ComboPicker::new(
            "Pick a number",
            "Custom...",
            formatter,
            candidates.clone(),
            1,
        )
        .with_input_hint(InputHint::Numeric);

        let merged = ComboPicker::new(
            "Pick a number",
            "Custom...",
            formatter,
            candidates.clone(),
            50,
        )
        .with_capabilities(Capabilities {
            native_combo_box: true,
            ..Capabilities::default()
        })
        .with_input_hint(InputHint::Numeric);

        let inline = ComboPicker::new(
            "Pick a number",
            "Custom...",
            formatter,
            candidates,
            100,
        )
        .with_capabilities(Capabilities {
            native_combo_box: false,
            activation_gesture: false,
            constrained_rows: true,
        })
        .with_input_hint(InputHint::Numeric);

        Self {
            pickers: vec![wheel, merged, inline],
            active: 0,
            quit: false,
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match key.code {
                        KeyCode::Char('c') => self.quit = true,
                        KeyCode::Char('n') => self.active = (self.active + 1) % self.pickers.len(),
                        _ => {}
                    }
                    return;
                }
                self.pickers[self.active].handle_key_event(key);
            }
            Event::Mouse(mouse) => self.pickers[self.active].handle_mouse_event(mouse),
            _ => {}
        }
        self.mirror_effects();
    }

    /// Write one picker's effects back into the shared candidate list.
    fn mirror_effects(&mut self) {
        let effects = self.pickers[self.active].take_effects();
        if effects.is_empty() {
            return;
        }
        let mut list_grew = false;
        for effect in &effects {
            match effect {
                PickerEffect::CandidateAppended(model) => {
                    info!(label = %model.label(), "candidate appended");
                    list_grew = true;
                }
                PickerEffect::ValueChanged(value) => info!(value = *value, "value changed"),
                PickerEffect::FocusRequested(_) => {}
            }
        }
        if list_grew {
            let shared = self.pickers[self.active].candidates().to_vec();
            for (index, picker) in self.pickers.iter_mut().enumerate() {
                if index != self.active {
                    picker.set_candidates(shared.clone());
                }
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("combo picker demo", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  Ctrl-N next picker  Ctrl-C quit"),
            ])),
            header,
        );

        let columns = Layout::horizontal([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(body);
        for (picker, column) in self.pickers.iter_mut().zip(columns.iter()) {
            picker.render(frame, *column);
        }

        let values: Vec<String> = self
            .pickers
            .iter()
            .enumerate()
            .map(|(index, picker)| {
                let marker = if index == self.active { "*" } else { " " };
                format!("{marker}{:?}={}", picker.strategy(), picker.value())
            })
            .collect();
        frame.render_widget(Paragraph::new(values.join("  ")), footer);
    }
}

fn init_logging() -> Result<()> {
    let file = std::fs::File::create("combo-picker-demo.log").context("create log file")?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let mut app = DemoApp::new();
    while !app.quit {
        terminal.draw(|frame| app.draw(frame))?;
        app.handle_event(event::read().context("read terminal event")?);
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")?;

    let result = run(&mut terminal);

    // Restore the terminal even when the loop errored.
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    result
}
