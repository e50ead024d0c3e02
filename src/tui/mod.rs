// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Benchplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Benchplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Shows a [`PlotSpec`] full-screen as an interactive chart window (ratatui + crossterm) until the
//! user quits.

use std::{error::Error, io, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::Paragraph};

use crate::plot::{self, PlotSpec, Theme};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the chart window until `q` or `Esc` is pressed.
pub fn run(spec: PlotSpec, theme: Theme) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(spec, theme);
    tracing::info!(lines = app.spec.lines.len(), "opened chart window");

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_code(key.code);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.size();
    let [chart_area, footer_area] = {
        let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);
        [chunks[0], chunks[1]]
    };

    frame.render_widget(plot::chart(&app.spec, &app.theme, app.show_legend), chart_area);
    frame.render_widget(Paragraph::new(app.footer_line()), footer_area);
}

struct App {
    spec: PlotSpec,
    theme: Theme,
    show_legend: bool,
    should_quit: bool,
}

impl App {
    fn new(spec: PlotSpec, theme: Theme) -> Self {
        Self {
            spec,
            theme,
            show_legend: true,
            should_quit: false,
        }
    }

    /// Returns whether the key was handled.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('l') => {
                self.show_legend = !self.show_legend;
                true
            }
            _ => false,
        }
    }

    fn footer_line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(4);
        spans.push(Span::styled(" q", self.theme.footer_key_style()));
        spans.push(Span::styled(" quit ", self.theme.footer_label_style()));
        if self.spec.has_legend() {
            spans.push(Span::styled(" l", self.theme.footer_key_style()));
            let label = if self.show_legend { " hide legend" } else { " show legend" };
            spans.push(Span::styled(label, self.theme.footer_label_style()));
        }
        Line::from(spans)
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, Terminal};

    use super::{draw, App};
    use crate::model::Series;
    use crate::plot::{PlotLine, PlotSpec, SeriesStyle, Theme};

    fn grouped_spec() -> PlotSpec {
        let mut series = Series::new();
        series.push(40, 1.0);
        series.push(50, 2.0);

        let mut spec = PlotSpec::new("benchmark.json");
        spec.push_line(PlotLine::from_series(
            Some("2".to_owned()),
            &series,
            SeriesStyle::default(),
        ));
        spec
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn quits_on_q_and_esc() {
        let mut app = App::new(grouped_spec(), Theme::default());
        assert!(app.handle_key_code(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = App::new(grouped_spec(), Theme::default());
        assert!(app.handle_key_code(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn l_toggles_legend_and_other_keys_are_ignored() {
        let mut app = App::new(grouped_spec(), Theme::default());
        assert!(app.show_legend);

        assert!(app.handle_key_code(KeyCode::Char('l')));
        assert!(!app.show_legend);
        assert!(app.handle_key_code(KeyCode::Char('l')));
        assert!(app.show_legend);

        assert!(!app.handle_key_code(KeyCode::Char('x')));
        assert!(!app.should_quit);
    }

    #[test]
    fn draws_chart_and_footer() {
        let mut app = App::new(grouped_spec(), Theme::default());

        let text = screen_text(&app);
        assert!(text.contains("benchmark.json"), "{text}");
        assert!(text.contains("hide legend"), "{text}");

        app.handle_key_code(KeyCode::Char('l'));
        let text = screen_text(&app);
        assert!(text.contains("show legend"), "{text}");
    }
}
