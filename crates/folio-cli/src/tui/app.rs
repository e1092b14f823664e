//! Terminal host for the hero section
//!
//! Owns the mounted typewriter and redraws when the cycler publishes a new
//! frame, the cursor blink flips, or the terminal is resized.

use std::io::{self, Stdout, Write};
use std::sync::{Arc, Once};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::time::MissedTickBehavior;

use folio_core::{HeroProfile, Scheduler, TextCycler};

use crate::tui::animation::CursorBlink;
use crate::tui::components::HeroView;
use crate::tui::themes::Theme;

/// Frame-rate tick for the cursor blink (~60 fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub struct App<S: Scheduler> {
    profile: HeroProfile,
    theme: Theme,
    cycler: TextCycler<S>,
    blink: CursorBlink,
    should_quit: bool,
}

impl<S: Scheduler> App<S> {
    /// Mount the profile's typewriter on `scheduler`
    pub fn new(profile: HeroProfile, scheduler: Arc<S>) -> Self {
        let cycler = TextCycler::mount(&profile.typewriter, scheduler);
        Self {
            profile,
            theme: Theme::folio(),
            cycler,
            blink: CursorBlink::default(),
            should_quit: false,
        }
    }

    /// Run until the user quits. The terminal is restored and the typewriter
    /// unmounted even when the loop fails.
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;

        self.cycler.unmount();
        let restored = restore_terminal(&mut terminal);
        result.and(restored)
    }

    async fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut events = EventStream::new();
        let mut frames = self.cycler.subscribe();
        let mut interval = tokio::time::interval(FRAME_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut dirty = true;
        while !self.should_quit() {
            if dirty {
                terminal
                    .draw(|frame| self.draw(frame))
                    .context("failed to draw frame")?;
                dirty = false;
            }

            tokio::select! {
                _ = interval.tick() => {
                    dirty |= self.blink.tick();
                }
                changed = frames.changed() => {
                    if changed.is_err() {
                        tracing::warn!("Typewriter frame channel closed");
                        self.should_quit = true;
                    }
                    dirty = true;
                }
                event = events.next() => match event {
                    Some(Ok(event)) => dirty |= self.handle_event(event),
                    Some(Err(e)) => return Err(e).context("failed to read terminal event"),
                    None => self.should_quit = true,
                },
            }
        }

        tracing::debug!(ticks = self.cycler.ticks(), "Event loop finished");
        Ok(())
    }

    /// Handle one terminal event. Returns true if a redraw is needed.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.should_quit = true
                    }
                    _ => {}
                }
                false
            }
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "Terminal resized");
                true
            }
            _ => false,
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let snapshot = self.cycler.snapshot();
        let cursor_visible = !self.cycler.is_idle() && self.blink.is_visible();

        frame.render_widget(
            HeroView::new(&self.profile, &snapshot.text, &self.theme)
                .cursor_visible(cursor_visible),
            frame.area(),
        );
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

fn setup_terminal() -> Result<Tui> {
    install_panic_hook();
    enable_raw_mode().context("failed to enable raw mode")?;
    undo_on_error(enter_screen(io::stdout()), disable_raw_mode)
}

fn enter_screen<W: Write>(mut out: W) -> Result<Terminal<CrosstermBackend<W>>> {
    execute!(out, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(out))?;
    Ok(terminal)
}

/// Run `undo` when `result` failed, keeping the original error
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce() -> io::Result<()>) -> Result<T> {
    if result.is_err() {
        if let Err(e) = undo() {
            tracing::warn!("Failed to roll back terminal setup: {}", e);
        }
    }
    result
}

/// Leave raw mode and the alternate screen before the panic message prints
fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            previous(info);
        }));
    });
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
