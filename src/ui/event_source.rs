use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self, wake_at: Option<Instant>) -> Result<Option<AppEvent>> {
        if !event::poll(poll_timeout(wake_at, Instant::now()))? {
            return Ok(Some(AppEvent::Tick));
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
            Event::Resize(..) => Ok(Some(AppEvent::Tick)),
            _ => Ok(None),
        }
    }
}

fn poll_timeout(wake_at: Option<Instant>, now: Instant) -> Duration {
    match wake_at {
        Some(deadline) => deadline
            .saturating_duration_since(now)
            .min(EVENT_POLL_TIMEOUT),
        None => EVENT_POLL_TIMEOUT,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let name = match key.code {
        KeyCode::Esc => return Some(AppEvent::QuitRequested),
        KeyCode::Char('c') if ctrl => return Some(AppEvent::QuitRequested),
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Enter => "enter".to_owned(),
        KeyCode::Tab => "tab".to_owned(),
        KeyCode::BackTab => "backtab".to_owned(),
        KeyCode::Backspace => "backspace".to_owned(),
        KeyCode::Delete => "delete".to_owned(),
        KeyCode::Left => "left".to_owned(),
        KeyCode::Right => "right".to_owned(),
        KeyCode::Up => "up".to_owned(),
        KeyCode::Down => "down".to_owned(),
        KeyCode::Home => "home".to_owned(),
        KeyCode::End => "end".to_owned(),
        _ => return None,
    };

    Some(AppEvent::InputKey(KeyInput::new(name, ctrl)))
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self, _wake_at: Option<Instant>) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}
