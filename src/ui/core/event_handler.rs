use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::Duration;

/// How long to wait for input before reporting a tick
const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(EventType::from(crossterm::event::read()?));
        }

        // If no immediate event, wait a bit and return tick
        tokio::time::sleep(TICK_RATE).await;
        Ok(EventType::Tick)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl From<Event> for EventType {
    fn from(event: Event) -> Self {
        match event {
            // key presses only
            Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
            Event::Mouse(mouse) => EventType::Mouse(mouse),
            Event::Resize(w, h) => EventType::Resize(w, h),
            _ => EventType::Other,
        }
    }
}
