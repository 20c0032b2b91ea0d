use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
};
use ratatui::symbols::border;

use crate::util::colors;

pub const TOAST_TTL: Duration = Duration::from_secs(4);
const MAX_VISIBLE: usize = 4;
const TOAST_WIDTH: u16 = 42;
const TOAST_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn color(self) -> ratatui::style::Color {
        match self {
            ToastKind::Info => colors::ACCENT,
            ToastKind::Success => colors::SUCCESS,
            ToastKind::Error => colors::ERROR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    created: Instant,
}

/// Transient notification surface. Anything may post a toast through the
/// event bus; this component owns the queue, expiry and rendering. Rendered
/// last so the stack overlays the content region's bottom-right corner.
#[derive(Default)]
pub struct Toaster {
    toasts: VecDeque<Toast>,
}

impl Toaster {
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toasts.push_back(Toast {
            message: message.into(),
            kind,
            created: Instant::now(),
        });
    }

    /// Drops expired toasts. Called once per frame.
    pub fn tick(&mut self) {
        self.expire_older_than(TOAST_TTL);
    }

    fn expire_older_than(&mut self, ttl: Duration) {
        self.toasts.retain(|t| t.created.elapsed() < ttl);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let width = TOAST_WIDTH.min(area.width);
        // Newest at the bottom, stacking upwards.
        for (i, toast) in self.toasts.iter().rev().take(MAX_VISIBLE).enumerate() {
            let offset = (i as u16 + 1) * TOAST_HEIGHT;
            if offset > area.height {
                break;
            }
            let rect = Rect {
                x: area.right().saturating_sub(width),
                y: area.bottom().saturating_sub(offset),
                width,
                height: TOAST_HEIGHT,
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(toast.kind.color()));
            f.render_widget(Clear, rect);
            f.render_widget(
                Paragraph::new(toast.message.as_str()).block(block),
                rect,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_toasts_are_dropped_in_arrival_order() {
        let mut toaster = Toaster::default();
        toaster.push("saved", ToastKind::Success);
        toaster.push("network error", ToastKind::Error);
        assert_eq!(toaster.len(), 2);

        toaster.expire_older_than(Duration::ZERO);
        assert!(toaster.is_empty());
    }

    #[test]
    fn test_tick_keeps_fresh_toasts() {
        let mut toaster = Toaster::default();
        toaster.push("hello", ToastKind::Info);
        toaster.tick();
        assert_eq!(toaster.len(), 1);
    }

    #[test]
    fn test_renders_bottom_right() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let mut toaster = Toaster::default();
        toaster.push("track liked", ToastKind::Success);

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                toaster.render(f, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let cells: Vec<&str> = buffer.content().iter().map(|c| c.symbol()).collect();
        let rows: Vec<String> = cells.chunks(80).map(|row| row.concat()).collect();

        // The toast frame occupies the last three rows, right-aligned.
        assert!(rows[18].contains("track liked"));
        assert!(!rows[18].starts_with('│'));
        for row in &rows[..17] {
            assert!(!row.contains("track liked"));
        }
    }
}
