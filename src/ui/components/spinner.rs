use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use unicode_width::UnicodeWidthStr;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_MS: u128 = 100;

/// Centered indeterminate spinner with an optional label.
pub struct Spinner {
    style: Style,
    label: Option<String>,
}

impl Spinner {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            style: Style::default(),
            label: Some(label.into()),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            style: Style::default(),
            label: None,
        }
    }
}

impl Widget for Spinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let frame = FRAMES[(now / FRAME_MS) as usize % FRAMES.len()];

        let text = match &self.label {
            Some(label) => format!("{frame} {label}"),
            None => frame.to_string(),
        };

        let x = area.x + area.width.saturating_sub(text.width() as u16) / 2;
        let y = area.y + area.height / 2;
        buf.set_string(x, y, text, self.style);
    }
}
