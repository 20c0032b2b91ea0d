use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::audio::{PlayerSnapshot, PlaybackState};
use crate::util::colors;

/// The persistent player bar. Mounted once by the shell and rendered on
/// every frame regardless of the active page.
pub struct PlayerWidget<'a> {
    snapshot: &'a PlayerSnapshot,
}

impl<'a> PlayerWidget<'a> {
    pub fn new(snapshot: &'a PlayerSnapshot) -> Self {
        Self { snapshot }
    }

    fn status_icon(&self) -> &'static str {
        match self.snapshot.state {
            PlaybackState::Playing(_) => "󰐊",
            PlaybackState::Paused(_) => "󰏤",
            PlaybackState::Stopped => "󰓛",
        }
    }
}

fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        if format!("{out}{c}").width() + 1 > max_width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

fn format_time(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

impl Widget for PlayerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(20),
                Constraint::Length(30),
                Constraint::Length(12),
            ])
            .split(area);

        let (title, artist) = match self.snapshot.current_track() {
            Some(track) => (track.title.as_str(), Some(track.artist.as_str())),
            None => ("No track", None),
        };

        let mut track_line = Line::default();
        track_line.push_span(Span::styled(
            format!("{} ", self.status_icon()),
            Style::default().fg(colors::PRIMARY),
        ));
        let label_width = chunks[0].width.saturating_sub(4) as usize;
        track_line.push_span(truncate(title, label_width).bold());
        if let Some(artist) = artist {
            track_line.push_span(Span::styled(
                format!(" — {}", truncate(artist, label_width)),
                Style::default().fg(colors::NEUTRAL),
            ));
        }

        let track_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED);
        Paragraph::new(track_line).block(track_block).render(chunks[0], buf);

        let (progress, duration) = match self.snapshot.current_track() {
            Some(track) => (self.snapshot.progress_secs, track.duration_secs),
            None => (0, 0),
        };
        let ratio = if duration > 0 {
            (progress as f64 / duration as f64).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let progress_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED);
        Gauge::default()
            .block(progress_block)
            .gauge_style(Style::new().fg(colors::PRIMARY).bg(colors::NEUTRAL))
            .ratio(ratio)
            .label(format!("{} / {}", format_time(progress), format_time(duration)))
            .render(chunks[1], buf);

        let volume_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED);
        Gauge::default()
            .block(volume_block)
            .gauge_style(Style::new().fg(colors::SECONDARY).bg(colors::NEUTRAL))
            .ratio(self.snapshot.volume as f64 / 100.0)
            .label(format!("{}%", self.snapshot.volume))
            .render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::models::Track;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(61), "1:01");
        assert_eq!(format_time(600), "10:00");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long track title", 8), "a very …");
    }

    #[test]
    fn test_renders_current_track() {
        let snapshot = PlayerSnapshot {
            state: PlaybackState::Playing(Track {
                id: "t1".to_string(),
                title: "Midnight".to_string(),
                artist: "Aurora".to_string(),
                duration_secs: 180,
                liked: false,
            }),
            progress_secs: 30,
            volume: 80,
        };

        let mut terminal = Terminal::new(TestBackend::new(90, 3)).unwrap();
        terminal
            .draw(|f| f.render_widget(PlayerWidget::new(&snapshot), f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Midnight"));
        assert!(text.contains("0:30"));
        assert!(text.contains("80%"));
    }
}
