use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::auth::AuthSession;
use crate::ui::nav::PageId;
use crate::util::colors;

/// Pages reachable directly from the navbar, in display order. Detail pages
/// are reached from their parent lists and highlight the parent tab.
pub const NAV_TABS: [(PageId, &str); 6] = [
    (PageId::Home, "Home"),
    (PageId::Artists, "Artists"),
    (PageId::Playlists, "Playlists"),
    (PageId::LikedSongs, "Liked"),
    (PageId::Dashboard, "Dashboard"),
    (PageId::Upload, "Upload"),
];

/// The navbar tab that should light up for a page.
pub fn highlight_tab(page: PageId) -> PageId {
    match page {
        PageId::ArtistDetail => PageId::Artists,
        PageId::PlaylistDetail => PageId::Playlists,
        other => other,
    }
}

pub struct Navbar<'a> {
    current: PageId,
    session: &'a AuthSession,
}

impl<'a> Navbar<'a> {
    pub fn new(current: PageId, session: &'a AuthSession) -> Self {
        Self { current, session }
    }
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let highlighted = highlight_tab(self.current);

        let mut line = Line::default();
        for (i, (page, label)) in NAV_TABS.iter().enumerate() {
            let style = if *page == highlighted {
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::NEUTRAL)
            };
            line.push_span(Span::styled(format!(" {} {label} ", i + 1), style));
        }

        let status = if self.session.loading {
            "resolving session".to_string()
        } else {
            match &self.session.user {
                Some(user) => format!("{} (o: sign out)", user.username),
                None => "l: sign in".to_string(),
            }
        };

        line.render(area, buf);

        let status_width = status.width() as u16;
        if area.width > status_width {
            buf.set_string(
                area.x + area.width - status_width,
                area.y,
                status,
                Style::default().fg(colors::ACCENT),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_pages_highlight_their_parent_tab() {
        assert_eq!(highlight_tab(PageId::ArtistDetail), PageId::Artists);
        assert_eq!(highlight_tab(PageId::PlaylistDetail), PageId::Playlists);
        assert_eq!(highlight_tab(PageId::Upload), PageId::Upload);
    }

    #[test]
    fn test_navbar_shows_username_when_signed_in() {
        use crate::http::models::User;
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let session = AuthSession::signed_in(User {
            id: "u1".to_string(),
            username: "ada".to_string(),
            email: None,
        });
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|f| f.render_widget(Navbar::new(PageId::Home, &session), f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("ada"));
        assert!(text.contains("Home"));
    }
}
