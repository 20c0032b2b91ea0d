use async_trait::async_trait;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::{context::AppContext, state::AppState, traits::View};
use crate::util::colors;

/// Profile overview. The auth gate guarantees a user is present whenever
/// this view is displayed, but render defensively anyway.
#[derive(Default)]
pub struct Dashboard;

#[async_trait]
impl View for Dashboard {
    fn title(&self) -> &str {
        "Dashboard"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        let session = ctx.auth.session();
        let username = session
            .user
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_else(|| "unknown".to_string());
        let email = session
            .user
            .as_ref()
            .and_then(|u| u.email.clone())
            .unwrap_or_else(|| "no email on file".to_string());

        let lines = vec![
            Line::from(Span::styled(
                format!("Signed in as {username}"),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(email, Style::default().fg(colors::NEUTRAL))),
            Line::from(""),
            Line::from("Your library lives under Playlists (3) and Liked (4)."),
            Line::from("Upload new tracks from the Upload page (6)."),
            Line::from(""),
            Line::from(Span::styled(
                "o signs this session out.",
                Style::default().fg(colors::NEUTRAL),
            )),
        ];

        let paragraph = Paragraph::new(lines).scroll((state.ui.content_scroll, 0));
        f.render_widget(paragraph, area);
    }
}
