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

#[derive(Default)]
pub struct Home;

#[async_trait]
impl View for Home {
    fn title(&self) -> &str {
        "Home"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let lines = vec![
            Line::from(Span::styled(
                "Welcome to mellow",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Browse with the number keys, Tab cycles pages:"),
            Line::from("  1  home          4  liked songs"),
            Line::from("  2  artists       5  dashboard"),
            Line::from("  3  playlists     6  upload"),
            Line::from(""),
            Line::from("Lists: j/k move, Enter selects, Esc goes up a level."),
            Line::from("Playback: space play/pause, +/- volume."),
            Line::from(""),
            Line::from(Span::styled(
                "Playlists, likes and uploads need a signed-in session.",
                Style::default().fg(colors::NEUTRAL),
            )),
        ];

        let paragraph = Paragraph::new(lines).scroll((state.ui.content_scroll, 0));
        f.render_widget(paragraph, area);
    }
}
