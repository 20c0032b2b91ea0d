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
pub struct Upload;

#[async_trait]
impl View for Upload {
    fn title(&self) -> &str {
        "Upload"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let lines = vec![
            Line::from(Span::styled(
                "Upload tracks",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Uploads run outside the client:"),
            Line::from(""),
            Line::from("    curl -H \"Authorization: Bearer $MELLOW_TOKEN\" \\"),
            Line::from("         -F audio=@track.flac $MELLOW_API_URL/tracks"),
            Line::from(""),
            Line::from(Span::styled(
                "Uploaded tracks appear on your dashboard once processed.",
                Style::default().fg(colors::NEUTRAL),
            )),
        ];

        let paragraph = Paragraph::new(lines).scroll((state.ui.content_scroll, 0));
        f.render_widget(paragraph, area);
    }
}
