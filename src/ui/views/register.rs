use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use ratatui::symbols::border;

use crate::ui::{
    context::AppContext,
    nav::{PageId, PageParams},
    state::AppState,
    traits::{Action, View},
};
use crate::util::colors;

#[derive(Default)]
pub struct Register;

#[async_trait]
impl View for Register {
    fn title(&self) -> &str {
        "Register"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        let lines = vec![
            Line::from(Span::styled(
                "Create an account",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Registration happens on the web:"),
            Line::from(""),
            Line::from("    https://mellow.fm/register"),
            Line::from(""),
            Line::from("Generate an API token from your account settings and"),
            Line::from("sign in with it here."),
            Line::from(""),
            Line::from(Span::styled(
                "Already have a token? Press l for sign-in instructions.",
                Style::default().fg(colors::ACCENT),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(" Register ");
        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Char('l') => Some(Action::Navigate(PageId::Login, PageParams::new())),
            _ => None,
        }
    }
}
