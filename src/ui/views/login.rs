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

/// Public sign-in page. Also rendered in place of any protected page while
/// no user is signed in.
#[derive(Default)]
pub struct Login;

#[async_trait]
impl View for Login {
    fn title(&self) -> &str {
        "Sign in"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        let lines = vec![
            Line::from(Span::styled(
                "Sign in to mellow",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Put an API token where the client can find it:"),
            Line::from(""),
            Line::from("  1. export MELLOW_TOKEN=... (or a .env file), or"),
            Line::from("  2. store it in the OS keyring under service \"mellow\","),
            Line::from("     user \"api-token\","),
            Line::from(""),
            Line::from("then restart the client."),
            Line::from(""),
            Line::from(Span::styled(
                "No account yet? Press r to register.",
                Style::default().fg(colors::ACCENT),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(" Sign in ");
        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Char('r') => {
                // Published on the channel: this view may be shown in place
                // of a protected page, with no structural path to the store.
                ctx.nav.navigate(PageId::Register, PageParams::new());
                None
            }
            _ => None,
        }
    }
}
