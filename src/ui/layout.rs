use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::ui::{
    app::App,
    components::{navbar::Navbar, player::PlayerWidget},
};
use crate::util::colors;

/// The shell: navbar on top, routed content in the middle, the persistent
/// player bar at the bottom, toasts overlaid last.
pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

        let navbar_area = chunks[0];
        let content_area = chunks[1];
        let player_area = chunks[2];

        let session = self.app.ctx.auth.session();
        f.render_widget(
            Navbar::new(self.app.navigator.state().page, &session),
            navbar_area,
        );

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(format!(" {} ", self.app.view.title()));
        let content_inner = content_block.inner(content_area);
        f.render_widget(content_block, content_area);

        self.app
            .view
            .render(f, content_inner, &self.app.state, &self.app.ctx);

        // The player renders whatever the facade holds; routing never
        // touches it.
        let snapshot = self.app.ctx.audio.snapshot();
        f.render_widget(PlayerWidget::new(&snapshot), player_area);

        // Last, so the stack overlays the content's bottom-right corner.
        self.app.toaster.render(f, content_area);
    }
}
