//! Test utilities shared across the crate.

use std::sync::Arc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::audio::AudioHandle;
use crate::auth::AuthService;
use crate::config::Config;
use crate::event::events::Event;
use crate::http::ApiClient;
use crate::ui::context::AppContext;
use crate::ui::nav::Navigator;
use crate::ui::state::AppState;
use crate::ui::traits::View;

/// Context wired to throwaway collaborators. The navigator is dropped, so
/// channel publishes vanish; use [`test_context_with_nav`] to observe them.
pub fn test_context() -> (AppContext, flume::Receiver<Event>) {
    let (ctx, event_rx, _navigator) = test_context_with_nav();
    (ctx, event_rx)
}

pub fn test_context_with_nav() -> (AppContext, flume::Receiver<Event>, Navigator) {
    let (event_tx, event_rx) = flume::unbounded();
    let navigator = Navigator::new();
    let config = Config {
        api_url: "http://127.0.0.1:9".to_string(),
        token: None,
    };
    let ctx = AppContext {
        api: Arc::new(ApiClient::new(&config)),
        auth: Arc::new(AuthService::new()),
        audio: AudioHandle::new(),
        nav: navigator.handle(),
        event_tx,
    };
    (ctx, event_rx, navigator)
}

/// Renders a view into a test terminal and returns the buffer as one string.
pub fn render_view(view: &mut dyn View, ctx: &AppContext, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            view.render(f, area, &AppState::default(), ctx);
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
