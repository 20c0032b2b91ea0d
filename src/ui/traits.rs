use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::event::events::Event;
use crate::ui::context::AppContext;
use crate::ui::nav::{PageId, PageParams};
use crate::ui::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Navigate(PageId, PageParams),
    NavTab(usize),
    CycleTab(isize),
    PlayPause,
    VolumeUp,
    VolumeDown,
    ScrollUp,
    ScrollDown,
    SignOut,
}

#[async_trait]
pub trait View: Send {
    fn title(&self) -> &str;

    async fn on_mount(&mut self, _ctx: &AppContext) {}

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext);

    async fn handle_input(
        &mut self,
        _key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        None
    }

    async fn on_event(&mut self, _event: &Event, _ctx: &AppContext) {}
}
