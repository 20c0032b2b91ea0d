use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, ListState},
};
use tokio::task::JoinHandle;

use crate::event::events::Event;
use crate::http::models::Playlist;
use crate::ui::{
    components::spinner::Spinner,
    context::AppContext,
    nav::{PageId, PageParams},
    state::AppState,
    traits::{Action, View},
};
use crate::util::colors;

pub struct Playlists {
    list_state: ListState,
    playlists: Vec<Playlist>,
    is_loading: bool,
    fetch_handle: Option<JoinHandle<()>>,
}

impl Default for Playlists {
    fn default() -> Self {
        Self {
            list_state: ListState::default(),
            playlists: Vec::new(),
            is_loading: true,
            fetch_handle: None,
        }
    }
}

impl Drop for Playlists {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }
}

#[async_trait]
impl View for Playlists {
    fn title(&self) -> &str {
        "Playlists"
    }

    async fn on_mount(&mut self, ctx: &AppContext) {
        self.is_loading = true;
        let api = ctx.api.clone();
        let tx = ctx.event_tx.clone();
        let handle = tokio::spawn(async move {
            match api.fetch_playlists().await {
                Ok(playlists) => {
                    let _ = tx.send(Event::PlaylistsFetched(playlists));
                }
                Err(e) => {
                    let _ = tx.send(Event::FetchError(e.to_string()));
                }
            }
        });
        self.fetch_handle = Some(handle);
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        if self.is_loading && self.playlists.is_empty() {
            let spinner = Spinner::new("Loading playlists...")
                .with_style(Style::default().fg(colors::PRIMARY));
            f.render_widget(spinner, area);
            return;
        }

        let items: Vec<ListItem> = self
            .playlists
            .iter()
            .map(|playlist| {
                ListItem::new(format!("{} ({} tracks)", playlist.title, playlist.track_count))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        if !self.playlists.is_empty() && self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        let len = self.playlists.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if len > 0 {
                    let i = self
                        .list_state
                        .selected()
                        .map_or(0, |i| if i >= len - 1 { i } else { i + 1 });
                    self.list_state.select(Some(i));
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if len > 0 {
                    let i = self
                        .list_state
                        .selected()
                        .map_or(0, |i| if i == 0 { 0 } else { i - 1 });
                    self.list_state.select(Some(i));
                }
                None
            }
            KeyCode::Enter => {
                let playlist = self
                    .list_state
                    .selected()
                    .and_then(|i| self.playlists.get(i))?;
                let params =
                    PageParams::from([("playlistId".to_string(), playlist.id.clone())]);
                Some(Action::Navigate(PageId::PlaylistDetail, params))
            }
            _ => None,
        }
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        if let Event::PlaylistsFetched(playlists) = event {
            self.playlists = playlists.clone();
            self.is_loading = false;
        }
    }
}
