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
use crate::http::models::Track;
use crate::ui::components::toast::ToastKind;
use crate::ui::{
    components::spinner::Spinner,
    context::AppContext,
    state::AppState,
    traits::{Action, View},
};
use crate::util::colors;

pub struct LikedSongs {
    list_state: ListState,
    tracks: Vec<Track>,
    is_loading: bool,
    fetch_handle: Option<JoinHandle<()>>,
}

impl Default for LikedSongs {
    fn default() -> Self {
        Self {
            list_state: ListState::default(),
            tracks: Vec::new(),
            is_loading: true,
            fetch_handle: None,
        }
    }
}

impl Drop for LikedSongs {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }
}

#[async_trait]
impl View for LikedSongs {
    fn title(&self) -> &str {
        "Liked Songs"
    }

    async fn on_mount(&mut self, ctx: &AppContext) {
        self.is_loading = true;
        let api = ctx.api.clone();
        let tx = ctx.event_tx.clone();
        let handle = tokio::spawn(async move {
            match api.fetch_liked_tracks().await {
                Ok(tracks) => {
                    let _ = tx.send(Event::LikedTracksFetched(tracks));
                }
                Err(e) => {
                    let _ = tx.send(Event::FetchError(e.to_string()));
                }
            }
        });
        self.fetch_handle = Some(handle);
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        if self.is_loading && self.tracks.is_empty() {
            let spinner = Spinner::new("Loading liked songs...")
                .with_style(Style::default().fg(colors::PRIMARY));
            f.render_widget(spinner, area);
            return;
        }

        let items: Vec<ListItem> = self
            .tracks
            .iter()
            .map(|track| ListItem::new(format!("♥ {} - {}", track.title, track.artist)))
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        if !self.tracks.is_empty() && self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        let len = self.tracks.len();
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
                let track = self.list_state.selected().and_then(|i| self.tracks.get(i))?;
                ctx.audio.play(track.clone());
                let _ = ctx.event_tx.send(Event::Toast(
                    format!("Playing {}", track.title),
                    ToastKind::Info,
                ));
                None
            }
            _ => None,
        }
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        if let Event::LikedTracksFetched(tracks) = event {
            self.tracks = tracks.clone();
            self.is_loading = false;
        }
    }
}
