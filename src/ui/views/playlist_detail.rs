use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tokio::task::JoinHandle;

use crate::event::events::Event;
use crate::http::models::Playlist;
use crate::ui::components::toast::ToastKind;
use crate::ui::{
    components::spinner::Spinner,
    context::AppContext,
    nav::{PageId, PageParams},
    state::AppState,
    traits::{Action, View},
};
use crate::util::colors;

pub struct PlaylistDetail {
    playlist_id: Option<String>,
    playlist: Option<Playlist>,
    list_state: ListState,
    is_loading: bool,
    fetch_handle: Option<JoinHandle<()>>,
}

impl PlaylistDetail {
    pub fn new(playlist_id: Option<String>) -> Self {
        Self {
            is_loading: playlist_id.is_some(),
            playlist_id,
            playlist: None,
            list_state: ListState::default(),
            fetch_handle: None,
        }
    }

    fn tracks(&self) -> &[crate::http::models::Track] {
        self.playlist.as_ref().map(|p| p.tracks.as_slice()).unwrap_or(&[])
    }
}

impl Drop for PlaylistDetail {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }
}

#[async_trait]
impl View for PlaylistDetail {
    fn title(&self) -> &str {
        "Playlist"
    }

    async fn on_mount(&mut self, ctx: &AppContext) {
        let Some(id) = self.playlist_id.clone() else {
            return;
        };
        let api = ctx.api.clone();
        let tx = ctx.event_tx.clone();
        let handle = tokio::spawn(async move {
            match api.fetch_playlist(&id).await {
                Ok(playlist) => {
                    let _ = tx.send(Event::PlaylistFetched(playlist));
                }
                Err(e) => {
                    let _ = tx.send(Event::FetchError(e.to_string()));
                }
            }
        });
        self.fetch_handle = Some(handle);
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        if self.playlist_id.is_none() {
            let empty = Paragraph::new("No playlist selected. Pick one from Playlists (3).")
                .style(Style::default().fg(colors::NEUTRAL));
            f.render_widget(empty, area);
            return;
        }

        if self.is_loading && self.playlist.is_none() {
            let spinner = Spinner::new("Loading playlist...")
                .with_style(Style::default().fg(colors::PRIMARY));
            f.render_widget(spinner, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let title = self
            .playlist
            .as_ref()
            .map(|p| format!("{} ({} tracks)", p.title, p.track_count))
            .unwrap_or_default();
        let header = Paragraph::new(Line::from(Span::styled(
            title,
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(colors::PRIMARY),
        )))
        .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = self
            .tracks()
            .iter()
            .map(|track| ListItem::new(format!("{} - {}", track.title, track.artist)))
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        if !self.tracks().is_empty() && self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        let len = self.tracks().len();
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
                let track = self
                    .list_state
                    .selected()
                    .and_then(|i| self.tracks().get(i))?
                    .clone();
                ctx.audio.play(track.clone());
                let _ = ctx.event_tx.send(Event::Toast(
                    format!("Playing {}", track.title),
                    ToastKind::Info,
                ));
                None
            }
            KeyCode::Esc => Some(Action::Navigate(PageId::Playlists, PageParams::new())),
            _ => None,
        }
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        if let Event::PlaylistFetched(playlist) = event {
            self.playlist = Some(playlist.clone());
            self.is_loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{render_view, test_context};

    #[test]
    fn test_missing_playlist_id_renders_empty_state() {
        let (ctx, _event_rx) = test_context();
        let mut view = PlaylistDetail::new(None);
        let text = render_view(&mut view, &ctx, 60, 10);
        assert!(text.contains("No playlist selected"));
    }

    #[tokio::test]
    async fn test_fetched_playlist_renders_header_and_tracks() {
        let (ctx, _event_rx) = test_context();
        let mut view = PlaylistDetail::new(Some("p1".to_string()));
        view.on_event(
            &Event::PlaylistFetched(Playlist {
                id: "p1".to_string(),
                title: "Night Drive".to_string(),
                track_count: 1,
                tracks: vec![crate::http::models::Track {
                    id: "t1".to_string(),
                    title: "Midnight".to_string(),
                    artist: "Aurora".to_string(),
                    duration_secs: 200,
                    liked: true,
                }],
            }),
            &ctx,
        )
        .await;

        let text = render_view(&mut view, &ctx, 60, 10);
        assert!(text.contains("Night Drive"));
        assert!(text.contains("Midnight"));
    }
}
