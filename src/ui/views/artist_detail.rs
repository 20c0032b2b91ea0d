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
use crate::http::models::{Artist, Track};
use crate::ui::components::toast::ToastKind;
use crate::ui::{
    components::spinner::Spinner,
    context::AppContext,
    nav::{PageId, PageParams},
    state::AppState,
    traits::{Action, View},
};
use crate::util::colors;

pub struct ArtistDetail {
    artist_id: Option<String>,
    artist: Option<Artist>,
    tracks: Vec<Track>,
    list_state: ListState,
    is_loading: bool,
    fetch_handle: Option<JoinHandle<()>>,
}

impl ArtistDetail {
    pub fn new(artist_id: Option<String>) -> Self {
        Self {
            is_loading: artist_id.is_some(),
            artist_id,
            artist: None,
            tracks: Vec::new(),
            list_state: ListState::default(),
            fetch_handle: None,
        }
    }
}

impl Drop for ArtistDetail {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }
}

#[async_trait]
impl View for ArtistDetail {
    fn title(&self) -> &str {
        "Artist"
    }

    async fn on_mount(&mut self, ctx: &AppContext) {
        let Some(id) = self.artist_id.clone() else {
            return;
        };
        let api = ctx.api.clone();
        let tx = ctx.event_tx.clone();
        let handle = tokio::spawn(async move {
            match api.fetch_artist(&id).await {
                Ok(artist) => {
                    let _ = tx.send(Event::ArtistFetched(artist));
                }
                Err(e) => {
                    let _ = tx.send(Event::FetchError(e.to_string()));
                    return;
                }
            }
            match api.fetch_artist_tracks(&id).await {
                Ok(tracks) => {
                    let _ = tx.send(Event::ArtistTracksFetched(tracks));
                }
                Err(e) => {
                    let _ = tx.send(Event::FetchError(e.to_string()));
                }
            }
        });
        self.fetch_handle = Some(handle);
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        if self.artist_id.is_none() {
            let empty = Paragraph::new("No artist selected. Pick one from Artists (2).")
                .style(Style::default().fg(colors::NEUTRAL));
            f.render_widget(empty, area);
            return;
        }

        if self.is_loading && self.artist.is_none() {
            let spinner = Spinner::new("Loading artist...")
                .with_style(Style::default().fg(colors::PRIMARY));
            f.render_widget(spinner, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let name = self
            .artist
            .as_ref()
            .map(|a| a.name.clone())
            .unwrap_or_default();
        let genres = self
            .artist
            .as_ref()
            .map(|a| a.genres.join(", "))
            .unwrap_or_default();

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                name,
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(colors::PRIMARY),
            )),
            Line::from(Span::styled(genres, Style::default().fg(colors::NEUTRAL))),
        ])
        .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = self
            .tracks
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

        if !self.tracks.is_empty() && self.list_state.selected().is_none() {
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
            KeyCode::Esc => Some(Action::Navigate(PageId::Artists, PageParams::new())),
            _ => None,
        }
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        match event {
            Event::ArtistFetched(artist) => {
                self.artist = Some(artist.clone());
            }
            Event::ArtistTracksFetched(tracks) => {
                self.tracks = tracks.clone();
                self.is_loading = false;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{render_view, test_context};

    #[test]
    fn test_injected_artist_id_is_kept() {
        let view = ArtistDetail::new(Some("42".to_string()));
        assert_eq!(view.artist_id.as_deref(), Some("42"));
        assert!(view.is_loading);
    }

    #[test]
    fn test_missing_artist_id_renders_empty_state() {
        let (ctx, _event_rx) = test_context();
        let mut view = ArtistDetail::new(None);
        let text = render_view(&mut view, &ctx, 60, 10);
        assert!(text.contains("No artist selected"));
    }

    #[tokio::test]
    async fn test_enter_plays_selected_track() {
        let (ctx, event_rx) = test_context();
        let mut view = ArtistDetail::new(Some("a1".to_string()));
        view.on_event(
            &Event::ArtistTracksFetched(vec![Track {
                id: "t1".to_string(),
                title: "Runaway".to_string(),
                artist: "Aurora".to_string(),
                duration_secs: 180,
                liked: false,
            }]),
            &ctx,
        )
        .await;
        view.list_state.select(Some(0));

        let key = KeyEvent::new(
            KeyCode::Enter,
            ratatui::crossterm::event::KeyModifiers::NONE,
        );
        let action = view.handle_input(key, &AppState::default(), &ctx).await;
        assert_eq!(action, None);
        assert_eq!(ctx.audio.current_track().unwrap().id, "t1");
        assert!(matches!(
            event_rx.try_recv(),
            Ok(Event::Toast(_, ToastKind::Info))
        ));
    }
}
