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
use crate::http::models::Artist;
use crate::ui::{
    components::spinner::Spinner,
    context::AppContext,
    nav::{PageId, PageParams},
    state::AppState,
    traits::{Action, View},
};
use crate::util::colors;

pub struct Artists {
    list_state: ListState,
    artists: Vec<Artist>,
    is_loading: bool,
    fetch_handle: Option<JoinHandle<()>>,
}

impl Default for Artists {
    fn default() -> Self {
        Self {
            list_state: ListState::default(),
            artists: Vec::new(),
            is_loading: true,
            fetch_handle: None,
        }
    }
}

impl Drop for Artists {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }
}

#[async_trait]
impl View for Artists {
    fn title(&self) -> &str {
        "Artists"
    }

    async fn on_mount(&mut self, ctx: &AppContext) {
        self.is_loading = true;
        let api = ctx.api.clone();
        let tx = ctx.event_tx.clone();
        let handle = tokio::spawn(async move {
            match api.fetch_artists().await {
                Ok(artists) => {
                    let _ = tx.send(Event::ArtistsFetched(artists));
                }
                Err(e) => {
                    let _ = tx.send(Event::FetchError(e.to_string()));
                }
            }
        });
        self.fetch_handle = Some(handle);
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        if self.is_loading && self.artists.is_empty() {
            let spinner = Spinner::new("Loading artists...")
                .with_style(Style::default().fg(colors::PRIMARY));
            f.render_widget(spinner, area);
            return;
        }

        let items: Vec<ListItem> = self
            .artists
            .iter()
            .map(|artist| {
                let genres = if artist.genres.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", artist.genres.join(", "))
                };
                ListItem::new(format!(
                    "{}{} ({} tracks)",
                    artist.name, genres, artist.track_count
                ))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        if !self.artists.is_empty() && self.list_state.selected().is_none() {
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
        let len = self.artists.len();
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
            KeyCode::Char('g') => {
                if len > 0 {
                    self.list_state.select(Some(0));
                }
                None
            }
            KeyCode::Char('G') => {
                if len > 0 {
                    self.list_state.select(Some(len - 1));
                }
                None
            }
            KeyCode::Enter => {
                let artist = self.list_state.selected().and_then(|i| self.artists.get(i))?;
                let params =
                    PageParams::from([("artistId".to_string(), artist.id.clone())]);
                Some(Action::Navigate(PageId::ArtistDetail, params))
            }
            _ => None,
        }
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        if let Event::ArtistsFetched(artists) = event {
            self.artists = artists.clone();
            self.is_loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{render_view, test_context};

    #[tokio::test]
    async fn test_enter_navigates_to_artist_detail_with_id() {
        let (ctx, _event_rx) = test_context();
        let mut view = Artists::default();
        view.artists = vec![Artist {
            id: "a7".to_string(),
            name: "Aurora".to_string(),
            genres: vec![],
            track_count: 3,
        }];
        view.is_loading = false;
        view.list_state.select(Some(0));

        let key = KeyEvent::new(KeyCode::Enter, ratatui::crossterm::event::KeyModifiers::NONE);
        let action = view.handle_input(key, &AppState::default(), &ctx).await;
        match action {
            Some(Action::Navigate(PageId::ArtistDetail, params)) => {
                assert_eq!(params.get("artistId").unwrap(), "a7");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetched_artists_replace_loading_state() {
        let (ctx, _event_rx) = test_context();
        let mut view = Artists::default();
        view.on_event(
            &Event::ArtistsFetched(vec![Artist {
                id: "a1".to_string(),
                name: "Laurel Halo".to_string(),
                genres: vec!["ambient".to_string()],
                track_count: 12,
            }]),
            &ctx,
        )
        .await;

        let text = render_view(&mut view, &ctx, 60, 10);
        assert!(text.contains("Laurel Halo"));
        assert!(text.contains("ambient"));
    }
}
