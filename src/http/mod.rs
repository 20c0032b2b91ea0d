pub mod models;

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::config::Config;
use models::{Artist, Playlist, Track, User};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("not signed in")]
    Unauthorized,
}

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: ArcSwapOption<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: ArcSwapOption::from(config.token.clone().map(Arc::new)),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        self.token.store(token.map(Arc::new));
    }

    pub fn has_token(&self) -> bool {
        self.token.load().is_some()
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.get(format!("{}/{}", self.base_url, path));
        if let Some(token) = self.token.load_full() {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.get(path).send().await?;
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        Ok(resp.error_for_status()?.json().await?)
    }

    pub async fn fetch_me(&self) -> Result<User, ApiError> {
        self.fetch_json("me").await
    }

    pub async fn fetch_artists(&self) -> Result<Vec<Artist>, ApiError> {
        self.fetch_json("artists").await
    }

    pub async fn fetch_artist(&self, id: &str) -> Result<Artist, ApiError> {
        self.fetch_json(&format!("artists/{id}")).await
    }

    pub async fn fetch_artist_tracks(&self, id: &str) -> Result<Vec<Track>, ApiError> {
        self.fetch_json(&format!("artists/{id}/tracks")).await
    }

    pub async fn fetch_playlists(&self) -> Result<Vec<Playlist>, ApiError> {
        self.fetch_json("playlists").await
    }

    /// Returns the playlist with its tracks populated.
    pub async fn fetch_playlist(&self, id: &str) -> Result<Playlist, ApiError> {
        self.fetch_json(&format!("playlists/{id}")).await
    }

    pub async fn fetch_liked_tracks(&self) -> Result<Vec<Track>, ApiError> {
        self.fetch_json("me/likes/tracks").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&Config {
            api_url: server.uri(),
            token: None,
        })
    }

    #[tokio::test]
    async fn test_fetch_me_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("authorization", "Bearer sekrit"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "u1", "username": "ada"})),
            )
            .mount(&server)
            .await;

        let api = client_for(&server);
        api.set_token(Some("sekrit".to_string()));

        let user = api.fetch_me().await.unwrap();
        assert_eq!(user.username, "ada");
        assert_eq!(user.email, None);
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_dedicated_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let api = client_for(&server);
        assert!(matches!(api.fetch_me().await, Err(ApiError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_fetch_playlist_includes_tracks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlists/p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "p1",
                "title": "Night Drive",
                "track_count": 1,
                "tracks": [{"id": "t1", "title": "Midnight", "artist": "Aurora"}]
            })))
            .mount(&server)
            .await;

        let api = client_for(&server);
        let playlist = api.fetch_playlist("p1").await.unwrap();
        assert_eq!(playlist.tracks.len(), 1);
        assert_eq!(playlist.tracks[0].duration_secs, 0);
    }
}
