use crate::http::models::{Artist, Playlist, Track, User};
use crate::ui::components::toast::ToastKind;

/// Application events carried on the shared bus. Views receive every event
/// and pick out the ones they care about.
#[derive(Debug, Clone)]
pub enum Event {
    // Shell
    SessionResolved(Option<User>),
    Toast(String, ToastKind),

    // Data
    ArtistsFetched(Vec<Artist>),
    ArtistFetched(Artist),
    ArtistTracksFetched(Vec<Track>),
    PlaylistsFetched(Vec<Playlist>),
    PlaylistFetched(Playlist),
    LikedTracksFetched(Vec<Track>),
    FetchError(String),
}
