pub mod artist_detail;
pub mod artists;
pub mod dashboard;
pub mod home;
pub mod liked_songs;
pub mod login;
pub mod playlist_detail;
pub mod playlists;
pub mod register;
pub mod upload;

pub use artist_detail::ArtistDetail;
pub use artists::Artists;
pub use dashboard::Dashboard;
pub use home::Home;
pub use liked_songs::LikedSongs;
pub use login::Login;
pub use playlist_detail::PlaylistDetail;
pub use playlists::Playlists;
pub use register::Register;
pub use upload::Upload;
