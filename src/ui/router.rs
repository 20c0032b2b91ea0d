use crate::ui::guard::Protected;
use crate::ui::nav::{PageId, PageParams};
use crate::ui::traits::View;
use crate::ui::views::{
    ArtistDetail, Artists, Dashboard, Home, LikedSongs, Login, PlaylistDetail, Playlists,
    Register, Upload,
};

/// Maps a route to its view. Pure and total: every page resolves, detail
/// pages get their params injected, and the protected pages come back
/// wrapped in the auth gate. The string boundary's home fallback lives in
/// [`PageId::parse`]; by the time a page reaches this function it is a
/// member of the closed set.
pub fn resolve(page: PageId, params: &PageParams) -> Box<dyn View> {
    match page {
        PageId::Home => Box::new(Home),
        PageId::Artists => Box::new(Artists::default()),
        PageId::ArtistDetail => Box::new(ArtistDetail::new(params.get("artistId").cloned())),
        PageId::Playlists => Protected::wrap(Playlists::default()),
        PageId::PlaylistDetail => {
            Protected::wrap(PlaylistDetail::new(params.get("playlistId").cloned()))
        }
        PageId::Dashboard => Protected::wrap(Dashboard),
        PageId::Upload => Protected::wrap(Upload),
        PageId::LikedSongs => Protected::wrap(LikedSongs::default()),
        PageId::Login => Box::new(Login),
        PageId::Register => Box::new(Register),
    }
}
