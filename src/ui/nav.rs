use std::collections::HashMap;
use std::fmt;

use flume::{Receiver, Sender};
use tracing::debug;

/// The closed set of navigable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Home,
    Artists,
    ArtistDetail,
    Playlists,
    PlaylistDetail,
    Dashboard,
    Upload,
    LikedSongs,
    Login,
    Register,
}

pub type PageParams = HashMap<String, String>;

impl PageId {
    pub const ALL: [PageId; 10] = [
        PageId::Home,
        PageId::Artists,
        PageId::ArtistDetail,
        PageId::Playlists,
        PageId::PlaylistDetail,
        PageId::Dashboard,
        PageId::Upload,
        PageId::LikedSongs,
        PageId::Login,
        PageId::Register,
    ];

    /// Parses a route name. Unknown names deliberately land on `Home` so a
    /// stale deep link or a mistyped route still renders something.
    pub fn parse(s: &str) -> Self {
        match s {
            "home" => Self::Home,
            "artists" => Self::Artists,
            "artist-detail" => Self::ArtistDetail,
            "playlists" => Self::Playlists,
            "playlist-detail" => Self::PlaylistDetail,
            "dashboard" => Self::Dashboard,
            "upload" => Self::Upload,
            "liked-songs" => Self::LikedSongs,
            "login" => Self::Login,
            "register" => Self::Register,
            _ => Self::Home,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Artists => "artists",
            Self::ArtistDetail => "artist-detail",
            Self::Playlists => "playlists",
            Self::PlaylistDetail => "playlist-detail",
            Self::Dashboard => "dashboard",
            Self::Upload => "upload",
            Self::LikedSongs => "liked-songs",
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    /// Pages that require a signed-in user to show their real content.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Playlists
                | Self::PlaylistDetail
                | Self::Dashboard
                | Self::Upload
                | Self::LikedSongs
        )
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What is currently visible: the page and its flat string params. Params
/// are route-specific (`artistId`, `playlistId`) and never validated here;
/// views must tolerate missing or unknown keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    pub page: PageId,
    pub params: PageParams,
}

/// One navigation request on the channel. A request without a page is
/// accepted and lands on the default route once applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavRequest {
    pub page: Option<PageId>,
    pub params: PageParams,
}

impl NavRequest {
    pub fn to(page: PageId) -> Self {
        Self {
            page: Some(page),
            params: PageParams::new(),
        }
    }

    pub fn with_params(page: PageId, params: PageParams) -> Self {
        Self {
            page: Some(page),
            params,
        }
    }
}

/// Publish half of the navigation channel. Cheap to clone; handed to the
/// collaborators that need to trigger navigation without a reference to the
/// [`Navigator`] itself.
#[derive(Clone)]
pub struct NavHandle {
    tx: Sender<NavRequest>,
}

impl NavHandle {
    pub fn navigate(&self, page: PageId, params: PageParams) {
        self.request(NavRequest::with_params(page, params));
    }

    pub fn request(&self, req: NavRequest) {
        let _ = self.tx.send(req);
    }
}

/// Single writer of [`NavigationState`] and the only subscriber of the
/// request channel, so a published request is consumed exactly once no
/// matter how often the shell re-renders.
pub struct Navigator {
    state: NavigationState,
    requests: Receiver<NavRequest>,
    handle: NavHandle,
    generation: u64,
}

impl Navigator {
    pub fn new() -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            state: NavigationState::default(),
            requests: rx,
            handle: NavHandle { tx },
            generation: 0,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn handle(&self) -> NavHandle {
        self.handle.clone()
    }

    /// Bumps on every `navigate` call, whether or not the target changed.
    /// The shell uses this as the scroll-reset signal.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn navigate(&mut self, page: PageId, params: PageParams) {
        debug!(%page, "navigate");
        self.state = NavigationState { page, params };
        self.generation += 1;
    }

    /// Applies every pending request in publish order; last write wins.
    /// Returns whether anything was applied.
    pub fn drain(&mut self) -> bool {
        let mut applied = false;
        while let Ok(req) = self.requests.try_recv() {
            self.navigate(req.page.unwrap_or_default(), req.params);
            applied = true;
        }
        applied
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(key: &str, value: &str) -> PageParams {
        PageParams::from([(key.to_string(), value.to_string())])
    }

    #[test]
    fn test_unknown_route_names_parse_to_home() {
        assert_eq!(PageId::parse("liked-songs"), PageId::LikedSongs);
        assert_eq!(PageId::parse("settings"), PageId::Home);
        assert_eq!(PageId::parse(""), PageId::Home);
        for page in PageId::ALL {
            assert_eq!(PageId::parse(page.as_str()), page);
        }
    }

    #[test]
    fn test_last_navigate_wins() {
        let mut nav = Navigator::new();
        nav.navigate(PageId::Artists, PageParams::new());
        nav.navigate(PageId::ArtistDetail, params("artistId", "42"));
        nav.navigate(PageId::Playlists, PageParams::new());

        assert_eq!(nav.state().page, PageId::Playlists);
        assert!(nav.state().params.is_empty());
    }

    #[test]
    fn test_generation_bumps_even_when_target_is_unchanged() {
        let mut nav = Navigator::new();
        nav.navigate(PageId::Home, PageParams::new());
        nav.navigate(PageId::Home, PageParams::new());
        assert_eq!(nav.generation(), 2);
        assert_eq!(nav.state().page, PageId::Home);
    }

    #[test]
    fn test_channel_requests_apply_in_publish_order() {
        let mut nav = Navigator::new();
        let handle = nav.handle();
        handle.navigate(PageId::Artists, PageParams::new());
        handle.navigate(PageId::ArtistDetail, params("artistId", "42"));

        assert!(nav.drain());
        assert_eq!(nav.state().page, PageId::ArtistDetail);
        assert_eq!(nav.state().params.get("artistId").unwrap(), "42");
        assert_eq!(nav.generation(), 2);
    }

    #[test]
    fn test_request_without_page_lands_on_home() {
        let mut nav = Navigator::new();
        nav.navigate(PageId::Dashboard, PageParams::new());
        nav.handle().request(NavRequest::default());

        assert!(nav.drain());
        assert_eq!(nav.state().page, PageId::Home);
    }

    #[test]
    fn test_each_request_is_consumed_exactly_once() {
        let mut nav = Navigator::new();
        nav.handle().request(NavRequest::to(PageId::Upload));

        assert!(nav.drain());
        let generation = nav.generation();
        // Repeated drains must not re-deliver.
        assert!(!nav.drain());
        assert!(!nav.drain());
        assert_eq!(nav.generation(), generation);
    }
}
