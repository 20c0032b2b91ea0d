use std::sync::Arc;
use std::time::Duration;

use flume::{Receiver, Sender};
use tracing::info;

use crate::audio::AudioHandle;
use crate::auth::{self, AuthService};
use crate::config::Config;
use crate::event::events::Event;
use crate::http::ApiClient;
use crate::ui::components::toast::Toaster;
use crate::ui::context::AppContext;
use crate::ui::handler::EventHandler;
use crate::ui::layout::AppLayout;
use crate::ui::nav::{NavigationState, Navigator};
use crate::ui::router;
use crate::ui::state::AppState;
use crate::ui::traits::View;
use crate::ui::tui::Tui;
use crate::util::task::TaskManager;

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub ctx: AppContext,
    pub state: AppState,
    pub navigator: Navigator,
    pub view: Box<dyn View>,
    pub toaster: Toaster,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
    /// The navigation state the current view was built from.
    mounted: NavigationState,
    /// Last navigation generation applied to the shell.
    seen_generation: u64,
}

impl App {
    pub async fn new() -> color_eyre::Result<Self> {
        Self::with_config(Config::from_env()).await
    }

    pub async fn with_config(config: Config) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let api = Arc::new(ApiClient::new(&config));
        let auth = Arc::new(AuthService::new());
        let navigator = Navigator::new();
        let ctx = AppContext {
            api: api.clone(),
            auth: auth.clone(),
            audio: AudioHandle::new(),
            nav: navigator.handle(),
            event_tx: event_tx.clone(),
        };

        let mut task_manager = TaskManager::new();
        task_manager.spawn(
            "resolve_session",
            auth::resolve_session(auth, api, config.token, event_tx.clone()),
        );

        let mounted = navigator.state().clone();
        let mut view = router::resolve(mounted.page, &mounted.params);
        view.on_mount(&ctx).await;

        Ok(Self {
            event_rx,
            event_tx,
            ctx,
            state: AppState::default(),
            navigator,
            view,
            toaster: Toaster::default(),
            task_manager,
            has_focus: true,
            should_quit: false,
            mounted,
            seen_generation: 0,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        let audio = self.ctx.audio.clone();
        self.task_manager.spawn("playback_progress", async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            loop {
                interval.tick().await;
                audio.advance(1);
            }
        });

        while !self.should_quit {
            self.navigator.drain();
            self.apply_navigation().await;
            self.toaster.tick();

            if self.has_focus {
                tui.draw(|f| {
                    let area = f.area();
                    AppLayout::new(self).render(f, area);
                })?;
            }

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    /// Applies the outcome of any `navigate` calls since the last frame.
    /// The scroll reset fires once per call; the view is rebuilt only when
    /// the target actually changed, so re-navigating to the current page
    /// keeps the view instance and whatever it has fetched.
    pub async fn apply_navigation(&mut self) {
        if self.navigator.generation() == self.seen_generation {
            return;
        }
        self.seen_generation = self.navigator.generation();
        self.state.ui.content_scroll = 0;

        let target = self.navigator.state().clone();
        if target == self.mounted {
            return;
        }

        info!(page = %target.page, "route changed");
        let mut view = router::resolve(target.page, &target.params);
        view.on_mount(&self.ctx).await;
        self.view = view;
        self.mounted = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::models::Track;
    use crate::ui::nav::{NavRequest, PageId, PageParams};

    async fn test_app() -> App {
        App::with_config(Config {
            api_url: "http://127.0.0.1:9".to_string(),
            token: Some("test-token".to_string()),
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_navigation_rebuilds_view_on_target_change() {
        let mut app = test_app().await;
        assert_eq!(app.view.title(), "Home");

        app.navigator.navigate(PageId::Artists, PageParams::new());
        app.apply_navigation().await;
        assert_eq!(app.view.title(), "Artists");
    }

    #[tokio::test]
    async fn test_same_target_navigation_resets_scroll_but_keeps_the_view() {
        let mut app = test_app().await;
        app.navigator.navigate(PageId::Artists, PageParams::new());
        app.apply_navigation().await;

        let before = app.view.as_ref() as *const dyn View as *const ();
        app.state.ui.content_scroll = 12;

        app.navigator.navigate(PageId::Artists, PageParams::new());
        app.apply_navigation().await;

        assert_eq!(app.state.ui.content_scroll, 0);
        let after = app.view.as_ref() as *const dyn View as *const ();
        assert_eq!(before, after, "view instance was rebuilt for an identical target");
    }

    #[tokio::test]
    async fn test_playback_is_untouched_by_navigation() {
        let app = {
            let mut app = test_app().await;
            app.ctx.audio.play(Track {
                id: "t1".to_string(),
                title: "Midnight".to_string(),
                artist: "Aurora".to_string(),
                duration_secs: 180,
                liked: false,
            });
            app
        };
        let before = app.ctx.audio.snapshot();

        let mut app = app;
        for page in [PageId::Artists, PageId::Playlists, PageId::Home, PageId::Login] {
            app.navigator.navigate(page, PageParams::new());
            app.apply_navigation().await;
        }

        let after = app.ctx.audio.snapshot();
        assert!(Arc::ptr_eq(&before, &after), "navigation disturbed playback state");
    }

    #[tokio::test]
    async fn test_channel_request_is_applied_once() {
        let mut app = test_app().await;
        app.ctx.nav.request(NavRequest::to(PageId::Upload));

        assert!(app.navigator.drain());
        app.apply_navigation().await;
        assert_eq!(app.navigator.state().page, PageId::Upload);

        let generation = app.navigator.generation();
        assert!(!app.navigator.drain());
        assert_eq!(app.navigator.generation(), generation);
    }
}
