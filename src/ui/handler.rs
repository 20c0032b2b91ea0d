use ratatui::crossterm::event::KeyEvent;
use tracing::warn;

use crate::event::events::Event;
use crate::ui::app::App;
use crate::ui::components::navbar::{NAV_TABS, highlight_tab};
use crate::ui::components::toast::ToastKind;
use crate::ui::input::InputHandler;
use crate::ui::nav::PageParams;
use crate::ui::traits::Action;
use crate::ui::tui::{TerminalEvent, Tui};

const SCROLL_STEP: u16 = 4;

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_terminal_event(app, evt, tui).await?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_app_event(app, evt).await;
        }

        Ok(())
    }

    async fn handle_terminal_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Tick | TerminalEvent::Resize(_, _) => {}
        }
        Ok(())
    }

    /// The active view gets the key first; global bindings only see what it
    /// declined.
    async fn handle_key_event(app: &mut App, key: KeyEvent) {
        if let Some(action) = app.view.handle_input(key, &app.state, &app.ctx).await {
            Self::dispatch_action(app, action);
            return;
        }

        if let Some(action) = InputHandler::handle_key(key) {
            Self::dispatch_action(app, action);
        }
    }

    fn dispatch_action(app: &mut App, action: Action) {
        match action {
            Action::Quit => app.should_quit = true,
            Action::Navigate(page, params) => app.navigator.navigate(page, params),
            Action::NavTab(i) => {
                if let Some((page, _)) = NAV_TABS.get(i) {
                    app.navigator.navigate(*page, PageParams::new());
                }
            }
            Action::CycleTab(step) => {
                let current = highlight_tab(app.navigator.state().page);
                let next = match NAV_TABS.iter().position(|(p, _)| *p == current) {
                    Some(i) => (i as isize + step).rem_euclid(NAV_TABS.len() as isize) as usize,
                    None => 0,
                };
                app.navigator.navigate(NAV_TABS[next].0, PageParams::new());
            }
            Action::PlayPause => app.ctx.audio.play_pause(),
            Action::VolumeUp => app.ctx.audio.volume_up(),
            Action::VolumeDown => app.ctx.audio.volume_down(),
            Action::ScrollUp => {
                app.state.ui.content_scroll =
                    app.state.ui.content_scroll.saturating_sub(SCROLL_STEP);
            }
            Action::ScrollDown => {
                app.state.ui.content_scroll =
                    app.state.ui.content_scroll.saturating_add(SCROLL_STEP);
            }
            Action::SignOut => {
                if app.ctx.auth.session().is_authenticated() {
                    app.ctx.auth.sign_out(&app.ctx.api);
                    app.toaster.push("Signed out", ToastKind::Info);
                }
            }
        }
    }

    async fn handle_app_event(app: &mut App, evt: Event) {
        app.view.on_event(&evt, &app.ctx).await;

        match evt {
            Event::Toast(message, kind) => app.toaster.push(message, kind),
            Event::FetchError(e) => {
                warn!("fetch failed: {e}");
                app.toaster.push(e, ToastKind::Error);
            }
            Event::SessionResolved(Some(user)) => {
                app.toaster
                    .push(format!("Signed in as {}", user.username), ToastKind::Success);
            }
            _ => {}
        }
    }
}
