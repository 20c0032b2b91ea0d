use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect, style::Style};

use crate::event::events::Event;
use crate::ui::components::spinner::Spinner;
use crate::ui::context::AppContext;
use crate::ui::state::AppState;
use crate::ui::traits::{Action, View};
use crate::ui::views::Login;
use crate::util::colors;

/// Gates a view behind the auth session. While the session resolves it shows
/// a neutral placeholder; signed out it shows the login view *in place* —
/// the route and its params are left untouched so they survive sign-in, at
/// the cost of the current page not reading "login" while login is shown.
pub struct Protected {
    inner: Box<dyn View>,
    login: Login,
    inner_mounted: bool,
}

impl Protected {
    pub fn wrap(inner: impl View + 'static) -> Box<dyn View> {
        Box::new(Self {
            inner: Box::new(inner),
            login: Login::default(),
            inner_mounted: false,
        })
    }
}

#[async_trait]
impl View for Protected {
    fn title(&self) -> &str {
        self.inner.title()
    }

    async fn on_mount(&mut self, ctx: &AppContext) {
        // The inner view only starts fetching once a user is present; if the
        // session resolves later, on_event finishes the mount.
        if ctx.auth.session().is_authenticated() {
            self.inner.on_mount(ctx).await;
            self.inner_mounted = true;
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        let session = ctx.auth.session();
        if session.loading {
            let spinner = Spinner::new("Checking session...")
                .with_style(Style::default().fg(colors::PRIMARY));
            f.render_widget(spinner, area);
        } else if !session.is_authenticated() {
            self.login.render(f, area, state, ctx);
        } else {
            self.inner.render(f, area, state, ctx);
        }
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        let session = ctx.auth.session();
        if session.loading {
            None
        } else if !session.is_authenticated() {
            self.login.handle_input(key, state, ctx).await
        } else {
            self.inner.handle_input(key, state, ctx).await
        }
    }

    async fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        if let Event::SessionResolved(Some(_)) = event
            && !self.inner_mounted
        {
            self.inner.on_mount(ctx).await;
            self.inner_mounted = true;
        }
        self.inner.on_event(event, ctx).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthSession;
    use crate::http::models::User;
    use crate::test_support::{render_view, test_context};
    use crate::ui::views::Dashboard;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            username: "ada".to_string(),
            email: None,
        }
    }

    #[test]
    fn test_loading_session_renders_placeholder() {
        let (ctx, _event_rx) = test_context();
        ctx.auth.set(AuthSession::resolving());
        let mut view = Protected::wrap(Dashboard);
        let text = render_view(view.as_mut(), &ctx, 70, 12);
        assert!(text.contains("Checking session"));
        assert!(!text.contains("Signed in"));
        assert!(!text.contains("Sign in to mellow"));
    }

    #[test]
    fn test_signed_out_renders_login_in_place() {
        let (ctx, _event_rx) = test_context();
        ctx.auth.set(AuthSession::signed_out());
        let mut view = Protected::wrap(Dashboard);
        let text = render_view(view.as_mut(), &ctx, 70, 16);
        assert!(text.contains("Sign in to mellow"));
    }

    #[test]
    fn test_signed_in_renders_wrapped_view() {
        let (ctx, _event_rx) = test_context();
        ctx.auth.set(AuthSession::signed_in(user()));
        let mut view = Protected::wrap(Dashboard);
        let text = render_view(view.as_mut(), &ctx, 70, 12);
        assert!(text.contains("Signed in as ada"));
    }

    #[test]
    fn test_title_comes_from_the_wrapped_view() {
        let view = Protected::wrap(Dashboard);
        assert_eq!(view.title(), "Dashboard");
    }

    #[tokio::test]
    async fn test_inner_view_mounts_when_session_resolves() {
        let (ctx, _event_rx) = test_context();
        ctx.auth.set(AuthSession::signed_out());
        let mut view = Protected::wrap(Dashboard);
        view.on_mount(&ctx).await;

        ctx.auth.set(AuthSession::signed_in(user()));
        view.on_event(&Event::SessionResolved(Some(user())), &ctx).await;

        let text = render_view(view.as_mut(), &ctx, 70, 12);
        assert!(text.contains("Signed in as ada"));
    }
}
