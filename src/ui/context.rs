use std::sync::Arc;

use flume::Sender;

use crate::audio::AudioHandle;
use crate::auth::AuthService;
use crate::event::events::Event;
use crate::http::ApiClient;
use crate::ui::nav::NavHandle;

/// Capabilities handed to every view: the API client, the read-only auth
/// session, the playback facade, the navigation publish handle and the
/// event bus sender.
pub struct AppContext {
    pub api: Arc<ApiClient>,
    pub auth: Arc<AuthService>,
    pub audio: AudioHandle,
    pub nav: NavHandle,
    pub event_tx: Sender<Event>,
}
