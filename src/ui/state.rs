#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Vertical offset of the routed content region. Reset to the top on
    /// every navigation.
    pub content_scroll: u16,
}
