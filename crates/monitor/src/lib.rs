pub mod api;
pub mod config;
pub mod scan;

/// Shared state behind the HTTP surface: the chain-facing collaborators
/// and the alert sink. Nothing here mutates between requests; every
/// `/check` re-derives everything from the current block.
pub struct AppState<C, A> {
    pub chain: C,
    pub alerts: A,
}
