//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

use crate::host::MapHost;

/// Frontend abstraction for UI layers.
///
/// A frontend supplies the two collaborators the map needs: a stream of
/// normalized [`InputEvent`](crate::InputEvent)s and a
/// [`Surface`](crate::Surface) to draw on. It drives the host by forwarding
/// events to [`MapHost::handle_event`] and calling [`MapHost::tick`] at its
/// frame rate.
///
/// Frontends do NOT own the host. They start it with their surface size,
/// and stop it when the user quits.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, host: &mut MapHost) -> Result<()>;
}
