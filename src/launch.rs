//! Destination injected by the host platform at launch.
//!
//! Some hosts start the app with a destination in their launch payload
//! (an intent extra, a deep link, a command-line argument). Reading it may
//! be asynchronous. A missing or empty destination is logged and ignored.

use async_trait::async_trait;

use crate::Result;
use crate::session::{NavigationOutcome, NavigationSession};

/// Source of the launch-time destination.
#[async_trait]
pub trait LaunchParameters: Send + Sync {
    /// The destination name, if the host supplied one.
    async fn destination(&self) -> Result<Option<String>>;
}

/// Fixed launch parameters.
#[derive(Debug, Clone, Default)]
pub struct StaticLaunch {
    destination: Option<String>,
}

impl StaticLaunch {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: Some(destination.into()),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LaunchParameters for StaticLaunch {
    async fn destination(&self) -> Result<Option<String>> {
        Ok(self.destination.clone())
    }
}

/// Navigate from the session's default start to the launch destination.
///
/// Returns `None` when there was nothing to navigate to, including when the
/// host could not be read.
pub async fn apply_launch_destination<P>(
    session: &mut NavigationSession,
    params: &P,
) -> Option<Result<NavigationOutcome>>
where
    P: LaunchParameters + ?Sized,
{
    match params.destination().await {
        Ok(Some(destination)) if !destination.is_empty() => {
            tracing::info!(%destination, "destination from launch parameters");
            Some(session.receive_launch_destination(&destination))
        }
        Ok(_) => {
            tracing::warn!("destination not found in launch parameters");
            None
        }
        Err(err) => {
            tracing::error!("failed to read launch parameters: {err}");
            None
        }
    }
}
