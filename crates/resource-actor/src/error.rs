//! # Runtime Errors
//!
//! Errors raised by the actor runtime itself, as opposed to the entity errors
//! produced inside lifecycle hooks (those travel wrapped in [`FrameworkError::EntityError`]).

/// Errors that can occur within the actor runtime.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's receiver is gone; no request can be delivered.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor accepted the request but dropped the responder without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps an entity hook error.
    pub fn entity<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FrameworkError::EntityError(Box::new(error))
    }
}
