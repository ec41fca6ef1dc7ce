//! Request context
//!
//! A token threaded through every pipeline call. It currently carries no
//! deadline or cancellation state and no operation inspects it; it exists so
//! timeouts can be added later without changing any trait signatures.

/// Per-request context passed from the database down to the engine
#[derive(Debug, Clone, Default)]
pub struct Context {
    _private: (),
}

impl Context {
    /// A context with no deadline and no cancellation
    pub fn background() -> Self {
        Self::default()
    }
}
