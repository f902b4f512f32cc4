//! Host server errors.

use std::net::SocketAddr;

// =============================================================================
// ERROR
// =============================================================================

/// Errors that stop the host server from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `PORT` is not a valid TCP port.
    #[error("invalid PORT: {value:?}")]
    InvalidPort { value: String },

    /// `BIND_ADDR` is not an IP address.
    #[error("invalid BIND_ADDR: {value:?}")]
    InvalidBindAddr { value: String },

    /// Leptos site options could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// The listening socket could not be bound.
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server loop exited with an I/O error.
    #[error("server failed")]
    Serve(#[source] std::io::Error),
}
