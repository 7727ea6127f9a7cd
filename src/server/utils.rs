//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::RbacError;
use std::io::ErrorKind;

impl HttpServer {
    /// Turn a bind failure into an actionable configuration error
    pub(crate) fn format_bind_error(error: std::io::Error, bind_addr: &str, port: u16) -> RbacError {
        let hint = match error.kind() {
            ErrorKind::AddrInUse => format!(
                "port {} is already in use; stop the other process or set {}={}",
                port,
                crate::config::ENV_PORT,
                port.saturating_add(1)
            ),
            ErrorKind::PermissionDenied => format!(
                "permission denied for port {}; ports below 1024 need elevated privileges",
                port
            ),
            _ => error.to_string(),
        };

        RbacError::config(format!("Failed to bind to {}: {}", bind_addr, hint))
    }
}
