use std::net::Shutdown;
use log::debug;
use crate::tracker::structs::connection_state::ConnectionState;

impl ConnectionState {
    /// Closes the socket, if any. Safe to call repeatedly.
    pub(crate) fn shutdown(&mut self) {
        if let Some(socket) = self.socket.take() {
            let _ = socket.get_ref().shutdown(Shutdown::Both);
            if let Some(host) = self.bound_host.take() {
                debug!("[Tracker] closed connection to {}", host);
            }
        }
        self.bound_host = None;
    }

    pub(crate) fn record_error(&mut self, tag: &str, message: &str) {
        self.last_error = Some(tag.to_string());
        self.last_error_message = Some(message.to_string());
    }
}
