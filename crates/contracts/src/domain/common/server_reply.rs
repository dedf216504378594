/// Common view over the JSON envelopes returned by the server.
///
/// The server reports failures in two shapes: `{"error": "..."}` and
/// `{"status": "error", "message": "..."}`. Both surface through
/// [`ServerReply::server_error`].
pub trait ServerReply {
    fn error_field(&self) -> Option<&str>;
    fn status_field(&self) -> Option<&str>;
    fn message_field(&self) -> Option<&str>;

    /// Server-reported application error, if any.
    fn server_error(&self) -> Option<String> {
        if let Some(err) = self.error_field() {
            return Some(err.to_string());
        }
        if self.status_field() == Some("error") {
            return Some(
                self.message_field()
                    .unwrap_or("Unknown server error")
                    .to_string(),
            );
        }
        None
    }
}
