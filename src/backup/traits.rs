//! Common traits for backup-and-recovery API responses

/// Trait for list envelopes returned by the API
///
/// Implement this for any `XResponse` struct to use it with
/// `BackupClient::list()`. A missing list field yields an empty list.
pub trait ListResponse<T> {
    /// Consume self and return the listed items
    fn into_items(self) -> Vec<T>;
}
