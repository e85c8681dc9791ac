/// Numeric identity assigned by the server
pub type RecordId = i64;

/// Records that carry a server-assigned id once persisted
pub trait Identified {
    fn record_id(&self) -> Option<RecordId>;

    /// No id yet means the record goes out as a create (POST)
    fn is_new(&self) -> bool {
        self.record_id().is_none()
    }
}
