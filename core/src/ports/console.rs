//! Console output port (interface).

/// Port for the human-readable step log.
///
/// Each stub operation writes exactly one line here. This is the only
/// observable artifact of a cascade.
pub trait Console: Send + Sync {
    /// Write one line.
    fn line(&self, message: &str);
}
