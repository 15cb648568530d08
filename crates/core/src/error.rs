#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A fixture file could not be read or is not valid JSON. Indicates a
    /// deployment problem, never a generation edge case.
    #[error("Fixture unavailable: {file}: {reason}")]
    FixtureUnavailable { file: String, reason: String },
}
