/// Type alias for Result with anyhow::Error as the error type.
/// Every layer propagates through this alias; typed failures are `GraphError` values
/// carried inside the anyhow::Error.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
