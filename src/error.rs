use thiserror::Error;

/// Error types for the stepmeans engine.
///
/// Every failure is synchronous and local to the call that raised it, and a
/// failed call performs no mutation: the store is never left partially
/// updated.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A caller-supplied parameter is out of range: k < 1, or k larger than
    /// the current point count at initialization time.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The operation's precondition is unmet: stepping without centroids or
    /// after convergence, or reverting with an empty history. The call is a
    /// disallowed no-op, safe to re-invoke once the precondition holds.
    #[error("Not ready: {0}")]
    NotReady(String),
}
