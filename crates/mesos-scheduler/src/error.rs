use thiserror::Error;

/// A callback fired that must never occur in this deployment
///
/// The framework does not use executor-level messaging. Receiving
/// one of these callbacks means that the driver or the cluster is
/// misconfigured. This is not a recoverable error and it is never
/// returned as a `Result`: the callback unwinds with this value as
/// its panic payload.
#[derive(Debug, Clone, Copy, Error, Eq, PartialEq)]
pub enum ContractViolation {
    #[error("frameworkMessage is unexpected")]
    FrameworkMessage,

    #[error("executorLost is unexpected")]
    ExecutorLost,
}

impl ContractViolation {
    /// Log the violation and unwind the calling thread
    pub(crate) fn raise(self) -> ! {
        log::error!("Scheduler contract violated: {self}");
        std::panic::panic_any(self)
    }
}
