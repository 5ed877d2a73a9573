use crate::core::{ExecutorId, FrameworkId, MasterInfo, Offer, OfferId, SlaveId, TaskStatus};

/// Callbacks invoked by the scheduler driver
///
/// The driver may invoke any callback from any of its threads,
/// including concurrently. Implementations must return quickly
/// and must not block.
pub trait Scheduler: Send + Sync {
    /// The framework has been registered with a master for the first time
    fn registered(&self, framework_id: FrameworkId, master_info: MasterInfo);

    /// The framework has been registered again after a master failover
    fn reregistered(&self, master_info: MasterInfo);

    fn disconnected(&self);

    fn resource_offers(&self, offers: Vec<Offer>);

    /// A previously received offer is no longer valid
    fn offer_rescinded(&self, offer_id: OfferId);

    fn status_update(&self, status: TaskStatus);

    /// Opaque message sent by an executor
    fn framework_message(&self, executor_id: ExecutorId, slave_id: SlaveId, data: Vec<u8>);

    fn slave_lost(&self, slave_id: SlaveId);

    fn executor_lost(&self, executor_id: ExecutorId, slave_id: SlaveId, status: i32);

    /// Unrecoverable error of the driver or the scheduler
    ///
    /// The driver is aborted after this callback returns.
    fn error(&self, message: String);
}
