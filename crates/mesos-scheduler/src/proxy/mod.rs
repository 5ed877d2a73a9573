use crate::{
    core::{ExecutorId, FrameworkId, MasterInfo, Offer, OfferId, SlaveId, TaskStatus},
    ContractViolation, Event, MessageDispatcher, MessageSender, Scheduler,
};

/// Reacts to callbacks from the scheduler driver
///
/// Every callback is sent as an [`Event`] to the recipient that
/// has been injected on construction. The proxy itself is stateless
/// and never waits for the recipient, so the recipient only ever
/// sees a serialized stream of events regardless of how many driver
/// threads are involved.
///
/// Events that are sent from the same thread arrive in the same
/// order. Events sent concurrently from different threads arrive
/// in unspecified order.
///
/// `framework_message` and `executor_lost` are never expected and
/// unwind with a [`ContractViolation`].
#[derive(Debug, Clone)]
pub struct SchedulerProxy<D = MessageSender<Event>> {
    recipient: D,
}

impl<D> SchedulerProxy<D> {
    #[must_use]
    pub const fn new(recipient: D) -> Self {
        Self { recipient }
    }

    #[must_use]
    pub const fn recipient(&self) -> &D {
        &self.recipient
    }
}

impl<D> SchedulerProxy<D>
where
    D: MessageDispatcher<Event>,
{
    fn forward(&self, event: Event) {
        log::trace!("Forwarding {} event", event.name());
        self.recipient.dispatch_message(event);
    }
}

impl<D> Scheduler for SchedulerProxy<D>
where
    D: MessageDispatcher<Event> + Send + Sync,
{
    fn registered(&self, framework_id: FrameworkId, master_info: MasterInfo) {
        self.forward(Event::Registered {
            framework_id,
            master_info,
        });
    }

    fn reregistered(&self, master_info: MasterInfo) {
        self.forward(Event::ReRegistered { master_info });
    }

    fn disconnected(&self) {
        self.forward(Event::Disconnected);
    }

    fn resource_offers(&self, offers: Vec<Offer>) {
        self.forward(Event::ResourceOffers { offers });
    }

    fn offer_rescinded(&self, offer_id: OfferId) {
        self.forward(Event::OfferRescinded { offer_id });
    }

    fn status_update(&self, status: TaskStatus) {
        self.forward(Event::StatusUpdate { status });
    }

    fn framework_message(&self, _executor_id: ExecutorId, _slave_id: SlaveId, _data: Vec<u8>) {
        ContractViolation::FrameworkMessage.raise();
    }

    fn slave_lost(&self, slave_id: SlaveId) {
        self.forward(Event::SlaveLost { slave_id });
    }

    fn executor_lost(&self, _executor_id: ExecutorId, _slave_id: SlaveId, _status: i32) {
        ContractViolation::ExecutorLost.raise();
    }

    fn error(&self, message: String) {
        self.forward(Event::Error { message });
    }
}

#[cfg(test)]
mod tests;
