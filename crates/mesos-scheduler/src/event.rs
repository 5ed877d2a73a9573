use crate::core::{FrameworkId, MasterInfo, Offer, OfferId, SlaveId, TaskStatus};

/// An occurrence reported by the scheduler driver
///
/// Each variant carries exactly the arguments of the corresponding
/// [`Scheduler`](crate::Scheduler) callback.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Registered {
        framework_id: FrameworkId,
        master_info: MasterInfo,
    },
    ReRegistered {
        master_info: MasterInfo,
    },
    Disconnected,
    ResourceOffers {
        /// In the order received from the driver
        offers: Vec<Offer>,
    },
    OfferRescinded {
        offer_id: OfferId,
    },
    StatusUpdate {
        status: TaskStatus,
    },
    SlaveLost {
        slave_id: SlaveId,
    },
    Error {
        message: String,
    },
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Registered { .. } => "Registered",
            Self::ReRegistered { .. } => "ReRegistered",
            Self::Disconnected => "Disconnected",
            Self::ResourceOffers { .. } => "ResourceOffers",
            Self::OfferRescinded { .. } => "OfferRescinded",
            Self::StatusUpdate { .. } => "StatusUpdate",
            Self::SlaveLost { .. } => "SlaveLost",
            Self::Error { .. } => "Error",
        }
    }
}
