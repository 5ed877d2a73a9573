mod id;
mod master;
mod offer;
mod task;

pub use self::{
    id::{ExecutorId, FrameworkId, OfferId, SlaveId, TaskId},
    master::MasterInfo,
    offer::{Offer, Resource, ResourceValue, ValueRange},
    task::{TaskState, TaskStatus},
};
