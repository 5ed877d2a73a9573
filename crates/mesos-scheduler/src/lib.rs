//! Bridge between the callbacks of a Mesos scheduler driver and a
//! single, serialized message inbox.
//!
//! The driver invokes [`Scheduler`] callbacks from its own threads at
//! arbitrary times. [`SchedulerProxy`] turns each of them into an
//! immutable [`Event`] and sends it into the inbox of the recipient
//! without ever blocking the calling thread.

#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::explicit_deref_methods)]
#![warn(clippy::explicit_into_iter_loop)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::must_use_candidate)]
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

use std::{any, sync::Arc};

use tokio::sync::mpsc;

pub use flink_mesos_core as core;

mod error;
mod event;
mod message_loop;
mod proxy;
mod scheduler;

pub use self::{
    error::ContractViolation,
    event::Event,
    message_loop::{create_message_loop, EventHandler, MessageLoop},
    proxy::SchedulerProxy,
    scheduler::Scheduler,
};

// ------ -------
//   Messages
// ------ -------

pub type MessageSender<T> = mpsc::UnboundedSender<T>;
pub type MessageReceiver<T> = mpsc::UnboundedReceiver<T>;

/// Create the inbox of a recipient
///
/// The channel is unbounded, i.e. sending never blocks and the
/// recipient's queue is the only buffer.
#[must_use]
pub fn message_channel<T>() -> (MessageSender<T>, MessageReceiver<T>) {
    mpsc::unbounded_channel()
}

/// Fire-and-forget delivery of messages into an inbox
///
/// Implementations must neither block the caller nor report
/// delivery failures. A message that could not be delivered
/// is dropped.
pub trait MessageDispatcher<M> {
    fn dispatch_message(&self, message: M);
}

impl<M> MessageDispatcher<M> for MessageSender<M> {
    fn dispatch_message(&self, message: M) {
        if self.send(message).is_err() {
            // Expected after the recipient has terminated and
            // closed its inbox. The payload is not formatted.
            log::debug!(
                "Recipient is unreachable, dropping message of type {}",
                any::type_name::<M>()
            );
        }
    }
}

impl<M, D> MessageDispatcher<M> for Arc<D>
where
    D: MessageDispatcher<M> + ?Sized,
{
    fn dispatch_message(&self, message: M) {
        <D as MessageDispatcher<M>>::dispatch_message(self, message);
    }
}

#[cfg(test)]
mod tests;
