use std::{future::Future, pin::Pin};

use crate::{message_channel, Event, MessageSender};

pub type MessageLoop = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Consumer of the events in a recipient's inbox
///
/// Events are handled one at a time. The handler is never invoked
/// concurrently.
pub trait EventHandler: Send + 'static {
    fn handle_event(&mut self, event: Event);
}

impl<F> EventHandler for F
where
    F: FnMut(Event) + Send + 'static,
{
    fn handle_event(&mut self, event: Event) {
        self(event);
    }
}

/// Create an inbox that feeds the given handler
///
/// The returned loop must be spawned or awaited by the caller. It
/// terminates after all senders, i.e. all clones of the returned
/// sender, have been dropped and the inbox has been drained. Dropping
/// the loop closes the inbox and all subsequently sent events are
/// discarded.
pub fn create_message_loop<H>(mut handler: H) -> (MessageLoop, MessageSender<Event>)
where
    H: EventHandler,
{
    let (message_tx, mut message_rx) = message_channel::<Event>();
    let message_loop = async move {
        log::info!("Starting message loop");
        while let Some(event) = message_rx.recv().await {
            log::trace!("Received {} event", event.name());
            handler.handle_event(event);
        }
        log::info!("Message loop terminated");
    };
    (Box::pin(message_loop), message_tx)
}
