use std::sync::Arc;

use super::{message_channel, MessageDispatcher};

// Neither `Debug` nor `Clone`: payloads are never formatted when dropped
struct OpaqueMessage(Vec<u8>);

#[test]
fn dispatch_into_open_inbox() {
    let (message_tx, mut message_rx) = message_channel::<OpaqueMessage>();
    message_tx.dispatch_message(OpaqueMessage(vec![1, 2, 3]));
    let OpaqueMessage(payload) = message_rx.try_recv().expect("one message");
    assert_eq!(vec![1, 2, 3], payload);
}

#[test]
fn dispatch_into_dropped_inbox_discards_message() {
    let (message_tx, message_rx) = message_channel::<OpaqueMessage>();
    drop(message_rx);
    message_tx.dispatch_message(OpaqueMessage(vec![0; 1024]));
    assert!(message_tx.is_closed());
}

#[test]
fn dispatch_through_shared_sender() {
    let (message_tx, mut message_rx) = message_channel::<OpaqueMessage>();
    let shared = Arc::new(message_tx);
    shared.dispatch_message(OpaqueMessage(vec![7]));
    drop(shared);
    assert!(matches!(message_rx.try_recv(), Ok(OpaqueMessage(payload)) if payload == [7]));
    assert!(message_rx.try_recv().is_err());
}
