use std::{
    net::Ipv4Addr,
    panic::{self, AssertUnwindSafe},
    sync::{Arc, Mutex},
};

use tokio::sync::mpsc::error::TryRecvError;

use crate::{
    core::{MasterInfo, Offer, Resource, TaskState, TaskStatus},
    message_channel, ContractViolation, Event, MessageDispatcher, MessageReceiver, Scheduler,
};

use super::SchedulerProxy;

fn new_proxy() -> (SchedulerProxy, MessageReceiver<Event>) {
    let (message_tx, message_rx) = message_channel::<Event>();
    (SchedulerProxy::new(message_tx), message_rx)
}

fn master_info() -> MasterInfo {
    MasterInfo {
        hostname: Some("mesos-master".to_owned()),
        version: Some("1.11.0".to_owned()),
        ..MasterInfo::new("master-1", Ipv4Addr::new(10, 0, 0, 1), 5050)
    }
}

fn offer(id: &str) -> Offer {
    Offer {
        id: id.into(),
        framework_id: "fw-1".into(),
        slave_id: "agent-1".into(),
        hostname: "host-1".to_owned(),
        resources: vec![Resource::scalar("cpus", 1.0), Resource::scalar("mem", 512.0)],
    }
}

fn recv_single(message_rx: &mut MessageReceiver<Event>) -> Event {
    let event = message_rx.try_recv().expect("one event");
    assert_eq!(Err(TryRecvError::Empty), message_rx.try_recv());
    event
}

fn catch_contract_violation(callback: impl FnOnce()) -> Option<ContractViolation> {
    let payload = panic::catch_unwind(AssertUnwindSafe(callback)).err()?;
    payload.downcast_ref::<ContractViolation>().copied()
}

#[derive(Default)]
struct RecordingRecipient {
    events: Mutex<Vec<Event>>,
}

impl MessageDispatcher<Event> for RecordingRecipient {
    fn dispatch_message(&self, message: Event) {
        self.events.lock().unwrap().push(message);
    }
}

#[test]
fn forward_registered() {
    let (proxy, mut message_rx) = new_proxy();
    proxy.registered("fw-1".into(), master_info());
    assert_eq!(
        Event::Registered {
            framework_id: "fw-1".into(),
            master_info: master_info(),
        },
        recv_single(&mut message_rx)
    );
}

#[test]
fn forward_reregistered() {
    let (proxy, mut message_rx) = new_proxy();
    proxy.reregistered(master_info());
    assert_eq!(
        Event::ReRegistered {
            master_info: master_info(),
        },
        recv_single(&mut message_rx)
    );
}

#[test]
fn forward_disconnected() {
    let (proxy, mut message_rx) = new_proxy();
    proxy.disconnected();
    assert_eq!(Event::Disconnected, recv_single(&mut message_rx));
}

#[test]
fn forward_resource_offers_in_order() {
    let (proxy, mut message_rx) = new_proxy();
    let offers = vec![offer("o1"), offer("o2"), offer("o3")];
    proxy.resource_offers(offers.clone());
    let Event::ResourceOffers { offers: received } = recv_single(&mut message_rx) else {
        panic!("unexpected event");
    };
    let ids: Vec<_> = received.iter().map(|offer| offer.id.value()).collect();
    assert_eq!(vec!["o1", "o2", "o3"], ids);
    assert_eq!(offers, received);
}

#[test]
fn forward_empty_resource_offers() {
    let (proxy, mut message_rx) = new_proxy();
    proxy.resource_offers(vec![]);
    assert_eq!(
        Event::ResourceOffers { offers: vec![] },
        recv_single(&mut message_rx)
    );
}

#[test]
fn forward_offer_rescinded() {
    let (proxy, mut message_rx) = new_proxy();
    proxy.offer_rescinded("o1".into());
    assert_eq!(
        Event::OfferRescinded {
            offer_id: "o1".into(),
        },
        recv_single(&mut message_rx)
    );
}

#[test]
fn forward_status_update() {
    let (proxy, mut message_rx) = new_proxy();
    let status = TaskStatus {
        message: Some("started".to_owned()),
        slave_id: Some("agent-1".into()),
        data: Some(vec![1, 2, 3]),
        ..TaskStatus::new("task-1".into(), TaskState::Running)
    };
    proxy.status_update(status.clone());
    assert_eq!(Event::StatusUpdate { status }, recv_single(&mut message_rx));
}

#[test]
fn forward_slave_lost() {
    let (proxy, mut message_rx) = new_proxy();
    proxy.slave_lost("agent-7".into());
    assert_eq!(
        Event::SlaveLost {
            slave_id: "agent-7".into(),
        },
        recv_single(&mut message_rx)
    );
}

#[test]
fn forward_error() {
    let (proxy, mut message_rx) = new_proxy();
    proxy.error("lost connection".to_owned());
    assert_eq!(
        Event::Error {
            message: "lost connection".to_owned(),
        },
        recv_single(&mut message_rx)
    );
}

#[test]
fn framework_message_is_a_contract_violation() {
    let (proxy, mut message_rx) = new_proxy();
    let violation = catch_contract_violation(|| {
        proxy.framework_message("executor-1".into(), "agent-1".into(), vec![0xca, 0xfe]);
    });
    assert_eq!(Some(ContractViolation::FrameworkMessage), violation);
    assert_eq!(Err(TryRecvError::Empty), message_rx.try_recv());
}

#[test]
fn executor_lost_is_a_contract_violation() {
    let (proxy, mut message_rx) = new_proxy();
    let violation = catch_contract_violation(|| {
        proxy.executor_lost("executor-1".into(), "agent-1".into(), 137);
    });
    assert_eq!(Some(ContractViolation::ExecutorLost), violation);
    assert_eq!(Err(TryRecvError::Empty), message_rx.try_recv());
}

#[test]
fn unreachable_recipient_drops_events() {
    let (proxy, message_rx) = new_proxy();
    drop(message_rx);
    proxy.registered("fw-1".into(), master_info());
    proxy.slave_lost("agent-7".into());
    proxy.error("lost connection".to_owned());
    assert!(proxy.recipient().is_closed());
}

#[test]
fn closed_inbox_drops_events() {
    let (proxy, mut message_rx) = new_proxy();
    proxy.disconnected();
    message_rx.close();
    proxy.error("lost connection".to_owned());
    assert_eq!(Ok(Event::Disconnected), message_rx.try_recv());
    assert!(message_rx.try_recv().is_err());
}

#[test]
fn preserve_order_of_sequential_callbacks() {
    let (proxy, mut message_rx) = new_proxy();
    proxy.registered("fw-1".into(), master_info());
    proxy.resource_offers(vec![offer("o1")]);
    proxy.offer_rescinded("o1".into());
    proxy.disconnected();
    let names: Vec<_> = std::iter::from_fn(|| message_rx.try_recv().ok())
        .map(|event| event.name())
        .collect();
    assert_eq!(
        vec!["Registered", "ResourceOffers", "OfferRescinded", "Disconnected"],
        names
    );
}

#[test]
fn forward_to_shared_custom_recipient() {
    let recipient = Arc::new(RecordingRecipient::default());
    let proxy = SchedulerProxy::new(Arc::clone(&recipient));
    proxy.slave_lost("agent-7".into());
    proxy.error("lost connection".to_owned());
    let events = recipient.events.lock().unwrap();
    assert_eq!(
        vec![
            Event::SlaveLost {
                slave_id: "agent-7".into(),
            },
            Event::Error {
                message: "lost connection".to_owned(),
            },
        ],
        *events
    );
}
