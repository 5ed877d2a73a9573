use std::{collections::HashMap, net::Ipv4Addr, sync::Arc, thread, time::Duration};

use anyhow::Result;
use flink_mesos::{
    core::{MasterInfo, Offer, OfferId, Resource, TaskState, TaskStatus},
    scheduler::{create_message_loop, Event, Scheduler, SchedulerProxy},
};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();
    log::info!("Starting simulated scheduler driver example");

    let (message_loop, message_tx) = create_message_loop(ResourceMaster::default());
    let resource_master = tokio::spawn(message_loop);

    let scheduler: Arc<dyn Scheduler> = Arc::new(SchedulerProxy::new(message_tx));
    let driver = tokio::task::spawn_blocking(move || run_driver(&scheduler));

    tokio::select! {
      _ = tokio::signal::ctrl_c() => {
        log::debug!("received CTRL+C");
        log::info!("Terminating simulated scheduler driver example");
      }
      driver = driver => {
        driver?;
        // The driver has dropped the proxy, the inbox drains and closes
        resource_master.await?;
        log::info!("Resource master terminated");
      }
    }
    Ok(())
}

// ------    ------ //
//  Simulated driver //
// ------    ------ //

const AGENTS: usize = 3;

fn offer(agent_index: usize, round: usize) -> Offer {
    Offer {
        id: format!("offer-{agent_index}-{round}").into(),
        framework_id: "flink".into(),
        slave_id: format!("agent-{agent_index}").into(),
        hostname: format!("host-{agent_index}"),
        resources: vec![
            Resource::scalar("cpus", 4.0),
            Resource::scalar("mem", 8192.0),
        ],
    }
}

// Invokes callbacks from multiple threads like the native driver does
fn run_driver(scheduler: &Arc<dyn Scheduler>) {
    scheduler.registered(
        "flink".into(),
        MasterInfo::new("master-1", Ipv4Addr::LOCALHOST, 5050),
    );
    let agents: Vec<_> = (0..AGENTS)
        .map(|agent_index| {
            let scheduler = Arc::clone(scheduler);
            thread::spawn(move || {
                for round in 0..3 {
                    scheduler.resource_offers(vec![offer(agent_index, round)]);
                    thread::sleep(Duration::from_millis(100));
                    if round % 2 == 1 {
                        scheduler.offer_rescinded(format!("offer-{agent_index}-{round}").into());
                    }
                }
                let status = TaskStatus {
                    slave_id: Some(format!("agent-{agent_index}").into()),
                    ..TaskStatus::new(format!("task-{agent_index}").into(), TaskState::Finished)
                };
                scheduler.status_update(status);
            })
        })
        .collect();
    for agent in agents {
        if agent.join().is_err() {
            log::warn!("Simulated agent thread panicked");
        }
    }
    scheduler.slave_lost("agent-0".into());
    scheduler.disconnected();
}

// ------     ------ //
//  Resource master  //
// ------     ------ //

#[derive(Debug, Default)]
struct ResourceMaster {
    outstanding_offers: HashMap<OfferId, Offer>,
}

impl ResourceMaster {
    fn handle(&mut self, event: Event) {
        match event {
            Event::Registered {
                framework_id,
                master_info,
            } => {
                log::info!("Registered as {framework_id} with master {master_info}");
            }
            Event::ReRegistered { master_info } => {
                log::info!("Re-registered with master {master_info}");
            }
            Event::Disconnected => {
                log::warn!("Disconnected from master");
            }
            Event::ResourceOffers { offers } => {
                for offer in offers {
                    log::debug!(
                        "Received offer {} from {} with {} cpus",
                        offer.id,
                        offer.hostname,
                        offer.scalar_sum("cpus")
                    );
                    self.outstanding_offers.insert(offer.id.clone(), offer);
                }
            }
            Event::OfferRescinded { offer_id } => {
                if self.outstanding_offers.remove(&offer_id).is_none() {
                    log::debug!("Unknown offer {offer_id} has been rescinded");
                }
            }
            Event::StatusUpdate { status } => {
                log::info!("Task {} is {}", status.task_id, status.state);
            }
            Event::SlaveLost { slave_id } => {
                self.outstanding_offers
                    .retain(|_, offer| offer.slave_id != slave_id);
                log::warn!("Lost agent {slave_id}");
            }
            Event::Error { message } => {
                log::error!("Scheduler driver failed: {message}");
            }
        }
        log::debug!("{} outstanding offer(s)", self.outstanding_offers.len());
    }
}

impl flink_mesos::scheduler::EventHandler for ResourceMaster {
    fn handle_event(&mut self, event: Event) {
        self.handle(event);
    }
}
