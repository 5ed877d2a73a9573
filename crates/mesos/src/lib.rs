#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

pub use flink_mesos_core as core;

#[cfg(feature = "with-scheduler")]
pub use flink_mesos_scheduler as scheduler;
