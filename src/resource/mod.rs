//! Resource module
//!
//! Every REST resource is described by a serde record type implementing
//! [`Resource`]. The generic [`ResourceList`] and [`ResourceContext`] supply
//! the operations; which of them a resource offers is decided by the
//! capability traits it opts into ([`Listable`], [`Creatable`],
//! [`Fetchable`], [`Updatable`], [`Removable`]).
//!
//! # Example
//!
//! ```ignore
//! let queues = client.taskrouter().task_queues("WS123");
//! let mut stream = queues.stream(&TaskQueueFilter::default(), &ListOptions::new().limit(20)).await?;
//! while let Some(queue) = stream.try_next().await? {
//!     println!("{}", queue.friendly_name);
//! }
//! ```

mod base;

pub mod account;
pub mod available_phone_number;
pub mod incoming_phone_number;
pub mod message;
pub mod outgoing_caller_id;
pub mod recording;
pub mod task_queue;

pub use base::{
    Addressable, Creatable, Fetchable, Listable, Removable, Resource, ResourceContext,
    ResourceList, ToParams, Updatable,
};
pub use account::{Account, AccountUpdate};
pub use available_phone_number::{AvailablePhoneNumber, AvailablePhoneNumberFilter, NumberKind};
pub use incoming_phone_number::{
    Capabilities, IncomingPhoneNumber, IncomingPhoneNumberFilter, NewIncomingPhoneNumber,
    NumberSettings,
};
pub use message::{Message, MessageFilter, NewMessage};
pub use outgoing_caller_id::{
    CallerIdFilter, CallerIdUpdate, NewCallerId, OutgoingCallerId, ValidationRequest,
};
pub use recording::{Recording, RecordingFilter};
pub use task_queue::{
    NewTaskQueue, TaskQueue, TaskQueueFilter, TaskQueueStatistics, TaskQueueUpdate,
};

#[cfg(test)]
mod tests;
