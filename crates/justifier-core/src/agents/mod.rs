//! Role agents
//!
//! An agent is a fixed instruction template plus a voice, invoked
//! synchronously against the completion client. The [`Roster`] fixes which
//! agents take part in a pipeline run and in what order.

mod definition;
mod role;
mod roster;

pub use definition::AgentDefinition;
pub use role::{sentinel, RoleAgent};
pub use roster::{Roster, CLIENT_LABEL};
