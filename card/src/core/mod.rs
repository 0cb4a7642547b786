pub mod id;
pub mod snapshot;
pub mod unit;

pub use id::EntityId;
pub use snapshot::{EntityState, StateSnapshot, StateValue};
