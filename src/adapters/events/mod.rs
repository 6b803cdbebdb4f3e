//! Event bus adapters.
//!
//! - `InMemoryEventBus` - Synchronous, in-process bus; the subscription
//!   point views use to follow score changes

mod in_memory;

pub use in_memory::InMemoryEventBus;
