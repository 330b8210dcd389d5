//! Helper structures shared by the runqueue implementations.

mod arena;

pub use arena::{Arena, SlotId};
