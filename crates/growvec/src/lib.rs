//! Growable indexed container with explicit capacity bookkeeping.
//!
//! [`GrowVec`] is a contiguous, index-addressed sequence that grows its
//! backing storage by a configurable factor (default: doubling) when an
//! append or insert would exceed the current capacity. Every accessor and
//! mutator is total: reads signal a missing position with `Option`,
//! writes with a `bool`, and nothing panics on an out-of-range index.
//!
//! # Architecture
//!
//! ```text
//! GrowVec<T>
//! ├── buf: Vec<T>       backing store; logical elements live in [0, len)
//! ├── capacity          contract slot count, multiplied on each growth
//! └── growth_factor     multiplier per threshold crossing (default 2)
//! ```
//!
//! Growth triggers only when an operation's post-condition length would
//! exceed the contract capacity; filling a sequence exactly to capacity
//! never reallocates. Capacity is monotonic: `pop`, `remove`, and `clear`
//! keep the backing storage. [`GrowVec::to_vec`] produces an independently
//! owned copy, never a view into internal storage.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod vec;

// Public re-exports for the primary API surface.
pub use config::GrowthConfig;
pub use error::GrowVecError;
pub use vec::GrowVec;
