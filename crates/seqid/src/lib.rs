#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Short, totally-ordered letter IDs with recycling.
//!
//! IDs are drawn from a 52-letter alphabet (`a..z` then `A..Z`), counted like
//! an odometer, and compared by length first and then by digit value. Freed
//! IDs are handed out again before the counter advances.
//!
//! ```
//! # #[cfg(feature = "std")] {
//! use seqid::LockSeqGenerator;
//!
//! let generator = LockSeqGenerator::new();
//! let a = generator.next_id();
//! let b = generator.next_id();
//! assert_eq!(a, "a");
//! assert_eq!(b, "b");
//!
//! generator.free_id(&a).unwrap();
//! assert_eq!(generator.next_id(), "a");
//! assert_eq!(generator.next_id(), "c");
//! # }
//! ```

extern crate alloc;

pub mod digit;
mod error;
pub mod generator;
pub mod id;
#[cfg(feature = "std")]
mod mutex;
#[cfg(feature = "serde")]
mod serde;
mod snapshot;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::snapshot::*;
