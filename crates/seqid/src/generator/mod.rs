mod basic;
mod free_list;
mod interface;
#[cfg(feature = "std")]
mod lock;
mod odometer;
mod state;

pub use basic::*;
pub use free_list::*;
pub use interface::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use lock::*;
pub use odometer::*;
pub use state::*;
