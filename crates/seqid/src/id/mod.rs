mod cmp;
mod seq_id;

pub use cmp::*;
pub use seq_id::*;
