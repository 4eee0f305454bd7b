// felica-tag/src/transport/mod.rs

pub mod mock;
pub mod traits;

pub use mock::MockTransceiver;
pub use traits::{Transceiver, exchange};
