// felica-tag/src/lib.rs

//! felica-tag
//!
//! FeliCa (NFC-F) command/response codec and card session, driven through a
//! transceiver supplied by the host's NFC stack.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Error and wire types live at the crate root as well as in the prelude.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
