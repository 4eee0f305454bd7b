pub mod polling;
pub mod read;
pub mod service;
pub mod system;

// Re-export commonly used functions/types at the operations root so callers
// can use `crate::card::operations::read_blocks(...)` and receive the
// iterator type as `crate::card::operations::ServiceIterator`.
pub use polling::polling;
pub use read::{read_blocks, read_transit_history, read_without_encryption};
pub use service::{ServiceIterator, search_service_code};
pub use system::get_system_code_list;
