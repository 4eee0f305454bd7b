// felica-tag/src/protocol/mod.rs

pub mod codes;
pub mod commands;
pub mod packet;
pub mod parser;
pub mod responses;

pub use codes::CommandCode;
pub use commands::{
    Command, encode_polling, encode_read, encode_request_system_code, encode_search_service_code,
};
pub use packet::CommandPacket;
pub use responses::{
    CommandResponse, PollingResponse, ReadResponse, SearchEntry, decode_system_code_list,
    search_payload,
};
