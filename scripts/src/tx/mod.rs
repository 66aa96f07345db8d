//! Transaction building, sending and receipt decoding

pub mod abi;
pub mod client;
pub mod events;
pub mod sender;
