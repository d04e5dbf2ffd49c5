//! 아웃바운드 HTTP 클라이언트

pub mod peer_client;

pub use peer_client::{Completion, PeerClient, EMPLOYEES_PATH};
