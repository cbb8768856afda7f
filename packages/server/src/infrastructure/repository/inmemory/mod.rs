//! InMemory Repository 実装群
//!
//! `tokio::sync::Mutex` で保護した HashMap / BTreeMap をインメモリ DB として使用します。

pub mod comment;
pub mod connection;
pub mod room;

pub use comment::InMemoryCommentRepository;
pub use connection::InMemoryConnectionRepository;
pub use room::InMemoryRoomRepository;
