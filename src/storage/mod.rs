pub mod snapshot;

pub use snapshot::ChatListSnapshot;
