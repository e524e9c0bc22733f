pub mod ask;
pub mod root;
pub mod session;
pub mod stats;
