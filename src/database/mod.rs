pub mod connection;
pub mod registry;

pub use connection::*;
pub use registry::*;
