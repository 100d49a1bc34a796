#[cfg(test)]
mod network_test;

pub mod adapter_type;
pub mod socket_address;

pub use adapter_type::AdapterType;
pub use socket_address::SocketAddress;
