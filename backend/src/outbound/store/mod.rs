//! Application store adapters.

mod memory;

pub use memory::InMemoryApplicationRepository;
