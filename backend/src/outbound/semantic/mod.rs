//! Semantic checker adapters.

mod dto;
mod http_checker;

pub use http_checker::HttpSemanticChecker;
