// lunance-api: Async Rust client for the Lunance personal-finance REST API

pub mod client;
pub mod error;
pub mod models;
pub mod requests;
pub mod sources;
pub mod transport;

pub use client::ApiClient;
pub use error::Error;
pub use models::{TransactionType, WireModel};
pub use sources::{Shape, SourceError};
pub use transport::{TlsMode, TransportConfig};
