//! Data-access layer for the Lunance personal-finance client.
//!
//! Every operation flows the same way: a [`UseCase`](usecase::UseCase) calls
//! a feature repository, the repository's [`Gateway`](repository::Gateway)
//! checks [`Reachability`](reachability::Reachability), invokes one remote
//! data source from `lunance-api`, and maps the wire model into an entity.
//! Whatever happens, the caller receives an [`Outcome`]: never a panic,
//! never a raw transport error.
//!
//! ```no_run
//! # async fn demo() -> Result<(), lunance_api::Error> {
//! use std::sync::Arc;
//!
//! use lunance_api::{ApiClient, TransportConfig};
//! use lunance_core::reachability::StaticReachability;
//! use lunance_core::session::MemorySessionStore;
//! use lunance_core::usecase::UseCase;
//! use lunance_core::{Outcome, Services};
//!
//! let client = Arc::new(ApiClient::new("http://localhost:8000/api/v1", &TransportConfig::default())?);
//! let services = Services::new(
//!     client,
//!     Arc::new(StaticReachability::online()),
//!     Arc::new(MemorySessionStore::new()),
//! );
//!
//! match services.get_categories().call(None).await {
//!     Outcome::Success(categories) => println!("{} categories", categories.len()),
//!     Outcome::Failure(message) => eprintln!("{message}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod entity;
pub mod error;
pub mod outcome;
pub mod reachability;
pub mod repository;
pub mod services;
pub mod session;
pub mod state;
pub mod usecase;

pub use convert::IntoEntity;
pub use error::{SessionError, ValidationError};
pub use outcome::Outcome;
pub use reachability::{Reachability, StaticReachability, TcpProbe};
pub use repository::{Gateway, NO_CONNECTION, Operation};
pub use services::{DataSources, Services};
pub use session::{MemorySessionStore, SessionStore, StoredSession};
pub use state::{LoadSequencer, Ticket, ViewState};
pub use usecase::UseCase;
