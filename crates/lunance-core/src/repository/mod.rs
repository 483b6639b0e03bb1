// ── Repositories ──
//
// Every feature repository funnels its calls through one `Gateway`:
// reachability check, a single data-source call, model-to-entity mapping,
// and error folding into `Outcome`. Feature modules only declare their
// operations and fallback phrases.

pub mod auth;
pub mod category;
pub mod dashboard;
pub mod history;
pub mod settings;

use std::future::Future;
use std::sync::Arc;

use lunance_api::SourceError;
use tracing::{debug, warn};

use crate::outcome::Outcome;
use crate::reachability::Reachability;

pub use auth::AuthRepository;
pub use category::CategoryRepository;
pub use dashboard::DashboardRepository;
pub use history::HistoryRepository;
pub use settings::SettingsRepository;

/// Failure message when the reachability gate reports no network.
pub const NO_CONNECTION: &str = "Tidak ada koneksi internet";

/// A named repository operation and its localized fallback phrase.
///
/// The phrase prefixes failures that have no user-facing message of their
/// own, e.g. `"Gagal membuat kategori: Request timed out after 30s"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub fallback: &'static str,
}

impl Operation {
    pub const fn new(name: &'static str, fallback: &'static str) -> Self {
        Self { name, fallback }
    }
}

/// Shared error boundary for all repositories.
#[derive(Clone)]
pub struct Gateway {
    reachability: Arc<dyn Reachability>,
}

impl Gateway {
    pub fn new(reachability: Arc<dyn Reachability>) -> Self {
        Self { reachability }
    }

    /// Check reachability, make one data-source call, map the model.
    ///
    /// `call` is never invoked when the gate reports offline. No error
    /// escapes: server and shape errors keep their message, anything else
    /// is prefixed with `op.fallback`.
    pub async fn run<M, E, F, Fut>(&self, op: Operation, call: F, map: impl FnOnce(M) -> E) -> Outcome<E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<M, SourceError>>,
    {
        if !self.reachability.is_connected().await {
            warn!(operation = op.name, "offline, request not sent");
            return Outcome::failure(NO_CONNECTION);
        }

        match call().await {
            Ok(model) => {
                debug!(operation = op.name, "operation succeeded");
                Outcome::Success(map(model))
            }
            Err(err) if err.is_user_facing() => {
                warn!(operation = op.name, error = %err, "operation rejected");
                Outcome::Failure(err.to_string())
            }
            Err(err) => {
                warn!(operation = op.name, error = %err, "operation failed");
                Outcome::Failure(format!("{}: {err}", op.fallback))
            }
        }
    }

    /// [`run`](Self::run) for a single record mapped through `From`.
    pub async fn fetch_one<M, E, F, Fut>(&self, op: Operation, call: F) -> Outcome<E>
    where
        E: From<M>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<M, SourceError>>,
    {
        self.run(op, call, E::from).await
    }

    /// [`run`](Self::run) for a list, mapping every element through `From`.
    pub async fn fetch_many<M, E, F, Fut>(&self, op: Operation, call: F) -> Outcome<Vec<E>>
    where
        E: From<M>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<M>, SourceError>>,
    {
        self.run(op, call, |models| models.into_iter().map(E::from).collect())
            .await
    }

    /// [`run`](Self::run) for acknowledgement-only calls.
    pub async fn execute<F, Fut>(&self, op: Operation, call: F) -> Outcome<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), SourceError>>,
    {
        self.run(op, call, |()| ()).await
    }
}
