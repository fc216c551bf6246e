//! Shared handler state.

use std::sync::Arc;

use fw_auth::{AccessResolver, PasswordService};
use fw_storage::{ChildProvider, MilestoneProvider, ParentProvider, WordProvider};

use crate::auth::AuthState;

/// State shared by every API handler.
///
/// Generic over the provider implementations so the same handlers serve
/// the Postgres backend in production and the in-memory backend in tests.
pub struct ApiState<P, C, W, M> {
    /// Parent account provider.
    pub parents: Arc<P>,
    /// Child provider.
    pub children: Arc<C>,
    /// Word record provider.
    pub words: Arc<W>,
    /// Milestone record provider.
    pub milestones: Arc<M>,
    /// Password policy and hashing.
    pub passwords: Arc<PasswordService>,
}

// Manual Clone implementation to avoid requiring Clone on the providers.
impl<P, C, W, M> Clone for ApiState<P, C, W, M> {
    fn clone(&self) -> Self {
        Self {
            parents: Arc::clone(&self.parents),
            children: Arc::clone(&self.children),
            words: Arc::clone(&self.words),
            milestones: Arc::clone(&self.milestones),
            passwords: Arc::clone(&self.passwords),
        }
    }
}

impl<P, C, W, M> ApiState<P, C, W, M>
where
    P: ParentProvider,
    C: ChildProvider,
    W: WordProvider,
    M: MilestoneProvider,
{
    /// Creates handler state over the given providers.
    pub fn new(
        parents: Arc<P>,
        children: Arc<C>,
        words: Arc<W>,
        milestones: Arc<M>,
        passwords: Arc<PasswordService>,
    ) -> Self {
        Self {
            parents,
            children,
            words,
            milestones,
            passwords,
        }
    }

    /// Creates an access resolver over the parent and child providers.
    pub fn resolver(&self) -> AccessResolver<P, C> {
        AccessResolver::new(Arc::clone(&self.parents), Arc::clone(&self.children))
    }

    /// Creates the matching state for the authentication middleware.
    pub fn auth_state(&self) -> AuthState<P> {
        AuthState::new(Arc::clone(&self.parents), Arc::clone(&self.passwords))
    }
}
