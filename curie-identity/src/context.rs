//! Identity resolution seam
//!
//! This module defines the trait surrounding code implements to hand the
//! core its authenticated actor, plus a static implementation for tests and
//! single-actor embedding.

use async_trait::async_trait;

use crate::actor::Actor;
use crate::error::{IdentityError, IdentityResult};

/// Resolves the authenticated actor for the current request.
///
/// Session and credential management live outside the core; implementations
/// typically read a validated session and map it to an [`Actor`].
#[async_trait]
pub trait Identity: Send + Sync {
    /// Get the actor for the current request.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::NotAuthenticated` when no authenticated
    /// user is present.
    async fn current_actor(&self) -> IdentityResult<Actor>;
}

/// An identity that always resolves to one fixed actor.
///
/// Suitable for tests and for embedding the core in single-user tools.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use curie_identity::{Actor, RoleRank, StaticIdentity};
///
/// let actor = Actor::new(Uuid::now_v7(), RoleRank::Admin);
/// let identity = StaticIdentity::new(actor);
/// ```
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    actor: Option<Actor>,
}

impl StaticIdentity {
    /// Creates an identity resolving to the given actor.
    pub fn new(actor: Actor) -> Self {
        Self { actor: Some(actor) }
    }

    /// Creates an identity with no authenticated actor.
    ///
    /// Every `current_actor` call fails with `NotAuthenticated`; useful for
    /// exercising unauthenticated paths in tests.
    pub fn anonymous() -> Self {
        Self { actor: None }
    }
}

#[async_trait]
impl Identity for StaticIdentity {
    async fn current_actor(&self) -> IdentityResult<Actor> {
        self.actor.clone().ok_or(IdentityError::NotAuthenticated)
    }
}
