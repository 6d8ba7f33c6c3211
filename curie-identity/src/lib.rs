//! # Curie Identity
//!
//! This crate resolves an authenticated user into the [`Actor`] value every
//! authorization decision and ledger call takes explicitly. Credential and
//! session handling happen outside the core; by the time this crate is
//! involved, login has already succeeded.
//!
//! ## Overview
//!
//! The curie-identity crate handles:
//! - **Actor**: `{id, role, department_id}`, the subject of every decision
//! - **RoleRank**: the closed role enumeration with numeric ranks
//! - **Identity**: the seam collaborators implement to supply the current actor
//!
//! ## Usage
//!
//! ```rust,no_run
//! use curie_identity::{Actor, RoleRank, Identity, StaticIdentity};
//! use uuid::Uuid;
//!
//! # async fn demo() {
//! let actor = Actor::new(Uuid::now_v7(), RoleRank::Researcher);
//! let identity = StaticIdentity::new(actor.clone());
//! let resolved = identity.current_actor().await.unwrap();
//! assert_eq!(resolved.id, actor.id);
//! # }
//! ```
//!
//! ## Design Note
//!
//! The actor is always passed as an explicit value rather than looked up
//! from ambient session state, so the policy engine and ledger stay
//! trivially testable with synthetic actors.

pub mod actor;
pub mod context;
pub mod error;

// Re-export main types for convenience
pub use actor::{Actor, RoleRank};
pub use context::{Identity, StaticIdentity};
pub use error::{IdentityError, IdentityResult};
