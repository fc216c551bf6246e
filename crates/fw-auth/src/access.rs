//! Access resolution for child-scoped operations.
//!
//! All record access funnels through [`AccessResolver`]: it decides which
//! parent an operation acts for, confirms the child exists, and confirms
//! the parent owns the child, in that order. Handlers never touch records
//! before a resolution has succeeded.

use std::sync::Arc;

use fw_model::{Child, Parent, Principal};
use fw_storage::{ChildProvider, ParentProvider};
use uuid::Uuid;

use crate::error::{AccessError, AccessResult};

/// How the effective parent for a child-scoped operation is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildAccess {
    /// The caller acts on their own account.
    SelfService,
    /// An administrator acts on the named parent's account.
    OnBehalfOf(Uuid),
}

impl ChildAccess {
    /// Decides the access mode for a caller.
    ///
    /// Administrators must name the parent they act for. Regular parents
    /// always act on themselves; an explicit id supplied by a regular
    /// parent is ignored rather than rejected.
    ///
    /// ## Errors
    ///
    /// Returns `AccessError::AdminMissingParentId` if an administrator
    /// supplies no parent id.
    pub fn for_caller(
        principal: &Principal,
        explicit_parent_id: Option<Uuid>,
    ) -> AccessResult<Self> {
        if principal.is_admin() {
            explicit_parent_id
                .map(Self::OnBehalfOf)
                .ok_or(AccessError::AdminMissingParentId)
        } else {
            Ok(Self::SelfService)
        }
    }
}

/// Resolves which child an operation may touch.
///
/// Checks run in a fixed order: effective parent first, then child
/// existence, then ownership. A wrong parent paired with an unknown child
/// therefore reports the missing child, never a denied access. The parent
/// is fetched fresh from storage on every resolution; nothing is cached
/// across requests.
pub struct AccessResolver<P, C> {
    parents: Arc<P>,
    children: Arc<C>,
}

impl<P, C> AccessResolver<P, C>
where
    P: ParentProvider,
    C: ChildProvider,
{
    /// Creates a resolver over the given providers.
    pub fn new(parents: Arc<P>, children: Arc<C>) -> Self {
        Self { parents, children }
    }

    /// Resolves the effective parent for the caller.
    ///
    /// Used by operations that are parent-scoped rather than child-scoped,
    /// such as creating or listing children.
    pub async fn resolve_parent(
        &self,
        principal: &Principal,
        explicit_parent_id: Option<Uuid>,
    ) -> AccessResult<Parent> {
        let access = ChildAccess::for_caller(principal, explicit_parent_id)?;
        self.effective_parent(principal, access).await
    }

    /// Resolves a child for a caller acting on their own account.
    ///
    /// The caller's account is looked up by username, so this mode never
    /// reaches another parent's children, administrator or not.
    pub async fn resolve_self_service(
        &self,
        principal: &Principal,
        child_id: Uuid,
    ) -> AccessResult<Child> {
        let parent = self
            .effective_parent(principal, ChildAccess::SelfService)
            .await?;
        self.authorize_child(&parent, child_id).await
    }

    /// Resolves a child for a regular parent, or for an administrator
    /// acting on behalf of an explicitly named parent.
    pub async fn resolve_admin_or_owner(
        &self,
        principal: &Principal,
        child_id: Uuid,
        explicit_parent_id: Option<Uuid>,
    ) -> AccessResult<Child> {
        let access = ChildAccess::for_caller(principal, explicit_parent_id)?;
        let parent = self.effective_parent(principal, access).await?;
        self.authorize_child(&parent, child_id).await
    }

    async fn effective_parent(
        &self,
        principal: &Principal,
        access: ChildAccess,
    ) -> AccessResult<Parent> {
        let parent = match access {
            ChildAccess::SelfService => self.parents.get_by_username(&principal.username).await?,
            ChildAccess::OnBehalfOf(parent_id) => self.parents.get_by_id(parent_id).await?,
        };
        parent.ok_or(AccessError::ParentNotFound)
    }

    async fn authorize_child(&self, parent: &Parent, child_id: Uuid) -> AccessResult<Child> {
        let child = self
            .children
            .get_by_id(child_id)
            .await?
            .ok_or(AccessError::ChildNotFound)?;
        if child.parent_id != parent.id {
            return Err(AccessError::AccessDenied);
        }
        Ok(child)
    }
}
