//! Pluggable authorization policies for web request dispatchers.
//!
//! A dispatcher authenticates a request upstream, then asks a policy three
//! questions: is this request allowed at all, is it allowed against a
//! specific resource, and how should a list query be limited. Policies are
//! immutable after construction and hold no mutable state, so one instance
//! can serve concurrent requests without locking.

mod method;
mod perm;
mod permissive;
mod readonly;
mod union;

pub mod config;
pub mod factory;

#[cfg(test)]
mod testutil;

pub use method::{classify_method, MethodClass};
pub use perm::PermAuthorizer;
pub use permissive::PermissiveAuthorizer;
pub use readonly::ReadonlyAuthorizer;
pub use union::UnionAuthorizer;

/// Trait that defines the authorization interface
///
/// Implementers of this trait decide whether requests are permitted, based
/// on custom logic. The trait is thread-safe and can be shared across
/// threads. All decisions are plain booleans; an unsupported HTTP method is
/// a denial, never an error.
pub trait Authorizer: Send + Sync {
    /// Request-level gate, independent of any specific resource.
    ///
    /// # Arguments
    /// * `request` - The incoming request
    /// * `authned` - The authenticated principal, `None` for anonymous callers
    ///
    /// # Returns
    /// * `true` if the request may proceed to dispatch
    fn is_authorized_request(&self, request: &dyn Request, authned: Option<&dyn Principal>)
        -> bool;

    /// Object-level gate, called when the request acts on a specific
    /// resource instance.
    fn is_authorized_obj(
        &self,
        request: &dyn Request,
        authned: Option<&dyn Principal>,
        obj: &dyn Resource,
    ) -> bool;

    /// Narrows a list query down to only items the caller may see.
    ///
    /// The default is the identity transform, so callers can uniformly pass
    /// every list result through the policy without special-casing the
    /// permissive case.
    fn limit(&self, request: &dyn Request, authned: Option<&dyn Principal>, query: Query) -> Query {
        let _ = (request, authned);
        query
    }
}

/// The incoming request, externally owned. Policies read only the HTTP
/// method and nothing else.
pub trait Request {
    /// HTTP method of the request. Matched case-insensitively.
    fn method(&self) -> &str;
}

/// The authenticated identity associated with a request. Anonymous callers
/// are represented by passing `None` instead of a principal.
pub trait Principal {
    /// Whether this principal holds the given permission string,
    /// e.g. `"notes.add_note"`.
    fn has_perm(&self, perm: &str) -> bool;
}

/// Metadata the host framework exposes for a resource type: the owning
/// namespace and the names of the add/change/delete permissions within it.
pub trait ResourceMeta {
    /// Label of the namespace (application, schema) owning the resource.
    fn app_label(&self) -> &str;

    /// Permission name guarding creation, e.g. `"add_note"`.
    fn add_permission(&self) -> String;

    /// Permission name guarding updates, e.g. `"change_note"`.
    fn change_permission(&self) -> String;

    /// Permission name guarding deletion, e.g. `"delete_note"`.
    fn delete_permission(&self) -> String;
}

/// The resource instance a request acts upon, externally owned.
pub trait Resource {
    /// Metadata describing the resource type.
    fn meta(&self) -> &dyn ResourceMeta;

    /// Instance-specific authorization hook.
    ///
    /// `None` means the resource defines no hook, which is distinct from a
    /// hook that denies. Policies that consult the hook substitute their
    /// configured default when it is absent.
    fn check(&self, request: &dyn Request, authned: Option<&dyn Principal>) -> Option<bool> {
        let _ = (request, authned);
        None
    }
}

/// Description of a list query passed through [`Authorizer::limit`].
///
/// Policies return it unmodified by default; a variant may narrow it, for
/// example by forcing the owner filter to the calling principal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub offset: Option<u64>,
    pub limit: Option<u64>,

    pub search: Option<String>,

    pub owner: Option<String>,
}
