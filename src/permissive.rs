use crate::{Authorizer, Principal, Request, Resource};

/// An authorizer that grants every request
///
/// This is the baseline policy:
/// - Requests pass the request-level gate, unless authentication is required
///   and the caller is anonymous
/// - Object-level checks always pass
/// - List queries are returned unmodified
pub struct PermissiveAuthorizer {
    require_authned: bool,
}

impl PermissiveAuthorizer {
    /// Creates a new instance of PermissiveAuthorizer
    ///
    /// # Arguments
    /// * `require_authned` - Deny anonymous callers at the request-level gate
    ///
    /// # Returns
    /// * A new PermissiveAuthorizer instance
    pub fn new(require_authned: bool) -> Self {
        Self { require_authned }
    }
}

/// The request-level gate shared by all policy variants: anonymous callers
/// are denied only when authentication is required.
pub(crate) fn allow_request(require_authned: bool, authned: Option<&dyn Principal>) -> bool {
    if require_authned {
        authned.is_some()
    } else {
        true
    }
}

impl Authorizer for PermissiveAuthorizer {
    fn is_authorized_request(
        &self,
        _request: &dyn Request,
        authned: Option<&dyn Principal>,
    ) -> bool {
        allow_request(self.require_authned, authned)
    }

    fn is_authorized_obj(
        &self,
        _request: &dyn Request,
        _authned: Option<&dyn Principal>,
        _obj: &dyn Resource,
    ) -> bool {
        true
    }
}
