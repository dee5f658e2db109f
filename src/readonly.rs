use crate::method::{classify_method, MethodClass};
use crate::permissive::allow_request;
use crate::{Authorizer, Principal, Request, Resource};

/// An authorizer that only grants read requests
///
/// Only HTTP methods considered read-only (GET, HEAD, OPTIONS) pass; every
/// mutating or unhandled method is denied regardless of who the caller is.
/// Object-level decisions are by method alone, the resource is ignored.
pub struct ReadonlyAuthorizer {
    require_authned: bool,
}

impl ReadonlyAuthorizer {
    /// Creates a new instance of ReadonlyAuthorizer
    ///
    /// # Arguments
    /// * `require_authned` - Deny anonymous callers at the request-level gate
    ///
    /// # Returns
    /// * A new ReadonlyAuthorizer instance
    pub fn new(require_authned: bool) -> Self {
        Self { require_authned }
    }
}

impl Authorizer for ReadonlyAuthorizer {
    fn is_authorized_request(
        &self,
        request: &dyn Request,
        authned: Option<&dyn Principal>,
    ) -> bool {
        allow_request(self.require_authned, authned)
            && classify_method(request.method()) == Some(MethodClass::Read)
    }

    fn is_authorized_obj(
        &self,
        request: &dyn Request,
        authned: Option<&dyn Principal>,
        _obj: &dyn Resource,
    ) -> bool {
        self.is_authorized_request(request, authned)
    }
}
