use crate::method::{classify_method, MethodClass};
use crate::permissive::allow_request;
use crate::{Authorizer, Principal, Request, Resource};

/// An authorizer that combines framework permissions with per-object checks
///
/// Object-level decisions run in two stages:
/// - Mutating methods require the caller to hold the matching namespaced
///   permission (`"<app_label>.<perm_name>"`); read methods require none
/// - The resource's own check hook then decides, falling back to a
///   configured default when the resource defines no hook
///
/// Coarse permissions gate whole categories of action while the hook
/// implements fine-grained, data-dependent rules such as "only the owning
/// user may edit their own record". Note that read methods also reach the
/// hook stage, so read access is not unconditionally granted.
pub struct PermAuthorizer {
    require_authned: bool,
    perms: bool,
    default_if_no_method: bool,
}

impl PermAuthorizer {
    /// Creates a new instance of PermAuthorizer
    ///
    /// # Arguments
    /// * `require_authned` - Deny anonymous callers at the request-level gate
    /// * `perms` - Enable permission checking for mutating methods
    /// * `default_if_no_method` - Decision when the resource defines no check hook
    ///
    /// # Returns
    /// * A new PermAuthorizer instance
    pub fn new(require_authned: bool, perms: bool, default_if_no_method: bool) -> Self {
        Self {
            require_authned,
            perms,
            default_if_no_method,
        }
    }
}

impl Authorizer for PermAuthorizer {
    fn is_authorized_request(
        &self,
        _request: &dyn Request,
        authned: Option<&dyn Principal>,
    ) -> bool {
        allow_request(self.require_authned, authned)
    }

    fn is_authorized_obj(
        &self,
        request: &dyn Request,
        authned: Option<&dyn Principal>,
        obj: &dyn Resource,
    ) -> bool {
        if self.perms {
            let meta = obj.meta();
            let perm = match classify_method(request.method()) {
                Some(MethodClass::Read) => None,
                Some(MethodClass::Create) => {
                    Some(format!("{}.{}", meta.app_label(), meta.add_permission()))
                }
                Some(MethodClass::Update) => {
                    Some(format!("{}.{}", meta.app_label(), meta.change_permission()))
                }
                Some(MethodClass::Delete) => {
                    Some(format!("{}.{}", meta.app_label(), meta.delete_permission()))
                }
                // unhandled methods are not authorized
                None => return false,
            };

            // allow read methods through but verify the caller holds the
            // permission to perform the given action on the object; an
            // anonymous caller holds no permission at all
            if let Some(perm) = perm {
                match authned {
                    Some(authned) if authned.has_perm(&perm) => {}
                    _ => return false,
                }
            }
        }

        match obj.check(request, authned) {
            Some(decision) => decision,
            None => self.default_if_no_method,
        }
    }
}
