use crate::perm::PermAuthorizer;
use crate::permissive::PermissiveAuthorizer;
use crate::readonly::ReadonlyAuthorizer;
use crate::{Authorizer, Principal, Query, Request, Resource};

/// A union type that can hold different types of authorizers
pub enum UnionAuthorizer {
    /// Grants every request
    Permissive(PermissiveAuthorizer),
    /// Checks framework permissions and per-object hooks
    Perm(PermAuthorizer),
    /// Grants read requests only
    Readonly(ReadonlyAuthorizer),
}

impl Authorizer for UnionAuthorizer {
    fn is_authorized_request(
        &self,
        request: &dyn Request,
        authned: Option<&dyn Principal>,
    ) -> bool {
        match self {
            UnionAuthorizer::Permissive(a) => a.is_authorized_request(request, authned),
            UnionAuthorizer::Perm(p) => p.is_authorized_request(request, authned),
            UnionAuthorizer::Readonly(r) => r.is_authorized_request(request, authned),
        }
    }

    fn is_authorized_obj(
        &self,
        request: &dyn Request,
        authned: Option<&dyn Principal>,
        obj: &dyn Resource,
    ) -> bool {
        match self {
            UnionAuthorizer::Permissive(a) => a.is_authorized_obj(request, authned, obj),
            UnionAuthorizer::Perm(p) => p.is_authorized_obj(request, authned, obj),
            UnionAuthorizer::Readonly(r) => r.is_authorized_obj(request, authned, obj),
        }
    }

    fn limit(&self, request: &dyn Request, authned: Option<&dyn Principal>, query: Query) -> Query {
        match self {
            UnionAuthorizer::Permissive(a) => a.limit(request, authned, query),
            UnionAuthorizer::Perm(p) => p.limit(request, authned, query),
            UnionAuthorizer::Readonly(r) => r.limit(request, authned, query),
        }
    }
}
