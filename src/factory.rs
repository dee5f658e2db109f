use log::debug;

use crate::config::{AuthzConfig, AuthzPolicy};
use crate::perm::PermAuthorizer;
use crate::permissive::PermissiveAuthorizer;
use crate::readonly::ReadonlyAuthorizer;
use crate::union::UnionAuthorizer;

pub struct AuthzFactory;

impl AuthzFactory {
    pub fn new() -> Self {
        Self
    }

    /// Builds the authorizer selected by the configuration.
    pub fn build_authorizer(&self, cfg: &AuthzConfig) -> UnionAuthorizer {
        debug!("Building {:?} authorizer", cfg.policy);
        match cfg.policy {
            AuthzPolicy::Permissive => {
                UnionAuthorizer::Permissive(PermissiveAuthorizer::new(cfg.require_authned))
            }
            AuthzPolicy::Perm => UnionAuthorizer::Perm(PermAuthorizer::new(
                cfg.require_authned,
                cfg.perms,
                cfg.default_if_no_method,
            )),
            AuthzPolicy::Readonly => {
                UnionAuthorizer::Readonly(ReadonlyAuthorizer::new(cfg.require_authned))
            }
        }
    }
}
