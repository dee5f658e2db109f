use std::cell::Cell;
use std::collections::HashSet;

use crate::{Principal, Request, Resource, ResourceMeta};

/// A request double exposing only its method.
pub struct TestRequest {
    method: String,
}

impl TestRequest {
    pub fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
        }
    }
}

impl Request for TestRequest {
    fn method(&self) -> &str {
        &self.method
    }
}

/// A principal double holding a fixed permission set and counting how often
/// it is consulted.
pub struct TestUser {
    perms: HashSet<String>,
    checks: Cell<usize>,
}

impl TestUser {
    pub fn new(perms: &[&str]) -> Self {
        Self {
            perms: perms.iter().map(|p| p.to_string()).collect(),
            checks: Cell::new(0),
        }
    }

    /// How many times has_perm was called on this principal.
    pub fn perm_checks(&self) -> usize {
        self.checks.get()
    }
}

impl Principal for TestUser {
    fn has_perm(&self, perm: &str) -> bool {
        self.checks.set(self.checks.get() + 1);
        self.perms.contains(perm)
    }
}

/// Metadata for the test resource: the `notes` namespace with
/// add/change/delete permission names for a note.
pub struct NoteMeta;

impl ResourceMeta for NoteMeta {
    fn app_label(&self) -> &str {
        "notes"
    }

    fn add_permission(&self) -> String {
        "add_note".to_string()
    }

    fn change_permission(&self) -> String {
        "change_note".to_string()
    }

    fn delete_permission(&self) -> String {
        "delete_note".to_string()
    }
}

/// A resource double whose check hook can be absent or return a fixed
/// decision.
pub struct TestNote {
    meta: NoteMeta,
    hook: Option<bool>,
}

impl TestNote {
    /// A note that defines no check hook of its own.
    pub fn without_hook() -> Self {
        Self {
            meta: NoteMeta,
            hook: None,
        }
    }

    /// A note whose check hook always returns the given decision.
    pub fn with_hook(decision: bool) -> Self {
        Self {
            meta: NoteMeta,
            hook: Some(decision),
        }
    }
}

impl Resource for TestNote {
    fn meta(&self) -> &dyn ResourceMeta {
        &self.meta
    }

    fn check(&self, _request: &dyn Request, _authned: Option<&dyn Principal>) -> Option<bool> {
        self.hook
    }
}
