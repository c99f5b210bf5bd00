//! Logout reset hooks.
//!
//! DESIGN
//! ======
//! Logging out must leave no trace of the previous session in any other
//! client state. Each dependent subsystem registers a hook; the auth store
//! runs every hook once per logout, in registration order.

#[cfg(test)]
#[path = "reset_test.rs"]
mod reset_test;

use std::fmt;
use std::sync::Arc;

type Hook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Default)]
pub struct ResetHooks {
    hooks: Vec<(&'static str, Hook)>,
}

impl ResetHooks {
    pub fn register<F>(&mut self, name: &'static str, hook: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.hooks.push((name, Arc::new(hook)));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn run(&self) {
        for (name, hook) in &self.hooks {
            log::debug!("running reset hook {name}");
            hook();
        }
    }
}

impl fmt::Debug for ResetHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.hooks.iter().map(|(name, _)| name)).finish()
    }
}
