//! # Site
//!
//! The owner of every session store.
//!
//! Stores are registered once at startup with [`SiteBuilder::manage`] and
//! looked up by type with [`Site::state`]. Commands receive `&Site` and ask
//! for exactly the stores they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  site.state::<CartState>()                                              │
//! │       │                                                                 │
//! │       ├── managed?  ──► Ok(&CartState)                                  │
//! │       │                                                                 │
//! │       └── not managed ─► Err(STATE_NOT_MANAGED "CartState is not ...") │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Looking up an unmanaged store is always an error; there is no fallback
//! default.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use crate::error::ApiError;

type StateMap = HashMap<TypeId, (&'static str, Box<dyn Any + Send + Sync>)>;

/// Collects stores before the site starts serving commands.
#[derive(Default)]
pub struct SiteBuilder {
    states: StateMap,
}

impl SiteBuilder {
    /// Registers a store. Registering the same type again replaces it.
    pub fn manage<T>(mut self, state: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        let name = type_name::<T>();
        if self
            .states
            .insert(TypeId::of::<T>(), (name, Box::new(state)))
            .is_some()
        {
            warn!(state = name, "state registered twice, keeping the newest");
        }
        self
    }

    pub fn build(self) -> Site {
        Site {
            states: self.states,
        }
    }
}

/// The running site and its stores.
pub struct Site {
    states: StateMap,
}

impl Site {
    pub fn builder() -> SiteBuilder {
        SiteBuilder::default()
    }

    /// Returns the managed store of type `T`.
    ///
    /// ## Errors
    /// `STATE_NOT_MANAGED` if `T` was never passed to `manage`.
    pub fn state<T>(&self) -> Result<&T, ApiError>
    where
        T: Send + Sync + 'static,
    {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|(_, state)| state.downcast_ref::<T>())
            .ok_or_else(|| ApiError::state_not_managed(type_name::<T>()))
    }
}

impl fmt::Debug for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.states.values().map(|(name, _)| *name).collect();
        names.sort_unstable();
        f.debug_struct("Site").field("states", &names).finish()
    }
}

impl fmt::Debug for SiteBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteBuilder")
            .field("states", &self.states.len())
            .finish()
    }
}
