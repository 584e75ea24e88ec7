//! Cancellable delayed navigation for error paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! Several screens surface an error message and then navigate away after a
//! short pause. The guard ties each pending navigation to the view that
//! scheduled it, so a view that unmounts first can never fire a stale
//! redirect.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Pause between surfacing an error message and navigating away.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Cancellation token for the timed navigations owned by one view.
#[derive(Clone, Debug)]
pub struct RedirectGuard {
    alive: Arc<AtomicBool>,
}

impl RedirectGuard {
    /// Detached guard; `cancel` is the only way to stop it.
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Guard that cancels automatically when the current view unmounts.
    /// Must be called during component setup so the cleanup registers
    /// against the right owner.
    pub fn for_current_view() -> Self {
        let guard = Self::new();
        let alive = guard.alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
        guard
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Navigate to `path` after `delay` unless the guard is cancelled first.
    pub fn redirect_after<F>(&self, navigate: F, path: &str, delay: Duration)
    where
        F: Fn(&str, NavigateOptions) + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let alive = self.alive.clone();
            let path = path.to_owned();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                if alive.load(Ordering::Relaxed) {
                    navigate(&path, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (navigate, path, delay);
        }
    }
}

impl Default for RedirectGuard {
    fn default() -> Self {
        Self::new()
    }
}
