//! One-shot deferred callbacks on the browser event loop.
//!
//! Outside the browser there is no event loop to defer onto, so the callback
//! is dropped without running.

/// Run `f` once after `ms` milliseconds.
pub fn after<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_timers::callback::Timeout::new(ms, f).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ms, f);
    }
}
