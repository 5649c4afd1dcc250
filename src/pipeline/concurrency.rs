// src/pipeline/concurrency.rs
//! Scheduling of the two independent artifacts of one render.
//!
//! The SVG preview and the PDF page share nothing but the read-only plan, so
//! they can be produced side by side. With the `rayon-executor` feature the
//! parallel mode uses `rayon::join`; without it both modes run in order.

use super::config::ExecutionMode;

/// Runs `a` and `b` according to `mode` and returns both results.
pub(crate) fn join<A, B, RA, RB>(mode: ExecutionMode, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    match mode {
        ExecutionMode::Parallel => join_parallel(a, b),
        ExecutionMode::Sequential => (a(), b()),
    }
}

#[cfg(feature = "rayon-executor")]
fn join_parallel<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

#[cfg(not(feature = "rayon-executor"))]
fn join_parallel<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    log::trace!("rayon-executor disabled; rendering sequentially");
    (a(), b())
}
