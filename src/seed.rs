//! Process-wide random generator for reproducible experiments.
//!
//! There is exactly one generator per process. [`set_seed`] reseeds it and
//! affects every later draw made through [`with_rng`], from any thread.
//! There is no scoped or partial reseeding: code that needs an independent
//! stream should own its own `StdRng`.
//!
//! Until [`set_seed`] is first called the generator is seeded from OS
//! entropy, so draws are not reproducible.
//!
//! Reseeding while another thread is drawing is serialized by a lock, but
//! the interleaving of the two is not. Callers that share the generator
//! must order their reseed and draws themselves.

use std::sync::{LazyLock, Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;

static GLOBAL_RNG: LazyLock<Mutex<StdRng>> =
    LazyLock::new(|| Mutex::new(StdRng::from_os_rng()));

fn lock() -> MutexGuard<'static, StdRng> {
    // A panic inside `with_rng` leaves the generator in a usable state.
    GLOBAL_RNG.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Reseeds the process-wide generator.
///
/// Call before any draw to make subsequent draws reproducible. Calling
/// again with the same seed restarts the same stream.
pub fn set_seed(seed: u64) {
    *lock() = StdRng::seed_from_u64(seed);
    info!(seed, "reseeded process-wide generator");
}

/// Runs `f` with exclusive access to the process-wide generator.
///
/// # Example
///
/// ```
/// use rand::Rng;
/// use u_gantt::seed::{set_seed, with_rng};
///
/// set_seed(7);
/// let a: f64 = with_rng(|rng| rng.random());
/// set_seed(7);
/// let b: f64 = with_rng(|rng| rng.random());
/// assert_eq!(a, b);
/// ```
pub fn with_rng<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
    f(&mut lock())
}

/// Random permutation of `0..n` drawn from the process-wide generator.
pub fn shuffled_sequence(n: usize) -> Vec<usize> {
    let mut sequence: Vec<usize> = (0..n).collect();
    with_rng(|rng| sequence.shuffle(rng));
    sequence
}
