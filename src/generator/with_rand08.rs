//! Integration with `rand` (v0.8) crate.

use super::{RandSource, V1Generator};
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest);
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<T: RngCore> V1Generator<Adapter<T>, super::StdSystemTime> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate and the system clock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timeuuid::V1Generator;
    ///
    /// let mut g = V1Generator::with_rand08(rand::thread_rng());
    /// println!("{}", g.generate());
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}

impl<T: RngCore, S: super::TimeSource> V1Generator<Adapter<T>, S> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate and a custom clock.
    pub const fn with_rand08_and_time_source(rng: T, time_source: S) -> Self {
        Self::with_rand_and_time_sources(Adapter(rng), time_source)
    }
}
