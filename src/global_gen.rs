//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{Error, Params, TimeUuid, Uuid};
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
///
/// The generator state is consistent between calls, so a lock poisoned by a panicking caller is
/// taken over as is.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv1 object from the current time with random node and clock identifiers.
///
/// This function employs a global generator whose tick counter guarantees distinct timestamps
/// for up to 10,000 UUIDs generated within the same millisecond across the process. On Unix,
/// this function resets the generator when the process ID changes (i.e., upon process forks) to
/// prevent collisions across processes.
///
/// # Examples
///
/// ```rust
/// let uuid = timeuuid::time_uuid();
/// println!("{}", uuid); // e.g., "9f2952f3-c6a3-11ea-8802-080607050309"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte array
/// ```
pub fn time_uuid() -> TimeUuid {
    lock_global_gen().get_mut().generate()
}

/// Generates a UUIDv1 object from optional field values using the global generator.
///
/// See [`V1Generator::generate_with`](crate::V1Generator::generate_with) for how unset fields are
/// filled in.
///
/// # Examples
///
/// ```rust
/// use timeuuid::{time_uuid_with, Params};
///
/// let uuid = time_uuid_with(&Params::new().node_id("host01").clock_id("ab"))?;
/// assert_eq!(uuid.node_id_text(), "host01");
/// # Ok::<(), timeuuid::Error>(())
/// ```
pub fn time_uuid_with(params: &Params<'_>) -> Result<TimeUuid, Error> {
    lock_global_gen().get_mut().generate_with(params)
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = timeuuid::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
pub fn uuid4() -> Uuid {
    lock_global_gen().get_mut().generate_v4()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{RandSource, StdSystemTime, V1Generator};

    /// The type alias for the random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    #[derive(Debug)]
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl RandSource for GlobalGenRng {
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand::RngCore::fill_bytes(&mut self.0, dest);
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: V1Generator<GlobalGenRng, StdSystemTime>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            let core = ChaCha12Core::from_rng(OsRng)
                .expect("timeuuid: could not initialize global generator");
            log::debug!("initialized global generator");
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: V1Generator::new(GlobalGenRng(ReseedingRng::new(
                    core,
                    1024 * 64,
                    OsRng,
                ))),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`V1Generator`] instance, resetting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut V1Generator<GlobalGenRng, StdSystemTime> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                log::debug!("process id changed; resetting global generator");
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}
