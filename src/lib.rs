//! # Initializable - Checked Deferred Initialization
//!
//! A two-state wrapper that tracks whether a value has been assigned, for
//! code where "not set yet" must be provable instead of encoded in a sentinel
//! (`-1`, empty string, null). A wrapper is either `Uninitialized` or
//! `Initialized` with a payload; reading an absent payload is a typed,
//! recoverable error, never a default value.
//!
//! Unlike `Option<T>`, re-assignment is governed by a per-type
//! [`ReInitializationPolicy`]: initializing an already-initialized wrapper
//! can overwrite silently, overwrite with an advisory notification (the
//! default), or fail outright while preserving the original value. The
//! policy is a configuration-time, process-wide association with the wrapped
//! *type*, so staged-construction code keeps one rule per field type without
//! threading configuration through every call site.
//!
//! ```
//! use initializable::Initializable;
//!
//! struct Card {
//!     sender: String,
//!     message: Initializable<String>,
//! }
//!
//! let mut card = Card { sender: "Mom".into(), message: Initializable::uninitialized() };
//!
//! // Reading before assignment is an error, not a default.
//! assert!(card.message.get().is_err());
//!
//! card.message.initialize("Happy Birthday!".into())?;
//! assert_eq!(card.message.get()?, "Happy Birthday!");
//! # Ok::<(), initializable::Error>(())
//! ```
//!
//! ## Choosing the Right Tool
//!
//! | Type | Choose For | Re-assignment |
//! |------|------------|---------------|
//! | `Option<T>` | Plain optionality | Unrestricted |
//! | `OnceCell<T>` / `OnceLock<T>` | Write-once lazy init | Rejected, value returned |
//! | **`Initializable<T>`** | Staged construction with a per-type rule | Policy-governed |
//!
//! ## Concurrency
//!
//! A wrapper is single-threaded by design: operations take `&self`/`&mut
//! self` and Rust's borrow rules are the only synchronization. The policy
//! table and warn sink are the sole process-wide state; both are write-once
//! configuration consulted read-only afterwards (see [`register_policy`]).

pub mod error;
pub mod policy;

pub use error::Error;
pub use policy::{ReInitializationPolicy, WarnEvent, policy_of, register_policy, set_warn_sink};

/// A value that is either not yet assigned or initialized with a payload.
///
/// There is no third state: construction goes through
/// [`uninitialized`](Self::uninitialized) or
/// [`initialized`](Self::initialized), and every mutation is one of the
/// defined operations. The payload is owned exclusively by the wrapper and
/// dropped with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Initializable<T> {
    /// No payload present. Reads fail with [`Error::UninitializedAccess`].
    Uninitialized,
    /// Payload present.
    Initialized(T),
}

impl<T> Default for Initializable<T> {
    /// An uninitialized wrapper, matching deferred-field declarations.
    #[inline]
    fn default() -> Self { Self::Uninitialized }
}

impl<T> From<T> for Initializable<T> {
    #[inline]
    fn from(value: T) -> Self { Self::Initialized(value) }
}

impl<T> Initializable<T> {
    /// Creates a wrapper with no payload.
    #[inline]
    #[must_use]
    pub const fn uninitialized() -> Self { Self::Uninitialized }

    /// Creates a wrapper already holding `value`.
    ///
    /// Convenience for fields whose value is known at construction; the
    /// wrapper behaves exactly as if it had been initialized once.
    #[inline]
    #[must_use]
    pub const fn initialized(value: T) -> Self { Self::Initialized(value) }

    /// Returns `true` iff a payload is present. Pure, no side effects.
    #[inline]
    #[must_use]
    pub const fn is_initialized(&self) -> bool { matches!(self, Self::Initialized(_)) }

    /// Returns a shared reference to the payload.
    ///
    /// # Errors
    /// [`Error::UninitializedAccess`] if no payload is present.
    #[inline]
    pub fn get(&self) -> Result<&T, Error> {
        match self {
            Self::Initialized(value) => Ok(value),
            Self::Uninitialized => Err(Error::UninitializedAccess),
        }
    }

    /// Consumes the wrapper and returns the payload.
    ///
    /// Never substitutes a default or sentinel: an absent payload is an
    /// error the caller must handle.
    ///
    /// # Errors
    /// [`Error::UninitializedAccess`] if no payload is present.
    #[inline]
    pub fn extract(self) -> Result<T, Error> {
        match self {
            Self::Initialized(value) => Ok(value),
            Self::Uninitialized => Err(Error::UninitializedAccess),
        }
    }
}

impl<T: 'static> Initializable<T> {
    /// Sets the payload, consulting the re-initialization policy for `T` if
    /// one is already present.
    ///
    /// On an uninitialized wrapper this always succeeds and transitions to
    /// `Initialized`. On an initialized wrapper the registered
    /// [`ReInitializationPolicy`] decides:
    ///
    /// - `Silent`: overwrite, no notification.
    /// - `Warn` (default): overwrite and emit exactly one advisory through
    ///   the warn sink. The advisory is not a failure.
    /// - `Error`: fail with [`Error::ReInitialize`]; state and payload are
    ///   left untouched.
    ///
    /// Equality of old and new payload is irrelevant: re-initializing with
    /// the same value still takes the policy path.
    ///
    /// # Errors
    /// [`Error::ReInitialize`] under the `Error` policy on an initialized
    /// wrapper.
    pub fn initialize(&mut self, value: T) -> Result<(), Error> {
        match self {
            Self::Uninitialized => {
                *self = Self::Initialized(value);
                Ok(())
            }
            Self::Initialized(current) => match policy_of::<T>() {
                ReInitializationPolicy::Silent => {
                    *current = value;
                    Ok(())
                }
                ReInitializationPolicy::Warn => {
                    *current = value;
                    policy::emit_warn::<T>();
                    Ok(())
                }
                ReInitializationPolicy::Error => Err(Error::ReInitialize),
            },
        }
    }

    /// Returns a mutable reference to the payload, optionally initializing
    /// it first.
    ///
    /// With `Some(value)` this delegates to [`initialize`](Self::initialize)
    /// with its full policy behavior, then hands out the payload. With
    /// `None` it only reads: an initialized wrapper yields its payload, an
    /// uninitialized one fails.
    ///
    /// Writing through the returned reference is the sanctioned way to
    /// update an initialized value without touching the policy at all; the
    /// policy governs the initialize call path only.
    ///
    /// ```
    /// use initializable::Initializable;
    ///
    /// let mut count = Initializable::initialized(1u32);
    /// *count.get_or_initialize(None)? = 2;
    /// assert_eq!(count.extract()?, 2);
    /// # Ok::<(), initializable::Error>(())
    /// ```
    ///
    /// # Errors
    /// [`Error::UninitializedAccess`] with `None` on an uninitialized
    /// wrapper; [`Error::ReInitialize`] with `Some` under the `Error` policy
    /// on an initialized wrapper (state preserved).
    pub fn get_or_initialize(&mut self, value: Option<T>) -> Result<&mut T, Error> {
        if let Some(value) = value {
            self.initialize(value)?;
        }
        match self {
            Self::Initialized(value) => Ok(value),
            Self::Uninitialized => Err(Error::UninitializedAccess),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_and_predicate() {
        assert!(!Initializable::<u32>::uninitialized().is_initialized());
        assert!(Initializable::initialized(7u32).is_initialized());
        assert!(!Initializable::<String>::default().is_initialized());
        assert!(Initializable::from(true).is_initialized());
    }

    #[test]
    fn extract_returns_payload() {
        assert_eq!(Initializable::initialized(41u32).extract(), Ok(41));
        assert_eq!(
            Initializable::<u32>::uninitialized().extract(),
            Err(Error::UninitializedAccess)
        );
    }

    #[test]
    fn get_does_not_consume() {
        let wrapper = Initializable::initialized(String::from("kept"));
        assert_eq!(wrapper.get().unwrap(), "kept");
        assert_eq!(wrapper.get().unwrap(), "kept");
        assert_eq!(wrapper.extract().unwrap(), "kept");
    }

    #[test]
    fn initialize_transitions_uninitialized() {
        struct Marker(u32);

        let mut wrapper = Initializable::<Marker>::uninitialized();
        wrapper.initialize(Marker(1)).unwrap();
        assert!(wrapper.is_initialized());
        assert_eq!(wrapper.extract().unwrap().0, 1);
    }

    #[test]
    fn silent_policy_overwrites_repeatedly() {
        #[derive(Debug, PartialEq)]
        struct Quiet(u32);

        register_policy::<Quiet>(ReInitializationPolicy::Silent);

        let mut wrapper = Initializable::initialized(Quiet(0));
        wrapper.initialize(Quiet(1)).unwrap();
        wrapper.initialize(Quiet(1)).unwrap(); // same value still succeeds
        wrapper.initialize(Quiet(2)).unwrap();
        assert_eq!(wrapper.extract().unwrap(), Quiet(2));
    }

    #[test]
    fn error_policy_preserves_state() {
        #[derive(Debug, PartialEq)]
        struct Locked(&'static str);

        register_policy::<Locked>(ReInitializationPolicy::Error);

        let mut wrapper = Initializable::initialized(Locked("original"));
        assert_eq!(wrapper.initialize(Locked("overwrite")), Err(Error::ReInitialize));
        assert_eq!(wrapper.extract().unwrap(), Locked("original"));
    }

    #[test]
    fn error_policy_first_initialize_succeeds() {
        struct Once(u8);

        register_policy::<Once>(ReInitializationPolicy::Error);

        let mut wrapper = Initializable::<Once>::uninitialized();
        wrapper.initialize(Once(9)).unwrap();
        assert_eq!(wrapper.extract().unwrap().0, 9);
    }

    #[test]
    fn get_or_initialize_reads_existing() {
        let mut wrapper = Initializable::initialized(10u64);
        assert_eq!(*wrapper.get_or_initialize(None).unwrap(), 10);
        // No state change from the read.
        assert_eq!(wrapper.extract().unwrap(), 10);
    }

    #[test]
    fn get_or_initialize_without_value_requires_payload() {
        let mut wrapper = Initializable::<u64>::uninitialized();
        assert_eq!(wrapper.get_or_initialize(None), Err(Error::UninitializedAccess));
        assert!(!wrapper.is_initialized());
    }

    #[test]
    fn get_or_initialize_writes_through_reference() {
        let mut wrapper = Initializable::<u64>::uninitialized();
        *wrapper.get_or_initialize(Some(3)).unwrap() = 4;
        assert_eq!(wrapper.extract().unwrap(), 4);
    }

    #[test]
    fn get_or_initialize_initializes_regardless_of_policy() {
        #[derive(Debug, PartialEq)]
        struct Strict(u32);

        register_policy::<Strict>(ReInitializationPolicy::Error);

        let mut wrapper = Initializable::<Strict>::uninitialized();
        assert_eq!(*wrapper.get_or_initialize(Some(Strict(5))).unwrap(), Strict(5));
    }

    #[test]
    fn get_or_initialize_propagates_reinitialize_error() {
        #[derive(Debug, PartialEq)]
        struct Sealed(u32);

        register_policy::<Sealed>(ReInitializationPolicy::Error);

        let mut wrapper = Initializable::initialized(Sealed(1));
        assert_eq!(wrapper.get_or_initialize(Some(Sealed(2))), Err(Error::ReInitialize));
        assert_eq!(wrapper.extract().unwrap(), Sealed(1));
    }
}
