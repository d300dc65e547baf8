//! Contract-violation errors produced by [`Initializable`] operations.
//!
//! Both kinds are synchronous, recoverable failures: each one signals a
//! precondition the caller controls, and choosing a different operation or
//! value fully resolves it. The crate never treats either as fatal.
//!
//! [`Initializable`]: crate::Initializable

use core::fmt;

/// Advisory/error text for re-initializing an already-initialized wrapper.
pub(crate) const MSG_RE_INITIALIZE: &str =
    "Tried to re-initialize a variable that was already initialized. Use assignment ( = ) instead.";

/// Error text for reading a wrapper that holds no value.
pub(crate) const MSG_UNINITIALIZED_ACCESS: &str =
    "Tried to extract a variable that was never initialized.";

/// Failure kinds of the [`Initializable`] operation set.
///
/// [`Initializable`]: crate::Initializable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A read path ([`extract`], [`get`], or [`get_or_initialize`] without a
    /// value) was invoked on an uninitialized wrapper.
    ///
    /// [`extract`]: crate::Initializable::extract
    /// [`get`]: crate::Initializable::get
    /// [`get_or_initialize`]: crate::Initializable::get_or_initialize
    UninitializedAccess,

    /// [`initialize`] was invoked on an already-initialized wrapper whose
    /// type is registered with [`ReInitializationPolicy::Error`]. The wrapper
    /// is left untouched: original state and payload are preserved.
    ///
    /// [`initialize`]: crate::Initializable::initialize
    /// [`ReInitializationPolicy::Error`]: crate::ReInitializationPolicy::Error
    ReInitialize,
}

impl Error {
    /// Returns the static message for this error kind.
    #[inline]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UninitializedAccess => MSG_UNINITIALIZED_ACCESS,
            Self::ReInitialize => MSG_RE_INITIALIZE,
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.message()) }
}

impl core::error::Error for Error {}
