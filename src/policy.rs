//! Per-type re-initialization policies and the warn diagnostic channel.
//!
//! A policy is associated with a wrapped *type*, not with any single wrapper
//! instance: every `Initializable<T>` of the same `T` shares one rule. The
//! association lives in a process-wide table keyed by [`TypeId`], populated
//! during application setup and read-only thereafter.
//!
//! # Registration contract
//!
//! Register policies before the first operation runs on a wrapper of that
//! type. The table technically accepts later writes, but changing the policy
//! of a type whose wrappers are already live is a precondition violation and
//! the behavior of in-flight wrappers is unspecified.

use core::any::{TypeId, type_name};
use std::{io::Write as _, sync::LazyLock};

use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::error::MSG_RE_INITIALIZE;

/// Rule applied when [`initialize`] is called on an already-initialized
/// wrapper.
///
/// The policy governs only the initialize call path. Direct assignment
/// through the reference returned by [`get_or_initialize`] never consults it.
///
/// [`initialize`]: crate::Initializable::initialize
/// [`get_or_initialize`]: crate::Initializable::get_or_initialize
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReInitializationPolicy {
    /// Overwrite the payload and emit one advisory notification per call.
    /// This is the default for every type without a registered override.
    #[default]
    Warn,
    /// Reject the overwrite: the operation fails with
    /// [`Error::ReInitialize`](crate::Error::ReInitialize) and the wrapper
    /// keeps its original payload.
    Error,
    /// Overwrite the payload with no notification.
    Silent,
}

type PolicyMap = HashMap<TypeId, ReInitializationPolicy, ahash::RandomState>;

static POLICIES: LazyLock<RwLock<PolicyMap>> =
    LazyLock::new(|| RwLock::new(PolicyMap::with_hasher(ahash::RandomState::new())));

/// Registers `policy` for every `Initializable<T>` in the process.
///
/// Call during application setup, before any wrapper of `T` is operated on.
/// The last registration for a given `T` wins.
///
/// # Example
/// ```
/// use initializable::{Initializable, ReInitializationPolicy, register_policy};
///
/// struct Port(u16);
///
/// register_policy::<Port>(ReInitializationPolicy::Error);
///
/// let mut port = Initializable::initialized(Port(8080));
/// assert!(port.initialize(Port(9090)).is_err());
/// ```
pub fn register_policy<T: 'static>(policy: ReInitializationPolicy) {
    POLICIES.write().insert(TypeId::of::<T>(), policy);
}

/// Returns the policy registered for `T`, or
/// [`ReInitializationPolicy::Warn`] if none was registered.
///
/// Resolution is static per type: no wrapper value is inspected.
#[inline]
pub fn policy_of<T: 'static>() -> ReInitializationPolicy {
    POLICIES.read().get(&TypeId::of::<T>()).copied().unwrap_or_default()
}

/// Notification emitted when a `Warn`-policy wrapper is re-initialized.
///
/// Carries the wrapped type's name so a shared sink can tell which
/// instantiation triggered the advisory.
#[derive(Debug, Clone, Copy)]
pub struct WarnEvent {
    /// `core::any::type_name` of the wrapped type.
    pub type_name: &'static str,
    /// The advisory text.
    pub message: &'static str,
}

type WarnSink = Box<dyn Fn(&WarnEvent) + Send + Sync>;

static WARN_SINK: LazyLock<RwLock<Option<WarnSink>>> = LazyLock::new(|| RwLock::new(None));

/// Redirects `Warn`-policy notifications to `sink` instead of stderr.
///
/// Configuration-time concern, same as [`register_policy`]: install the sink
/// once during setup. Advisories are never failures; a sink must not panic.
pub fn set_warn_sink(sink: impl Fn(&WarnEvent) + Send + Sync + 'static) {
    *WARN_SINK.write() = Some(Box::new(sink));
}

/// Emits the re-initialization advisory for `T` through the configured sink,
/// falling back to a single stderr line.
pub(crate) fn emit_warn<T>() {
    let event = WarnEvent { type_name: type_name::<T>(), message: MSG_RE_INITIALIZE };
    #[cfg(feature = "tracing")]
    tracing::warn!(wrapped_type = event.type_name, "{}", event.message);
    match &*WARN_SINK.read() {
        Some(sink) => sink(&event),
        None => {
            let _ = writeln!(
                std::io::stderr(),
                "[initializable] {}: {}",
                event.type_name,
                event.message
            );
        }
    }
}
