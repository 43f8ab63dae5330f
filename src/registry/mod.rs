//! Capability-gated method registry.
//!
//! This module provides the extension surface: a named method table whose
//! entries are thin pass-throughs to the range primitives. Which methods
//! exist is decided in two steps, mirroring how an extension probes its
//! host at build time:
//!
//! 1. Each primitive wrapper is compiled only when its cargo feature is
//!    enabled (`construct-range`, `decompose-range`, `normalize-beg-len`).
//! 2. At startup a [`CapabilityTable`] is resolved once from the compiled
//!    set, and [`Registry::install`] registers only the methods the table
//!    reports as available.
//!
//! Dispatch through [`Registry::call`] checks arity and then relays to the
//! primitive; errors from the primitives propagate unchanged.

pub mod methods;

use crate::core::Value;
use crate::error::{RegistryError, Result};
use serde::Serialize;
use std::fmt;

/// The host primitives this crate can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// Range construction (`range_new`).
    ConstructRange,
    /// Range decomposition (`range_values`).
    DecomposeRange,
    /// Range to offset/length normalization (`range_beg_len`).
    NormalizeBegLen,
}

impl Capability {
    /// All capabilities, in registration order.
    pub const ALL: [Self; 3] = [
        Self::ConstructRange,
        Self::DecomposeRange,
        Self::NormalizeBegLen,
    ];

    /// The capability's feature name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ConstructRange => "construct-range",
            Self::DecomposeRange => "decompose-range",
            Self::NormalizeBegLen => "normalize-beg-len",
        }
    }

    /// The registry method name this capability backs.
    #[must_use]
    pub const fn method_name(self) -> &'static str {
        match self {
            Self::ConstructRange => "range_new",
            Self::DecomposeRange => "range_values",
            Self::NormalizeBegLen => "range_beg_len",
        }
    }

    /// Whether the wrapper for this capability was compiled in.
    const fn compiled(self) -> bool {
        match self {
            Self::ConstructRange => cfg!(feature = "construct-range"),
            Self::DecomposeRange => cfg!(feature = "decompose-range"),
            Self::NormalizeBegLen => cfg!(feature = "normalize-beg-len"),
        }
    }
}

/// Availability of each capability, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityTable {
    entries: Vec<CapabilityEntry>,
}

/// One row of the capability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapabilityEntry {
    /// The capability.
    pub capability: Capability,
    /// Whether the host provides it.
    pub available: bool,
}

impl CapabilityTable {
    /// Detects the compiled capability set.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            entries: Capability::ALL
                .into_iter()
                .map(|capability| CapabilityEntry {
                    capability,
                    available: capability.compiled(),
                })
                .collect(),
        }
    }

    /// Returns a copy of the table with one capability marked
    /// unavailable, for hosts that lack the primitive at runtime.
    #[must_use]
    pub fn without(mut self, capability: Capability) -> Self {
        for entry in &mut self.entries {
            if entry.capability == capability {
                entry.available = false;
            }
        }
        self
    }

    /// Whether a capability is available.
    #[must_use]
    pub fn is_available(&self, capability: Capability) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.capability == capability && entry.available)
    }

    /// The table rows, in registration order.
    #[must_use]
    pub fn entries(&self) -> &[CapabilityEntry] {
        &self.entries
    }
}

impl Default for CapabilityTable {
    fn default() -> Self {
        Self::detect()
    }
}

/// Argument count contract for a registered method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// An inclusive argument count range (the host encodes this as -1).
    Between(usize, usize),
}

impl Arity {
    /// Whether an argument count satisfies this arity.
    #[must_use]
    pub const fn accepts(self, argc: usize) -> bool {
        match self {
            Self::Exact(n) => argc == n,
            Self::Between(min, max) => argc >= min && argc <= max,
        }
    }

    /// The host's integer encoding: the exact count, or -1 for variadic.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn host_flag(self) -> i64 {
        match self {
            Self::Exact(n) => n as i64,
            Self::Between(..) => -1,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Between(min, max) => write!(f, "{min}..{max}"),
        }
    }
}

/// A pass-through method: name, arity, and the wrapped primitive.
type MethodFn = fn(&[Value]) -> Result<Value>;

/// A registered method.
pub struct Method {
    /// Method name at the dispatch surface.
    pub name: &'static str,
    /// Declared arity, checked before dispatch.
    pub arity: Arity,
    /// The capability this method exposes.
    pub capability: Capability,
    func: MethodFn,
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("capability", &self.capability)
            .finish_non_exhaustive()
    }
}

/// The installed method table.
///
/// # Examples
///
/// ```
/// use rangekit_rs::core::Value;
/// use rangekit_rs::registry::Registry;
///
/// let registry = Registry::with_defaults();
/// let result = registry.call("range_new", &[Value::Int(1), Value::Int(5)]).unwrap();
/// assert_eq!(result.to_string(), "1..5");
/// ```
#[derive(Debug)]
pub struct Registry {
    methods: Vec<Method>,
}

impl Registry {
    /// Installs the methods the capability table reports available.
    ///
    /// This is the load-time registration hook: each method is added only
    /// when its wrapper was compiled and the table marks it available.
    #[must_use]
    #[cfg_attr(
        not(any(
            feature = "construct-range",
            feature = "decompose-range",
            feature = "normalize-beg-len"
        )),
        allow(unused_variables, unused_mut)
    )]
    pub fn install(table: &CapabilityTable) -> Self {
        let mut methods = Vec::new();

        #[cfg(feature = "construct-range")]
        if table.is_available(Capability::ConstructRange) {
            methods.push(Method {
                name: Capability::ConstructRange.method_name(),
                arity: Arity::Between(2, 3),
                capability: Capability::ConstructRange,
                func: methods::range_new,
            });
        }

        #[cfg(feature = "decompose-range")]
        if table.is_available(Capability::DecomposeRange) {
            methods.push(Method {
                name: Capability::DecomposeRange.method_name(),
                arity: Arity::Exact(1),
                capability: Capability::DecomposeRange,
                func: methods::range_values,
            });
        }

        #[cfg(feature = "normalize-beg-len")]
        if table.is_available(Capability::NormalizeBegLen) {
            methods.push(Method {
                name: Capability::NormalizeBegLen.method_name(),
                arity: Arity::Exact(5),
                capability: Capability::NormalizeBegLen,
                func: methods::range_beg_len,
            });
        }

        Self { methods }
    }

    /// Installs from the detected capability table.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::install(&CapabilityTable::detect())
    }

    /// Looks up a method by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|method| method.name == name)
    }

    /// Dispatches a call through the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownMethod`] for uninstalled names,
    /// [`RegistryError::WrongArity`] when the argument count does not
    /// satisfy the method's arity, and otherwise whatever the underlying
    /// primitive returns, unchanged.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let method = self.get(name).ok_or_else(|| RegistryError::UnknownMethod {
            name: name.to_string(),
        })?;
        if !method.arity.accepts(args.len()) {
            return Err(RegistryError::WrongArity {
                name: method.name.to_string(),
                expected: method.arity.to_string(),
                got: args.len(),
            }
            .into());
        }
        (method.func)(args)
    }

    /// Installed method names, in registration order.
    #[must_use]
    pub fn method_names(&self) -> Vec<&'static str> {
        self.methods.iter().map(|method| method.name).collect()
    }

    /// Installed methods, in registration order.
    #[must_use]
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Number of installed methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether no methods are installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
