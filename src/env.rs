//! C-runtime/ABI environment dimension.
//!
//! The environment is the odd dimension out: some operating systems pin
//! it outright, everything else is best-effort text sniffing over
//! whatever the probe returns. That is why `Platform` identity excludes
//! it — see the `platform` module.

use std::path::Path;

use crate::Os;
use crate::engine::first_match;
use crate::error::UnsupportedPlatformError;
use crate::normalize::normalize;
use crate::probe;
use crate::rules;

/// C-runtime/ABI family a platform's native binaries link against.
///
/// `unknown` is not a variant; the lenient entry points return
/// `Option<Env>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Env {
    /// Bionic (Android).
    Bionic,
    /// BSD libc.
    Bsdlibc,
    /// dietlibc.
    Dietlibc,
    /// GNU C Library.
    Glibc,
    /// klibc.
    Klibc,
    /// Microsoft Visual C++ runtime.
    Msvc,
    /// musl.
    Musl,
    /// Newlib.
    Newlib,
    /// µClibc / uClibc-ng.
    Uclibc,
}

impl Env {
    /// Every known environment, in canonical-identifier order.
    pub const VALUES: [Env; 9] = [
        Env::Bionic,
        Env::Bsdlibc,
        Env::Dietlibc,
        Env::Glibc,
        Env::Klibc,
        Env::Msvc,
        Env::Musl,
        Env::Newlib,
        Env::Uclibc,
    ];

    /// Canonical machine-readable identifier, always matching
    /// `[a-z][a-z0-9]*`.
    pub fn id(self) -> &'static str {
        match self {
            Env::Bionic => "bionic",
            Env::Bsdlibc => "bsdlibc",
            Env::Dietlibc => "dietlibc",
            Env::Glibc => "glibc",
            Env::Klibc => "klibc",
            Env::Msvc => "msvc",
            Env::Musl => "musl",
            Env::Newlib => "newlib",
            Env::Uclibc => "uclibc",
        }
    }

    /// Exact identifier lookup; no heuristics.
    pub fn from_id(value: &str) -> Option<Env> {
        Env::VALUES.into_iter().find(|env| env.id() == value)
    }

    /// Classifies arbitrary text (a probe banner, a triple, a filename),
    /// leniently.
    pub fn classify(text: &str) -> Option<Env> {
        let token = normalize(text, false);
        if token.is_empty() {
            return None;
        }
        first_match(rules::env::rules(), &token)
    }

    /// Strict form of [`Env::classify`].
    pub fn try_classify(text: &str) -> Result<Env, UnsupportedPlatformError> {
        Env::classify(text).ok_or_else(|| UnsupportedPlatformError::new("environment", text))
    }

    /// The environment `os` fixes unconditionally, if any.
    ///
    /// Android is always Bionic, the BSD family always BSD libc, and
    /// Windows always MSVC; for these no probe is needed (or consulted).
    pub fn fixed_for(os: Os) -> Option<Env> {
        match os {
            Os::Android => Some(Env::Bionic),
            Os::Darwin | Os::DragonflyBsd | Os::FreeBsd | Os::NetBsd | Os::OpenBsd => {
                Some(Env::Bsdlibc)
            }
            Os::Windows => Some(Env::Msvc),
            _ => None,
        }
    }

    /// Environment of the given OS on the running host, leniently.
    ///
    /// Expensive compared to the other dimensions whenever the OS does
    /// not fix the answer: a probe process is spawned (see
    /// [`probe::ldd_version`]). A failed probe yields `None`, never an
    /// error.
    pub fn current(os: Os) -> Option<Env> {
        Env::current_with(os, None)
    }

    /// [`Env::current`] with an explicit probe executable.
    pub fn current_with(os: Os, ldd: Option<&Path>) -> Option<Env> {
        Env::fixed_for(os).or_else(|| Env::classify(&probe::ldd_version(ldd)))
    }
}

impl std::fmt::Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Env {
    type Err = UnsupportedPlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Env::from_id(s).ok_or_else(|| UnsupportedPlatformError::new("environment", s))
    }
}
