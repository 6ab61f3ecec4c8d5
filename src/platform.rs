//! Platform aggregate and canonical-identifier codec.

use std::path::Path;

use crate::arch::Arch;
use crate::error::UnsupportedPlatformError;
use crate::host::HostInfo;
use crate::os::Os;
use crate::probe;

/// An operating system paired with an architecture.
///
/// Environment is deliberately not part of a platform's identity:
/// determining it may require spawning a process, and a single platform
/// can validly support several environments at once (a Linux host
/// running both glibc- and musl-linked binaries) with no way to name
/// *the* one. Classify it separately via [`crate::Env`].
///
/// Equality, ordering, and hashing are defined by the canonical
/// identifier alone — two platforms with the same id are the same
/// platform no matter how they were constructed.
#[derive(Debug, Clone)]
pub struct Platform {
    os: Option<Os>,
    arch: Arch,
    id: String,
}

impl Platform {
    /// Pairs `os` and `arch`; `None` renders as the `unknown` token.
    pub fn new(os: Option<Os>, arch: Arch) -> Platform {
        let id = match os {
            Some(os) => format!("{}-{}", os.id(), arch.id()),
            None => format!("unknown-{}", arch.id()),
        };
        Platform { os, arch, id }
    }

    pub fn os(&self) -> Option<Os> {
        self.os
    }

    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Canonical machine-readable identifier, e.g. `linux-x86-64` or
    /// `unknown-arm-32-be`. Always conforms to the grammar
    /// `segment "-" segment ["-" bitness ["-" endianness]]`, with
    /// `unknown` filling unresolved positions.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Classifies arbitrary identifier text, leniently.
    ///
    /// Runs both heuristic cascades over the same text and never fails;
    /// unresolved dimensions stay unknown.
    pub fn classify(text: &str) -> Platform {
        Platform::new(Os::classify(text), Arch::classify(text))
    }

    /// Strict heuristic classification: both dimensions must resolve.
    ///
    /// The error names the dimension that failed first.
    pub fn try_classify(text: &str) -> Result<Platform, UnsupportedPlatformError> {
        let os = Os::try_classify(text)?;
        let arch = Arch::try_classify(text)?;
        Ok(Platform::new(Some(os), arch))
    }

    /// Exact canonical-identifier decode; no heuristics.
    ///
    /// Accepts precisely the strings [`Platform::id`] produces,
    /// including the `unknown` forms, so
    /// `Platform::from_id(p.id()) == p` holds for every representable
    /// platform regardless of any future cascade change.
    pub fn from_id(value: &str) -> Result<Platform, UnsupportedPlatformError> {
        let unsupported = || UnsupportedPlatformError::new("platform", value);
        let (os_part, arch_part) = value.split_once('-').ok_or_else(unsupported)?;
        let os = match os_part {
            "unknown" => None,
            _ => Some(Os::from_id(os_part).ok_or_else(unsupported)?),
        };
        let arch = Arch::from_id(arch_part).ok_or_else(unsupported)?;
        Ok(Platform::new(os, arch))
    }

    /// Platform of the given host, leniently.
    pub fn current(host: &HostInfo) -> Platform {
        Platform::new(Os::current(host), Arch::current(host))
    }

    /// Strict form of [`Platform::current`].
    pub fn try_current(host: &HostInfo) -> Result<Platform, UnsupportedPlatformError> {
        let os = Os::try_current(host)?;
        let arch = Arch::try_current(host)?;
        Ok(Platform::new(Some(os), arch))
    }

    /// Whether the running host's default dynamic linker is musl.
    ///
    /// A musl `ldd` in `PATH` does not rule out other C libraries being
    /// installed, but it is a strong signal that native executables
    /// must be static or musl-linked. Never fails; a failed probe is
    /// simply `false`.
    pub fn has_musl() -> bool {
        Platform::has_musl_at(Path::new("ldd"))
    }

    /// [`Platform::has_musl`] with an explicit probe executable.
    pub fn has_musl_at(ldd: &Path) -> bool {
        regex!(r"\bmusl\b").is_match(&probe::ldd_version(Some(ldd)))
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

impl std::str::FromStr for Platform {
    type Err = UnsupportedPlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::from_id(s)
    }
}

impl PartialEq for Platform {
    fn eq(&self, other: &Platform) -> bool {
        self.id == other.id
    }
}

impl Eq for Platform {}

impl std::hash::Hash for Platform {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Platform {
    fn partial_cmp(&self, other: &Platform) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Platform {
    fn cmp(&self, other: &Platform) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}
