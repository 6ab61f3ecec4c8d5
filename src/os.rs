//! Operating-system dimension.

use crate::engine::first_match;
use crate::error::UnsupportedPlatformError;
use crate::host::HostInfo;
use crate::normalize::normalize;
use crate::rules;

/// Operating system of a platform.
///
/// `unknown` is not a variant; the lenient entry points return
/// `Option<Os>` and the strict ones an error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    /// IBM AIX.
    Aix,
    /// Google Android. Distinct from [`Os::Linux`] even though Android
    /// hosts usually report a Linux-like name; a Dalvik/ART runtime
    /// signal is what separates them on a live host.
    Android,
    /// Apple Darwin (macOS, iOS).
    Darwin,
    /// DragonFly BSD.
    DragonflyBsd,
    /// FreeBSD.
    FreeBsd,
    /// Google Fuchsia.
    Fuchsia,
    /// Haiku.
    Haiku,
    /// HP-UX.
    Hpux,
    /// IBM i (OS/400).
    Ibmi,
    /// illumos.
    Illumos,
    /// Linux.
    Linux,
    /// NetBSD.
    NetBsd,
    /// OpenBSD.
    OpenBsd,
    /// Plan 9 from Bell Labs.
    Plan9,
    /// QNX.
    Qnx,
    /// Redox.
    Redox,
    /// Oracle Solaris (SunOS).
    Solaris,
    /// VxWorks.
    VxWorks,
    /// Microsoft Windows.
    Windows,
    /// z/OS.
    Zos,
}

impl Os {
    /// Every known operating system, in canonical-identifier order.
    pub const VALUES: [Os; 20] = [
        Os::Aix,
        Os::Android,
        Os::Darwin,
        Os::DragonflyBsd,
        Os::FreeBsd,
        Os::Fuchsia,
        Os::Haiku,
        Os::Hpux,
        Os::Ibmi,
        Os::Illumos,
        Os::Linux,
        Os::NetBsd,
        Os::OpenBsd,
        Os::Plan9,
        Os::Qnx,
        Os::Redox,
        Os::Solaris,
        Os::VxWorks,
        Os::Windows,
        Os::Zos,
    ];

    /// Canonical machine-readable identifier, always matching
    /// `[a-z][a-z0-9]*`.
    pub fn id(self) -> &'static str {
        match self {
            Os::Aix => "aix",
            Os::Android => "android",
            Os::Darwin => "darwin",
            Os::DragonflyBsd => "dragonflybsd",
            Os::FreeBsd => "freebsd",
            Os::Fuchsia => "fuchsia",
            Os::Haiku => "haiku",
            Os::Hpux => "hpux",
            Os::Ibmi => "ibmi",
            Os::Illumos => "illumos",
            Os::Linux => "linux",
            Os::NetBsd => "netbsd",
            Os::OpenBsd => "openbsd",
            Os::Plan9 => "plan9",
            Os::Qnx => "qnx",
            Os::Redox => "redox",
            Os::Solaris => "solaris",
            Os::VxWorks => "vxworks",
            Os::Windows => "windows",
            Os::Zos => "zos",
        }
    }

    /// Exact identifier lookup; no heuristics.
    pub fn from_id(value: &str) -> Option<Os> {
        Os::VALUES.into_iter().find(|os| os.id() == value)
    }

    /// Classifies arbitrary identifier text, leniently.
    ///
    /// Canonical identifiers resolve via the exact tier; everything else
    /// runs through the heuristic cascade. Returns `None` when nothing
    /// matches.
    pub fn classify(text: &str) -> Option<Os> {
        let token = normalize(text, false);
        if token.is_empty() {
            return None;
        }
        Os::from_id(&token).or_else(|| first_match(rules::os::rules(), &token))
    }

    /// Strict form of [`Os::classify`].
    pub fn try_classify(text: &str) -> Result<Os, UnsupportedPlatformError> {
        Os::classify(text).ok_or_else(|| UnsupportedPlatformError::new("operating system", text))
    }

    /// OS of the given host, leniently.
    ///
    /// A backslash path separator short-circuits to Windows before any
    /// text is inspected. Otherwise the stripped host name goes through
    /// the fast table — where a Linux name combined with a Dalvik-style
    /// VM name resolves to Android — and falls back to [`Os::classify`].
    pub fn current(host: &HostInfo) -> Option<Os> {
        if host.file_separator == '\\' {
            return Some(Os::Windows);
        }
        match normalize(&host.os_name, true).as_str() {
            "aix" => Some(Os::Aix),
            "linux" => Some(if host.vm_name.eq_ignore_ascii_case("dalvik") {
                Os::Android
            } else {
                Os::Linux
            }),
            "darwin" | "macos" | "macosx" => Some(Os::Darwin),
            "dragonflybsd" => Some(Os::DragonflyBsd),
            "freebsd" => Some(Os::FreeBsd),
            "fuchsia" => Some(Os::Fuchsia),
            "haiku" => Some(Os::Haiku),
            "hpux" => Some(Os::Hpux),
            "os400" => Some(Os::Ibmi),
            "illumos" => Some(Os::Illumos),
            "netbsd" => Some(Os::NetBsd),
            "openbsd" => Some(Os::OpenBsd),
            "plan9" => Some(Os::Plan9),
            "qnx" | "procnto" => Some(Os::Qnx),
            "redox" => Some(Os::Redox),
            "solaris" | "sunos" => Some(Os::Solaris),
            "vxworks" => Some(Os::VxWorks),
            "zos" => Some(Os::Zos),
            _ => Os::classify(&host.os_name),
        }
    }

    /// Strict form of [`Os::current`].
    pub fn try_current(host: &HostInfo) -> Result<Os, UnsupportedPlatformError> {
        Os::current(host)
            .ok_or_else(|| UnsupportedPlatformError::new("operating system", host.os_name.as_str()))
    }

    /// `.exe` on Windows, empty everywhere else.
    pub fn executable_extension(self) -> &'static str {
        if self == Os::Windows { ".exe" } else { "" }
    }

    /// `.lib` on Windows, `.so` everywhere else.
    pub fn link_library_extension(self) -> &'static str {
        if self == Os::Windows { ".lib" } else { ".so" }
    }

    /// `.dll` on Windows, `.dylib` on Darwin, `.so` everywhere else.
    pub fn shared_library_extension(self) -> &'static str {
        match self {
            Os::Windows => ".dll",
            Os::Darwin => ".dylib",
            _ => ".so",
        }
    }

    /// `.lib` on Windows, `.a` everywhere else.
    pub fn static_library_extension(self) -> &'static str {
        if self == Os::Windows { ".lib" } else { ".a" }
    }

    /// Appends [`Os::executable_extension`] to `path`.
    pub fn with_executable_extension(self, path: &str) -> String {
        format!("{path}{}", self.executable_extension())
    }

    /// Appends [`Os::link_library_extension`] to `path`.
    pub fn with_link_library_extension(self, path: &str) -> String {
        format!("{path}{}", self.link_library_extension())
    }

    /// Appends [`Os::shared_library_extension`] to `path`.
    pub fn with_shared_library_extension(self, path: &str) -> String {
        format!("{path}{}", self.shared_library_extension())
    }

    /// Appends [`Os::static_library_extension`] to `path`.
    pub fn with_static_library_extension(self, path: &str) -> String {
        format!("{path}{}", self.static_library_extension())
    }
}

impl std::fmt::Display for Os {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Os {
    type Err = UnsupportedPlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Os::from_id(s).ok_or_else(|| UnsupportedPlatformError::new("operating system", s))
    }
}
