//! Host introspection context.

/// Read-only snapshot of the ambient properties the `current`-style
/// classifiers consult.
///
/// The classifiers never read globals themselves; they take a `HostInfo`
/// so that tests (and embedders with out-of-band knowledge) can
/// substitute any host they like. [`HostInfo::detect`] builds the
/// snapshot for the running process. All fields are immutable for a
/// process's lifetime, so detecting once and reusing the value is safe.
#[derive(Debug, Clone)]
pub struct HostInfo {
    /// OS-name-like property, e.g. `"linux"` or `"Mac OS X"`.
    pub os_name: String,
    /// Machine-architecture-like property, e.g. `"x86_64"`.
    pub arch_name: String,
    /// Path-component separator. A backslash is the strongest Windows
    /// signal there is and bypasses all text heuristics.
    pub file_separator: char,
    /// Name of the managed runtime, if any. A Dalvik/ART-style value
    /// turns a Linux host into an Android one.
    pub vm_name: String,
    /// Pointer width the process was compiled for, in bits. Recovers
    /// bitness when `arch_name` yields an unknown family.
    pub pointer_width: Option<u32>,
}

impl HostInfo {
    /// Snapshot of the running process's host properties.
    pub fn detect() -> Self {
        Self {
            os_name: std::env::consts::OS.to_string(),
            arch_name: std::env::consts::ARCH.to_string(),
            file_separator: std::path::MAIN_SEPARATOR,
            vm_name: String::new(),
            pointer_width: Some(if cfg!(target_pointer_width = "64") { 64 } else { 32 }),
        }
    }
}
