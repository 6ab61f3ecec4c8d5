//! Architecture dimension.

use crate::engine::first_match;
use crate::error::UnsupportedPlatformError;
use crate::host::HostInfo;
use crate::normalize::normalize;
use crate::rules;

/// Byte ordering of an architecture variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    /// Canonical identifier tag, `be` or `le`.
    pub fn id(self) -> &'static str {
        match self {
            Endianness::Big => "be",
            Endianness::Little => "le",
        }
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Architecture family, ignoring bitness and endianness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchFamily {
    Alpha,
    Arm,
    Itanium,
    M68k,
    Mips,
    Ppc,
    Riscv,
    S390,
    Sparc,
    Superh,
    X86,
    Unknown,
}

impl ArchFamily {
    pub fn id(self) -> &'static str {
        match self {
            ArchFamily::Alpha => "alpha",
            ArchFamily::Arm => "arm",
            ArchFamily::Itanium => "itanium",
            ArchFamily::M68k => "m68k",
            ArchFamily::Mips => "mips",
            ArchFamily::Ppc => "ppc",
            ArchFamily::Riscv => "riscv",
            ArchFamily::S390 => "s390",
            ArchFamily::Sparc => "sparc",
            ArchFamily::Superh => "superh",
            ArchFamily::X86 => "x86",
            ArchFamily::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ArchFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Architecture (family, bitness, endianness) of a platform.
///
/// The variant set is the explicit enumeration of legal combinations,
/// not the full cross product — x86 has no big-endian form, Alpha no
/// 32-bit one. Variants without an endianness tag carry their family's
/// default ordering: big for MIPS, PPC, SPARC, S390 and M68k, little
/// for everything else.
///
/// Unknown inputs still recover bitness when the token carries a bare
/// `32`/`64`, hence the three unknown variants.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    /// Unknown family, unknown bitness.
    Unknown,
    /// Unknown family, 32-bit.
    Unknown32,
    /// Unknown family, 64-bit.
    Unknown64,
    /// DEC Alpha, 64-bit.
    Alpha64,
    /// ARM v1+, 32-bit little-endian.
    Arm32,
    /// ARM v1+, 32-bit big-endian.
    Arm32Be,
    /// ARM v8+, 64-bit little-endian.
    Arm64,
    /// ARM v8+, 64-bit big-endian.
    Arm64Be,
    /// Itanium, 32-bit data model.
    Itanium32,
    /// Itanium, 64-bit.
    Itanium64,
    /// Motorola 68000, 32-bit.
    M68k32,
    /// MIPS, 32-bit big-endian.
    Mips32,
    /// MIPS, 32-bit little-endian.
    Mips32Le,
    /// MIPS, 64-bit big-endian.
    Mips64,
    /// MIPS, 64-bit little-endian.
    Mips64Le,
    /// PowerPC, 32-bit big-endian.
    Ppc32,
    /// PowerPC, 32-bit little-endian.
    Ppc32Le,
    /// PowerPC, 64-bit big-endian.
    Ppc64,
    /// PowerPC, 64-bit little-endian.
    Ppc64Le,
    /// RISC-V, 32-bit.
    Riscv32,
    /// RISC-V, 64-bit.
    Riscv64,
    /// IBM Z, 32-bit.
    S390_32,
    /// IBM Z, 64-bit.
    S390_64,
    /// SPARC, 32-bit.
    Sparc32,
    /// SPARC, 64-bit.
    Sparc64,
    /// SuperH, 32-bit little-endian.
    Superh32,
    /// SuperH, 32-bit big-endian.
    Superh32Be,
    /// x86, 32-bit.
    X86_32,
    /// x86, 64-bit.
    X86_64,
}

impl Arch {
    /// Every architecture variant, unknowns first, then canonical order.
    pub const VALUES: [Arch; 29] = [
        Arch::Unknown,
        Arch::Unknown32,
        Arch::Unknown64,
        Arch::Alpha64,
        Arch::Arm32,
        Arch::Arm32Be,
        Arch::Arm64,
        Arch::Arm64Be,
        Arch::Itanium32,
        Arch::Itanium64,
        Arch::M68k32,
        Arch::Mips32,
        Arch::Mips32Le,
        Arch::Mips64,
        Arch::Mips64Le,
        Arch::Ppc32,
        Arch::Ppc32Le,
        Arch::Ppc64,
        Arch::Ppc64Le,
        Arch::Riscv32,
        Arch::Riscv64,
        Arch::S390_32,
        Arch::S390_64,
        Arch::Sparc32,
        Arch::Sparc64,
        Arch::Superh32,
        Arch::Superh32Be,
        Arch::X86_32,
        Arch::X86_64,
    ];

    /// Canonical machine-readable identifier:
    /// `<family>-<bitness>[-<endianness>]`, with the endianness tag only
    /// on variants that differ from their family default.
    pub fn id(self) -> &'static str {
        match self {
            Arch::Unknown => "unknown-unknown",
            Arch::Unknown32 => "unknown-32",
            Arch::Unknown64 => "unknown-64",
            Arch::Alpha64 => "alpha-64",
            Arch::Arm32 => "arm-32",
            Arch::Arm32Be => "arm-32-be",
            Arch::Arm64 => "arm-64",
            Arch::Arm64Be => "arm-64-be",
            Arch::Itanium32 => "itanium-32",
            Arch::Itanium64 => "itanium-64",
            Arch::M68k32 => "m68k-32",
            Arch::Mips32 => "mips-32",
            Arch::Mips32Le => "mips-32-le",
            Arch::Mips64 => "mips-64",
            Arch::Mips64Le => "mips-64-le",
            Arch::Ppc32 => "ppc-32",
            Arch::Ppc32Le => "ppc-32-le",
            Arch::Ppc64 => "ppc-64",
            Arch::Ppc64Le => "ppc-64-le",
            Arch::Riscv32 => "riscv-32",
            Arch::Riscv64 => "riscv-64",
            Arch::S390_32 => "s390-32",
            Arch::S390_64 => "s390-64",
            Arch::Sparc32 => "sparc-32",
            Arch::Sparc64 => "sparc-64",
            Arch::Superh32 => "superh-32",
            Arch::Superh32Be => "superh-32-be",
            Arch::X86_32 => "x86-32",
            Arch::X86_64 => "x86-64",
        }
    }

    /// Exact identifier lookup; no heuristics.
    pub fn from_id(value: &str) -> Option<Arch> {
        Arch::VALUES.into_iter().find(|arch| arch.id() == value)
    }

    /// Classifies arbitrary identifier text, leniently.
    ///
    /// Two tiers: an exact table of host-runtime-reported spellings over
    /// the stripped token, then the ordered heuristic cascade over the
    /// dash-normalized token. Always returns a value; an unrecognized
    /// family with a recognizable `32`/`64` yields
    /// [`Arch::Unknown32`]/[`Arch::Unknown64`], anything else
    /// [`Arch::Unknown`].
    pub fn classify(text: &str) -> Arch {
        if let Some(arch) = Arch::from_host_token(&normalize(text, true)) {
            return arch;
        }
        first_match(rules::arch::rules(), &normalize(text, false)).unwrap_or(Arch::Unknown)
    }

    /// Strict form of [`Arch::classify`]: an unknown family is a
    /// failure even when bitness was recovered.
    pub fn try_classify(text: &str) -> Result<Arch, UnsupportedPlatformError> {
        match Arch::classify(text) {
            arch if arch.is_unknown() => {
                Err(UnsupportedPlatformError::new("architecture", text))
            }
            arch => Ok(arch),
        }
    }

    /// Architecture of the given host, leniently.
    ///
    /// Runs [`Arch::classify`] over the host's architecture property.
    /// The token-derived bitness of an unknown family is too simplistic
    /// to trust; the host knows what it was compiled for, so its pointer
    /// width wins whenever the family came back unknown.
    pub fn current(host: &HostInfo) -> Arch {
        let arch = Arch::classify(&host.arch_name);
        if arch.is_unknown() {
            match host.pointer_width {
                Some(32) => return Arch::Unknown32,
                Some(64) => return Arch::Unknown64,
                _ => {}
            }
        }
        arch
    }

    /// Strict form of [`Arch::current`].
    pub fn try_current(host: &HostInfo) -> Result<Arch, UnsupportedPlatformError> {
        match Arch::current(host) {
            arch if arch.is_unknown() => {
                Err(UnsupportedPlatformError::new("architecture", host.arch_name.as_str()))
            }
            arch => Ok(arch),
        }
    }

    /// Exact host-runtime token table, consulted before the cascade.
    /// Keys are stripped tokens as a JVM-style runtime or
    /// `std::env::consts::ARCH` reports them.
    fn from_host_token(token: &str) -> Option<Arch> {
        Some(match token {
            "alpha" => Arch::Alpha64,
            "arm" => Arch::Arm32,
            "arm64" | "aarch64" => Arch::Arm64,
            "ia64" => Arch::Itanium64,
            "m68k" => Arch::M68k32,
            "mips" => Arch::Mips32,
            "mipsel" => Arch::Mips32Le,
            "mips64" => Arch::Mips64,
            "mips64el" => Arch::Mips64Le,
            "ppc" | "powerpc" => Arch::Ppc32,
            "ppcle" => Arch::Ppc32Le,
            "ppc64" | "powerpc64" => Arch::Ppc64,
            "ppc64le" | "powerpc64le" => Arch::Ppc64Le,
            "riscv32" => Arch::Riscv32,
            "riscv64" => Arch::Riscv64,
            "s390" => Arch::S390_32,
            "s390x" => Arch::S390_64,
            "sparc" => Arch::Sparc32,
            "sparcv9" | "sparc64" => Arch::Sparc64,
            "sh" => Arch::Superh32,
            "shbe" => Arch::Superh32Be,
            "x8664" | "amd64" => Arch::X86_64,
            "x86" | "i386" | "i686" | "pentium" => Arch::X86_32,
            _ => return None,
        })
    }

    /// Family facet of this variant.
    pub fn family(self) -> ArchFamily {
        match self {
            Arch::Unknown | Arch::Unknown32 | Arch::Unknown64 => ArchFamily::Unknown,
            Arch::Alpha64 => ArchFamily::Alpha,
            Arch::Arm32 | Arch::Arm32Be | Arch::Arm64 | Arch::Arm64Be => ArchFamily::Arm,
            Arch::Itanium32 | Arch::Itanium64 => ArchFamily::Itanium,
            Arch::M68k32 => ArchFamily::M68k,
            Arch::Mips32 | Arch::Mips32Le | Arch::Mips64 | Arch::Mips64Le => ArchFamily::Mips,
            Arch::Ppc32 | Arch::Ppc32Le | Arch::Ppc64 | Arch::Ppc64Le => ArchFamily::Ppc,
            Arch::Riscv32 | Arch::Riscv64 => ArchFamily::Riscv,
            Arch::S390_32 | Arch::S390_64 => ArchFamily::S390,
            Arch::Sparc32 | Arch::Sparc64 => ArchFamily::Sparc,
            Arch::Superh32 | Arch::Superh32Be => ArchFamily::Superh,
            Arch::X86_32 | Arch::X86_64 => ArchFamily::X86,
        }
    }

    /// Word size in bits; `None` only for [`Arch::Unknown`].
    pub fn bitness(self) -> Option<u32> {
        match self {
            Arch::Unknown => None,
            Arch::Unknown32
            | Arch::Arm32
            | Arch::Arm32Be
            | Arch::Itanium32
            | Arch::M68k32
            | Arch::Mips32
            | Arch::Mips32Le
            | Arch::Ppc32
            | Arch::Ppc32Le
            | Arch::Riscv32
            | Arch::S390_32
            | Arch::Sparc32
            | Arch::Superh32
            | Arch::Superh32Be
            | Arch::X86_32 => Some(32),
            Arch::Unknown64
            | Arch::Alpha64
            | Arch::Arm64
            | Arch::Arm64Be
            | Arch::Itanium64
            | Arch::Mips64
            | Arch::Mips64Le
            | Arch::Ppc64
            | Arch::Ppc64Le
            | Arch::Riscv64
            | Arch::S390_64
            | Arch::Sparc64
            | Arch::X86_64 => Some(64),
        }
    }

    pub fn is_32bit(self) -> bool {
        self.bitness() == Some(32)
    }

    pub fn is_64bit(self) -> bool {
        self.bitness() == Some(64)
    }

    /// Byte ordering; `None` when the family is unknown.
    pub fn endianness(self) -> Option<Endianness> {
        match self {
            Arch::Unknown | Arch::Unknown32 | Arch::Unknown64 => None,
            Arch::Arm32Be
            | Arch::Arm64Be
            | Arch::M68k32
            | Arch::Mips32
            | Arch::Mips64
            | Arch::Ppc32
            | Arch::Ppc64
            | Arch::S390_32
            | Arch::S390_64
            | Arch::Sparc32
            | Arch::Sparc64
            | Arch::Superh32Be => Some(Endianness::Big),
            _ => Some(Endianness::Little),
        }
    }

    /// `true` for the three unknown-family variants.
    pub fn is_unknown(self) -> bool {
        matches!(self, Arch::Unknown | Arch::Unknown32 | Arch::Unknown64)
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Arch {
    type Err = UnsupportedPlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Arch::from_id(s).ok_or_else(|| UnsupportedPlatformError::new("architecture", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(arch_name: &str, pointer_width: Option<u32>) -> HostInfo {
        HostInfo {
            os_name: String::new(),
            arch_name: arch_name.to_string(),
            file_separator: '/',
            vm_name: String::new(),
            pointer_width,
        }
    }

    #[test]
    fn ids_round_trip() {
        for arch in Arch::VALUES {
            assert_eq!(Arch::from_id(arch.id()), Some(arch));
            assert_eq!(arch.id().parse::<Arch>().unwrap(), arch);
            assert_eq!(Arch::classify(arch.id()), arch, "classify({})", arch.id());
        }
    }

    #[test]
    fn x86_64_before_x86_32() {
        for alias in ["x86-64", "x86_64", "x8664", "amd64", "amd 64", "em64t", "ia32e", "x64", "i886", "i986", "win64"] {
            assert_eq!(Arch::classify(alias), Arch::X86_64, "{alias}");
        }
        for alias in ["x86", "i386", "i486", "i586", "i686", "ia32", "x32", "pentium", "win32", "win 32"] {
            assert_eq!(Arch::classify(alias), Arch::X86_32, "{alias}");
        }
    }

    #[test]
    fn fast_path_and_cascade_agree() {
        // `amd64` resolves in the exact tier, `amd 64` in the cascade;
        // both tiers must produce the same variant.
        assert_eq!(Arch::classify("amd64"), Arch::classify("amd 64"));
        assert_eq!(Arch::classify("x86_64"), Arch::classify("x86 64"));
        assert_eq!(Arch::classify("mipsel"), Arch::classify("mips el"));
        assert_eq!(Arch::classify("sparcv9"), Arch::classify("sparc v9"));
    }

    #[test]
    fn nvptx64_recovers_bitness_only() {
        assert_eq!(Arch::classify("nvptx64"), Arch::Unknown64);
    }

    #[test]
    fn arm_cascade() {
        assert_eq!(Arch::classify("aarch64be"), Arch::Arm64Be);
        assert_eq!(Arch::classify("aarch64_be"), Arch::Arm64Be);
        assert_eq!(Arch::classify("aarch eb 64"), Arch::Arm64Be);
        assert_eq!(Arch::classify("aarch64"), Arch::Arm64);
        assert_eq!(Arch::classify("arm64"), Arch::Arm64);
        assert_eq!(Arch::classify("armv8"), Arch::Arm64);
        assert_eq!(Arch::classify("armv8.2-a"), Arch::Arm64);
        assert_eq!(Arch::classify("armv10"), Arch::Arm64);
        assert_eq!(Arch::classify("arm64be"), Arch::Arm64Be);
        assert_eq!(Arch::classify("arm be 64"), Arch::Arm64Be);
        assert_eq!(Arch::classify("armeb"), Arch::Arm32Be);
        assert_eq!(Arch::classify("arm32be"), Arch::Arm32Be);
        assert_eq!(Arch::classify("arm eb 32"), Arch::Arm32Be);
        assert_eq!(Arch::classify("arm"), Arch::Arm32);
        assert_eq!(Arch::classify("armv7"), Arch::Arm32);
        assert_eq!(Arch::classify("armv5te"), Arch::Arm32);
        assert_eq!(Arch::classify("armel"), Arch::Arm32);
    }

    #[test]
    fn itanium_32_before_64() {
        assert_eq!(Arch::classify("ia64n"), Arch::Itanium32);
        assert_eq!(Arch::classify("ia6432"), Arch::Itanium32);
        assert_eq!(Arch::classify("ia64 32"), Arch::Itanium32);
        assert_eq!(Arch::classify("itanium 32"), Arch::Itanium32);
        assert_eq!(Arch::classify("ia64"), Arch::Itanium64);
        assert_eq!(Arch::classify("ia 64"), Arch::Itanium64);
        assert_eq!(Arch::classify("Itanium"), Arch::Itanium64);
    }

    #[test]
    fn ppc_cascade() {
        for alias in ["ppc64le", "powerpc64el", "power rs 64 le", "ppc le 64", "powerpc 64le"] {
            assert_eq!(Arch::classify(alias), Arch::Ppc64Le, "{alias}");
        }
        for alias in ["ppcle", "powerpcle", "power le", "ppc el 32"] {
            assert_eq!(Arch::classify(alias), Arch::Ppc32Le, "{alias}");
        }
        for alias in ["ppc64", "powerpc64", "power64", "power rs 64"] {
            assert_eq!(Arch::classify(alias), Arch::Ppc64, "{alias}");
        }
        for alias in ["ppc", "powerpc", "power", "power rs", "ppc32-linux-gcc"] {
            assert_eq!(Arch::classify(alias), Arch::Ppc32, "{alias}");
        }
    }

    #[test]
    fn mips_cascade() {
        for alias in ["mips64el", "mips64le", "mipsisa64r6el", "mips el 64"] {
            assert_eq!(Arch::classify(alias), Arch::Mips64Le, "{alias}");
        }
        for alias in ["mipsel", "mipsisa32r6el", "mips le", "mips le 32"] {
            assert_eq!(Arch::classify(alias), Arch::Mips32Le, "{alias}");
        }
        assert_eq!(Arch::classify("mips64"), Arch::Mips64);
        assert_eq!(Arch::classify("mipsisa64"), Arch::Mips64);
        assert_eq!(Arch::classify("mips"), Arch::Mips32);
        assert_eq!(Arch::classify("mips32-linux-gcc"), Arch::Mips32);
    }

    #[test]
    fn remaining_families() {
        assert_eq!(Arch::classify("alpha"), Arch::Alpha64);
        assert_eq!(Arch::classify("DEC Alpha 64"), Arch::Alpha64);
        assert_eq!(Arch::classify("m68k"), Arch::M68k32);
        assert_eq!(Arch::classify("m68000"), Arch::M68k32);
        assert_eq!(Arch::classify("s390"), Arch::S390_32);
        assert_eq!(Arch::classify("IBM Z"), Arch::S390_32);
        assert_eq!(Arch::classify("s390x"), Arch::S390_64);
        assert_eq!(Arch::classify("s390 64"), Arch::S390_64);
        assert_eq!(Arch::classify("IBM Z 64"), Arch::S390_64);
        assert_eq!(Arch::classify("riscv"), Arch::Riscv32);
        assert_eq!(Arch::classify("risc-v 32"), Arch::Riscv32);
        assert_eq!(Arch::classify("riscv64"), Arch::Riscv64);
        assert_eq!(Arch::classify("riscv64-none-elf"), Arch::Riscv64);
        assert_eq!(Arch::classify("sparc"), Arch::Sparc32);
        assert_eq!(Arch::classify("SuperSPARC"), Arch::Sparc32);
        assert_eq!(Arch::classify("sparcv9"), Arch::Sparc64);
        assert_eq!(Arch::classify("sparc v10"), Arch::Sparc64);
        assert_eq!(Arch::classify("UltraSPARC"), Arch::Sparc64);
        assert_eq!(Arch::classify("ultrasparc2-sun-solaris2.10"), Arch::Sparc64);
        assert_eq!(Arch::classify("superh"), Arch::Superh32);
        assert_eq!(Arch::classify("sh 32"), Arch::Superh32);
        assert_eq!(Arch::classify("superh be"), Arch::Superh32Be);
        assert_eq!(Arch::classify("sh32be"), Arch::Superh32Be);
        assert_eq!(Arch::classify("sh eb32"), Arch::Superh32Be);
    }

    #[test]
    fn host_token_special_values() {
        // Bare `sh` is only trustworthy as a host-reported token; as a
        // free substring it would match half the shell scripts on earth.
        assert_eq!(Arch::classify("sh"), Arch::Superh32);
        assert_eq!(Arch::classify("shbe"), Arch::Superh32Be);
        assert_eq!(Arch::classify("script.sh"), Arch::Unknown);
    }

    #[test]
    fn unknown_inputs() {
        for garbage in ["", "bash", "ksh", "m680000", "shell", "zsh", "universal-darwin10-gcc"] {
            assert_eq!(Arch::classify(garbage), Arch::Unknown, "{garbage:?}");
        }
        for garbage in ["sh64", "sh 64", "nvptx64"] {
            assert_eq!(Arch::classify(garbage), Arch::Unknown64, "{garbage:?}");
        }
    }

    #[test]
    fn strict_rejects_every_unknown() {
        for garbage in ["", "bash", "nvptx64", "sh64", "m680000"] {
            let err = Arch::try_classify(garbage).unwrap_err();
            assert_eq!(err.aspect(), "architecture");
            assert_eq!(err.value(), garbage);
        }
    }

    #[test]
    fn strict_agrees_with_lenient_on_success() {
        for text in ["x86_64", "aarch64", "ppc64le", "sparc"] {
            assert_eq!(Arch::try_classify(text).unwrap(), Arch::classify(text));
        }
    }

    #[test]
    fn bitness_is_derivable_from_the_variant() {
        for arch in Arch::VALUES {
            let id = arch.id();
            match arch.bitness() {
                Some(32) => {
                    assert!(id.contains("32"), "{id}");
                    assert!(arch.is_32bit() && !arch.is_64bit(), "{id}");
                }
                Some(64) => {
                    assert!(id.contains("64"), "{id}");
                    assert!(arch.is_64bit() && !arch.is_32bit(), "{id}");
                }
                Some(_) => unreachable!(),
                None => {
                    assert_eq!(arch, Arch::Unknown);
                    assert!(!arch.is_32bit() && !arch.is_64bit());
                }
            }
        }
    }

    #[test]
    fn endianness_defaults() {
        assert_eq!(Arch::Arm32.endianness(), Some(Endianness::Little));
        assert_eq!(Arch::Arm64Be.endianness(), Some(Endianness::Big));
        assert_eq!(Arch::Mips32.endianness(), Some(Endianness::Big));
        assert_eq!(Arch::Mips64Le.endianness(), Some(Endianness::Little));
        assert_eq!(Arch::Ppc64.endianness(), Some(Endianness::Big));
        assert_eq!(Arch::Ppc64Le.endianness(), Some(Endianness::Little));
        assert_eq!(Arch::Sparc64.endianness(), Some(Endianness::Big));
        assert_eq!(Arch::Superh32.endianness(), Some(Endianness::Little));
        assert_eq!(Arch::Superh32Be.endianness(), Some(Endianness::Big));
        assert_eq!(Arch::X86_64.endianness(), Some(Endianness::Little));
        assert_eq!(Arch::Unknown64.endianness(), None);
    }

    #[test]
    fn families() {
        assert_eq!(Arch::X86_64.family(), ArchFamily::X86);
        assert_eq!(Arch::Arm32Be.family(), ArchFamily::Arm);
        assert_eq!(Arch::S390_64.family(), ArchFamily::S390);
        assert_eq!(Arch::Unknown32.family(), ArchFamily::Unknown);
        assert!(Arch::Unknown32.is_unknown());
        assert!(!Arch::X86_32.is_unknown());
    }

    #[test]
    fn current_prefers_host_pointer_width_for_unknown_families() {
        assert_eq!(Arch::current(&host("nvptx64", Some(32))), Arch::Unknown32);
        assert_eq!(Arch::current(&host("nvptx64", None)), Arch::Unknown64);
        assert_eq!(Arch::current(&host("gibberish", Some(64))), Arch::Unknown64);
        assert_eq!(Arch::current(&host("gibberish", None)), Arch::Unknown);
        // Known families are never overridden.
        assert_eq!(Arch::current(&host("x86", Some(64))), Arch::X86_32);
    }

    #[test]
    fn current_strict_failure_reports_host_token() {
        let err = Arch::try_current(&host("gibberish", Some(64))).unwrap_err();
        assert_eq!(err.aspect(), "architecture");
        assert_eq!(err.value(), "gibberish");
    }
}
