//! Architecture cascade.
//!
//! Ordering invariants, top to bottom:
//!
//! - x86-64 spellings precede x86-32: the 32-bit patterns are substrings
//!   of 64-bit tokens (`x86` in `x86-64`, `ia32` in `ia32e`).
//! - `aarch…be` precedes `aarch`, which precedes every `arm` rule; the
//!   bare `arm` fallback is 32-bit little-endian.
//! - Big-endian ARM and little-endian MIPS/PPC suffix rules precede the
//!   corresponding default-endianness rules.
//! - Itanium 32-bit forms (`ia64n`, `ia6432`) precede the 64-bit forms
//!   they contain.
//! - PPC and MIPS cascade from 64-bit-with-endianness down to the bare
//!   family name.
//! - `win32`/`win64` are vendor shorthands for an OS and an arch at
//!   once; Windows runs on other architectures too, so they count only
//!   when nothing architecture-specific matched.
//! - A still-matchable `32`/`64` recovers bitness even when the family
//!   is unknown, last of all.

use once_cell::sync::Lazy;

use crate::Arch;
use crate::engine::Rule;

// `x64` needs the original's negative lookbehind (`nvptx64` is a GPU
// target, not x86); the regex crate has no lookbehind, so the check is a
// predicate.
fn x64_outside_nvptx(token: &str) -> bool {
    token.match_indices("x64").any(|(at, _)| !token[..at].ends_with("nvpt"))
}

pub(crate) fn rules() -> &'static [Rule<Arch>] {
    static RULES: Lazy<Vec<Rule<Arch>>> = Lazy::new(|| {
        vec![
            rule!("x86-64", re!(r"x86-?64|amd-?64|em64t|ia32e|i[89]86") => Arch::X86_64),
            rule!("x86-64-x64", pred!(x64_outside_nvptx) => Arch::X86_64),
            rule!("x86-32", re!(r"(ia|x)32|(x|i[1-7])86|pentium") => Arch::X86_32),
            rule!("arm-64-be-aarch", re!(r"aarch-?(64)?-?(be|eb)") => Arch::Arm64Be),
            rule!("arm-64-aarch", has!("aarch") => Arch::Arm64),
            rule!(
                "arm-64-be",
                re!(r"arm-?((64|v[8-9]|v[1-9]\d+)-?(be|eb)|(be|eb)-?(64|v[8-9]|v[1-9]\d+))")
                    => Arch::Arm64Be,
            ),
            rule!("arm-32-be", re!(r"arm-?(32-?)?(be|eb)") => Arch::Arm32Be),
            rule!("arm-64", re!(r"arm-?(64|v[8-9]|v[1-9]\d+)") => Arch::Arm64),
            rule!("arm-32", has!("arm") => Arch::Arm32),
            rule!("alpha-64", has!("alpha") => Arch::Alpha64),
            rule!("itanium-32", re!(r"i(a-?64(n|-?32)|tanium-?32)") => Arch::Itanium32),
            rule!("itanium-64", re!(r"i(a-?64|tanium)") => Arch::Itanium64),
            rule!("m68k-32", re!(r"\bm68(k|000)\b") => Arch::M68k32),
            rule!("s390-64", re!(r"s390-?(x|64)|ibm-?z-?64") => Arch::S390_64),
            rule!("s390-32", re!(r"s390|ibm-?z") => Arch::S390_32),
            rule!(
                "ppc-64-le",
                re!(r"(power-?(pc|rs)?|ppc)-?(64-?(le|el)|(le|el)-?64)") => Arch::Ppc64Le,
            ),
            rule!(
                "ppc-32-le",
                re!(r"(power-?(pc|rs)?|ppc)-?((32-?)?(le|el)|(le|el)-?32)") => Arch::Ppc32Le,
            ),
            rule!("ppc-64", re!(r"(power-?(pc|rs)?|ppc)-?64") => Arch::Ppc64),
            rule!("ppc-32", re!(r"power-?(pc|rs)?|ppc") => Arch::Ppc32),
            rule!(
                "mips-64-le",
                re!(r"mips(isa)?-?(64-?(r\d-?)?(le|el)|(le|el)-?64)") => Arch::Mips64Le,
            ),
            rule!(
                "mips-32-le",
                re!(r"mips(isa)?-?((32-?)?(r\d-?)?(le|el)|(le|el)-?32)") => Arch::Mips32Le,
            ),
            rule!("mips-64", re!(r"mips(isa)?-?64") => Arch::Mips64),
            rule!("mips-32", has!("mips") => Arch::Mips32),
            rule!("riscv-64", re!(r"risc-?v-?64") => Arch::Riscv64),
            rule!("riscv-32", re!(r"risc-?v") => Arch::Riscv32),
            rule!("sparc-64", re!(r"ultra-?sparc|sparc-?(64|v9|v[1-9][01])") => Arch::Sparc64),
            rule!("sparc-32", has!("sparc") => Arch::Sparc32),
            rule!(
                "superh-32-be",
                re!(r"superh-?(32-?)?(be|eb)|\bsh-?(32-?(be|eb)|(be|eb)-?32)\b") => Arch::Superh32Be,
            ),
            rule!("superh-32", re!(r"superh|\bsh-?32\b") => Arch::Superh32),
            rule!("win32", re!(r"win-?32") => Arch::X86_32),
            rule!("win64", re!(r"win-?64") => Arch::X86_64),
            rule!("bitness-32", has!("32") => Arch::Unknown32),
            rule!("bitness-64", has!("64") => Arch::Unknown64),
        ]
    });
    &RULES
}
