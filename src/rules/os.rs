//! Operating-system cascade.
//!
//! Ordering invariants:
//!
//! - Android precedes Linux unconditionally: Android identifiers usually
//!   contain `linux` (or a `nix` suffix) as well. The pattern is open at
//!   the right so that `androideabi` triples still count.
//! - Darwin precedes Windows, and its `mac`/`osx` alternatives are
//!   word-bounded so that tokens like `rv32imac` or an `osx` run inside
//!   an ISA string never count.
//! - Windows follows because several of its vendor tokens (`w32`,
//!   `win32`) are short enough to collide with almost anything.
//! - The uncommon systems are word-bounded throughout (`os4000` must not
//!   read as OS/400, `roaix` not as AIX); `darwin` and `solaris`
//!   tolerate attached version digits (`darwin19`, `solaris2`).

use once_cell::sync::Lazy;

use crate::Os;
use crate::engine::Rule;

pub(crate) fn rules() -> &'static [Rule<Os>] {
    static RULES: Lazy<Vec<Rule<Os>>> = Lazy::new(|| {
        vec![
            rule!("android", re!(r"\bandroid") => Os::Android),
            rule!("linux", re!(r"\b(linux|u?nix)\b") => Os::Linux),
            rule!("darwin", re!(r"\b(apple|darwin\d*|ios|mac(-?osx?)?\d*|os-?x)\b") => Os::Darwin),
            rule!(
                "windows",
                re!(r"\b(w(7|8|1[01]|32|64|xp)|win(dows)?(\d{1,2}|xp)?)\b") => Os::Windows,
            ),
            rule!("aix", re!(r"\baix\b") => Os::Aix),
            rule!("dragonflybsd", re!(r"\bdragon-?fly(-?bsd)?\b") => Os::DragonflyBsd),
            rule!("freebsd", re!(r"\bfree-?bsd\b") => Os::FreeBsd),
            rule!("fuchsia", re!(r"\bfuchsia\b") => Os::Fuchsia),
            rule!("haiku", re!(r"\bhaiku\b") => Os::Haiku),
            rule!("hpux", re!(r"\bhp-?ux\b") => Os::Hpux),
            rule!("ibmi", re!(r"\b(ibm-?i|os-?400)\b") => Os::Ibmi),
            rule!("illumos", re!(r"\billum(-?os)?\b") => Os::Illumos),
            rule!("netbsd", re!(r"\bnet-?bsd\b") => Os::NetBsd),
            rule!("openbsd", re!(r"\bopen-?bsd\b") => Os::OpenBsd),
            rule!("plan9", re!(r"\bplan-?9\b") => Os::Plan9),
            rule!("qnx", re!(r"\b(qnx|procnto)\b") => Os::Qnx),
            rule!("redox", re!(r"\bredox\b") => Os::Redox),
            rule!("solaris", re!(r"\b(solaris\d*|sun-?os)\b") => Os::Solaris),
            rule!("vxworks", re!(r"\bvx-?works\b") => Os::VxWorks),
            rule!("zos", re!(r"\bz-?os\b") => Os::Zos),
        ]
    });
    &RULES
}
