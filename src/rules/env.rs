//! Environment cascade.
//!
//! Each environment's own identifier is tried first — cheap and precise.
//! The three broad heuristics after it are ordered by how much we trust
//! them, and the android fallback runs last so that `…-android-gcc`
//! toolchain names keep reading as glibc.

use once_cell::sync::Lazy;

use crate::Env;
use crate::engine::Rule;

pub(crate) fn rules() -> &'static [Rule<Env>] {
    static RULES: Lazy<Vec<Rule<Env>>> = Lazy::new(|| {
        vec![
            rule!("bionic", has!("bionic") => Env::Bionic),
            rule!("bsdlibc", has!("bsdlibc") => Env::Bsdlibc),
            rule!("dietlibc", has!("dietlibc") => Env::Dietlibc),
            rule!("glibc", has!("glibc") => Env::Glibc),
            rule!("klibc", has!("klibc") => Env::Klibc),
            rule!("msvc", has!("msvc") => Env::Msvc),
            rule!("musl", has!("musl") => Env::Musl),
            rule!("newlib", has!("newlib") => Env::Newlib),
            rule!("uclibc", has!("uclibc") => Env::Uclibc),
            // Matching `gnu` is dangerous because of the GNU operating
            // systems that sometimes identify themselves only with GNU as
            // well, but we need `gnu` here because of gcc. Future has to
            // show if this is a real world problem, or not.
            //
            // https://en.wikipedia.org/wiki/GNU_variants
            rule!("gcc-gnu", re!(r"g(cc|nu)") => Env::Glibc),
            rule!("bsd-family", re!(r"apple|bsd|darwin|mac|osx|ios|dragonfly") => Env::Bsdlibc),
            rule!("msvc-runtime", re!(r"crtdll|ucrt|vcruntime|vs|win") => Env::Msvc),
            rule!("bionic-android", has!("android") => Env::Bionic),
        ]
    });
    &RULES
}
