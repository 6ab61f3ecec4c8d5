//! Classification of free-form platform identifier strings — compiler
//! target triples, release filenames, host runtime properties — into a
//! normalized three-dimensional result: [`Os`], [`Arch`] (family +
//! bitness + endianness), and C-runtime [`Env`]. Consumers use the
//! result to pick the correct native artifact for a running or targeted
//! platform.
//!
//! ## How the parts work together
//!
//! Classifying an input string is a short pipeline:
//!
//! ```text
//! input ── normalize ──┬─ exact tier (canonical ids, host tokens)
//!    (normalize.rs)    │
//!                      v
//!            first_match over the rule table   (engine.rs, rules/*)
//!              - ordered cascade per dimension
//!              - first matching rule wins
//!                      │
//!                      v
//!          Os? / Arch / Env?  ──  Platform  ──  canonical id
//!                                (platform.rs)
//! ```
//!
//! The engine leans on **rule order**: every table places the more
//! specific pattern above the broader one it overlaps with (Android
//! above Linux, `x86-64` above `x86`, `aarch64be` above `aarch64`), so
//! the first match is always the right one and no tie-breaking pass is
//! needed afterwards.
//!
//! ## Responsibilities by module
//!
//! - `normalize.rs`: lowercasing/separator-folding of raw input.
//! - `engine.rs`: `Rule`/`Matcher` types and the first-match evaluator.
//! - `rules/`: the per-dimension cascades, as ordered data.
//! - `os.rs`, `arch.rs`, `env.rs`: the dimension enums, their canonical
//!   ids, and the strict/lenient entry points.
//! - `platform.rs`: the `(Os, Arch)` aggregate and the exact id codec.
//! - `probe.rs`: the `ldd --version` subprocess probe feeding `Env`.
//! - `host.rs`: the injected host-property context for `current()`.
//!
//! ## Strict vs. lenient
//!
//! Every classifier comes in two flavors sharing one cascade:
//! `classify`/`current` return an unknown sentinel and never fail;
//! `try_classify`/`try_current`/`from_id` return
//! [`UnsupportedPlatformError`] naming the dimension and the offending
//! input. The probe has no strict flavor at all — environment detection
//! is inherently best-effort and a failed probe is simply unknown.
//!
//! ## Example
//!
//! ```
//! use platina::{Arch, Env, Os, Platform};
//!
//! let platform = Platform::classify("x86_64-unknown-linux-gnu");
//! assert_eq!(platform.os(), Some(Os::Linux));
//! assert_eq!(platform.arch(), Arch::X86_64);
//! assert_eq!(platform.id(), "linux-x86-64");
//!
//! // Exact round-trip, independent of the heuristics:
//! assert_eq!(Platform::from_id("linux-x86-64").unwrap(), platform);
//!
//! // Environment is classified separately:
//! assert_eq!(Env::classify("x86_64-unknown-linux-gnu"), Some(Env::Glibc));
//! ```

#[macro_use]
mod macros;

mod arch;
mod engine;
mod env;
mod error;
mod host;
mod normalize;
mod os;
mod platform;
pub mod probe;
mod rules;

pub use arch::{Arch, ArchFamily, Endianness};
pub use env::Env;
pub use error::UnsupportedPlatformError;
pub use host::HostInfo;
pub use normalize::normalize;
pub use os::Os;
pub use platform::Platform;
