//! Token normalization.
//!
//! Every classifier operates on normalized text, never on raw input. The
//! normalized form is what keeps canonical identifiers (`linux`, `x86-64`,
//! `arm-32-be`) stable under a `classify` call: a valid identifier
//! normalizes to itself, so the exact-match tiers can run before any
//! heuristic pattern.

/// Normalizes `text` for matching.
///
/// ASCII letters are lowercased and ASCII alphanumerics pass through
/// unchanged. Every run of other characters (including all non-ASCII)
/// collapses to a single dash, or is dropped entirely when `strip` is
/// `true`.
///
/// The function is total: it never fails, and empty input yields empty
/// output. It is also idempotent in both modes, which the exact-match
/// tiers rely on.
///
/// `strip = true` is used for host-property fast paths (`x86_64` and
/// `x86 64` both become `x8664`), `strip = false` for the heuristic
/// cascades whose patterns are written against a stable `-` separator.
///
/// # Example
/// ```
/// use platina::normalize;
///
/// assert_eq!(normalize("Mac OS X", false), "mac-os-x");
/// assert_eq!(normalize("Mac OS X", true), "macosx");
/// ```
pub fn normalize(text: &str, strip: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_digit() || c.is_ascii_lowercase() {
            out.push(c);
        } else if c.is_ascii_uppercase() {
            out.push(c.to_ascii_lowercase());
        } else if !strip && !out.ends_with('-') {
            out.push('-');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_ascii() {
        assert_eq!(normalize("LiNuX", false), "linux");
        assert_eq!(normalize("X86", true), "x86");
    }

    #[test]
    fn separators_collapse_to_one_dash() {
        assert_eq!(normalize("x86_64", false), "x86-64");
        assert_eq!(normalize("power rs 64 le", false), "power-rs-64-le");
        assert_eq!(normalize("a - _ b", false), "a-b");
        assert_eq!(normalize("darwin19.6.0", false), "darwin19-6-0");
    }

    #[test]
    fn strip_drops_separators() {
        assert_eq!(normalize("x86_64", true), "x8664");
        assert_eq!(normalize("Mac OS X", true), "macosx");
        assert_eq!(normalize("-_.", true), "");
    }

    #[test]
    fn non_ascii_is_a_separator() {
        assert_eq!(normalize("µClibc", false), "-clibc");
        assert_eq!(normalize("µClibc", true), "clibc");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(normalize("", false), "");
        assert_eq!(normalize("", true), "");
    }

    #[test]
    fn idempotent_in_both_modes() {
        for input in ["", "Windows NT 10.0", "aarch64_be", "  spaced  out  ", "ppc64le"] {
            for strip in [false, true] {
                let once = normalize(input, strip);
                assert_eq!(normalize(&once, strip), once, "input {input:?} strip {strip}");
            }
        }
    }
}
