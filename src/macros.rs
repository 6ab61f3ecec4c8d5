#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! re {
    ($pat:literal) => {
        $crate::engine::Matcher::Regex($crate::regex!($pat))
    };
}

#[macro_export]
macro_rules! has {
    ($needle:literal) => {
        $crate::engine::Matcher::Contains($needle)
    };
}

#[macro_export]
macro_rules! pred {
    ($p:expr) => {
        $crate::engine::Matcher::Predicate($p)
    };
}

#[macro_export]
macro_rules! rule {
    ($name:literal, $matcher:expr => $out:expr $(,)?) => {
        $crate::engine::Rule { name: $name, matcher: $matcher, out: $out }
    };
}
