/// Compile a regex literal once and hand out a `&'static Regex`.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare an ordered candidate-key list for [`crate::normalize::lookup::first_present`].
///
/// ```ignore
/// keys!(PEAK_KEYS = ["peak", "peakRate"]);
/// ```
macro_rules! keys {
    ($(#[$meta:meta])* $name:ident = [ $($key:literal),+ $(,)? ]) => {
        $(#[$meta])*
        pub(crate) const $name: &[&str] = &[ $($key),+ ];
    };
}
