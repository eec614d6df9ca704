//! User-visible strings. Swap `current` to localize.

pub mod en_us;

pub use en_us as current;

pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}
