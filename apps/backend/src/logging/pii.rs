use std::fmt;

/// Mask an identifier for logs: first character kept, remainder replaced.
///
/// Empty input stays empty so "no username given" remains visible.
pub fn mask(input: &str) -> String {
    match input.chars().next() {
        None => String::new(),
        Some(first) => format!("{first}***"),
    }
}

/// Wrapper that masks its contents whenever it is formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask(self.0))
    }
}
