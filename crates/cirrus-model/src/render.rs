//! `{Label: value,Label: value}` rendering shared by the `Display` impls.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

/// Writes present fields in call order, skipping absent ones.
pub(crate) struct Fields<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> Fields<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, empty: true })
    }

    pub(crate) fn field<T: fmt::Display>(
        &mut self,
        label: &str,
        value: Option<T>,
    ) -> Result<&mut Self, fmt::Error> {
        if let Some(value) = value {
            if !self.empty {
                self.f.write_str(",")?;
            }
            write!(self.f, "{label}: {value}")?;
            self.empty = false;
        }
        Ok(self)
    }

    pub(crate) fn finish(&mut self) -> fmt::Result {
        self.f.write_str("}")
    }
}

/// Renders a slice as `[a, b, c]` using each element's `Display`.
pub(crate) struct List<'a, T>(pub(crate) &'a [T]);

impl<T: fmt::Display> fmt::Display for List<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

/// Renders a timestamp in ISO 8601 with a `Z` suffix.
pub(crate) struct Timestamp<'a>(pub(crate) &'a DateTime<Utc>);

impl fmt::Display for Timestamp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}
