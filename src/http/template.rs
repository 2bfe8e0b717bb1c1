//! Marker substitution for served HTML.

use std::borrow::Cow;

use chrono::Local;

pub const DATE_MARKER: &str = "<cs371date>";
pub const SERVER_MARKER: &str = "<cs371server>";

/// Values substituted into HTML lines for one response.
///
/// Built once per response so every `<cs371date>` in a document carries
/// the same date.
#[derive(Debug, Clone)]
pub struct Template {
    date: String,
    server_name: String,
}

impl Template {
    pub fn new(date: impl Into<String>, server_name: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            server_name: server_name.into(),
        }
    }

    /// Uses today's local date in `YYYY-MM-DD` form.
    pub fn today(server_name: impl Into<String>) -> Self {
        Self::new(Local::now().format("%Y-%m-%d").to_string(), server_name)
    }

    /// Replaces every occurrence of both markers in `line`.
    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut out = Cow::Borrowed(line);

        if out.contains(DATE_MARKER) {
            out = Cow::Owned(out.replace(DATE_MARKER, &self.date));
        }
        if out.contains(SERVER_MARKER) {
            out = Cow::Owned(out.replace(SERVER_MARKER, &self.server_name));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_iso_date() {
        let t = Template::today("s");
        let line = t.apply(DATE_MARKER);
        let parts: Vec<&str> = line.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 4);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 2);
    }
}
