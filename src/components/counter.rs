/// Renders the "<length>/<limit>" hint under the message field.
///
/// The limit is only displayed, input is never truncated here.
#[derive(Debug, Clone, Copy)]
pub struct CharCounter {
    limit: usize,
}

impl CharCounter {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Length is counted in UTF-16 code units, like the browser's `value.length`.
    pub fn render(&self, value: &str) -> String {
        format!("{}/{}", value.encode_utf16().count(), self.limit)
    }

    pub fn empty(&self) -> String {
        self.render("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_length_over_limit() {
        let counter = CharCounter::new(300);
        assert_eq!(counter.empty(), "0/300");
        assert_eq!(counter.render("hello"), "5/300");
        assert_eq!(counter.render("привет"), "6/300");
        assert_eq!(counter.render("🚀"), "2/300");
    }

    #[test]
    fn does_not_cap_at_limit() {
        let counter = CharCounter::new(3);
        assert_eq!(counter.render("abcdef"), "6/3");
    }
}
