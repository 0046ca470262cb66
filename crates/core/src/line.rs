/// Ordered fragments produced while handling one block-level node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    fragments: Vec<String>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer whose first fragment is `seed`.
    pub fn seeded(seed: impl Into<String>) -> Self {
        LineBuffer {
            fragments: vec![seed.into()],
        }
    }

    pub fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    pub fn extend(&mut self, fragments: impl IntoIterator<Item = String>) {
        self.fragments.extend(fragments);
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn into_fragments(self) -> Vec<String> {
        self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// True when every fragment is the empty string. An empty buffer is blank.
    pub fn is_blank(&self) -> bool {
        self.fragments.iter().all(String::is_empty)
    }

    pub fn append_to_last(&mut self, suffix: &str) {
        if let Some(last) = self.fragments.last_mut() {
            last.push_str(suffix);
        }
    }

    pub fn join(&self, separator: &str) -> String {
        self.fragments.join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        let mut line = LineBuffer::new();
        assert!(line.is_blank());
        line.push("");
        line.push("");
        assert!(line.is_blank());
        line.push("x");
        assert!(!line.is_blank());
    }

    #[test]
    fn test_seeded_and_append_to_last() {
        let mut line = LineBuffer::seeded("*");
        line.push("item");
        line.append_to_last("\n");
        assert_eq!(line.join(" "), "* item\n");
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut line = LineBuffer::seeded("BEGIN");
        line.extend(vec!["one".to_string(), String::new()]);
        line.push("END");
        assert_eq!(line.len(), 4);
        assert_eq!(line.join("|"), "BEGIN|one||END");
    }

    #[test]
    fn test_append_to_last_on_empty_buffer_is_noop() {
        let mut line = LineBuffer::new();
        line.append_to_last("\n");
        assert!(line.is_empty());
    }
}
