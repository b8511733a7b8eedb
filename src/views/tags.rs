use crate::input::TextInput;

/// Ordered skill tags plus the "add skill" input.
#[derive(Debug, Clone)]
pub struct TagEditor {
    tags: Vec<String>,
    pub draft: TextInput,
    /// Tag highlighted for removal.
    pub cursor: usize,
}

impl TagEditor {
    pub fn new(initial: &[&str]) -> Self {
        Self {
            tags: initial.iter().map(|t| t.to_string()).collect(),
            draft: TextInput::new(),
            cursor: 0,
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Add the trimmed draft. Blank input and duplicates are ignored and the
    /// draft is kept so the user can fix it.
    pub fn add_draft(&mut self) -> bool {
        let tag = self.draft.value().trim().to_string();
        if self.add(&tag) {
            self.draft.clear();
            true
        } else {
            false
        }
    }

    pub fn add(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
        self.cursor = self.cursor.min(self.tags.len().saturating_sub(1));
    }

    pub fn remove_highlighted(&mut self) {
        if let Some(tag) = self.tags.get(self.cursor).cloned() {
            self.remove(&tag);
        }
    }

    pub fn highlight_next(&mut self) {
        if !self.tags.is_empty() {
            self.cursor = (self.cursor + 1) % self.tags.len();
        }
    }

    pub fn highlight_prev(&mut self) {
        if !self.tags.is_empty() {
            self.cursor = (self.cursor + self.tags.len() - 1) % self.tags.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_rejects_blank_and_duplicates() {
        let mut editor = TagEditor::new(&["React", "TypeScript"]);
        editor.draft.set("   ");
        assert!(!editor.add_draft());
        editor.draft.set(" React ");
        assert!(!editor.add_draft());
        assert_eq!(editor.draft.value(), " React ");
        editor.draft.set("  Rust ");
        assert!(editor.add_draft());
        assert!(editor.draft.is_empty());
        assert_eq!(editor.tags(), ["React", "TypeScript", "Rust"]);
    }

    #[test]
    fn test_remove_by_value() {
        let mut editor = TagEditor::new(&["React", "TypeScript", "Rust"]);
        editor.remove("TypeScript");
        editor.remove("Go");
        assert_eq!(editor.tags(), ["React", "Rust"]);
        editor.cursor = 1;
        editor.remove_highlighted();
        assert_eq!(editor.tags(), ["React"]);
        assert_eq!(editor.cursor, 0);
    }
}
