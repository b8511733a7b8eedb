use crate::input::{FocusOrder, TextInput};
use crate::notify::Notice;
use crate::records::profile;
use crate::views::tags::TagEditor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    About,
    NewSkill,
    Skills,
}

impl FocusOrder for ProfileField {
    const ORDER: &'static [Self] = &[ProfileField::About, ProfileField::NewSkill, ProfileField::Skills];
}

/// Candidate profile sheet. Fields only accept input while editing.
pub struct MyProfile {
    pub editing: bool,
    pub about: TextInput,
    pub skills: TagEditor,
    pub focus: ProfileField,
}

impl Default for MyProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl MyProfile {
    pub fn new() -> Self {
        Self {
            editing: false,
            about: TextInput::with_text(profile::ABOUT),
            skills: TagEditor::new(profile::SKILLS),
            focus: ProfileField::About,
        }
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    /// Leave edit mode. Edits stay in memory for the life of the view.
    pub fn save(&mut self) -> Option<Notice> {
        if !self.editing {
            return None;
        }
        self.editing = false;
        Some(Notice::success("Profile updated successfully!"))
    }

    pub fn upload_resume(&self) -> Notice {
        Notice::success("Resume uploaded successfully!")
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        if !self.editing {
            return None;
        }
        match self.focus {
            ProfileField::About => Some(&mut self.about),
            ProfileField::NewSkill => Some(&mut self.skills.draft),
            ProfileField::Skills => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_cycle() {
        let mut view = MyProfile::new();
        assert!(view.focused_input().is_none());
        assert!(view.save().is_none());

        view.start_editing();
        view.focus = ProfileField::NewSkill;
        if let Some(input) = view.focused_input() {
            input.set("Rust");
        }
        assert!(view.skills.add_draft());
        let notice = view.save().unwrap();
        assert_eq!(notice.title, "Profile updated successfully!");
        assert!(!view.editing);
        assert_eq!(view.skills.tags().last().map(String::as_str), Some("Rust"));
    }

    #[test]
    fn test_initial_skills() {
        let view = MyProfile::new();
        assert_eq!(view.skills.tags().len(), 5);
        assert_eq!(view.upload_resume().title, "Resume uploaded successfully!");
    }
}
