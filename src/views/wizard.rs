//! Two-step "create vacancy" wizard.
//!
//! Steps advance linearly without validation. Field values live in the
//! wizard for as long as it is mounted, so moving back and forth never loses
//! input. Submitting is only possible from the last step and resets the
//! wizard to a blank draft.

use crate::filter::Choice;
use crate::input::{FocusOrder, TextInput};
use crate::notify::Notice;
use crate::views::tags::TagEditor;

const DEPARTMENTS: &[(&str, &str)] = &[
    ("Engineering", "engineering"),
    ("Product", "product"),
    ("Design", "design"),
    ("Marketing", "marketing"),
    ("Sales", "sales"),
    ("Data", "data"),
];

const EXPERIENCE_LEVELS: &[(&str, &str)] = &[
    ("Junior (0-2 years)", "junior"),
    ("Mid-Level (2-5 years)", "mid"),
    ("Senior (5-8 years)", "senior"),
    ("Lead (8+ years)", "lead"),
];

pub const EDUCATION_OPTIONS: &[&str] = &[
    "Bachelor's Degree",
    "Master's Degree",
    "PhD",
    "Professional Certification",
];

const INITIAL_SKILLS: &[&str] = &["React", "TypeScript"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    BasicDetails,
    ScreeningCriteria,
}

impl WizardStep {
    pub const ALL: [WizardStep; 2] = [WizardStep::BasicDetails, WizardStep::ScreeningCriteria];

    pub fn number(self) -> usize {
        match self {
            WizardStep::BasicDetails => 1,
            WizardStep::ScreeningCriteria => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::BasicDetails => "Basic Details",
            WizardStep::ScreeningCriteria => "AI Screening Criteria",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Preferred,
}

impl Requirement {
    pub fn toggle(&mut self) {
        *self = match self {
            Requirement::Required => Requirement::Preferred,
            Requirement::Preferred => Requirement::Required,
        };
    }

    pub fn is_required(self) -> bool {
        self == Requirement::Required
    }

    pub fn label(self) -> &'static str {
        match self {
            Requirement::Required => "required",
            Requirement::Preferred => "preferred",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicField {
    Title,
    Department,
    Description,
    SaveTemplate,
}

impl FocusOrder for BasicField {
    const ORDER: &'static [Self] = &[
        BasicField::Title,
        BasicField::Department,
        BasicField::Description,
        BasicField::SaveTemplate,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaField {
    NewSkill,
    Skills,
    SkillsRequired,
    ExperienceLevel,
    Years,
    ExperienceRequired,
    Education,
    EducationRequired,
    SaveTemplate,
}

impl FocusOrder for CriteriaField {
    const ORDER: &'static [Self] = &[
        CriteriaField::NewSkill,
        CriteriaField::Skills,
        CriteriaField::SkillsRequired,
        CriteriaField::ExperienceLevel,
        CriteriaField::Years,
        CriteriaField::ExperienceRequired,
        CriteriaField::Education,
        CriteriaField::EducationRequired,
        CriteriaField::SaveTemplate,
    ];
}

/// Everything the wizard collected, handed over on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancyDraft {
    pub title: String,
    pub department: Option<&'static str>,
    pub description: String,
    pub skills: Vec<String>,
    pub skills_requirement: Requirement,
    pub experience_level: Option<&'static str>,
    pub min_years: Option<u32>,
    pub experience_requirement: Requirement,
    pub education: Vec<&'static str>,
    pub education_requirement: Requirement,
    pub save_as_template: bool,
}

pub struct VacancyWizard {
    pub step: WizardStep,
    pub basic_focus: BasicField,
    pub criteria_focus: CriteriaField,

    pub title: TextInput,
    pub department: Choice<&'static str>,
    pub description: TextInput,

    pub skills: TagEditor,
    pub skills_requirement: Requirement,
    pub experience_level: Choice<&'static str>,
    pub years: TextInput,
    pub experience_requirement: Requirement,
    pub education: [bool; 4],
    pub education_cursor: usize,
    pub education_requirement: Requirement,

    pub save_as_template: bool,
}

impl Default for VacancyWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl VacancyWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::BasicDetails,
            basic_focus: BasicField::Title,
            criteria_focus: CriteriaField::NewSkill,
            title: TextInput::new(),
            department: Choice::new(DEPARTMENTS),
            description: TextInput::new(),
            skills: TagEditor::new(INITIAL_SKILLS),
            skills_requirement: Requirement::Required,
            experience_level: Choice::new(EXPERIENCE_LEVELS),
            years: TextInput::new(),
            experience_requirement: Requirement::Required,
            education: [false; 4],
            education_cursor: 0,
            education_requirement: Requirement::Preferred,
            save_as_template: false,
        }
    }

    pub fn is_last_step(&self) -> bool {
        self.step == WizardStep::ScreeningCriteria
    }

    pub fn next(&mut self) {
        if self.step == WizardStep::BasicDetails {
            self.step = WizardStep::ScreeningCriteria;
            tracing::debug!("wizard advanced to step 2");
        }
    }

    pub fn previous(&mut self) {
        if self.step == WizardStep::ScreeningCriteria {
            self.step = WizardStep::BasicDetails;
        }
    }

    pub fn focus_next(&mut self) {
        match self.step {
            WizardStep::BasicDetails => self.basic_focus = self.basic_focus.next(),
            WizardStep::ScreeningCriteria => self.criteria_focus = self.criteria_focus.next(),
        }
    }

    pub fn focus_prev(&mut self) {
        match self.step {
            WizardStep::BasicDetails => self.basic_focus = self.basic_focus.prev(),
            WizardStep::ScreeningCriteria => self.criteria_focus = self.criteria_focus.prev(),
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.step {
            WizardStep::BasicDetails => match self.basic_focus {
                BasicField::Title => Some(&mut self.title),
                BasicField::Description => Some(&mut self.description),
                _ => None,
            },
            WizardStep::ScreeningCriteria => match self.criteria_focus {
                CriteriaField::NewSkill => Some(&mut self.skills.draft),
                CriteriaField::Years => Some(&mut self.years),
                _ => None,
            },
        }
    }

    /// Typed character routing; the years field only takes digits.
    pub fn type_char(&mut self, c: char) {
        let years_focused = self.step == WizardStep::ScreeningCriteria
            && self.criteria_focus == CriteriaField::Years;
        if years_focused && !c.is_ascii_digit() {
            return;
        }
        if let Some(input) = self.focused_input() {
            input.insert_char(c);
        }
    }

    pub fn toggle_education(&mut self, idx: usize) {
        if let Some(flag) = self.education.get_mut(idx) {
            *flag = !*flag;
        }
    }

    pub fn selected_education(&self) -> Vec<&'static str> {
        EDUCATION_OPTIONS
            .iter()
            .zip(self.education)
            .filter(|(_, on)| *on)
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn draft(&self) -> VacancyDraft {
        VacancyDraft {
            title: self.title.value().trim().to_string(),
            department: self.department.value(),
            description: self.description.value().to_string(),
            skills: self.skills.tags().to_vec(),
            skills_requirement: self.skills_requirement,
            experience_level: self.experience_level.value(),
            min_years: self.years.value().parse().ok(),
            experience_requirement: self.experience_requirement,
            education: self.selected_education(),
            education_requirement: self.education_requirement,
            save_as_template: self.save_as_template,
        }
    }

    /// Finish the wizard. Returns `None` unless on the last step.
    pub fn submit(&mut self) -> Option<(VacancyDraft, Notice)> {
        if !self.is_last_step() {
            return None;
        }
        let draft = self.draft();
        let name = if draft.title.is_empty() {
            "Untitled vacancy"
        } else {
            draft.title.as_str()
        };
        let mut notice = Notice::success(format!("Vacancy '{name}' created"));
        if draft.save_as_template {
            notice = notice.with_description("Saved as a template");
        }
        tracing::info!(
            skills = draft.skills.len(),
            template = draft.save_as_template,
            "vacancy draft submitted"
        );
        *self = Self::new();
        Some((draft, notice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(wizard: &mut VacancyWizard, text: &str) {
        for c in text.chars() {
            wizard.type_char(c);
        }
    }

    #[test]
    fn test_next_then_previous_keeps_step_one_fields() {
        let mut wizard = VacancyWizard::new();
        type_into(&mut wizard, "Platform Engineer");
        wizard.department.next();
        wizard.basic_focus = BasicField::Description;
        type_into(&mut wizard, "Own the build");

        wizard.next();
        assert_eq!(wizard.step, WizardStep::ScreeningCriteria);
        wizard.previous();
        assert_eq!(wizard.step, WizardStep::BasicDetails);
        assert_eq!(wizard.title.value(), "Platform Engineer");
        assert_eq!(wizard.department.label_or("Select department"), "Engineering");
        assert_eq!(wizard.description.value(), "Own the build");
    }

    #[test]
    fn test_steps_are_linear() {
        let mut wizard = VacancyWizard::new();
        wizard.previous();
        assert_eq!(wizard.step, WizardStep::BasicDetails);
        wizard.next();
        wizard.next();
        assert_eq!(wizard.step, WizardStep::ScreeningCriteria);
    }

    #[test]
    fn test_submit_only_from_last_step() {
        let mut wizard = VacancyWizard::new();
        assert!(wizard.submit().is_none());
        wizard.next();
        let (draft, notice) = wizard.submit().unwrap();
        assert_eq!(notice.title, "Vacancy 'Untitled vacancy' created");
        assert_eq!(draft.skills, ["React", "TypeScript"]);
        assert_eq!(draft.education_requirement, Requirement::Preferred);
        assert!(draft.skills_requirement.is_required());
    }

    #[test]
    fn test_submit_collects_draft_and_resets() {
        let mut wizard = VacancyWizard::new();
        type_into(&mut wizard, "Data Engineer");
        wizard.save_as_template = true;
        wizard.next();
        wizard.criteria_focus = CriteriaField::Years;
        type_into(&mut wizard, "4y");
        wizard.toggle_education(1);
        wizard.experience_level.next();
        wizard.skills_requirement.toggle();

        let (draft, notice) = wizard.submit().unwrap();
        assert_eq!(notice.title, "Vacancy 'Data Engineer' created");
        assert_eq!(notice.description.as_deref(), Some("Saved as a template"));
        assert_eq!(draft.min_years, Some(4));
        assert_eq!(draft.education, ["Master's Degree"]);
        assert_eq!(draft.experience_level, Some("junior"));
        assert_eq!(draft.skills_requirement, Requirement::Preferred);

        assert_eq!(wizard.step, WizardStep::BasicDetails);
        assert!(wizard.title.is_empty());
        assert!(!wizard.save_as_template);
    }

    #[test]
    fn test_focus_cycles_within_step() {
        let mut wizard = VacancyWizard::new();
        wizard.focus_prev();
        assert_eq!(wizard.basic_focus, BasicField::SaveTemplate);
        wizard.next();
        wizard.focus_next();
        assert_eq!(wizard.criteria_focus, CriteriaField::Skills);
        assert!(wizard.focused_input().is_none());
    }
}
