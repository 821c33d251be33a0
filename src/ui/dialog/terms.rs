// SPDX-License-Identifier: MPL-2.0
//! Read-only terms dialog with a single close control.

use super::{DialogController, Modal};
use crate::ui::focus::ElementId;
use crate::ui::state::GracePeriod;

pub const TITLE_ID: &str = "terms-title";

pub const TITLE: &str = "Terms & Conditions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermsSection {
    pub heading: &'static str,
    pub body: &'static str,
}

const DEFAULT_SECTIONS: &[TermsSection] = &[
    TermsSection {
        heading: "Personal use",
        body: "WeightLog is a personal logbook for training sessions and body weight. \
               It is meant for non-commercial use, and you are responsible for what you enter.",
    },
    TermsSection {
        heading: "Not medical advice",
        body: "Nothing shown in the app is health or fitness guidance. Ask a professional \
               before changing your training or diet.",
    },
    TermsSection {
        heading: "Your data",
        body: "Entries are only used to display and manage your own history.",
    },
    TermsSection {
        heading: "No warranty",
        body: "The app is provided as is. Features may change or stop working at any time.",
    },
    TermsSection {
        heading: "Changes",
        body: "These terms may be revised. Continuing to use the app means you accept the \
               current version.",
    },
];

#[derive(Debug, Clone)]
pub struct TermsDialog {
    controller: DialogController,
    sections: Vec<TermsSection>,
}

impl TermsDialog {
    pub fn new(root: ElementId, grace: GracePeriod) -> Self {
        Self::with_sections(root, grace, DEFAULT_SECTIONS.to_vec())
    }

    pub fn with_sections(root: ElementId, grace: GracePeriod, sections: Vec<TermsSection>) -> Self {
        Self {
            controller: DialogController::new(TITLE_ID, root, grace),
            sections,
        }
    }

    #[must_use]
    pub fn sections(&self) -> &[TermsSection] {
        &self.sections
    }

    /// Whether the close button should close the dialog now.
    #[must_use]
    pub fn request_close(&self) -> bool {
        self.controller.is_interactive()
    }
}

impl Modal for TermsDialog {
    fn controller(&self) -> &DialogController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut DialogController {
        &mut self.controller
    }
}
