// SPDX-License-Identifier: MPL-2.0
//! Focus tree mirroring the demo's widgets.
//!
//! Iced widgets carry no tab order the dialog controller could drive, so the
//! shell keeps a [`VirtualDocument`] with one element per interactive control
//! and renders the focus ring from it.

use crate::ui::dialog::Field;
use crate::ui::focus::{Element, ElementId, FocusHost, VirtualDocument};
use iced::widget;

/// Target for a focus operation that matches no text input, which blurs them all.
pub const NO_FIELD: widget::Id = widget::Id::new("weightlog-no-field");

/// Every keyboard-reachable control of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    AddEntry,
    DeleteEntry,
    ShowTerms,
    LogIn,
    LogOut,
    ConfirmCancel,
    ConfirmAccept,
    TermsClose,
    AuthClose,
    AuthEmail,
    AuthPassword,
    AuthConfirmPassword,
    AuthRemember,
    AuthSubmit,
    AuthSwitchMode,
}

impl Control {
    /// The auth form field this control edits, if any.
    #[must_use]
    pub fn field(self) -> Option<Field> {
        match self {
            Control::AuthEmail => Some(Field::Email),
            Control::AuthPassword => Some(Field::Password),
            Control::AuthConfirmPassword => Some(Field::ConfirmPassword),
            _ => None,
        }
    }

    /// Iced widget id of the text input behind this control.
    #[must_use]
    pub fn widget_id(self) -> Option<widget::Id> {
        match self {
            Control::AuthEmail => Some(widget::Id::new("auth-email")),
            Control::AuthPassword => Some(widget::Id::new("auth-password")),
            Control::AuthConfirmPassword => Some(widget::Id::new("auth-confirm-password")),
            _ => None,
        }
    }
}

/// Focus operation needed when the mirrored focus moves from `before` to
/// `after`: the input to focus, [`NO_FIELD`] to blur the input left behind,
/// or `None` when no text input is involved.
#[must_use]
pub fn widget_focus(before: Option<Control>, after: Option<Control>) -> Option<widget::Id> {
    if before == after {
        return None;
    }
    match after.and_then(Control::widget_id) {
        Some(id) => Some(id),
        None => before.and_then(Control::widget_id).map(|_| NO_FIELD),
    }
}

/// Dialog containers in the focus tree.
#[derive(Debug, Clone, Copy)]
pub struct Roots {
    pub confirm: ElementId,
    pub terms: ElementId,
    pub auth: ElementId,
}

/// The document plus the id of every control.
#[derive(Debug, Clone)]
pub struct Controls {
    doc: VirtualDocument,
    ids: Vec<(Control, ElementId)>,
    roots: Roots,
}

impl Controls {
    /// Builds the tree. Dialog roots start removed from layout.
    #[must_use]
    pub fn new() -> Self {
        let mut doc = VirtualDocument::new();
        let mut ids = Vec::new();
        let body = doc.body();

        let mut add = |doc: &mut VirtualDocument, parent, control, element| {
            let id = doc.append(parent, element);
            ids.push((control, id));
            id
        };

        add(&mut doc, body, Control::AddEntry, Element::button("Add entry"));
        add(&mut doc, body, Control::DeleteEntry, Element::button("Delete entry"));
        add(&mut doc, body, Control::ShowTerms, Element::link("Terms"));
        add(&mut doc, body, Control::LogIn, Element::button("Log in"));
        add(&mut doc, body, Control::LogOut, Element::button("Log out"));

        let confirm = dialog_root(&mut doc);
        add(&mut doc, confirm, Control::ConfirmCancel, Element::button("Cancel"));
        add(&mut doc, confirm, Control::ConfirmAccept, Element::button("Confirm"));

        let terms = dialog_root(&mut doc);
        add(&mut doc, terms, Control::TermsClose, Element::button("Close"));

        let auth = dialog_root(&mut doc);
        add(&mut doc, auth, Control::AuthClose, Element::button("Close"));
        add(&mut doc, auth, Control::AuthEmail, Element::input("Email"));
        add(&mut doc, auth, Control::AuthPassword, Element::input("Password"));
        add(
            &mut doc,
            auth,
            Control::AuthConfirmPassword,
            Element::input("Confirm password"),
        );
        add(&mut doc, auth, Control::AuthRemember, Element::input("Keep me logged in"));
        add(&mut doc, auth, Control::AuthSubmit, Element::button("Submit"));
        add(&mut doc, auth, Control::AuthSwitchMode, Element::button("Switch mode"));

        Self {
            doc,
            ids,
            roots: Roots {
                confirm,
                terms,
                auth,
            },
        }
    }

    #[must_use]
    pub fn roots(&self) -> Roots {
        self.roots
    }

    pub fn doc_mut(&mut self) -> &mut VirtualDocument {
        &mut self.doc
    }

    #[must_use]
    pub fn doc(&self) -> &VirtualDocument {
        &self.doc
    }

    /// Element id of `control`.
    #[must_use]
    pub fn id(&self, control: Control) -> ElementId {
        self.ids
            .iter()
            .find(|(c, _)| *c == control)
            .map(|(_, id)| *id)
            .unwrap_or_else(|| self.doc.body())
    }

    /// Control currently holding focus.
    #[must_use]
    pub fn focused(&self) -> Option<Control> {
        let active = self.doc.active_element()?;
        self.ids
            .iter()
            .find(|(_, id)| *id == active)
            .map(|(control, _)| *control)
    }

    #[must_use]
    pub fn is_focused(&self, control: Control) -> bool {
        self.focused() == Some(control)
    }

    /// Moves focus as a pointer press would. Returns whether it moved.
    pub fn focus(&mut self, control: Control) -> bool {
        let id = self.id(control);
        self.doc.focus(id)
    }

    pub fn set_disabled(&mut self, control: Control, disabled: bool) {
        let id = self.id(control);
        self.doc.set_disabled(id, disabled);
    }

    /// Adds or removes `control` from layout.
    pub fn set_shown(&mut self, control: Control, shown: bool) {
        let id = self.id(control);
        self.doc.set_display_none(id, !shown);
    }

    pub fn set_root_shown(&mut self, root: ElementId, shown: bool) {
        self.doc.set_display_none(root, !shown);
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new()
    }
}

fn dialog_root(doc: &mut VirtualDocument) -> ElementId {
    let body = doc.body();
    let root = doc.append(body, Element::container().with_tab_index(-1));
    doc.set_display_none(root, true);
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::focus;

    #[test]
    fn page_tab_order_skips_hidden_dialogs() {
        let mut controls = Controls::new();
        let body = controls.doc().body();
        let order = controls.doc().focusable_within(body);
        assert_eq!(order.len(), 5);

        focus::focus_first(controls.doc_mut(), body);
        assert!(controls.is_focused(Control::AddEntry));
    }

    #[test]
    fn controls_map_to_fields() {
        assert_eq!(Control::AuthEmail.field(), Some(Field::Email));
        assert_eq!(Control::AuthSubmit.field(), None);
    }

    #[test]
    fn fields_have_distinct_widget_ids() {
        let email = Control::AuthEmail.widget_id();
        assert!(email.is_some());
        assert_ne!(email, Control::AuthPassword.widget_id());
        assert_eq!(Control::AuthSubmit.widget_id(), None);
    }

    #[test]
    fn widget_focus_follows_field_changes() {
        assert_eq!(
            widget_focus(Some(Control::AuthClose), Some(Control::AuthEmail)),
            Control::AuthEmail.widget_id()
        );
        assert_eq!(
            widget_focus(Some(Control::AuthPassword), Some(Control::AuthRemember)),
            Some(NO_FIELD)
        );
        assert_eq!(
            widget_focus(Some(Control::AuthClose), Some(Control::AuthSubmit)),
            None
        );
        assert_eq!(
            widget_focus(Some(Control::AuthEmail), Some(Control::AuthEmail)),
            None
        );
    }

    #[test]
    fn showing_a_root_exposes_its_controls() {
        let mut controls = Controls::new();
        let roots = controls.roots();
        assert!(controls.doc().focusable_within(roots.confirm).is_empty());

        controls.set_root_shown(roots.confirm, true);
        assert_eq!(controls.doc().focusable_within(roots.confirm).len(), 2);
        assert!(controls.focus(Control::ConfirmAccept));
        assert_eq!(controls.focused(), Some(Control::ConfirmAccept));
    }
}
