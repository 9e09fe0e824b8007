//! Top-level form page.

use serde::Serialize;
use tracing::debug;

use crate::errors::{required, WidgetError, WidgetResult};
use crate::widget::button::{AddButtonOptions, Button};
use crate::widget::field::{AddFieldOptions, Field};
use crate::widget::field_group::{AddFieldGroupOptions, FieldGroup};
use crate::widget::sublist::{AddSublistOptions, Sublist};
use crate::widget::tab::{AddSubtabOptions, AddTabOptions, Tab};
use crate::widget::{AddPageLinkOptions, Children, ClientScript, FieldValue, PageLink};

pub const SUBMIT_BUTTON_ID: &str = "submitter";
pub const RESET_BUTTON_ID: &str = "resetter";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub title: String,
    pub hide_navbar: bool,
    fields: Children<Field>,
    field_groups: Children<FieldGroup>,
    sublists: Children<Sublist>,
    tabs: Children<Tab>,
    buttons: Children<Button>,
    page_links: Vec<PageLink>,
    client_script: ClientScript,
}

impl Form {
    pub(crate) fn new(title: String, hide_navbar: bool) -> Self {
        Self {
            title,
            hide_navbar,
            fields: Children::default(),
            field_groups: Children::default(),
            sublists: Children::default(),
            tabs: Children::default(),
            buttons: Children::default(),
            page_links: Vec::new(),
            client_script: ClientScript::default(),
        }
    }

    pub fn fields(&self) -> &Children<Field> {
        &self.fields
    }

    pub fn field_groups(&self) -> &Children<FieldGroup> {
        &self.field_groups
    }

    pub fn sublists(&self) -> &Children<Sublist> {
        &self.sublists
    }

    pub fn tabs(&self) -> &Children<Tab> {
        &self.tabs
    }

    pub fn buttons(&self) -> &Children<Button> {
        &self.buttons
    }

    pub fn page_links(&self) -> &[PageLink] {
        &self.page_links
    }

    /// Adds a field. A `container` must name a tab or field group already on
    /// the form.
    pub fn add_field(&mut self, options: AddFieldOptions) -> WidgetResult<&mut Field> {
        const OP: &str = "Form.addField";
        let field = Field::from_options(OP, options)?;
        if let Some(container) = field.container.as_deref() {
            if !self.tabs.contains(container) && !self.field_groups.contains(container) {
                return Err(WidgetError::unknown(OP, "container", container));
            }
        }
        self.fields.push_unique(field, OP, "field")
    }

    pub fn get_field(&self, id: &str) -> Option<&Field> {
        self.fields.get(id)
    }

    pub fn get_field_mut(&mut self, id: &str) -> Option<&mut Field> {
        self.fields.get_mut(id)
    }

    pub fn get_field_ids(&self) -> Vec<String> {
        self.fields.ids()
    }

    pub fn add_field_group(
        &mut self,
        options: AddFieldGroupOptions,
    ) -> WidgetResult<&mut FieldGroup> {
        const OP: &str = "Form.addFieldGroup";
        let group = FieldGroup::from_options(OP, options)?;
        self.ensure_tab(OP, group.tab.as_deref())?;
        self.field_groups.push_unique(group, OP, "field group")
    }

    pub fn get_field_group(&self, id: &str) -> Option<&FieldGroup> {
        self.field_groups.get(id)
    }

    pub fn get_field_group_mut(&mut self, id: &str) -> Option<&mut FieldGroup> {
        self.field_groups.get_mut(id)
    }

    pub fn add_sublist(&mut self, options: AddSublistOptions) -> WidgetResult<&mut Sublist> {
        const OP: &str = "Form.addSublist";
        let sublist = Sublist::from_options(OP, options)?;
        self.ensure_tab(OP, sublist.tab.as_deref())?;
        self.sublists.push_unique(sublist, OP, "sublist")
    }

    pub fn get_sublist(&self, id: &str) -> Option<&Sublist> {
        self.sublists.get(id)
    }

    pub fn get_sublist_mut(&mut self, id: &str) -> Option<&mut Sublist> {
        self.sublists.get_mut(id)
    }

    pub fn add_tab(&mut self, options: AddTabOptions) -> WidgetResult<&mut Tab> {
        const OP: &str = "Form.addTab";
        let tab = Tab::from_options(OP, options)?;
        self.tabs.push_unique(tab, OP, "tab")
    }

    /// Adds a subtab under an existing tab.
    pub fn add_subtab(&mut self, options: AddSubtabOptions) -> WidgetResult<&mut Tab> {
        const OP: &str = "Form.addSubtab";
        let AddSubtabOptions { id, label, tab } = options;
        let mut subtab = Tab::from_options(OP, AddTabOptions { id, label })?;
        let parent = required(tab, OP, "tab")?;
        self.ensure_tab(OP, Some(&parent))?;
        subtab.parent = Some(parent);
        self.tabs.push_unique(subtab, OP, "tab")
    }

    pub fn get_tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.get(id)
    }

    pub fn get_tab_mut(&mut self, id: &str) -> Option<&mut Tab> {
        self.tabs.get_mut(id)
    }

    pub fn get_tab_ids(&self) -> Vec<String> {
        self.tabs.ids()
    }

    pub fn add_button(&mut self, options: AddButtonOptions) -> WidgetResult<&mut Button> {
        const OP: &str = "Form.addButton";
        let button = Button::from_options(OP, options)?;
        self.buttons.push_unique(button, OP, "button")
    }

    /// Adds the submit button, labelled "Submit" unless `label` is given.
    pub fn add_submit_button(&mut self, label: Option<&str>) -> WidgetResult<&mut Button> {
        let button = Button::new(SUBMIT_BUTTON_ID, label.unwrap_or("Submit"));
        self.buttons
            .push_unique(button, "Form.addSubmitButton", "button")
    }

    pub fn add_reset_button(&mut self, label: Option<&str>) -> WidgetResult<&mut Button> {
        let button = Button::new(RESET_BUTTON_ID, label.unwrap_or("Reset"));
        self.buttons
            .push_unique(button, "Form.addResetButton", "button")
    }

    pub fn get_button(&self, id: &str) -> Option<&Button> {
        self.buttons.get(id)
    }

    pub fn get_button_mut(&mut self, id: &str) -> Option<&mut Button> {
        self.buttons.get_mut(id)
    }

    pub fn add_page_link(&mut self, options: AddPageLinkOptions) -> WidgetResult<&mut Self> {
        let link = PageLink::from_options("Form.addPageLink", options)?;
        self.page_links.push(link);
        Ok(self)
    }

    /// Applies default values to the form's fields, skipping unknown ids.
    pub fn update_default_values<I, K, V>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        let mut applied = 0;
        for (id, value) in values {
            match self.fields.get_mut(id.as_ref()) {
                Some(field) => {
                    field.default_value = Some(value.into());
                    applied += 1;
                }
                None => debug!(field = id.as_ref(), "ignoring default for unknown field"),
            }
        }
        applied
    }

    pub fn client_script(&self) -> &ClientScript {
        &self.client_script
    }

    pub fn client_script_mut(&mut self) -> &mut ClientScript {
        &mut self.client_script
    }

    fn ensure_tab(&self, operation: &'static str, tab: Option<&str>) -> WidgetResult<()> {
        match tab {
            Some(id) if !self.tabs.contains(id) => Err(WidgetError::unknown(operation, "tab", id)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::enums::FieldDisplayType;
    use serde_json::json;

    fn form() -> Form {
        Form::new("Hello World".into(), false)
    }

    #[test]
    fn chained_handle_updates_are_visible_through_get_field() {
        let mut form = form();
        form.add_field(AddFieldOptions::new("custpage_comments", "Current Comments", "textarea"))
            .unwrap()
            .update_display_type(FieldDisplayType::Inline)
            .set_default_value("Foo Bar");

        let field = form.get_field("custpage_comments").unwrap();
        assert_eq!(field.display_type, FieldDisplayType::Inline);
        assert_eq!(field.default_value, Some(json!("Foo Bar")));
    }

    #[test]
    fn duplicate_field_id_is_rejected() {
        let mut form = form();
        form.add_field(AddFieldOptions::new("custpage_a", "A", "text"))
            .unwrap();
        let err = form
            .add_field(AddFieldOptions::new("custpage_a", "Again", "textarea"))
            .unwrap_err();
        assert!(matches!(err, WidgetError::DuplicateId { .. }));
        assert_eq!(form.get_field("custpage_a").unwrap().label, "A");
    }

    #[test]
    fn containers_must_exist() {
        let mut form = form();
        let err = form
            .add_field(AddFieldOptions::new("custpage_a", "A", "text").with_container("grp"))
            .unwrap_err();
        assert!(matches!(err, WidgetError::UnknownReference { kind: "container", .. }));

        form.add_field_group(AddFieldGroupOptions::new("grp", "Group"))
            .unwrap();
        form.add_field(AddFieldOptions::new("custpage_a", "A", "text").with_container("grp"))
            .unwrap();
        assert_eq!(form.fields().len(), 1);
    }

    #[test]
    fn subtabs_need_a_parent_tab() {
        let mut form = form();
        let err = form
            .add_subtab(AddSubtabOptions::new("sub", "Sub", "main"))
            .unwrap_err();
        assert!(matches!(err, WidgetError::UnknownReference { kind: "tab", .. }));

        form.add_tab(AddTabOptions::new("main", "Main")).unwrap();
        let subtab = form
            .add_subtab(AddSubtabOptions::new("sub", "Sub", "main"))
            .unwrap();
        assert!(subtab.is_subtab());
        assert_eq!(form.get_tab_ids(), vec!["main", "sub"]);
    }

    #[test]
    fn submit_and_reset_buttons_use_default_labels() {
        let mut form = form();
        form.add_submit_button(None).unwrap();
        form.add_reset_button(Some("Start Over")).unwrap();
        assert_eq!(form.get_button(SUBMIT_BUTTON_ID).unwrap().label, "Submit");
        assert_eq!(form.get_button(RESET_BUTTON_ID).unwrap().label, "Start Over");
        assert!(form.add_submit_button(Some("Save")).is_err());
    }

    #[test]
    fn update_default_values_skips_unknown_ids() {
        let mut form = form();
        form.add_field(AddFieldOptions::new("custpage_a", "A", "text"))
            .unwrap();
        let applied = form.update_default_values([("custpage_a", "x"), ("custpage_zzz", "y")]);
        assert_eq!(applied, 1);
        assert_eq!(
            form.get_field("custpage_a").unwrap().default_value,
            Some(json!("x"))
        );
    }
}
