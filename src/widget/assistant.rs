//! Multi-step assistants (wizards).
//!
//! The assistant is a navigation oracle: it reports the step after the
//! current one and whether the wizard is finished, but moving between steps
//! is left to the caller through [`Assistant::set_current_step`].

use serde::{Deserialize, Serialize};
use serde_json::Map;
use tracing::debug;

use crate::errors::{required, WidgetError, WidgetResult};
use crate::widget::assistant_step::{AddStepOptions, AssistantStep};
use crate::widget::enums::AssistantSubmitAction;
use crate::widget::field::{AddFieldOptions, Field};
use crate::widget::field_group::{AddFieldGroupOptions, FieldGroup};
use crate::widget::sublist::{AddSublistOptions, Sublist};
use crate::widget::{Children, ClientScript, FieldValue};

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SetSplashOptions {
    pub title: Option<String>,
    pub text1: Option<String>,
    pub text2: Option<String>,
}

impl SetSplashOptions {
    pub fn new(title: impl Into<String>, text1: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            text1: Some(text1.into()),
            text2: None,
        }
    }

    pub fn with_text2(mut self, text2: impl Into<String>) -> Self {
        self.text2 = Some(text2.into());
        self
    }
}

/// Welcome screen shown before the first step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Splash {
    pub title: String,
    pub text1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text2: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendRedirectOptions {
    /// Script, record or task id to redirect to.
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub redirect_type: Option<String>,
    #[serde(default)]
    pub parameters: Map<String, FieldValue>,
}

impl SendRedirectOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

/// Redirect requested by the script; recorded rather than performed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Redirect {
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub redirect_type: Option<String>,
    pub parameters: Map<String, FieldValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assistant {
    pub title: String,
    pub hide_navbar: bool,
    pub hide_step_number: bool,
    pub hide_add_to_shortcuts_link: bool,
    /// Steps may be completed in any order.
    pub is_not_ordered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splash: Option<Splash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Redirect>,
    fields: Children<Field>,
    field_groups: Children<FieldGroup>,
    sublists: Children<Sublist>,
    steps: Children<AssistantStep>,
    current_step: Option<String>,
    last_step: Option<String>,
    last_action: Option<AssistantSubmitAction>,
    client_script: ClientScript,
}

impl Assistant {
    pub(crate) fn new(title: String, hide_navbar: bool) -> Self {
        Self {
            title,
            hide_navbar,
            hide_step_number: false,
            hide_add_to_shortcuts_link: false,
            is_not_ordered: false,
            error_html: None,
            finished_html: None,
            splash: None,
            redirect: None,
            fields: Children::default(),
            field_groups: Children::default(),
            sublists: Children::default(),
            steps: Children::default(),
            current_step: None,
            last_step: None,
            last_action: None,
            client_script: ClientScript::default(),
        }
    }

    // -- steps and navigation -------------------------------------------

    /// Appends a step; its step number is its 1-based position.
    pub fn add_step(&mut self, options: AddStepOptions) -> WidgetResult<&mut AssistantStep> {
        const OP: &str = "Assistant.addStep";
        let step = AssistantStep::from_options(OP, options, self.steps.len() + 1)?;
        self.steps.push_unique(step, OP, "step")
    }

    pub fn get_step(&self, id: &str) -> Option<&AssistantStep> {
        self.steps.get(id)
    }

    pub fn get_step_mut(&mut self, id: &str) -> Option<&mut AssistantStep> {
        self.steps.get_mut(id)
    }

    pub fn get_steps(&self) -> &[AssistantStep] {
        self.steps.as_slice()
    }

    pub fn get_step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn set_current_step(&mut self, id: &str) -> WidgetResult<&mut AssistantStep> {
        const OP: &str = "Assistant.currentStep";
        let step = self
            .steps
            .get_mut(id)
            .ok_or_else(|| WidgetError::unknown(OP, "step", id))?;
        self.current_step = Some(id.to_string());
        Ok(step)
    }

    pub fn current_step(&self) -> Option<&AssistantStep> {
        self.current_step
            .as_deref()
            .and_then(|id| self.steps.get(id))
    }

    fn current_index(&self) -> Option<usize> {
        self.current_step
            .as_deref()
            .and_then(|id| self.steps.position(id))
    }

    /// Step following the current one; `None` on the last step or when no
    /// step is current. Does not move the assistant.
    pub fn get_next_step(&self) -> Option<&AssistantStep> {
        let index = self.current_index()?;
        self.steps.at(index + 1)
    }

    /// True once the current step is the last one.
    pub fn is_finished(&self) -> bool {
        match self.current_index() {
            Some(index) => index + 1 == self.steps.len(),
            None => false,
        }
    }

    /// Records the button pressed on the current step.
    pub fn record_action(&mut self, action: AssistantSubmitAction) {
        self.last_action = Some(action);
        self.last_step = self.current_step.clone();
    }

    pub fn get_last_action(&self) -> Option<AssistantSubmitAction> {
        self.last_action
    }

    /// Step the last action was submitted from.
    pub fn get_last_step(&self) -> Option<&AssistantStep> {
        self.last_step.as_deref().and_then(|id| self.steps.get(id))
    }

    // -- fields, groups and sublists ------------------------------------

    /// Adds a field. A `container` must name a field group already on the
    /// assistant.
    pub fn add_field(&mut self, options: AddFieldOptions) -> WidgetResult<&mut Field> {
        const OP: &str = "Assistant.addField";
        let field = Field::from_options(OP, options)?;
        if let Some(container) = field.container.as_deref() {
            if !self.field_groups.contains(container) {
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

    pub fn add_field_group(
        &mut self,
        options: AddFieldGroupOptions,
    ) -> WidgetResult<&mut FieldGroup> {
        const OP: &str = "Assistant.addFieldGroup";
        let group = FieldGroup::from_options(OP, options)?;
        self.field_groups.push_unique(group, OP, "field group")
    }

    pub fn get_field_group(&self, id: &str) -> Option<&FieldGroup> {
        self.field_groups.get(id)
    }

    pub fn get_field_group_mut(&mut self, id: &str) -> Option<&mut FieldGroup> {
        self.field_groups.get_mut(id)
    }

    pub fn add_sublist(&mut self, options: AddSublistOptions) -> WidgetResult<&mut Sublist> {
        const OP: &str = "Assistant.addSublist";
        let sublist = Sublist::from_options(OP, options)?;
        self.sublists.push_unique(sublist, OP, "sublist")
    }

    pub fn get_sublist(&self, id: &str) -> Option<&Sublist> {
        self.sublists.get(id)
    }

    pub fn get_sublist_mut(&mut self, id: &str) -> Option<&mut Sublist> {
        self.sublists.get_mut(id)
    }

    pub fn get_field_ids(&self) -> Vec<String> {
        self.fields.ids()
    }

    /// Ids of the fields whose container is the field group `group`.
    pub fn get_field_ids_by_field_group(&self, group: &str) -> Vec<String> {
        self.fields
            .iter()
            .filter(|field| field.container.as_deref() == Some(group))
            .map(|field| field.id.clone())
            .collect()
    }

    pub fn get_field_group_ids(&self) -> Vec<String> {
        self.field_groups.ids()
    }

    pub fn get_sublist_ids(&self) -> Vec<String> {
        self.sublists.ids()
    }

    /// Applies default values to the assistant's own fields.
    ///
    /// Ids that match no field are skipped without error. Returns the
    /// number of fields updated.
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

    // -- page metadata --------------------------------------------------

    pub fn set_error_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.error_html = Some(html.into());
        self
    }

    pub fn has_error_html(&self) -> bool {
        self.error_html.is_some()
    }

    pub fn set_finished_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.finished_html = Some(html.into());
        self
    }

    pub fn set_splash(&mut self, options: SetSplashOptions) -> WidgetResult<&Splash> {
        const OP: &str = "Assistant.setSplash";
        let title = required(options.title, OP, "title")?;
        let text1 = required(options.text1, OP, "text1")?;
        let splash: &Splash = self.splash.insert(Splash {
            title,
            text1,
            text2: options.text2.filter(|text| !text.is_empty()),
        });
        Ok(splash)
    }

    pub fn send_redirect(&mut self, options: SendRedirectOptions) -> WidgetResult<&Redirect> {
        const OP: &str = "Assistant.sendRedirect";
        let id = required(options.id, OP, "id")?;
        let redirect: &Redirect = self.redirect.insert(Redirect {
            id,
            redirect_type: options.redirect_type,
            parameters: options.parameters,
        });
        Ok(redirect)
    }

    pub fn client_script(&self) -> &ClientScript {
        &self.client_script
    }

    pub fn client_script_mut(&mut self) -> &mut ClientScript {
        &mut self.client_script
    }
}
