//! One page of an assistant, holding the values submitted on that page.

use serde::{Deserialize, Serialize};

use crate::errors::{required, WidgetResult};
use crate::widget::field::{AddFieldOptions, Field};
use crate::widget::sublist::{AddSublistOptions, GetSublistValueOptions, Sublist};
use crate::widget::{Children, FieldValue, Identified};

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AddStepOptions {
    pub id: Option<String>,
    pub label: Option<String>,
}

impl AddStepOptions {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            label: Some(label.into()),
        }
    }
}

/// A wizard page.
///
/// Accessors only ever look at the step's own fields and sublists, never at
/// sibling steps or the assistant's top-level fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantStep {
    pub id: String,
    pub label: String,
    pub step_number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    fields: Children<Field>,
    sublists: Children<Sublist>,
}

impl AssistantStep {
    pub(crate) fn from_options(
        operation: &'static str,
        options: AddStepOptions,
        step_number: usize,
    ) -> WidgetResult<Self> {
        let id = required(options.id, operation, "id")?;
        let label = required(options.label, operation, "label")?;
        Ok(Self {
            id,
            label,
            step_number,
            help_text: None,
            fields: Children::default(),
            sublists: Children::default(),
        })
    }

    pub fn set_help_text(&mut self, help: impl Into<String>) -> &mut Self {
        self.help_text = Some(help.into());
        self
    }

    pub fn add_field(&mut self, options: AddFieldOptions) -> WidgetResult<&mut Field> {
        const OP: &str = "AssistantStep.addField";
        let field = Field::from_options(OP, options)?;
        self.fields.push_unique(field, OP, "field")
    }

    pub fn add_sublist(&mut self, options: AddSublistOptions) -> WidgetResult<&mut Sublist> {
        const OP: &str = "AssistantStep.addSublist";
        let sublist = Sublist::from_options(OP, options)?;
        self.sublists.push_unique(sublist, OP, "sublist")
    }

    pub fn get_field_mut(&mut self, id: &str) -> Option<&mut Field> {
        self.fields.get_mut(id)
    }

    pub fn get_sublist_mut(&mut self, group: &str) -> Option<&mut Sublist> {
        self.sublists.get_mut(group)
    }

    /// Records a submitted value. Unknown ids are ignored.
    pub fn set_value(&mut self, id: &str, value: impl Into<FieldValue>) -> bool {
        match self.fields.get_mut(id) {
            Some(field) => {
                field.value = Some(value.into());
                true
            }
            None => false,
        }
    }

    /// Submitted value of a field on this step.
    ///
    /// Unset SELECT/MULTISELECT fields read as an empty list; every other
    /// unset or unknown field reads as an empty string.
    pub fn get_value(&self, id: &str) -> FieldValue {
        match self.fields.get(id) {
            Some(field) => match &field.value {
                Some(value) if !is_blank(value) => value.clone(),
                _ if field.field_type.is_select() => FieldValue::Array(Vec::new()),
                _ => FieldValue::String(String::new()),
            },
            None => FieldValue::String(String::new()),
        }
    }

    pub fn get_field_ids(&self) -> Vec<String> {
        self.fields.ids()
    }

    pub fn get_submitted_sublist_ids(&self) -> Vec<String> {
        self.sublists.ids()
    }

    /// Field ids of the sublist `group`, or `None` if the step has no such
    /// sublist.
    pub fn get_sublist_field_ids(&self, group: &str) -> Option<Vec<String>> {
        self.sublists.get(group).map(Sublist::field_ids)
    }

    pub fn get_line_count(&self, group: &str) -> Option<usize> {
        self.sublists.get(group).map(Sublist::line_count)
    }

    /// Reads a line value from the sublist `group`.
    ///
    /// Required keys are checked before the group is resolved. `Ok(None)`
    /// when the group is unknown; bounds errors come from the sublist itself.
    pub fn get_sublist_value(
        &self,
        group: &str,
        options: GetSublistValueOptions,
    ) -> WidgetResult<Option<&FieldValue>> {
        const OP: &str = "AssistantStep.getSublistValue";
        required(options.id.as_deref(), OP, "id")?;
        required(options.line, OP, "line")?;
        match self.sublists.get(group) {
            Some(sublist) => sublist.get_sublist_value(options),
            None => Ok(None),
        }
    }
}

impl Identified for AssistantStep {
    fn id(&self) -> &str {
        &self.id
    }
}

fn is_blank(value: &FieldValue) -> bool {
    match value {
        FieldValue::Null => true,
        FieldValue::String(text) => text.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WidgetError;
    use crate::widget::sublist::SetSublistValueOptions;
    use serde_json::json;

    fn step() -> AssistantStep {
        let mut step =
            AssistantStep::from_options("Assistant.addStep", AddStepOptions::new("s1", "One"), 1)
                .unwrap();
        step.add_field(AddFieldOptions::new("custpage_name", "Name", "text"))
            .unwrap();
        step.add_field(AddFieldOptions::new("custpage_pick", "Pick", "select"))
            .unwrap();
        step.add_field(AddFieldOptions::new("custpage_many", "Many", "multiselect"))
            .unwrap();
        step
    }

    #[test]
    fn unset_values_depend_on_field_family() {
        let step = step();
        assert_eq!(step.get_value("custpage_name"), json!(""));
        assert_eq!(step.get_value("custpage_pick"), json!([]));
        assert_eq!(step.get_value("custpage_many"), json!([]));
        assert_eq!(step.get_value("custpage_missing"), json!(""));
    }

    #[test]
    fn set_values_are_returned() {
        let mut step = step();
        assert!(step.set_value("custpage_name", "Foo"));
        assert!(step.set_value("custpage_many", json!(["1", "2"])));
        assert!(!step.set_value("custpage_missing", "x"));
        assert_eq!(step.get_value("custpage_name"), json!("Foo"));
        assert_eq!(step.get_value("custpage_many"), json!(["1", "2"]));
    }

    #[test]
    fn sublist_accessors_are_scoped_to_the_step() {
        let mut step = step();
        let sublist = step
            .add_sublist(AddSublistOptions::new("custpage_lines", "Lines", "inlineeditor"))
            .unwrap();
        sublist
            .add_field(AddFieldOptions::new("item", "Item", "text"))
            .unwrap();
        sublist
            .set_sublist_value(SetSublistValueOptions::new("item", 0, "Widget"))
            .unwrap();

        assert_eq!(step.get_line_count("custpage_lines"), Some(1));
        assert_eq!(step.get_line_count("custpage_other"), None);
        assert_eq!(
            step.get_sublist_field_ids("custpage_lines"),
            Some(vec!["item".to_string()])
        );
        assert_eq!(step.get_sublist_field_ids("custpage_other"), None);
        assert_eq!(
            step.get_sublist_value("custpage_lines", GetSublistValueOptions::new("item", 0))
                .unwrap(),
            Some(&json!("Widget"))
        );
        assert_eq!(
            step.get_sublist_value("custpage_other", GetSublistValueOptions::new("item", 0))
                .unwrap(),
            None
        );
        let err = step
            .get_sublist_value("custpage_lines", GetSublistValueOptions::new("item", 1))
            .unwrap_err();
        assert!(matches!(err, WidgetError::IndexOutOfBounds { .. }));
        assert_eq!(step.get_submitted_sublist_ids(), vec!["custpage_lines"]);
    }

    #[test]
    fn sublist_value_checks_required_keys_before_the_group() {
        let step = step();
        let err = step
            .get_sublist_value("custpage_unknown", GetSublistValueOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            WidgetError::MissingArgument {
                argument: "id",
                ..
            }
        ));

        let err = step
            .get_sublist_value(
                "custpage_unknown",
                GetSublistValueOptions {
                    id: Some("item".into()),
                    line: None,
                },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            WidgetError::MissingArgument {
                operation: "AssistantStep.getSublistValue",
                argument: "line",
            }
        ));
    }
}
