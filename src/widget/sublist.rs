//! Sublists: a fixed column schema plus a growable store of line snapshots.

use serde::{Deserialize, Serialize};

use crate::errors::{required, WidgetError, WidgetResult};
use crate::widget::button::{AddButtonOptions, Button};
use crate::widget::enums::{SublistDisplayType, SublistType, Token};
use crate::widget::field::{AddFieldOptions, Field};
use crate::widget::{Children, FieldValue, Identified};

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AddSublistOptions {
    pub id: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub sublist_type: Option<String>,
    /// Tab the sublist is rendered on.
    pub tab: Option<String>,
}

impl AddSublistOptions {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        sublist_type: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            label: Some(label.into()),
            sublist_type: Some(sublist_type.into()),
            tab: None,
        }
    }

    pub fn on_tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = Some(tab.into());
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SetSublistValueOptions {
    pub id: Option<String>,
    pub line: Option<i64>,
    pub value: Option<FieldValue>,
}

impl SetSublistValueOptions {
    pub fn new(id: impl Into<String>, line: i64, value: impl Into<FieldValue>) -> Self {
        Self {
            id: Some(id.into()),
            line: Some(line),
            value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GetSublistValueOptions {
    pub id: Option<String>,
    pub line: Option<i64>,
}

impl GetSublistValueOptions {
    pub fn new(id: impl Into<String>, line: i64) -> Self {
        Self {
            id: Some(id.into()),
            line: Some(line),
        }
    }
}

/// One line of a sublist: a value slot for every field of the sublist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SublistLine {
    fields: Vec<Field>,
}

impl SublistLine {
    pub fn slot(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.id == id)
    }

    pub fn value(&self, id: &str) -> Option<&FieldValue> {
        self.slot(id).and_then(|field| field.value.as_ref())
    }

    pub fn slot_ids(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.id.as_str()).collect()
    }

    fn slot_mut(&mut self, id: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sublist {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub sublist_type: SublistType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
    pub display_type: SublistDisplayType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_field_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totalling_field_id: Option<String>,
    fields: Children<Field>,
    lines: Vec<SublistLine>,
    buttons: Children<Button>,
}

impl Sublist {
    pub(crate) fn from_options(
        operation: &'static str,
        options: AddSublistOptions,
    ) -> WidgetResult<Self> {
        let id = required(options.id, operation, "id")?;
        let label = required(options.label, operation, "label")?;
        let raw_type = required(options.sublist_type, operation, "type")?;
        Ok(Self {
            id,
            label,
            sublist_type: SublistType::parse(&raw_type)?,
            tab: options.tab,
            display_type: SublistDisplayType::default(),
            help_text: None,
            unique_field_id: None,
            totalling_field_id: None,
            fields: Children::default(),
            lines: Vec::new(),
            buttons: Children::default(),
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[SublistLine] {
        &self.lines
    }

    pub fn fields(&self) -> &Children<Field> {
        &self.fields
    }

    pub fn buttons(&self) -> &Children<Button> {
        &self.buttons
    }

    pub fn field_ids(&self) -> Vec<String> {
        self.fields.ids()
    }

    /// Adds a column. Lines that already exist gain an empty slot for it.
    pub fn add_field(&mut self, options: AddFieldOptions) -> WidgetResult<&mut Field> {
        const OP: &str = "Sublist.addField";
        let field = Field::from_options(OP, options)?;
        if self.fields.contains(&field.id) {
            return Err(WidgetError::duplicate(OP, "field", &field.id));
        }
        for line in &mut self.lines {
            line.fields.push(field.blank_slot());
        }
        self.fields.push_unique(field, OP, "field")
    }

    pub fn get_field(&self, id: &str) -> Option<&Field> {
        self.fields.get(id)
    }

    pub fn get_field_mut(&mut self, id: &str) -> Option<&mut Field> {
        self.fields.get_mut(id)
    }

    /// Writes a value on `line`; `line == line_count()` appends a new line.
    pub fn set_sublist_value(&mut self, options: SetSublistValueOptions) -> WidgetResult<()> {
        const OP: &str = "Sublist.setSublistValue";
        let id = required(options.id, OP, "id")?;
        let line = required(options.line, OP, "line")?;
        let value = required(options.value, OP, "value")?;
        let count = self.lines.len();
        if line < 0 || line as u64 > count as u64 {
            return Err(WidgetError::IndexOutOfBounds {
                operation: OP,
                line,
                line_count: count,
            });
        }
        let index = line as usize;
        if index == count {
            let snapshot = self.fields.iter().map(Field::blank_slot).collect();
            self.lines.push(SublistLine { fields: snapshot });
        }
        if let Some(slot) = self.lines[index].slot_mut(&id) {
            slot.value = Some(value);
        }
        Ok(())
    }

    /// Reads a value; `None` when the line has no slot for `id` or the slot
    /// was never written.
    pub fn get_sublist_value(
        &self,
        options: GetSublistValueOptions,
    ) -> WidgetResult<Option<&FieldValue>> {
        const OP: &str = "Sublist.getSublistValue";
        let id = required(options.id, OP, "id")?;
        let line = required(options.line, OP, "line")?;
        let count = self.lines.len();
        if line < 0 || line as u64 >= count as u64 {
            return Err(WidgetError::IndexOutOfBounds {
                operation: OP,
                line,
                line_count: count,
            });
        }
        Ok(self.lines[line as usize].value(&id))
    }

    pub fn add_button(&mut self, options: AddButtonOptions) -> WidgetResult<&mut Button> {
        const OP: &str = "Sublist.addButton";
        let button = Button::from_options(OP, options)?;
        self.buttons.push_unique(button, OP, "button")
    }

    pub fn add_refresh_button(&mut self) -> WidgetResult<&mut Button> {
        self.buttons
            .push_unique(Button::new("refresh", "Refresh"), "Sublist.addRefreshButton", "button")
    }

    /// Adds the "Mark All" / "Unmark All" pair and returns both ids.
    pub fn add_mark_all_buttons(&mut self) -> WidgetResult<[String; 2]> {
        const OP: &str = "Sublist.addMarkAllButtons";
        if self.buttons.contains("markall") {
            return Err(WidgetError::duplicate(OP, "button", "markall"));
        }
        if self.buttons.contains("unmarkall") {
            return Err(WidgetError::duplicate(OP, "button", "unmarkall"));
        }
        self.buttons
            .push_unique(Button::new("markall", "Mark All"), OP, "button")?;
        self.buttons
            .push_unique(Button::new("unmarkall", "Unmark All"), OP, "button")?;
        Ok(["markall".to_string(), "unmarkall".to_string()])
    }

    /// Field whose values must be unique across lines.
    pub fn update_unique_field_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.unique_field_id = Some(id.into());
        self
    }

    /// Field summed into the sublist's running total.
    pub fn update_totalling_field_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.totalling_field_id = Some(id.into());
        self
    }

    pub fn set_display_type(&mut self, display_type: SublistDisplayType) -> &mut Self {
        self.display_type = display_type;
        self
    }

    pub fn set_help_text(&mut self, help: impl Into<String>) -> &mut Self {
        self.help_text = Some(help.into());
        self
    }
}

impl Identified for Sublist {
    fn id(&self) -> &str {
        &self.id
    }
}
