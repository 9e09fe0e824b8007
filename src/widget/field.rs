//! The atomic UI element shared by forms, sublists, assistants and steps.

use serde::{Deserialize, Serialize};

use crate::errors::{required, WidgetResult};
use crate::widget::enums::{FieldDisplayType, FieldType, Token};
use crate::widget::{FieldValue, Identified};

/// Options accepted by every `addField` operation.
///
/// `id`, `label` and `field_type` are required; they are modelled as options
/// so an absent key surfaces as [`WidgetError::MissingArgument`].
///
/// [`WidgetError::MissingArgument`]: crate::errors::WidgetError::MissingArgument
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddFieldOptions {
    pub id: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub container: Option<String>,
    pub source: Option<String>,
}

impl AddFieldOptions {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            label: Some(label.into()),
            field_type: Some(field_type.into()),
            container: None,
            source: None,
        }
    }

    /// Places the field inside a tab or field group.
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }

    /// Source list or record for select fields.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Width and height hints for text-like fields.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DisplaySize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub display_type: FieldDisplayType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    pub is_mandatory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_size: Option<DisplaySize>,
}

impl Field {
    /// Builds a fresh field from `options`.
    ///
    /// Required keys are checked in the order id, label, type; the type token
    /// is validated only once it is known to be present.
    pub(crate) fn from_options(
        operation: &'static str,
        options: AddFieldOptions,
    ) -> WidgetResult<Self> {
        let AddFieldOptions {
            id,
            label,
            field_type,
            container,
            source,
        } = options;
        let id = required(id, operation, "id")?;
        let label = required(label, operation, "label")?;
        let raw_type = required(field_type, operation, "type")?;
        let field_type = FieldType::parse(&raw_type)?;
        Ok(Self {
            id,
            label,
            field_type,
            container: container.filter(|value| !value.is_empty()),
            source: source.filter(|value| !value.is_empty()),
            display_type: FieldDisplayType::default(),
            default_value: None,
            value: None,
            help_text: None,
            is_mandatory: false,
            max_length: None,
            display_size: None,
        })
    }

    /// Sets the display mode and hands the field back for chaining.
    pub fn update_display_type(&mut self, display_type: FieldDisplayType) -> &mut Self {
        self.display_type = display_type;
        self
    }

    pub fn set_default_value(&mut self, value: impl Into<FieldValue>) -> &mut Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn set_help_text(&mut self, help: impl Into<String>) -> &mut Self {
        self.help_text = Some(help.into());
        self
    }

    pub fn update_display_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.display_size = Some(DisplaySize { width, height });
        self
    }

    pub fn set_mandatory(&mut self, mandatory: bool) -> &mut Self {
        self.is_mandatory = mandatory;
        self
    }

    pub fn set_max_length(&mut self, max_length: u32) -> &mut Self {
        self.max_length = Some(max_length);
        self
    }

    /// Copy of the field with its submitted value cleared, used as the
    /// per-line slot template.
    pub(crate) fn blank_slot(&self) -> Self {
        let mut slot = self.clone();
        slot.value = None;
        slot
    }
}

impl Identified for Field {
    fn id(&self) -> &str {
        &self.id
    }
}
