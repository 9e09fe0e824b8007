use serde::{Deserialize, Serialize};

use crate::errors::{required, WidgetResult};
use crate::widget::Identified;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddButtonOptions {
    pub id: Option<String>,
    pub label: Option<String>,
    pub function_name: Option<String>,
}

impl AddButtonOptions {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            label: Some(label.into()),
            function_name: None,
        }
    }

    /// Client function triggered on click.
    pub fn with_function_name(mut self, function_name: impl Into<String>) -> Self {
        self.function_name = Some(function_name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    pub is_disabled: bool,
    pub is_hidden: bool,
}

impl Button {
    pub(crate) fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            function_name: None,
            is_disabled: false,
            is_hidden: false,
        }
    }

    pub(crate) fn from_options(
        operation: &'static str,
        options: AddButtonOptions,
    ) -> WidgetResult<Self> {
        let id = required(options.id, operation, "id")?;
        let label = required(options.label, operation, "label")?;
        let mut button = Self::new(id, label);
        button.function_name = options.function_name.filter(|name| !name.is_empty());
        Ok(button)
    }
}

impl Identified for Button {
    fn id(&self) -> &str {
        &self.id
    }
}
