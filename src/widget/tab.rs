use serde::{Deserialize, Serialize};

use crate::errors::{required, WidgetResult};
use crate::widget::Identified;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AddTabOptions {
    pub id: Option<String>,
    pub label: Option<String>,
}

impl AddTabOptions {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            label: Some(label.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AddSubtabOptions {
    pub id: Option<String>,
    pub label: Option<String>,
    /// Parent tab id.
    pub tab: Option<String>,
}

impl AddSubtabOptions {
    pub fn new(id: impl Into<String>, label: impl Into<String>, tab: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            label: Some(label.into()),
            tab: Some(tab.into()),
        }
    }
}

/// A tab or, when `parent` is set, a subtab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Tab {
    pub(crate) fn from_options(
        operation: &'static str,
        options: AddTabOptions,
    ) -> WidgetResult<Self> {
        let id = required(options.id, operation, "id")?;
        let label = required(options.label, operation, "label")?;
        Ok(Self {
            id,
            label,
            help_text: None,
            parent: None,
        })
    }

    pub fn is_subtab(&self) -> bool {
        self.parent.is_some()
    }

    pub fn set_help_text(&mut self, help: impl Into<String>) -> &mut Self {
        self.help_text = Some(help.into());
        self
    }
}

impl Identified for Tab {
    fn id(&self) -> &str {
        &self.id
    }
}
