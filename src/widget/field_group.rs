use serde::{Deserialize, Serialize};

use crate::errors::{required, WidgetResult};
use crate::widget::Identified;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AddFieldGroupOptions {
    pub id: Option<String>,
    pub label: Option<String>,
    /// Tab the group is rendered on.
    pub tab: Option<String>,
}

impl AddFieldGroupOptions {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            label: Some(label.into()),
            tab: None,
        }
    }

    pub fn on_tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = Some(tab.into());
        self
    }
}

/// Visual grouping of fields; fields join a group through their `container`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldGroup {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
    pub is_collapsed: bool,
    pub is_collapsible: bool,
    pub is_border_hidden: bool,
    pub is_single_column: bool,
}

impl FieldGroup {
    pub(crate) fn from_options(
        operation: &'static str,
        options: AddFieldGroupOptions,
    ) -> WidgetResult<Self> {
        let id = required(options.id, operation, "id")?;
        let label = required(options.label, operation, "label")?;
        Ok(Self {
            id,
            label,
            tab: options.tab,
            is_collapsed: false,
            is_collapsible: false,
            is_border_hidden: false,
            is_single_column: false,
        })
    }

    /// A collapsed group is necessarily collapsible.
    pub fn set_collapsed(&mut self, collapsed: bool) -> &mut Self {
        self.is_collapsed = collapsed;
        if collapsed {
            self.is_collapsible = true;
        }
        self
    }

    pub fn set_collapsible(&mut self, collapsible: bool) -> &mut Self {
        self.is_collapsible = collapsible;
        if !collapsible {
            self.is_collapsed = false;
        }
        self
    }

    pub fn set_border_hidden(&mut self, hidden: bool) -> &mut Self {
        self.is_border_hidden = hidden;
        self
    }

    pub fn set_single_column(&mut self, single: bool) -> &mut Self {
        self.is_single_column = single;
        self
    }
}

impl Identified for FieldGroup {
    fn id(&self) -> &str {
        &self.id
    }
}
