//! In-memory widget object model.
//!
//! Containers own their children outright: every add-operation builds a
//! fresh value, pushes it into an insertion-ordered collection and hands
//! back a mutable handle into that collection.

pub mod assistant;
pub mod assistant_step;
pub mod button;
pub mod enums;
pub mod field;
pub mod field_group;
pub mod form;
pub mod list;
pub mod list_column;
pub mod sublist;
pub mod tab;

use serde::{Deserialize, Serialize};

use crate::errors::{required, WidgetError, WidgetResult};

pub use assistant::{Assistant, Redirect, SendRedirectOptions, SetSplashOptions, Splash};
pub use assistant_step::{AddStepOptions, AssistantStep};
pub use button::{AddButtonOptions, Button};
pub use enums::{
    AssistantSubmitAction, FieldDisplayType, FieldType, FormPageLinkType, LayoutJustification,
    ListStyle, SublistDisplayType, SublistType, Token,
};
pub use field::{AddFieldOptions, DisplaySize, Field};
pub use field_group::{AddFieldGroupOptions, FieldGroup};
pub use form::Form;
pub use list::{AddEditColumnOptions, List, ListCell, ListRow, RowSource, SearchResult};
pub use list_column::{AddColumnOptions, ListColumn, UrlParam};
pub use sublist::{
    AddSublistOptions, GetSublistValueOptions, SetSublistValueOptions, Sublist, SublistLine,
};
pub use tab::{AddSubtabOptions, AddTabOptions, Tab};

/// Values stored in fields, sublist slots and list cells.
///
/// Scalars for most field types, arrays for select fields and
/// `{value, text}` pairs for reference columns.
pub type FieldValue = serde_json::Value;

/// Children addressable by a string id.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Insertion-ordered collection of children with per-container unique ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Children<T> {
    items: Vec<T>,
}

impl<T> Default for Children<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified> Children<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id().to_string()).collect()
    }

    /// Appends `item` unless its id is already taken.
    pub(crate) fn push_unique(
        &mut self,
        item: T,
        operation: &'static str,
        kind: &'static str,
    ) -> WidgetResult<&mut T> {
        self.insert_unique(self.items.len(), item, operation, kind)
    }

    pub(crate) fn insert_unique(
        &mut self,
        index: usize,
        item: T,
        operation: &'static str,
        kind: &'static str,
    ) -> WidgetResult<&mut T> {
        if self.contains(item.id()) {
            return Err(WidgetError::duplicate(operation, kind, item.id()));
        }
        self.items.insert(index, item);
        Ok(&mut self.items[index])
    }
}

impl<'a, T> IntoIterator for &'a Children<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Client script attached to a form, list or assistant.
///
/// The host accepts either a file cabinet id or a module path, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientScript {
    #[serde(skip_serializing_if = "Option::is_none")]
    file_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    module_path: Option<String>,
}

impl ClientScript {
    pub fn file_id(&self) -> Option<u64> {
        self.file_id
    }

    pub fn module_path(&self) -> Option<&str> {
        self.module_path.as_deref()
    }

    pub fn set_file_id(&mut self, file_id: u64) -> WidgetResult<()> {
        if self.module_path.is_some() {
            return Err(WidgetError::PropertyConflict {
                property: "clientScriptFileId",
                conflicting: "clientScriptModulePath",
            });
        }
        self.file_id = Some(file_id);
        Ok(())
    }

    pub fn set_module_path(&mut self, path: impl Into<String>) -> WidgetResult<()> {
        if self.file_id.is_some() {
            return Err(WidgetError::PropertyConflict {
                property: "clientScriptModulePath",
                conflicting: "clientScriptFileId",
            });
        }
        self.module_path = Some(path.into());
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AddPageLinkOptions {
    #[serde(rename = "type")]
    pub link_type: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

impl AddPageLinkOptions {
    pub fn new(
        link_type: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            link_type: Some(link_type.into()),
            title: Some(title.into()),
            url: Some(url.into()),
        }
    }
}

/// Navigation cross-link shown at the top of a form or list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    #[serde(rename = "type")]
    pub link_type: FormPageLinkType,
    pub title: String,
    pub url: String,
}

impl PageLink {
    pub(crate) fn from_options(
        operation: &'static str,
        options: AddPageLinkOptions,
    ) -> WidgetResult<Self> {
        let raw_type = required(options.link_type, operation, "type")?;
        let title = required(options.title, operation, "title")?;
        let url = required(options.url, operation, "url")?;
        Ok(Self {
            link_type: FormPageLinkType::parse(&raw_type)?,
            title,
            url,
        })
    }
}

/// The single value handed to a response channel.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum Page {
    Form(Form),
    List(List),
    Assistant(Assistant),
}

impl Page {
    pub fn as_form(&self) -> Option<&Form> {
        match self {
            Page::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Form> for Page {
    fn from(form: Form) -> Self {
        Page::Form(form)
    }
}

impl From<List> for Page {
    fn from(list: List) -> Self {
        Page::List(list)
    }
}

impl From<Assistant> for Page {
    fn from(assistant: Assistant) -> Self {
        Page::Assistant(assistant)
    }
}
