//! Entry points creating the top-level pages.

use serde::Deserialize;

use crate::errors::{required, WidgetResult};
use crate::widget::{Assistant, Form, List};

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormOptions {
    pub title: Option<String>,
    pub hide_navbar: Option<bool>,
}

impl CreateFormOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            hide_navbar: None,
        }
    }

    pub fn hide_navbar(mut self, hide: bool) -> Self {
        self.hide_navbar = Some(hide);
        self
    }
}

pub type CreateAssistantOptions = CreateFormOptions;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CreateListOptions {
    pub title: Option<String>,
}

impl CreateListOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

pub fn create_form(options: CreateFormOptions) -> WidgetResult<Form> {
    let title = required(options.title, "serverWidget.createForm", "title")?;
    Ok(Form::new(title, options.hide_navbar.unwrap_or(false)))
}

pub fn create_list(options: CreateListOptions) -> WidgetResult<List> {
    let title = required(options.title, "serverWidget.createList", "title")?;
    Ok(List::new(title))
}

pub fn create_assistant(options: CreateAssistantOptions) -> WidgetResult<Assistant> {
    let title = required(options.title, "serverWidget.createAssistant", "title")?;
    Ok(Assistant::new(title, options.hide_navbar.unwrap_or(false)))
}
