use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::errors::{required, WidgetResult};
use crate::widget::enums::{FieldType, LayoutJustification, Token};
use crate::widget::{FieldValue, Identified};

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AddColumnOptions {
    pub id: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub column_type: Option<String>,
    pub align: Option<String>,
}

impl AddColumnOptions {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        column_type: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            label: Some(label.into()),
            column_type: Some(column_type.into()),
            align: None,
        }
    }

    pub fn aligned(mut self, align: impl Into<String>) -> Self {
        self.align = Some(align.into());
        self
    }
}

/// A query parameter appended to a column URL.
///
/// When `dynamic` is set, `value` names a row key whose value is
/// substituted per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlParam {
    pub name: String,
    pub value: String,
    pub dynamic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListColumn {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub column_type: FieldType,
    pub align: LayoutJustification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub url_params: Vec<UrlParam>,
    pub dynamic_url: bool,
    pub dynamic_url_parameter: bool,
    pub show_view: bool,
    pub show_href_col: bool,
    pub is_edit_column: bool,
}

impl ListColumn {
    pub(crate) fn from_options(
        operation: &'static str,
        options: AddColumnOptions,
    ) -> WidgetResult<Self> {
        let id = required(options.id, operation, "id")?;
        let label = required(options.label, operation, "label")?;
        let raw_type = required(options.column_type, operation, "type")?;
        let column_type = FieldType::parse(&raw_type)?;
        let align = match options.align {
            Some(raw) => LayoutJustification::parse(&raw)?,
            None => LayoutJustification::default(),
        };
        Ok(Self::new(id, label, column_type, align))
    }

    fn new(id: String, label: String, column_type: FieldType, align: LayoutJustification) -> Self {
        Self {
            id,
            label,
            column_type,
            align,
            url: None,
            url_params: Vec::new(),
            dynamic_url: false,
            dynamic_url_parameter: false,
            show_view: false,
            show_href_col: false,
            is_edit_column: false,
        }
    }

    /// Synthetic Edit (or Edit/View) column placed next to `target`.
    pub(crate) fn edit_column_for(target: &ListColumn) -> Self {
        let mut column = Self::new(
            format!("editcolumn_{}", target.id),
            "Edit Column".to_string(),
            FieldType::Url,
            LayoutJustification::default(),
        );
        column.is_edit_column = true;
        column
    }

    /// Sets the base URL. A dynamic URL names a row key holding the base
    /// URL for each row.
    pub fn set_url(&mut self, url: impl Into<String>, dynamic: bool) -> &mut Self {
        self.url = Some(url.into());
        self.dynamic_url = dynamic;
        self
    }

    pub fn add_param_to_url(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        dynamic: bool,
    ) -> &mut Self {
        self.url_params.push(UrlParam {
            name: name.into(),
            value: value.into(),
            dynamic,
        });
        if dynamic {
            self.dynamic_url_parameter = true;
        }
        self
    }

    /// URL with dynamic parameters left as `{alias}` placeholders.
    pub fn url_template(&self) -> Option<String> {
        let base = if self.dynamic_url {
            format!("{{{}}}", self.url.as_deref()?)
        } else {
            self.url.clone()?
        };
        let query: Vec<String> = self
            .url_params
            .iter()
            .map(|param| {
                if param.dynamic {
                    format!("{}={{{}}}", param.name, param.value)
                } else {
                    format!("{}={}", param.name, param.value)
                }
            })
            .collect();
        Some(join_query(base, &query))
    }

    /// Resolves the URL for one row.
    ///
    /// Returns `None` when the column has no URL or the row lacks a value
    /// for any dynamic part.
    pub fn resolve_url(&self, row: &Map<String, FieldValue>) -> Option<String> {
        let url = self.url.as_deref()?;
        let base = if self.dynamic_url {
            row.get(url).and_then(value_text)?
        } else {
            url.to_string()
        };
        let mut query = Vec::with_capacity(self.url_params.len());
        for param in &self.url_params {
            let value = if param.dynamic {
                row.get(&param.value).and_then(value_text)?
            } else {
                param.value.clone()
            };
            query.push(format!("{}={}", param.name, value));
        }
        Some(join_query(base, &query))
    }
}

impl Identified for ListColumn {
    fn id(&self) -> &str {
        &self.id
    }
}

fn join_query(base: String, query: &[String]) -> String {
    if query.is_empty() {
        return base;
    }
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base, separator, query.join("&"))
}

/// Plain-text form of a row value used inside URLs.
///
/// Reference values (`[{value, text}]`) resolve to their first `value`.
pub(crate) fn value_text(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Null => None,
        FieldValue::String(text) => Some(text.clone()),
        FieldValue::Number(number) => Some(number.to_string()),
        FieldValue::Bool(flag) => Some(String::from(if *flag { "T" } else { "F" })),
        FieldValue::Array(items) => items.first().and_then(value_text),
        FieldValue::Object(map) => map.get("value").and_then(value_text),
    }
}
