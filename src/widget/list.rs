//! Read-oriented list pages: typed columns and rows built from records.

use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::errors::{required, WidgetError, WidgetResult};
use crate::widget::button::{AddButtonOptions, Button};
use crate::widget::enums::ListStyle;
use crate::widget::list_column::{AddColumnOptions, ListColumn};
use crate::widget::{AddPageLinkOptions, Children, ClientScript, FieldValue, PageLink};

/// A record as returned by a saved search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub record_type: String,
    #[serde(default)]
    pub values: Map<String, FieldValue>,
}

/// Data accepted by [`List::add_row`].
#[derive(Debug, Clone, PartialEq)]
pub enum RowSource {
    /// Flat column-id to value pairs.
    Values(Map<String, FieldValue>),
    Search(SearchResult),
}

impl RowSource {
    /// Flattens the source into column-id to value pairs.
    ///
    /// Search results expose their record id as `id` unless a column value
    /// with that key is already present.
    fn into_record(self) -> Map<String, FieldValue> {
        match self {
            RowSource::Values(values) => values,
            RowSource::Search(result) => {
                let mut values = result.values;
                if !values.contains_key("id") {
                    values.insert("id".to_string(), FieldValue::String(result.id));
                }
                values
            }
        }
    }
}

impl From<Map<String, FieldValue>> for RowSource {
    fn from(values: Map<String, FieldValue>) -> Self {
        RowSource::Values(values)
    }
}

impl From<SearchResult> for RowSource {
    fn from(result: SearchResult) -> Self {
        RowSource::Search(result)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddEditColumnOptions {
    /// Id of the column the edit column is placed in front of.
    pub column: Option<String>,
    #[serde(default)]
    pub show_view: bool,
    #[serde(default)]
    pub show_href_col: bool,
    pub link: Option<String>,
    pub link_param: Option<String>,
    pub link_param_name: Option<String>,
}

impl AddEditColumnOptions {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            ..Self::default()
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_link_param(mut self, param: impl Into<String>) -> Self {
        self.link_param = Some(param.into());
        self
    }

    pub fn with_link_param_name(mut self, name: impl Into<String>) -> Self {
        self.link_param_name = Some(name.into());
        self
    }

    pub fn show_view(mut self) -> Self {
        self.show_view = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCell {
    pub column_id: String,
    pub value: FieldValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListRow {
    pub cells: Vec<ListCell>,
}

impl ListRow {
    pub fn cell(&self, column_id: &str) -> Option<&ListCell> {
        self.cells.iter().find(|cell| cell.column_id == column_id)
    }

    pub fn value(&self, column_id: &str) -> Option<&FieldValue> {
        self.cell(column_id).map(|cell| &cell.value)
    }

    pub fn column_ids(&self) -> Vec<&str> {
        self.cells.iter().map(|cell| cell.column_id.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub title: String,
    pub style: ListStyle,
    columns: Children<ListColumn>,
    rows: Vec<ListRow>,
    buttons: Children<Button>,
    page_links: Vec<PageLink>,
    client_script: ClientScript,
}

impl List {
    pub(crate) fn new(title: String) -> Self {
        Self {
            title,
            style: ListStyle::default(),
            columns: Children::default(),
            rows: Vec::new(),
            buttons: Children::default(),
            page_links: Vec::new(),
            client_script: ClientScript::default(),
        }
    }

    pub fn columns(&self) -> &Children<ListColumn> {
        &self.columns
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn buttons(&self) -> &Children<Button> {
        &self.buttons
    }

    pub fn page_links(&self) -> &[PageLink] {
        &self.page_links
    }

    pub fn client_script(&self) -> &ClientScript {
        &self.client_script
    }

    pub fn client_script_mut(&mut self) -> &mut ClientScript {
        &mut self.client_script
    }

    pub fn set_style(&mut self, style: ListStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub fn add_button(&mut self, options: AddButtonOptions) -> WidgetResult<&mut Button> {
        const OP: &str = "List.addButton";
        let button = Button::from_options(OP, options)?;
        self.buttons.push_unique(button, OP, "button")
    }

    pub fn add_column(&mut self, options: AddColumnOptions) -> WidgetResult<&mut ListColumn> {
        const OP: &str = "List.addColumn";
        let column = ListColumn::from_options(OP, options)?;
        self.columns.push_unique(column, OP, "column")
    }

    pub fn get_column(&self, id: &str) -> Option<&ListColumn> {
        self.columns.get(id)
    }

    pub fn get_column_mut(&mut self, id: &str) -> Option<&mut ListColumn> {
        self.columns.get_mut(id)
    }

    /// Inserts an Edit (or Edit/View) link column directly left of the
    /// referenced column.
    ///
    /// The link parameter is read per row from `link_param` (the referenced
    /// column's id by default) and sent as `link_param_name` (`id` by
    /// default).
    pub fn add_edit_column(
        &mut self,
        options: AddEditColumnOptions,
    ) -> WidgetResult<&mut ListColumn> {
        const OP: &str = "List.addEditColumn";
        let target_id = required(options.column, OP, "column")?;
        let index = self
            .columns
            .position(&target_id)
            .ok_or_else(|| WidgetError::unknown(OP, "column", &target_id))?;
        let mut column = match self.columns.at(index) {
            Some(target) => ListColumn::edit_column_for(target),
            None => return Err(WidgetError::unknown(OP, "column", &target_id)),
        };
        column.show_view = options.show_view;
        column.show_href_col = options.show_href_col;
        if let Some(link) = options.link {
            column.set_url(link, false);
        }
        let param_value = options.link_param.unwrap_or_else(|| target_id.clone());
        let param_name = options
            .link_param_name
            .unwrap_or_else(|| "id".to_string());
        column.add_param_to_url(param_name, param_value, true);
        self.columns.insert_unique(index, column, OP, "column")
    }

    pub fn add_page_link(&mut self, options: AddPageLinkOptions) -> WidgetResult<&mut Self> {
        let link = PageLink::from_options("List.addPageLink", options)?;
        self.page_links.push(link);
        Ok(self)
    }

    /// Materializes one row holding only the keys that match a column.
    ///
    /// Cells follow column order. Link columns get their URL resolved
    /// against the whole record, so link parameters may come from keys that
    /// are not themselves columns.
    pub fn add_row(&mut self, row: impl Into<RowSource>) -> &mut Self {
        let record = row.into().into_record();
        let mut cells = Vec::new();
        for column in &self.columns {
            if column.is_edit_column {
                if let Some(url) = column.resolve_url(&record) {
                    cells.push(ListCell {
                        column_id: column.id.clone(),
                        value: FieldValue::Null,
                        url: Some(url),
                    });
                }
                continue;
            }
            if let Some(value) = record.get(&column.id) {
                cells.push(ListCell {
                    column_id: column.id.clone(),
                    value: value.clone(),
                    url: column.resolve_url(&record),
                });
            }
        }
        self.rows.push(ListRow { cells });
        self
    }

    pub fn add_rows<I, R>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RowSource>,
    {
        for row in rows {
            self.add_row(row);
        }
        self
    }
}
