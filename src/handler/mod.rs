//! Customer comment request handler.
//!
//! GET renders the customer's current comments next to an editable greeting;
//! POST saves the greeting as the customer's comments and confirms the save.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::config::{Config, ConfigError};
use crate::errors::WidgetError;
use crate::record::{
    record_id, reference_value, FieldLookup, FieldMap, FieldUpdate, LookupRequest, RecordError,
    SubmitFieldsRequest,
};
use crate::server_widget::{create_form, CreateFormOptions};
use crate::widget::enums::FieldDisplayType;
use crate::widget::{AddFieldOptions, FieldValue, Form, Page};

pub const CUSTOMER_ID_PARAM: &str = "customerid";
pub const COMMENTS_FIELD: &str = "custpage_comments";
pub const CUSTOMER_ID_FIELD: &str = "custpage_customerid";
pub const HELLO_FIELD: &str = "custpage_hello";
pub const SUCCESS_FIELD: &str = "custpage_success";
pub const ERROR_FIELD: &str = "custpage_error";

const COMMENTS_COLUMN: &str = "comments";
const INTERNAL_ID_COLUMN: &str = "internalid";

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Widget(#[from] WidgetError),
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("missing request parameter `{0}`")]
    MissingParameter(&'static str),
    #[error("lookup for record `{0}` returned no internal id")]
    MissingInternalId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            other => Err(format!("unsupported method `{}`", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: Method,
    #[serde(default)]
    pub parameters: FieldMap,
}

impl Request {
    pub fn new(method: Method, parameters: FieldMap) -> Self {
        Self { method, parameters }
    }

    pub fn get(parameters: FieldMap) -> Self {
        Self::new(Method::Get, parameters)
    }

    pub fn post(parameters: FieldMap) -> Self {
        Self::new(Method::Post, parameters)
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&FieldValue> {
        self.parameters.get(name)
    }
}

/// Destination of the rendered page.
pub trait ResponseChannel {
    fn write_page(&mut self, page: Page);
}

impl ResponseChannel for Vec<Page> {
    fn write_page(&mut self, page: Page) {
        self.push(page);
    }
}

pub struct FormHandler<S> {
    store: S,
    config: Config,
}

impl<S> FormHandler<S>
where
    S: FieldLookup + FieldUpdate,
{
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handles one request and writes exactly one page.
    ///
    /// Any failure is rendered as an error form instead of the regular page.
    pub fn on_request<R>(&self, request: &Request, response: &mut R)
    where
        R: ResponseChannel + ?Sized,
    {
        let span = info_span!("request", request_id = %Uuid::new_v4(), method = %request.method);
        let _entered = span.enter();
        debug!(parameters = ?request.parameters, "handling request");

        let form = match self.handle(request) {
            Ok(form) => form,
            Err(err) => {
                warn!(error = %err, "request failed; rendering error form");
                self.error_form(&err)
            }
        };
        response.write_page(Page::Form(form));
    }

    /// Builds the page for `request` without the failure boundary.
    pub fn handle(&self, request: &Request) -> Result<Form, HandlerError> {
        let mut form = create_form(
            CreateFormOptions::new(self.config.form_title.clone())
                .hide_navbar(self.config.hide_navbar),
        )?;
        match request.method {
            Method::Get => {
                let customer = request
                    .parameter(CUSTOMER_ID_PARAM)
                    .ok_or(HandlerError::MissingParameter(CUSTOMER_ID_PARAM))?;
                self.build_get_form(&mut form, customer)?;
            }
            Method::Post => {
                let customer = request
                    .parameter(CUSTOMER_ID_FIELD)
                    .ok_or(HandlerError::MissingParameter(CUSTOMER_ID_FIELD))?;
                let id = record_id(customer)?;
                let greeting = request
                    .parameter(HELLO_FIELD)
                    .cloned()
                    .unwrap_or_else(|| FieldValue::String(String::new()));
                self.save_comments(&id, greeting)?;
                let lookup = self.lookup(&id)?;
                self.build_post_form(&mut form, &id, &lookup)?;
            }
        }
        Ok(form)
    }

    fn lookup(&self, id: &str) -> Result<FieldMap, HandlerError> {
        let request = LookupRequest::new(
            self.config.record_type,
            id,
            [COMMENTS_COLUMN, INTERNAL_ID_COLUMN],
        );
        let lookup = self.store.lookup_fields(&request)?;
        debug!(?lookup, "customer lookup");
        Ok(lookup)
    }

    fn save_comments(&self, id: &str, comments: FieldValue) -> Result<(), HandlerError> {
        let mut values = FieldMap::new();
        values.insert(COMMENTS_COLUMN.to_string(), comments);
        let saved = self.store.submit_fields(&SubmitFieldsRequest {
            record_type: self.config.record_type,
            id: id.to_string(),
            values,
        })?;
        info!(record_id = %saved, "saved customer comments");
        Ok(())
    }

    fn build_get_form(&self, form: &mut Form, customer: &FieldValue) -> Result<(), HandlerError> {
        let lookup = self.lookup(&record_id(customer)?)?;
        let comments = lookup
            .get(COMMENTS_COLUMN)
            .cloned()
            .unwrap_or_else(|| FieldValue::String(String::new()));

        form.add_field(AddFieldOptions::new(
            COMMENTS_FIELD,
            "Current Comments",
            "textarea",
        ))?
        .update_display_type(FieldDisplayType::Inline)
        .set_default_value(comments);
        form.add_field(AddFieldOptions::new(CUSTOMER_ID_FIELD, "Customer Id", "text"))?
            .update_display_type(FieldDisplayType::NoDisplay)
            .set_default_value(customer.clone());
        form.add_field(AddFieldOptions::new(HELLO_FIELD, "Hello Text", "textarea"))?
            .set_default_value(self.config.greeting.clone());
        form.add_submit_button(Some(self.config.submit_label.as_str()))?;
        Ok(())
    }

    fn build_post_form(
        &self,
        form: &mut Form,
        id: &str,
        lookup: &FieldMap,
    ) -> Result<(), HandlerError> {
        let saved_id = reference_value(lookup, INTERNAL_ID_COLUMN)
            .ok_or_else(|| HandlerError::MissingInternalId(id.to_string()))?;
        form.add_field(AddFieldOptions::new(SUCCESS_FIELD, "Success", "text"))?
            .update_display_type(FieldDisplayType::Inline)
            .set_default_value(self.config.success_message(&saved_id));
        Ok(())
    }

    fn error_form(&self, err: &HandlerError) -> Form {
        let mut form = Form::new(self.config.form_title.clone(), self.config.hide_navbar);
        match form.add_field(AddFieldOptions::new(ERROR_FIELD, "Error", "textarea")) {
            Ok(field) => {
                field
                    .update_display_type(FieldDisplayType::Inline)
                    .set_default_value(err.to_string());
            }
            Err(add_err) => warn!(error = %add_err, "could not add error field"),
        }
        form
    }
}
