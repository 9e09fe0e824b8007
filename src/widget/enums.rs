//! Closed token sets accepted by widget construction options.
//!
//! Each enum mirrors one of the host API's string enumerations. Tokens are
//! matched case-insensitively and serialize back to their canonical
//! upper-case form.

use std::fmt;

use serde::{Serialize, Serializer};
use strsim::levenshtein;

use crate::errors::{WidgetError, WidgetResult};

/// Maximum edit distance for which an unknown token gets a suggestion.
const SUGGESTION_DISTANCE: usize = 3;

/// A closed set of string tokens backed by a Rust enum.
pub trait Token: Copy + Sized + 'static {
    /// Name of the enumeration, used in diagnostics.
    const KIND: &'static str;
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    /// Parses a token, ignoring case and surrounding whitespace.
    fn parse(raw: &str) -> WidgetResult<Self> {
        let normalized = raw.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str() == normalized)
            .ok_or_else(|| WidgetError::InvalidEnumValue {
                kind: Self::KIND,
                suggestion: nearest::<Self>(&normalized),
                value: normalized,
            })
    }

    fn tokens() -> Vec<&'static str> {
        Self::ALL.iter().map(Token::as_str).collect()
    }
}

fn nearest<T: Token>(normalized: &str) -> Option<&'static str> {
    T::ALL
        .iter()
        .map(|candidate| (levenshtein(candidate.as_str(), normalized), candidate.as_str()))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .map(|(_, token)| token)
}

macro_rules! impl_token_traits {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = WidgetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as Token>::parse(s)
            }
        }
    };
}

/// Supported field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Checkbox,
    Currency,
    Date,
    DateTime,
    DateTimeTz,
    Email,
    File,
    Float,
    Help,
    Image,
    InlineHtml,
    Integer,
    Label,
    LongText,
    MultiSelect,
    Password,
    Percent,
    Phone,
    Radio,
    RichText,
    Select,
    TextArea,
    Text,
    TimeOfDay,
    Url,
}

impl Token for FieldType {
    const KIND: &'static str = "FieldType";
    const ALL: &'static [Self] = &[
        FieldType::Checkbox,
        FieldType::Currency,
        FieldType::Date,
        FieldType::DateTime,
        FieldType::DateTimeTz,
        FieldType::Email,
        FieldType::File,
        FieldType::Float,
        FieldType::Help,
        FieldType::Image,
        FieldType::InlineHtml,
        FieldType::Integer,
        FieldType::Label,
        FieldType::LongText,
        FieldType::MultiSelect,
        FieldType::Password,
        FieldType::Percent,
        FieldType::Phone,
        FieldType::Radio,
        FieldType::RichText,
        FieldType::Select,
        FieldType::TextArea,
        FieldType::Text,
        FieldType::TimeOfDay,
        FieldType::Url,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            FieldType::Checkbox => "CHECKBOX",
            FieldType::Currency => "CURRENCY",
            FieldType::Date => "DATE",
            FieldType::DateTime => "DATETIME",
            FieldType::DateTimeTz => "DATETIMETZ",
            FieldType::Email => "EMAIL",
            FieldType::File => "FILE",
            FieldType::Float => "FLOAT",
            FieldType::Help => "HELP",
            FieldType::Image => "IMAGE",
            FieldType::InlineHtml => "INLINEHTML",
            FieldType::Integer => "INTEGER",
            FieldType::Label => "LABEL",
            FieldType::LongText => "LONGTEXT",
            FieldType::MultiSelect => "MULTISELECT",
            FieldType::Password => "PASSWORD",
            FieldType::Percent => "PERCENT",
            FieldType::Phone => "PHONE",
            FieldType::Radio => "RADIO",
            FieldType::RichText => "RICHTEXT",
            FieldType::Select => "SELECT",
            FieldType::TextArea => "TEXTAREA",
            FieldType::Text => "TEXT",
            FieldType::TimeOfDay => "TIMEOFDAY",
            FieldType::Url => "URL",
        }
    }
}

impl_token_traits!(FieldType);

impl FieldType {
    /// Select-like fields hold lists of values rather than a scalar.
    pub fn is_select(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::MultiSelect)
    }
}

/// How a field is presented on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldDisplayType {
    Disabled,
    Entry,
    Hidden,
    Inline,
    NoDisplay,
    #[default]
    Normal,
    ReadOnly,
}

impl Token for FieldDisplayType {
    const KIND: &'static str = "FieldDisplayType";
    const ALL: &'static [Self] = &[
        FieldDisplayType::Disabled,
        FieldDisplayType::Entry,
        FieldDisplayType::Hidden,
        FieldDisplayType::Inline,
        FieldDisplayType::NoDisplay,
        FieldDisplayType::Normal,
        FieldDisplayType::ReadOnly,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            FieldDisplayType::Disabled => "DISABLED",
            FieldDisplayType::Entry => "ENTRY",
            FieldDisplayType::Hidden => "HIDDEN",
            FieldDisplayType::Inline => "INLINE",
            FieldDisplayType::NoDisplay => "NODISPLAY",
            FieldDisplayType::Normal => "NORMAL",
            FieldDisplayType::ReadOnly => "READONLY",
        }
    }
}

impl_token_traits!(FieldDisplayType);

/// Editing behavior of a sublist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SublistType {
    Editor,
    InlineEditor,
    List,
    StaticList,
}

impl Token for SublistType {
    const KIND: &'static str = "SublistType";
    const ALL: &'static [Self] = &[
        SublistType::Editor,
        SublistType::InlineEditor,
        SublistType::List,
        SublistType::StaticList,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            SublistType::Editor => "EDITOR",
            SublistType::InlineEditor => "INLINEEDITOR",
            SublistType::List => "LIST",
            SublistType::StaticList => "STATICLIST",
        }
    }
}

impl_token_traits!(SublistType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SublistDisplayType {
    Hidden,
    #[default]
    Normal,
}

impl Token for SublistDisplayType {
    const KIND: &'static str = "SublistDisplayType";
    const ALL: &'static [Self] = &[SublistDisplayType::Hidden, SublistDisplayType::Normal];

    fn as_str(&self) -> &'static str {
        match self {
            SublistDisplayType::Hidden => "HIDDEN",
            SublistDisplayType::Normal => "NORMAL",
        }
    }
}

impl_token_traits!(SublistDisplayType);

/// Placement of a navigation link on a form or list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormPageLinkType {
    /// Top-left, after the system bread crumbs.
    Breadcrumb,
    /// Top-right corner.
    Crosslink,
}

impl Token for FormPageLinkType {
    const KIND: &'static str = "FormPageLinkType";
    const ALL: &'static [Self] = &[FormPageLinkType::Breadcrumb, FormPageLinkType::Crosslink];

    fn as_str(&self) -> &'static str {
        match self {
            FormPageLinkType::Breadcrumb => "BREADCRUMB",
            FormPageLinkType::Crosslink => "CROSSLINK",
        }
    }
}

impl_token_traits!(FormPageLinkType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListStyle {
    Grid,
    #[default]
    Normal,
    Plain,
    Report,
}

impl Token for ListStyle {
    const KIND: &'static str = "ListStyle";
    const ALL: &'static [Self] = &[
        ListStyle::Grid,
        ListStyle::Normal,
        ListStyle::Plain,
        ListStyle::Report,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ListStyle::Grid => "GRID",
            ListStyle::Normal => "NORMAL",
            ListStyle::Plain => "PLAIN",
            ListStyle::Report => "REPORT",
        }
    }
}

impl_token_traits!(ListStyle);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutJustification {
    Center,
    #[default]
    Left,
    Right,
}

impl Token for LayoutJustification {
    const KIND: &'static str = "LayoutJustification";
    const ALL: &'static [Self] = &[
        LayoutJustification::Center,
        LayoutJustification::Left,
        LayoutJustification::Right,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            LayoutJustification::Center => "CENTER",
            LayoutJustification::Left => "LEFT",
            LayoutJustification::Right => "RIGHT",
        }
    }
}

impl_token_traits!(LayoutJustification);

/// Button the user pressed when submitting an assistant step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssistantSubmitAction {
    Back,
    Cancel,
    Finish,
    Jump,
    Next,
}

impl Token for AssistantSubmitAction {
    const KIND: &'static str = "AssistantSubmitAction";
    const ALL: &'static [Self] = &[
        AssistantSubmitAction::Back,
        AssistantSubmitAction::Cancel,
        AssistantSubmitAction::Finish,
        AssistantSubmitAction::Jump,
        AssistantSubmitAction::Next,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            AssistantSubmitAction::Back => "back",
            AssistantSubmitAction::Cancel => "cancel",
            AssistantSubmitAction::Finish => "finish",
            AssistantSubmitAction::Jump => "jump",
            AssistantSubmitAction::Next => "next",
        }
    }

    fn parse(raw: &str) -> WidgetResult<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str() == normalized)
            .ok_or_else(|| WidgetError::InvalidEnumValue {
                kind: Self::KIND,
                suggestion: nearest::<Self>(&normalized),
                value: normalized,
            })
    }
}

impl_token_traits!(AssistantSubmitAction);
