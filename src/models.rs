use serde::Deserialize;

use crate::separator::Separator;

/// Construction-time options shared by every strategy.
///
/// Each strategy reads the options that apply to it, fills in its own
/// defaults for the rest and keeps the resolved configuration for its whole
/// lifetime.
///
/// # Fields
/// `fields` restricts output to the named fields. It accepts a single name or
/// a list, and may also be spelled `field` or `only`:
/// ```json
/// {"fields": ["where", "filter"]}
/// {"field": "where"}
/// ```
///
/// # Separators
/// `value_separator`, `expression_separator` and `field_separator` are either a
/// literal string or a regular expression:
/// ```json
/// {"value_separator": "|", "expression_separator": {"pattern": "\\|\\s*"}}
/// ```
///
/// # Pagination
/// `default_page_size` is used when a request carries no usable page size.
/// Values below 1 fall back to 30.
///
/// # Building in code
/// ```rust,ignore
/// let options = StrategyOptions::default()
///     .with_fields(["where"])
///     .with_value_separator(",")
///     .with_unique_values(false);
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct StrategyOptions {
    /// Allow-list of field names; empty keeps every field.
    #[serde(alias = "field", alias = "only", deserialize_with = "one_or_many")]
    pub fields: Vec<String>,
    /// Separator between multiple values of one key.
    pub value_separator: Option<Separator>,
    /// Separator between expressions in one field.
    pub expression_separator: Option<Separator>,
    /// Separator between an expression's key and its value(s).
    pub field_separator: Option<Separator>,
    /// Drop repeated values, keeping the first occurrence.
    pub unique_values: bool,
    /// Page size used when the request carries none.
    pub default_page_size: Option<i64>,
    /// Also split flat values on `,\s*`.
    pub csv: bool,
}

impl Default for StrategyOptions {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            value_separator: None,
            expression_separator: None,
            field_separator: None,
            unique_values: true,
            default_page_size: None,
            csv: false,
        }
    }
}

impl StrategyOptions {
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_field(self, field: impl Into<String>) -> Self {
        self.with_fields([field.into()])
    }

    #[must_use]
    pub fn with_value_separator(mut self, separator: impl Into<Separator>) -> Self {
        self.value_separator = Some(separator.into());
        self
    }

    #[must_use]
    pub fn with_expression_separator(mut self, separator: impl Into<Separator>) -> Self {
        self.expression_separator = Some(separator.into());
        self
    }

    #[must_use]
    pub fn with_field_separator(mut self, separator: impl Into<Separator>) -> Self {
        self.field_separator = Some(separator.into());
        self
    }

    #[must_use]
    pub const fn with_unique_values(mut self, unique: bool) -> Self {
        self.unique_values = unique;
        self
    }

    #[must_use]
    pub const fn with_default_page_size(mut self, page_size: i64) -> Self {
        self.default_page_size = Some(page_size);
        self
    }

    #[must_use]
    pub const fn with_csv(mut self, csv: bool) -> Self {
        self.csv = csv;
        self
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(field) => vec![field],
        OneOrMany::Many(fields) => fields,
    })
}
