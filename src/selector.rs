use crate::value::ResultMap;

/// Allow-list of field names.
///
/// An empty allow-list keeps every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelector {
    fields: Vec<String>,
}

impl FieldSelector {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn allows(&self, field: impl AsRef<str>) -> bool {
        let field = field.as_ref();
        self.is_unrestricted() || self.fields.iter().any(|allowed| allowed == field)
    }

    /// Keep only allowed fields, in their original order.
    #[must_use]
    pub fn select(&self, mut map: ResultMap) -> ResultMap {
        if !self.is_unrestricted() {
            map.retain(|key, _| self.allows(key));
        }
        map
    }
}
