use crate::separator::Separator;
use crate::value::ResultValue;

/// Splits field values on one or more separators and flattens the pieces.
///
/// Splitting is shape-preserving: when a value produces at most one piece
/// the original value is returned untouched, so `"1"` stays `"1"` rather
/// than becoming `["1"]`. Only two or more pieces produce a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSplitter {
    separators: Vec<Separator>,
    unique: bool,
}

impl Default for ValueSplitter {
    fn default() -> Self {
        Self::new(Some(Separator::comma()), true)
    }
}

impl ValueSplitter {
    #[must_use]
    pub fn new(separator: Option<Separator>, unique: bool) -> Self {
        Self::with_separators(separator, unique)
    }

    /// Split on each separator in turn.
    #[must_use]
    pub fn with_separators(separators: impl IntoIterator<Item = Separator>, unique: bool) -> Self {
        Self {
            separators: separators
                .into_iter()
                .filter(|separator| !separator.is_empty())
                .collect(),
            unique,
        }
    }

    #[must_use]
    pub fn separators(&self) -> &[Separator] {
        &self.separators
    }

    #[must_use]
    pub const fn is_unique(&self) -> bool {
        self.unique
    }

    /// Every piece of `value`, flattened one level, without collapsing.
    #[must_use]
    pub fn pieces(&self, value: &ResultValue) -> Vec<String> {
        let mut pieces = value.to_strings();
        for separator in &self.separators {
            pieces = pieces
                .iter()
                .flat_map(|piece| separator.split(piece))
                .map(str::to_string)
                .collect();
        }
        pieces
    }

    /// Split `value`, returning the original when fewer than two pieces
    /// result. Lists are deduplicated when uniqueness is enabled.
    #[must_use]
    pub fn split(&self, value: ResultValue) -> ResultValue {
        let mut result = match value {
            ResultValue::Scalar(_) | ResultValue::List(_) => {
                let pieces = self.pieces(&value);
                if pieces.len() > 1 {
                    ResultValue::List(pieces)
                } else {
                    value
                }
            }
            other => other,
        };

        if self.unique {
            result.dedup();
        }
        result
    }
}
