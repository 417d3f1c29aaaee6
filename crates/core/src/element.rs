/// A value with a stable identity.
///
/// The `id` is assigned once from the element's input position and travels
/// with the value as it moves, so a renderer can follow "the same box" across
/// every step of a trace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    /// Identifier unique within a single trace.
    pub id: String,

    /// The element's value.
    pub value: i64,
}

impl Element {
    /// Creates a new element.
    #[must_use]
    pub fn new(id: impl Into<String>, value: i64) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    /// Builds elements for `values` with ids of the form
    /// `"{prefix}-el-{index}-{value}"`.
    ///
    /// The index makes every id unique even when values repeat.
    #[must_use]
    pub fn sequence(prefix: &str, values: &[i64]) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .map(|(index, &value)| Self::new(format!("{prefix}-el-{index}-{value}"), value))
            .collect()
    }

    /// Extracts the values of `elements`, in order.
    #[must_use]
    pub fn values(elements: &[Self]) -> Vec<i64> {
        elements.iter().map(|el| el.value).collect()
    }
}
