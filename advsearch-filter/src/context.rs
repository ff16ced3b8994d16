/// Per-call settings for index-value resolution.
///
/// Passed by value into every [`FieldAdapter::index_value`](crate::FieldAdapter::index_value)
/// call. Scoping a setting to a sub-walk means handing a modified copy down;
/// the caller's context is never touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexContext {
    inherit_values: bool,
}

impl IndexContext {
    #[must_use]
    pub const fn new(inherit_values: bool) -> Self {
        Self { inherit_values }
    }

    /// Whether empty values resolve from ancestor objects.
    #[must_use]
    pub const fn inherit_values(&self) -> bool {
        self.inherit_values
    }

    /// A copy of this context with inheritance disabled.
    #[must_use]
    pub const fn without_inheritance(self) -> Self {
        Self {
            inherit_values: false,
        }
    }
}
