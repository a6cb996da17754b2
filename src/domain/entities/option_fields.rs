/// Per-field intent of a partial update.
///
/// - `Unchanged` → column keeps its stored value
/// - `SetToNull` → column is written as NULL
/// - `SetToValue` → column is overwritten with the value
///
/// Using a dedicated wrapper keeps "don't touch" apart from a legitimate
/// NULL, which a plain `Option<T>` bound to `COALESCE` cannot express.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptionField<T> {
    #[default]
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<T> OptionField<T> {
    /// True when `Unchanged`.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// True when `SetToNull`.
    pub fn is_set_to_null(&self) -> bool {
        matches!(self, Self::SetToNull)
    }

    /// If `SetToValue`, returns a reference to inner value.
    pub fn value_ref(&self) -> Option<&T> {
        if let Self::SetToValue(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

impl<T: Copy> OptionField<T> {
    /// Value for a `COALESCE($n, column)` binding on a NOT NULL column.
    /// `SetToNull` collapses to "keep", a NOT NULL column cannot take it.
    pub fn coalesce_bind(&self) -> Option<T> {
        self.value_ref().copied()
    }

    /// `(touch, value)` pair for a `CASE WHEN $touch THEN $value ELSE column END`
    /// binding on a nullable column.
    pub fn nullable_bind(&self) -> (bool, Option<T>) {
        match self {
            Self::Unchanged => (false, None),
            Self::SetToNull => (true, None),
            Self::SetToValue(v) => (true, Some(*v)),
        }
    }
}

impl OptionField<String> {
    pub fn coalesce_str(&self) -> Option<&str> {
        self.value_ref().map(|s| s.as_str())
    }
}

// `None` on a nullable column means "clear it", not "leave it alone"
impl<T> From<Option<T>> for OptionField<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => OptionField::SetToNull,
            Some(v) => OptionField::SetToValue(v),
        }
    }
}
