use compact_str::CompactString;

/// A named, typed column of a relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    name: CompactString,
    sql_type: CompactString,
    primary_key: bool,
    not_null: bool,
}

impl Column {
    pub fn new(name: impl Into<CompactString>, sql_type: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            primary_key: false,
            not_null: false,
        }
    }

    /// Marks the column as the primary key. Primary keys are implicitly not null.
    pub fn primary(mut self) -> Self {
        self.primary_key = true;
        self.not_null = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    #[inline]
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    #[inline]
    pub fn is_not_null(&self) -> bool {
        self.not_null
    }
}
