//! Database dialect identification
//!
//! The dialect decides how identifiers are quoted and which keyword spells
//! each join type. Everything else about rendering is shared.

/// SQL dialect for database-specific rendering
///
/// # Examples
///
/// ```
/// use relnode_types::Dialect;
///
/// assert_eq!(Dialect::PostgreSQL.quote_char(), '"');
/// assert_eq!(Dialect::MySQL.quote_char(), '`');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// SQLite - double-quoted identifiers
    #[default]
    SQLite,

    /// PostgreSQL - double-quoted identifiers, `full outer join`
    PostgreSQL,

    /// MySQL - backtick-quoted identifiers
    MySQL,
}

impl Dialect {
    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Supports various common aliases:
    /// - SQLite: `"sqlite"`, `"turso"`, `"libsql"`
    /// - PostgreSQL: `"postgresql"`, `"postgres"`, `"pg"`
    /// - MySQL: `"mysql"`, `"mariadb"`
    ///
    /// # Examples
    ///
    /// ```
    /// use relnode_types::Dialect;
    ///
    /// assert_eq!(Dialect::parse("sqlite"), Some(Dialect::SQLite));
    /// assert_eq!(Dialect::parse("pg"), Some(Dialect::PostgreSQL));
    /// assert_eq!(Dialect::parse("unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("sqlite")
            || s.eq_ignore_ascii_case("turso")
            || s.eq_ignore_ascii_case("libsql")
        {
            Some(Dialect::SQLite)
        } else if s.eq_ignore_ascii_case("postgresql")
            || s.eq_ignore_ascii_case("postgres")
            || s.eq_ignore_ascii_case("pg")
        {
            Some(Dialect::PostgreSQL)
        } else if s.eq_ignore_ascii_case("mysql") || s.eq_ignore_ascii_case("mariadb") {
            Some(Dialect::MySQL)
        } else {
            None
        }
    }

    /// Character used to quote identifiers in this dialect
    #[inline]
    #[must_use]
    pub const fn quote_char(&self) -> char {
        match self {
            Dialect::SQLite | Dialect::PostgreSQL => '"',
            Dialect::MySQL => '`',
        }
    }

    /// Returns `true` if the dialect accepts `FULL [OUTER] JOIN`.
    ///
    /// MySQL has no full outer join; the keyword is still rendered and the
    /// server rejects the statement.
    #[inline]
    #[must_use]
    pub const fn supports_full_join(&self) -> bool {
        !matches!(self, Dialect::MySQL)
    }

    /// Get the dialect name as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::SQLite => "sqlite",
            Dialect::PostgreSQL => "postgresql",
            Dialect::MySQL => "mysql",
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or(DialectParseError)
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectParseError;

impl core::fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown dialect")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DialectParseError {}
