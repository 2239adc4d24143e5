//! Allow-listed ordering.
//!
//! Column names that end up in an `ORDER BY` clause are never taken from the
//! request verbatim: they are parsed into an [`AllowedColumn`] enum whose
//! variants map to static column names.

use crate::DomainError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(DomainError::InvalidSortDirection(s.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A closed set of column names that may be referenced from SQL text.
pub trait AllowedColumn: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn column_name(&self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.column_name() == name)
    }
}

/// Declares an enum of allow-listed columns and its [`AllowedColumn`] impl.
#[macro_export]
macro_rules! allowed_columns {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident => $column:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::sorting::AllowedColumn for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn column_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $column),+
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder<C> {
    pub column: C,
    pub direction: SortDirection,
}

impl<C: AllowedColumn> SortOrder<C> {
    pub fn new(column: C, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Parses the `orderName` / `orderBy` pair of a request.
    ///
    /// Returns `Ok(None)` when either part is missing or blank, in which case
    /// no ordering is applied. A present but unknown column or direction is
    /// rejected.
    pub fn from_params(
        name: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Option<Self>, DomainError> {
        let name = name.map(str::trim).filter(|s| !s.is_empty());
        let direction = direction.map(str::trim).filter(|s| !s.is_empty());

        let (Some(name), Some(direction)) = (name, direction) else {
            return Ok(None);
        };

        let column =
            C::from_name(name).ok_or_else(|| DomainError::InvalidSortField(name.to_string()))?;
        let direction = direction.parse::<SortDirection>()?;

        Ok(Some(Self { column, direction }))
    }

    /// Renders `<column> <ASC|DESC>`; both parts are static strings.
    pub fn to_sql(&self) -> String {
        format!("{} {}", self.column.column_name(), self.direction.as_sql())
    }
}
