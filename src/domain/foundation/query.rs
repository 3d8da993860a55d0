//! List-query types shared by every repository's `find_many`/`count_many`.

use serde::{Deserialize, Serialize};

/// Sort direction, encoded as +1 / -1 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Decodes the wire convention: -1 means descending, anything else
    /// ascending.
    pub fn from_code(code: i8) -> Self {
        if code < 0 {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    /// Returns the wire code (+1 / -1).
    pub fn code(&self) -> i8 {
        match self {
            SortOrder::Asc => 1,
            SortOrder::Desc => -1,
        }
    }

    /// Returns the SQL keyword for this direction.
    pub fn sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Sort + pagination arguments for a repository list read.
///
/// An unrecognized `sort_field` never errors; implementations fall
/// back to `created_at` descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub offset: u64,
    pub limit: u64,
}

impl ListQuery {
    pub fn new(
        sort_field: impl Into<String>,
        sort_order: SortOrder,
        offset: u64,
        limit: u64,
    ) -> Self {
        Self {
            sort_field: sort_field.into(),
            sort_order,
            offset,
            limit,
        }
    }

    /// Newest-first page, the default listing for admin screens.
    pub fn newest_first(offset: u64, limit: u64) -> Self {
        Self::new("created_at", SortOrder::Desc, offset, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_decodes_wire_codes() {
        assert_eq!(SortOrder::from_code(-1), SortOrder::Desc);
        assert_eq!(SortOrder::from_code(1), SortOrder::Asc);
        assert_eq!(SortOrder::from_code(0), SortOrder::Asc);
    }

    #[test]
    fn sort_order_round_trips_code() {
        assert_eq!(SortOrder::from_code(SortOrder::Desc.code()), SortOrder::Desc);
        assert_eq!(SortOrder::from_code(SortOrder::Asc.code()), SortOrder::Asc);
    }

    #[test]
    fn newest_first_sorts_created_at_descending() {
        let q = ListQuery::newest_first(0, 20);
        assert_eq!(q.sort_field, "created_at");
        assert_eq!(q.sort_order, SortOrder::Desc);
    }
}
