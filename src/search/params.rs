//! Search request parameters
//!
//! Parsed, engine-facing form of a search call. The transport layer produces
//! these from flat form fields; everything here is already decoded but not
//! yet interpreted (the query builder owns precedence and fallback rules).

use crate::{Error, Result};

/// The two searchable entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Customer,
    Order,
}

impl EntityKind {
    /// Case-insensitive parse. A blank kind is an invalid argument; any other
    /// unknown value is an unrecognized kind. Both abort before index access.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidArgument(
                "the itemType parameter cannot be empty".to_string(),
            ));
        }
        if trimmed.eq_ignore_ascii_case("customer") {
            Ok(EntityKind::Customer)
        } else if trimmed.eq_ignore_ascii_case("order") {
            Ok(EntityKind::Order)
        } else {
            Err(Error::UnrecognizedEntityKind(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Customer => "customer",
            EntityKind::Order => "order",
        }
    }
}

/// A fully parsed search request.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub entity_kind: EntityKind,
    /// Free-text term, as received. Use [`SearchRequest::term`] for the
    /// trimmed, blank-collapsed form the engine works with.
    pub raw_term: Option<String>,
    /// Store/tenant scope. Only applied to order searches.
    pub scope_key: String,
    /// Sort field name; blank means index default order.
    pub sort_field: String,
    /// Sort direction. Exactly the literal `"Asc"` sorts ascending; any other
    /// value, including empty, sorts descending. Kept as a string so the
    /// strict comparison is not normalized away.
    pub sort_direction: String,
    pub page_index: i64,
    pub page_size: i64,
    /// Extra output fields, in caller order.
    pub requested_fields: Vec<String>,
    /// Accepted for interface compatibility; unused by either entity kind.
    pub parent_id: Option<String>,
}

impl SearchRequest {
    /// The trimmed term, or `None` when absent or blank.
    pub fn term(&self) -> Option<&str> {
        self.raw_term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Pagination applies only when both bounds are meaningful.
    pub fn is_paging_specified(&self) -> bool {
        self.page_size > 0 && self.page_index >= 0
    }

    pub fn is_sorting_specified(&self) -> bool {
        !self.sort_field.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SearchRequest {
        SearchRequest {
            entity_kind: EntityKind::Order,
            raw_term: None,
            scope_key: String::new(),
            sort_field: String::new(),
            sort_direction: String::new(),
            page_index: 0,
            page_size: 0,
            requested_fields: Vec::new(),
            parent_id: None,
        }
    }

    #[test]
    fn entity_kind_parse_is_case_insensitive() {
        assert_eq!(EntityKind::parse("Customer").unwrap(), EntityKind::Customer);
        assert_eq!(EntityKind::parse("ORDER").unwrap(), EntityKind::Order);
    }

    #[test]
    fn blank_entity_kind_is_invalid_argument() {
        assert!(matches!(
            EntityKind::parse("   "),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn unknown_entity_kind_is_unrecognized() {
        assert!(matches!(
            EntityKind::parse("widget"),
            Err(Error::UnrecognizedEntityKind(_))
        ));
    }

    #[test]
    fn term_is_trimmed_and_blank_collapsed() {
        let mut r = request();
        r.raw_term = Some("  jo  ".to_string());
        assert_eq!(r.term(), Some("jo"));
        r.raw_term = Some("   ".to_string());
        assert_eq!(r.term(), None);
    }

    #[test]
    fn paging_requires_positive_size_and_non_negative_index() {
        let mut r = request();
        r.page_size = 10;
        r.page_index = 0;
        assert!(r.is_paging_specified());
        r.page_size = 0;
        assert!(!r.is_paging_specified());
        r.page_size = 10;
        r.page_index = -1;
        assert!(!r.is_paging_specified());
    }
}
