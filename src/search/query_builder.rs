//! Query construction
//!
//! Turns a parsed [`SearchRequest`] into a fully specified index query:
//! filter predicate, sort order, and page slice. Precedence and fallback
//! rules live here and nowhere else:
//!
//! - Orders are always narrowed by the store scope; the term, when present,
//!   is a literal case-insensitive equality against the confirmation id or
//!   email. Wildcards are not special for orders.
//! - Customers are never store-scoped. A trailing-`*` term becomes a prefix
//!   match, a leading-`*` term a suffix match, and any other wildcard shape
//!   (including a bare `*`) applies no term filter at all — a preserved quirk
//!   of the search surface, not an oversight.
//! - Only the literal direction string `"Asc"` sorts ascending.

use super::fields;
use super::params::{EntityKind, SearchRequest};
use super::predicate::MatchPredicate;
use crate::index::{IndexQuery, PageSpec, SortKey, SortSpec};

/// Build the executable query for a request.
pub fn build(request: &SearchRequest) -> IndexQuery {
    let predicate = match request.entity_kind {
        EntityKind::Order => order_predicate(request.term(), &request.scope_key),
        EntityKind::Customer => customer_predicate(request.term()),
    };

    IndexQuery {
        predicate,
        sort: resolve_sort(request),
        page: resolve_page(request),
    }
}

fn order_predicate(term: Option<&str>, scope_key: &str) -> MatchPredicate {
    let scope = MatchPredicate::eq_ci(fields::ARTIFACT_STORE_ID, scope_key);
    match term {
        Some(term) => MatchPredicate::any_of(vec![
            MatchPredicate::eq_ci(fields::ORDER_CONFIRMATION_ID, term),
            MatchPredicate::eq_ci(fields::EMAIL, term),
        ])
        .and(scope),
        None => scope,
    }
}

fn customer_predicate(term: Option<&str>) -> MatchPredicate {
    let Some(term) = term else {
        return MatchPredicate::All;
    };

    if term.contains('*') {
        // A bare `*`, or a `*` only in the middle, leaves the query
        // unfiltered by term.
        if term == "*" {
            tracing::debug!(term, "wildcard term has no usable edge; no term filter applied");
            return MatchPredicate::All;
        }
        if term.ends_with('*') {
            let stem = term.strip_suffix('*').unwrap_or(term);
            return MatchPredicate::any_of(vec![
                MatchPredicate::eq_ci(fields::USER_ID, term),
                MatchPredicate::starts_with(fields::EMAIL, stem),
                MatchPredicate::starts_with(fields::FIRST_NAME, stem),
                MatchPredicate::starts_with(fields::LAST_NAME, stem),
                MatchPredicate::contains(fields::CONTENT, term),
            ]);
        }
        if term.starts_with('*') {
            let stem = term.strip_prefix('*').unwrap_or(term);
            return MatchPredicate::any_of(vec![
                MatchPredicate::eq_ci(fields::USER_ID, term),
                MatchPredicate::ends_with(fields::EMAIL, stem),
                MatchPredicate::ends_with(fields::FIRST_NAME, stem),
                MatchPredicate::ends_with(fields::LAST_NAME, stem),
                MatchPredicate::contains(fields::CONTENT, term),
            ]);
        }
        tracing::debug!(term, "wildcard term has no usable edge; no term filter applied");
        return MatchPredicate::All;
    }

    // No wildcard: five-way equality. Content keeps exact, case-sensitive
    // matching; everything else is case-insensitive.
    MatchPredicate::any_of(vec![
        MatchPredicate::eq_ci(fields::USER_ID, term),
        MatchPredicate::eq_ci(fields::EMAIL, term),
        MatchPredicate::eq_ci(fields::FIRST_NAME, term),
        MatchPredicate::eq_ci(fields::LAST_NAME, term),
        MatchPredicate::eq(fields::CONTENT, term),
    ])
}

fn resolve_sort(request: &SearchRequest) -> Option<SortSpec> {
    if !request.is_sorting_specified() {
        return None;
    }

    // Strict literal comparison; "asc", "ASC", "Ascending" all sort descending.
    let ascending = request.sort_direction == "Asc";

    let key = match request.entity_kind {
        EntityKind::Order if request.sort_field == fields::ORDER_PLACED_DATE => {
            SortKey::Date(fields::ORDER_PLACED_DATE.to_string())
        }
        _ => SortKey::Dynamic(request.sort_field.clone()),
    };

    Some(SortSpec { key, ascending })
}

fn resolve_page(request: &SearchRequest) -> Option<PageSpec> {
    if !request.is_paging_specified() {
        return None;
    }
    Some(PageSpec {
        skip: (request.page_index * request.page_size) as u64,
        take: request.page_size as u64,
    })
}
