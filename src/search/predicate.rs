//! Compositional match predicates over document fields
//!
//! Built by the query builder, evaluated by the index collaborator. Equality,
//! prefix, and suffix comparisons are case-insensitive unless stated
//! otherwise; containment is case-sensitive (the content field keeps the
//! exact-match semantics of the underlying full-text store).

/// A boolean condition over a document's indexed fields.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchPredicate {
    /// Matches every document.
    All,
    Equals {
        field: String,
        value: String,
        case_insensitive: bool,
    },
    /// Case-insensitive prefix match.
    StartsWith { field: String, value: String },
    /// Case-insensitive suffix match.
    EndsWith { field: String, value: String },
    /// Case-sensitive containment.
    Contains { field: String, value: String },
    And(Vec<MatchPredicate>),
    Or(Vec<MatchPredicate>),
}

impl MatchPredicate {
    pub fn eq_ci(field: &str, value: &str) -> Self {
        MatchPredicate::Equals {
            field: field.to_string(),
            value: value.to_string(),
            case_insensitive: true,
        }
    }

    pub fn eq(field: &str, value: &str) -> Self {
        MatchPredicate::Equals {
            field: field.to_string(),
            value: value.to_string(),
            case_insensitive: false,
        }
    }

    pub fn starts_with(field: &str, value: &str) -> Self {
        MatchPredicate::StartsWith {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn ends_with(field: &str, value: &str) -> Self {
        MatchPredicate::EndsWith {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn contains(field: &str, value: &str) -> Self {
        MatchPredicate::Contains {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Conjunction. `All` operands are dropped; an empty conjunction is `All`.
    pub fn and(self, other: MatchPredicate) -> Self {
        match (self, other) {
            (MatchPredicate::All, p) | (p, MatchPredicate::All) => p,
            (MatchPredicate::And(mut parts), p) => {
                parts.push(p);
                MatchPredicate::And(parts)
            }
            (a, b) => MatchPredicate::And(vec![a, b]),
        }
    }

    /// Disjunction over a list of alternatives.
    pub fn any_of(parts: Vec<MatchPredicate>) -> Self {
        match parts.len() {
            0 => MatchPredicate::All,
            1 => parts.into_iter().next().expect("one part"),
            _ => MatchPredicate::Or(parts),
        }
    }
}
