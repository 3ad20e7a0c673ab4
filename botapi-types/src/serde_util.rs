//! `skip_serializing_if` predicates shared by the models.

pub(crate) fn is_false(v: &bool) -> bool {
    !*v
}

/// Optional strings are dropped from the request when absent *or* empty.
pub(crate) fn is_blank(v: &Option<String>) -> bool {
    v.as_deref().is_none_or(str::is_empty)
}
