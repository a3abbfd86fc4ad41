pub mod ownership;
pub mod normalize;
pub mod aggregate;
pub mod filter;
pub mod kanban;

pub use aggregate::aggregate;
pub use filter::{apply_all, FilterSelections, Filterable};
pub use normalize::{normalize, normalize_all};
pub use ownership::{resolve_group, resolve_subgroups, subgroups_for, SubgroupListing};

/// Spelling of the "everything" choice in filter selectors.
pub const ALL_SENTINEL: &str = "todos";

/// A filter selection: either the "all" sentinel or one concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

/// Whether a raw selector value is the "all" sentinel.
pub fn is_all_sentinel(value: &str) -> bool {
    let v = value.trim();
    v.eq_ignore_ascii_case(ALL_SENTINEL) || v.eq_ignore_ascii_case("all")
}

impl Selection<String> {
    pub fn parse(value: &str) -> Self {
        if is_all_sentinel(value) {
            Self::All
        } else {
            Self::Only(value.trim().to_string())
        }
    }
}
