//! Ownership path resolution.
//!
//! Ownership is encoded as free text such as `"Criação / Social / João"`.
//! Most paths start with a group label, but a few individuals appear with
//! no group prefix at all; those are listed in the tables below.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::warn;

use crate::models::{NormalizedTask, OwnerGroup};

use super::Selection;

/// Individuals assigned straight to a group with no subgroup layer.
pub const DIRECT_MEMBERS: &[(&str, OwnerGroup)] = &[("Ana Luisa Andre", OwnerGroup::Production)];

/// Bare names whose paths omit their group prefix.
pub const BARE_NAME_EXCEPTIONS: &[(&str, OwnerGroup)] = &[
    ("Bruno Prosperi", OwnerGroup::Creation),
    ("Carol", OwnerGroup::Operations),
];

pub const SEGMENT_SEPARATOR: &str = " / ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubgroupListing {
    pub subgroups: Vec<String>,
    pub direct_members: Vec<String>,
}

impl SubgroupListing {
    pub fn is_empty(&self) -> bool {
        self.subgroups.is_empty() && self.direct_members.is_empty()
    }
}

pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').map(str::trim).collect()
}

pub fn direct_member_group(path: &str) -> Option<OwnerGroup> {
    let path = path.trim();
    DIRECT_MEMBERS
        .iter()
        .find(|(name, _)| *name == path)
        .map(|(_, group)| *group)
}

pub fn bare_name_group(segment: &str) -> Option<OwnerGroup> {
    BARE_NAME_EXCEPTIONS
        .iter()
        .find(|(name, _)| *name == segment)
        .map(|(_, group)| *group)
}

/// Resolve the top-level owner of an ownership path. Never fails: anything
/// unrecognized lands in [`OwnerGroup::Other`] with a warning.
pub fn resolve_group(path: &str) -> OwnerGroup {
    if let Some(group) = direct_member_group(path) {
        return group;
    }

    let parts = segments(path);
    let first = parts.first().copied().unwrap_or("");
    if let Some(group) = OwnerGroup::from_label(first) {
        return group;
    }
    if let Some(group) = bare_name_group(first) {
        return group;
    }

    if first.is_empty() {
        warn!(path, "missing ownership group, falling back to Other");
    } else {
        warn!(segment = first, path, "unrecognized ownership group, falling back to Other");
    }
    OwnerGroup::Other
}

/// The subgroup a single path contributes under `group`, if any.
fn subgroup_of(path: &str, group: OwnerGroup) -> Option<String> {
    let parts = segments(path);
    let first = parts.first().copied()?;
    if first == group.label() {
        let rest = parts[1..].join(SEGMENT_SEPARATOR);
        return (!rest.is_empty()).then_some(rest);
    }
    if bare_name_group(first) == Some(group) {
        return Some(parts.join(SEGMENT_SEPARATOR));
    }
    None
}

/// Split the distinct ownership paths of one group into subgroups and
/// direct members, both sorted. Selecting every group yields nothing.
pub fn resolve_subgroups<'a, I>(paths: I, group: Selection<OwnerGroup>) -> SubgroupListing
where
    I: IntoIterator<Item = &'a str>,
{
    let Selection::Only(group) = group else {
        return SubgroupListing::default();
    };

    let mut subgroups = BTreeSet::new();
    let mut direct_members = BTreeSet::new();

    for path in paths {
        if direct_member_group(path).is_some() {
            direct_members.insert(path.trim().to_string());
            continue;
        }
        if let Some(sub) = subgroup_of(path, group) {
            subgroups.insert(sub);
        }
    }

    SubgroupListing {
        subgroups: subgroups.into_iter().collect(),
        direct_members: direct_members.into_iter().collect(),
    }
}

/// Subgroup listing for the tasks resolved to `group`.
pub fn subgroups_for(tasks: &[NormalizedTask], group: Selection<OwnerGroup>) -> SubgroupListing {
    let Selection::Only(wanted) = group else {
        return SubgroupListing::default();
    };
    let paths: BTreeSet<&str> = tasks
        .iter()
        .filter(|t| t.owner_group == wanted && !t.owner_full_path.trim().is_empty())
        .map(|t| t.owner_full_path.as_str())
        .collect();
    resolve_subgroups(paths, group)
}

/// Whether `path` falls under `subgroup` of `group`: an exact or
/// `" / "`-prefix match of the part below the group label, of the whole
/// path for bare-name exceptions, or an exact direct-member match.
pub fn path_in_subgroup(path: &str, group: OwnerGroup, subgroup: &str) -> bool {
    let subgroup = subgroup.trim();
    if direct_member_group(subgroup).is_some() {
        return path.trim() == subgroup;
    }

    let parts = segments(path);
    let Some(first) = parts.first().copied() else {
        return false;
    };
    let candidate = if first == group.label() {
        parts[1..].join(SEGMENT_SEPARATOR)
    } else if bare_name_group(first) == Some(group) {
        parts.join(SEGMENT_SEPARATOR)
    } else {
        return false;
    };

    candidate == subgroup || candidate.starts_with(&format!("{subgroup}{SEGMENT_SEPARATOR}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_group_canonical_prefix() {
        assert_eq!(resolve_group("Criação / Social / João"), OwnerGroup::Creation);
        assert_eq!(resolve_group("Mídia"), OwnerGroup::Media);
        assert_eq!(resolve_group("  BI /Dados"), OwnerGroup::Bi);
        assert_eq!(resolve_group("Estratégia / Planejamento"), OwnerGroup::Strategy);
    }

    #[test]
    fn test_resolve_group_exceptions() {
        assert_eq!(resolve_group("Bruno Prosperi"), OwnerGroup::Creation);
        assert_eq!(resolve_group("Carol / Suporte"), OwnerGroup::Operations);
        assert_eq!(resolve_group("Ana Luisa Andre"), OwnerGroup::Production);
        assert_eq!(resolve_group("  Ana Luisa Andre  "), OwnerGroup::Production);
    }

    #[test]
    fn test_resolve_group_fallback() {
        assert_eq!(resolve_group("Setor Fantasma"), OwnerGroup::Other);
        assert_eq!(resolve_group(""), OwnerGroup::Other);
        assert_eq!(resolve_group("Outros / Algo"), OwnerGroup::Other);
        // sentinel only counts as a whole path
        assert_eq!(resolve_group("Ana Luisa Andre / Extra"), OwnerGroup::Other);
    }

    #[test]
    fn test_resolve_subgroups_basic() {
        let paths = ["Criação / Social", "Criação / Social / João", "Criação / Vídeo"];
        let listing = resolve_subgroups(paths, Selection::Only(OwnerGroup::Creation));
        assert_eq!(listing.subgroups, vec!["Social", "Social / João", "Vídeo"]);
        assert!(listing.direct_members.is_empty());
    }

    #[test]
    fn test_resolve_subgroups_dedupes_and_normalizes_spacing() {
        let paths = ["Criação/Social", "Criação / Social", "Criação"];
        let listing = resolve_subgroups(paths, Selection::Only(OwnerGroup::Creation));
        assert_eq!(listing.subgroups, vec!["Social"]);
    }

    #[test]
    fn test_resolve_subgroups_bare_names_keep_whole_path() {
        let paths = ["Bruno Prosperi", "Bruno Prosperi / Design", "Criação / Social"];
        let listing = resolve_subgroups(paths, Selection::Only(OwnerGroup::Creation));
        assert_eq!(
            listing.subgroups,
            vec!["Bruno Prosperi", "Bruno Prosperi / Design", "Social"]
        );

        // bare names only count under their own group
        let listing = resolve_subgroups(["Carol / Suporte"], Selection::Only(OwnerGroup::Creation));
        assert!(listing.is_empty());
    }

    #[test]
    fn test_resolve_subgroups_direct_members() {
        let paths = ["Ana Luisa Andre", "Produção / Pós"];
        let listing = resolve_subgroups(paths, Selection::Only(OwnerGroup::Production));
        assert_eq!(listing.subgroups, vec!["Pós"]);
        assert_eq!(listing.direct_members, vec!["Ana Luisa Andre"]);
    }

    #[test]
    fn test_resolve_subgroups_all_groups_is_empty() {
        let listing = resolve_subgroups(["Criação / Social"], Selection::All);
        assert!(listing.is_empty());
    }

    #[test]
    fn test_path_in_subgroup() {
        let g = OwnerGroup::Creation;
        assert!(path_in_subgroup("Criação / Social", g, "Social"));
        assert!(path_in_subgroup("Criação / Social / João", g, "Social"));
        assert!(path_in_subgroup("Criação / Social / João", g, "Social / João"));
        assert!(!path_in_subgroup("Criação / Socialite", g, "Social"));
        assert!(!path_in_subgroup("Criação / Vídeo", g, "Social"));
        assert!(!path_in_subgroup("Mídia / Social", g, "Social"));
        assert!(path_in_subgroup("Bruno Prosperi / Design", g, "Bruno Prosperi"));
        assert!(!path_in_subgroup("Bruno Prosperi", OwnerGroup::Operations, "Bruno Prosperi"));
        assert!(path_in_subgroup("Ana Luisa Andre", OwnerGroup::Production, "Ana Luisa Andre"));
        assert!(!path_in_subgroup("Produção / Pós", OwnerGroup::Production, "Ana Luisa Andre"));
    }
}
