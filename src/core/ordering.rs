use crate::domain::model::{BranchList, BranchRecord};
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

const EXCLUDED: &str = "gh-pages";

/// Dashboard order: `master`, `develop`, then hotfix, release and feature
/// branches, then everything else by name.
///
/// Each rule tests `a` first and `b` second, exactly in that order, so a
/// pair where both sides are `master` (or both `develop`) yields `Less`.
pub fn compare_branches(a: &BranchRecord, b: &BranchRecord) -> Ordering {
    let (a, b) = (a.name(), b.name());

    if a == "master" {
        return Ordering::Less;
    }
    if b == "master" {
        return Ordering::Greater;
    }
    if a == "develop" {
        return Ordering::Less;
    }
    if b == "develop" {
        return Ordering::Greater;
    }
    for marker in ["hotfix", "release", "feature"] {
        if a.contains(marker) && !b.contains(marker) {
            return Ordering::Less;
        }
        if b.contains(marker) && !a.contains(marker) {
            return Ordering::Greater;
        }
    }
    locale_compare(a, b)
}

thread_local! {
    static COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Root-locale collation at tertiary strength. Strings the collator deems
/// equal fall back to code point order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}

/// Sorts in place. Equal names short-circuit to `Equal` so the sort always
/// sees a consistent order.
pub fn sort_branches(branches: &mut BranchList) {
    branches.sort_by(|a, b| {
        if a.name() == b.name() {
            Ordering::Equal
        } else {
            compare_branches(a, b)
        }
    });
}

pub fn is_excluded(name: &str) -> bool {
    name.contains(EXCLUDED)
}

pub fn retain_rendered(branches: &mut BranchList) {
    branches.retain(|b| !is_excluded(b.name()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> BranchList {
        names.iter().map(|n| BranchRecord::new(*n)).collect()
    }

    fn names(branches: &BranchList) -> Vec<&str> {
        branches.iter().map(|b| b.name()).collect()
    }

    #[test]
    fn test_master_always_first() {
        let cases = [
            vec!["zeta", "develop", "master", "hotfix/1"],
            vec!["master", "release/2", "alpha"],
            vec!["feature/a", "feature/b", "develop", "hotfix/x", "master"],
        ];
        for case in cases {
            let mut branches = list(&case);
            sort_branches(&mut branches);
            assert_eq!(branches[0].name(), "master", "input {:?}", case);
        }
    }

    #[test]
    fn test_develop_first_without_master() {
        let mut branches = list(&["hotfix/crash", "release/1.0", "develop", "aaa"]);
        sort_branches(&mut branches);
        assert_eq!(branches[0].name(), "develop");
    }

    #[test]
    fn test_category_precedence() {
        let mut branches = list(&["chore/y", "feature/x", "release/1.0"]);
        sort_branches(&mut branches);
        assert_eq!(names(&branches), vec!["release/1.0", "feature/x", "chore/y"]);
    }

    #[test]
    fn test_full_dashboard_order() {
        let mut branches = list(&[
            "feature/zoom",
            "misc",
            "release/0.9",
            "hotfix/leak",
            "develop",
            "feature/alpha",
            "master",
        ]);
        sort_branches(&mut branches);
        assert_eq!(
            names(&branches),
            vec![
                "master",
                "develop",
                "hotfix/leak",
                "release/0.9",
                "feature/alpha",
                "feature/zoom",
                "misc",
            ]
        );
    }

    #[test]
    fn test_lexicographic_fallback() {
        let mut branches = list(&["zz-tag", "aa-tag"]);
        sort_branches(&mut branches);
        assert_eq!(names(&branches), vec!["aa-tag", "zz-tag"]);
    }

    #[test]
    fn test_locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("Beta", "alpha"), Ordering::Greater);
        assert_eq!(locale_compare("alpha", "Beta"), Ordering::Less);
        assert_eq!(locale_compare("alpha", "Alpha"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_fallback_follows_root_collation() {
        let mut branches = list(&["v1", "v_1", "fix/2", "fix-2", "fix_2", "f", "é", "e"]);
        sort_branches(&mut branches);
        assert_eq!(
            names(&branches),
            vec!["e", "é", "f", "fix_2", "fix-2", "fix/2", "v_1", "v1"]
        );
    }

    #[test]
    fn test_underscore_sorts_before_hyphen() {
        let mut branches = list(&["feature/foo-bar", "feature/foo_bar"]);
        sort_branches(&mut branches);
        assert_eq!(names(&branches), vec!["feature/foo_bar", "feature/foo-bar"]);
    }

    #[test]
    fn test_comparator_checks_left_side_first() {
        let master = BranchRecord::new("master");
        let develop = BranchRecord::new("develop");
        assert_eq!(compare_branches(&master, &master), Ordering::Less);
        assert_eq!(compare_branches(&develop, &develop), Ordering::Less);
        assert_eq!(compare_branches(&develop, &master), Ordering::Greater);
    }

    #[test]
    fn test_duplicate_names_sort_without_panicking() {
        let mut branches = list(&["master", "x", "master", "develop", "develop"]);
        sort_branches(&mut branches);
        assert_eq!(names(&branches), vec!["master", "master", "develop", "develop", "x"]);
    }

    #[test]
    fn test_nameless_record_sorts_as_empty() {
        let mut branches = vec![BranchRecord::new("b"), BranchRecord::default()];
        sort_branches(&mut branches);
        assert_eq!(branches[0].name(), "");
    }

    #[test]
    fn test_filter_drops_gh_pages() {
        let mut branches = list(&["master", "gh-pages", "old-gh-pages-preview", "develop"]);
        retain_rendered(&mut branches);
        assert_eq!(names(&branches), vec!["master", "develop"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut once = list(&["gh-pages", "a", "b-gh-pages", "c"]);
        retain_rendered(&mut once);
        let mut twice = once.clone();
        retain_rendered(&mut twice);
        assert_eq!(once, twice);
    }
}
