use serde::{Deserialize, Serialize};

/// One entry of the upstream branch listing. Only `name` is read; every other
/// field the hosting API sends is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BranchRecord {
    #[serde(default)]
    pub name: Option<String>,
}

impl BranchRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Branch name, or the empty string when the record carried none.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

pub type BranchList = Vec<BranchRecord>;

/// URL templates for one CI column. `{branch}` is the only placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeTemplate {
    pub name: String,
    pub link: String,
    pub image: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeCell {
    pub link: String,
    pub image: String,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub cells: Vec<BadgeCell>,
}

const TRAVIS_LINK: &str = "http://travis-ci.org/guillaumeblanc/ozz-animation/branches";
const TRAVIS_IMAGE: &str = "https://travis-ci.org/guillaumeblanc/ozz-animation.svg?branch={branch}";
const APPVEYOR_LINK: &str = "http://ci.appveyor.com/project/guillaumeblanc/ozz-animation";
const APPVEYOR_IMAGE: &str =
    "https://ci.appveyor.com/api/projects/status/github/guillaumeblanc/ozz-animation?branch={branch}&svg=true";

/// The three columns of the ozz-animation dashboard page.
pub fn default_badges() -> Vec<BadgeTemplate> {
    let travis = BadgeTemplate {
        name: "travis".to_string(),
        link: TRAVIS_LINK.to_string(),
        image: TRAVIS_IMAGE.to_string(),
        alt: Some("{branch}".to_string()),
    };

    vec![
        travis.clone(),
        travis,
        BadgeTemplate {
            name: "appveyor".to_string(),
            link: APPVEYOR_LINK.to_string(),
            image: APPVEYOR_IMAGE.to_string(),
            alt: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ignores_unknown_fields() {
        let json = r#"{"name": "develop", "commit": {"sha": "abc", "url": "x"}, "protected": false}"#;
        let record: BranchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name(), "develop");
    }

    #[test]
    fn test_record_without_name_reads_as_empty() {
        let missing: BranchRecord = serde_json::from_str(r#"{"protected": true}"#).unwrap();
        let null: BranchRecord = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(missing.name(), "");
        assert_eq!(null.name(), "");
    }

    #[test]
    fn test_default_badges_all_take_branch() {
        let badges = default_badges();
        assert_eq!(badges.len(), 3);
        assert!(badges.iter().all(|b| b.image.contains("{branch}")));
    }
}
