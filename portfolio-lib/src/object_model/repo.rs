use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Repo {
    #[serde(rename = "id")]
    pub id: i64,

    #[serde(rename = "name")]
    pub name: String,

    #[serde(rename = "description")]
    pub description: Option<String>,

    #[serde(rename = "html_url")]
    pub html_url: String,

    #[serde(rename = "language")]
    pub language: Option<String>,

    #[serde(rename = "stargazers_count")]
    pub stargazers_count: u32,

    #[serde(rename = "forks_count")]
    pub forks_count: u32,

    #[serde(rename = "updated_at")]
    pub updated_at: String,

    #[serde(rename = "topics", default)]
    pub topics: Vec<String>,

    #[serde(rename = "private")]
    pub private: bool,

    #[serde(rename = "fork")]
    pub fork: bool,
}

impl Repo {
    /// A repo is featured when it is publicly visible, not a fork, and has
    /// either at least one star or a non-blank description.
    pub fn is_featured(&self) -> bool {
        !self.private
            && !self.fork
            && (self.stargazers_count > 0 || self.has_description())
    }

    fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::Repo;

    fn repo(stars: u32, description: Option<&str>, private: bool, fork: bool) -> Repo {
        Repo {
            id: 1,
            name: String::from("repo"),
            description: description.map(String::from),
            html_url: String::from("https://github.com/armand0e/repo"),
            language: Some(String::from("Rust")),
            stargazers_count: stars,
            forks_count: 0,
            updated_at: String::from("2025-06-01T00:00:00Z"),
            topics: Vec::new(),
            private,
            fork,
        }
    }

    #[test]
    fn private_repo_is_never_featured() {
        assert!(!repo(10, Some("A tool"), true, false).is_featured());
    }

    #[test]
    fn fork_is_never_featured() {
        assert!(!repo(10, Some("A tool"), false, true).is_featured());
    }

    #[test]
    fn unstarred_repo_without_description_is_excluded() {
        assert!(!repo(0, None, false, false).is_featured());
        assert!(!repo(0, Some(""), false, false).is_featured());
        assert!(!repo(0, Some("   \t"), false, false).is_featured());
    }

    #[test]
    fn unstarred_repo_with_description_is_featured() {
        assert!(repo(0, Some("A tool"), false, false).is_featured());
    }

    #[test]
    fn starred_repo_without_description_is_featured() {
        assert!(repo(5, None, false, false).is_featured());
        assert!(repo(5, Some(""), false, false).is_featured());
    }

    #[test]
    fn deserializes_listing_entry_without_topics() {
        let repo = serde_json::from_str::<Repo>(
            r#"{
                "id": 42,
                "name": "portfolio",
                "description": null,
                "html_url": "https://github.com/armand0e/portfolio",
                "language": "TypeScript",
                "stargazers_count": 3,
                "forks_count": 1,
                "updated_at": "2025-05-30T12:00:00Z",
                "private": false,
                "fork": false
            }"#,
        )
        .expect("entry should deserialize");
        assert_eq!(repo.id, 42);
        assert!(repo.topics.is_empty());
        assert!(repo.is_featured());
    }
}
