//! GitHub REST API wire types.
//!
//! Every field is optional: the API omits or nulls fields freely (forks of
//! archived repos, search hits with no description), and a missing field
//! must never fail the request.

use serde::Deserialize;

use aetheribot_types::github::{RepositoryDetails, SearchHit};

/// `GET /repos/{owner}/{repo}` body, also the shape of each search item.
#[derive(Debug, Default, Deserialize)]
pub struct GitHubRepository {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub forks_count: Option<u64>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl From<GitHubRepository> for RepositoryDetails {
    fn from(repo: GitHubRepository) -> Self {
        Self {
            full_name: repo.full_name.unwrap_or_default(),
            description: repo.description,
            topics: repo.topics.unwrap_or_default(),
            stars: repo.stargazers_count.unwrap_or_default(),
            forks: repo.forks_count.unwrap_or_default(),
            url: repo.html_url.unwrap_or_default(),
        }
    }
}

impl From<GitHubRepository> for SearchHit {
    fn from(repo: GitHubRepository) -> Self {
        Self {
            full_name: repo.full_name.unwrap_or_default(),
            description: repo.description,
            stars: repo.stargazers_count.unwrap_or_default(),
            forks: repo.forks_count.unwrap_or_default(),
            url: repo.html_url.unwrap_or_default(),
        }
    }
}

/// `GET /repos/{owner}/{repo}/readme` body.
#[derive(Debug, Deserialize)]
pub struct GitHubReadme {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

/// `GET /search/repositories` body.
#[derive(Debug, Deserialize)]
pub struct GitHubSearchResponse {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub items: Option<Vec<GitHubRepository>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_deserialization() {
        let json = r#"{
            "id": 70107786,
            "full_name": "vercel/next.js",
            "description": "The React Framework",
            "topics": ["react", "nextjs"],
            "stargazers_count": 120000,
            "forks_count": 26000,
            "html_url": "https://github.com/vercel/next.js",
            "owner": {"login": "vercel"}
        }"#;

        let repo: GitHubRepository = serde_json::from_str(json).unwrap();
        let details = RepositoryDetails::from(repo);
        assert_eq!(details.full_name, "vercel/next.js");
        assert_eq!(details.description.as_deref(), Some("The React Framework"));
        assert_eq!(details.topics, vec!["react", "nextjs"]);
        assert_eq!(details.stars, 120_000);
        assert_eq!(details.forks, 26_000);
        assert_eq!(details.url, "https://github.com/vercel/next.js");
    }

    #[test]
    fn repository_with_nulls_and_gaps() {
        let json = r#"{"full_name": "a/b", "description": null, "topics": null}"#;

        let details = RepositoryDetails::from(serde_json::from_str::<GitHubRepository>(json).unwrap());
        assert_eq!(details.full_name, "a/b");
        assert!(details.description.is_none());
        assert!(details.topics.is_empty());
        assert_eq!(details.stars, 0);
        assert_eq!(details.url, "");
    }

    #[test]
    fn search_response_without_items() {
        let response: GitHubSearchResponse =
            serde_json::from_str(r#"{"total_count": 0, "incomplete_results": false}"#).unwrap();
        assert_eq!(response.total_count, Some(0));
        assert!(response.items.is_none());
    }

    #[test]
    fn search_item_converts_to_hit() {
        let json = r#"{"items": [{"full_name": "x/y", "stargazers_count": 7, "forks_count": 2, "html_url": "https://github.com/x/y"}]}"#;
        let response: GitHubSearchResponse = serde_json::from_str(json).unwrap();
        let hit = SearchHit::from(response.items.unwrap().remove(0));
        assert_eq!(hit.full_name, "x/y");
        assert_eq!(hit.stars, 7);
        assert!(hit.description.is_none());
    }

    #[test]
    fn readme_deserialization() {
        let json = r#"{"name": "README.md", "content": "SGVsbG8=\n", "encoding": "base64"}"#;
        let readme: GitHubReadme = serde_json::from_str(json).unwrap();
        assert_eq!(readme.content.as_deref(), Some("SGVsbG8=\n"));
        assert_eq!(readme.encoding.as_deref(), Some("base64"));
    }
}
