//! Reply rendering for both query paths.
//!
//! The rendered text is the whole chat reply, so the layout and every
//! fallback literal here are part of the public contract.

use aetheribot_types::github::{ReadmePreview, RepositorySummary, SearchHit, SearchResultSet};

/// Shown when a repository has no (or an empty) description.
pub const NO_DESCRIPTION: &str = "No description";

/// Shown when a repository has no topics.
pub const NO_TOPICS: &str = "None";

/// README section text when the README fetch was not successful.
pub const README_UNAVAILABLE: &str = "📘 README not available.";

/// Entire reply when a search returns no items.
pub const NO_RESULTS: &str = "🔍 No repositories found for your query.";

fn description_or_fallback(description: Option<&str>) -> &str {
    match description {
        Some(d) if !d.is_empty() => d,
        _ => NO_DESCRIPTION,
    }
}

fn readme_text(readme: &ReadmePreview) -> &str {
    match readme {
        ReadmePreview::Excerpt(text) => text,
        ReadmePreview::Unavailable => README_UNAVAILABLE,
    }
}

/// Render the direct-lookup reply.
pub fn render_summary(summary: &RepositorySummary) -> String {
    let details = &summary.details;

    let topics = details.topics.join(", ");
    let topics = if topics.is_empty() { NO_TOPICS } else { topics.as_str() };

    format!(
        "📦 **{}**\n📝 Description: {}\n🏷️ Topics: {}\n⭐ Stars: {}\n🍴 Forks: {}\n🔗 URL: {}\n\n📘 **README Preview:**\n{}",
        details.full_name,
        description_or_fallback(details.description.as_deref()),
        topics,
        details.stars,
        details.forks,
        details.url,
        readme_text(&summary.readme),
    )
}

fn render_hit(hit: &SearchHit) -> String {
    format!(
        "🔹 **{}**\n- {}\n- ⭐ {} | 🍴 {}\n- 🔗 {}",
        hit.full_name,
        description_or_fallback(hit.description.as_deref()),
        hit.stars,
        hit.forks,
        hit.url,
    )
}

/// Render the search reply, or the no-results sentinel.
pub fn render_search(results: &SearchResultSet) -> String {
    if results.is_empty() {
        return NO_RESULTS.to_string();
    }

    let blocks = results
        .hits
        .iter()
        .map(render_hit)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("🔍 Top results for \"{}\":\n\n{}", results.query, blocks)
}
