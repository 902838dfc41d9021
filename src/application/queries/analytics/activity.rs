use super::AnalyticsQueryService;
use crate::application::{dto::AuthorActivityDto, error::ApplicationResult};

impl AnalyticsQueryService {
    /// One row per author in store order. Comments are attributed through the
    /// commented article's author; authors without matches report zero.
    pub async fn author_activity(&self) -> ApplicationResult<Vec<AuthorActivityDto>> {
        let published = self.articles.published_counts_by_author().await?;
        let comments = self.comments.counts_by_article_author().await?;
        let authors = self.authors.list().await?;

        Ok(authors
            .into_iter()
            .map(|author| {
                let key = author.id.as_str();
                AuthorActivityDto {
                    published_articles_count: published.get(key).copied().unwrap_or(0),
                    total_comments_count: comments.get(key).copied().unwrap_or(0),
                    author_name: author.full_name.into_inner(),
                    email: author.email,
                    registration_date: author.registration_date,
                }
            })
            .collect())
    }
}
