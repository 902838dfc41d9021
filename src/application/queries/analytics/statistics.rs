use super::AnalyticsQueryService;
use crate::{
    application::{
        dto::{CategoryCountDto, StatisticsDto},
        error::ApplicationResult,
        services::enrichment::UNCATEGORIZED,
    },
    domain::article::ArticleStatus,
};

/// Share of published articles in percent, rounded to two decimals. Zero when
/// there are no articles.
pub fn published_percentage(published: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = published as f64 / total as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}

impl AnalyticsQueryService {
    pub async fn statistics(&self) -> ApplicationResult<StatisticsDto> {
        let total_articles = self.articles.count(None).await?;
        let total_published = self.articles.count(Some(ArticleStatus::Published)).await?;
        let total_moderation = self
            .articles
            .count(Some(ArticleStatus::InModeration))
            .await?;
        let total_drafts = self.articles.count(Some(ArticleStatus::Draft)).await?;
        let total_authors = self.authors.count().await?;
        let total_comments = self.comments.count(None).await?;
        let total_approved_comments = self.comments.count(Some(true)).await?;

        let mut categories_distribution = Vec::new();
        for category in self.categories.list().await? {
            let count = self.articles.count_in_category(&category.id).await?;
            categories_distribution.push(CategoryCountDto {
                name: category.name.into_inner(),
                count,
            });
        }

        let uncategorized = self.articles.count_uncategorized().await?;
        if uncategorized > 0 {
            categories_distribution.push(CategoryCountDto {
                name: UNCATEGORIZED.to_string(),
                count: uncategorized,
            });
        }

        Ok(StatisticsDto {
            total_articles,
            total_published,
            total_moderation,
            total_drafts,
            total_authors,
            total_comments,
            total_approved_comments,
            categories_distribution,
            published_percentage: published_percentage(total_published, total_articles),
        })
    }
}
