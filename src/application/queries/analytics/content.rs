use super::AnalyticsQueryService;
use crate::{
    application::{
        dto::ContentOverviewDto,
        error::ApplicationResult,
        services::enrichment::{NO_CATEGORY, UNKNOWN},
    },
    domain::article::ArticleFilter,
};

impl AnalyticsQueryService {
    pub async fn content_overview(&self) -> ApplicationResult<Vec<ContentOverviewDto>> {
        let articles = self.articles.list(&ArticleFilter::default()).await?;

        let mut rows = Vec::with_capacity(articles.len());
        for article in articles {
            let author_name = self
                .resolver
                .author_name(&article.author_id)
                .await
                .unwrap_or_else(|| UNKNOWN.to_string());
            let category_name = self
                .resolver
                .category_name(article.category_id.as_ref())
                .await
                .unwrap_or_else(|| NO_CATEGORY.to_string());

            rows.push(ContentOverviewDto {
                id: article.id.into(),
                title: article.title.into_inner(),
                author_name,
                category_name,
                status: article.status.as_str().to_string(),
                created_at: article.created_at,
                published_at: article.published_at,
            });
        }
        Ok(rows)
    }
}
