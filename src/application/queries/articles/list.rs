use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{ArticleFilter, ArticleStatus},
        author::AuthorId,
        category::CategoryId,
    },
};

/// Empty filter values are treated as absent.
#[derive(Default)]
pub struct ListArticlesQuery {
    pub status: Option<String>,
    pub author_id: Option<String>,
    pub category_id: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let status = query
            .status
            .filter(|raw| !raw.is_empty())
            .map(|raw| raw.parse::<ArticleStatus>())
            .transpose()?;

        let filter = ArticleFilter {
            status,
            author_id: query.author_id.and_then(|id| AuthorId::new(id).ok()),
            category_id: CategoryId::optional(query.category_id),
        };

        let articles = self.read_repo.list(&filter).await?;
        Ok(self.resolver.enrich_articles(articles).await)
    }
}
