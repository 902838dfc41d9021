// src/application/queries/search.rs
use std::{str::FromStr, sync::Arc};

use crate::{
    application::{
        dto::SearchResultsDto,
        error::{ApplicationError, ApplicationResult},
        services::enrichment::ReferenceResolver,
    },
    domain::{article::ArticleReadRepository, comment::CommentRepository},
};

pub const MIN_QUERY_CHARS: usize = 2;
pub const MAX_HITS_PER_SCOPE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Articles,
    Comments,
}

impl SearchScope {
    fn includes_articles(self) -> bool {
        matches!(self, Self::All | Self::Articles)
    }

    fn includes_comments(self) -> bool {
        matches!(self, Self::All | Self::Comments)
    }
}

impl FromStr for SearchScope {
    type Err = ApplicationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(Self::All),
            "articles" => Ok(Self::Articles),
            "comments" => Ok(Self::Comments),
            other => Err(ApplicationError::validation(format!(
                "search_in must be one of all, articles, comments (got {other})"
            ))),
        }
    }
}

pub struct SearchQuery {
    pub query: String,
    pub search_in: Option<String>,
}

pub struct SearchQueryService {
    articles: Arc<dyn ArticleReadRepository>,
    comments: Arc<dyn CommentRepository>,
    resolver: Arc<ReferenceResolver>,
}

impl SearchQueryService {
    pub fn new(
        articles: Arc<dyn ArticleReadRepository>,
        comments: Arc<dyn CommentRepository>,
        resolver: Arc<ReferenceResolver>,
    ) -> Self {
        Self {
            articles,
            comments,
            resolver,
        }
    }

    /// Case-insensitive substring search. Hits are not ranked and each scope is
    /// capped at [`MAX_HITS_PER_SCOPE`].
    pub async fn search(&self, query: SearchQuery) -> ApplicationResult<SearchResultsDto> {
        let needle = query.query.trim();
        if needle.chars().count() < MIN_QUERY_CHARS {
            return Err(ApplicationError::validation(format!(
                "query must be at least {MIN_QUERY_CHARS} characters"
            )));
        }
        let scope = query
            .search_in
            .as_deref()
            .map(str::parse::<SearchScope>)
            .transpose()?
            .unwrap_or_default();

        let mut results = SearchResultsDto::default();

        if scope.includes_articles() {
            let hits = self.articles.search(needle, MAX_HITS_PER_SCOPE).await?;
            results.articles = Some(self.resolver.enrich_articles(hits).await);
        }

        if scope.includes_comments() {
            let hits = self.comments.search(needle, MAX_HITS_PER_SCOPE).await?;
            results.comments = Some(self.resolver.enrich_comments(hits).await);
        }

        Ok(results)
    }
}
