// src/application/services/mod.rs
pub mod enrichment;

use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, authors::AuthorCommandService,
            categories::CategoryCommandService, comments::CommentCommandService,
        },
        ports::time::Clock,
        queries::{
            analytics::AnalyticsQueryService, articles::ArticleQueryService,
            authors::AuthorQueryService, categories::CategoryQueryService,
            comments::CommentQueryService, search::SearchQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        author::AuthorRepository,
        category::CategoryRepository,
        comment::CommentRepository,
    },
};

use self::enrichment::ReferenceResolver;

pub struct ApplicationServices {
    pub author_commands: Arc<AuthorCommandService>,
    pub author_queries: Arc<AuthorQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub analytics: Arc<AnalyticsQueryService>,
    pub search: Arc<SearchQueryService>,
}

impl ApplicationServices {
    pub fn new(
        author_repo: Arc<dyn AuthorRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let resolver = Arc::new(ReferenceResolver::new(
            Arc::clone(&author_repo),
            Arc::clone(&category_repo),
            Arc::clone(&article_read_repo),
        ));

        let author_commands = Arc::new(AuthorCommandService::new(
            Arc::clone(&author_repo),
            Arc::clone(&clock),
        ));
        let author_queries = Arc::new(AuthorQueryService::new(Arc::clone(&author_repo)));

        let category_commands = Arc::new(CategoryCommandService::new(Arc::clone(&category_repo)));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&resolver),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&resolver),
        ));

        let analytics = Arc::new(AnalyticsQueryService::new(
            Arc::clone(&author_repo),
            Arc::clone(&category_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&resolver),
        ));
        let search = Arc::new(SearchQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&resolver),
        ));

        Self {
            author_commands,
            author_queries,
            category_commands,
            category_queries,
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            analytics,
            search,
        }
    }
}
