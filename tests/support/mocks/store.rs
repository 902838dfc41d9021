// tests/support/mocks/store.rs
use async_trait::async_trait;
use blog_admin::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleStatus, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use blog_admin::domain::author::{Author, AuthorId, AuthorRepository, FullName, NewAuthor};
use blog_admin::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, NewCategory,
};
use blog_admin::domain::comment::{
    Comment, CommentContent, CommentFilter, CommentId, CommentRepository, CommenterName,
    NewComment,
};
use blog_admin::domain::errors::{DomainError, DomainResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct State {
    next_id: u64,
    authors: Vec<Author>,
    categories: Vec<Category>,
    articles: Vec<Article>,
    comments: Vec<Comment>,
}

impl State {
    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        format!("{:024x}", self.next_id)
    }
}

/// Mirrors the store's id rule: anything but 24 hex digits never matches.
fn is_object_id(raw: &str) -> bool {
    raw.len() == 24 && raw.chars().all(|c| c.is_ascii_hexdigit())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// One shared in-memory database implementing every repository trait.
///
/// Clones share state, so a test can hand the same store to the services and
/// still inspect or seed it afterwards.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an article as-is, bypassing every check. Used to plant records
    /// with dangling references.
    pub fn seed_article(&self, mut article: Article) -> ArticleId {
        let mut state = self.state.lock().unwrap();
        let id = ArticleId::new(state.allocate_id()).unwrap();
        article.id = id.clone();
        state.articles.push(article);
        id
    }

    pub fn seed_comment(&self, mut comment: Comment) -> CommentId {
        let mut state = self.state.lock().unwrap();
        let id = CommentId::new(state.allocate_id()).unwrap();
        comment.id = id.clone();
        state.comments.push(comment);
        id
    }

    pub fn article(&self, id: &str) -> Option<Article> {
        let state = self.state.lock().unwrap();
        state.articles.iter().find(|a| a.id.as_str() == id).cloned()
    }

    pub fn comment(&self, id: &str) -> Option<Comment> {
        let state = self.state.lock().unwrap();
        state.comments.iter().find(|c| c.id.as_str() == id).cloned()
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    pub fn comment_count(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryStore {
    async fn find_by_identity(
        &self,
        full_name: &FullName,
        email: &str,
    ) -> DomainResult<Option<Author>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .authors
            .iter()
            .find(|a| a.full_name.as_str() == full_name.as_str() && a.email == email)
            .cloned())
    }

    async fn insert(&self, author: NewAuthor) -> DomainResult<AuthorId> {
        let mut state = self.state.lock().unwrap();
        let id = AuthorId::new(state.allocate_id())?;
        state.authors.push(Author {
            id: id.clone(),
            full_name: author.full_name,
            email: author.email,
            registration_date: author.registration_date,
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: &AuthorId) -> DomainResult<Option<Author>> {
        if !is_object_id(id.as_str()) {
            return Ok(None);
        }
        let state = self.state.lock().unwrap();
        Ok(state.authors.iter().find(|a| &a.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Author>> {
        Ok(self.state.lock().unwrap().authors.clone())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.state.lock().unwrap().authors.len() as u64)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .categories
            .iter()
            .find(|c| c.name.as_str() == name.as_str())
            .cloned())
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<CategoryId> {
        let mut state = self.state.lock().unwrap();
        let id = CategoryId::new(state.allocate_id())?;
        state.categories.push(Category {
            id: id.clone(),
            name: category.name,
            description: category.description,
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>> {
        if !is_object_id(id.as_str()) {
            return Ok(None);
        }
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| &c.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        Ok(self.state.lock().unwrap().categories.clone())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        article.validate()?;
        let mut state = self.state.lock().unwrap();
        let id = ArticleId::new(state.allocate_id())?;
        state.articles.push(Article {
            id: id.clone(),
            title: article.title,
            content: article.content,
            author_id: article.author_id,
            category_id: article.category_id,
            status: article.status,
            created_at: article.created_at,
            updated_at: article.updated_at,
            published_at: article.published_at,
        });
        Ok(id)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<u64> {
        update.validate()?;
        let mut state = self.state.lock().unwrap();
        let Some(article) = state.articles.iter_mut().find(|a| a.id == update.id) else {
            return Ok(0);
        };
        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        if let Some(author_id) = update.author_id {
            article.author_id = author_id;
        }
        if let Some(category_id) = update.category_id {
            article.category_id = category_id;
        }
        if let Some(status) = update.status {
            article.status = status;
        }
        article.published_at = update.published_at.apply(article.published_at);
        article.updated_at = update.updated_at;
        Ok(1)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        if !is_object_id(id.as_str()) {
            return Ok(None);
        }
        let state = self.state.lock().unwrap();
        Ok(state.articles.iter().find(|a| &a.id == id).cloned())
    }

    async fn find_by_title_and_author(
        &self,
        title: &ArticleTitle,
        author_id: &AuthorId,
    ) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .find(|a| &a.title == title && &a.author_id == author_id)
            .cloned())
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        let mut items: Vec<Article> = state
            .articles
            .iter()
            .filter(|a| filter.status.is_none_or(|s| a.status == s))
            .filter(|a| filter.author_id.as_ref().is_none_or(|id| &a.author_id == id))
            .filter(|a| {
                filter
                    .category_id
                    .as_ref()
                    .is_none_or(|id| a.category_id.as_ref() == Some(id))
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn search(&self, needle: &str, limit: usize) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .filter(|a| contains_ci(a.title.as_str(), needle) || contains_ci(&a.content, needle))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self, status: Option<ArticleStatus>) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .filter(|a| status.is_none_or(|s| a.status == s))
            .count() as u64)
    }

    async fn count_in_category(&self, category_id: &CategoryId) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .filter(|a| a.category_id.as_ref() == Some(category_id))
            .count() as u64)
    }

    async fn count_uncategorized(&self) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .filter(|a| a.category_id.is_none())
            .count() as u64)
    }

    async fn published_counts_by_author(&self) -> DomainResult<HashMap<String, u64>> {
        let state = self.state.lock().unwrap();
        let mut counts = HashMap::new();
        for article in state.articles.iter().filter(|a| a.status.is_published()) {
            *counts.entry(article.author_id.to_string()).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_duplicate(
        &self,
        article_id: &ArticleId,
        author_name: &CommenterName,
        content: &CommentContent,
    ) -> DomainResult<Option<Comment>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .find(|c| {
                &c.article_id == article_id
                    && c.author_name.as_str() == author_name.as_str()
                    && c.content.as_str() == content.as_str()
            })
            .cloned())
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<CommentId> {
        let mut state = self.state.lock().unwrap();
        let id = CommentId::new(state.allocate_id())?;
        state.comments.push(Comment {
            id: id.clone(),
            article_id: comment.article_id,
            author_name: comment.author_name,
            content: comment.content,
            created_at: comment.created_at,
            is_approved: comment.is_approved,
        });
        Ok(id)
    }

    async fn list(&self, filter: &CommentFilter) -> DomainResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        let mut items: Vec<Comment> = state
            .comments
            .iter()
            .filter(|c| filter.article_id.as_ref().is_none_or(|id| &c.article_id == id))
            .filter(|c| filter.is_approved.is_none_or(|flag| c.is_approved == flag))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn set_approval(&self, id: &CommentId, approved: bool) -> DomainResult<u64> {
        let mut state = self.state.lock().unwrap();
        match state.comments.iter_mut().find(|c| &c.id == id) {
            Some(comment) if comment.is_approved != approved => {
                comment.is_approved = approved;
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn delete(&self, id: &CommentId) -> DomainResult<u64> {
        let mut state = self.state.lock().unwrap();
        let before = state.comments.len();
        state.comments.retain(|c| &c.id != id);
        Ok((before - state.comments.len()) as u64)
    }

    async fn search(&self, needle: &str, limit: usize) -> DomainResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .filter(|c| contains_ci(c.content.as_str(), needle))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self, approved: Option<bool>) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .filter(|c| approved.is_none_or(|flag| c.is_approved == flag))
            .count() as u64)
    }

    async fn counts_by_article_author(&self) -> DomainResult<HashMap<String, u64>> {
        let state = self.state.lock().unwrap();
        let mut counts = HashMap::new();
        for comment in &state.comments {
            if !is_object_id(comment.article_id.as_str()) {
                continue;
            }
            if let Some(article) = state.articles.iter().find(|a| a.id == comment.article_id) {
                *counts.entry(article.author_id.to_string()).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }
}

/// Author repository whose every call fails like an unreachable store.
pub struct BrokenAuthorRepo;

#[async_trait]
impl AuthorRepository for BrokenAuthorRepo {
    async fn find_by_identity(&self, _: &FullName, _: &str) -> DomainResult<Option<Author>> {
        Err(DomainError::persistence("authors.find_by_identity: connection error"))
    }

    async fn insert(&self, _: NewAuthor) -> DomainResult<AuthorId> {
        Err(DomainError::persistence("authors.insert: connection error"))
    }

    async fn find_by_id(&self, _: &AuthorId) -> DomainResult<Option<Author>> {
        Err(DomainError::persistence("authors.find_by_id: connection error"))
    }

    async fn list(&self) -> DomainResult<Vec<Author>> {
        Err(DomainError::persistence("authors.list: connection error"))
    }

    async fn count(&self) -> DomainResult<u64> {
        Err(DomainError::persistence("authors.count: connection error"))
    }
}
