// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use kiji_api::application::ports::time::Clock;
use kiji_api::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleReplacement, ArticleWriteRepository,
    NewArticle,
};
use kiji_api::domain::errors::{DomainError, DomainResult};
use std::collections::BTreeMap;
use std::sync::Mutex;

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// 記事リポジトリのインメモリ実装
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Article>,
    next_id: i64,
}

impl InMemoryArticleRepo {
    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let raw_id = inner.next_id;
        let stored = Article {
            id: ArticleId::new(raw_id)?,
            title: article.title,
            body: article.body,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        inner.rows.insert(raw_id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, replacement: ArticleReplacement) -> DomainResult<Article> {
        let mut inner = self.inner.lock().unwrap();
        let row = inner
            .rows
            .get_mut(&i64::from(replacement.id))
            .ok_or_else(|| DomainError::NotFound(format!("article {} not found", replacement.id)))?;
        row.title = replacement.title;
        row.body = replacement.body;
        row.updated_at = replacement.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .rows
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.inner.lock().unwrap().rows.get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// 常に永続化エラーを返すリポジトリ
pub struct FailingArticleRepo;

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(DomainError::Persistence("store unavailable".into()))
    }

    async fn update(&self, _replacement: ArticleReplacement) -> DomainResult<Article> {
        Err(DomainError::Persistence("store unavailable".into()))
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Err(DomainError::Persistence("store unavailable".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("store unavailable".into()))
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("store unavailable".into()))
    }
}

/* -------------------------------- FixedClock -------------------------------- */

/// テスト用の固定時刻クロック
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at_epoch() -> Self {
        Self(Utc.timestamp_opt(1_700_000_000, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
