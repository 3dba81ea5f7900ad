// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        validation::ArticleDraft,
    },
    domain::article::NewArticle,
};
use serde_json::Value;

pub struct CreateArticleCommand {
    pub payload: Value,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let draft =
            ArticleDraft::from_payload(&command.payload).map_err(ApplicationError::validation)?;
        let now = self.clock.now();

        let new_article = NewArticle {
            title: draft.title,
            body: draft.body,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
