use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        validation::ArticleDraft,
    },
    domain::article::{Article, ArticleId, ArticleReplacement},
};
use serde_json::Value;

pub struct UpdateArticleCommand {
    pub id: i64,
    pub payload: Value,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        // An out-of-range id can never resolve to a record.
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let draft =
            ArticleDraft::from_payload(&command.payload).map_err(ApplicationError::validation)?;
        article.replace_content(draft.title, draft.body, self.clock.now());

        let Article {
            id,
            title,
            body,
            updated_at,
            ..
        } = article;
        let updated = self
            .write_repo
            .update(ArticleReplacement {
                id,
                title,
                body,
                updated_at,
            })
            .await?;
        Ok(updated.into())
    }
}
