use crate::chat_usecase::{ChatUseCase, FALLBACK_ANSWER, Submission};
use crate::conversation_store::ConversationStore;
use crate::session_store::SessionStore;
use kbchat_core::answer::{AnswerError, AnswerPayload, AnswerProvider};
use kbchat_core::chat::{
    AccessLevel, ChatArchive, ChatArchiveRepository, MessageRole, Source,
};
use kbchat_core::error::Result;
use kbchat_core::model::AiModel;
use std::sync::Arc;
use std::time::Duration;

struct NullArchiveRepository;

#[async_trait::async_trait]
impl ChatArchiveRepository for NullArchiveRepository {
    async fn load(&self) -> Result<Option<ChatArchive>> {
        Ok(None)
    }

    async fn save(&self, _archive: &ChatArchive) -> Result<()> {
        Ok(())
    }
}

/// Provider returning a fixed payload with one public and one restricted
/// source.
struct MixedSourcesProvider;

fn mixed_sources() -> Vec<Source> {
    vec![
        Source {
            title: "Открытый документ".to_string(),
            url: "https://confluence.company.ru/pages/open".to_string(),
            excerpt: "раздел 1".to_string(),
            access_level: AccessLevel::Public,
        },
        Source {
            title: "Закрытый документ".to_string(),
            url: "https://confluence.company.ru/pages/closed".to_string(),
            excerpt: "раздел 2".to_string(),
            access_level: AccessLevel::Restricted,
        },
    ]
}

#[async_trait::async_trait]
impl AnswerProvider for MixedSourcesProvider {
    async fn generate_answer(
        &self,
        _query: &str,
        _model: AiModel,
    ) -> std::result::Result<AnswerPayload, AnswerError> {
        Ok(AnswerPayload {
            content: "ответ".to_string(),
            confidence: 0.9,
            sources: mixed_sources(),
            follow_up_questions: vec!["уточнить?".to_string()],
        })
    }
}

/// Provider that always fails.
struct BrokenProvider;

#[async_trait::async_trait]
impl AnswerProvider for BrokenProvider {
    async fn generate_answer(
        &self,
        _query: &str,
        _model: AiModel,
    ) -> std::result::Result<AnswerPayload, AnswerError> {
        Err(AnswerError::Generation("backend unreachable".to_string()))
    }
}

/// Provider that parks until told to finish, for observing the pending
/// state.
struct ParkedProvider {
    release: tokio::sync::Semaphore,
}

#[async_trait::async_trait]
impl AnswerProvider for ParkedProvider {
    async fn generate_answer(
        &self,
        _query: &str,
        _model: AiModel,
    ) -> std::result::Result<AnswerPayload, AnswerError> {
        let _permit = self.release.acquire().await.map_err(|e| {
            AnswerError::Generation(e.to_string())
        })?;
        Ok(AnswerPayload {
            content: "поздний ответ".to_string(),
            confidence: 0.8,
            sources: Vec::new(),
            follow_up_questions: Vec::new(),
        })
    }
}

async fn harness(provider: Arc<dyn AnswerProvider>) -> (Arc<ConversationStore>, Arc<SessionStore>, ChatUseCase) {
    let conversation = Arc::new(
        ConversationStore::new(Arc::new(NullArchiveRepository))
            .await
            .unwrap(),
    );
    let session = Arc::new(SessionStore::with_login_latency(Duration::ZERO));
    let usecase = ChatUseCase::new(conversation.clone(), session.clone(), provider);
    (conversation, session, usecase)
}

#[tokio::test]
async fn settled_submission_appends_one_user_and_one_bot_message() {
    let (conversation, _, usecase) = harness(Arc::new(MixedSourcesProvider)).await;

    let outcome = usecase.submit("  Зачем нам нужна DFS  ").await;
    assert_eq!(outcome, Submission::Settled);

    let messages = conversation.messages().await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::User);
    // The input is trimmed before it becomes a message.
    assert_eq!(messages[0].content, "Зачем нам нужна DFS");
    assert_eq!(messages[1].role, MessageRole::Bot);
    assert_eq!(messages[1].confidence, Some(0.9));
    assert!(!conversation.is_loading());
}

#[tokio::test]
async fn failed_submission_substitutes_the_fallback_message() {
    let (conversation, _, usecase) = harness(Arc::new(BrokenProvider)).await;

    let outcome = usecase.submit("Зачем нам нужна DFS").await;
    assert_eq!(outcome, Submission::Failed);

    let messages = conversation.messages().await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].content, FALLBACK_ANSWER);
    assert!(messages[1].confidence.is_none());
    assert!(messages[1].sources.is_none());
    // The failure never leaves the conversation stuck in loading.
    assert!(!conversation.is_loading());
}

#[tokio::test]
async fn whitespace_only_input_is_ignored() {
    let (conversation, _, usecase) = harness(Arc::new(MixedSourcesProvider)).await;

    assert_eq!(usecase.submit("   \n\t ").await, Submission::Ignored);
    assert_eq!(usecase.submit("").await, Submission::Ignored);
    assert!(conversation.messages().await.is_empty());
}

#[tokio::test]
async fn submission_while_pending_is_rejected() {
    let provider = Arc::new(ParkedProvider {
        release: tokio::sync::Semaphore::new(0),
    });
    let (conversation, _, usecase) = harness(provider.clone()).await;
    let usecase = Arc::new(usecase);

    let first = {
        let usecase = usecase.clone();
        tokio::spawn(async move { usecase.submit("первый вопрос").await })
    };

    // Wait until the first submission is pending.
    while !conversation.is_loading() {
        tokio::task::yield_now().await;
    }

    assert_eq!(usecase.submit("второй вопрос").await, Submission::Rejected);
    assert_eq!(conversation.messages().await.len(), 1);

    provider.release.add_permits(1);
    assert_eq!(first.await.unwrap(), Submission::Settled);
    assert_eq!(conversation.messages().await.len(), 2);
    assert!(!conversation.is_loading());
}

#[tokio::test]
async fn sources_are_filtered_for_regular_users() {
    let (conversation, session, usecase) = harness(Arc::new(MixedSourcesProvider)).await;
    session.login("ivanov", "123").await.unwrap();

    usecase.submit("вопрос").await;

    let messages = conversation.messages().await;
    let sources = messages[1].sources.as_ref().unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].access_level, AccessLevel::Public);
}

#[tokio::test]
async fn admins_see_every_source() {
    let (conversation, session, usecase) = harness(Arc::new(MixedSourcesProvider)).await;
    session.login("admin_ivanov", "123").await.unwrap();

    usecase.submit("вопрос").await;

    let messages = conversation.messages().await;
    let sources = messages[1].sources.as_ref().unwrap();
    assert_eq!(sources, &mixed_sources());
}

#[tokio::test]
async fn feedback_flows_through_to_the_store_once() {
    let (conversation, _, usecase) = harness(Arc::new(MixedSourcesProvider)).await;
    usecase.submit("вопрос").await;
    let bot_id = conversation.messages().await[1].id.clone();

    usecase
        .leave_feedback(
            &bot_id,
            kbchat_core::chat::Feedback::Helpful,
            Some("полезно".to_string()),
        )
        .await;
    usecase
        .leave_feedback(&bot_id, kbchat_core::chat::Feedback::Unhelpful, None)
        .await;

    let messages = conversation.messages().await;
    assert_eq!(
        messages[1].feedback,
        Some(kbchat_core::chat::Feedback::Helpful)
    );
    assert_eq!(messages[1].comment.as_deref(), Some("полезно"));
}

#[tokio::test]
async fn loading_toggles_exactly_once_per_submission() {
    let provider = Arc::new(ParkedProvider {
        release: tokio::sync::Semaphore::new(0),
    });
    let (conversation, _, usecase) = harness(provider.clone()).await;
    let usecase = Arc::new(usecase);

    assert!(!conversation.is_loading());
    let task = {
        let usecase = usecase.clone();
        tokio::spawn(async move { usecase.submit("вопрос").await })
    };

    while !conversation.is_loading() {
        tokio::task::yield_now().await;
    }

    provider.release.add_permits(1);
    task.await.unwrap();
    assert!(!conversation.is_loading());
}
