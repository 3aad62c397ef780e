//! Keyword-lookup answer provider.
//!
//! A stand-in for the real retrieval backend: answers come from a built-in
//! table of curated question/answer pairs matched by keyword. The provider
//! honors the full [`AnswerProvider`] contract (async, stateless, safely
//! callable concurrently), so swapping in a real backend does not touch the
//! orchestration layer.

use async_trait::async_trait;
use kbchat_core::answer::{AnswerError, AnswerPayload, AnswerProvider};
use kbchat_core::chat::{AccessLevel, Source};
use kbchat_core::model::AiModel;
use once_cell::sync::Lazy;
use std::time::Duration;

/// One curated knowledge-base entry.
struct QaEntry {
    /// Lowercased keywords; any hit in the query selects this entry.
    keywords: &'static [&'static str],
    answer: &'static str,
    source_title: &'static str,
    source_url: &'static str,
    source_excerpt: &'static str,
}

/// Curated answers over the corporate knowledge base.
static PREDEFINED_QA: Lazy<Vec<QaEntry>> = Lazy::new(|| {
    vec![
        QaEntry {
            keywords: &["зачем", "dfs", "распределённая", "файловая", "система"],
            answer: "Чтобы избавиться от монолитного сервера, который сложно обновлять и \
                     резервировать. DFS делает систему отказоустойчивой – если один сервер \
                     упадёт, пользователи даже не заметят, потому что данные реплицируются \
                     на другие серверы.",
            source_title: "Инженерные системы и Hardware.docx",
            source_url: "https://confluence.company.ru/pages/dfs-systems",
            source_excerpt: "Предпосылки внедрения распределённых файловых систем",
        },
        QaEntry {
            keywords: &["сервер", "данные", "отключен", "перезапишет", "актуальность"],
            answer: "Нет, благодаря функции «Актуальность содержимого» сервер, который долго \
                     был отключен, не сможет перезаписать свежие данные своими устаревшими. \
                     Это защита от случайной потери информации.",
            source_title: "Концепция сервис файлового хранения на базе DFS.docx",
            source_url: "https://confluence.company.ru/pages/dfs-content-freshness",
            source_excerpt: "Раздел «Актуальность содержимого» - защита от перезаписи актуальных данных",
        },
        QaEntry {
            keywords: &["ansible", "зачем", "автоматизация"],
            answer: "Ansible – это система для автоматизации рутинных задач, например, настройки \
                     серверов, раскладки SSH–ключей или обновления ПО. Мы решили его внедрить, \
                     чтобы сэкономить время администраторов и уменьшить количество ручной работы.",
            source_title: "Linux СПО.docx",
            source_url: "https://confluence.company.ru/pages/linux-software",
            source_excerpt: "Документ от 9 окт. 2023 г. об автоматизации с помощью Ansible",
        },
        QaEntry {
            keywords: &["альтернативы", "microsoft", "office", "visio", "linux"],
            answer: "Вместо MS Office – LibreOffice (базовый функционал) или OnlyOffice (дизайн \
                     как в MS Office, но макросы на JavaScript). Вместо Visio – LibreOffice Draw \
                     (базово) или EdrawMax (открывает vsdx–файлы, но частично без перевода).",
            source_title: "Linux СПО.docx",
            source_url: "https://confluence.company.ru/pages/linux-alternatives",
            source_excerpt: "Таблица «Альтернативные программные продукты», разделы «Офисный пакет» \
                             и «Дополнительный офисный пакет»",
        },
        QaEntry {
            keywords: &["ответственный", "связь", "сатурнов", "jira", "задачи"],
            answer: "Ответственный – Сатурнов С.С. Все задачи по связи ведутся в специальной \
                     доске Jira (уточните название у ответственного). На встречах обсуждаются \
                     объекты связи, подходы, инструменты и задействованные сотрудники.",
            source_title: "Связь (телефония, ВОЛС–ы, каналы связи, ТВ, GSM).docx",
            source_url: "https://confluence.company.ru/pages/communications",
            source_excerpt: "Шапка документа и протокол от 17 авг. 2023 г.",
        },
    ]
});

/// Confidence reported for a keyword hit.
const MATCH_CONFIDENCE: f32 = 0.95;

/// Confidence reported for the canned miss reply.
const MISS_CONFIDENCE: f32 = 0.1;

const MISS_ANSWER: &str = "К сожалению, я не могу ответить на данный вопрос. Попробуйте \
                           перефразировать или обратитесь напрямую к техподдержке.";

/// Simulated backend latency used by [`KeywordAnswerProvider::new`].
const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Answer provider backed by the built-in Q&A table.
///
/// Matching is a lowercased substring scan over each entry's keyword list;
/// the first entry with a hit wins. Unmatched queries get a canned
/// low-confidence reply pointing at tech support, with follow-up questions
/// for the presentation layer to offer.
pub struct KeywordAnswerProvider {
    latency: Duration,
}

impl KeywordAnswerProvider {
    /// Provider with the default simulated latency.
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_LATENCY)
    }

    /// Provider with a custom simulated latency. Tests pass
    /// `Duration::ZERO`.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    fn lookup(query: &str) -> AnswerPayload {
        let lower_query = query.to_lowercase();

        for qa in PREDEFINED_QA.iter() {
            if qa.keywords.iter().any(|keyword| lower_query.contains(keyword)) {
                return AnswerPayload {
                    content: qa.answer.to_string(),
                    confidence: MATCH_CONFIDENCE,
                    sources: vec![Source {
                        title: qa.source_title.to_string(),
                        url: qa.source_url.to_string(),
                        excerpt: qa.source_excerpt.to_string(),
                        access_level: AccessLevel::Public,
                    }],
                    follow_up_questions: Vec::new(),
                };
            }
        }

        AnswerPayload {
            content: MISS_ANSWER.to_string(),
            confidence: MISS_CONFIDENCE,
            sources: vec![Source {
                title: "Техподдержка РМК".to_string(),
                url: "https://confluence.company.ru/pages/support".to_string(),
                excerpt: "Контакты службы технической поддержки".to_string(),
                access_level: AccessLevel::Public,
            }],
            follow_up_questions: vec![
                "Как связаться с техподдержкой?".to_string(),
                "Где найти контакты IT-отдела?".to_string(),
            ],
        }
    }
}

impl Default for KeywordAnswerProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerProvider for KeywordAnswerProvider {
    async fn generate_answer(
        &self,
        query: &str,
        model: AiModel,
    ) -> Result<AnswerPayload, AnswerError> {
        tracing::debug!(model = model.model_id(), "generating answer");
        tokio::time::sleep(self.latency).await;
        Ok(Self::lookup(query))
    }
}
