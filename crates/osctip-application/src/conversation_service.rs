//! Conversation use case implementation.
//!
//! `ConversationService` owns the session-store operations (initialize,
//! create, delete, clear, active-id tracking) and the one-exchange message
//! pipeline (`send_message`). It mutates a caller-supplied list and hands
//! the updated list back after persisting, mirroring the whole-blob
//! persistence discipline of the repository underneath.

use std::sync::Arc;

use osctip_core::clock::Clock;
use osctip_core::conversation::{
    Conversation, ConversationCategory, ConversationRepository, DEFAULT_TITLE, Message,
    derive_title, detect_category,
};
use osctip_core::error::{OsctipError, Result};

use crate::responder::Responder;

/// Use case for managing conversations and driving message exchanges.
pub struct ConversationService {
    /// Repository for conversation persistence
    repository: Arc<dyn ConversationRepository>,
    /// Engine producing simulated assistant replies
    responder: Arc<dyn Responder>,
    /// Time source for message timestamps
    clock: Arc<dyn Clock>,
}

impl ConversationService {
    /// Creates a new `ConversationService`.
    pub fn new(
        repository: Arc<dyn ConversationRepository>,
        responder: Arc<dyn Responder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            responder,
            clock,
        }
    }

    /// Loads the persisted conversation list for a user.
    ///
    /// On absent or malformed data, returns a freshly seeded single
    /// conversation WITHOUT persisting it; the first mutation persists.
    pub async fn initialize_conversations(&self, user_id: &str) -> Result<Vec<Conversation>> {
        match self.repository.load(user_id).await? {
            Some(list) => Ok(list),
            None => Ok(vec![Conversation::seeded(self.clock.now_millis())]),
        }
    }

    /// Overwrites the persisted list for a user. Last writer wins.
    pub async fn save_conversations(
        &self,
        user_id: &str,
        conversations: &[Conversation],
    ) -> Result<()> {
        self.repository.save(user_id, conversations).await
    }

    /// Gets the active conversation id, if one is set.
    ///
    /// The id is tracked independently of the list; it may point at a
    /// conversation that no longer exists.
    pub async fn get_active_conversation_id(&self, user_id: &str) -> Result<Option<String>> {
        self.repository.get_active_conversation_id(user_id).await
    }

    /// Sets the active conversation id.
    pub async fn set_active_conversation_id(
        &self,
        user_id: &str,
        conversation_id: &str,
    ) -> Result<()> {
        self.repository
            .set_active_conversation_id(user_id, conversation_id)
            .await
    }

    /// Creates a seeded conversation, prepends it to the list, persists the
    /// new list, and marks the new conversation active.
    pub async fn create_new_conversation(
        &self,
        user_id: &str,
        existing: &[Conversation],
    ) -> Result<(Conversation, Vec<Conversation>)> {
        let conversation = Conversation::seeded(self.clock.now_millis());

        let mut list = Vec::with_capacity(existing.len() + 1);
        list.push(conversation.clone());
        list.extend_from_slice(existing);

        self.repository.save(user_id, &list).await?;
        self.repository
            .set_active_conversation_id(user_id, &conversation.id)
            .await?;

        Ok((conversation, list))
    }

    /// Removes a conversation and persists the remainder.
    ///
    /// If the removed conversation was active and any remain, the first
    /// remaining entry becomes active. An empty remainder is returned
    /// as-is: no conversation is auto-created and the active id is left
    /// for the caller to resolve.
    pub async fn delete_conversation(
        &self,
        user_id: &str,
        conversation_id: &str,
        conversations: Vec<Conversation>,
    ) -> Result<Vec<Conversation>> {
        let list: Vec<Conversation> = conversations
            .into_iter()
            .filter(|c| c.id != conversation_id)
            .collect();

        self.repository.save(user_id, &list).await?;

        let active = self.repository.get_active_conversation_id(user_id).await?;
        if active.as_deref() == Some(conversation_id) {
            if let Some(first) = list.first() {
                self.repository
                    .set_active_conversation_id(user_id, &first.id)
                    .await?;
            }
        }

        Ok(list)
    }

    /// Resets one conversation back to its single seed message and persists.
    ///
    /// An unknown id returns the list unchanged without persisting. Calling
    /// this twice in a row yields the same single-seed-message state.
    pub async fn clear_conversation(
        &self,
        user_id: &str,
        conversation_id: &str,
        mut conversations: Vec<Conversation>,
    ) -> Result<Vec<Conversation>> {
        let Some(conversation) = conversations.iter_mut().find(|c| c.id == conversation_id)
        else {
            return Ok(conversations);
        };

        conversation.reset(self.clock.now_millis());

        self.repository.save(user_id, &conversations).await?;
        Ok(conversations)
    }

    /// Runs one request/response exchange within a conversation.
    ///
    /// The user message is appended and persisted before the responder is
    /// awaited, so it is never lost. If the responder fails (defensive; the
    /// simulated engine cannot), the list as of that first persist is
    /// returned: partial success instead of rejection.
    ///
    /// Nothing here prevents two overlapping sends against the same
    /// conversation; callers are expected to serialize sends per
    /// conversation, and concurrent writers degrade to last-writer-wins on
    /// the persisted blob.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when `conversation_id` is absent from the list;
    /// the list is not persisted in that case.
    pub async fn send_message(
        &self,
        user_id: &str,
        conversation_id: &str,
        content: &str,
        mut conversations: Vec<Conversation>,
    ) -> Result<Vec<Conversation>> {
        let index = conversations
            .iter()
            .position(|c| c.id == conversation_id)
            .ok_or_else(|| OsctipError::not_found("conversation", conversation_id))?;

        let now = self.clock.now_millis();
        {
            let conversation = &mut conversations[index];
            conversation.messages.push(Message::user(content, now));
            conversation.updated_at = now;

            // A fresh conversation holds the seed greeting plus this user
            // message; that is the moment the title gets derived.
            if conversation.messages.len() == 2 && conversation.title == DEFAULT_TITLE {
                conversation.title = derive_title(content);
            }
        }

        self.repository.save(user_id, &conversations).await?;

        match self.responder.respond(content).await {
            Ok(reply) => {
                let now = self.clock.now_millis();
                let conversation = &mut conversations[index];
                conversation.messages.push(Message::assistant(
                    reply.content,
                    now,
                    reply.threat_level,
                    reply.metadata,
                ));
                conversation.updated_at = now;

                if conversation.category == ConversationCategory::General {
                    conversation.category = detect_category(&conversation.messages);
                }

                self.repository.save(user_id, &conversations).await?;
                Ok(conversations)
            }
            Err(e) => {
                tracing::warn!(
                    conversation_id,
                    error = %e,
                    "Responder failed; keeping user message without a reply"
                );
                Ok(conversations)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osctip_core::classifier::ClassifiedResponse;
    use osctip_core::conversation::{MessageRole, ResponseMetadata, ThreatLevel};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI64, Ordering};

    use crate::delay::NoDelay;
    use crate::responder::SimulatedResponder;
    use async_trait::async_trait;

    // Mock ConversationRepository for testing
    struct MockConversationRepository {
        lists: Mutex<HashMap<String, Vec<Conversation>>>,
        active: Mutex<HashMap<String, String>>,
    }

    impl MockConversationRepository {
        fn new() -> Self {
            Self {
                lists: Mutex::new(HashMap::new()),
                active: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl ConversationRepository for MockConversationRepository {
        async fn load(&self, user_id: &str) -> Result<Option<Vec<Conversation>>> {
            Ok(self.lists.lock().unwrap().get(user_id).cloned())
        }

        async fn save(&self, user_id: &str, conversations: &[Conversation]) -> Result<()> {
            self.lists
                .lock()
                .unwrap()
                .insert(user_id.to_string(), conversations.to_vec());
            Ok(())
        }

        async fn get_active_conversation_id(&self, user_id: &str) -> Result<Option<String>> {
            Ok(self.active.lock().unwrap().get(user_id).cloned())
        }

        async fn set_active_conversation_id(
            &self,
            user_id: &str,
            conversation_id: &str,
        ) -> Result<()> {
            self.active
                .lock()
                .unwrap()
                .insert(user_id.to_string(), conversation_id.to_string());
            Ok(())
        }
    }

    // Clock that advances one millisecond per reading
    struct SteppingClock {
        now: AtomicI64,
    }

    impl SteppingClock {
        fn new(start: i64) -> Self {
            Self {
                now: AtomicI64::new(start),
            }
        }
    }

    impl Clock for SteppingClock {
        fn now_millis(&self) -> i64 {
            self.now.fetch_add(1, Ordering::SeqCst)
        }
    }

    // Responder that always fails, for the degrade path
    struct FailingResponder;

    #[async_trait]
    impl Responder for FailingResponder {
        async fn respond(&self, _latest_user_message: &str) -> Result<ClassifiedResponse> {
            Err(OsctipError::internal("simulated outage"))
        }
    }

    fn service_with(
        repository: Arc<MockConversationRepository>,
        responder: Arc<dyn Responder>,
    ) -> ConversationService {
        ConversationService::new(repository, responder, Arc::new(SteppingClock::new(1_000)))
    }

    fn service(repository: Arc<MockConversationRepository>) -> ConversationService {
        let responder = Arc::new(SimulatedResponder::new(Arc::new(NoDelay), Some(42)));
        service_with(repository, responder)
    }

    #[tokio::test]
    async fn test_initialize_seeds_without_persisting() {
        let repository = Arc::new(MockConversationRepository::new());
        let service = service(repository.clone());

        let list = service.initialize_conversations("user1").await.unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].messages.len(), 1);
        assert_eq!(list[0].messages[0].role, MessageRole::Assistant);
        // Not yet persisted: persistence happens on first mutation.
        assert!(repository.load("user1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_initialize_round_trips_a_saved_list() {
        let repository = Arc::new(MockConversationRepository::new());
        let service = service(repository.clone());

        let list = vec![Conversation::seeded(5), Conversation::seeded(6)];
        service.save_conversations("user1", &list).await.unwrap();

        let loaded = service.initialize_conversations("user1").await.unwrap();
        assert_eq!(loaded, list);
    }

    #[tokio::test]
    async fn test_create_new_conversation_prepends_and_activates() {
        let repository = Arc::new(MockConversationRepository::new());
        let service = service(repository.clone());

        let existing = vec![Conversation::seeded(1)];
        let (created, list) = service
            .create_new_conversation("user1", &existing)
            .await
            .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, created.id);
        assert_eq!(
            service.get_active_conversation_id("user1").await.unwrap(),
            Some(created.id.clone())
        );
        // Persisted immediately, unlike the initialize path.
        assert_eq!(repository.load("user1").await.unwrap().unwrap(), list);
    }

    #[tokio::test]
    async fn test_send_message_appends_user_then_assistant() {
        let repository = Arc::new(MockConversationRepository::new());
        let service = service(repository.clone());

        let (conversation, list) = service.create_new_conversation("user1", &[]).await.unwrap();
        let before = list[0].updated_at;

        let list = service
            .send_message("user1", &conversation.id, "what about ransomware?", list)
            .await
            .unwrap();

        let updated = &list[0];
        let count = updated.messages.len();
        assert_eq!(count, 3);
        assert_eq!(updated.messages[count - 2].role, MessageRole::User);
        assert_eq!(updated.messages[count - 1].role, MessageRole::Assistant);
        assert!(updated.updated_at >= before);
        assert!(
            updated.messages[count - 1].timestamp >= updated.messages[count - 2].timestamp
        );
    }

    #[tokio::test]
    async fn test_send_message_unknown_conversation_is_not_found() {
        let repository = Arc::new(MockConversationRepository::new());
        let service = service(repository.clone());

        let err = service
            .send_message("user1", "ghost", "hello", vec![])
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        // Nothing persisted on the fatal path.
        assert!(repository.load("user1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_send_message_derives_title_on_second_message() {
        let repository = Arc::new(MockConversationRepository::new());
        let service = service(repository.clone());

        let (conversation, list) = service.create_new_conversation("user1", &[]).await.unwrap();

        let list = service
            .send_message(
                "user1",
                &conversation.id,
                "ransomware affecting our servers",
                list,
            )
            .await
            .unwrap();

        let title = &list[0].title;
        assert!(title.starts_with("Security: "), "got {title:?}");
        assert!(title.chars().count() <= 33);
    }

    #[tokio::test]
    async fn test_send_message_keeps_a_derived_title() {
        let repository = Arc::new(MockConversationRepository::new());
        let service = service(repository.clone());

        let (conversation, list) = service.create_new_conversation("user1", &[]).await.unwrap();
        let list = service
            .send_message("user1", &conversation.id, "first question", list)
            .await
            .unwrap();
        let first_title = list[0].title.clone();

        let list = service
            .send_message("user1", &conversation.id, "second question", list)
            .await
            .unwrap();

        assert_eq!(list[0].title, first_title);
    }

    #[tokio::test]
    async fn test_send_message_auto_classifies_category() {
        let repository = Arc::new(MockConversationRepository::new());
        let service = service(repository.clone());

        let (conversation, list) = service.create_new_conversation("user1", &[]).await.unwrap();
        let list = service
            .send_message("user1", &conversation.id, "malware found on host-17", list)
            .await
            .unwrap();

        assert_eq!(list[0].category, ConversationCategory::ThreatAnalysis);
    }

    #[tokio::test]
    async fn test_send_message_degrades_on_responder_failure() {
        let repository = Arc::new(MockConversationRepository::new());
        let service = service_with(repository.clone(), Arc::new(FailingResponder));

        let (conversation, list) = service.create_new_conversation("user1", &[]).await.unwrap();
        let list = service
            .send_message("user1", &conversation.id, "hello?", list)
            .await
            .unwrap();

        // User message kept, no assistant reply appended.
        assert_eq!(list[0].messages.len(), 2);
        assert_eq!(list[0].messages[1].role, MessageRole::User);
        // The user-message-only state was persisted.
        let persisted = repository.load("user1").await.unwrap().unwrap();
        assert_eq!(persisted[0].messages.len(), 2);
    }

    #[tokio::test]
    async fn test_send_message_carries_classifier_annotations() {
        let repository = Arc::new(MockConversationRepository::new());
        let service = service(repository.clone());

        let (conversation, list) = service.create_new_conversation("user1", &[]).await.unwrap();
        let list = service
            .send_message(
                "user1",
                &conversation.id,
                "there is a cve affecting our vpn",
                list,
            )
            .await
            .unwrap();

        let reply = list[0].messages.last().unwrap();
        assert_eq!(reply.threat_level, Some(ThreatLevel::Medium));
        match &reply.metadata {
            Some(ResponseMetadata::Vulnerability { cve_references, .. }) => {
                assert!(!cve_references.is_empty());
            }
            other => panic!("expected vulnerability metadata, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_reassigns_active_to_first_remaining() {
        let repository = Arc::new(MockConversationRepository::new());
        let service = service(repository.clone());

        let (first, list) = service.create_new_conversation("user1", &[]).await.unwrap();
        let (second, list) = service.create_new_conversation("user1", &list).await.unwrap();
        // second is active and sits at the head of the list.

        let list = service
            .delete_conversation("user1", &second.id, list)
            .await
            .unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, first.id);
        assert_eq!(
            service.get_active_conversation_id("user1").await.unwrap(),
            Some(first.id.clone())
        );
    }

    #[tokio::test]
    async fn test_delete_last_conversation_leaves_empty_list() {
        let repository = Arc::new(MockConversationRepository::new());
        let service = service(repository.clone());

        let (only, list) = service.create_new_conversation("user1", &[]).await.unwrap();
        let list = service
            .delete_conversation("user1", &only.id, list)
            .await
            .unwrap();

        assert!(list.is_empty());
        // The store neither auto-creates a conversation nor rewrites the
        // active id; what the stale id resolves to is the caller's concern.
        assert_eq!(repository.load("user1").await.unwrap().unwrap(), vec![]);
        assert_eq!(
            service.get_active_conversation_id("user1").await.unwrap(),
            Some(only.id.clone())
        );
    }

    #[tokio::test]
    async fn test_clear_conversation_is_idempotent() {
        let repository = Arc::new(MockConversationRepository::new());
        let service = service(repository.clone());

        let (conversation, list) = service.create_new_conversation("user1", &[]).await.unwrap();
        let list = service
            .send_message("user1", &conversation.id, "incident report", list)
            .await
            .unwrap();

        let list = service
            .clear_conversation("user1", &conversation.id, list)
            .await
            .unwrap();
        let once = list[0].clone();
        assert_eq!(once.messages.len(), 1);
        assert_eq!(once.messages[0].role, MessageRole::Assistant);
        assert_eq!(once.title, DEFAULT_TITLE);
        assert_eq!(once.category, ConversationCategory::General);

        let list = service
            .clear_conversation("user1", &conversation.id, list)
            .await
            .unwrap();
        let twice = &list[0];
        assert_eq!(twice.messages.len(), 1);
        assert_eq!(twice.messages[0].content, once.messages[0].content);
        assert_eq!(twice.title, once.title);
    }

    #[tokio::test]
    async fn test_clear_unknown_id_returns_list_unchanged() {
        let repository = Arc::new(MockConversationRepository::new());
        let service = service(repository.clone());

        let list = vec![Conversation::seeded(1)];
        let result = service
            .clear_conversation("user1", "ghost", list.clone())
            .await
            .unwrap();

        assert_eq!(result, list);
        assert!(repository.load("user1").await.unwrap().is_none());
    }
}
