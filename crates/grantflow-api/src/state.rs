//! Application state shared across all handlers.

use std::sync::Arc;

use grantflow_core::config::AppConfig;
use grantflow_service::conversation::ConversationService;
use grantflow_service::lifecycle::LifecycleService;
use grantflow_service::message::MessageService;
use grantflow_service::notification::NotificationDispatcher;
use grantflow_store::{ApplicationStore, MessageStore, NotificationStore, ProgramStore};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or internally `Arc`-backed for cheap
/// cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    // ── Stores ───────────────────────────────────────────────
    /// Application store.
    pub application_store: Arc<dyn ApplicationStore>,
    /// Message store.
    pub message_store: Arc<dyn MessageStore>,
    /// Notification store.
    pub notification_store: Arc<dyn NotificationStore>,
    /// Program store.
    pub program_store: Arc<dyn ProgramStore>,

    // ── Services ─────────────────────────────────────────────
    /// Application lifecycle service.
    pub lifecycle_service: LifecycleService,
    /// Message service.
    pub message_service: MessageService,
    /// Notification dispatcher.
    pub notification_dispatcher: NotificationDispatcher,
    /// Conversation aggregation service.
    pub conversation_service: ConversationService,
}

impl AppState {
    /// Wires the full service graph over the given stores.
    pub fn new(
        config: Arc<AppConfig>,
        application_store: Arc<dyn ApplicationStore>,
        message_store: Arc<dyn MessageStore>,
        notification_store: Arc<dyn NotificationStore>,
        program_store: Arc<dyn ProgramStore>,
    ) -> Self {
        let notification_dispatcher =
            NotificationDispatcher::new(Arc::clone(&notification_store));
        let lifecycle_service = LifecycleService::new(
            Arc::clone(&application_store),
            Arc::clone(&program_store),
            notification_dispatcher.clone(),
        );
        let message_service = MessageService::new(
            Arc::clone(&message_store),
            Arc::clone(&application_store),
            notification_dispatcher.clone(),
        );
        let conversation_service = ConversationService::new(Arc::clone(&message_store));

        Self {
            config,
            application_store,
            message_store,
            notification_store,
            program_store,
            lifecycle_service,
            message_service,
            notification_dispatcher,
            conversation_service,
        }
    }
}
