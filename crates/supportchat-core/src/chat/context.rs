//! Context window policy for chat turns.
//!
//! Decides which stored messages of a conversation are sent to the
//! completion provider, and maps them into provider-neutral context.

use supportchat_types::chat::ChatMessage;
use supportchat_types::config::{ChatConfig, WindowStrategy};
use supportchat_types::llm::ContextMessage;

/// Default number of messages sent to the provider per turn.
pub const DEFAULT_CONTEXT_LIMIT: usize = 10;

/// Bounded selection of a conversation's messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow {
    limit: usize,
    strategy: WindowStrategy,
}

impl ContextWindow {
    /// A window of at most `limit` messages. A limit of zero is raised to one
    /// so the just-saved user message is always part of the context.
    pub fn new(limit: usize, strategy: WindowStrategy) -> Self {
        Self {
            limit: limit.max(1),
            strategy,
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.context_limit, config.context_strategy)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn strategy(&self) -> WindowStrategy {
        self.strategy
    }

    /// Narrow an oldest-first message list down to the window.
    ///
    /// Repositories already apply the limit in SQL; this keeps the bound
    /// intact for any implementation that returns more.
    pub fn select<'a>(&self, messages: &'a [ChatMessage]) -> &'a [ChatMessage] {
        if messages.len() <= self.limit {
            return messages;
        }
        match self.strategy {
            WindowStrategy::Oldest => &messages[..self.limit],
            WindowStrategy::Recent => &messages[messages.len() - self.limit..],
        }
    }

    /// Select the window and map it to provider context, oldest-first.
    pub fn build_context(&self, messages: &[ChatMessage]) -> Vec<ContextMessage> {
        self.select(messages).iter().map(ContextMessage::from).collect()
    }
}

impl Default for ContextWindow {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_LIMIT, WindowStrategy::Oldest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use supportchat_types::chat::{ConversationId, MessageRole};
    use supportchat_types::llm::ContextRole;

    fn conversation(n: usize) -> Vec<ChatMessage> {
        let id = ConversationId::new();
        (0..n)
            .map(|i| {
                let role = if i % 2 == 0 {
                    MessageRole::User
                } else {
                    MessageRole::Assistant
                };
                ChatMessage::new(id.clone(), role, format!("msg {i}"))
            })
            .collect()
    }

    #[test]
    fn test_default_window() {
        let window = ContextWindow::default();
        assert_eq!(window.limit(), 10);
        assert_eq!(window.strategy(), WindowStrategy::Oldest);
    }

    #[test]
    fn test_short_conversation_is_untouched() {
        let messages = conversation(3);
        let ctx = ContextWindow::default().build_context(&messages);
        assert_eq!(ctx.len(), 3);
        assert_eq!(ctx[0].role, ContextRole::User);
        assert_eq!(ctx[1].role, ContextRole::Model);
        assert_eq!(ctx[2].content, "msg 2");
    }

    #[test]
    fn test_oldest_strategy_keeps_first_messages() {
        let messages = conversation(25);
        let ctx = ContextWindow::new(10, WindowStrategy::Oldest).build_context(&messages);
        assert_eq!(ctx.len(), 10);
        assert_eq!(ctx.first().unwrap().content, "msg 0");
        assert_eq!(ctx.last().unwrap().content, "msg 9");
    }

    #[test]
    fn test_recent_strategy_keeps_last_messages_in_order() {
        let messages = conversation(25);
        let ctx = ContextWindow::new(10, WindowStrategy::Recent).build_context(&messages);
        assert_eq!(ctx.len(), 10);
        assert_eq!(ctx.first().unwrap().content, "msg 15");
        assert_eq!(ctx.last().unwrap().content, "msg 24");
    }

    #[test]
    fn test_zero_limit_is_raised_to_one() {
        let window = ContextWindow::new(0, WindowStrategy::Recent);
        assert_eq!(window.limit(), 1);
        let messages = conversation(4);
        assert_eq!(window.select(&messages).len(), 1);
    }

    #[test]
    fn test_from_config() {
        let config = ChatConfig {
            context_limit: 4,
            context_strategy: WindowStrategy::Recent,
        };
        let window = ContextWindow::from_config(&config);
        assert_eq!(window.limit(), 4);
        assert_eq!(window.strategy(), WindowStrategy::Recent);
    }
}
