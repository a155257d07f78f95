//! Command name → handler lookup table.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::MessageEvent;
use crate::messaging::ReplySink;
use crate::router::Command;
use crate::Result;

/// Everything a handler needs to serve one command invocation.
pub struct CommandContext {
    pub event: MessageEvent,
    pub command: Command,
    pub sink: Arc<dyn ReplySink>,
}

#[async_trait::async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, ctx: CommandContext) -> Result<()>;
}

/// Registered commands, keyed by lowercased name. Aliases point at the
/// same handler instance.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, handler: Arc<dyn CommandHandler>) {
        self.handlers.insert(name.to_lowercase(), handler);
    }

    pub fn register_aliases(&mut self, names: &[&str], handler: Arc<dyn CommandHandler>) {
        for name in names {
            self.register(name, Arc::clone(&handler));
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn CommandHandler>> {
        self.handlers.get(&name.to_lowercase()).cloned()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
