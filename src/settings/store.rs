use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::shared::AppError;

/// Read access to the workspace settings
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError>;

    /// Reads a boolean-like flag. Missing keys, `null`, `false`, `0` and `""`
    /// are `false`; any other value is `true`.
    async fn get_bool(&self, key: &str) -> Result<bool, AppError> {
        Ok(self.get(key).await?.as_ref().is_some_and(is_enabled))
    }
}

fn is_enabled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// In-memory implementation of SettingsStore for development and testing
pub struct InMemorySettingsStore {
    values: RwLock<HashMap<String, Value>>,
}

impl Default for InMemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store with pre-populated settings
    pub fn with_values<I, K>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            values: RwLock::new(values.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    pub async fn set(&self, key: &str, value: Value) {
        info!(key = %key, value = %value, "Updating setting");
        self.values.write().await.insert(key.to_string(), value);
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        let value = self.values.read().await.get(key).cloned();
        debug!(key = %key, found = value.is_some(), "Setting lookup");
        Ok(value)
    }
}
