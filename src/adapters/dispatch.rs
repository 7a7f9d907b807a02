use crate::domain::ports::LinkDispatcher;
use async_trait::async_trait;
#[cfg(any(test, feature = "test-util"))]
use std::sync::Mutex;

/// Opens the URI with the operating system's registered handler.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default)]
pub struct SystemLinkDispatcher;

#[cfg(feature = "cli")]
#[async_trait]
impl LinkDispatcher for SystemLinkDispatcher {
    async fn dispatch(&self, uri: &str) -> std::result::Result<(), String> {
        let target = uri.to_string();
        tokio::task::spawn_blocking(move || open::that(target))
            .await
            .map_err(|e| e.to_string())?
            .map_err(|e| e.to_string())
    }
}

/// Prints the URI instead of opening it.
#[derive(Debug, Clone, Default)]
pub struct PrintDispatcher;

#[async_trait]
impl LinkDispatcher for PrintDispatcher {
    async fn dispatch(&self, uri: &str) -> std::result::Result<(), String> {
        println!("{}", uri);
        Ok(())
    }
}

/// Keeps every URI it is handed; optionally fails each call with a fixed reason.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    dispatched: Mutex<Vec<String>>,
    failure: Option<String>,
}

#[cfg(any(test, feature = "test-util"))]
impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            dispatched: Mutex::new(Vec::new()),
            failure: Some(reason.into()),
        }
    }

    pub fn dispatched(&self) -> Vec<String> {
        self.dispatched
            .lock()
            .map(|uris| uris.clone())
            .unwrap_or_default()
    }
}

#[cfg(any(test, feature = "test-util"))]
#[async_trait]
impl LinkDispatcher for RecordingDispatcher {
    async fn dispatch(&self, uri: &str) -> std::result::Result<(), String> {
        self.dispatched
            .lock()
            .map_err(|e| e.to_string())?
            .push(uri.to_string());
        match &self.failure {
            Some(reason) => Err(reason.clone()),
            None => Ok(()),
        }
    }
}
