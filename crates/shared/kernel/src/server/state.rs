use axum::extract::FromRef;
use slim_domain::config::{AppConfig, ShowcaseConfig};
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[slim_derive::slim_error]
pub enum AppStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct AppStateInner {
    pub config: AppConfig,
}

/// Cheaply clonable state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(state: &AppState) -> Self {
        state.inner.config.clone()
    }
}

impl FromRef<AppState> for ShowcaseConfig {
    fn from_ref(state: &AppState) -> Self {
        state.inner.config.showcase.clone()
    }
}

#[derive(Debug, Default)]
#[must_use = "builders do nothing unless you call .build()"]
pub struct AppStateBuilder {
    config: Option<AppConfig>,
}

impl AppStateBuilder {
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Finalizes the state.
    ///
    /// # Errors
    /// Returns [`AppStateError::Validation`] when no configuration was provided.
    pub fn build(self) -> Result<AppState, AppStateError> {
        let config = self.config.ok_or_else(|| AppStateError::Validation {
            message: "AppConfig not provided".into(),
            context: None,
        })?;

        Ok(AppState { inner: Arc::new(AppStateInner { config }) })
    }
}
