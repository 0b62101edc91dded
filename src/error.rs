//! Popup error types

use thiserror::Error;

use crate::interaction::ResponseView;

/// Everything that can stop an ask interaction
#[derive(Error, Debug)]
pub enum PopupError {
    #[error("Not a YouTube video URL")]
    NotAVideo,

    #[error("Invalid tab URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Active tab has no URL")]
    MissingTabUrl,

    #[error("Browser API error: {0}")]
    Browser(String),

    #[error("Unexpected answer from agent: {0}")]
    UnexpectedAnswer(String),

    #[error("Agent request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl PopupError {
    /// Check if this error means the tab is not a watch page
    pub fn is_not_a_video(&self) -> bool {
        matches!(self, PopupError::NotAVideo)
    }

    /// What the popup shows for this error. Only the missing video ID gets
    /// its own message; everything else collapses into one.
    pub fn response_view(&self) -> ResponseView {
        if self.is_not_a_video() {
            ResponseView::NotAVideo
        } else {
            ResponseView::AgentUnavailable
        }
    }
}
