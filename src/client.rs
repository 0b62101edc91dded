/// HTTP client for the local question-answering agent

use reqwest::{Client, Request};

use crate::ask::{AskRequest, AskResponse};
use crate::config::AgentConfig;
use crate::error::PopupError;
use crate::interaction::Agent;

#[derive(Clone)]
pub struct AgentClient {
    client: Client,
    config: AgentConfig,
}

impl AgentClient {
    pub fn new(config: AgentConfig) -> AgentClient {
        AgentClient {
            client: Client::new(),
            config,
        }
    }

    fn build_request(&self, request: &AskRequest) -> Result<Request, PopupError> {
        let request = self
            .client
            .post(self.config.ask_url())
            .json(request)
            .build()?;
        Ok(request)
    }
}

impl Agent for AgentClient {
    // The status code is not checked: an error page that is not JSON fails
    // in the body parse, one that is JSON is read like any other reply.
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, PopupError> {
        log::debug!("Asking agent about video {}", request.video_id);

        let http_request = self.build_request(request)?;
        let response = self.client.execute(http_request).await?;
        let body: AskResponse = response.json().await?;

        Ok(body)
    }
}
