use crate::error::BillingNotifierError;
use crate::slack_message::SlackMessage;
use async_trait::async_trait;

use tracing::info;

pub struct SlackWebhookClient {
    client: reqwest::Client,
}

#[async_trait]
pub trait Notify {
    async fn notify(
        &self,
        webhook_url: Option<&str>,
        message: &SlackMessage,
    ) -> Result<String, BillingNotifierError>;
}

#[async_trait]
impl Notify for SlackWebhookClient {
    /// Posts the message and returns the webhook response body. A non-2xx
    /// response is not treated specially; only transport errors propagate.
    async fn notify(
        &self,
        webhook_url: Option<&str>,
        message: &SlackMessage,
    ) -> Result<String, BillingNotifierError> {
        let url = webhook_url.ok_or(BillingNotifierError::MissingWebhookUrl)?;

        let response = self.client.post(url).json(message).send().await?;
        info!("{:?}", response);

        let response_body = response.text().await?;
        info!(
            "[send_message]response {}",
            serde_json::to_string(&response_body)?
        );
        Ok(response_body)
    }
}

impl SlackWebhookClient {
    pub fn new_with_client(client: reqwest::Client) -> Self {
        SlackWebhookClient { client }
    }
}
