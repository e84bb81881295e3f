mod billing;
mod billing_period;
mod cost_explorer_client;
mod error;
mod parameter_store_client;
mod slack_message;
mod slack_webhook_client;

use crate::billing_period::BillingPeriod;
use crate::cost_explorer_client::{CostExplorerBillingClient, FetchBilling};
use crate::parameter_store_client::{ParameterStoreClient, ResolveParameter};
use crate::slack_message::SlackMessage;
use crate::slack_webhook_client::{Notify, SlackWebhookClient};

use chrono::Utc;
use lambda_runtime::{handler_fn, Context, Error};
use rusoto_ce::CostExplorerClient;
use rusoto_core::Region;
use rusoto_ssm::SsmClient;
use serde_json::Value;
use std::env;

const WEBHOOKURL_PARAM_NAME: &str = "WEBHOOKURL_PARAM_NAME";

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        // CloudWatch stamps the ingestion time on every line already.
        .without_time()
        .init();

    lambda_runtime::run(handler_fn(report_handler)).await?;
    Ok(())
}

async fn report_handler(_: Value, _: Context) -> Result<i32, Error> {
    let period = BillingPeriod::from(Utc::today().naive_utc());

    // Cost Explorer is only served out of us-east-1.
    let billing_client =
        CostExplorerBillingClient::new_with_client(CostExplorerClient::new(Region::UsEast1));
    let total_billing = billing_client.fetch_total_billing(&period).await?;
    let service_billings = billing_client.fetch_service_billings(&period).await?;
    let message = SlackMessage::build(&total_billing, &service_billings)?;

    let parameter_client =
        ParameterStoreClient::new_with_client(SsmClient::new(Region::default()));
    let param_name = env::var(WEBHOOKURL_PARAM_NAME)?;
    let webhook_url = parameter_client.resolve_parameter(&param_name).await?;

    let webhook_client = SlackWebhookClient::new_with_client(reqwest::Client::new());
    let response_body = webhook_client
        .notify(webhook_url.as_deref(), &message)
        .await?;
    println!("{}", response_body);
    Ok(0)
}
