use crate::billing::{ServiceBilling, TotalBilling};
use crate::billing_period::BillingPeriod;
use crate::error::BillingNotifierError;
use async_trait::async_trait;

use rusoto_ce::{
    CostExplorer, CostExplorerClient, DateInterval, GetCostAndUsageRequest,
    GetCostAndUsageResponse, GroupDefinition, ResultByTime,
};

const AMORTIZED_COST: &str = "AmortizedCost";
const MONTHLY_GRANULARITY: &str = "MONTHLY";
const SERVICE_DIMENSION: &str = "SERVICE";

pub struct CostExplorerBillingClient {
    client: CostExplorerClient,
}

#[async_trait]
pub trait FetchBilling {
    async fn fetch_total_billing(
        &self,
        period: &BillingPeriod,
    ) -> Result<TotalBilling, BillingNotifierError>;

    async fn fetch_service_billings(
        &self,
        period: &BillingPeriod,
    ) -> Result<Vec<ServiceBilling>, BillingNotifierError>;
}

#[async_trait]
impl FetchBilling for CostExplorerBillingClient {
    async fn fetch_total_billing(
        &self,
        period: &BillingPeriod,
    ) -> Result<TotalBilling, BillingNotifierError> {
        let response = self
            .client
            .get_cost_and_usage(Self::request(period, None))
            .await?;
        let result = Self::first_result(response)?;
        let time_period = result.time_period.ok_or(BillingNotifierError::NoneValue)?;
        let amount = result
            .total
            .and_then(|mut total| total.remove(AMORTIZED_COST))
            .and_then(|metric| metric.amount)
            .ok_or(BillingNotifierError::NoneValue)?;
        Ok(TotalBilling {
            start: time_period.start,
            end: time_period.end,
            amount,
        })
    }

    async fn fetch_service_billings(
        &self,
        period: &BillingPeriod,
    ) -> Result<Vec<ServiceBilling>, BillingNotifierError> {
        let group_by = vec![GroupDefinition {
            type_: Some("DIMENSION".to_string()),
            key: Some(SERVICE_DIMENSION.to_string()),
        }];
        let response = self
            .client
            .get_cost_and_usage(Self::request(period, Some(group_by)))
            .await?;
        let result = Self::first_result(response)?;

        let mut billings = Vec::<ServiceBilling>::new();
        for group in result.groups.ok_or(BillingNotifierError::NoneValue)? {
            let service_name = group
                .keys
                .and_then(|keys| keys.into_iter().next())
                .ok_or(BillingNotifierError::NoneValue)?;
            let amount = group
                .metrics
                .and_then(|mut metrics| metrics.remove(AMORTIZED_COST))
                .and_then(|metric| metric.amount)
                .ok_or(BillingNotifierError::NoneValue)?;
            billings.push(ServiceBilling {
                service_name,
                amount,
            });
        }
        Ok(billings)
    }
}

impl CostExplorerBillingClient {
    pub fn new_with_client(client: CostExplorerClient) -> Self {
        CostExplorerBillingClient { client }
    }

    fn request(
        period: &BillingPeriod,
        group_by: Option<Vec<GroupDefinition>>,
    ) -> GetCostAndUsageRequest {
        GetCostAndUsageRequest {
            time_period: DateInterval {
                start: period.start_date(),
                end: period.end_date(),
            },
            granularity: MONTHLY_GRANULARITY.to_string(),
            metrics: vec![AMORTIZED_COST.to_string()],
            group_by,
            ..Default::default()
        }
    }

    // The range never spans more than one month, so exactly one result window
    // is expected and pagination is not handled.
    fn first_result(
        response: GetCostAndUsageResponse,
    ) -> Result<ResultByTime, BillingNotifierError> {
        response
            .results_by_time
            .and_then(|results| results.into_iter().next())
            .ok_or(BillingNotifierError::NoneValue)
    }
}
