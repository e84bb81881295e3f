use crate::billing::{ServiceBilling, TotalBilling};
use crate::error::BillingNotifierError;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::Serialize;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TITLE_DATE_FORMAT: &str = "%m/%d";
const ROUND_DIGITS: i64 = 2;

#[derive(Debug, PartialEq, Serialize)]
pub struct SlackMessage {
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Attachment {
    pub color: String,
    pub pretext: String,
    pub text: String,
}

impl SlackMessage {
    pub fn build(
        total_billing: &TotalBilling,
        service_billings: &[ServiceBilling],
    ) -> Result<SlackMessage, BillingNotifierError> {
        Ok(SlackMessage {
            attachments: vec![Attachment {
                color: "good".to_string(),
                pretext: Self::title(total_billing)?,
                text: Self::detail(service_billings)?,
            }],
        })
    }

    fn title(total_billing: &TotalBilling) -> Result<String, BillingNotifierError> {
        let start = NaiveDate::parse_from_str(&total_billing.start, DATE_FORMAT)?;
        let end = NaiveDate::parse_from_str(&total_billing.end, DATE_FORMAT)?;
        // The period end is exclusive; the reported range closes the day before.
        let last_day = end.pred();
        let total = rounded_amount(&total_billing.amount)?;
        Ok(format!(
            "{}～{}の請求額は、{} USDです。",
            start.format(TITLE_DATE_FORMAT),
            last_day.format(TITLE_DATE_FORMAT),
            format_amount(&total)
        ))
    }

    fn detail(service_billings: &[ServiceBilling]) -> Result<String, BillingNotifierError> {
        let mut lines = Vec::<String>::new();
        for billing in service_billings {
            let amount = rounded_amount(&billing.amount)?;
            if amount == BigDecimal::from(0) {
                continue;
            }
            lines.push(format!(
                "- {}: {} USD",
                billing.service_name,
                format_amount(&amount)
            ));
        }
        Ok(lines.join("\n"))
    }
}

fn rounded_amount(amount: &str) -> Result<BigDecimal, BillingNotifierError> {
    Ok(BigDecimal::from_str(amount)?.round(ROUND_DIGITS))
}

// Trailing fractional zeros are dropped, keeping at least one decimal digit:
// 100.00 renders as "100.0", 123.46 stays "123.46".
fn format_amount(amount: &BigDecimal) -> String {
    let repr = amount.to_string();
    if repr.contains('.') {
        let trimmed = repr.trim_end_matches('0');
        if trimmed.ends_with('.') {
            format!("{}0", trimmed)
        } else {
            trimmed.to_string()
        }
    } else {
        format!("{}.0", repr)
    }
}

#[cfg(test)]
mod tests {
    use crate::billing::{ServiceBilling, TotalBilling};
    use crate::slack_message::{format_amount, rounded_amount, Attachment, SlackMessage};
    use serde_json::json;

    fn total_billing() -> TotalBilling {
        TotalBilling {
            start: "2023-05-01".to_string(),
            end: "2023-05-15".to_string(),
            amount: "123.456".to_string(),
        }
    }

    #[test]
    fn test_build() {
        let service_billings = vec![
            ServiceBilling {
                service_name: "EC2".to_string(),
                amount: "100.004".to_string(),
            },
            ServiceBilling {
                service_name: "S3".to_string(),
                amount: "0.0004".to_string(),
            },
        ];

        let message = SlackMessage::build(&total_billing(), &service_billings).unwrap();

        assert_eq!(
            message,
            SlackMessage {
                attachments: vec![Attachment {
                    color: "good".to_string(),
                    pretext: "05/01～05/14の請求額は、123.46 USDです。".to_string(),
                    text: "- EC2: 100.0 USD".to_string(),
                }],
            }
        );
    }

    #[test]
    fn test_omits_rounded_zero_and_keeps_order() {
        let service_billings = vec![
            ServiceBilling {
                service_name: "AWS Lambda".to_string(),
                amount: "0.0004".to_string(),
            },
            ServiceBilling {
                service_name: "Amazon Simple Storage Service".to_string(),
                amount: "1.5".to_string(),
            },
            ServiceBilling {
                service_name: "AWS Key Management Service".to_string(),
                amount: "0.002".to_string(),
            },
            ServiceBilling {
                service_name: "Amazon Route 53".to_string(),
                amount: "2.25".to_string(),
            },
        ];

        let message = SlackMessage::build(&total_billing(), &service_billings).unwrap();

        assert_eq!(
            message.attachments[0].text,
            "- Amazon Simple Storage Service: 1.5 USD\n- Amazon Route 53: 2.25 USD"
        );
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_amount(&rounded_amount("12.345").unwrap()), "12.35");
        assert_eq!(format_amount(&rounded_amount("123.456").unwrap()), "123.46");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(&rounded_amount("100.004").unwrap()), "100.0");
        assert_eq!(format_amount(&rounded_amount("1.50").unwrap()), "1.5");
        assert_eq!(format_amount(&rounded_amount("3").unwrap()), "3.0");
        assert_eq!(format_amount(&rounded_amount("0").unwrap()), "0.0");
    }

    #[test]
    fn test_serializes_to_attachment_payload() {
        let message = SlackMessage::build(&total_billing(), &[]).unwrap();
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "attachments": [
                    {
                        "color": "good",
                        "pretext": "05/01～05/14の請求額は、123.46 USDです。",
                        "text": "",
                    }
                ]
            })
        );
    }
}
