/// Account-wide amortized cost for one reporting window. The start and end
/// dates echo the API response rather than the requested period.
#[derive(Debug, PartialEq)]
pub struct TotalBilling {
    pub start: String,
    pub end: String,
    pub amount: String,
}

/// Amortized cost of a single service, in API response order.
#[derive(Debug, PartialEq)]
pub struct ServiceBilling {
    pub service_name: String,
    pub amount: String,
}
