use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Record identifier as sent by the backend.
///
/// Ids arrive either as JSON numbers or strings depending on the endpoint, so
/// both are normalized to their textual form before comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(value) => Self(value.to_string()),
            Raw::Float(value) => Self(value.to_string()),
            Raw::Text(value) => Self(value),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FinancialStatus {
    Paid,
    #[default]
    Unknown,
    Other(String),
}

impl From<String> for FinancialStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "paid" => Self::Paid,
            "" => Self::Unknown,
            _ => Self::Other(value),
        }
    }
}

impl From<FinancialStatus> for String {
    fn from(value: FinancialStatus) -> Self {
        match value {
            FinancialStatus::Paid => "paid".to_owned(),
            FinancialStatus::Unknown => String::new(),
            FinancialStatus::Other(other) => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DiscountType {
    FixedAmount,
    Percentage,
    #[default]
    Unknown,
    Other(String),
}

impl From<String> for DiscountType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "fixed_amount" => Self::FixedAmount,
            "percentage" => Self::Percentage,
            "" => Self::Unknown,
            _ => Self::Other(value),
        }
    }
}

impl From<DiscountType> for String {
    fn from(value: DiscountType) -> Self {
        match value {
            DiscountType::FixedAmount => "fixed_amount".to_owned(),
            DiscountType::Percentage => "percentage".to_owned(),
            DiscountType::Unknown => String::new(),
            DiscountType::Other(other) => other,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscountCodeRef {
    #[serde(default, deserialize_with = "null_default")]
    pub code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCustomer {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, deserialize_with = "null_default")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_default")]
    pub total_price: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub total_discounts: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub financial_status: FinancialStatus,
    #[serde(default, rename = "created_at_haravan", alias = "created_at")]
    pub created_at: Option<String>,
    /// Entries may be `null` in backend payloads; they are kept and skipped
    /// when codes are read.
    #[serde(default, deserialize_with = "null_default")]
    pub discount_codes: Vec<Option<DiscountCodeRef>>,
    #[serde(default)]
    pub customer: Option<OrderCustomer>,
}

impl Order {
    /// Non-empty discount codes applied to this order, in payload order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.discount_codes
            .iter()
            .flatten()
            .map(|entry| entry.code.as_str())
            .filter(|code| !code.is_empty())
    }

    pub fn customer_id(&self) -> Option<&RecordId> {
        self.customer
            .as_ref()
            .and_then(|customer| customer.id.as_ref())
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Coupon {
    #[serde(default, deserialize_with = "null_default")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_default")]
    pub value: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub discount_type: DiscountType,
    #[serde(default)]
    pub ends_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, deserialize_with = "null_default")]
    pub id: RecordId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// The three input collections of one aggregation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub coupons: Vec<Coupon>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouponUsage {
    pub code: String,
    pub usage_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueShare {
    pub code: String,
    pub revenue: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageDetail {
    pub order_id: RecordId,
    pub date: String,
    pub customer_name: String,
    pub coupon_code: String,
    pub order_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCustomer {
    pub customer_id: RecordId,
    pub name: String,
    pub usage_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsBundle {
    pub total_revenue: f64,
    pub total_discount: f64,
    pub qualifying_orders: u64,
    /// Qualifying orders with more than one code. Their revenue is counted
    /// once per code in `revenue_shares`.
    pub multi_code_orders: u64,
    pub coupon_usage: Vec<CouponUsage>,
    pub revenue_shares: Vec<RevenueShare>,
    pub usage_details: Vec<UsageDetail>,
    pub top_customers: Vec<TopCustomer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouponView {
    pub id: RecordId,
    pub code: String,
    pub value: f64,
    pub discount_type: DiscountType,
    pub ends_at: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPayload {
    pub stats: StatsBundle,
    pub coupons: Vec<CouponView>,
    pub customer_count: usize,
}

fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
