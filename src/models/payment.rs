use serde::{Deserialize, Serialize};

use crate::models::id_string;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Bank,
    Wallet,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
}

/// Body sent to the payment service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub booking_id: String,
    pub amount: i64,
    pub payment_method: PaymentMethod,
    pub customer_info: CustomerInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreated {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
}
