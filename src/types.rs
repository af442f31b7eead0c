//! Common types and data structures

use crate::constants::*;

/// Form contents on the payment page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentRequest {
    pub amount: String,
    pub note: String,
    pub mobile: String,
}

/// Order pre-fill returned by the lookup behind `/:id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    pub amount: String,
    pub note: String,
    pub mobile: String,
}

impl OrderDetails {
    pub fn stub() -> Self {
        Self {
            amount: STUB_ORDER_AMOUNT.to_string(),
            note: STUB_ORDER_NOTE.to_string(),
            mobile: STUB_ORDER_MOBILE.to_string(),
        }
    }
}

impl From<OrderDetails> for PaymentRequest {
    fn from(order: OrderDetails) -> Self {
        Self {
            amount: order.amount,
            note: order.note,
            mobile: order.mobile,
        }
    }
}

/// Supported wallet apps with their own deep-link scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpiApp {
    GPay,
    PhonePe,
    Paytm,
    AmazonPay,
}

impl UpiApp {
    pub const ALL: [UpiApp; 4] = [UpiApp::GPay, UpiApp::PhonePe, UpiApp::Paytm, UpiApp::AmazonPay];

    pub fn id(self) -> &'static str {
        match self {
            UpiApp::GPay => "gpay",
            UpiApp::PhonePe => "phonepe",
            UpiApp::Paytm => "paytm",
            UpiApp::AmazonPay => "amazon",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app| app.id() == id)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            UpiApp::GPay => "G Pay",
            UpiApp::PhonePe => "PhonePe",
            UpiApp::Paytm => "Paytm",
            UpiApp::AmazonPay => "Amazon Pay",
        }
    }

    /// URI scheme the app registers for payment intents
    pub fn scheme(self) -> &'static str {
        match self {
            UpiApp::GPay => "tez",
            UpiApp::PhonePe => "phonepe",
            UpiApp::Paytm => "paytmmp",
            UpiApp::AmazonPay => "amazonpay",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_ids_round_trip() {
        for app in UpiApp::ALL {
            assert_eq!(UpiApp::from_id(app.id()), Some(app));
        }
        assert_eq!(UpiApp::from_id("bhim"), None);
        assert_eq!(UpiApp::from_id("GPAY"), None);
    }

    #[test]
    fn stub_order_prefills_request() {
        let request: PaymentRequest = OrderDetails::stub().into();
        assert_eq!(request.amount, "120.00");
        assert_eq!(request.note, "Order Ref #2024");
        assert_eq!(request.mobile, "9876543210");
    }
}
