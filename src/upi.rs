//! UPI payment intent links
//!
//! Format: `<scheme>://pay?pa=<payee id>&pn=<payee name>&am=<amount>&tn=<note>&cu=INR`
//!
//! The scheme is `upi` for the generic intent (any installed UPI app can
//! handle it) or a wallet-specific scheme from [`UpiApp::scheme`].
//! Values are percent-encoded; nothing else about them is checked here.

use crate::constants::{CURRENCY, GENERIC_SCHEME};
use crate::settings::PayeeConfig;
use crate::types::UpiApp;

/// Everything that goes into the query string of a payment intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpiLinkParams<'a> {
    pub payee_id: &'a str,
    pub payee_name: &'a str,
    pub amount: &'a str,
    pub note: &'a str,
}

impl UpiLinkParams<'_> {
    pub fn currency(&self) -> &'static str {
        CURRENCY
    }

    pub fn to_uri(&self, scheme: &str) -> String {
        format!(
            "{}://pay?pa={}&pn={}&am={}&tn={}&cu={}",
            scheme,
            urlencoding::encode(self.payee_id),
            urlencoding::encode(self.payee_name),
            urlencoding::encode(self.amount),
            urlencoding::encode(self.note),
            self.currency(),
        )
    }
}

/// Scheme for an app id; unknown or missing ids get the generic `upi` scheme.
pub fn scheme_for(app_id: Option<&str>) -> &'static str {
    app_id
        .and_then(UpiApp::from_id)
        .map(UpiApp::scheme)
        .unwrap_or(GENERIC_SCHEME)
}

/// Builds payment links for a fixed payee
#[derive(Debug, Clone)]
pub struct UpiLinkBuilder {
    payee: PayeeConfig,
}

impl UpiLinkBuilder {
    pub fn new(payee: PayeeConfig) -> Self {
        Self { payee }
    }

    pub fn payee(&self) -> &PayeeConfig {
        &self.payee
    }

    pub fn params<'a>(&'a self, amount: &'a str, note: &'a str) -> UpiLinkParams<'a> {
        UpiLinkParams {
            payee_id: &self.payee.payee_id,
            payee_name: &self.payee.payee_name,
            amount,
            note,
        }
    }

    /// `upi://pay?...`, handled by whichever UPI app the OS picks
    pub fn generic_link(&self, amount: &str, note: &str) -> String {
        self.params(amount, note).to_uri(GENERIC_SCHEME)
    }

    /// Deep link for a specific wallet app, by app id
    pub fn app_link(&self, app_id: Option<&str>, amount: &str, note: &str) -> String {
        self.params(amount, note).to_uri(scheme_for(app_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> UpiLinkBuilder {
        UpiLinkBuilder::new(PayeeConfig::new("abc@bank", "Test User").unwrap())
    }

    #[test]
    fn generic_link_is_percent_encoded() {
        let link = builder().generic_link("120.00", "Order#1");
        assert_eq!(
            link,
            "upi://pay?pa=abc%40bank&pn=Test%20User&am=120.00&tn=Order%231&cu=INR"
        );
    }

    #[test]
    fn gpay_link_uses_tez_scheme() {
        let link = builder().app_link(Some("gpay"), "120.00", "Order#1");
        assert_eq!(
            link,
            "tez://pay?pa=abc%40bank&pn=Test%20User&am=120.00&tn=Order%231&cu=INR"
        );
    }

    #[test]
    fn app_links_share_the_generic_query() {
        let b = builder();
        let generic = b.generic_link("99.50", "Rent & bills");
        let query = generic.split_once('?').map(|(_, q)| q).unwrap();
        for app in UpiApp::ALL {
            let link = b.app_link(Some(app.id()), "99.50", "Rent & bills");
            assert_eq!(link, format!("{}://pay?{}", app.scheme(), query));
        }
    }

    #[test]
    fn unknown_or_missing_app_falls_back_to_upi() {
        let b = builder();
        assert!(b.app_link(None, "1", "").starts_with("upi://pay?"));
        assert!(b.app_link(Some("bhim"), "1", "").starts_with("upi://pay?"));
        assert_eq!(scheme_for(Some("phonepe")), "phonepe");
        assert_eq!(scheme_for(Some("paytm")), "paytmmp");
        assert_eq!(scheme_for(Some("amazon")), "amazonpay");
    }

    #[test]
    fn separators_in_values_cannot_break_the_query() {
        let link = builder().generic_link("10", "a&tn=b?c=d");
        assert!(link.ends_with("&tn=a%26tn%3Db%3Fc%3Dd&cu=INR"));
    }

    #[test]
    fn empty_note_still_yields_every_parameter() {
        let link = builder().generic_link("5", "");
        assert_eq!(link, "upi://pay?pa=abc%40bank&pn=Test%20User&am=5&tn=&cu=INR");
    }
}
