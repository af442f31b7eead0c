//! Device classification from a user-agent string

/// Which payment path the popup renders: deep links on mobile, QR on desktop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Case-insensitive match on "Mobi" or "Android". Anything else,
    /// including a missing user agent, is desktop.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        let Some(ua) = user_agent else {
            return DeviceClass::Desktop;
        };
        let ua = ua.to_ascii_lowercase();
        if ua.contains("mobi") || ua.contains("android") {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_user_agent_is_mobile() {
        let ua = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36";
        assert_eq!(DeviceClass::from_user_agent(Some(ua)), DeviceClass::Mobile);
    }

    #[test]
    fn mobi_token_is_mobile() {
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148";
        assert_eq!(DeviceClass::from_user_agent(Some(ua)), DeviceClass::Mobile);
    }

    #[test]
    fn match_ignores_case() {
        assert!(DeviceClass::from_user_agent(Some("ANDROID")).is_mobile());
        assert!(DeviceClass::from_user_agent(Some("somemobiclient")).is_mobile());
    }

    #[test]
    fn windows_user_agent_is_desktop() {
        let ua = "Mozilla/5.0 (Windows NT 10.0)";
        assert_eq!(DeviceClass::from_user_agent(Some(ua)), DeviceClass::Desktop);
    }

    #[test]
    fn missing_or_empty_user_agent_is_desktop() {
        assert_eq!(DeviceClass::from_user_agent(None), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_user_agent(Some("")), DeviceClass::Desktop);
    }
}
