//! Session-scoped settings.
//!
//! The settings screen carries one switch besides the theme: affiliate
//! mode. It is cosmetic and intentionally not persisted — every session
//! starts with it off, matching the shipped product.

/// Settings that live only for the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSettings {
    /// Whether affiliate recommendations are shown.
    pub affiliate_mode: bool,
}

impl SessionSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip affiliate mode, returning the new value.
    pub fn toggle_affiliate_mode(&mut self) -> bool {
        self.affiliate_mode = !self.affiliate_mode;
        self.affiliate_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affiliate_mode_starts_off() {
        assert!(!SessionSettings::new().affiliate_mode);
    }

    #[test]
    fn test_toggle_affiliate_mode() {
        let mut settings = SessionSettings::new();
        assert!(settings.toggle_affiliate_mode());
        assert!(settings.affiliate_mode);
        assert!(!settings.toggle_affiliate_mode());
    }
}
