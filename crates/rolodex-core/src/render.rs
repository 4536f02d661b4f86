//! Business card rendering port.
//!
//! The card format is fixed and versioned. Adapters compile
//! [`BUSINESS_CARD_TEMPLATE`] once at startup and render it per request.

use rolodex_types::error::RenderError;
use rolodex_types::user::User;

/// Bumped whenever [`BUSINESS_CARD_TEMPLATE`] changes its output.
pub const BUSINESS_CARD_TEMPLATE_VERSION: u32 = 1;

/// Two lines, no trailing newline. Fields are exposed as `name` and `phone`.
pub const BUSINESS_CARD_TEMPLATE: &str = "Name: {{ name }}\nPhone: {{ phone }}";

/// The data printed on a business card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessCard<'a> {
    pub name: &'a str,
    pub phone: &'a str,
}

impl<'a> From<&'a User> for BusinessCard<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            name: &user.name,
            phone: &user.phone,
        }
    }
}

/// Turns a [`BusinessCard`] into text.
///
/// Rendering is pure and synchronous; any template setup belongs in the
/// implementation's constructor.
pub trait CardRenderer: Send + Sync {
    fn render(&self, card: &BusinessCard<'_>) -> Result<String, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_card_from_user() {
        let user = User::new("frog", "Mr. Frog", "+0-123-45-67-89");
        let card = BusinessCard::from(&user);
        assert_eq!(card.name, "Mr. Frog");
        assert_eq!(card.phone, "+0-123-45-67-89");
    }

    #[test]
    fn test_template_has_two_lines() {
        assert_eq!(BUSINESS_CARD_TEMPLATE.lines().count(), 2);
        assert!(!BUSINESS_CARD_TEMPLATE.ends_with('\n'));
    }
}
