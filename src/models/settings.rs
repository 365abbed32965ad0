use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{overlay, validate_non_negative_amount};

/// Used whenever `admin_password` is unset or empty.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SamitySettings {
    pub name: String,
    pub logo: String,
    pub slogan: String,
    pub intro: String,
    pub about_title: String,
    pub about_content: String,
    pub membership_rules: String,
    pub monthly_savings_amount: Decimal,
    pub contact_address: String,
    pub contact_mobile: String,
    pub contact_email: String,
    pub whatsapp_link: String,
    pub facebook_link: String,
    pub google_map_embed: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,
}

impl SamitySettings {
    pub fn admin_password(&self) -> &str {
        match self.admin_password.as_deref() {
            Some(password) if !password.is_empty() => password,
            _ => DEFAULT_ADMIN_PASSWORD,
        }
    }

    pub fn apply(&mut self, patch: SettingsPatch) {
        overlay(&mut self.name, patch.name);
        overlay(&mut self.logo, patch.logo);
        overlay(&mut self.slogan, patch.slogan);
        overlay(&mut self.intro, patch.intro);
        overlay(&mut self.about_title, patch.about_title);
        overlay(&mut self.about_content, patch.about_content);
        overlay(&mut self.membership_rules, patch.membership_rules);
        overlay(&mut self.monthly_savings_amount, patch.monthly_savings_amount);
        overlay(&mut self.contact_address, patch.contact_address);
        overlay(&mut self.contact_mobile, patch.contact_mobile);
        overlay(&mut self.contact_email, patch.contact_email);
        overlay(&mut self.whatsapp_link, patch.whatsapp_link);
        overlay(&mut self.facebook_link, patch.facebook_link);
        overlay(&mut self.google_map_embed, patch.google_map_embed);
        if patch.admin_password.is_some() {
            self.admin_password = patch.admin_password;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub slogan: Option<String>,
    pub intro: Option<String>,
    pub about_title: Option<String>,
    pub about_content: Option<String>,
    pub membership_rules: Option<String>,
    #[validate(custom = "validate_non_negative_amount")]
    pub monthly_savings_amount: Option<Decimal>,
    pub contact_address: Option<String>,
    pub contact_mobile: Option<String>,
    pub contact_email: Option<String>,
    pub whatsapp_link: Option<String>,
    pub facebook_link: Option<String>,
    pub google_map_embed: Option<String>,
    #[validate(length(min = 1, message = "Admin password cannot be empty"))]
    pub admin_password: Option<String>,
}
