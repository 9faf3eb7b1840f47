pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

// Deployments swap in a real key; while the placeholder is still here the
// contact form reports "not configured" instead of posting.
pub const RELAY_ACCESS_KEY: &str = "YOUR_ACCESS_KEY_HERE";
pub const RELAY_ACCESS_KEY_PLACEHOLDER: &str = "YOUR_ACCESS_KEY_HERE";

pub const LANG_STORAGE_KEY: &str = "site_lang";

pub const CONTACT_ADDRESS: &str = "Kaloum, Conakry, Guinée";
pub const CONTACT_PHONE: &str = "+224 622 35 08 92";
pub const CONTACT_EMAIL: &str = "info@agrochemicals-consulting.com";
pub const CONTACT_WHATSAPP: &str = "+224 622 35 08 92";

pub fn relay_ready() -> bool {
    RELAY_ACCESS_KEY != RELAY_ACCESS_KEY_PLACEHOLDER
}
