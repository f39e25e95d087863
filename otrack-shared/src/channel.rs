use serde::{Deserialize, Serialize};

/// Intake channel an order was extracted from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    Email,
    WhatsApp,
    PhoneCall,
    WebForm,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Email,
        Channel::WhatsApp,
        Channel::PhoneCall,
        Channel::WebForm,
    ];

    /// Human-facing label shown next to an order
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::WhatsApp => "WhatsApp",
            Channel::PhoneCall => "Phone Call",
            Channel::WebForm => "Web Form",
        }
    }

    /// Snake-case form used inside extraction metadata
    pub fn slug(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::WhatsApp => "whatsapp",
            Channel::PhoneCall => "phone_call",
            Channel::WebForm => "web_form",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_slugs() {
        assert_eq!(Channel::PhoneCall.label(), "Phone Call");
        assert_eq!(Channel::PhoneCall.slug(), "phone_call");
        assert_eq!(Channel::WebForm.slug(), "web_form");
        assert_eq!(Channel::Email.to_string(), "Email");
    }
}
