use serde::{Deserialize, Serialize};

pub const FORM_TYPE_CONTACT: &str = "contact";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
}

/// Body posted to the email function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactEmailRequest {
    #[serde(flatten)]
    pub data: ContactFormData,
    pub subject: String,
    pub form_type: &'static str,
    pub submitted_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactEmailResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Office that answers an enquiry. Mirrors the email function's routing:
/// a +27 number goes to South Africa, everything else to Australia.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SouthAfrica,
    Australia,
}

impl Region {
    pub fn from_phone(phone: Option<&str>) -> Self {
        match phone {
            Some(p) if p.contains("+27") => Region::SouthAfrica,
            _ => Region::Australia,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::SouthAfrica => "South Africa",
            Region::Australia => "Australia",
        }
    }
}
