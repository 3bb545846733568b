use serde::{Deserialize, Serialize};

/// Company and tax-registration data submitted on the setup screen.
///
/// Sent as the JSON `company` part of the multipart setup request, next to the
/// digital certificate and the optional logo.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub business_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_name: Option<String>,
    pub tax_id: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub email: String,
    /// Password protecting the digital signing certificate.
    pub certificate_password: String,
}

/// A file picked in the browser, ready to be sent as a multipart part.
#[derive(Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// MIME type guessed from the file extension.
    pub fn mime(&self) -> &'static str {
        let ext = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "p12" | "pfx" => "application/x-pkcs12",
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "svg" => "image/svg+xml",
            "webp" => "image/webp",
            _ => "application/octet-stream",
        }
    }
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(Attachment::new("firma.P12", vec![]).mime(), "application/x-pkcs12");
        assert_eq!(Attachment::new("logo.png", vec![]).mime(), "image/png");
        assert_eq!(Attachment::new("logo.JPEG", vec![]).mime(), "image/jpeg");
        assert_eq!(Attachment::new("noext", vec![]).mime(), "application/octet-stream");
    }

    #[test]
    fn test_company_json_skips_empty_optionals() {
        let info = CompanyInfo {
            business_name: "Acme S.A.".to_string(),
            tax_id: "1790012345001".to_string(),
            address: "Av. Amazonas".to_string(),
            email: "billing@acme.test".to_string(),
            certificate_password: "pw".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["businessName"], "Acme S.A.");
        assert_eq!(json["taxId"], "1790012345001");
        assert!(json.get("tradeName").is_none());
        assert!(json.get("phone").is_none());
    }
}
