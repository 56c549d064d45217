use serde::{Deserialize, Serialize};

/// Authoritative profile from `GET /members/my-info`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub nickname: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    pub email: String,
    #[serde(default)]
    pub balance: i64,
    #[serde(default)]
    pub profile_image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub phone_number: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FindPasswordRequest {
    pub email: String,
}

/// Password-change mail for the signed-in member goes to their own address
impl From<&UserInfo> for FindPasswordRequest {
    fn from(user: &UserInfo) -> Self {
        Self {
            email: user.email.clone(),
        }
    }
}

/// Scalar part of the multipart `info-edit` request.
/// Only the fields the member actually filled in are present.
pub type InfoEditRequest = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_info_tolerates_missing_optional_fields() {
        let json = r#"{"nickname":"kim","email":"kim@example.com"}"#;
        let info: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.balance, 0);
        assert!(info.phone_number.is_empty());
        assert!(info.profile_image.is_none());
    }

    #[test]
    fn password_mail_targets_member_email() {
        let json = r#"{"nickname":"kim","email":"kim@example.com"}"#;
        let info: UserInfo = serde_json::from_str(json).unwrap();
        let request = FindPasswordRequest::from(&info);

        assert_eq!(request.email, "kim@example.com");
        assert_eq!(serde_json::to_value(&request).unwrap()["email"], "kim@example.com");
    }

    #[test]
    fn sign_up_request_uses_camel_case() {
        let request = SignUpRequest {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
            nickname: "n".to_string(),
            phone_number: "01012345678".to_string(),
            address: "Seoul".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["phoneNumber"], "01012345678");
    }
}
