// ============================================================================
// PROFILE EDITOR STATE - read / edit modes and the draft copy
// ============================================================================

use serde_json::Value;

use crate::models::{InfoEditRequest, UserInfo};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileMode {
    Read,
    Edit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Nickname,
    PhoneNumber,
    Address,
}

/// Unsaved copy of the editable profile fields. `F` is the attached image.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileDraft<F> {
    pub nickname: String,
    pub phone_number: String,
    pub address: String,
    pub profile_image: Option<F>,
}

impl<F> Default for ProfileDraft<F> {
    fn default() -> Self {
        Self {
            nickname: String::new(),
            phone_number: String::new(),
            address: String::new(),
            profile_image: None,
        }
    }
}

impl<F> ProfileDraft<F> {
    pub fn from_user(user: Option<&UserInfo>) -> Self {
        match user {
            Some(user) => Self {
                nickname: user.nickname.clone(),
                phone_number: user.phone_number.clone(),
                address: user.address.clone(),
                profile_image: None,
            },
            None => Self::default(),
        }
    }

    /// Scalar part of the edit request; blank fields are left out
    pub fn scalar_payload(&self) -> InfoEditRequest {
        let mut payload = InfoEditRequest::new();
        for (key, value) in [
            ("nickname", &self.nickname),
            ("phoneNumber", &self.phone_number),
            ("address", &self.address),
        ] {
            if !value.is_empty() {
                payload.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        payload
    }
}

/// What a save sends: the JSON part and the optional file part
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileSubmission<F> {
    pub request: InfoEditRequest,
    pub file: Option<F>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileEditor<F> {
    mode: ProfileMode,
    draft: ProfileDraft<F>,
    saving: bool,
    error: Option<String>,
}

impl<F: Clone> ProfileEditor<F> {
    pub fn new(user: Option<&UserInfo>) -> Self {
        Self {
            mode: ProfileMode::Read,
            draft: ProfileDraft::from_user(user),
            saving: false,
            error: None,
        }
    }

    /// Read <-> edit without touching the draft
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ProfileMode::Read => ProfileMode::Edit,
            ProfileMode::Edit => ProfileMode::Read,
        };
        self.error = None;
    }

    /// Leaves edit mode and throws the draft away
    pub fn cancel(&mut self, user: Option<&UserInfo>) {
        self.mode = ProfileMode::Read;
        self.draft = ProfileDraft::from_user(user);
        self.error = None;
    }

    /// The authoritative record changed underneath us
    pub fn reset_draft(&mut self, user: Option<&UserInfo>) {
        self.draft = ProfileDraft::from_user(user);
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Nickname => self.draft.nickname = value,
            ProfileField::PhoneNumber => self.draft.phone_number = value,
            ProfileField::Address => self.draft.address = value,
        }
    }

    pub fn set_image(&mut self, image: Option<F>) {
        self.draft.profile_image = image;
    }

    /// Marks a save in flight. `None` if one is already running.
    pub fn begin_save(&mut self) -> Option<ProfileSubmission<F>> {
        if self.saving || self.mode != ProfileMode::Edit {
            return None;
        }
        self.saving = true;
        self.error = None;
        Some(ProfileSubmission {
            request: self.draft.scalar_payload(),
            file: self.draft.profile_image.clone(),
        })
    }

    pub fn finish_save(&mut self, result: Result<(), String>) {
        self.saving = false;
        match result {
            Ok(()) => {
                self.mode = ProfileMode::Read;
                self.error = None;
            }
            Err(message) => {
                log::error!("❌ Profile update failed: {}", message);
                self.error = Some(message);
            }
        }
    }

    pub fn mode(&self) -> ProfileMode {
        self.mode
    }

    pub fn draft(&self) -> &ProfileDraft<F> {
        &self.draft
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            nickname: "kim".to_string(),
            phone_number: "01012345678".to_string(),
            address: "Seoul".to_string(),
            email: "kim@example.com".to_string(),
            balance: 10_000,
            profile_image: None,
        }
    }

    #[test]
    fn only_filled_fields_are_sent() {
        let draft: ProfileDraft<String> = ProfileDraft {
            nickname: "A".to_string(),
            phone_number: String::new(),
            address: String::new(),
            profile_image: None,
        };

        let payload = draft.scalar_payload();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("nickname"), Some(&Value::String("A".to_string())));
    }

    #[test]
    fn toggle_keeps_draft() {
        let user = user();
        let mut editor: ProfileEditor<String> = ProfileEditor::new(Some(&user));
        editor.toggle_mode();
        editor.set_field(ProfileField::Nickname, "lee".to_string());
        editor.toggle_mode();
        editor.toggle_mode();

        assert_eq!(editor.mode(), ProfileMode::Edit);
        assert_eq!(editor.draft().nickname, "lee");
    }

    #[test]
    fn cancel_discards_draft() {
        let user = user();
        let mut editor: ProfileEditor<String> = ProfileEditor::new(Some(&user));
        editor.toggle_mode();
        editor.set_field(ProfileField::Address, "Busan".to_string());
        editor.set_image(Some("face.png".to_string()));
        editor.cancel(Some(&user));

        assert_eq!(editor.mode(), ProfileMode::Read);
        assert_eq!(editor.draft().address, "Seoul");
        assert!(editor.draft().profile_image.is_none());
    }

    #[test]
    fn successful_save_returns_to_read_without_merging() {
        let user = user();
        let mut editor: ProfileEditor<String> = ProfileEditor::new(Some(&user));
        editor.toggle_mode();
        editor.set_field(ProfileField::PhoneNumber, String::new());
        editor.set_image(Some("face.png".to_string()));

        let submission = editor.begin_save().unwrap();
        assert!(!submission.request.contains_key("phoneNumber"));
        assert_eq!(submission.file.as_deref(), Some("face.png"));
        assert!(editor.is_saving());

        editor.finish_save(Ok(()));
        assert_eq!(editor.mode(), ProfileMode::Read);
        assert!(!editor.is_saving());
        assert_eq!(user.phone_number, "01012345678");
    }

    #[test]
    fn failed_save_stays_in_edit_with_message() {
        let mut editor: ProfileEditor<String> = ProfileEditor::new(None);
        editor.toggle_mode();
        editor.begin_save().unwrap();
        editor.finish_save(Err("HTTP 500: boom".to_string()));

        assert_eq!(editor.mode(), ProfileMode::Edit);
        assert_eq!(editor.error(), Some("HTTP 500: boom"));
    }

    #[test]
    fn double_submit_is_refused() {
        let mut editor: ProfileEditor<String> = ProfileEditor::new(None);
        editor.toggle_mode();
        assert!(editor.begin_save().is_some());
        assert!(editor.begin_save().is_none());
    }

    #[test]
    fn save_outside_edit_mode_is_refused() {
        let mut editor: ProfileEditor<String> = ProfileEditor::new(None);
        assert!(editor.begin_save().is_none());
    }
}
