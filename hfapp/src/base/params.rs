use serde::{Deserialize, Serialize};

pub const DEFAULT_TEXT_MODEL_ID: &str = "meta-llama/Llama-3.2-3B-Instruct";
pub const DEFAULT_IMAGE_MODEL_ID: &str = "black-forest-labs/FLUX.1-dev";

/// Installation parameters as the host stores them. Field names on the wire
/// are camelCase; a field absent from the stored record deserializes to
/// `None` (no schema version, no migration).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_model_id: Option<String>,
}

impl Default for InstallationParameters {
    fn default() -> Self {
        Self {
            api_key: None,
            text_model_id: Some(DEFAULT_TEXT_MODEL_ID.to_string()),
            image_model_id: Some(DEFAULT_IMAGE_MODEL_ID.to_string()),
        }
    }
}

impl InstallationParameters {
    /// All three fields present and non-empty. Evaluated at commit time
    /// only; editing never blocks on completeness.
    pub fn is_complete(&self) -> bool {
        ParameterField::ALL
            .iter()
            .all(|field| !self.field(*field).is_empty())
    }

    pub fn field(&self, field: ParameterField) -> &str {
        let value = match field {
            ParameterField::ApiKey => &self.api_key,
            ParameterField::TextModelId => &self.text_model_id,
            ParameterField::ImageModelId => &self.image_model_id,
        };
        value.as_deref().unwrap_or("")
    }

    pub fn set_field<S: Into<String>>(&mut self, field: ParameterField, value: S) {
        let slot = match field {
            ParameterField::ApiKey => &mut self.api_key,
            ParameterField::TextModelId => &mut self.text_model_id,
            ParameterField::ImageModelId => &mut self.image_model_id,
        };
        *slot = Some(value.into());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterField {
    ApiKey,
    TextModelId,
    ImageModelId,
}

impl ParameterField {
    pub const ALL: [ParameterField; 3] = [
        ParameterField::ApiKey,
        ParameterField::TextModelId,
        ParameterField::ImageModelId,
    ];

    /// Wire name, matching the serialized record.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterField::ApiKey => "apiKey",
            ParameterField::TextModelId => "textModelId",
            ParameterField::ImageModelId => "imageModelId",
        }
    }
}

/// In-memory holder of the editable configuration values. The host owns
/// durable storage; this is only the UI-side state.
#[derive(Clone, Debug, Default)]
pub struct ParameterStore {
    current: InstallationParameters,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self {
            current: InstallationParameters::default(),
        }
    }

    /// Replaces the whole current value with the host's stored record.
    /// Fields are not merged; a record missing a field clears that field.
    /// `None` (host has nothing saved) leaves the defaults untouched.
    pub fn load_from(&mut self, saved: Option<InstallationParameters>) {
        if let Some(saved) = saved {
            self.current = saved;
        }
    }

    /// Verbatim single-field update; no trimming, no normalization.
    pub fn set_field<S: Into<String>>(&mut self, field: ParameterField, value: S) {
        self.current.set_field(field, value);
    }

    pub fn field(&self, field: ParameterField) -> &str {
        self.current.field(field)
    }

    /// Owned copy of the current values; mutations on the returned value
    /// never reach the store.
    pub fn snapshot(&self) -> InstallationParameters {
        self.current.clone()
    }
}
