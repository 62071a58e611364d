use crate::model::{macros, AdminReference, ExtraField};
use indexmap::IndexMap;
use log::debug;
use shared::error::WebConfError;
use shared::feature_err;
use shared::model::{AdminReferenceDto, ClientConfigDto, ClientFeatures};
use shared::utils::{concat_path, is_root_relative};

/// Domain, path prefix and oauth client id of one backend api.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    pub domain: String,
    pub path: String,
    pub client_id: String,
}

impl ApiEndpoint {
    pub fn base_url(&self) -> String {
        concat_path(&self.domain, &self.path)
    }

    pub fn url(&self, path: &str) -> String {
        concat_path(&self.base_url(), path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadCheck {
    Allowed,
    /// `maxFileSize` is 0.
    Disabled,
    TooLarge { size: u64, max: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub default_language: String,
    pub map_language: Option<String>,
    pub credits_text: String,
    pub credits_short_text: String,
    pub sign_in: String,
    pub sign_up: String,
    pub google_client_id: Option<String>,
    pub api: ApiEndpoint,
    pub ocpp_api: ApiEndpoint,
    pub token_url: String,
    pub ws_domain: String,
    pub admin_references: IndexMap<String, AdminReference>,
    pub max_file_size: u64,
    pub features: ClientFeatures,
}

impl ClientConfig {
    pub fn features(&self) -> ClientFeatures {
        self.features
    }

    pub fn is_enabled(&self, feature: ClientFeatures) -> bool {
        self.features.contains(feature)
    }

    pub fn require(&self, feature: ClientFeatures) -> Result<(), WebConfError> {
        if self.is_enabled(feature) {
            Ok(())
        } else {
            Err(feature_err!("{} is disabled", feature.difference(self.features)))
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        self.api.url(path)
    }

    pub fn ocpp_api_url(&self, path: &str) -> String {
        self.ocpp_api.url(path)
    }

    pub fn ws_url(&self, path: &str) -> String {
        concat_path(&self.ws_domain, path)
    }

    /// Root relative token urls are served by the api domain.
    pub fn token_url(&self) -> String {
        if is_root_relative(&self.token_url) {
            concat_path(&self.api.domain, &self.token_url)
        } else {
            self.token_url.clone()
        }
    }

    /// Extra fields for the admin form of `entity`.
    ///
    /// Returns `None` when the admin module is disabled or the entity is not declared.
    pub fn admin_extra_fields(&self, entity: &str) -> Option<&[ExtraField]> {
        if !self.is_enabled(ClientFeatures::ADMIN) {
            debug!("Admin module is disabled, ignoring admin references for {entity}");
            return None;
        }
        self.admin_references.get(entity).map(|r| r.extra_fields.as_slice())
    }

    /// Url of the list endpoint backing a reference field.
    pub fn reference_list_url(&self, field: &ExtraField) -> String {
        self.api_url(&field.path)
    }

    pub fn check_upload(&self, size: u64) -> UploadCheck {
        if self.max_file_size == 0 {
            UploadCheck::Disabled
        } else if size > self.max_file_size {
            UploadCheck::TooLarge { size, max: self.max_file_size }
        } else {
            UploadCheck::Allowed
        }
    }

    pub fn to_dto(&self) -> ClientConfigDto {
        ClientConfigDto::from(self)
    }
}

macros::from_impl!(ClientConfig);
impl From<&ClientConfigDto> for ClientConfig {
    fn from(dto: &ClientConfigDto) -> Self {
        Self {
            default_language: dto.default_language.clone(),
            map_language: dto.map_language.clone(),
            credits_text: dto.credits_text.clone(),
            credits_short_text: dto.credits_short_text.clone(),
            sign_in: dto.sign_in.clone(),
            sign_up: dto.sign_up.clone(),
            google_client_id: dto.google_client_id.clone(),
            api: ApiEndpoint {
                domain: dto.api_domain.clone(),
                path: dto.api_path.clone(),
                client_id: dto.api_client_id.clone(),
            },
            ocpp_api: ApiEndpoint {
                domain: dto.ocpp_api_domain.clone(),
                path: dto.ocpp_api_path.clone(),
                client_id: dto.ocpp_api_client_id.clone(),
            },
            token_url: dto.api_token_url.clone(),
            ws_domain: dto.ws_domain.clone(),
            admin_references: dto.admin_references.iter()
                .map(|(entity, reference)| (entity.clone(), AdminReference::from(reference)))
                .collect(),
            max_file_size: dto.max_file_size,
            features: dto.features(),
        }
    }
}
impl From<&ClientConfig> for ClientConfigDto {
    fn from(instance: &ClientConfig) -> Self {
        let features = instance.features;
        Self {
            default_language: instance.default_language.clone(),
            map_language: instance.map_language.clone(),
            credits_text: instance.credits_text.clone(),
            credits_short_text: instance.credits_short_text.clone(),
            sign_in: instance.sign_in.clone(),
            sign_up: instance.sign_up.clone(),
            conf_authorize: features.contains(ClientFeatures::AUTHORIZE),
            conf_crm: features.contains(ClientFeatures::CRM),
            conf_driver: features.contains(ClientFeatures::DRIVER),
            conf_ocpp: features.contains(ClientFeatures::OCPP),
            conf_admin: features.contains(ClientFeatures::ADMIN),
            google_authorize: features.contains(ClientFeatures::GOOGLE_SIGNIN),
            google_client_id: instance.google_client_id.clone(),
            ocpp_api_domain: instance.ocpp_api.domain.clone(),
            ocpp_api_path: instance.ocpp_api.path.clone(),
            ocpp_api_client_id: instance.ocpp_api.client_id.clone(),
            api_token_url: instance.token_url.clone(),
            api_domain: instance.api.domain.clone(),
            ws_domain: instance.ws_domain.clone(),
            api_path: instance.api.path.clone(),
            api_client_id: instance.api.client_id.clone(),
            admin_references: instance.admin_references.iter()
                .map(|(entity, reference)| (entity.clone(), AdminReferenceDto::from(reference)))
                .collect(),
            max_file_size: instance.max_file_size,
        }
    }
}
