use crate::error::{WebConfError, WebConfErrorKind};
use crate::model::{AdminReferenceDto, ClientFeatures};
use crate::utils::{check_absolute_or_root_relative, check_absolute_url, check_root_relative_path, get_trimmed_string, CONSTANTS, HTTP_SCHEMES, WS_SCHEMES};
use crate::{config_err, config_err_res, feature_err, handle_webconf_error_result_list};
use indexmap::IndexMap;
use log::warn;

/// How inconsistent but recoverable values are treated while loading.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Every inconsistency is a configuration error.
    #[default]
    Strict,
    /// Inconsistent optional features are disabled and reported as unavailable.
    Lenient,
}

/// The configuration descriptor of the central system web client.
///
/// Field names on the wire are the camelCase names of the `appConfig` object
/// the browser loads. Only `mapLanguage` and `googleClientId` are optional,
/// every other field must be present.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ClientConfigDto {
    pub default_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_language: Option<String>,

    pub credits_text: String,
    pub credits_short_text: String,

    pub sign_in: String,
    pub sign_up: String,

    pub conf_authorize: bool,
    pub conf_crm: bool,
    pub conf_driver: bool,
    pub conf_ocpp: bool,
    pub conf_admin: bool,
    pub google_authorize: bool,

    #[serde(default)]
    pub google_client_id: Option<String>,

    pub ocpp_api_domain: String,
    pub ocpp_api_path: String,
    // the docker artifact was shipped with the misspelled key
    #[serde(alias = "ocppApiClienId")]
    pub ocpp_api_client_id: String,

    pub api_token_url: String,
    pub api_domain: String,
    pub ws_domain: String,
    pub api_path: String,
    pub api_client_id: String,

    pub admin_references: IndexMap<String, AdminReferenceDto>,

    pub max_file_size: u64,
}

impl ClientConfigDto {
    /// Normalizes and validates the descriptor.
    ///
    /// All validation failures are reported together in one `Config` error.
    /// Recoverable inconsistencies are pushed to `notices` in [`LoadMode::Lenient`].
    pub fn prepare(&mut self, mode: LoadMode, notices: &mut Vec<WebConfError>) -> Result<(), WebConfError> {
        self.clean();
        let google = self.prepare_google_sign_in(mode, notices);
        handle_webconf_error_result_list!(WebConfErrorKind::Config, self.validate().into_iter().chain(std::iter::once(google)));
        Ok(())
    }

    fn clean(&mut self) {
        for value in [
            &mut self.default_language,
            &mut self.sign_in,
            &mut self.sign_up,
            &mut self.ocpp_api_domain,
            &mut self.ocpp_api_path,
            &mut self.ocpp_api_client_id,
            &mut self.api_token_url,
            &mut self.api_domain,
            &mut self.ws_domain,
            &mut self.api_path,
            &mut self.api_client_id,
        ] {
            *value = value.trim().to_string();
        }
        self.map_language = get_trimmed_string(self.map_language.as_deref());
        self.google_client_id = get_trimmed_string(self.google_client_id.as_deref());
        for reference in self.admin_references.values_mut() {
            reference.prepare();
        }
    }

    fn prepare_google_sign_in(&mut self, mode: LoadMode, notices: &mut Vec<WebConfError>) -> Result<(), WebConfError> {
        if self.google_authorize && self.google_client_id.is_none() {
            match mode {
                LoadMode::Strict => return config_err_res!("googleAuthorize is enabled but googleClientId is not set"),
                LoadMode::Lenient => {
                    warn!("googleAuthorize is enabled but googleClientId is not set, google sign-in is disabled");
                    self.google_authorize = false;
                    notices.push(feature_err!("google sign-in, googleClientId is not set"));
                }
            }
        }
        Ok(())
    }

    fn validate(&self) -> Vec<Result<(), WebConfError>> {
        let mut results = vec![
            check_locale("defaultLanguage", &self.default_language),
            check_root_relative_path("signIn", &self.sign_in),
            check_root_relative_path("signUp", &self.sign_up),
            check_absolute_url("ocppApiDomain", &self.ocpp_api_domain, HTTP_SCHEMES).map(|_| ()),
            check_root_relative_path("ocppApiPath", &self.ocpp_api_path),
            check_not_blank("ocppApiClientId", &self.ocpp_api_client_id),
            check_absolute_or_root_relative("apiTokenUrl", &self.api_token_url, HTTP_SCHEMES),
            check_absolute_url("apiDomain", &self.api_domain, HTTP_SCHEMES).map(|_| ()),
            check_absolute_url("wsDomain", &self.ws_domain, WS_SCHEMES).map(|_| ()),
            check_root_relative_path("apiPath", &self.api_path),
            check_not_blank("apiClientId", &self.api_client_id),
        ];
        if let Some(map_language) = self.map_language.as_deref() {
            results.push(check_locale("mapLanguage", map_language));
        }
        for (entity, reference) in &self.admin_references {
            results.extend(reference.validate(entity));
        }
        results
    }

    /// The ui modules this descriptor enables.
    pub fn features(&self) -> ClientFeatures {
        let mut features = ClientFeatures::empty();
        features.set(ClientFeatures::AUTHORIZE, self.conf_authorize);
        features.set(ClientFeatures::CRM, self.conf_crm);
        features.set(ClientFeatures::DRIVER, self.conf_driver);
        features.set(ClientFeatures::OCPP, self.conf_ocpp);
        features.set(ClientFeatures::ADMIN, self.conf_admin);
        features.set(ClientFeatures::GOOGLE_SIGNIN, self.google_authorize && self.google_client_id.is_some());
        features.set(ClientFeatures::MAP, self.map_language.is_some());
        features.set(ClientFeatures::UPLOAD, self.max_file_size > 0);
        features
    }
}

fn check_locale(field: &str, value: &str) -> Result<(), WebConfError> {
    if CONSTANTS.re_locale.is_match(value) {
        Ok(())
    } else {
        Err(config_err!("{field}: '{value}' is not a locale code like 'en', 'en_US' or 'zh-Hans'"))
    }
}

fn check_not_blank(field: &str, value: &str) -> Result<(), WebConfError> {
    if value.is_empty() {
        config_err_res!("{field} must not be empty")
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{check_locale, ClientConfigDto, LoadMode};
    use crate::error::WebConfErrorKind;
    use crate::model::ClientFeatures;

    const DESCRIPTOR: &str = r#"{
        "defaultLanguage": "en",
        "creditsText": "OCPP Central System © 2024",
        "creditsShortText": "Central System",
        "signIn": "/signin",
        "signUp": "/signup",
        "confAuthorize": true,
        "confCrm": false,
        "confDriver": false,
        "confOcpp": true,
        "confAdmin": false,
        "googleAuthorize": false,
        "mapLanguage": "en_US",
        "googleClientId": null,
        "ocppApiDomain": "http://localhost:9220",
        "ocppApiPath": "/api/v1",
        "ocppApiClientId": "web-ocpp-css.com",
        "apiTokenUrl": "http://localhost:8080/oauth2/token",
        "apiDomain": "http://localhost:8080",
        "wsDomain": "ws://localhost:8080",
        "apiPath": "/api/v1",
        "apiClientId": "web-ocpp-css.com",
        "adminReferences": {
            "model": { "extraFields": { "vendor": { "type": "reference", "path": "/vendor/list", "required": true } } },
            "vendor": {},
            "network": {}
        },
        "maxFileSize": 512000
    }"#;

    fn descriptor() -> serde_json::Value {
        serde_json::from_str(DESCRIPTOR).unwrap()
    }

    fn parse(value: serde_json::Value) -> Result<ClientConfigDto, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_parse_and_prepare() {
        let mut dto = parse(descriptor()).unwrap();
        let mut notices = vec![];
        dto.prepare(LoadMode::Strict, &mut notices).unwrap();
        assert!(notices.is_empty());
        assert_eq!(dto.map_language.as_deref(), Some("en_US"));
        assert!(dto.google_client_id.is_none());
        assert_eq!(dto.max_file_size, 512_000);
        assert_eq!(dto.features(), ClientFeatures::AUTHORIZE | ClientFeatures::OCPP | ClientFeatures::MAP | ClientFeatures::UPLOAD);
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let mut value = descriptor();
        let obj = value.as_object_mut().unwrap();
        obj.remove("mapLanguage");
        obj.remove("googleClientId");
        let dto = parse(value).unwrap();
        assert!(dto.map_language.is_none());
        assert!(!dto.features().contains(ClientFeatures::MAP));
    }

    #[test]
    fn test_required_fields_must_be_present() {
        for field in ["defaultLanguage", "signIn", "confDriver", "googleAuthorize", "apiDomain", "wsDomain", "adminReferences", "maxFileSize"] {
            let mut value = descriptor();
            value.as_object_mut().unwrap().remove(field);
            let err = parse(value).unwrap_err();
            assert!(err.to_string().contains(field), "{field}: {err}");
        }
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        for (field, value) in [
            ("confOcpp", serde_json::json!("yes")),
            ("maxFileSize", serde_json::json!(-1)),
            ("maxFileSize", serde_json::json!(1024.5)),
            ("maxFileSize", serde_json::json!("512000")),
            ("apiDomain", serde_json::json!(8080)),
        ] {
            let mut descriptor = descriptor();
            descriptor[field] = value;
            assert!(parse(descriptor).is_err(), "{field} should be rejected");
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut value = descriptor();
        value["apiDomian"] = serde_json::json!("http://localhost");
        assert!(parse(value).is_err());
    }

    #[test]
    fn test_misspelled_ocpp_client_id_alias() {
        let mut value = descriptor();
        let obj = value.as_object_mut().unwrap();
        obj.remove("ocppApiClientId");
        obj.insert("ocppApiClienId".to_string(), serde_json::json!("web-ocpp-css.com"));
        let dto = parse(value).unwrap();
        assert_eq!(dto.ocpp_api_client_id, "web-ocpp-css.com");
        let serialized = serde_json::to_value(&dto).unwrap();
        assert!(serialized.get("ocppApiClientId").is_some());
        assert!(serialized.get("ocppApiClienId").is_none());
    }

    #[test]
    fn test_zero_max_file_size_disables_upload() {
        let mut value = descriptor();
        value["maxFileSize"] = serde_json::json!(0);
        let mut dto = parse(value).unwrap();
        dto.prepare(LoadMode::Strict, &mut vec![]).unwrap();
        assert!(!dto.features().contains(ClientFeatures::UPLOAD));
    }

    #[test]
    fn test_google_without_client_id_strict() {
        let mut value = descriptor();
        value["googleAuthorize"] = serde_json::json!(true);
        let mut dto = parse(value).unwrap();
        let err = dto.prepare(LoadMode::Strict, &mut vec![]).unwrap_err();
        assert_eq!(err.kind, WebConfErrorKind::Config);
        assert!(err.message.contains("googleClientId"));
    }

    #[test]
    fn test_google_without_client_id_lenient() {
        let mut value = descriptor();
        value["googleAuthorize"] = serde_json::json!(true);
        value["googleClientId"] = serde_json::json!("  ");
        let mut dto = parse(value).unwrap();
        let mut notices = vec![];
        dto.prepare(LoadMode::Lenient, &mut notices).unwrap();
        assert!(!dto.google_authorize);
        assert!(!dto.features().contains(ClientFeatures::GOOGLE_SIGNIN));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, WebConfErrorKind::FeatureUnavailable);
    }

    #[test]
    fn test_google_with_client_id() {
        let mut value = descriptor();
        value["googleAuthorize"] = serde_json::json!(true);
        value["googleClientId"] = serde_json::json!("1234.apps.googleusercontent.com");
        let mut dto = parse(value).unwrap();
        dto.prepare(LoadMode::Strict, &mut vec![]).unwrap();
        assert!(dto.features().contains(ClientFeatures::GOOGLE_SIGNIN));
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let mut value = descriptor();
        value["apiDomain"] = serde_json::json!("localhost:8080");
        value["wsDomain"] = serde_json::json!("http://localhost:8080");
        value["signIn"] = serde_json::json!("signin");
        value["defaultLanguage"] = serde_json::json!("english");
        let mut dto = parse(value).unwrap();
        let err = dto.prepare(LoadMode::Strict, &mut vec![]).unwrap_err();
        assert_eq!(err.kind, WebConfErrorKind::Config);
        for field in ["apiDomain", "wsDomain", "signIn", "defaultLanguage"] {
            assert!(err.message.contains(field), "{field} missing in {}", err.message);
        }
        assert_eq!(err.message.lines().count(), 4);
    }

    #[test]
    fn test_locale_codes() {
        for locale in ["en", "ru", "en_US", "en-us", "pt-BR", "zh-Hans", "zh-Hans-CN", "es-419"] {
            assert!(check_locale("defaultLanguage", locale).is_ok(), "{locale}");
        }
        for locale in ["", "english", "e", "en US", "en-", "en_US.UTF-8"] {
            assert!(check_locale("defaultLanguage", locale).is_err(), "{locale}");
        }
        let mut value = descriptor();
        value["defaultLanguage"] = serde_json::json!("zh-Hans");
        value["mapLanguage"] = serde_json::json!("es-419");
        let mut dto = parse(value).unwrap();
        assert!(dto.prepare(LoadMode::Strict, &mut vec![]).is_ok());
    }

    #[test]
    fn test_root_relative_token_url() {
        let mut value = descriptor();
        value["apiTokenUrl"] = serde_json::json!("/oauth2/token");
        let mut dto = parse(value).unwrap();
        assert!(dto.prepare(LoadMode::Strict, &mut vec![]).is_ok());
    }

    #[test]
    fn test_round_trip() {
        let mut dto = parse(descriptor()).unwrap();
        dto.prepare(LoadMode::Strict, &mut vec![]).unwrap();
        let json = serde_json::to_string(&dto).unwrap();
        assert_eq!(serde_json::from_str::<ClientConfigDto>(&json).unwrap(), dto);
        let yaml = serde_yaml::to_string(&dto).unwrap();
        assert_eq!(serde_yaml::from_str::<ClientConfigDto>(&yaml).unwrap(), dto);
    }
}
