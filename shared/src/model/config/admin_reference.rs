use crate::error::WebConfError;
use crate::utils::{check_root_relative_path, CONSTANTS};
use crate::config_err_res;
use indexmap::IndexMap;

#[derive(Debug, Copy, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExtraFieldType {
    /// Lookup selector filled from a list endpoint.
    Reference,
}

/// One additional field injected into a generated admin form.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExtraFieldDto {
    #[serde(rename = "type")]
    pub field_type: ExtraFieldType,
    /// List endpoint backing the selector, relative to the api root.
    pub path: String,
    #[serde(default)]
    pub required: bool,
}

impl ExtraFieldDto {
    pub fn validate(&self, entity: &str, name: &str) -> Result<(), WebConfError> {
        if !CONSTANTS.re_entity_name.is_match(name) {
            return config_err_res!("adminReferences.{entity}.extraFields: invalid field name '{name}'");
        }
        check_root_relative_path(&format!("adminReferences.{entity}.extraFields.{name}.path"), &self.path)
    }
}

/// Admin form augmentation for one entity. `{}` declares the entity without extra fields.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct AdminReferenceDto {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub extra_fields: IndexMap<String, ExtraFieldDto>,
}

impl AdminReferenceDto {
    pub fn is_empty(&self) -> bool {
        self.extra_fields.is_empty()
    }

    pub fn prepare(&mut self) {
        for field in self.extra_fields.values_mut() {
            field.path = field.path.trim().to_string();
        }
    }

    pub fn validate(&self, entity: &str) -> Vec<Result<(), WebConfError>> {
        let mut results = Vec::with_capacity(self.extra_fields.len() + 1);
        if !CONSTANTS.re_entity_name.is_match(entity) {
            results.push(config_err_res!("adminReferences: invalid entity name '{entity}'"));
        }
        results.extend(self.extra_fields.iter().map(|(name, field)| field.validate(entity, name)));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::{AdminReferenceDto, ExtraFieldType};
    use indexmap::IndexMap;

    #[test]
    fn test_parse_references() {
        let json = r#"{
            "model": { "extraFields": { "vendor": { "type": "reference", "path": "/vendor/list", "required": true } } },
            "vendor": {},
            "network": {}
        }"#;
        let refs: IndexMap<String, AdminReferenceDto> = serde_json::from_str(json).unwrap();
        assert_eq!(refs.keys().collect::<Vec<_>>(), vec!["model", "vendor", "network"]);
        let vendor = &refs["model"].extra_fields["vendor"];
        assert_eq!(vendor.field_type, ExtraFieldType::Reference);
        assert_eq!(vendor.path, "/vendor/list");
        assert!(vendor.required);
        assert!(refs["vendor"].is_empty());
        assert!(refs.iter().all(|(entity, r)| r.validate(entity).iter().all(Result::is_ok)));
    }

    #[test]
    fn test_entity_names() {
        let json = r#"{ "extraFields": { "charge-point": { "type": "reference", "path": "/charge-point/list" } } }"#;
        let reference: AdminReferenceDto = serde_json::from_str(json).unwrap();
        assert!(reference.validate("charge-point").iter().all(Result::is_ok));
        assert!(reference.validate("charge.point").iter().all(Result::is_ok));
        let results = reference.validate("charge point");
        assert!(results[0].as_ref().unwrap_err().message.contains("invalid entity name 'charge point'"));
        assert!(AdminReferenceDto::default().validate("").iter().any(Result::is_err));
    }

    #[test]
    fn test_reject_unknown_field_type() {
        let json = r#"{ "extraFields": { "vendor": { "type": "select", "path": "/vendor/list" } } }"#;
        assert!(serde_json::from_str::<AdminReferenceDto>(json).is_err());
    }

    #[test]
    fn test_reject_relative_path() {
        let json = r#"{ "extraFields": { "vendor": { "type": "reference", "path": "vendor/list" } } }"#;
        let reference: AdminReferenceDto = serde_json::from_str(json).unwrap();
        assert!(!reference.extra_fields["vendor"].required);
        let results = reference.validate("model");
        assert_eq!(results.len(), 1);
        assert!(results[0].as_ref().unwrap_err().message.contains("adminReferences.model.extraFields.vendor.path"));
    }
}
