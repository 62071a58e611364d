use crate::model::macros;
use shared::model::{AdminReferenceDto, ExtraFieldDto, ExtraFieldType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraField {
    pub name: String,
    pub field_type: ExtraFieldType,
    pub path: String,
    pub required: bool,
}

impl From<(&String, &ExtraFieldDto)> for ExtraField {
    fn from((name, dto): (&String, &ExtraFieldDto)) -> Self {
        Self {
            name: name.clone(),
            field_type: dto.field_type,
            path: dto.path.clone(),
            required: dto.required,
        }
    }
}

impl From<&ExtraField> for ExtraFieldDto {
    fn from(instance: &ExtraField) -> Self {
        Self {
            field_type: instance.field_type,
            path: instance.path.clone(),
            required: instance.required,
        }
    }
}

/// Extra form fields of one admin entity, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminReference {
    pub extra_fields: Vec<ExtraField>,
}

impl AdminReference {
    pub fn required_fields(&self) -> impl Iterator<Item = &ExtraField> {
        self.extra_fields.iter().filter(|f| f.required)
    }
}

macros::from_impl!(AdminReference);
impl From<&AdminReferenceDto> for AdminReference {
    fn from(dto: &AdminReferenceDto) -> Self {
        Self { extra_fields: dto.extra_fields.iter().map(ExtraField::from).collect() }
    }
}
impl From<&AdminReference> for AdminReferenceDto {
    fn from(instance: &AdminReference) -> Self {
        Self {
            extra_fields: instance.extra_fields.iter()
                .map(|f| (f.name.clone(), ExtraFieldDto::from(f)))
                .collect(),
        }
    }
}
