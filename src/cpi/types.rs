use crate::sort::{FieldValue, Sortable};
use serde::{Deserialize, Deserializer};
use std::borrow::Cow;

/// Design-time artifact categories shown as tabs in the artifacts pane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    IntegrationFlow,
    ValueMapping,
    MessageMapping,
    ScriptCollection,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::IntegrationFlow,
        ArtifactKind::ValueMapping,
        ArtifactKind::MessageMapping,
        ArtifactKind::ScriptCollection,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ArtifactKind::IntegrationFlow => "integration_flow",
            ArtifactKind::ValueMapping => "value_mapping",
            ArtifactKind::MessageMapping => "message_mapping",
            ArtifactKind::ScriptCollection => "script_collection",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::IntegrationFlow => "Integration flows",
            ArtifactKind::ValueMapping => "Value mappings",
            ArtifactKind::MessageMapping => "Message mappings",
            ArtifactKind::ScriptCollection => "Script collections",
        }
    }

    /// OData entity set holding artifacts of this kind under a package.
    pub fn entity_set(self) -> &'static str {
        match self {
            ArtifactKind::IntegrationFlow => "IntegrationDesigntimeArtifacts",
            ArtifactKind::ValueMapping => "ValueMappingDesigntimeArtifacts",
            ArtifactKind::MessageMapping => "MessageMappingDesigntimeArtifacts",
            ArtifactKind::ScriptCollection => "ScriptCollectionDesigntimeArtifacts",
        }
    }

    /// Path segment used by the tenant web UI for artifacts of this kind.
    pub fn web_segment(self) -> &'static str {
        match self {
            ArtifactKind::IntegrationFlow => "integrationflows",
            ArtifactKind::ValueMapping => "valuemappings",
            ArtifactKind::MessageMapping => "messagemappings",
            ArtifactKind::ScriptCollection => "scriptcollections",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ArtifactKind::IntegrationFlow => 0,
            ArtifactKind::ValueMapping => 1,
            ArtifactKind::MessageMapping => 2,
            ArtifactKind::ScriptCollection => 3,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContentPackage {
    #[serde(rename = "Id", deserialize_with = "nullable_string")]
    pub id: String,
    #[serde(deserialize_with = "nullable_string")]
    pub version: String,
    #[serde(deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(deserialize_with = "nullable_string")]
    pub short_text: String,
    #[serde(deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(deserialize_with = "nullable_string")]
    pub vendor: String,
    #[serde(deserialize_with = "nullable_bool")]
    pub partner_content: bool,
    #[serde(deserialize_with = "nullable_string")]
    pub mode: String,
    #[serde(deserialize_with = "nullable_bool")]
    pub update_available: bool,
    #[serde(deserialize_with = "nullable_string")]
    pub supported_platform: String,
    #[serde(deserialize_with = "nullable_string")]
    pub products: String,
    #[serde(deserialize_with = "nullable_string")]
    pub keywords: String,
    #[serde(deserialize_with = "nullable_string")]
    pub countries: String,
    #[serde(deserialize_with = "nullable_string")]
    pub industries: String,
    #[serde(deserialize_with = "nullable_string")]
    pub line_of_business: String,
    #[serde(rename = "ResourceId", deserialize_with = "nullable_string")]
    pub resource_id: String,
    #[serde(deserialize_with = "nullable_string")]
    pub created_by: String,
    #[serde(deserialize_with = "epoch_millis")]
    pub creation_date: i64,
    #[serde(deserialize_with = "nullable_string")]
    pub modified_by: String,
    #[serde(deserialize_with = "epoch_millis")]
    pub modified_date: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IntegrationArtifact {
    #[serde(rename = "Id", deserialize_with = "nullable_string")]
    pub id: String,
    #[serde(deserialize_with = "nullable_string")]
    pub version: String,
    #[serde(rename = "PackageId", deserialize_with = "nullable_string")]
    pub package_id: String,
    #[serde(deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(deserialize_with = "nullable_string")]
    pub created_by: String,
    #[serde(deserialize_with = "epoch_millis")]
    pub created_at: i64,
    #[serde(deserialize_with = "nullable_string")]
    pub modified_by: String,
    #[serde(deserialize_with = "epoch_millis")]
    pub modified_at: i64,
}

/// OData v2 collection envelope: `{"d": {"results": [...]}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ODataCollection<T> {
    #[serde(rename = "d")]
    pub root: ODataResults<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ODataResults<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

// The API sends timestamps as decimal strings; numbers, nulls and empty
// strings are tolerated.
fn epoch_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Raw::Num(n)) => Ok(n),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(0),
        Some(Raw::Text(s)) => s.trim().parse::<i64>().map_err(serde::de::Error::custom),
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

fn text(s: &str) -> Option<FieldValue<'_>> {
    Some(FieldValue::Text(Cow::Borrowed(s)))
}

impl Sortable for ContentPackage {
    const FIELDS: &'static [&'static str] = &[
        "ID",
        "Version",
        "Name",
        "ShortText",
        "Description",
        "Vendor",
        "PartnerContent",
        "Mode",
        "UpdateAvailable",
        "SupportedPlatform",
        "Products",
        "Keywords",
        "Countries",
        "Industries",
        "LineOfBusiness",
        "ResourceID",
        "CreatedBy",
        "CreationDate",
        "ModifiedBy",
        "ModifiedDate",
    ];

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "ID" => text(&self.id),
            "Version" => text(&self.version),
            "Name" => text(&self.name),
            "ShortText" => text(&self.short_text),
            "Description" => text(&self.description),
            "Vendor" => text(&self.vendor),
            "PartnerContent" => Some(FieldValue::Other(self.partner_content.to_string())),
            "Mode" => text(&self.mode),
            "UpdateAvailable" => Some(FieldValue::Other(self.update_available.to_string())),
            "SupportedPlatform" => text(&self.supported_platform),
            "Products" => text(&self.products),
            "Keywords" => text(&self.keywords),
            "Countries" => text(&self.countries),
            "Industries" => text(&self.industries),
            "LineOfBusiness" => text(&self.line_of_business),
            "ResourceID" => text(&self.resource_id),
            "CreatedBy" => text(&self.created_by),
            "CreationDate" => Some(FieldValue::Int(self.creation_date)),
            "ModifiedBy" => text(&self.modified_by),
            "ModifiedDate" => Some(FieldValue::Int(self.modified_date)),
            _ => None,
        }
    }
}

impl Sortable for IntegrationArtifact {
    const FIELDS: &'static [&'static str] = &[
        "ID",
        "Version",
        "PackageID",
        "Name",
        "Description",
        "CreatedBy",
        "CreatedAt",
        "ModifiedBy",
        "ModifiedAt",
    ];

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "ID" => text(&self.id),
            "Version" => text(&self.version),
            "PackageID" => text(&self.package_id),
            "Name" => text(&self.name),
            "Description" => text(&self.description),
            "CreatedBy" => text(&self.created_by),
            "CreatedAt" => Some(FieldValue::Int(self.created_at)),
            "ModifiedBy" => text(&self.modified_by),
            "ModifiedAt" => Some(FieldValue::Int(self.modified_at)),
            _ => None,
        }
    }
}
