use crate::cpi::{ArtifactKind, ContentPackage, IntegrationArtifact};
use chrono::DateTime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

/// Key/value table for the currently selected record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributePanel {
    attributes: Vec<Attribute>,
}

impl AttributePanel {
    /// Replaces the whole table.
    pub fn set(&mut self, attributes: Vec<Attribute>) {
        self.attributes = attributes;
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

pub fn package_attributes(pkg: &ContentPackage) -> Vec<Attribute> {
    vec![
        Attribute::new("ID", &pkg.id),
        Attribute::new("Version", &pkg.version),
        Attribute::new("Name", &pkg.name),
        Attribute::new("Short text", &pkg.short_text),
        Attribute::new("Vendor", &pkg.vendor),
        Attribute::new("Mode", &pkg.mode),
        Attribute::new("Created by", &pkg.created_by),
        Attribute::new("Created at", iso8601_zulu(pkg.creation_date)),
        Attribute::new("Modified by", &pkg.modified_by),
        Attribute::new("Modified at", iso8601_zulu(pkg.modified_date)),
    ]
}

pub fn artifact_attributes(kind: ArtifactKind, artifact: &IntegrationArtifact) -> Vec<Attribute> {
    let mut attrs = vec![
        Attribute::new("ID", &artifact.id),
        Attribute::new("Version", &artifact.version),
        Attribute::new("Name", &artifact.name),
        Attribute::new("Description", &artifact.description),
    ];
    // only integration flows carry meaningful audit fields
    if kind == ArtifactKind::IntegrationFlow {
        attrs.extend([
            Attribute::new("Created by", &artifact.created_by),
            Attribute::new("Created at", iso8601_zulu(artifact.created_at)),
            Attribute::new("Modified by", &artifact.modified_by),
            Attribute::new("Modified at", iso8601_zulu(artifact.modified_at)),
        ]);
    }
    attrs
}

/// Epoch milliseconds as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn iso8601_zulu(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_millis_as_zulu() {
        assert_eq!(iso8601_zulu(1_704_164_645_000), "2024-01-02T03:04:05Z");
        assert_eq!(iso8601_zulu(0), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn package_attribute_order() {
        let pkg = ContentPackage {
            id: "Pkg1".into(),
            name: "First".into(),
            vendor: "ACME".into(),
            creation_date: 1_704_164_645_000,
            ..Default::default()
        };
        let attrs = package_attributes(&pkg);
        let keys: Vec<&str> = attrs.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "ID",
                "Version",
                "Name",
                "Short text",
                "Vendor",
                "Mode",
                "Created by",
                "Created at",
                "Modified by",
                "Modified at"
            ]
        );
        assert_eq!(attrs[4].value, "ACME");
        assert_eq!(attrs[7].value, "2024-01-02T03:04:05Z");
    }

    #[test]
    fn integration_flows_get_audit_fields() {
        let a = IntegrationArtifact {
            id: "F1".into(),
            created_by: "alice".into(),
            ..Default::default()
        };
        let flow = artifact_attributes(ArtifactKind::IntegrationFlow, &a);
        assert_eq!(flow.len(), 8);
        assert_eq!(flow[4], Attribute::new("Created by", "alice"));

        for kind in [
            ArtifactKind::ValueMapping,
            ArtifactKind::MessageMapping,
            ArtifactKind::ScriptCollection,
        ] {
            let keys: Vec<String> = artifact_attributes(kind, &a)
                .into_iter()
                .map(|a| a.key)
                .collect();
            assert_eq!(keys, vec!["ID", "Version", "Name", "Description"]);
        }
    }

    #[test]
    fn panel_is_replaced_wholesale() {
        let mut panel = AttributePanel::default();
        panel.set(vec![Attribute::new("A", "1"), Attribute::new("B", "2")]);
        panel.set(vec![Attribute::new("C", "3")]);
        assert_eq!(panel.attributes().len(), 1);
        assert_eq!(panel.value("C"), Some("3"));
        assert_eq!(panel.value("A"), None);
    }
}
