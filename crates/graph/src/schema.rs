use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(rename = "type", default = "default_entity_type")]
    pub entity_type: String,
}

fn default_entity_type() -> String {
    "Entity".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub source: String,
    pub target: String,
    pub relationship: String,
}

/// The unit the compiler consumes. Either list may be absent in the
/// source document; neither failing the other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeGraphDocument {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_defaults_when_absent() {
        let entity: Entity = serde_json::from_str(r#"{"name": "Tesla"}"#).unwrap();
        assert_eq!(entity.entity_type, "Entity");
    }

    #[test]
    fn test_document_tolerates_missing_sections() {
        let doc: KnowledgeGraphDocument =
            serde_json::from_str(r#"{"entities": [{"name": "Tesla"}]}"#).unwrap();
        assert_eq!(doc.entities.len(), 1);
        assert!(doc.relationships.is_empty());

        let doc: KnowledgeGraphDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.entities.is_empty());
        assert!(doc.relationships.is_empty());
    }
}
