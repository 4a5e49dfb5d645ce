use anyhow::{Context, Result};

use crate::schema::{Entity, KnowledgeGraphDocument, Relationship};

/// Node label: whitespace stripped so multi-word types stay one token;
/// falls back to `Entity` when nothing survives.
pub fn sanitize_label(raw: &str) -> String {
    let label: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if label.is_empty() {
        "Entity".to_string()
    } else {
        label
    }
}

/// Relationship type: spaces become underscores, upper-cased.
pub fn normalize_edge_type(raw: &str) -> String {
    raw.trim().replace(' ', "_").to_uppercase()
}

/// Escape the statement quote character so names embed safely.
pub fn escape_quotes(raw: &str) -> String {
    raw.replace('"', "\\\"")
}

/// Compiles a knowledge-graph document into a Cypher statement script:
/// one CREATE per entity, then one MATCH/MATCH/MERGE per relationship.
/// MERGE keeps edge creation idempotent under re-runs.
pub struct CypherGenerator;

impl CypherGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Compile a raw JSON document. Invalid JSON fails with the underlying
    /// parse message; there is no partial recovery.
    pub fn compile_str(&self, input: &str) -> Result<String> {
        let doc: KnowledgeGraphDocument =
            serde_json::from_str(input).context("error parsing JSON")?;
        Ok(self.compile(&doc))
    }

    /// Statements joined with `;\n`, node statements before relationship
    /// statements, the whole script closed with `;`. Empty sections emit
    /// nothing, so an empty document compiles to the empty script.
    pub fn compile(&self, doc: &KnowledgeGraphDocument) -> String {
        let mut statements = self.entity_statements(&doc.entities);
        statements.extend(self.relationship_statements(&doc.relationships));

        if statements.is_empty() {
            return String::new();
        }
        format!("{};", statements.join(";\n"))
    }

    fn entity_statements(&self, entities: &[Entity]) -> Vec<String> {
        entities
            .iter()
            .map(|entity| {
                format!(
                    r#"CREATE (n:{} {{ name: "{}" }})"#,
                    sanitize_label(&entity.entity_type),
                    escape_quotes(entity.name.trim()),
                )
            })
            .collect()
    }

    fn relationship_statements(&self, relationships: &[Relationship]) -> Vec<String> {
        relationships
            .iter()
            .map(|rel| {
                format!(
                    "MATCH (e1 {{name: \"{}\"}})\nMATCH (e2 {{name: \"{}\"}})\nMERGE (e1)-[:{}]->(e2)",
                    escape_quotes(rel.source.trim()),
                    escape_quotes(rel.target.trim()),
                    normalize_edge_type(&rel.relationship),
                )
            })
            .collect()
    }
}

impl Default for CypherGenerator {
    fn default() -> Self {
        Self::new()
    }
}
