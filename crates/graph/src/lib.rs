pub mod cypher;
pub mod schema;
pub mod writer;

pub use cypher::{CypherGenerator, escape_quotes, normalize_edge_type, sanitize_label};
pub use schema::{Entity, KnowledgeGraphDocument, Relationship};
pub use writer::save_script;
