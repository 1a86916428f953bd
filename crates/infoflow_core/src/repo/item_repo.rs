//! Information-item repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the flattened `information_items` table.
//! - Encode/decode per-phase toolflow values between the tagged domain
//!   variant and the flattened text columns.
//!
//! # Invariants
//! - One row per item, keyed by slug.
//! - A single-tool toolflow entry is stored as the plain slug; a
//!   multi-tool entry is stored as a JSON array. Slugs never start with
//!   `[`, so the two encodings cannot collide.

use crate::model::item::{InformationItem, PhaseMethods, Toolflow, ToolflowEntry};
use crate::model::phase::{InformationType, Method, Phase};
use crate::model::ValidationError;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const ITEM_SELECT_SQL: &str = "SELECT
    slug,
    name,
    info_type,
    collect_method,
    retrieve_method,
    consume_method,
    extract_method,
    refine_method,
    collect_toolflow,
    retrieve_toolflow,
    consume_toolflow,
    extract_toolflow,
    refine_toolflow
FROM information_items";

/// Repository interface for information-item CRUD operations.
pub trait ItemRepository {
    fn create_item(&self, item: &InformationItem) -> RepoResult<String>;
    fn update_item(&self, item: &InformationItem) -> RepoResult<()>;
    fn get_item(&self, slug: &str) -> RepoResult<Option<InformationItem>>;
    fn list_items(&self) -> RepoResult<Vec<InformationItem>>;
    fn delete_item(&self, slug: &str) -> RepoResult<()>;
}

/// SQLite-backed information-item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn existing_name(&self, slug: &str) -> RepoResult<Option<String>> {
        let name = self
            .conn
            .query_row(
                "SELECT name FROM information_items WHERE slug = ?1;",
                [slug],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(name)
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn create_item(&self, item: &InformationItem) -> RepoResult<String> {
        item.validate()?;
        let slug = item.slug();

        if let Some(existing_name) = self.existing_name(&slug)? {
            return Err(RepoError::Validation(ValidationError::DuplicateSlug {
                slug,
                existing_name,
                new_name: item.name.clone(),
            }));
        }

        self.conn.execute(
            "INSERT INTO information_items (
                slug,
                name,
                info_type,
                collect_method,
                retrieve_method,
                consume_method,
                extract_method,
                refine_method,
                collect_toolflow,
                retrieve_toolflow,
                consume_toolflow,
                extract_toolflow,
                refine_toolflow
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13);",
            params![
                slug,
                item.name.as_str(),
                item.info_type.as_str(),
                item.methods.collect.map(Method::as_str),
                item.methods.retrieve.map(Method::as_str),
                item.methods.consume.map(Method::as_str),
                item.methods.extract.map(Method::as_str),
                item.methods.refine.map(Method::as_str),
                encode_toolflow_entry(item.toolflow.collect.as_ref())?,
                encode_toolflow_entry(item.toolflow.retrieve.as_ref())?,
                encode_toolflow_entry(item.toolflow.consume.as_ref())?,
                encode_toolflow_entry(item.toolflow.extract.as_ref())?,
                encode_toolflow_entry(item.toolflow.refine.as_ref())?,
            ],
        )?;

        Ok(slug)
    }

    fn update_item(&self, item: &InformationItem) -> RepoResult<()> {
        item.validate()?;
        let slug = item.slug();

        let changed = self.conn.execute(
            "UPDATE information_items
             SET
                name = ?1,
                info_type = ?2,
                collect_method = ?3,
                retrieve_method = ?4,
                consume_method = ?5,
                extract_method = ?6,
                refine_method = ?7,
                collect_toolflow = ?8,
                retrieve_toolflow = ?9,
                consume_toolflow = ?10,
                extract_toolflow = ?11,
                refine_toolflow = ?12
             WHERE slug = ?13;",
            params![
                item.name.as_str(),
                item.info_type.as_str(),
                item.methods.collect.map(Method::as_str),
                item.methods.retrieve.map(Method::as_str),
                item.methods.consume.map(Method::as_str),
                item.methods.extract.map(Method::as_str),
                item.methods.refine.map(Method::as_str),
                encode_toolflow_entry(item.toolflow.collect.as_ref())?,
                encode_toolflow_entry(item.toolflow.retrieve.as_ref())?,
                encode_toolflow_entry(item.toolflow.consume.as_ref())?,
                encode_toolflow_entry(item.toolflow.extract.as_ref())?,
                encode_toolflow_entry(item.toolflow.refine.as_ref())?,
                slug,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "information item",
                slug,
            });
        }

        Ok(())
    }

    fn get_item(&self, slug: &str) -> RepoResult<Option<InformationItem>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE slug = ?1;"))?;
        let mut rows = stmt.query([slug])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_item_row(row)?));
        }

        Ok(None)
    }

    fn list_items(&self) -> RepoResult<Vec<InformationItem>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} ORDER BY slug ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }

    fn delete_item(&self, slug: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM information_items WHERE slug = ?1;", [slug])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "information item",
                slug: slug.to_string(),
            });
        }

        Ok(())
    }
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<InformationItem> {
    let type_text: String = row.get("info_type")?;
    let info_type = InformationType::parse(&type_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid information type `{type_text}` in information_items.info_type"
        ))
    })?;

    let methods = PhaseMethods {
        collect: parse_method_column(row, "collect_method")?,
        retrieve: parse_method_column(row, "retrieve_method")?,
        consume: parse_method_column(row, "consume_method")?,
        extract: parse_method_column(row, "extract_method")?,
        refine: parse_method_column(row, "refine_method")?,
    };

    let mut toolflow = Toolflow::default();
    for (phase, column) in [
        (Phase::Collect, "collect_toolflow"),
        (Phase::Retrieve, "retrieve_toolflow"),
        (Phase::Consume, "consume_toolflow"),
        (Phase::Extract, "extract_toolflow"),
        (Phase::Refine, "refine_toolflow"),
    ] {
        let text: Option<String> = row.get(column)?;
        toolflow.set(phase, decode_toolflow_entry(text.as_deref(), column)?);
    }

    Ok(InformationItem {
        name: row.get("name")?,
        info_type,
        methods,
        toolflow,
    })
}

fn parse_method_column(row: &Row<'_>, column: &str) -> RepoResult<Option<Method>> {
    match row.get::<_, Option<String>>(column)? {
        Some(value) => Method::parse(&value)
            .map(Some)
            .ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "invalid method `{value}` in information_items.{column}"
                ))
            }),
        None => Ok(None),
    }
}

fn encode_toolflow_entry(entry: Option<&ToolflowEntry>) -> RepoResult<Option<String>> {
    match entry {
        None => Ok(None),
        Some(ToolflowEntry::Single(tool)) => Ok(Some(tool.clone())),
        Some(ToolflowEntry::Multiple(tools)) => serde_json::to_string(tools)
            .map(Some)
            .map_err(|err| RepoError::InvalidData(format!("toolflow encode: {err}"))),
    }
}

fn decode_toolflow_entry(
    text: Option<&str>,
    column: &str,
) -> RepoResult<Option<ToolflowEntry>> {
    let Some(text) = text else {
        return Ok(None);
    };

    if text.trim_start().starts_with('[') {
        let tools: Vec<String> = serde_json::from_str(text).map_err(|err| {
            RepoError::InvalidData(format!(
                "invalid toolflow list `{text}` in information_items.{column}: {err}"
            ))
        })?;
        if tools.is_empty() {
            return Ok(None);
        }
        return Ok(Some(ToolflowEntry::Multiple(tools)));
    }

    Ok(Some(ToolflowEntry::Single(text.to_string())))
}
