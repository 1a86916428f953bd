//! Tool repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the flattened `tools` table.
//! - Keep SQL and `{phase}_{attribute}` flattening details inside the
//!   persistence boundary.
//!
//! # Invariants
//! - One row per tool, keyed by slug.
//! - Organization systems are stored as a JSON-encoded text column.

use crate::model::phase::{OrganizationSystem, PhaseQuality};
use crate::model::tool::{PhaseNotes, PhaseQualities, Tool};
use crate::model::ValidationError;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const TOOL_SELECT_SQL: &str = "SELECT
    slug,
    name,
    organization_system,
    collect_quality,
    retrieve_quality,
    consume_quality,
    extract_quality,
    refine_quality,
    collect_note,
    retrieve_note,
    consume_note,
    extract_note,
    refine_note
FROM tools";

/// Repository interface for tool CRUD operations.
pub trait ToolRepository {
    fn create_tool(&self, tool: &Tool) -> RepoResult<String>;
    fn update_tool(&self, tool: &Tool) -> RepoResult<()>;
    fn get_tool(&self, slug: &str) -> RepoResult<Option<Tool>>;
    fn list_tools(&self) -> RepoResult<Vec<Tool>>;
    fn delete_tool(&self, slug: &str) -> RepoResult<()>;
}

/// SQLite-backed tool repository.
pub struct SqliteToolRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteToolRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn existing_name(&self, slug: &str) -> RepoResult<Option<String>> {
        let name = self
            .conn
            .query_row("SELECT name FROM tools WHERE slug = ?1;", [slug], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(name)
    }
}

impl ToolRepository for SqliteToolRepository<'_> {
    fn create_tool(&self, tool: &Tool) -> RepoResult<String> {
        tool.validate()?;
        let slug = tool.slug();

        if let Some(existing_name) = self.existing_name(&slug)? {
            return Err(RepoError::Validation(ValidationError::DuplicateSlug {
                slug,
                existing_name,
                new_name: tool.name.clone(),
            }));
        }

        self.conn.execute(
            "INSERT INTO tools (
                slug,
                name,
                organization_system,
                collect_quality,
                retrieve_quality,
                consume_quality,
                extract_quality,
                refine_quality,
                collect_note,
                retrieve_note,
                consume_note,
                extract_note,
                refine_note
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13);",
            params![
                slug,
                tool.name.as_str(),
                encode_org_systems(&tool.organization_systems)?,
                tool.quality.collect.as_str(),
                tool.quality.retrieve.as_str(),
                tool.quality.consume.as_str(),
                tool.quality.extract.as_str(),
                tool.quality.refine.as_str(),
                tool.notes.collect.as_deref(),
                tool.notes.retrieve.as_deref(),
                tool.notes.consume.as_deref(),
                tool.notes.extract.as_deref(),
                tool.notes.refine.as_deref(),
            ],
        )?;

        Ok(slug)
    }

    fn update_tool(&self, tool: &Tool) -> RepoResult<()> {
        tool.validate()?;
        let slug = tool.slug();

        let changed = self.conn.execute(
            "UPDATE tools
             SET
                name = ?1,
                organization_system = ?2,
                collect_quality = ?3,
                retrieve_quality = ?4,
                consume_quality = ?5,
                extract_quality = ?6,
                refine_quality = ?7,
                collect_note = ?8,
                retrieve_note = ?9,
                consume_note = ?10,
                extract_note = ?11,
                refine_note = ?12
             WHERE slug = ?13;",
            params![
                tool.name.as_str(),
                encode_org_systems(&tool.organization_systems)?,
                tool.quality.collect.as_str(),
                tool.quality.retrieve.as_str(),
                tool.quality.consume.as_str(),
                tool.quality.extract.as_str(),
                tool.quality.refine.as_str(),
                tool.notes.collect.as_deref(),
                tool.notes.retrieve.as_deref(),
                tool.notes.consume.as_deref(),
                tool.notes.extract.as_deref(),
                tool.notes.refine.as_deref(),
                slug,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "tool",
                slug,
            });
        }

        Ok(())
    }

    fn get_tool(&self, slug: &str) -> RepoResult<Option<Tool>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TOOL_SELECT_SQL} WHERE slug = ?1;"))?;
        let mut rows = stmt.query([slug])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_tool_row(row)?));
        }

        Ok(None)
    }

    fn list_tools(&self) -> RepoResult<Vec<Tool>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TOOL_SELECT_SQL} ORDER BY slug ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut tools = Vec::new();

        while let Some(row) = rows.next()? {
            tools.push(parse_tool_row(row)?);
        }

        Ok(tools)
    }

    fn delete_tool(&self, slug: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tools WHERE slug = ?1;", [slug])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "tool",
                slug: slug.to_string(),
            });
        }

        Ok(())
    }
}

fn parse_tool_row(row: &Row<'_>) -> RepoResult<Tool> {
    let quality = PhaseQualities {
        collect: parse_quality_column(row, "collect_quality")?,
        retrieve: parse_quality_column(row, "retrieve_quality")?,
        consume: parse_quality_column(row, "consume_quality")?,
        extract: parse_quality_column(row, "extract_quality")?,
        refine: parse_quality_column(row, "refine_quality")?,
    };

    let notes = PhaseNotes {
        collect: row.get("collect_note")?,
        retrieve: row.get("retrieve_note")?,
        consume: row.get("consume_note")?,
        extract: row.get("extract_note")?,
        refine: row.get("refine_note")?,
    };

    let org_text: String = row.get("organization_system")?;
    let organization_systems = decode_org_systems(&org_text)?;

    Ok(Tool {
        name: row.get("name")?,
        organization_systems,
        quality,
        notes,
    })
}

fn parse_quality_column(row: &Row<'_>, column: &str) -> RepoResult<PhaseQuality> {
    let value: String = row.get(column)?;
    PhaseQuality::parse(&value).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid quality `{value}` in tools.{column}"))
    })
}

fn encode_org_systems(systems: &[OrganizationSystem]) -> RepoResult<String> {
    let values: Vec<&str> = systems.iter().map(|system| system.as_str()).collect();
    serde_json::to_string(&values)
        .map_err(|err| RepoError::InvalidData(format!("organization systems encode: {err}")))
}

fn decode_org_systems(text: &str) -> RepoResult<Vec<OrganizationSystem>> {
    let values: Vec<String> = serde_json::from_str(text).map_err(|err| {
        RepoError::InvalidData(format!(
            "invalid organization_system column `{text}`: {err}"
        ))
    })?;
    values
        .iter()
        .map(|value| {
            OrganizationSystem::parse(value).ok_or_else(|| {
                RepoError::InvalidData(format!("unknown organization system `{value}`"))
            })
        })
        .collect()
}
