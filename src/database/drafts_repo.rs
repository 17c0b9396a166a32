// Review drafts repository for tara-review
// Handles autosave and reload of per-session review drafts

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::review::ReviewDraft;

use super::DatabaseManager;

impl DatabaseManager {
    /// Save (or overwrite) the draft for its session - the autosave path
    pub fn save_draft(&self, draft: &ReviewDraft) -> Result<()> {
        self.with_connection(|conn| save_draft_impl(conn, draft))
    }

    /// Load the draft for a session, if one was saved
    pub fn load_draft(&self, session_id: &str) -> Result<Option<ReviewDraft>> {
        self.with_connection(|conn| load_draft_impl(conn, session_id))
    }

    /// Delete the draft for a session
    pub fn delete_draft(&self, session_id: &str) -> Result<()> {
        self.with_connection(|conn| delete_draft_impl(conn, session_id))
    }

    /// List (session id, last saved) for all stored drafts, most recent first
    pub fn list_drafts(&self) -> Result<Vec<(String, String)>> {
        self.with_connection(list_drafts_impl)
    }
}

fn save_draft_impl(conn: &Connection, draft: &ReviewDraft) -> Result<()> {
    let payload = serde_json::to_string(draft)
        .context("Failed to serialize draft")?;

    conn.execute(
        r#"
        INSERT INTO review_drafts (session_id, draft_id, last_saved, rationale, payload, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, datetime('now'))
        ON CONFLICT(session_id) DO UPDATE SET
            draft_id = excluded.draft_id,
            last_saved = excluded.last_saved,
            rationale = excluded.rationale,
            payload = excluded.payload,
            updated_at = excluded.updated_at
        "#,
        params![
            draft.session_id,
            draft.id,
            draft.last_saved.to_rfc3339(),
            draft.rationale,
            payload,
        ],
    ).context("Failed to save draft")?;

    Ok(())
}

fn load_draft_impl(conn: &Connection, session_id: &str) -> Result<Option<ReviewDraft>> {
    let result = conn.query_row(
        "SELECT payload FROM review_drafts WHERE session_id = ?",
        params![session_id],
        |row| row.get::<_, String>(0),
    );

    match result {
        Ok(payload) => {
            let draft = serde_json::from_str(&payload)
                .context("Failed to deserialize draft payload")?;
            Ok(Some(draft))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e).context("Failed to load draft"),
    }
}

fn delete_draft_impl(conn: &Connection, session_id: &str) -> Result<()> {
    conn.execute(
        "DELETE FROM review_drafts WHERE session_id = ?",
        params![session_id],
    ).context("Failed to delete draft")?;
    Ok(())
}

fn list_drafts_impl(conn: &Connection) -> Result<Vec<(String, String)>> {
    let mut stmt = conn.prepare(
        "SELECT session_id, last_saved FROM review_drafts ORDER BY last_saved DESC",
    ).context("Failed to prepare list_drafts query")?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    }).context("Failed to query drafts")?;

    rows.collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to collect drafts")
}
