//! SQLite store for daily records.
//!
//! One row per calendar date, keyed by the date itself. The primary key is
//! the only concurrency guard the system needs: a second run inserting the
//! same date fails with [`StorageError::DuplicateDate`] instead of
//! corrupting state.

use std::path::Path;

use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use thiserror::Error;

use crate::models::DailyRecord;


/// Storage failures. Duplicate dates get their own variant because the
/// orchestrator treats them as an already-handled day, not a fault.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("a record for {0} already exists")]
    DuplicateDate(NaiveDate),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to create database directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },
}


/// Aggregate statistics over all recorded days.
#[derive(Debug, Clone, Default)]
pub struct StoreStats {
    pub total_days: i64,
    pub clean_days: i64,
    pub best_streak: i64,
    pub oldest_date: Option<String>,
    pub newest_date: Option<String>,
}


/// Handle to the record store. Opened once at process start and passed
/// into whatever needs it; there is no global connection.
pub struct Database {
    conn: Connection,
}


impl Database {
    /// Open (and if necessary create) the database at the given path.
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::CreateDir {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let conn = Connection::open(db_path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS daily_records (
                date TEXT PRIMARY KEY,
                aqi INTEGER NOT NULL,
                is_clean INTEGER NOT NULL,
                streak_days INTEGER NOT NULL,
                recorded_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self { conn })
    }

    /// Insert one record. The insert is a single atomic statement; a
    /// primary-key violation maps to [`StorageError::DuplicateDate`].
    pub fn insert(&self, record: &DailyRecord) -> Result<(), StorageError> {
        let result = self.conn.execute(
            "INSERT INTO daily_records (date, aqi, is_clean, streak_days, recorded_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.date_key(),
                record.aqi,
                record.is_clean,
                record.streak_days,
                Utc::now().to_rfc3339(),
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(StorageError::DuplicateDate(record.date))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// The record with the maximum date, if any.
    pub fn latest(&self) -> Result<Option<DailyRecord>, StorageError> {
        let record = self
            .conn
            .query_row(
                "SELECT date, aqi, is_clean, streak_days FROM daily_records
                 ORDER BY date DESC LIMIT 1",
                [],
                row_to_record,
            )
            .optional()?;

        Ok(record)
    }

    /// Whether a record for the exact date is present.
    pub fn exists(&self, date: NaiveDate) -> Result<bool, StorageError> {
        let found: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM daily_records WHERE date = ?1)",
            params![date.format("%Y-%m-%d").to_string()],
            |row| row.get(0),
        )?;

        Ok(found)
    }

    /// The most recent records, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<DailyRecord>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT date, aqi, is_clean, streak_days FROM daily_records
             ORDER BY date DESC LIMIT ?1",
        )?;

        let records = stmt
            .query_map(params![limit as i64], row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Aggregate statistics over all recorded days.
    pub fn stats(&self) -> Result<StoreStats, StorageError> {
        let stats = self.conn.query_row(
            "SELECT COUNT(*),
                    COALESCE(SUM(is_clean), 0),
                    COALESCE(MAX(streak_days), 0),
                    MIN(date),
                    MAX(date)
             FROM daily_records",
            [],
            |row| {
                Ok(StoreStats {
                    total_days: row.get(0)?,
                    clean_days: row.get(1)?,
                    best_streak: row.get(2)?,
                    oldest_date: row.get(3)?,
                    newest_date: row.get(4)?,
                })
            },
        )?;

        Ok(stats)
    }

    /// Delete all records. Never called by the daily task.
    pub fn reset(&self) -> Result<usize, StorageError> {
        let deleted = self.conn.execute("DELETE FROM daily_records", [])?;
        Ok(deleted)
    }
}


fn row_to_record(row: &Row) -> rusqlite::Result<DailyRecord> {
    let date_str: String = row.get(0)?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(DailyRecord {
        date,
        aqi: row.get(1)?,
        is_clean: row.get(2)?,
        streak_days: row.get(3)?,
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_record(day: u32, aqi: i64, streak_days: i64) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            aqi,
            is_clean: aqi <= 25,
            streak_days,
        }
    }

    fn open_test_db(tmp_dir: &TempDir) -> Database {
        Database::open(&tmp_dir.path().join("test.db")).unwrap()
    }

    #[test]
    fn test_open_creates_database() {
        let tmp_dir = TempDir::new().unwrap();
        let db_path = tmp_dir.path().join("nested").join("test.db");

        Database::open(&db_path).unwrap();
        assert!(db_path.exists());
    }

    #[test]
    fn test_empty_store() {
        let tmp_dir = TempDir::new().unwrap();
        let db = open_test_db(&tmp_dir);

        assert!(db.latest().unwrap().is_none());
        assert!(!db.exists(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()).unwrap());
        assert_eq!(db.stats().unwrap().total_days, 0);
    }

    #[test]
    fn test_insert_and_read_back() {
        let tmp_dir = TempDir::new().unwrap();
        let db = open_test_db(&tmp_dir);

        let record = test_record(6, 20, 1);
        db.insert(&record).unwrap();

        assert!(db.exists(record.date).unwrap());
        assert_eq!(db.latest().unwrap().unwrap(), record);
    }

    #[test]
    fn test_duplicate_date_is_rejected() {
        let tmp_dir = TempDir::new().unwrap();
        let db = open_test_db(&tmp_dir);

        db.insert(&test_record(6, 20, 1)).unwrap();
        let err = db.insert(&test_record(6, 30, 0)).unwrap_err();

        match err {
            StorageError::DuplicateDate(date) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
            }
            other => panic!("expected DuplicateDate, got {other:?}"),
        }

        // The first record is untouched
        assert_eq!(db.latest().unwrap().unwrap().aqi, 20);
    }

    #[test]
    fn test_latest_picks_maximum_date() {
        let tmp_dir = TempDir::new().unwrap();
        let db = open_test_db(&tmp_dir);

        db.insert(&test_record(6, 20, 1)).unwrap();
        db.insert(&test_record(8, 15, 3)).unwrap();
        db.insert(&test_record(7, 18, 2)).unwrap();

        assert_eq!(db.latest().unwrap().unwrap().streak_days, 3);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let tmp_dir = TempDir::new().unwrap();
        let db = open_test_db(&tmp_dir);

        for day in 1..=5 {
            db.insert(&test_record(day, 20, day as i64)).unwrap();
        }

        let recent = db.recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].date, NaiveDate::from_ymd_opt(2026, 8, 5).unwrap());
        assert_eq!(recent[2].date, NaiveDate::from_ymd_opt(2026, 8, 3).unwrap());
    }

    #[test]
    fn test_stats() {
        let tmp_dir = TempDir::new().unwrap();
        let db = open_test_db(&tmp_dir);

        db.insert(&test_record(1, 20, 1)).unwrap();
        db.insert(&test_record(2, 15, 2)).unwrap();
        db.insert(&test_record(3, 150, 0)).unwrap();

        let stats = db.stats().unwrap();
        assert_eq!(stats.total_days, 3);
        assert_eq!(stats.clean_days, 2);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.oldest_date.as_deref(), Some("2026-08-01"));
        assert_eq!(stats.newest_date.as_deref(), Some("2026-08-03"));
    }

    #[test]
    fn test_reset_drops_all_records() {
        let tmp_dir = TempDir::new().unwrap();
        let db = open_test_db(&tmp_dir);

        db.insert(&test_record(6, 20, 1)).unwrap();
        db.insert(&test_record(7, 15, 2)).unwrap();

        assert_eq!(db.reset().unwrap(), 2);
        assert!(db.latest().unwrap().is_none());
    }
}
