//! Daily task orchestration: fetch, check, compute, persist, publish.
//!
//! One invocation is one sequential pipeline. There are no retries; every
//! invocation is independent, and the date primary key makes repeat runs
//! for the same day harmless.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use crate::aqi::FetchError;
use crate::models::DailyRecord;
use crate::social::{rules_text, status_text, PostId, PublishError};
use crate::storage::{Database, StorageError};
use crate::streak;


/// Measurement source seam. The production implementation is
/// [`crate::aqi::AqiClient`]; tests substitute a fake.
pub trait AqiProvider {
    fn current_aqi(&self) -> Result<i64, FetchError>;
}


/// Publishing seam. The production implementation is
/// [`crate::social::SocialClient`]; tests substitute a fake.
pub trait StatusPublisher {
    fn post(&self, text: &str) -> Result<PostId, PublishError>;
    fn reply(&self, text: &str, to: &PostId) -> Result<PostId, PublishError>;
}


/// A step failed and the run is over. Which step matters to the caller:
/// fetch failures are transient and self-healing, storage and publish
/// failures should show up as failed runs.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("failed to fetch today's AQI: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to publish status: {0}")]
    Publish(#[from] PublishError),
}


/// How a successful run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// Record persisted and status posted. `rules_posted` is false when
    /// the threaded rules reply failed; the status itself is public.
    Posted {
        record: DailyRecord,
        post_id: PostId,
        rules_posted: bool,
    },
    /// A record for the date already exists; nothing was written or
    /// published by this run.
    AlreadyRecorded { date: NaiveDate },
}


/// Run the daily task once for the given date.
///
/// Persistence happens before the publish attempt; a persisted record is
/// never rolled back when publishing fails.
pub fn run_once(
    store: &Database,
    provider: &dyn AqiProvider,
    publisher: &dyn StatusPublisher,
    today: NaiveDate,
) -> Result<RunOutcome, TaskError> {
    let aqi = provider.current_aqi()?;
    info!(date = %today, aqi, "fetched AQI reading");

    if store.exists(today)? {
        info!(date = %today, "record already exists, skipping");
        return Ok(RunOutcome::AlreadyRecorded { date: today });
    }

    let previous_streak = store.latest()?.map(|r| r.streak_days).unwrap_or(0);
    let update = streak::advance(aqi, previous_streak);
    let record = DailyRecord {
        date: today,
        aqi,
        is_clean: update.is_clean,
        streak_days: update.streak_days,
    };

    match store.insert(&record) {
        Ok(()) => {}
        // Lost the insert race with a concurrent run; that run owns today's post.
        Err(StorageError::DuplicateDate(date)) => {
            warn!(%date, "concurrent run recorded today first, skipping publish");
            return Ok(RunOutcome::AlreadyRecorded { date });
        }
        Err(e) => return Err(e.into()),
    }
    info!(date = %today, streak = record.streak_days, clean = record.is_clean, "record persisted");

    let post_id = publisher.post(&status_text(aqi, previous_streak, update))?;
    info!(post_id = %post_id.0, "status posted");

    let rules_posted = match publisher.reply(&rules_text(), &post_id) {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, "rules reply failed; status post is already public");
            false
        }
    };

    Ok(RunOutcome::Posted {
        record,
        post_id,
        rules_posted,
    })
}
