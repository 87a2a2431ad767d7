// src/domain/classifier.rs

use crate::domain::campaign::{Bucket, Campaign, CampaignRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days from `today` to `created_on`, rounded up.
///
/// A campaign 1 ms in the future is 1 day away; one that started earlier
/// today (less than a full day ago) is 0 days away.
pub fn day_diff(created_on: DateTime<Utc>, today: DateTime<Utc>) -> i64 {
    let ms = (created_on - today).num_milliseconds();
    // Integer division truncates toward zero, which is already the ceiling for negatives.
    let days = ms / MS_PER_DAY;
    if ms % MS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    IndexOutOfBounds {
        bucket: Bucket,
        index: usize,
        len: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::IndexOutOfBounds { bucket, index, len } => write!(
                f,
                "no {bucket} campaign at index {index} (bucket holds {len})"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// The three campaign lists. Every campaign lives in exactly one of them,
/// and its `kind` always names the list it is in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CampaignBoard {
    upcoming: Vec<Campaign>,
    live: Vec<Campaign>,
    past: Vec<Campaign>,
}

/// Partition `records` by their day difference to `today`.
/// Relative order inside each bucket follows the input order.
pub fn classify(records: Vec<CampaignRecord>, today: DateTime<Utc>) -> CampaignBoard {
    let mut board = CampaignBoard::default();

    for record in records {
        let diff = day_diff(record.created_on, today);
        let campaign = Campaign::new(record, diff);
        board.bucket_mut(campaign.kind).push(campaign);
    }

    debug!(
        upcoming = board.upcoming.len(),
        live = board.live.len(),
        past = board.past.len(),
        "classified campaigns"
    );

    board
}

impl CampaignBoard {
    pub fn bucket(&self, bucket: Bucket) -> &[Campaign] {
        match bucket {
            Bucket::Upcoming => &self.upcoming,
            Bucket::Live => &self.live,
            Bucket::Past => &self.past,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<Campaign> {
        match bucket {
            Bucket::Upcoming => &mut self.upcoming,
            Bucket::Live => &mut self.live,
            Bucket::Past => &mut self.past,
        }
    }

    pub fn get(&self, bucket: Bucket, index: usize) -> Result<&Campaign, BoardError> {
        let list = self.bucket(bucket);
        list.get(index).ok_or(BoardError::IndexOutOfBounds {
            bucket,
            index,
            len: list.len(),
        })
    }

    fn get_mut(&mut self, bucket: Bucket, index: usize) -> Result<&mut Campaign, BoardError> {
        let list = self.bucket_mut(bucket);
        let len = list.len();
        list.get_mut(index)
            .ok_or(BoardError::IndexOutOfBounds { bucket, index, len })
    }

    pub fn len(&self) -> usize {
        self.upcoming.len() + self.live.len() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write a new scheduled date without re-bucketing; follow with [`reschedule`](Self::reschedule).
    pub fn set_created_on(
        &mut self,
        bucket: Bucket,
        index: usize,
        created_on: DateTime<Utc>,
    ) -> Result<(), BoardError> {
        self.get_mut(bucket, index)?.record.created_on = created_on;
        Ok(())
    }

    /// Recompute one campaign's day difference and move it if it crossed a bucket boundary.
    ///
    /// Upcoming leaves on `diff <= 0`, past leaves on `diff >= 0`, and live leaves on any
    /// nonzero diff. A moved campaign is appended to its new bucket. Returns the bucket
    /// the campaign ends up in. An out-of-range index changes nothing.
    pub fn reschedule(
        &mut self,
        bucket: Bucket,
        index: usize,
        today: DateTime<Utc>,
    ) -> Result<Bucket, BoardError> {
        let campaign = self.get_mut(bucket, index)?;
        let diff = day_diff(campaign.record.created_on, today);

        let leaves = match bucket {
            Bucket::Upcoming => diff <= 0,
            Bucket::Past => diff >= 0,
            Bucket::Live => diff != 0,
        };

        if !leaves {
            campaign.time_diff = diff;
            debug!(%bucket, index, diff, "campaign stays in place");
            return Ok(bucket);
        }

        let mut campaign = self.bucket_mut(bucket).remove(index);
        let target = Bucket::for_diff(diff);
        campaign.time_diff = diff;
        campaign.kind = target;

        info!(
            name = %campaign.record.name,
            from = %bucket,
            to = %target,
            diff,
            "campaign rescheduled"
        );

        self.bucket_mut(target).push(campaign);
        Ok(target)
    }

    /// Re-evaluate every campaign against a new "today".
    pub fn refresh(&mut self, today: DateTime<Utc>) {
        let records = std::mem::take(self).into_records();
        *self = classify(records, today);
    }

    /// All records in upcoming, live, past order.
    pub fn into_records(self) -> Vec<CampaignRecord> {
        self.upcoming
            .into_iter()
            .chain(self.live)
            .chain(self.past)
            .map(Campaign::into_record)
            .collect()
    }
}
