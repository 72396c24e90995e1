use crate::domain::model::{FilterStats, RawRecord};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    HasWebsite,
    NoReviews,
    NoContact,
}

/// 三個納入條件，依序檢查並回傳第一個不符合的原因
pub fn check(record: &RawRecord) -> Result<(), Rejection> {
    if !record.web_site().is_empty() {
        return Err(Rejection::HasWebsite);
    }
    if record.review_count() < 1 {
        return Err(Rejection::NoReviews);
    }
    if record.phone().is_empty() && record.emails().is_empty() {
        return Err(Rejection::NoContact);
    }
    Ok(())
}

pub fn dedup_key(record: &RawRecord) -> String {
    format!("{}|{}", record.title(), record.phone())
}

/// 保留符合條件的紀錄（維持原順序）；重複的 key 只留第一筆
pub fn filter_records(records: &[RawRecord]) -> (Vec<&RawRecord>, FilterStats) {
    let mut stats = FilterStats::default();
    let mut seen = HashSet::new();
    let mut kept = Vec::new();

    for record in records {
        match check(record) {
            Err(Rejection::HasWebsite) => stats.has_website += 1,
            Err(Rejection::NoReviews) => stats.no_reviews += 1,
            Err(Rejection::NoContact) => stats.no_contact += 1,
            Ok(()) => {
                if seen.insert(dedup_key(record)) {
                    kept.push(record);
                } else {
                    stats.duplicates += 1;
                }
            }
        }
    }

    stats.kept = kept.len();
    (kept, stats)
}
