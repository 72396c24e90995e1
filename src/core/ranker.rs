use crate::domain::model::{Lead, Tier, TierCounts};
use std::cmp::Reverse;
use std::fmt::Write;

pub const TOP_LEADS: usize = 10;

/// 穩定排序：tier 由小到大，同 tier 評論數由多到少
pub fn sort_leads(leads: &mut [Lead]) {
    leads.sort_by_key(|lead| (lead.tier, Reverse(lead.review_count)));
}

pub fn tier_counts(leads: &[Lead]) -> TierCounts {
    leads.iter().fold(TierCounts::default(), |mut counts, lead| {
        match lead.tier {
            Tier::One => counts.tier1 += 1,
            Tier::Two => counts.tier2 += 1,
            Tier::Three => counts.tier3 += 1,
        }
        counts
    })
}

pub fn render_loaded(entries: usize) -> String {
    format!("Total scraped entries: {}\n", entries)
}

pub fn render_summary(total: usize, counts: &TierCounts) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Filtered leads (no website, has reviews, has contact): {}",
        total
    );
    for tier in Tier::ALL {
        let label = format!("Tier {} ({}):", tier, tier.label());
        let _ = writeln!(out, "  {:<33}{}", label, counts.get(tier));
    }
    out
}

/// 已排序清單中前 `limit` 筆 tier 1
pub fn top_tier1(leads: &[Lead], limit: usize) -> Vec<&Lead> {
    leads
        .iter()
        .filter(|lead| lead.tier == Tier::One)
        .take(limit)
        .collect()
}

pub fn render_top_leads(leads: &[Lead]) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "--- TOP {} LEADS (Tier 1, by reviews) ---", TOP_LEADS);

    for (i, lead) in top_tier1(leads, TOP_LEADS).into_iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, lead.title);
        let _ = writeln!(
            out,
            "   Phone: {} | Rating: {}⭐ ({} reviews)",
            lead.phone, lead.review_rating, lead.review_count
        );
        let _ = writeln!(out, "   Category: {}", lead.category);
        let _ = writeln!(out, "   Address: {}", lead.address);
        let _ = writeln!(out, "   Maps: {}", lead.google_maps_link);
        let _ = writeln!(out);
    }
    out
}
