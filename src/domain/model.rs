use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// 爬蟲輸出的一筆原始資料，欄位不固定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    pub data: Map<String, Value>,
}

impl RawRecord {
    /// 字串欄位；缺少、null 或非字串都視為空字串
    pub fn text(&self, key: &str) -> &str {
        self.data.get(key).and_then(Value::as_str).unwrap_or("")
    }

    pub fn title(&self) -> &str {
        self.text("title").trim()
    }

    pub fn phone(&self) -> &str {
        self.text("phone").trim()
    }

    pub fn web_site(&self) -> &str {
        self.text("web_site").trim()
    }

    /// 評論數；負數與非數字一律視為 0，小數無條件捨去
    pub fn review_count(&self) -> u64 {
        match self.data.get("review_count") {
            Some(Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_i64().map(|_| 0))
                .or_else(|| n.as_f64().map(|f| if f > 0.0 { f.trunc() as u64 } else { 0 }))
                .unwrap_or(0),
            _ => 0,
        }
    }

    pub fn emails(&self) -> Vec<&str> {
        match self.data.get("emails") {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(s)) if !s.is_empty() => vec![s.as_str()],
            _ => Vec::new(),
        }
    }

    pub fn categories(&self) -> Vec<&str> {
        match self.data.get("categories") {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// 匯出用的欄位文字：字串原樣輸出，其他 JSON 值輸出其文字表示
    pub fn display(&self, key: &str, default: &str) -> String {
        match self.data.get(key) {
            None => default.to_string(),
            Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn review_rating(&self) -> String {
        match self.data.get("review_rating") {
            None => "0".to_string(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    One,
    Two,
    Three,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::One, Tier::Two, Tier::Three];

    pub fn number(self) -> u8 {
        match self {
            Tier::One => 1,
            Tier::Two => 2,
            Tier::Three => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::One => "Emergency & High Value",
            Tier::Two => "Visual & Booking",
            Tier::Three => "Other/Unclassified",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

/// 通過篩選並分級後的潛在客戶，建立後不再修改
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    pub tier: Tier,
    pub title: String,
    pub category: String,
    pub phone: String,
    pub emails: String,
    pub review_count: u64,
    pub review_rating: String,
    pub address: String,
    pub google_maps_link: String,
    pub status: String,
}

impl Lead {
    pub fn new(record: &RawRecord, tier: Tier) -> Self {
        Self {
            tier,
            title: record.title().to_string(),
            category: record.display("category", ""),
            phone: record.phone().to_string(),
            emails: record.emails().join("; "),
            review_count: record.review_count(),
            review_rating: record.review_rating(),
            address: record.display("address", ""),
            google_maps_link: record.display("link", ""),
            status: record.display("status", ""),
        }
    }
}

/// CSV 標頭，順序與 `Lead` 欄位一致
pub const LEAD_HEADERS: [&str; 10] = [
    "tier",
    "title",
    "category",
    "phone",
    "emails",
    "review_count",
    "review_rating",
    "address",
    "google_maps_link",
    "status",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub lines: usize,
    pub blank_lines: usize,
    pub malformed_lines: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub has_website: usize,
    pub no_reviews: usize,
    pub no_contact: usize,
    pub duplicates: usize,
    pub kept: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub tier1: usize,
    pub tier2: usize,
    pub tier3: usize,
}

impl TierCounts {
    pub fn get(&self, tier: Tier) -> usize {
        match tier {
            Tier::One => self.tier1,
            Tier::Two => self.tier2,
            Tier::Three => self.tier3,
        }
    }

    pub fn total(&self) -> usize {
        self.tier1 + self.tier2 + self.tier3
    }
}

#[derive(Debug, Clone, Default)]
pub struct Extracted {
    pub records: Vec<RawRecord>,
    pub stats: LoadStats,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub entries_loaded: usize,
    pub leads: Vec<Lead>,
    pub tier_counts: TierCounts,
    pub load_stats: LoadStats,
    pub filter_stats: FilterStats,
}

impl TransformResult {
    pub fn tier(&self, tier: Tier) -> Vec<&Lead> {
        self.leads.iter().filter(|lead| lead.tier == tier).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: String,
    pub rows: usize,
}
