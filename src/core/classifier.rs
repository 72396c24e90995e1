use crate::domain::model::Tier;

/// 緊急與技術類行業（羅馬尼亞文 + 英文）
pub const TIER1_KEYWORDS: &[&str] = &[
    "instalator",
    "plumber",
    "instalatii",
    "electrician",
    "electrice",
    "electric",
    "acoperis",
    "roofer",
    "roof",
    "service auto",
    "vulcanizare",
    "mecanic auto",
    "reparatii auto",
    "auto repair",
    "car service",
    "car repair",
    "amenajari",
    "gradini",
    "peisagist",
    "landscap",
    "gradinar",
    "spatii verzi",
];

/// 需要預約或重視形象的服務業
pub const TIER2_KEYWORDS: &[&str] = &[
    "dentist",
    "stomatolog",
    "dentar",
    "dental",
    "implant",
    "salon",
    "coafor",
    "coafura",
    "frizerie",
    "hair",
    "infrumusetare",
    "beauty",
    "fitness",
];

pub fn search_text(title: &str, categories: &[&str]) -> String {
    format!("{} {}", title, categories.join(" ")).to_lowercase()
}

/// 回傳分級與命中的關鍵字；純子字串比對，不檢查字詞邊界
pub fn classify_with_keyword(title: &str, categories: &[&str]) -> (Tier, Option<&'static str>) {
    let text = search_text(title, categories);

    if let Some(kw) = TIER1_KEYWORDS.iter().copied().find(|kw| text.contains(kw)) {
        return (Tier::One, Some(kw));
    }
    if let Some(kw) = TIER2_KEYWORDS.iter().copied().find(|kw| text.contains(kw)) {
        return (Tier::Two, Some(kw));
    }
    (Tier::Three, None)
}

pub fn classify(title: &str, categories: &[&str]) -> Tier {
    classify_with_keyword(title, categories).0
}
