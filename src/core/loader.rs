use crate::domain::model::{Extracted, LoadStats, RawRecord};

/// 逐行解析 JSON Lines，無法解析的行直接略過（只記數）
pub struct JsonLines<'a> {
    rest: &'a [u8],
    stats: LoadStats,
}

impl<'a> JsonLines<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            rest: data,
            stats: LoadStats::default(),
        }
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    fn next_line(&mut self) -> Option<&'a [u8]> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.iter().position(|b| *b == b'\n') {
            Some(end) => {
                let line = &self.rest[..end];
                self.rest = &self.rest[end + 1..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = &[];
                Some(line)
            }
        }
    }
}

impl Iterator for JsonLines<'_> {
    type Item = RawRecord;

    fn next(&mut self) -> Option<RawRecord> {
        while let Some(line) = self.next_line() {
            self.stats.lines += 1;

            let Ok(text) = std::str::from_utf8(line) else {
                self.stats.malformed_lines += 1;
                continue;
            };

            let text = text.trim();
            if text.is_empty() {
                self.stats.blank_lines += 1;
                continue;
            }

            match serde_json::from_str::<RawRecord>(text) {
                Ok(record) => return Some(record),
                Err(_) => self.stats.malformed_lines += 1,
            }
        }

        None
    }
}

pub fn load_records(data: &[u8]) -> Extracted {
    let mut lines = JsonLines::new(data);
    let records: Vec<RawRecord> = lines.by_ref().collect();

    Extracted {
        records,
        stats: lines.stats(),
    }
}
