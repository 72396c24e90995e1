use crate::core::{classifier, exporter, filter, loader, ranker};
use crate::domain::model::{ExportSummary, Extracted, Lead, Tier, TransformResult};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{LeadError, Result};

pub struct LeadPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> LeadPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for LeadPipeline<S, C> {
    fn extract(&self) -> Result<Extracted> {
        let input = self.config.input_file();

        if !self.storage.exists(input) {
            return Err(LeadError::MissingInput {
                path: input.to_string(),
            });
        }

        tracing::info!("📥 Loading records from {}", input);
        let data = self.storage.read_file(input)?;
        let extracted = loader::load_records(&data);

        tracing::debug!(
            "Read {} lines: {} records, {} blank, {} malformed skipped",
            extracted.stats.lines,
            extracted.records.len(),
            extracted.stats.blank_lines,
            extracted.stats.malformed_lines
        );
        Ok(extracted)
    }

    fn transform(&self, data: Extracted) -> Result<TransformResult> {
        tracing::info!("🔧 Filtering {} records", data.records.len());

        let (kept, filter_stats) = filter::filter_records(&data.records);
        tracing::debug!(
            "Filter: {} kept, {} with website, {} without reviews, {} without contact, {} duplicates dropped",
            filter_stats.kept,
            filter_stats.has_website,
            filter_stats.no_reviews,
            filter_stats.no_contact,
            filter_stats.duplicates
        );

        let mut leads: Vec<Lead> = kept
            .into_iter()
            .map(|record| {
                let (tier, keyword) =
                    classifier::classify_with_keyword(record.title(), &record.categories());
                tracing::trace!("{:?} -> tier {} ({:?})", record.title(), tier, keyword);
                Lead::new(record, tier)
            })
            .collect();

        ranker::sort_leads(&mut leads);
        let tier_counts = ranker::tier_counts(&leads);

        Ok(TransformResult {
            entries_loaded: data.records.len(),
            leads,
            tier_counts,
            load_stats: data.stats,
            filter_stats,
        })
    }

    fn load(
        &self,
        result: &TransformResult,
        on_written: &mut dyn FnMut(&ExportSummary) -> Result<()>,
    ) -> Result<Vec<ExportSummary>> {
        tracing::info!("💾 Writing CSV exports");

        let exports = [
            (self.config.output_all(), result.leads.iter().collect::<Vec<_>>()),
            (self.config.output_tier1(), result.tier(Tier::One)),
            (self.config.output_tier2(), result.tier(Tier::Two)),
        ];

        let mut summaries = Vec::with_capacity(exports.len());
        for (path, leads) in exports {
            let summary = exporter::export_leads(&self.storage, path, leads)?;
            on_written(&summary)?;
            summaries.push(summary);
        }

        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LeadFiles;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        read_only: Option<String>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.as_bytes().to_vec());
            storage
        }

        fn get_file(&self, path: &str) -> Option<String> {
            let files = self.files.lock().unwrap();
            files
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MockStorage {
        fn exists(&self, path: &str) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }

        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().unwrap();
            files.get(path).cloned().ok_or_else(|| {
                LeadError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            if self.read_only.as_deref() == Some(path) {
                return Err(LeadError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    format!("Permission denied: {}", path),
                )));
            }
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn jsonl(records: &[serde_json::Value]) -> String {
        records
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_extract_missing_input() {
        let pipeline = LeadPipeline::new(MockStorage::default(), LeadFiles::default());
        let err = pipeline.extract().unwrap_err();
        assert!(matches!(err, LeadError::MissingInput { ref path } if path == "bucharest-results.json"));
    }

    #[test]
    fn test_transform_filters_classifies_and_sorts() {
        let input = jsonl(&[
            json!({"title": "Site Owner", "web_site": "http://x.com", "review_count": 50, "phone": "01"}),
            json!({"title": "Librarie", "review_count": 80, "phone": "02"}),
            json!({"title": "ABC Salon", "review_count": 3, "phone": "0733000000", "categories": ["Hair salon"]}),
            json!({"title": "Instalatii Popescu", "review_count": 5, "phone": "0722123456", "categories": ["plumber"]}),
            json!({"title": "ABC Salon", "review_count": 99, "phone": "0733000000"}),
            json!({"title": "Acoperisuri Ion", "review_count": 20, "emails": ["ion@acoperis.ro"]}),
        ]);
        let storage = MockStorage::with_file("bucharest-results.json", &input);
        let pipeline = LeadPipeline::new(storage, LeadFiles::default());

        let extracted = pipeline.extract().unwrap();
        let result = pipeline.transform(extracted).unwrap();

        let titles: Vec<&str> = result.leads.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Acoperisuri Ion", "Instalatii Popescu", "ABC Salon", "Librarie"]
        );
        assert_eq!(result.entries_loaded, 6);
        assert_eq!(result.leads[2].review_count, 3);
        assert_eq!(result.tier_counts.tier1, 2);
        assert_eq!(result.tier_counts.tier2, 1);
        assert_eq!(result.tier_counts.tier3, 1);
        assert_eq!(result.filter_stats.has_website, 1);
        assert_eq!(result.filter_stats.duplicates, 1);
    }

    #[test]
    fn test_load_writes_three_files() {
        let input = jsonl(&[
            json!({"title": "Instalatii Popescu", "review_count": 5, "phone": "0722123456", "categories": ["plumber"]}),
            json!({"title": "Dental Clinic", "review_count": 9, "phone": "0744"}),
            json!({"title": "Librarie", "review_count": 1, "phone": "02"}),
        ]);
        let storage = MockStorage::with_file("in.jsonl", &input);
        let files = LeadFiles {
            input: "in.jsonl".to_string(),
            output_all: "all.csv".to_string(),
            output_tier1: "t1.csv".to_string(),
            output_tier2: "t2.csv".to_string(),
        };
        let pipeline = LeadPipeline::new(storage.clone(), files);

        let result = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        let mut written = Vec::new();
        let summaries = pipeline
            .load(&result, &mut |s| {
                written.push(s.path.clone());
                Ok(())
            })
            .unwrap();
        assert_eq!(written, vec!["all.csv", "t1.csv", "t2.csv"]);

        let rows: Vec<(&str, usize)> = summaries.iter().map(|s| (s.path.as_str(), s.rows)).collect();
        assert_eq!(rows, vec![("all.csv", 3), ("t1.csv", 1), ("t2.csv", 1)]);

        let tier2 = storage.get_file("t2.csv").unwrap();
        assert_eq!(tier2.lines().count(), 2);
        assert!(tier2.contains("Dental Clinic"));
        assert!(!storage.get_file("t1.csv").unwrap().contains("Librarie"));
        assert!(storage.get_file("all.csv").unwrap().contains("Librarie"));
    }

    #[test]
    fn test_load_stops_on_write_failure() {
        let input = jsonl(&[
            json!({"title": "Instalatii Popescu", "review_count": 5, "phone": "0722123456"}),
            json!({"title": "Dental Clinic", "review_count": 9, "phone": "0744"}),
        ]);
        let mut storage = MockStorage::with_file("bucharest-results.json", &input);
        storage.read_only = Some("bucharest-leads-tier1.csv".to_string());
        let pipeline = LeadPipeline::new(storage.clone(), LeadFiles::default());

        let result = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        let mut written = Vec::new();
        let err = pipeline
            .load(&result, &mut |s| {
                written.push(s.path.clone());
                Ok(())
            })
            .unwrap_err();

        assert!(matches!(err, LeadError::IoError(_)));
        assert_eq!(written, vec!["bucharest-leads-all.csv"]);
        assert!(storage.get_file("bucharest-leads-all.csv").is_some());
        assert!(storage.get_file("bucharest-leads-tier2.csv").is_none());
    }
}
