use crate::domain::model::{ExportSummary, Extracted, TransformResult};
use crate::utils::error::Result;

/// 檔案存取介面，路徑相對於實作自己的根目錄
pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_file(&self) -> &str;
    fn output_all(&self) -> &str;
    fn output_tier1(&self) -> &str;
    fn output_tier2(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Extracted>;
    fn transform(&self, data: Extracted) -> Result<TransformResult>;
    /// 每寫完一個檔案就呼叫一次 `on_written`
    fn load(
        &self,
        result: &TransformResult,
        on_written: &mut dyn FnMut(&ExportSummary) -> Result<()>,
    ) -> Result<Vec<ExportSummary>>;
}
