use crate::core::ranker;
use crate::domain::model::{ExportSummary, TransformResult};
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug)]
pub struct RunReport {
    pub result: TransformResult,
    pub exports: Vec<ExportSummary>,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RunReport> {
        let stdout = std::io::stdout();
        self.run_with_output(&mut stdout.lock())
    }

    /// 依序執行 extract → transform → load，並將報表寫到 `out`
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<RunReport> {
        let raw_data = self.pipeline.extract()?;
        write!(out, "{}", ranker::render_loaded(raw_data.records.len()))?;

        let result = self.pipeline.transform(raw_data)?;
        write!(
            out,
            "{}",
            ranker::render_summary(result.leads.len(), &result.tier_counts)
        )?;

        let exports = self.pipeline.load(&result, &mut |export| {
            writeln!(out, "  Written {} leads to {}", export.rows, export.path)?;
            Ok(())
        })?;

        write!(out, "{}", ranker::render_top_leads(&result.leads))?;
        out.flush()?;

        tracing::info!(
            "✅ {} leads exported from {} entries",
            result.leads.len(),
            result.entries_loaded
        );
        Ok(RunReport { result, exports })
    }
}
