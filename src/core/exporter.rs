use crate::domain::model::{ExportSummary, Lead, LEAD_HEADERS};
use crate::domain::ports::Storage;
use crate::utils::error::{LeadError, Result};

/// 產生 CSV 內容；即使沒有資料也一定輸出標頭列
pub fn leads_to_csv<'a, I>(leads: I) -> Result<(Vec<u8>, usize)>
where
    I: IntoIterator<Item = &'a Lead>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(LEAD_HEADERS)?;

    let mut rows = 0;
    for lead in leads {
        writer.serialize(lead)?;
        rows += 1;
    }

    let data = writer
        .into_inner()
        .map_err(|e| LeadError::IoError(e.into_error()))?;
    Ok((data, rows))
}

pub fn export_leads<'a, S, I>(storage: &S, path: &str, leads: I) -> Result<ExportSummary>
where
    S: Storage,
    I: IntoIterator<Item = &'a Lead>,
{
    let (data, rows) = leads_to_csv(leads)?;
    tracing::debug!("Writing {} rows ({} bytes) to {}", rows, data.len(), path);
    storage.write_file(path, &data)?;

    Ok(ExportSummary {
        path: path.to_string(),
        rows,
    })
}
