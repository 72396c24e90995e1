use crate::utils::error::{LeadError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(LeadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LeadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 每個 (欄位, 路徑) 都必須指向不同的檔案
pub fn validate_distinct_paths(entries: &[(&str, &str)]) -> Result<()> {
    let mut seen = HashSet::new();

    for (field_name, path) in entries {
        if !seen.insert(*path) {
            return Err(LeadError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: path.to_string(),
                reason: "Path is already used by another file".to_string(),
            });
        }
    }

    Ok(())
}
