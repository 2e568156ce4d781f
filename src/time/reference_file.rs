/// Reference data stored as TOML, so coverage can be extended without code changes
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::error::{CalendarError, Result};
use crate::time::holidays::ReferenceData;
use crate::types::CalendarDate;

/// On-disk layout. Dates must be quoted strings (`"2026-01-16"`), not TOML dates.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ReferenceDataFile {
    region: String,
    rdos: Vec<CalendarDate>,
    closures: Vec<CalendarDate>,
    holidays: BTreeMap<CalendarDate, String>,
}

impl ReferenceData {
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: ReferenceDataFile = toml::from_str(content)
            .map_err(|e| CalendarError::ReferenceDataError(format!("Failed to parse reference data: {}", e)))?;

        if let Some((date, _)) = file.holidays.iter().find(|(_, name)| name.trim().is_empty()) {
            return Err(CalendarError::ReferenceDataError(format!(
                "Holiday on {} has an empty name",
                date
            )));
        }

        Ok(ReferenceData::new(
            file.region,
            file.holidays,
            file.rdos.into_iter().collect(),
            file.closures.into_iter().collect(),
        ))
    }

    pub fn to_toml(&self) -> Result<String> {
        let file = ReferenceDataFile {
            region: self.region().to_string(),
            rdos: self.rdos().iter().copied().collect(),
            closures: self.closures().iter().copied().collect(),
            holidays: self.holidays().clone(),
        };

        toml::to_string_pretty(&file)
            .map_err(|e| CalendarError::ReferenceDataError(format!("Failed to serialize reference data: {}", e)))
    }
}

pub fn load_reference_data<P: AsRef<Path>>(path: P) -> Result<ReferenceData> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        CalendarError::ReferenceDataError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let data = ReferenceData::from_toml(&content)?;

    info!(
        "Loaded reference data from {}: {} holidays, {} RDOs, {} closure days",
        path.display(),
        data.holidays().len(),
        data.rdos().len(),
        data.closures().len()
    );

    Ok(data)
}

pub fn save_reference_data<P: AsRef<Path>>(data: &ReferenceData, path: P) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, data.to_toml()?)?;
    info!("Wrote reference data to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
region = "Test site"
rdos = ["2026-01-16", "2026-02-13"]
closures = ["2026-12-29"]

[holidays]
"2026-12-25" = "Christmas Day"
"#;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[test]
    fn test_parse_sample() {
        let data = ReferenceData::from_toml(SAMPLE).unwrap();
        assert_eq!(data.region(), "Test site");
        assert_eq!(data.holiday_name(date("2026-12-25")), Some("Christmas Day"));
        assert!(data.is_rdo(date("2026-02-13")));
        assert!(data.is_closure(date("2026-12-29")));
    }

    #[test]
    fn test_missing_tables_default_to_empty() {
        let data = ReferenceData::from_toml("region = \"Empty\"").unwrap();
        assert!(data.holidays().is_empty());
        assert!(data.rdos().is_empty());
        assert!(data.closures().is_empty());
    }

    #[test]
    fn test_malformed_date_rejected() {
        let err = ReferenceData::from_toml("rdos = [\"2026-02-30\"]").unwrap_err();
        assert_eq!(err.error_code(), "CFG_002");

        let err = ReferenceData::from_toml("[holidays]\n\"26-12-25\" = \"Christmas\"").unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_empty_holiday_name_rejected() {
        assert!(ReferenceData::from_toml("[holidays]\n\"2026-12-25\" = \" \"").is_err());
    }

    #[test]
    fn test_builtin_survives_export() {
        let builtin = ReferenceData::victoria();
        let reloaded = ReferenceData::from_toml(&builtin.to_toml().unwrap()).unwrap();
        assert_eq!(reloaded, builtin);
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("workcal_reference_{}.toml", std::process::id()));
        let builtin = ReferenceData::victoria();
        save_reference_data(&builtin, &path).unwrap();
        let loaded = load_reference_data(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.holidays().len(), builtin.holidays().len());
    }

    #[test]
    fn test_missing_file() {
        let err = load_reference_data("/nonexistent/workcal/reference.toml").unwrap_err();
        assert_eq!(err.error_code(), "CFG_002");
    }
}
