use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::classify::INSURER_SIGNATURE;
use crate::error::CheckError;

/// Sheet names Excel refuses.
const SHEET_NAME_FORBIDDEN: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];
const SHEET_NAME_MAX: usize = 31;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Run settings. Every key is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckSettings {
    /// Submission file name prefix; the run date (`MMDD`) follows it.
    pub submission_prefix: String,
    /// Directory the submission CSV is written to.
    pub output_dir: PathBuf,
    /// Result workbook name prefix; the run date (`YYYYMMDD`) follows it.
    pub workbook_label: String,
    pub sheet_name: String,
    pub font_name: String,
    pub font_size: f64,
    /// Append-only run log.
    pub log_file: PathBuf,
    /// Header label identifying the insurer result file.
    pub insurer_signature: String,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            submission_prefix: "SIKAKU_1311131242_".into(),
            output_dir: PathBuf::from("."),
            workbook_label: "協会けんぽ受診資格結果".into(),
            sheet_name: "データ".into(),
            font_name: "游ゴシック".into(),
            font_size: 11.0,
            log_file: PathBuf::from("./log.txt"),
            insurer_signature: INSURER_SIGNATURE.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl CheckSettings {
    pub fn from_toml(input: &str) -> Result<Self, CheckError> {
        let settings: CheckSettings =
            toml::from_str(input).map_err(|e| CheckError::ConfigParse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CheckError> {
        let required = [
            ("submission_prefix", &self.submission_prefix),
            ("workbook_label", &self.workbook_label),
            ("sheet_name", &self.sheet_name),
            ("font_name", &self.font_name),
            ("insurer_signature", &self.insurer_signature),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(CheckError::ConfigValidation(format!("{key} must not be empty")));
            }
        }

        if self.sheet_name.chars().count() > SHEET_NAME_MAX {
            return Err(CheckError::ConfigValidation(format!(
                "sheet_name '{}' is longer than {SHEET_NAME_MAX} characters",
                self.sheet_name
            )));
        }
        if let Some(c) = self.sheet_name.chars().find(|c| SHEET_NAME_FORBIDDEN.contains(c)) {
            return Err(CheckError::ConfigValidation(format!(
                "sheet_name '{}' contains '{c}'",
                self.sheet_name
            )));
        }

        if !(1.0..=409.0).contains(&self.font_size) {
            return Err(CheckError::ConfigValidation(format!(
                "font_size must be between 1 and 409, got {}",
                self.font_size
            )));
        }

        Ok(())
    }

    /// `SIKAKU_1311131242_0418.csv`
    pub fn submission_file_name(&self, today: NaiveDate) -> String {
        format!("{}{}.csv", self.submission_prefix, today.format("%m%d"))
    }

    /// `協会けんぽ受診資格結果20240418.xlsx`
    pub fn workbook_file_name(&self, today: NaiveDate) -> String {
        format!("{}{}.xlsx", self.workbook_label, today.format("%Y%m%d"))
    }
}
