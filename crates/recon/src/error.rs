use std::fmt;

use crate::fields::LogicalField;

#[derive(Debug)]
pub enum CheckError {
    /// One or more required columns are absent from a table's header row.
    MissingColumns {
        table: &'static str,
        fields: Vec<LogicalField>,
    },
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Settings validation error (empty prefix, bad sheet name, etc.).
    ConfigValidation(String),
}

impl CheckError {
    /// The missing fields, in resolution order. Empty for other variants.
    pub fn missing_fields(&self) -> &[LogicalField] {
        match self {
            Self::MissingColumns { fields, .. } => fields,
            _ => &[],
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumns { table, fields } => {
                let labels: Vec<&str> = fields.iter().map(|field| field.label()).collect();
                write!(f, "{table}: missing required column(s): {}", labels.join(", "))
            }
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
        }
    }
}

impl std::error::Error for CheckError {}
