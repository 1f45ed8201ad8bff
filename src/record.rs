//! One spreadsheet row mapped to named fields.
//!
//! The roster sheet is maintained by hand, so column presence is the only
//! structure we rely on: a field that is missing and a field holding an
//! empty cell mean the same thing to the composer.

use std::collections::HashMap;

/// Column headers recognized in the roster worksheet.
pub mod fields {
    pub const NOME: &str = "NOME_DO_PROFISSIONAL";
    pub const ESPECIALIDADE: &str = "ESPECIALIDADE";
    pub const ATENDIMENTO_CLINICO: &str = "ATENDIMENTO_CLÍNICO";
    pub const PRE_NATAL: &str = "PRÉ-NATAL";
    pub const PARTO_NORMAL: &str = "PARTO_NORMAL";
    pub const PARTO_CESAREA: &str = "PARTO_CESÁREA";
    pub const ATENDIMENTO_CLINICO_PRO: &str = "ATENDIMENTO_CLÍNICO_PRO";
    pub const PRE_NATAL_PRO: &str = "PRÉ-NATAL_PRO";
    pub const PARTO_NORMAL_PRO: &str = "PARTO_NORMAL_PRO";
    pub const PARTO_CESAREA_PRO: &str = "PARTO_CESÁREA_PRO";
}

/// One professional's row, keyed by column header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfessionalRecord {
    values: HashMap<String, String>,
}

impl ProfessionalRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record by pairing a data row with the header row.
    ///
    /// The Sheets values API truncates trailing empty cells, so a row may be
    /// shorter than the header; absent cells stay absent.
    pub fn from_row(headers: &[String], cells: &[String]) -> Self {
        let values = headers
            .iter()
            .zip(cells.iter())
            .map(|(h, c)| (h.clone(), c.clone()))
            .collect();
        Self { values }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// Field value, with missing and empty both reported as `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}
