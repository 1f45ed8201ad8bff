//! contrato-gen
//!
//! Fetches the professional roster from a Google Sheets worksheet, composes
//! one contract summary text per row, and writes each as a PDF named after
//! the professional. Strictly sequential: fetch once, then compose and
//! render per record.

pub mod composer;
pub mod config;
pub mod pdf;
pub mod record;
pub mod sheets;

use std::path::Path;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::record::fields;
use crate::sheets::{RecordSource, ServiceAccountKey, SheetsClient};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Sheets error: {0}")]
    Sheets(#[from] sheets::SheetsError),

    #[error("Render error: {0}")]
    Render(#[from] pdf::RenderError),
}

/// Output filename for one professional: spaces become underscores.
pub fn output_filename(name: &str) -> String {
    format!("contrato_{}.pdf", name.replace(' ', "_"))
}

/// Fetches all records and writes one contract PDF per record into `out_dir`.
/// Returns the number of PDFs written.
pub fn export_contracts<S: RecordSource>(source: &S, out_dir: &Path) -> Result<usize, AppError> {
    let records = source.fetch_records()?;
    tracing::info!(count = records.len(), "Fetched professional records");

    let mut written = 0;
    for record in &records {
        let Some(name) = record.get(fields::NOME) else {
            tracing::warn!("Skipping row without professional name");
            continue;
        };

        let text = composer::compose_contract(record);
        let path = out_dir.join(output_filename(name));
        pdf::render_to_file(name, &text, &path)?;
        tracing::info!(file = %path.display(), "PDF generated");
        written += 1;
    }

    Ok(written)
}

pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::Config::from_env()?;
    let key = ServiceAccountKey::from_file(&config.credentials_file)?;
    let client = SheetsClient::new(key, config.sheet_id, config.sheet_name);

    let written = export_contracts(&client, &config.output_dir)?;
    tracing::info!(written, "Export finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ProfessionalRecord;
    use crate::sheets::MockRecordSource;

    fn record(name: &str, specialty: &str) -> ProfessionalRecord {
        let mut r = ProfessionalRecord::new();
        r.set(fields::NOME, name);
        r.set(fields::ESPECIALIDADE, specialty);
        r
    }

    #[test]
    fn filename_replaces_spaces_with_underscores() {
        assert_eq!(output_filename("ana silva"), "contrato_ana_silva.pdf");
        assert_eq!(
            output_filename("maria de souza lima"),
            "contrato_maria_de_souza_lima.pdf"
        );
    }

    #[test]
    fn filename_without_spaces_is_unchanged() {
        assert_eq!(output_filename("ana"), "contrato_ana.pdf");
    }

    #[test]
    fn export_writes_one_pdf_per_record() {
        let tmp = tempfile::tempdir().unwrap();
        let source = MockRecordSource::new(vec![
            record("ana silva", "obstetrícia"),
            record("bruno costa", "ginecologia"),
        ]);

        let written = export_contracts(&source, tmp.path()).unwrap();
        assert_eq!(written, 2);

        let ana = tmp.path().join("contrato_ana_silva.pdf");
        let bruno = tmp.path().join("contrato_bruno_costa.pdf");
        assert!(ana.exists());
        assert!(bruno.exists());
        assert_eq!(&std::fs::read(&ana).unwrap()[0..4], b"%PDF");
    }

    #[test]
    fn export_skips_rows_without_a_name() {
        let tmp = tempfile::tempdir().unwrap();
        let mut nameless = ProfessionalRecord::new();
        nameless.set(fields::ESPECIALIDADE, "obstetrícia");
        let source =
            MockRecordSource::new(vec![nameless, record("ana silva", "obstetrícia")]);

        let written = export_contracts(&source, tmp.path()).unwrap();
        assert_eq!(written, 1);
        assert!(tmp.path().join("contrato_ana_silva.pdf").exists());
    }

    #[test]
    fn export_with_no_records_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let source = MockRecordSource::new(Vec::new());

        let written = export_contracts(&source, tmp.path()).unwrap();
        assert_eq!(written, 0);
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }
}
