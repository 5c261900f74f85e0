use certlens_inventory::{CertificateSummary, KeySummary};
use certlens_pkcs::KeyRecord;
use certlens_x509::{CertificateRecord, TIMESTAMP_FORMAT};
use serde::Serialize;

use crate::color::{self, ColorConfig};
use crate::error::Result;
use crate::table::{Cell, Details, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Aligned human-readable text
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

const CERTIFICATE_COLUMNS: &[&str] = &[
    "FILENAME",
    "ENCODING",
    "CN",
    "ISSUER",
    "STATUS",
    "QUANTUM SAFE",
    "PQC TYPES",
];

const KEY_COLUMNS: &[&str] = &["FILENAME", "ENCODING", "TYPE", "BITS", "QUANTUM SAFE"];

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Renders records in the chosen format. Colour only affects `Table`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Render {
    pub(crate) format: OutputFormat,
    pub(crate) colors: ColorConfig,
}

impl Render {
    pub(crate) fn new(format: OutputFormat, colors: ColorConfig) -> Self {
        Render { format, colors }
    }

    fn structured<T: Serialize + ?Sized>(&self, value: &T) -> Result<Option<String>> {
        match self.format {
            OutputFormat::Json => Ok(Some(format!("{}\n", serde_json::to_string_pretty(value)?))),
            OutputFormat::Yaml => Ok(Some(serde_yml::to_string(value)?)),
            OutputFormat::Table => Ok(None),
        }
    }

    fn quantum_safe(&self, value: bool) -> String {
        self.colors.paint(yes_no(value), color::quantum_safe(value))
    }

    pub(crate) fn certificate(&self, record: &CertificateRecord) -> Result<String> {
        if let Some(out) = self.structured(record)? {
            return Ok(out);
        }
        let details = Details::default()
            .row("Filename", &record.filename)
            .row("Encoding", record.encoding)
            .row("Common Name", &record.common_name)
            .row("Issuer", &record.issuer)
            .row("Subject", &record.subject)
            .row("Not Before", record.not_before.format(TIMESTAMP_FORMAT))
            .row("Not After", record.not_after.format(TIMESTAMP_FORMAT))
            .row("Algorithm", &record.algorithm)
            .row("Key Type", &record.key_type)
            .row("Bits", record.bits)
            .row("Serial Number", &record.serial_number)
            .row("Is CA", yes_no(record.is_ca))
            .row("Quantum Safe", self.quantum_safe(record.is_quantum_safe))
            .row_if(
                !record.pqc_types.is_empty(),
                "PQC Types",
                record.pqc_types.join(", "),
            )
            .row_if(!record.sans.is_empty(), "SANs", record.sans.join(", "))
            .row_if(
                !record.ext_key_usage.is_empty(),
                "Ext Key Usage",
                record.ext_key_usage.join(", "),
            );
        Ok(details.render())
    }

    pub(crate) fn key(&self, record: &KeyRecord) -> Result<String> {
        if let Some(out) = self.structured(record)? {
            return Ok(out);
        }
        let details = Details::default()
            .row("Filename", &record.filename)
            .row("Encoding", record.encoding)
            .row("Key Type", &record.key_type)
            .row("Algorithm", &record.algorithm)
            .row("Bits", record.bits)
            .row("Quantum Safe", self.quantum_safe(record.is_quantum_safe))
            .row_if(
                record.curve.is_some(),
                "Curve",
                record.curve.as_deref().unwrap_or_default(),
            )
            .row_if(
                !record.pqc_types.is_empty(),
                "PQC Types",
                record.pqc_types.join(", "),
            );
        Ok(details.render())
    }

    pub(crate) fn certificate_summaries(&self, summaries: &[CertificateSummary]) -> Result<String> {
        if let Some(out) = self.structured(summaries)? {
            return Ok(out);
        }
        let mut table = Table::new(CERTIFICATE_COLUMNS);
        for s in summaries {
            let pqc_types = if s.pqc_types.is_empty() {
                "-".to_string()
            } else {
                s.pqc_types.join(", ")
            };
            table.push(vec![
                Cell::plain(&s.filename),
                Cell::plain(s.encoding),
                Cell::plain(&s.common_name),
                Cell::plain(&s.issuer),
                Cell::styled(s.status, color::status(s.status)),
                Cell::styled(yes_no(s.is_quantum_safe), color::quantum_safe(s.is_quantum_safe)),
                Cell::plain(pqc_types),
            ]);
        }
        Ok(table.render(&self.colors))
    }

    pub(crate) fn key_summaries(&self, summaries: &[KeySummary]) -> Result<String> {
        if let Some(out) = self.structured(summaries)? {
            return Ok(out);
        }
        let mut table = Table::new(KEY_COLUMNS);
        for s in summaries {
            table.push(vec![
                Cell::plain(&s.filename),
                Cell::plain(s.encoding),
                Cell::plain(&s.key_type),
                Cell::plain(s.bits),
                Cell::styled(yes_no(s.is_quantum_safe), color::quantum_safe(s.is_quantum_safe)),
            ]);
        }
        Ok(table.render(&self.colors))
    }
}
