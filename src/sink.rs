use crate::error::SinkError;
use crate::records::PolicyRecord;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Fixed column order of the output artifact
pub const COLUMNS: [&str; 5] = ["标题", "类型", "发布时间", "概要", "URL"];

/// Accumulates extracted records across pages and writes them out once.
///
/// Insertion order is preserved: page order, then in-page order. The file
/// is UTF-8 with a BOM so spreadsheet tools pick up the CJK columns.
#[derive(Debug)]
pub struct RecordSink {
    path: PathBuf,
    records: Vec<PolicyRecord>,
}

impl RecordSink {
    /// Create a sink that will write to the given path
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: Vec::new(),
        }
    }

    /// Append one page's records, preserving their order
    pub fn append(&mut self, records: Vec<PolicyRecord>) {
        self.records.extend(records);
    }

    /// Records gathered so far
    pub fn records(&self) -> &[PolicyRecord] {
        &self.records
    }

    /// Number of records gathered so far
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any records were gathered
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Where the artifact will be written
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the artifact: BOM, header row, then one row per record
    pub fn flush(&self) -> Result<(), SinkError> {
        let mut file = File::create(&self.path).map_err(|source| SinkError::Create {
            path: self.path.clone(),
            source,
        })?;
        file.write_all("\u{feff}".as_bytes())?;

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(COLUMNS)?;
        for record in &self.records {
            writer.write_record([
                record.title.as_str(),
                record.category.as_str(),
                record.published_at.as_str(),
                record.summary.as_str(),
                record.url.as_str(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}
