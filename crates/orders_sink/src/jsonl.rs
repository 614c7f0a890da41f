//! Line-delimited JSON persistence.
//!
//! One record per line, dataset column names, ISO 8601 dates. Handy for
//! piping into `jq` or quick eyeballing next to the Parquet output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use orders_core::types::OrderRecord;

use crate::error::SinkError;

/// Writes a batch of records as line-delimited JSON.
///
/// An empty batch produces an empty file.
///
/// # Errors
///
/// [`SinkError`] on file I/O or serialisation failure.
pub fn write_jsonl<P: AsRef<Path>>(path: P, records: &[OrderRecord]) -> Result<(), SinkError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use orders_core::config::GeneratorConfig;
    use orders_engine::{OrderGenerator, OrderRng};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("orders_jsonl_{}_{}.jsonl", name, std::process::id()))
    }

    #[test]
    fn test_one_line_per_record_with_dataset_columns() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let generator = OrderGenerator::with_today(GeneratorConfig::default(), today).unwrap();
        let mut rng = OrderRng::from_seed(42);
        let records = generator.generate(25, &mut rng);

        let path = temp_path("lines");
        write_jsonl(&path, &records).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 25);

        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("fx_order_type").is_some());
            assert!(value.get("buy_amount_cents").is_some());
            assert_eq!(value["source"], "fx_order");
        }

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_empty_batch_writes_empty_file() {
        let path = temp_path("empty");
        write_jsonl(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
        std::fs::remove_file(&path).unwrap();
    }
}
