//! Snappy-compressed Parquet persistence.
//!
//! Writes batches with the reference dataset's column layout: UTF8 byte
//! arrays for categorical fields, INT64 minor-unit amounts, a DOUBLE rate,
//! and INT32 DATE columns (`execution_date` optional). The writer uses the
//! parquet crate's low-level column API; no arrow surface is involved.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use ::parquet::basic::Compression;
use ::parquet::data_type::{ByteArray, ByteArrayType, DoubleType, Int32Type, Int64Type};
use ::parquet::file::properties::WriterProperties;
use ::parquet::file::writer::{SerializedFileWriter, SerializedRowGroupWriter};
use ::parquet::schema::parser::parse_message_type;
use chrono::NaiveDate;

use orders_core::types::OrderRecord;

use crate::error::SinkError;

/// Parquet schema matching the reference dataset columns.
const MESSAGE_TYPE: &str = "
message fx_order {
    required binary id (UTF8);
    required binary reference (UTF8);
    required binary fx_order_type (UTF8);
    required binary source (UTF8);
    required int32 creation_date (DATE);
    required binary market_direction (UTF8);
    required int64 buy_amount_cents;
    required int64 sell_amount_cents;
    required binary buy_currency (UTF8);
    required binary sell_currency (UTF8);
    required int64 amount_cents;
    required int64 counter_amount_cents;
    required binary currency (UTF8);
    required binary counter_currency (UTF8);
    required int32 value_date (DATE);
    required double rate;
    required binary liquidity_provider (UTF8);
    optional int32 execution_date (DATE);
    required binary status (UTF8);
}
";

/// Rows per Parquet row group.
const ROW_GROUP_SIZE: usize = 50_000;

/// Writes a batch of records to a snappy-compressed Parquet file.
///
/// An empty batch produces a valid zero-row file. Large batches are split
/// into row groups of [`ROW_GROUP_SIZE`] rows.
///
/// # Errors
///
/// [`SinkError`] on file I/O or Parquet encoding failure; on error the
/// partially-written file is not a usable dataset and callers should treat
/// the batch as unwritten.
pub fn write_parquet<P: AsRef<Path>>(path: P, records: &[OrderRecord]) -> Result<(), SinkError> {
    let schema = Arc::new(parse_message_type(MESSAGE_TYPE)?);
    let props = Arc::new(
        WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build(),
    );

    let file = File::create(path)?;
    let mut writer = SerializedFileWriter::new(file, schema, props)?;

    for chunk in records.chunks(ROW_GROUP_SIZE) {
        write_row_group(&mut writer, chunk)?;
    }

    writer.close()?;
    Ok(())
}

/// Writes one row group, column by column in schema order.
fn write_row_group(
    writer: &mut SerializedFileWriter<File>,
    records: &[OrderRecord],
) -> Result<(), SinkError> {
    let mut group = writer.next_row_group()?;

    write_utf8(&mut group, records.iter().map(|r| r.id.as_str()))?;
    write_utf8(&mut group, records.iter().map(|r| r.reference.as_str()))?;
    write_utf8(&mut group, records.iter().map(|r| r.order_type.as_str()))?;
    write_utf8(&mut group, records.iter().map(|r| r.source.as_str()))?;
    write_date(&mut group, records.iter().map(|r| r.creation_date))?;
    write_utf8(&mut group, records.iter().map(|r| r.market_direction.as_str()))?;
    write_i64(&mut group, records.iter().map(|r| r.buy_amount_cents))?;
    write_i64(&mut group, records.iter().map(|r| r.sell_amount_cents))?;
    write_utf8(&mut group, records.iter().map(|r| r.buy_currency.code()))?;
    write_utf8(&mut group, records.iter().map(|r| r.sell_currency.code()))?;
    write_i64(&mut group, records.iter().map(|r| r.amount_cents))?;
    write_i64(&mut group, records.iter().map(|r| r.counter_amount_cents))?;
    write_utf8(&mut group, records.iter().map(|r| r.currency.code()))?;
    write_utf8(&mut group, records.iter().map(|r| r.counter_currency.code()))?;
    write_date(&mut group, records.iter().map(|r| r.value_date))?;
    write_f64(&mut group, records.iter().map(|r| r.rate))?;
    write_utf8(&mut group, records.iter().map(|r| r.liquidity_provider.as_str()))?;
    write_opt_date(&mut group, records.iter().map(|r| r.execution_date))?;
    write_utf8(&mut group, records.iter().map(|r| r.status.as_str()))?;

    group.close()?;
    Ok(())
}

type RowGroup<'a> = SerializedRowGroupWriter<'a, File>;

fn write_utf8<'a>(
    group: &mut RowGroup<'_>,
    values: impl Iterator<Item = &'a str>,
) -> Result<(), SinkError> {
    let values: Vec<ByteArray> = values.map(ByteArray::from).collect();
    let mut column = group.next_column()?.ok_or(SinkError::SchemaMismatch)?;
    column
        .typed::<ByteArrayType>()
        .write_batch(&values, None, None)?;
    column.close()?;
    Ok(())
}

fn write_i64(
    group: &mut RowGroup<'_>,
    values: impl Iterator<Item = i64>,
) -> Result<(), SinkError> {
    let values: Vec<i64> = values.collect();
    let mut column = group.next_column()?.ok_or(SinkError::SchemaMismatch)?;
    column.typed::<Int64Type>().write_batch(&values, None, None)?;
    column.close()?;
    Ok(())
}

fn write_f64(
    group: &mut RowGroup<'_>,
    values: impl Iterator<Item = f64>,
) -> Result<(), SinkError> {
    let values: Vec<f64> = values.collect();
    let mut column = group.next_column()?.ok_or(SinkError::SchemaMismatch)?;
    column.typed::<DoubleType>().write_batch(&values, None, None)?;
    column.close()?;
    Ok(())
}

fn write_date(
    group: &mut RowGroup<'_>,
    values: impl Iterator<Item = NaiveDate>,
) -> Result<(), SinkError> {
    let values: Vec<i32> = values.map(days_since_epoch).collect();
    let mut column = group.next_column()?.ok_or(SinkError::SchemaMismatch)?;
    column.typed::<Int32Type>().write_batch(&values, None, None)?;
    column.close()?;
    Ok(())
}

fn write_opt_date(
    group: &mut RowGroup<'_>,
    values: impl Iterator<Item = Option<NaiveDate>>,
) -> Result<(), SinkError> {
    let mut dates = Vec::new();
    let mut def_levels = Vec::new();
    for value in values {
        match value {
            Some(date) => {
                dates.push(days_since_epoch(date));
                def_levels.push(1);
            }
            None => def_levels.push(0),
        }
    }
    let mut column = group.next_column()?.ok_or(SinkError::SchemaMismatch)?;
    column
        .typed::<Int32Type>()
        .write_batch(&dates, Some(&def_levels), None)?;
    column.close()?;
    Ok(())
}

/// Days since the Unix epoch, as Parquet's DATE logical type expects.
fn days_since_epoch(date: NaiveDate) -> i32 {
    // chrono's default NaiveDate is 1970-01-01
    (date - NaiveDate::default()).num_days() as i32
}
