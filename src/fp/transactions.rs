use std::collections::HashMap;
use std::io::{Read, Write};

use ndarray::ArrayView2;

use super::error::{FpError, Result};

/// Groups `(transaction id, item)` records into transactions.
///
/// Transactions come out in the order their id is first seen. Records with a
/// blank id are dropped. Missing and blank item labels are dropped, other
/// labels are kept as given; a transaction left without items is kept so that
/// it still counts towards the total.
pub fn group_records<I>(records: I) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = (String, Option<String>)>,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut transactions: Vec<Vec<String>> = Vec::new();

    for (id, item) in records {
        if id.trim().is_empty() {
            continue;
        }
        let idx = *positions.entry(id).or_insert_with(|| {
            transactions.push(Vec::new());
            transactions.len() - 1
        });

        if let Some(item) = item.filter(|label| !label.trim().is_empty()) {
            transactions[idx].push(item);
        }
    }

    transactions
}

/// Reads a headed CSV and groups it by `id_column`, taking items from
/// `item_column`.
pub fn read_transactions_csv<R: Read>(
    reader: R,
    id_column: &str,
    item_column: &str,
) -> Result<Vec<Vec<String>>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| FpError::MissingColumn(name.to_string()))
    };
    let id_idx = column(id_column)?;
    let item_idx = column(item_column)?;

    let mut records = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let Some(id) = record.get(id_idx) else {
            continue;
        };
        records.push((id.to_string(), record.get(item_idx).map(str::to_string)));
    }

    let transactions = group_records(records);
    tracing::debug!(transactions = transactions.len(), "read transactions from CSV");
    Ok(transactions)
}

/// Rows of a 0/1 matrix as transactions of the column ids that are set.
pub fn transactions_from_dense(matrix: ArrayView2<i32>) -> Vec<Vec<usize>> {
    matrix
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(_, &value)| value != 0)
                .map(|(col, _)| col)
                .collect()
        })
        .collect()
}

/// Copies the header and the first `rows` records of a CSV. Returns the
/// number of records written.
pub fn truncate_csv<R: Read, W: Write>(reader: R, writer: W, rows: usize) -> Result<usize> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    csv_writer.write_record(csv_reader.headers()?)?;

    let mut written = 0;
    for record in csv_reader.records().take(rows) {
        csv_writer.write_record(&record?)?;
        written += 1;
    }
    csv_writer.flush()?;

    Ok(written)
}
