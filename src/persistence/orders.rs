use std::error::Error;
use std::fs::OpenOptions;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::{info, warn};

use crate::domain::types::Stop;
use crate::error::ValidationError;
use crate::utils::ensure_parent_dir;

pub const ORDER_HEADER: [&str; 5] = ["customer", "latitude", "longitude", "priority", "weight_kg"];

#[derive(Debug, Clone, Default)]
pub struct LoadedOrders {
    pub stops: Vec<Stop>,
    pub rejected: usize,
}

/// Reads the orders CSV (header row first). Rows that fail validation are appended to
/// `rejected_path` as `[reason, fields...]` and skipped.
pub fn load_orders(orders_path: &str, rejected_path: &str) -> Result<LoadedOrders, Box<dyn Error>> {
    info!("READING {}", orders_path);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(orders_path)?;

    ensure_parent_dir(rejected_path)?;
    let reject_file = OpenOptions::new().create(true).append(true).open(rejected_path)?;
    let mut reject_writer = WriterBuilder::new().flexible(true).from_writer(reject_file);

    let mut loaded = LoadedOrders::default();
    for (idx, row) in reader.records().enumerate() {
        let record = row?;
        let line_no = idx + 2;
        let fields: Vec<&str> = record.iter().collect();

        match Stop::parse(&fields) {
            Ok(stop) => {
                info!("ADDED ORDER in line {}: {:?}", line_no, fields);
                loaded.stops.push(stop);
            }
            Err(errors) => {
                let reason = ValidationError::join_many(&errors, "; ");
                warn!(
                    "REJECTED ORDER Invalid row in {} (line {}): {:?} -> {}",
                    orders_path, line_no, fields, reason
                );
                let mut rejected_row = vec![reason.as_str()];
                rejected_row.extend(fields.iter().copied());
                reject_writer.write_record(&rejected_row)?;
                loaded.rejected += 1;
            }
        }
    }
    reject_writer.flush()?;

    info!(
        "Loaded {} orders from {} ({} rejected)",
        loaded.stops.len(),
        orders_path,
        loaded.rejected
    );
    Ok(loaded)
}
