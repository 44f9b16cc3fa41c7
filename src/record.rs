use std::io;
use serde::{Deserialize, Serialize};
use crate::batch::Lookup;
use crate::model::{AddressFilter, AddressMatch};

/// A row of the batch input file
#[derive(Debug, Default, Deserialize)]
pub struct FilterRow {
    #[serde(default)]
    line1: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    state_code: String,
    #[serde(default)]
    zip_code_leading5: String,
}

impl From<FilterRow> for AddressFilter {
    fn from(row: FilterRow) -> Self {
        Self {
            line1: non_empty(row.line1),
            city: non_empty(row.city),
            state_code: non_empty(row.state_code),
            zip_code_leading5: non_empty(row.zip_code_leading5),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A row of the batch output file: one per matched address, or a single
/// row for a lookup that matched nothing or failed.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    line1: String,
    city: String,
    state_code: String,
    zip_code_leading5: String,
    match_line1: String,
    match_city: String,
    match_state_code: String,
    match_zip_code_leading5: String,
    count: Option<u32>,
    error: String,
}

impl Record {
    fn from_filter(filter: &AddressFilter) -> Self {
        let field = |f: &Option<String>| f.clone().unwrap_or_default();
        Self {
            line1: field(&filter.line1),
            city: field(&filter.city),
            state_code: field(&filter.state_code),
            zip_code_leading5: field(&filter.zip_code_leading5),
            ..Default::default()
        }
    }

    fn with_match(mut self, address: &AddressMatch) -> Self {
        self.match_line1 = address.line1.clone();
        self.match_city = address.city.clone();
        self.match_state_code = address.state_code.clone();
        self.match_zip_code_leading5 = address.zip_code_leading5.clone();
        self
    }

    pub fn from_lookup(lookup: &Lookup) -> Vec<Self> {
        match &lookup.outcome {
            Ok(result) if result.is_empty() => vec![
                Self {
                    count: Some(result.count),
                    ..Self::from_filter(&lookup.filter)
                }
            ],
            Ok(result) => result.addresses.iter()
                .map(|address| Self {
                    count: Some(result.count),
                    ..Self::from_filter(&lookup.filter)
                }.with_match(address))
                .collect(),
            Err(e) => vec![
                Self {
                    error: e.to_string(),
                    ..Self::from_filter(&lookup.filter)
                }
            ],
        }
    }
}

/// read batch filters from CSV with a header row
pub fn read_filters(reader: impl io::Read) -> csv::Result<Vec<AddressFilter>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
        .deserialize::<FilterRow>()
        .map(|row| row.map(AddressFilter::from))
        .collect()
}

/// write lookups as CSV records
pub fn write_records(lookups: &[Lookup], writer: impl io::Write) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in lookups.iter().flat_map(Record::from_lookup) {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
