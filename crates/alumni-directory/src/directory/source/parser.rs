use super::super::record::PersonRecord;
use super::RecordSourceError;
use std::io::Read;

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<PersonRecord>, RecordSourceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<PersonRecord>() {
        records.push(row?);
    }

    Ok(records)
}

pub(crate) fn parse_json<R: Read>(reader: R) -> Result<Vec<PersonRecord>, RecordSourceError> {
    Ok(serde_json::from_reader(reader)?)
}
