//! CSV parsing into a [`Dataset`].
//!
//! # CSV Format
//!
//! Header row required. One column holds the textual identifier; every other
//! column is parsed as a float.
//!
//! ```text
//! car,mpg,cyl,disp,hp
//! Mazda RX4,21,6,160,110
//! ```
//!
//! Cells that do not parse as a float are stored as NaN rather than rejected.

use crate::{Dataset, Row};
use anyhow::{bail, Context};
use std::collections::BTreeMap;

impl Dataset {
    /// Parse delimited text with a header row into a dataset.
    ///
    /// `id_column` names the identifier column; it must be present in the
    /// header and unique and non-empty in every record. Ragged records fail
    /// the whole load.
    pub fn from_csv(csv_data: &str, id_column: &str) -> anyhow::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers().context("failed to read CSV header")?.clone();
        let Some(id_index) = headers.iter().position(|h| h == id_column) else {
            bail!("identifier column '{}' not found in header", id_column);
        };
        let numeric_columns: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != id_index)
            .map(|(i, h)| (i, h.to_string()))
            .collect();

        let mut rows = Vec::new();
        let mut nan_cells = 0u32;
        for (line, result) in rdr.records().enumerate() {
            let r = result.with_context(|| format!("malformed record {}", line + 1))?;
            let name = r.get(id_index).unwrap_or("");
            if name.is_empty() {
                bail!("record {} has an empty '{}' value", line + 1, id_column);
            }

            let mut values = BTreeMap::new();
            for (i, column) in &numeric_columns {
                let value = match r.get(*i).unwrap_or("").parse::<f64>() {
                    Ok(v) => v,
                    Err(_) => {
                        nan_cells += 1;
                        f64::NAN
                    }
                };
                values.insert(column.clone(), value);
            }
            rows.push(Row::new(name, values));
        }

        if nan_cells > 0 {
            log::warn!("[LCV] loader: {} cells did not parse as numbers and are NaN", nan_cells);
        }
        let columns = numeric_columns.into_iter().map(|(_, c)| c).collect();
        let dataset = Dataset::new(id_column, columns, rows)?;
        log::info!(
            "[LCV] loader: Loaded {} rows with {} numeric columns",
            dataset.len(),
            dataset.numeric_columns().len()
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use crate::Dataset;

    #[test]
    fn load_rows_from_csv() {
        let csv = "\
car,mpg,cyl,hp
Mazda RX4,21,6,110
Datsun 710,22.8,4,93
Valiant,18.1,6,105
";
        let ds = Dataset::from_csv(csv, "car").unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.numeric_columns(), ["mpg", "cyl", "hp"]);

        let mazda = &ds.rows()[0];
        assert_eq!(mazda.name(), "Mazda RX4");
        assert_eq!(mazda.value("mpg"), 21.0);
        assert_eq!(mazda.value("hp"), 110.0);
        assert_eq!(ds.rows()[1].value("mpg"), 22.8);
    }

    #[test]
    fn identifier_column_may_be_anywhere() {
        let csv = "mpg,car,hp\n21,Mazda RX4,110\n";
        let ds = Dataset::from_csv(csv, "car").unwrap();
        assert_eq!(ds.numeric_columns(), ["mpg", "hp"]);
        assert_eq!(ds.rows()[0].name(), "Mazda RX4");
    }

    #[test]
    fn malformed_cells_become_nan() {
        let csv = "car,mpg,hp\nA,abc,110\nB,,93\n";
        let ds = Dataset::from_csv(csv, "car").unwrap();
        assert!(ds.rows()[0].value("mpg").is_nan());
        assert!(ds.rows()[1].value("mpg").is_nan());
        assert_eq!(ds.rows()[0].value("hp"), 110.0);
    }

    #[test]
    fn cells_parse_strictly() {
        let csv = "car,mpg,hp\nA,21abc,inf\nB,1e3,NaN\n";
        let ds = Dataset::from_csv(csv, "car").unwrap();
        assert!(ds.rows()[0].value("mpg").is_nan());
        assert_eq!(ds.rows()[0].value("hp"), f64::INFINITY);
        assert_eq!(ds.rows()[1].value("mpg"), 1000.0);
        assert!(ds.rows()[1].value("hp").is_nan());
    }

    #[test]
    fn missing_identifier_column_fails() {
        let err = Dataset::from_csv("name,mpg\nA,1\n", "car").unwrap_err();
        assert!(err.to_string().contains("car"));
    }

    #[test]
    fn duplicate_identifiers_fail() {
        assert!(Dataset::from_csv("car,mpg\nA,1\nA,2\n", "car").is_err());
    }

    #[test]
    fn empty_identifier_fails() {
        assert!(Dataset::from_csv("car,mpg\n,1\n", "car").is_err());
    }

    #[test]
    fn ragged_record_fails() {
        assert!(Dataset::from_csv("car,mpg,hp\nA,1\n", "car").is_err());
    }

    #[test]
    fn header_only_is_an_empty_dataset() {
        let ds = Dataset::from_csv("car,mpg,hp\n", "car").unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.numeric_columns().len(), 2);
    }

    #[test]
    fn fields_are_trimmed() {
        let ds = Dataset::from_csv("car, mpg\n Fiat 128 , 32.4 \n", "car").unwrap();
        assert_eq!(ds.rows()[0].name(), "Fiat 128");
        assert_eq!(ds.rows()[0].value("mpg"), 32.4);
    }
}
