// src/process/mod.rs
pub mod convert;
pub mod date_parser;
pub mod normalize;
pub mod schema;
pub mod separator;
pub mod split;
pub mod trimming;
pub mod types;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::ParseOptions;
use crate::error::{ImportError, Result};
use crate::guess::{guess_columns, ColumnGuesses};

use self::date_parser::{DateParser, FreeformDateParser};
use self::types::{TypeTag, TypedValue};

/// Everything inferred from one input. Owned by the caller; the pipeline keeps
/// no state between calls.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// The detected field separator.
    pub separator: char,
    /// First record, when it was judged to be column labels rather than data.
    pub header: Option<Vec<String>>,
    /// Data records, header removed, all `num_columns` wide.
    pub records: Vec<Vec<String>>,
    /// `records` with every field coerced; index-aligned.
    pub typed_records: Vec<Vec<TypedValue>>,
    pub num_columns: usize,
    /// Tag shared by a whole column (`Empty` cells count as `Text`), `None`
    /// where rows disagree.
    pub column_types: Vec<Option<TypeTag>>,
    pub column_guesses: ColumnGuesses,
}

/// Run the full pipeline with the built-in date parser.
pub fn parse(data: &str, options: &ParseOptions) -> Result<ParseResult> {
    parse_with(data, options, &FreeformDateParser)
}

/// Run the full pipeline with a caller-supplied date capability.
#[instrument(level = "debug", skip(data, options, dates), fields(bytes = data.len()))]
pub fn parse_with<D: DateParser + ?Sized>(
    data: &str,
    options: &ParseOptions,
    dates: &D,
) -> Result<ParseResult> {
    // 1) lines
    let lines = split::split_lines(data);
    if lines.is_empty() {
        return Err(ImportError::NoLines);
    }
    debug!(lines = lines.len(), "split lines");

    // 2) separator + fields
    let separator = separator::detect_separator(
        &lines,
        &options.separators,
        options.separator_sample_lines,
    );
    let records = split::tokenize(&lines, separator);

    // 3) rectangular records
    let mut records = normalize::normalize(records, options.field_count)?;
    let num_columns = records.first().map(Vec::len).unwrap_or(0);
    if num_columns == 0 {
        return Err(ImportError::NoFields);
    }

    // 4) types, then header (needs the types of rows 0 and 1)
    let mut typed_records = convert::coerce(&records, dates);

    let header = if schema::has_header(&typed_records) {
        typed_records.remove(0);
        Some(records.remove(0))
    } else {
        None
    };

    // 5) roles
    let column_guesses = guess_columns(header.as_deref(), &typed_records, num_columns, options);
    let column_types = schema::column_types(&typed_records, num_columns);

    debug!(
        separator = ?separator,
        header = header.is_some(),
        rows = records.len(),
        columns = num_columns,
        "parsed"
    );

    Ok(ParseResult {
        separator,
        header,
        records,
        typed_records,
        num_columns,
        column_types,
        column_guesses,
    })
}

/// Parse independent inputs in parallel. Output order matches input order;
/// each input runs the single-threaded pipeline on its own.
#[instrument(level = "info", skip_all, fields(inputs = inputs.len()))]
pub fn parse_batch<S: AsRef<str> + Sync>(
    inputs: &[S],
    options: &ParseOptions,
) -> Vec<Result<ParseResult>> {
    let results: Vec<Result<ParseResult>> = inputs
        .par_iter()
        .map(|data| parse(data.as_ref(), options))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(parsed = results.len() - failed, failed, "batch complete");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldCountPolicy;
    use anyhow::Result;
    use chrono::NaiveDateTime;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,bankimport=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn strings(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn statement_with_header() -> Result<()> {
        init_test_logging();
        let data = "Date,Amount,Balance,Description\n2023-01-05,-12.50,100.00,Coffee Shop\n2023-01-06,50.00,150.00,Salary";

        let result = parse(data, &ParseOptions::default())?;

        assert_eq!(result.separator, ',');
        assert_eq!(
            result.header,
            Some(strings(&["Date", "Amount", "Balance", "Description"]))
        );
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.typed_records.len(), 2);
        assert_eq!(result.num_columns, 4);
        assert_eq!(
            result.column_guesses,
            ColumnGuesses {
                date: Some(0),
                amount: Some(1),
                balance: Some(2),
                description: Some(3),
            }
        );
        assert_eq!(
            result.column_types,
            vec![
                Some(TypeTag::Date),
                Some(TypeTag::Number),
                Some(TypeTag::Number),
                Some(TypeTag::Text)
            ]
        );
        Ok(())
    }

    #[test]
    fn european_single_row() -> Result<()> {
        init_test_logging();
        let result = parse("05.01.2023;-12,50;100,00;Kaffee", &ParseOptions::default())?;

        assert_eq!(result.separator, ';');
        assert_eq!(result.header, None);
        assert_eq!(result.records, vec![strings(&["05.01.2023", "-12,50", "100,00", "Kaffee"])]);
        assert_eq!(result.typed_records[0][1], TypedValue::Number(-12.5));
        assert_eq!(result.typed_records[0][2], TypedValue::Number(100.0));
        assert!(result.typed_records[0][0].is_date());
        assert_eq!(result.column_guesses.date, Some(0));
        assert_eq!(result.column_guesses.amount, Some(1));
        assert_eq!(result.column_guesses.description, Some(3));
        Ok(())
    }

    #[test]
    fn strict_mode_rejects_ragged_rows() {
        let err = parse("a,b\nc,d,e", &ParseOptions::strict()).unwrap_err();
        assert_eq!(err.name(), "FieldCountMismatch");
        assert!(err.to_string().contains("a,b\nc,d,e"));
    }

    #[test]
    fn lenient_mode_pads_ragged_rows() -> Result<()> {
        let result = parse("a,b\nc,d,e", &ParseOptions::default())?;
        assert_eq!(result.num_columns, 3);
        assert_eq!(result.records[0], strings(&["a", "b", ""]));
        assert_eq!(result.typed_records[0][2], TypedValue::Empty);
        Ok(())
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert_eq!(parse("", &ParseOptions::default()), Err(ImportError::NoLines));
        assert_eq!(
            parse(" \r\n\n\t", &ParseOptions::default()),
            Err(ImportError::NoLines)
        );
    }

    #[test]
    fn single_numeric_column_is_amount() -> Result<()> {
        let opts = ParseOptions::default().with_header_keyword_matching(false);
        let result = parse("12.50\n-3.20\n7", &opts)?;

        assert_eq!(result.header, None);
        assert_eq!(result.num_columns, 1);
        assert_eq!(result.column_guesses.amount, Some(0));
        assert_eq!(result.column_guesses.balance, None);
        assert_eq!(result.column_guesses.date, None);
        Ok(())
    }

    #[test]
    fn header_row_is_spliced_from_both_views() -> Result<()> {
        let data = "Booking Date;Text;Amount\n01.02.2024;Rent;-900,00\n02.02.2024;Refund;15,99\n";
        let tokenized = split::tokenize(&split::split_lines(data), ';');

        let result = parse(data, &ParseOptions::default())?;

        let header = result.header.clone().expect("header detected");
        assert_eq!(result.records.len() + 1, tokenized.len());
        assert_eq!(header, tokenized[0]);
        assert_eq!(result.records, tokenized[1..].to_vec());
        assert_eq!(result.records.len(), result.typed_records.len());
        Ok(())
    }

    #[test]
    fn byte_order_mark_does_not_fake_a_header() -> Result<()> {
        let data = "\u{feff}2023-01-05,-12.50,Coffee\n2023-01-06,50.25,Salary\n2023-01-07,3.10,Rent";
        let result = parse(data, &ParseOptions::default())?;

        assert_eq!(result.header, None);
        assert_eq!(result.records.len(), 3);
        assert_eq!(result.records[0][0], "2023-01-05");
        assert!(result.typed_records[0][0].is_date());
        assert_eq!(result.column_guesses.date, Some(0));
        Ok(())
    }

    #[test]
    fn byte_order_mark_before_quoted_header() -> Result<()> {
        let data = "\u{feff}\"Date\",\"Amount\"\n2023-01-05,1.50\n2023-01-06,2.25";
        let result = parse(data, &ParseOptions::default())?;

        assert_eq!(result.header, Some(strings(&["Date", "Amount"])));
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.column_guesses.amount, Some(1));
        Ok(())
    }

    #[test]
    fn quoted_fields_with_embedded_separators() -> Result<()> {
        let data = "\"Date\",\"Payee\",\"Amount\",\"Balance\"\n\
                    \"2023-03-01\",\"Smith, John\",\"-1,234.56\",\"10,000.01\"\n\
                    \"2023-03-02\",\"O'Reilly Books\",\"-45.99\",\"9,954.02\"";
        let result = parse(data, &ParseOptions::default())?;

        assert_eq!(result.separator, ',');
        assert_eq!(result.records[0][1], "Smith, John");
        assert_eq!(result.typed_records[0][2], TypedValue::Number(-1234.56));
        assert_eq!(result.typed_records[0][3], TypedValue::Number(10000.01));
        assert_eq!(result.column_guesses.amount, Some(2));
        assert_eq!(result.column_guesses.balance, Some(3));
        assert_eq!(result.column_guesses.description, Some(1));
        Ok(())
    }

    #[test]
    fn statistics_without_header() -> Result<()> {
        let data = "2023-01-05\tACME Ltd\t1001\t-12.50\t987.50\n\
                    2023-01-06\tCorner Shop\t1002\t-7.25\t980.25\n";
        let result = parse(data, &ParseOptions::default())?;

        assert_eq!(result.separator, '\t');
        assert_eq!(result.header, None);
        assert_eq!(
            result.column_guesses,
            ColumnGuesses {
                date: Some(0),
                amount: Some(3),
                balance: Some(4),
                description: Some(1),
            }
        );
        Ok(())
    }

    #[test]
    fn custom_date_parser_is_used() -> Result<()> {
        let no_dates = |_: &str| -> Option<NaiveDateTime> { None };
        let result = parse_with("2023-01-05,1.5\n2023-01-06,2.5", &ParseOptions::default(), &no_dates)?;

        assert_eq!(result.column_guesses.date, None);
        assert_eq!(result.column_types[0], Some(TypeTag::Text));
        Ok(())
    }

    #[test]
    fn mismatch_policy_comes_from_options() -> Result<()> {
        let opts = ParseOptions::from_yaml_str("fieldCount: strict")?;
        assert_eq!(opts.field_count, FieldCountPolicy::Strict);
        assert!(parse("a;b\nc", &opts).is_err());
        Ok(())
    }

    #[test]
    fn roles_stay_disjoint_across_inputs() -> Result<()> {
        let inputs = [
            "Amount,Balance\n1.5,2.5\n3.5,4.5",
            "Balance Amount,Value\n1.5,2.5\n3.5,4.5",
            "1.5,2.5,3.5\n4.5,5.5,6.5",
            "x,0.5,0\ny,1.5,0.25",
        ];
        for data in inputs {
            let g = parse(data, &ParseOptions::default())?.column_guesses;
            if let (Some(a), Some(b)) = (g.amount, g.balance) {
                assert_ne!(a, b, "input {:?}", data);
            }
        }
        Ok(())
    }

    #[test]
    fn batch_preserves_order() {
        init_test_logging();
        let inputs = vec!["", "a,1.5\nb,2.5", "x;y\nz"];
        let results = parse_batch(&inputs, &ParseOptions::strict());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], Err(ImportError::NoLines));
        assert_eq!(results[1].as_ref().map(|r| r.num_columns), Ok(2));
        assert_eq!(
            results[2].as_ref().map_err(ImportError::name),
            Err("FieldCountMismatch")
        );
    }

    #[test]
    fn result_serializes_with_camel_case_keys() -> Result<()> {
        let result = parse("Date,Amount\n2023-01-05,1.5\n2023-01-06,2.5", &ParseOptions::default())?;
        let json = serde_json::to_value(&result)?;

        assert_eq!(json["numColumns"], 2);
        assert_eq!(json["columnGuesses"]["amount"], 1);
        assert!(json["columnGuesses"]["balance"].is_null());
        assert_eq!(json["typedRecords"][0][0]["type"], "Date");
        assert_eq!(json["columnTypes"][1], "Number");
        Ok(())
    }
}
