//! Tests for parsing and serializing delimited text

use super::*;
use crate::common::Error;
use crate::sheet::CellValue;
use proptest::prelude::*;

#[test]
fn test_parse_quoted_comma() {
    let dataset = parse("name,age\nAna,30\nBea,\"25,5\"").unwrap();

    assert_eq!(dataset.columns().names(), &["name", "age"]);
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.value(0, "name"), Some(&CellValue::from("Ana")));
    assert_eq!(dataset.value(0, "age"), Some(&CellValue::from("30")));
    assert_eq!(dataset.value(1, "age"), Some(&CellValue::from("25,5")));
}

#[test]
fn test_serialize_quotes_comma() {
    let columns = Columns::new(["name", "age"]);
    let rows = vec![DataRow::from_iter(["Bea", "25,5"])];

    let text = serialize(&rows, &columns);
    assert_eq!(text, "name,age\nBea,\"25,5\"");
}

#[test]
fn test_parse_cells_stay_strings() {
    let dataset = parse("n,flag\n42,true").unwrap();
    assert_eq!(dataset.rows()[0].cells(), &[CellValue::from("42"), CellValue::from("true")]);
}

#[test]
fn test_parse_empty_input() {
    assert!(matches!(parse(""), Err(Error::EmptyInput)));
    assert!(matches!(parse("\r\n\r\n"), Err(Error::EmptyInput)));
}

#[test]
fn test_serialize_only_given_rows() {
    let dataset = parse("a,b\n1,2\n3,4\n5,6").unwrap();
    let subset: Vec<&DataRow> = dataset.rows().iter().skip(1).take(1).collect();

    let text = serialize(subset, dataset.columns());
    assert_eq!(text, "a,b\n3,4");
}

#[test]
fn test_round_trip_awkward_cells() {
    let columns = Columns::new(["plain", "comma, inside", "quote\"d"]);
    let rows = vec![
        DataRow::from_iter(["a", "b,c", "\"quoted\""]),
        DataRow::new(vec![CellValue::Empty, CellValue::from("line\nbreak"), CellValue::from("crlf\r\nbreak")]),
        DataRow::from_iter(["  spaced  ", "\t", "ünïcödé"]),
    ];

    let text = serialize(&rows, &columns);
    let back = parse(&text).unwrap();

    assert_eq!(back.columns(), &columns);
    assert_eq!(back.rows(), rows.as_slice());
}

#[test]
fn test_round_trip_header_with_bom_char() {
    let columns = Columns::new(["\u{FEFF}id", "b"]);
    let rows: Vec<DataRow> = Vec::new();

    let back = parse(&serialize(&rows, &columns)).unwrap();
    assert_eq!(back.columns(), &columns);

    let lone = Columns::new(["\u{FEFF}"]);
    let back = parse(&serialize(&rows, &lone)).unwrap();
    assert_eq!(back.columns(), &lone);
}

fn cell_strategy() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        1 => Just(CellValue::Empty),
        6 => "[a-zA-Z0-9 ,\"\r\n\t;é\u{FEFF}]{0,12}".prop_map(CellValue::String),
    ]
}

fn table_strategy() -> impl Strategy<Value = (Columns, Vec<DataRow>)> {
    (1usize..6).prop_flat_map(|width| {
        (
            prop::collection::vec("\u{FEFF}?[a-z][a-z0-9_ ,\"\u{FEFF}]{0,8}", width).prop_map(|names| Columns::new(names)),
            prop::collection::vec(
                prop::collection::vec(cell_strategy(), width).prop_map(DataRow::new),
                0..20,
            ),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_serialize_then_parse_round_trips((columns, rows) in table_strategy()) {
        let text = serialize(&rows, &columns);
        let back = parse(&text);
        prop_assert!(back.is_ok(), "parse failed for {:?}", text);
        let back = back.unwrap();

        prop_assert_eq!(back.columns(), &columns);
        prop_assert_eq!(back.len(), rows.len());
        for (parsed, original) in back.rows().iter().zip(&rows) {
            prop_assert_eq!(parsed.normalized(), original.normalized());
        }
    }
}
