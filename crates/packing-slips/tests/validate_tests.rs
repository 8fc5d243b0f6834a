use packing_slips::tabular::{parse_export, parse_records};
use packing_slips::*;

const READY: &str = "発送準備中";

fn value(field: Field) -> &'static str {
    if field == Field::Status {
        READY
    } else {
        "x"
    }
}

fn full_record() -> RawRecord {
    Field::REQUIRED
        .iter()
        .map(|field| (field.header(), value(*field)))
        .collect()
}

fn record_without(missing: Field) -> RawRecord {
    Field::REQUIRED
        .iter()
        .filter(|field| **field != missing)
        .map(|field| (field.header(), value(*field)))
        .collect()
}

#[test]
fn test_complete_header_passes() {
    assert!(verify_headers(&full_record()).is_ok());
}

#[test]
fn test_missing_recipient_name_detected() {
    let record = record_without(Field::RecipientName);
    match verify_headers(&record) {
        Err(SlipError::MissingHeader { field }) => assert_eq!(field, Field::RecipientName),
        other => panic!("Expected MissingHeader, got {:?}", other),
    }
}

#[test]
fn test_every_required_field_is_checked() {
    for field in Field::REQUIRED {
        let result = verify_headers(&record_without(field));
        assert!(
            matches!(result, Err(SlipError::MissingHeader { field: f }) if f == field),
            "{:?} not detected",
            field
        );
    }
}

#[test]
fn test_payment_date_is_optional() {
    let items = parse_line_items(&[full_record()], READY).unwrap();
    assert_eq!(items[0].payment_date, None);

    let mut record = full_record();
    record.insert("入金確認日", "2024-05-01");
    let items = parse_line_items(&[record], READY).unwrap();
    assert_eq!(items[0].payment_date.as_deref(), Some("2024-05-01"));
}

#[test]
fn test_missing_header_reported_before_conversion() {
    let records = vec![record_without(Field::RecipientName), full_record()];
    let result = parse_line_items(&records, READY);
    assert!(matches!(
        result,
        Err(SlipError::MissingHeader {
            field: Field::RecipientName
        })
    ));
}

#[test]
fn test_later_incomplete_row_is_rejected() {
    let records = vec![full_record(), record_without(Field::Subtotal)];
    let result = parse_line_items(&records, READY);
    assert!(matches!(
        result,
        Err(SlipError::MissingHeader {
            field: Field::Subtotal
        })
    ));
}

const HEADER: &str = "注文状況,注文日,配送先の住所1,配送先の住所2,注文ID,注文者のユーザーID,数量,作品名,販売価格,小計,配送先の郵便番号,配送先の氏名";

#[test]
fn test_short_row_in_other_status_is_skipped() {
    let csv = format!(
        "{}\n{}\n{}\n",
        HEADER,
        "発送準備中,2024-05-01,東京都千代田区,1-1,1001,u1,1,ピアス,500,500,1000001,佐藤 一郎",
        "キャンセル,2024-05-01,東京都"
    );
    let records = parse_records(csv.as_bytes()).unwrap();

    let items = parse_line_items(&records, READY).unwrap();
    let groups = aggregate_orders(items, READY, SortKey::default());

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].order_id(), "1001");
    assert_eq!(groups[0].line_items().len(), 1);
}

#[test]
fn test_leading_short_row_in_other_status_is_skipped() {
    let csv = format!(
        "{}\n{}\n{}\n",
        HEADER,
        "発送済み,2024-04-30",
        "発送準備中,2024-05-01,東京都千代田区,1-1,1001,u1,1,ピアス,500,500,1000001,佐藤 一郎"
    );
    let records = parse_records(csv.as_bytes()).unwrap();

    let items = parse_line_items(&records, READY).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].order_id, "1001");
}

#[test]
fn test_header_only_export_is_checked() {
    let without_name = HEADER.trim_end_matches(",配送先の氏名");
    let result = parse_export(format!("{}\n", without_name).as_bytes());
    assert!(matches!(
        result,
        Err(SlipError::MissingHeader {
            field: Field::RecipientName
        })
    ));

    let records = parse_export(format!("{}\n", HEADER).as_bytes()).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_column_check_ignores_order() {
    let mut columns: Vec<&str> = Field::REQUIRED.iter().map(|f| f.header()).collect();
    columns.reverse();
    assert!(verify_columns(columns).is_ok());
}

#[test]
fn test_missing_status_column_is_reported() {
    let records = vec![record_without(Field::Status), record_without(Field::Status)];
    let result = parse_line_items(&records, READY);
    assert!(matches!(
        result,
        Err(SlipError::MissingHeader {
            field: Field::Status
        })
    ));
}

#[test]
fn test_empty_batch_yields_no_items() {
    assert!(parse_line_items(&[], READY).unwrap().is_empty());
}

#[test]
fn test_missing_header_message() {
    let err = SlipError::MissingHeader {
        field: Field::RecipientName,
    };
    let message = err.to_string();
    assert!(message.starts_with("エラーが発生しました"));
    assert!(message.contains("配送先の氏名"));
}

#[test]
fn test_no_file_message() {
    assert_eq!(
        SlipError::NoFileSelected.to_string(),
        "注文一覧データのCSVファイルを選んでください"
    );
}

#[test]
fn test_postal_code_formatting() {
    assert_eq!(format_postal_code("7230014"), "〒723-0014");
}
