use packing_slips::tabular::parse_records;
use packing_slips::*;

const READY: &str = "発送準備中";
const SHIPPED: &str = "発送済み";

fn line(order_id: &str, status: &str, item: &str, subtotal: &str) -> LineItem {
    LineItem {
        status: status.to_string(),
        order_date: "2024-05-01".to_string(),
        address1: "広島県三原市城町1-9-2".to_string(),
        address2: "".to_string(),
        order_id: order_id.to_string(),
        customer_id: format!("user-{}", order_id),
        quantity: "1".to_string(),
        item_name: item.to_string(),
        unit_price: subtotal.to_string(),
        subtotal: subtotal.to_string(),
        postal_code: "7230014".to_string(),
        recipient_name: "山田 花子".to_string(),
        payment_date: None,
    }
}

fn ids(groups: &[OrderGroup]) -> Vec<&str> {
    groups.iter().map(|g| g.order_id()).collect()
}

#[test]
fn test_worked_example() {
    let items = vec![
        line("1001", READY, "ピアス", "500"),
        line("1001", READY, "リング", "300"),
        line("1002", SHIPPED, "ネックレス", "900"),
    ];

    let groups = aggregate_orders(items, READY, SortKey::default());

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].order_id(), "1001");
    assert_eq!(groups[0].line_items().len(), 2);
    assert_eq!(groups[0].total().unwrap(), 800);
}

#[test]
fn test_every_ready_line_in_exactly_one_group() {
    let items = vec![
        line("0003", READY, "a", "100"),
        line("0001", SHIPPED, "b", "100"),
        line("0002", READY, "c", "100"),
        line("0003", READY, "d", "100"),
        line("0002", "キャンセル", "e", "100"),
        line("0001", READY, "f", "100"),
    ];

    let groups = aggregate_orders(items, READY, SortKey::default());

    let mut names: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.line_items().iter().map(|i| i.item_name.as_str()))
        .collect();
    names.sort();
    assert_eq!(names, vec!["a", "c", "d", "f"]);

    for group in &groups {
        assert!(group.line_items().iter().all(|i| i.order_id == group.order_id()));
        assert!(group.line_items().iter().all(|i| i.status == READY));
    }
}

#[test]
fn test_items_keep_input_order() {
    let items = vec![
        line("1001", READY, "first", "100"),
        line("1002", READY, "other", "100"),
        line("1001", READY, "second", "100"),
        line("1001", READY, "third", "100"),
    ];

    let groups = aggregate_orders(items, READY, SortKey::ORDER_DATE_ASC);
    let group = groups.iter().find(|g| g.order_id() == "1001").unwrap();
    let names: Vec<&str> = group.line_items().iter().map(|i| i.item_name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
    assert_eq!(group.head().item_name, "first");
}

#[test]
fn test_default_sort_is_order_id_descending() {
    let items = vec![
        line("1002", READY, "a", "100"),
        line("1010", READY, "b", "100"),
        line("1001", READY, "c", "100"),
    ];

    let groups = aggregate_orders(items, READY, SortKey::default());
    assert_eq!(ids(&groups), vec!["1010", "1002", "1001"]);
}

#[test]
fn test_sort_is_lexicographic() {
    let items = vec![
        line("9", READY, "a", "100"),
        line("10", READY, "b", "100"),
    ];

    let key = SortKey::new(SortField::OrderId, SortOrder::Ascending);
    let groups = aggregate_orders(items, READY, key);
    assert_eq!(ids(&groups), vec!["10", "9"]);
}

#[test]
fn test_sort_ties_keep_first_appearance() {
    let mut a = line("A", READY, "a", "100");
    let mut b = line("B", READY, "b", "100");
    let mut c = line("C", READY, "c", "100");
    a.order_date = "2024-05-02".to_string();
    b.order_date = "2024-05-01".to_string();
    c.order_date = "2024-05-02".to_string();

    let groups = aggregate_orders(vec![c, a, b], READY, SortKey::ORDER_DATE_ASC);
    assert_eq!(ids(&groups), vec!["B", "C", "A"]);
}

#[test]
fn test_payment_date_sort_reads_first_line() {
    let mut a1 = line("A", READY, "a1", "100");
    let mut a2 = line("A", READY, "a2", "100");
    let mut b = line("B", READY, "b", "100");
    let c = line("C", READY, "c", "100");
    a1.payment_date = Some("2024-05-03".to_string());
    a2.payment_date = Some("2024-05-01".to_string());
    b.payment_date = Some("2024-05-02".to_string());

    let groups = aggregate_orders(vec![a1, a2, b, c], READY, SortKey::PAYMENT_DATE_ASC);
    // A missing payment date compares as empty and sorts first
    assert_eq!(ids(&groups), vec!["C", "B", "A"]);
}

#[test]
fn test_custom_ready_status() {
    let items = vec![
        line("1", "ready", "a", "100"),
        line("2", READY, "b", "100"),
    ];
    let groups = aggregate_orders(items, "ready", SortKey::default());
    assert_eq!(ids(&groups), vec!["1"]);
}

#[test]
fn test_empty_input() {
    let groups = aggregate_orders(Vec::new(), READY, SortKey::default());
    assert!(groups.is_empty());
}

const HEADER: &str = "注文状況,注文日,配送先の住所1,配送先の住所2,注文ID,注文者のユーザーID,数量,作品名,販売価格,小計,配送先の郵便番号,配送先の氏名";

fn csv_row(order_id: &str, item: &str) -> String {
    format!(
        "発送準備中,2024-05-01,東京都千代田区,1-1,{},u1,1,{},100,100,1000001,佐藤 一郎",
        order_id, item
    )
}

#[test]
fn test_two_files_concatenate_in_order() {
    let file_a = format!("{}\n{}\n{}\n", HEADER, csv_row("1", "A1"), csv_row("2", "A2"));
    let file_b = format!("{}\n{}\n", HEADER, csv_row("1", "B1"));
    let combined = format!(
        "{}\n{}\n{}\n{}\n",
        HEADER,
        csv_row("1", "A1"),
        csv_row("2", "A2"),
        csv_row("1", "B1")
    );

    let mut records = parse_records(file_a.as_bytes()).unwrap();
    records.extend(parse_records(file_b.as_bytes()).unwrap());
    let from_two = aggregate_orders(parse_line_items(&records, READY).unwrap(), READY, SortKey::default());

    let single = parse_records(combined.as_bytes()).unwrap();
    let from_one = aggregate_orders(parse_line_items(&single, READY).unwrap(), READY, SortKey::default());

    assert_eq!(from_two, from_one);
    let first = from_two.iter().find(|g| g.order_id() == "1").unwrap();
    let names: Vec<&str> = first.line_items().iter().map(|i| i.item_name.as_str()).collect();
    assert_eq!(names, vec!["A1", "B1"]);
}

#[test]
fn test_total_rejects_non_integer_subtotal() {
    let items = vec![
        line("1001", READY, "a", "500"),
        line("1001", READY, "b", "1,200"),
    ];
    let groups = aggregate_orders(items, READY, SortKey::default());

    match groups[0].total() {
        Err(SlipError::InvalidSubtotal { order_id, value }) => {
            assert_eq!(order_id, "1001");
            assert_eq!(value, "1,200");
        }
        other => panic!("Expected InvalidSubtotal, got {:?}", other),
    }
}

#[test]
fn test_group_grows_from_its_first_line() {
    let mut group = OrderGroup::new(line("1001", READY, "a", "100"));
    group.push(line("1001", READY, "b", "200"));

    assert_eq!(group.order_id(), "1001");
    assert_eq!(group.head().item_name, "a");
    assert_eq!(group.line_items().len(), 2);
    assert_eq!(group.total().unwrap(), 300);
}
