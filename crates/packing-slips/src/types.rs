use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlipError {
    #[error("注文一覧データのCSVファイルを選んでください")]
    NoFileSelected,
    #[error(
        "エラーが発生しました：An expected header is missing in one of the provided files. ({})",
        .field.header()
    )]
    MissingHeader { field: Field },
    #[error("Order {order_id}: subtotal {value:?} is not an integer")]
    InvalidSubtotal { order_id: String, value: String },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Asset error: {0}")]
    Asset(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, SlipError>;

/// Column roles of the order-list export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Status,
    OrderDate,
    Address1,
    Address2,
    OrderId,
    CustomerId,
    Quantity,
    ItemName,
    UnitPrice,
    Subtotal,
    PostalCode,
    RecipientName,
    PaymentDate,
}

impl Field {
    /// Every column a batch must carry, in export order.
    pub const REQUIRED: [Field; 12] = [
        Field::Status,
        Field::OrderDate,
        Field::Address1,
        Field::Address2,
        Field::OrderId,
        Field::CustomerId,
        Field::Quantity,
        Field::ItemName,
        Field::UnitPrice,
        Field::Subtotal,
        Field::PostalCode,
        Field::RecipientName,
    ];

    /// Header text used by the shop platform's CSV export
    pub fn header(self) -> &'static str {
        match self {
            Field::Status => "注文状況",
            Field::OrderDate => "注文日",
            Field::Address1 => "配送先の住所1",
            Field::Address2 => "配送先の住所2",
            Field::OrderId => "注文ID",
            Field::CustomerId => "注文者のユーザーID",
            Field::Quantity => "数量",
            Field::ItemName => "作品名",
            Field::UnitPrice => "販売価格",
            Field::Subtotal => "小計",
            Field::PostalCode => "配送先の郵便番号",
            Field::RecipientName => "配送先の氏名",
            Field::PaymentDate => "入金確認日",
        }
    }
}

/// One CSV data row keyed by header name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    values: HashMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.values.insert(header.into(), value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(field.header()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Typed view of a single order line
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub status: String,
    pub order_date: String,
    pub address1: String,
    pub address2: String,
    pub order_id: String,
    pub customer_id: String,
    pub quantity: String,
    pub item_name: String,
    pub unit_price: String,
    pub subtotal: String,
    pub postal_code: String,
    pub recipient_name: String,
    pub payment_date: Option<String>,
}

impl TryFrom<&RawRecord> for LineItem {
    type Error = SlipError;

    fn try_from(record: &RawRecord) -> Result<Self> {
        let required = |field: Field| {
            record
                .get(field)
                .map(str::to_owned)
                .ok_or(SlipError::MissingHeader { field })
        };

        Ok(Self {
            status: required(Field::Status)?,
            order_date: required(Field::OrderDate)?,
            address1: required(Field::Address1)?,
            address2: required(Field::Address2)?,
            order_id: required(Field::OrderId)?,
            customer_id: required(Field::CustomerId)?,
            quantity: required(Field::Quantity)?,
            item_name: required(Field::ItemName)?,
            unit_price: required(Field::UnitPrice)?,
            subtotal: required(Field::Subtotal)?,
            postal_code: required(Field::PostalCode)?,
            recipient_name: required(Field::RecipientName)?,
            payment_date: record.get(Field::PaymentDate).map(str::to_owned),
        })
    }
}

impl LineItem {
    /// Value used when sorting groups by `field`
    pub fn sort_value(&self, field: crate::SortField) -> &str {
        match field {
            crate::SortField::OrderId => &self.order_id,
            crate::SortField::OrderDate => &self.order_date,
            crate::SortField::PaymentDate => self.payment_date.as_deref().unwrap_or(""),
        }
    }

    /// Item line as printed on the packing slip
    pub fn description(&self) -> String {
        format!(
            "□個数：{} {} 単価：{}円 小計：{}円",
            self.quantity, self.item_name, self.unit_price, self.subtotal
        )
    }

    pub fn subtotal_value(&self) -> Result<i64> {
        self.subtotal
            .trim()
            .parse::<i64>()
            .map_err(|_| SlipError::InvalidSubtotal {
                order_id: self.order_id.clone(),
                value: self.subtotal.clone(),
            })
    }
}

/// All lines of one customer order, shipped as a unit.
///
/// A group is created from its first line and only grows, so it is never
/// empty and every line shares its order id.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderGroup {
    order_id: String,
    line_items: Vec<LineItem>,
}

impl OrderGroup {
    pub fn new(first: LineItem) -> Self {
        Self {
            order_id: first.order_id.clone(),
            line_items: vec![first],
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Append a line of the same order
    pub fn push(&mut self, item: LineItem) {
        debug_assert_eq!(item.order_id, self.order_id);
        self.line_items.push(item);
    }

    /// The line that carries the order's destination and customer data
    pub fn head(&self) -> &LineItem {
        &self.line_items[0]
    }

    pub fn total(&self) -> Result<i64> {
        self.line_items
            .iter()
            .map(LineItem::subtotal_value)
            .sum()
    }
}
