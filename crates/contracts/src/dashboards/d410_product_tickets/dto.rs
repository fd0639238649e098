use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Ticket partition key: sales or purchases ("shop")
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    #[default]
    Sale,
    Shop,
}

impl TicketType {
    pub const ALL: [Self; 2] = [Self::Sale, Self::Shop];

    /// Wire key of the partition ("sale" / "shop")
    pub fn key(self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Shop => "shop",
        }
    }

    /// The other ticket type
    pub fn toggled(self) -> Self {
        match self {
            Self::Sale => Self::Shop,
            Self::Shop => Self::Sale,
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-product totals for one month of tickets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    /// Money total; `None` when absent or not a finite number
    #[serde(rename = "totalAmount", default, deserialize_with = "lenient_number")]
    pub total_amount: Option<f64>,
    /// Weight total in kilograms; `None` when absent or not a finite number
    #[serde(rename = "totalWeight", default, deserialize_with = "lenient_number")]
    pub total_weight: Option<f64>,
}

impl ProductRecord {
    pub fn new(product_id: &str, product_name: &str, total_amount: f64, total_weight: f64) -> Self {
        Self {
            product_id: product_id.to_string(),
            product_name: product_name.to_string(),
            total_amount: Some(total_amount),
            total_weight: Some(total_weight),
        }
    }
}

/// Accepts any JSON value and keeps it only if it is a finite number.
/// Strings, booleans, objects and `null` become `None` instead of failing the snapshot.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_f64())
        .filter(|v| v.is_finite()))
}

/// Ordered mapping product id -> record.
///
/// Iteration follows source order: JSON key order when decoded from text,
/// insertion order when built in code. Re-inserting an existing id replaces the
/// record but keeps its original position.
///
/// Note: decoding through `serde_json::Value` loses key order (its map is sorted),
/// decode from the raw text to keep it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    entries: Vec<(String, ProductRecord)>,
}

impl Partition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, product_id: &str) -> Option<&ProductRecord> {
        self.entries
            .iter()
            .find(|(id, _)| id == product_id)
            .map(|(_, record)| record)
    }

    pub fn insert(&mut self, product_id: String, record: ProductRecord) {
        match self.entries.iter_mut().find(|(id, _)| *id == product_id) {
            Some((_, existing)) => *existing = record,
            None => self.entries.push((product_id, record)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProductRecord)> {
        self.entries
            .iter()
            .map(|(id, record)| (id.as_str(), record))
    }

    pub fn records(&self) -> impl Iterator<Item = &ProductRecord> {
        self.entries.iter().map(|(_, record)| record)
    }
}

impl FromIterator<(String, ProductRecord)> for Partition {
    fn from_iter<I: IntoIterator<Item = (String, ProductRecord)>>(iter: I) -> Self {
        let mut partition = Self::new();
        for (id, record) in iter {
            partition.insert(id, record);
        }
        partition
    }
}

impl FromIterator<ProductRecord> for Partition {
    fn from_iter<I: IntoIterator<Item = ProductRecord>>(iter: I) -> Self {
        iter.into_iter()
            .map(|record| (record.product_id.clone(), record))
            .collect()
    }
}

impl Serialize for Partition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(id, record)| (id, record)))
    }
}

impl<'de> Deserialize<'de> for Partition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PartitionVisitor;

        impl<'de> Visitor<'de> for PartitionVisitor {
            type Value = Partition;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of product id to product record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Partition, A::Error> {
                let mut partition = Partition::new();
                while let Some((id, record)) = access.next_entry::<String, ProductRecord>()? {
                    partition.insert(id, record);
                }
                Ok(partition)
            }
        }

        deserializer.deserialize_map(PartitionVisitor)
    }
}

/// Product totals split by ticket type. Either partition may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductsSaleCharts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale: Option<Partition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop: Option<Partition>,
}

impl ProductsSaleCharts {
    pub fn partition(&self, ticket_type: TicketType) -> Option<&Partition> {
        match ticket_type {
            TicketType::Sale => self.sale.as_ref(),
            TicketType::Shop => self.shop.as_ref(),
        }
    }
}

/// Image reference of a product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    #[serde(default)]
    pub img: String,
}

/// Product id -> image
pub type ImageIndex = HashMap<String, ProductImage>;

/// Ticket management slice of the dashboard store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketManagementState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products_sale_charts: Option<ProductsSaleCharts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_images: Option<ImageIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading: Option<bool>,
}

/// Root of the dashboard store; only the ticket management slice is read here
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(
        rename = "TICKETManagment",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ticket_management: Option<TicketManagementState>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_type_toggle_is_involution() {
        for ticket_type in TicketType::ALL {
            assert_ne!(ticket_type.toggled(), ticket_type);
            assert_eq!(ticket_type.toggled().toggled(), ticket_type);
        }
        assert_eq!(TicketType::default(), TicketType::Sale);
    }

    #[test]
    fn test_partition_keeps_source_order() {
        let partition: Partition = serde_json::from_str(
            r#"{
                "c": {"product_id": "c", "product_name": "Zanahoria", "totalAmount": 1, "totalWeight": 1},
                "a": {"product_id": "a", "product_name": "Manzana", "totalAmount": 2, "totalWeight": 2},
                "b": {"product_id": "b", "product_name": "Arroz", "totalAmount": 3, "totalWeight": 3}
            }"#,
        )
        .unwrap();

        let ids: Vec<&str> = partition.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_partition_duplicate_key_replaces_in_place() {
        let mut partition = Partition::new();
        partition.insert("p1".into(), ProductRecord::new("p1", "Café", 1.0, 1.0));
        partition.insert("p2".into(), ProductRecord::new("p2", "Azúcar", 2.0, 2.0));
        partition.insert("p1".into(), ProductRecord::new("p1", "Café molido", 3.0, 3.0));

        assert_eq!(partition.len(), 2);
        let names: Vec<&str> = partition.records().map(|r| r.product_name.as_str()).collect();
        assert_eq!(names, vec!["Café molido", "Azúcar"]);
    }

    #[test]
    fn test_lenient_numbers() {
        let record: ProductRecord = serde_json::from_str(
            r#"{"product_id": "p1", "product_name": "Café", "totalAmount": "12.5", "totalWeight": null}"#,
        )
        .unwrap();
        assert_eq!(record.total_amount, None);
        assert_eq!(record.total_weight, None);

        let record: ProductRecord =
            serde_json::from_str(r#"{"product_id": "p1", "product_name": "Café"}"#).unwrap();
        assert_eq!(record.total_amount, None);
        assert_eq!(record.total_weight, None);

        let record: ProductRecord = serde_json::from_str(
            r#"{"product_id": "p1", "product_name": "Café", "totalAmount": 100, "totalWeight": 5.25}"#,
        )
        .unwrap();
        assert_eq!(record.total_amount, Some(100.0));
        assert_eq!(record.total_weight, Some(5.25));
    }

    #[test]
    fn test_store_state_optional_slices() {
        let state: StoreState = serde_json::from_str("{}").unwrap();
        assert!(state.ticket_management.is_none());

        let state: StoreState = serde_json::from_str(
            r#"{"TICKETManagment": {"productsSaleCharts": {"shop": {}}, "loading": true}}"#,
        )
        .unwrap();
        let slice = state.ticket_management.unwrap();
        let charts = slice.products_sale_charts.unwrap();
        assert!(charts.partition(TicketType::Sale).is_none());
        assert!(charts.partition(TicketType::Shop).unwrap().is_empty());
        assert!(slice.product_images.is_none());
        assert_eq!(slice.loading, Some(true));
    }

    #[test]
    fn test_partition_serializes_in_order() {
        let partition: Partition = vec![
            ProductRecord::new("b", "Arroz", 1.0, 2.0),
            ProductRecord::new("a", "Frijol", 3.0, 4.0),
        ]
        .into_iter()
        .collect();

        let text = serde_json::to_string(&partition).unwrap();
        assert!(text.find("\"b\"").unwrap() < text.find("\"a\"").unwrap());
    }
}
