//! Чистые преобразования партиции в данные для виджетов.
//!
//! Обе проекции идут по партиции в её собственном порядке и ничего не сортируют.

use crate::shared::number_format::format_optional_2;
use contracts::dashboards::d410_product_tickets::{ImageIndex, Partition, ProductRecord};
use serde::Serialize;

/// Строка помесячного списка
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub product_id: String,
    pub product_name: String,
    /// Два знака после точки, без символа валюты
    pub amount_display: String,
    /// Два знака после точки, без единицы
    pub weight_display: String,
    /// `None` - рисуется иконка-заглушка
    pub image_ref: Option<String>,
}

/// Точка treemap, сериализуется как `{x, y}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    #[serde(rename = "x")]
    pub label: String,
    #[serde(rename = "y")]
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
    pub is_empty: bool,
}

fn row_id<'a>(key: &'a str, record: &'a ProductRecord) -> &'a str {
    if record.product_id.is_empty() {
        key
    } else {
        &record.product_id
    }
}

pub fn project_list(partition: &Partition, images: &ImageIndex) -> Vec<ProductRow> {
    partition
        .iter()
        .map(|(key, record)| {
            let product_id = row_id(key, record);
            let image_ref = images
                .get(product_id)
                .map(|image| image.img.clone())
                .filter(|img| !img.is_empty());

            ProductRow {
                product_id: product_id.to_string(),
                product_name: record.product_name.clone(),
                amount_display: format_optional_2(record.total_amount),
                weight_display: format_optional_2(record.total_weight),
                image_ref,
            }
        })
        .collect()
}

pub fn project_series(partition: &Partition) -> ChartSeries {
    let points: Vec<ChartPoint> = partition
        .records()
        .map(|record| ChartPoint {
            label: record.product_name.clone(),
            value: record.total_weight.unwrap_or(0.0),
        })
        .collect();

    ChartSeries {
        is_empty: points.is_empty(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_product_tickets::selectors::has_data;
    use crate::shared::number_format::NOT_AVAILABLE;
    use contracts::dashboards::d410_product_tickets::ProductImage;

    fn partition_from(text: &str) -> Partition {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn test_list_single_row_formatting() {
        let partition = partition_from(
            r#"{"p1": {"product_id": "p1", "product_name": "Widget", "totalAmount": 12.5, "totalWeight": 3.2}}"#,
        );

        let rows = project_list(&partition, &ImageIndex::new());
        assert_eq!(
            rows,
            vec![ProductRow {
                product_id: "p1".into(),
                product_name: "Widget".into(),
                amount_display: "12.50".into(),
                weight_display: "3.20".into(),
                image_ref: None,
            }]
        );
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let partition: Partition = vec![
            ProductRecord::new("A", "Zanahoria", 1.0, 1.0),
            ProductRecord::new("B", "Arroz", 2.0, 2.0),
            ProductRecord::new("C", "Manzana", 3.0, 3.0),
        ]
        .into_iter()
        .collect();

        let ids: Vec<String> = project_list(&partition, &ImageIndex::new())
            .into_iter()
            .map(|row| row.product_id)
            .collect();
        assert_eq!(ids, vec!["A", "B", "C"]);

        // тот же снимок, тот же порядок
        let again: Vec<String> = project_list(&partition, &ImageIndex::new())
            .into_iter()
            .map(|row| row.product_id)
            .collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn test_list_missing_amount_uses_sentinel() {
        let partition = partition_from(
            r#"{
                "p1": {"product_id": "p1", "product_name": "Café", "totalWeight": 5},
                "p2": {"product_id": "p2", "product_name": "Azúcar", "totalAmount": "n/a", "totalWeight": 10},
                "p3": {"product_id": "p3", "product_name": "Sal", "totalAmount": 7, "totalWeight": 1.5}
            }"#,
        );

        let rows = project_list(&partition, &ImageIndex::new());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].amount_display, NOT_AVAILABLE);
        assert_eq!(rows[0].weight_display, "5.00");
        assert_eq!(rows[1].amount_display, NOT_AVAILABLE);
        assert_eq!(rows[2].amount_display, "7.00");
        assert_eq!(rows[2].weight_display, "1.50");
    }

    #[test]
    fn test_list_image_lookup() {
        let partition: Partition = vec![
            ProductRecord::new("p1", "Café", 1.0, 1.0),
            ProductRecord::new("p2", "Azúcar", 1.0, 1.0),
        ]
        .into_iter()
        .collect();
        let mut images = ImageIndex::new();
        images.insert(
            "p2".into(),
            ProductImage {
                img: "https://cdn.example/azucar.png".into(),
            },
        );

        let rows = project_list(&partition, &images);
        assert_eq!(rows[0].image_ref, None);
        assert_eq!(
            rows[1].image_ref.as_deref(),
            Some("https://cdn.example/azucar.png")
        );
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn test_series_points_follow_partition() {
        let partition = partition_from(
            r#"{
                "p1": {"product_id": "p1", "product_name": "Café", "totalAmount": 100, "totalWeight": 5},
                "p2": {"product_id": "p2", "product_name": "Azúcar", "totalAmount": 50, "totalWeight": 10}
            }"#,
        );

        let series = project_series(&partition);
        assert_eq!(
            series.points,
            vec![
                ChartPoint {
                    label: "Café".into(),
                    value: 5.0
                },
                ChartPoint {
                    label: "Azúcar".into(),
                    value: 10.0
                },
            ]
        );
        assert!(!series.is_empty);
    }

    #[test]
    fn test_empty_partition() {
        let partition = Partition::new();

        assert!(project_list(&partition, &ImageIndex::new()).is_empty());
        assert_eq!(
            project_series(&partition),
            ChartSeries {
                points: vec![],
                is_empty: true
            }
        );
    }

    #[test]
    fn test_series_emptiness_matches_presence() {
        let partitions = [
            Partition::new(),
            partition_from(r#"{"p1": {"product_id": "p1", "product_name": "Café"}}"#),
            partition_from(
                r#"{"p1": {"product_id": "p1", "product_name": "Café", "totalWeight": 0},
                    "p2": {"product_id": "p2", "product_name": "Sal", "totalWeight": null}}"#,
            ),
        ];

        for partition in &partitions {
            let series = project_series(partition);
            assert_eq!(series.is_empty, !has_data(partition));
            assert_eq!(series.points.len(), partition.len());
        }
    }

    #[test]
    fn test_point_serializes_as_coordinates() {
        let point = ChartPoint {
            label: "Café".into(),
            value: 5.0,
        };
        assert_eq!(
            serde_json::to_value(&point).unwrap(),
            serde_json::json!({"x": "Café", "y": 5.0})
        );
    }
}
