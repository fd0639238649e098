//! Производные данные виджетов тикетов: доступ к хранилищу, выбор партиции,
//! признак наличия данных и состояние рендера виджета.

use super::chart_options::TreemapChart;
use super::projection::{project_list, project_series, ProductRow};
use super::state::RenderState;
use super::store::Snapshot;
use crate::shared::memo::Memoized;
use contracts::dashboards::d410_product_tickets::{ImageIndex, Partition, TicketType};
use std::sync::Arc;

/// Обе партиции; после нормализации есть всегда
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partitions {
    pub sale: Partition,
    pub shop: Partition,
}

impl Partitions {
    pub fn get(&self, ticket_type: TicketType) -> &Partition {
        match ticket_type {
            TicketType::Sale => &self.sale,
            TicketType::Shop => &self.shop,
        }
    }
}

/// Нормализованный срез тикетов
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataList {
    pub partitions: Partitions,
    pub images: ImageIndex,
}

/// Читает срез тикетов; любой отсутствующий уровень становится пустым.
pub fn select_data_list(snapshot: &Snapshot) -> DataList {
    let Some(slice) = snapshot.ticket_management() else {
        return DataList::default();
    };

    let partitions = match &slice.products_sale_charts {
        Some(charts) => Partitions {
            sale: charts.sale.clone().unwrap_or_default(),
            shop: charts.shop.clone().unwrap_or_default(),
        },
        None => Partitions::default(),
    };

    DataList {
        partitions,
        images: slice.product_images.clone().unwrap_or_default(),
    }
}

pub fn select_partition(partitions: &Partitions, ticket_type: TicketType) -> Partition {
    partitions.get(ticket_type).clone()
}

/// Есть ли данные - только по числу записей
pub fn has_data(partition: &Partition) -> bool {
    !partition.is_empty()
}

type SelectionKey = (Snapshot, TicketType);

/// Мемоизированная цепочка селекторов одного экземпляра виджета.
///
/// Каждый этап кэшируется по идентичности снимка (и типу тикетов, где он нужен):
/// повторный рендер того же снимка берёт прежние результаты.
#[derive(Debug, Default)]
pub struct ProductSelectors {
    data_list: Memoized<Snapshot, DataList>,
    partition: Memoized<SelectionKey, Partition>,
    rows: Memoized<SelectionKey, Vec<ProductRow>>,
    chart: Memoized<SelectionKey, Option<Arc<TreemapChart>>>,
}

impl ProductSelectors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_list(&mut self, snapshot: &Snapshot) -> Arc<DataList> {
        self.data_list.get_or_compute(snapshot.clone(), || {
            log::debug!("d410: normalizing store snapshot v{}", snapshot.version());
            select_data_list(snapshot)
        })
    }

    pub fn partition(&mut self, snapshot: &Snapshot, ticket_type: TicketType) -> Arc<Partition> {
        let data_list = self.data_list(snapshot);
        self.partition
            .get_or_compute((snapshot.clone(), ticket_type), || {
                select_partition(&data_list.partitions, ticket_type)
            })
    }

    /// Список: без гейта загрузки, считается из текущего снимка.
    pub fn list_view(
        &mut self,
        snapshot: &Snapshot,
        ticket_type: TicketType,
    ) -> RenderState<Arc<Vec<ProductRow>>> {
        let data_list = self.data_list(snapshot);
        let partition = self.partition(snapshot, ticket_type);
        let rows = &mut self.rows;

        RenderState::classify(false, has_data(&partition), || {
            rows.get_or_compute((snapshot.clone(), ticket_type), || {
                project_list(&partition, &data_list.images)
            })
        })
    }

    /// График: пока хранилище грузится, ничего не считается.
    pub fn chart_view(
        &mut self,
        snapshot: &Snapshot,
        ticket_type: TicketType,
    ) -> RenderState<Arc<TreemapChart>> {
        if snapshot.is_loading() {
            return RenderState::Loading;
        }

        let partition = self.partition(snapshot, ticket_type);
        let chart = self.chart.get_or_compute((snapshot.clone(), ticket_type), || {
            TreemapChart::build(ticket_type, &project_series(&partition)).map(Arc::new)
        });

        match chart.as_ref() {
            Some(chart) => RenderState::Populated(Arc::clone(chart)),
            None => RenderState::Empty,
        }
    }
}
