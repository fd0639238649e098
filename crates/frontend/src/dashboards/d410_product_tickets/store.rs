use contracts::dashboards::d410_product_tickets::{StoreState, TicketManagementState};
use leptos::prelude::*;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Неизменяемый версионированный снимок хранилища дашборда.
///
/// Снимки сравниваются по идентичности: равны только снимки с общей
/// аллокацией. По этому признаку селекторы решают, пересчитывать ли данные.
#[derive(Debug, Clone)]
pub struct Snapshot {
    version: u64,
    state: Arc<StoreState>,
}

impl Snapshot {
    pub fn new(state: StoreState) -> Self {
        Self {
            version: 0,
            state: Arc::new(state),
        }
    }

    /// Следующий снимок: состояние заменяется целиком
    pub fn next(&self, state: StoreState) -> Self {
        Self {
            version: self.version + 1,
            state: Arc::new(state),
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn ticket_management(&self) -> Option<&TicketManagementState> {
        self.state.ticket_management.as_ref()
    }

    /// Флаг `loading` среза тикетов; отсутствие означает «не грузится»
    pub fn is_loading(&self) -> bool {
        match self.ticket_management() {
            Some(TicketManagementState {
                loading: Some(loading),
                ..
            }) => *loading,
            _ => false,
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new(StoreState::default())
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

/// Общий хэндл хранилища, раздаётся через контекст.
/// Пишет сюда загрузчик агрегатов тикетов, виджеты только читают.
#[derive(Clone, Copy)]
pub struct TicketStore {
    snapshot: RwSignal<Snapshot>,
}

impl TicketStore {
    pub fn new() -> Self {
        Self {
            snapshot: RwSignal::new(Snapshot::default()),
        }
    }

    /// Текущий снимок (с отслеживанием)
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.get()
    }

    /// Подменяет состояние целиком
    pub fn replace(&self, state: StoreState) {
        self.snapshot.update(|snapshot| *snapshot = snapshot.next(state));
    }

    /// Декодирует `StoreState` из JSON-текста и подменяет состояние.
    /// Разбор идёт по тексту, поэтому порядок товаров в партициях сохраняется.
    /// При ошибке разбора хранилище не меняется.
    pub fn replace_from_json(&self, text: &str) -> Result<(), serde_json::Error> {
        let state: StoreState = serde_json::from_str(text)?;
        self.replace(state);
        Ok(())
    }

    pub fn set_loading(&self, loading: bool) {
        self.snapshot.update(|snapshot| {
            let mut state = snapshot.state().clone();
            state
                .ticket_management
                .get_or_insert_with(TicketManagementState::default)
                .loading = Some(loading);
            *snapshot = snapshot.next(state);
        });
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}

static APP_TICKET_STORE: OnceCell<TicketStore> = OnceCell::new();

/// Хранилище приложения: одно на страницу, его же видят экспорты в JS
pub fn app_ticket_store() -> TicketStore {
    *APP_TICKET_STORE.get_or_init(TicketStore::new)
}

pub fn provide_ticket_store(store: TicketStore) {
    provide_context(store);
}

/// Хранилище из контекста. Без провайдера виджеты рисуются по пустому хранилищу.
pub fn use_ticket_store() -> TicketStore {
    use_context::<TicketStore>().unwrap_or_else(|| {
        log::warn!("TicketStore is not provided, using an empty store");
        TicketStore::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_product_tickets::selectors::ProductSelectors;
    use crate::dashboards::d410_product_tickets::state::RenderState;
    use contracts::dashboards::d410_product_tickets::TicketType;

    #[test]
    fn test_snapshot_equality_is_identity() {
        let first = Snapshot::new(StoreState::default());
        let clone = first.clone();
        let next = first.next(StoreState::default());

        assert_eq!(first, clone);
        assert_ne!(first, next);
        assert_eq!(next.version(), 1);
    }

    #[test]
    fn test_snapshot_loading_flag() {
        assert!(!Snapshot::default().is_loading());

        let state = StoreState {
            ticket_management: Some(TicketManagementState {
                loading: Some(true),
                ..Default::default()
            }),
        };
        assert!(Snapshot::new(state).is_loading());
    }

    #[test]
    fn test_store_replace_and_loading() {
        let owner = Owner::new();
        owner.with(|| {
            let store = TicketStore::new();
            let initial = store.snapshot();

            store.set_loading(true);
            let loading = store.snapshot();
            assert!(loading.is_loading());
            assert_ne!(initial, loading);
            assert_eq!(loading.version(), 1);

            store.replace(StoreState::default());
            let replaced = store.snapshot();
            assert!(!replaced.is_loading());
            assert_eq!(replaced.version(), 2);
        });
    }

    #[test]
    fn test_replace_from_json_populates_list() {
        let owner = Owner::new();
        owner.with(|| {
            let store = TicketStore::new();
            let mut selectors = ProductSelectors::new();
            assert_eq!(
                selectors.list_view(&store.snapshot(), TicketType::Sale),
                RenderState::Empty
            );

            store
                .replace_from_json(
                    r#"{"TICKETManagment": {"productsSaleCharts": {"sale": {
                        "zeta": {"product_id": "zeta", "product_name": "Zeta", "totalAmount": 2.125, "totalWeight": 1},
                        "alfa": {"product_id": "alfa", "product_name": "Alfa", "totalAmount": 3, "totalWeight": 4.5}
                    }}}}"#,
                )
                .unwrap();

            match selectors.list_view(&store.snapshot(), TicketType::Sale) {
                RenderState::Populated(rows) => {
                    let ids: Vec<_> = rows.iter().map(|row| row.product_id.as_str()).collect();
                    assert_eq!(ids, ["zeta", "alfa"]);
                    assert_eq!(rows[0].amount_display, "2.13");
                }
                other => panic!("expected rows, got {other:?}"),
            }
        });
    }

    #[test]
    fn test_replace_from_json_rejects_bad_text() {
        let owner = Owner::new();
        owner.with(|| {
            let store = TicketStore::new();
            let before = store.snapshot();

            assert!(store.replace_from_json("{\"TICKETManagment\": ").is_err());
            assert_eq!(store.snapshot(), before);
            assert_eq!(store.snapshot().version(), 0);
        });
    }
}
