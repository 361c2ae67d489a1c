use marquee::domain::{CellValue, Column, TableRow};
use marquee::query::SortDirection;
use marquee::{
    handle_event, initialize, Filter, FilterValue, QueryNotification, RemotePage, TableAction,
    TableConfig, TableDelegate, TableEvent,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
struct Device {
    serial: String,
    name: String,
}

impl Device {
    fn new(serial: &str, name: &str) -> Self {
        Self {
            serial: serial.to_string(),
            name: name.to_string(),
        }
    }
}

impl TableRow for Device {
    fn id(&self) -> String {
        self.serial.clone()
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "serial" => CellValue::Text(self.serial.clone()),
            "name" => CellValue::Text(self.name.clone()),
            _ => CellValue::Missing,
        }
    }

    fn field_names() -> &'static [&'static str] {
        &["serial", "name"]
    }
}

fn columns() -> Vec<Column<Device>> {
    vec![
        Column::new("name", "Device").sortable(),
        Column::new("serial", "Serial"),
    ]
}

fn delegated_config() -> TableConfig {
    TableConfig {
        delegated: true,
        ..TableConfig::default()
    }
}

fn page(count: usize, total: usize) -> RemotePage<Device> {
    RemotePage {
        rows: (0..count)
            .map(|i| Device::new(&format!("D-{i:03}"), &format!("Device {i:02}")))
            .collect(),
        total,
    }
}

fn notifications(actions: Vec<TableAction<Device>>) -> Vec<QueryNotification> {
    actions
        .into_iter()
        .filter_map(|action| match action {
            TableAction::Notify(n) => Some(n),
            _ => None,
        })
        .collect()
}

#[test]
fn test_search_notification_waits_for_debounce() {
    let mut table = initialize(&delegated_config(), columns());
    table.mount();
    handle_event(&mut table, &TableEvent::PageLoaded(page(10, 40))).unwrap();

    let (_, actions) =
        handle_event(&mut table, &TableEvent::SearchInput("pro".to_string())).unwrap();
    assert!(notifications(actions).is_empty());

    let (_, actions) = handle_event(&mut table, &TableEvent::Tick(Instant::now())).unwrap();
    assert!(notifications(actions).is_empty());

    let settled = Instant::now() + Duration::from_millis(400);
    let (_, actions) = handle_event(&mut table, &TableEvent::Tick(settled)).unwrap();
    assert_eq!(
        notifications(actions),
        vec![QueryNotification::SearchChanged {
            term: "pro".to_string()
        }]
    );
}

#[test]
fn test_rapid_typing_notifies_once_with_last_term() {
    let mut table = initialize(&delegated_config(), columns());
    table.mount();
    handle_event(&mut table, &TableEvent::PageLoaded(page(10, 40))).unwrap();

    for term in ["a", "ab", "abc"] {
        let (_, actions) =
            handle_event(&mut table, &TableEvent::SearchInput(term.to_string())).unwrap();
        assert!(notifications(actions).is_empty());
    }

    let settled = Instant::now() + Duration::from_millis(400);
    let (_, actions) = handle_event(&mut table, &TableEvent::Tick(settled)).unwrap();
    assert_eq!(
        notifications(actions),
        vec![QueryNotification::SearchChanged {
            term: "abc".to_string()
        }]
    );

    // Nothing further settles.
    let later = settled + Duration::from_secs(1);
    let (_, actions) = handle_event(&mut table, &TableEvent::Tick(later)).unwrap();
    assert!(notifications(actions).is_empty());
}

#[test]
fn test_page_change_cancels_pending_debounce() {
    let mut table = initialize(&delegated_config(), columns());
    table.mount();
    handle_event(&mut table, &TableEvent::PageLoaded(page(10, 40))).unwrap();

    handle_event(&mut table, &TableEvent::SearchInput("stale".to_string())).unwrap();

    let (_, actions) = handle_event(&mut table, &TableEvent::PageSelected(3)).unwrap();
    assert_eq!(
        notifications(actions),
        vec![QueryNotification::PageChanged {
            page: 3,
            page_size: 10
        }]
    );

    // The stale search never settles and cannot reset the page.
    let later = Instant::now() + Duration::from_secs(5);
    let (_, actions) = handle_event(&mut table, &TableEvent::Tick(later)).unwrap();
    assert!(notifications(actions).is_empty());
    assert_eq!(table.query.page, 3);
}

#[test]
fn test_page_size_change_cancels_pending_debounce() {
    let mut table = initialize(&delegated_config(), columns());
    table.mount();
    handle_event(&mut table, &TableEvent::PageLoaded(page(10, 40))).unwrap();

    handle_event(&mut table, &TableEvent::SearchInput("stale".to_string())).unwrap();

    let (_, actions) = handle_event(&mut table, &TableEvent::PageSizeSelected(25)).unwrap();
    assert_eq!(
        notifications(actions),
        vec![QueryNotification::PageChanged {
            page: 1,
            page_size: 25
        }]
    );

    let later = Instant::now() + Duration::from_secs(5);
    let (_, actions) = handle_event(&mut table, &TableEvent::Tick(later)).unwrap();
    assert!(notifications(actions).is_empty());
}

#[test]
fn test_unmount_cancels_pending_debounce() {
    let mut table = initialize(&delegated_config(), columns());
    table.mount();
    handle_event(&mut table, &TableEvent::PageLoaded(page(10, 40))).unwrap();

    handle_event(&mut table, &TableEvent::SearchInput("late".to_string())).unwrap();
    table.unmount();

    let later = Instant::now() + Duration::from_secs(5);
    let (_, actions) = handle_event(&mut table, &TableEvent::Tick(later)).unwrap();
    assert!(notifications(actions).is_empty());
}

#[test]
fn test_sort_cycle_notifications() {
    let mut table = initialize(&delegated_config(), columns());
    table.mount();
    handle_event(&mut table, &TableEvent::PageLoaded(page(10, 40))).unwrap();

    let (_, actions) =
        handle_event(&mut table, &TableEvent::HeaderClicked("name".to_string())).unwrap();
    assert_eq!(
        notifications(actions),
        vec![QueryNotification::SortChanged {
            column: Some("name".to_string()),
            direction: Some(SortDirection::Ascending),
        }]
    );

    let (_, actions) =
        handle_event(&mut table, &TableEvent::HeaderClicked("name".to_string())).unwrap();
    assert_eq!(
        notifications(actions),
        vec![QueryNotification::SortChanged {
            column: Some("name".to_string()),
            direction: Some(SortDirection::Descending),
        }]
    );

    let (_, actions) =
        handle_event(&mut table, &TableEvent::HeaderClicked("name".to_string())).unwrap();
    assert_eq!(
        notifications(actions),
        vec![QueryNotification::SortChanged {
            column: None,
            direction: None,
        }]
    );
}

#[test]
fn test_unsortable_header_click_is_a_noop() {
    let mut table = initialize(&delegated_config(), columns());
    table.mount();
    handle_event(&mut table, &TableEvent::PageLoaded(page(10, 40))).unwrap();

    let (rendered, actions) =
        handle_event(&mut table, &TableEvent::HeaderClicked("serial".to_string())).unwrap();
    assert!(!rendered);
    assert!(actions.is_empty());
}

#[test]
fn test_filter_change_notifies_full_active_set() {
    let mut table = initialize(&delegated_config(), columns());
    table.mount();
    handle_event(&mut table, &TableEvent::PageLoaded(page(10, 40))).unwrap();

    let (_, actions) = handle_event(
        &mut table,
        &TableEvent::FilterApplied {
            column: "name".to_string(),
            value: FilterValue::one_of(["Device 01"]),
        },
    )
    .unwrap();
    assert_eq!(
        notifications(actions),
        vec![QueryNotification::FiltersChanged {
            filters: vec![Filter::new("name", FilterValue::one_of(["Device 01"]))],
        }]
    );

    let (_, actions) = handle_event(&mut table, &TableEvent::ClearFilters).unwrap();
    assert_eq!(
        notifications(actions),
        vec![QueryNotification::FiltersChanged { filters: vec![] }]
    );
}

#[test]
fn test_reported_total_is_trusted_over_row_count() {
    let mut table = initialize(&delegated_config(), columns());
    table.mount();

    // The caller mis-reports: 3 rows supplied, total claimed as 500.
    handle_event(&mut table, &TableEvent::PageLoaded(page(3, 500))).unwrap();

    assert_eq!(table.visible_rows().len(), 3);
    assert_eq!(table.total(), 500);
    assert_eq!(table.total_pages(), 50);

    let vm = table.compute_viewmodel();
    assert_eq!(vm.footer.range_label, "Showing 1 to 10 of 500 entries");
    assert_eq!(vm.rows.len(), 3);
}

#[test]
fn test_empty_page_yields_empty_table() {
    let mut table = initialize(&delegated_config(), columns());
    table.mount();

    handle_event(&mut table, &TableEvent::PageLoaded(RemotePage::empty())).unwrap();
    assert!(table.visible_rows().is_empty());
    assert_eq!(table.total(), 0);
    assert_eq!(table.total_pages(), 0);

    let vm = table.compute_viewmodel();
    assert!(vm.empty_state.is_some());
    assert_eq!(vm.footer.range_label, "Showing 0 to 0 of 0 entries");
}

#[test]
fn test_page_load_ignored_in_local_mode() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(vec![Device::new("D-001", "Alpha")]);

    let (rendered, _) = handle_event(&mut table, &TableEvent::PageLoaded(page(5, 99))).unwrap();
    assert!(!rendered);
    assert_eq!(table.total(), 1);
}

#[derive(Default)]
struct RecordingDelegate {
    calls: Vec<String>,
}

impl TableDelegate for RecordingDelegate {
    fn on_search_change(&mut self, term: &str) {
        self.calls.push(format!("search:{term}"));
    }

    fn on_sort_change(&mut self, column: Option<&str>, direction: Option<SortDirection>) {
        self.calls
            .push(format!("sort:{column:?}:{direction:?}"));
    }

    fn on_filter_change(&mut self, filters: &[Filter]) {
        self.calls.push(format!("filters:{}", filters.len()));
    }

    fn on_pagination_change(&mut self, page: usize, page_size: usize) {
        self.calls.push(format!("page:{page}:{page_size}"));
    }
}

#[test]
fn test_dispatch_routes_to_matching_callback() {
    let mut delegate = RecordingDelegate::default();

    delegate.dispatch(&QueryNotification::SearchChanged {
        term: "abc".to_string(),
    });
    delegate.dispatch(&QueryNotification::SortChanged {
        column: Some("name".to_string()),
        direction: Some(SortDirection::Descending),
    });
    delegate.dispatch(&QueryNotification::FiltersChanged {
        filters: vec![Filter::new("name", FilterValue::Scalar("x".to_string()))],
    });
    delegate.dispatch(&QueryNotification::PageChanged {
        page: 2,
        page_size: 25,
    });

    assert_eq!(
        delegate.calls,
        vec![
            "search:abc",
            "sort:Some(\"name\"):Some(Descending)",
            "filters:1",
            "page:2:25",
        ]
    );
}

#[test]
fn test_notification_serialization_is_tagged() {
    let json = QueryNotification::PageChanged {
        page: 3,
        page_size: 25,
    }
    .to_json()
    .unwrap();
    assert!(json.contains("\"event\":\"page_changed\""));

    let json = QueryNotification::SearchChanged {
        term: "imax".to_string(),
    }
    .to_json()
    .unwrap();
    assert!(json.contains("\"event\":\"search_changed\""));
    assert!(json.contains("imax"));
}
