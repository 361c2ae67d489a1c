use chrono::NaiveDate;
use marquee::domain::{CellValue, Column, TableRow};
use marquee::query::SortDirection;
use marquee::ui::{FilterPanelBody, PageItem};
use marquee::{
    handle_event, initialize, FilterPlacement, FilterValue, TableConfig, TableEvent,
};

#[derive(Debug, Clone, PartialEq)]
struct Screen {
    id: u32,
    name: String,
    theatre: String,
    opened: NaiveDate,
}

impl Screen {
    fn new(id: u32, name: &str, theatre: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            theatre: theatre.to_string(),
            opened: NaiveDate::parse_from_str("2026-01-01", "%Y-%m-%d").unwrap(),
        }
    }
}

impl TableRow for Screen {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "name" => CellValue::Text(self.name.clone()),
            "theatre" => CellValue::Text(self.theatre.clone()),
            "opened" => CellValue::Date(self.opened),
            _ => CellValue::Missing,
        }
    }

    fn field_names() -> &'static [&'static str] {
        &["name", "theatre", "opened"]
    }
}

fn columns() -> Vec<Column<Screen>> {
    vec![
        Column::new("name", "Screen").sortable(),
        Column::new("theatre", "Theatre").with_derived_options(|rows| {
            let mut theatres: Vec<String> = rows.iter().map(|s| s.theatre.clone()).collect();
            theatres.sort();
            theatres.dedup();
            theatres
        }),
        Column::new("opened", "Opened").with_date_range(),
    ]
}

fn many_screens(count: u32) -> Vec<Screen> {
    (0..count)
        .map(|i| {
            Screen::new(
                i,
                &format!("Screen {i:02}"),
                if i % 2 == 0 { "Grand Lumiere" } else { "Palace Royal" },
            )
        })
        .collect()
}

#[test]
fn test_twenty_five_rows_scenario() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(many_screens(25));

    let vm = table.compute_viewmodel();
    assert_eq!(vm.rows.len(), 10);
    assert_eq!(vm.footer.range_label, "Showing 1 to 10 of 25 entries");
    assert!(vm.footer.at_first);
    assert!(!vm.footer.at_last);

    handle_event(&mut table, &TableEvent::PageSelected(3)).unwrap();
    let vm = table.compute_viewmodel();
    assert_eq!(vm.rows.len(), 5);
    assert_eq!(vm.footer.range_label, "Showing 21 to 25 of 25 entries");
    assert!(!vm.footer.at_first);
    assert!(vm.footer.at_last);
}

#[test]
fn test_page_clamping_through_events() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(many_screens(25));

    handle_event(&mut table, &TableEvent::PageSelected(0)).unwrap();
    assert_eq!(table.query.page, 1);

    handle_event(&mut table, &TableEvent::PageSelected(99)).unwrap();
    assert_eq!(table.query.page, 3);

    handle_event(&mut table, &TableEvent::NextPage).unwrap();
    assert_eq!(table.query.page, 3);

    handle_event(&mut table, &TableEvent::FirstPage).unwrap();
    assert_eq!(table.query.page, 1);

    handle_event(&mut table, &TableEvent::PrevPage).unwrap();
    assert_eq!(table.query.page, 1);

    handle_event(&mut table, &TableEvent::LastPage).unwrap();
    assert_eq!(table.query.page, 3);
}

#[test]
fn test_page_size_change_through_events() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(many_screens(25));

    handle_event(&mut table, &TableEvent::PageSelected(3)).unwrap();
    handle_event(&mut table, &TableEvent::PageSizeSelected(25)).unwrap();

    let vm = table.compute_viewmodel();
    assert_eq!(table.query.page, 1);
    assert_eq!(vm.rows.len(), 25);
    assert_eq!(vm.footer.range_label, "Showing 1 to 25 of 25 entries");
}

#[test]
fn test_short_page_strip_has_no_ellipsis() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(many_screens(25));

    let vm = table.compute_viewmodel();
    assert_eq!(
        vm.footer.items,
        vec![
            PageItem::Number { page: 1, is_current: true },
            PageItem::Number { page: 2, is_current: false },
            PageItem::Number { page: 3, is_current: false },
        ]
    );
}

#[test]
fn test_long_page_strip_collapses_with_ellipsis() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(many_screens(200)); // 20 pages

    let vm = table.compute_viewmodel();
    assert_eq!(
        vm.footer.items,
        vec![
            PageItem::Number { page: 1, is_current: true },
            PageItem::Number { page: 2, is_current: false },
            PageItem::Number { page: 3, is_current: false },
            PageItem::Number { page: 4, is_current: false },
            PageItem::Number { page: 5, is_current: false },
            PageItem::Ellipsis,
            PageItem::Number { page: 20, is_current: false },
        ]
    );

    handle_event(&mut table, &TableEvent::PageSelected(10)).unwrap();
    let vm = table.compute_viewmodel();
    assert_eq!(
        vm.footer.items,
        vec![
            PageItem::Number { page: 1, is_current: false },
            PageItem::Ellipsis,
            PageItem::Number { page: 9, is_current: false },
            PageItem::Number { page: 10, is_current: true },
            PageItem::Number { page: 11, is_current: false },
            PageItem::Ellipsis,
            PageItem::Number { page: 20, is_current: false },
        ]
    );

    handle_event(&mut table, &TableEvent::PageSelected(18)).unwrap();
    let vm = table.compute_viewmodel();
    assert_eq!(
        vm.footer.items,
        vec![
            PageItem::Number { page: 1, is_current: false },
            PageItem::Ellipsis,
            PageItem::Number { page: 16, is_current: false },
            PageItem::Number { page: 17, is_current: false },
            PageItem::Number { page: 18, is_current: true },
            PageItem::Number { page: 19, is_current: false },
            PageItem::Number { page: 20, is_current: false },
        ]
    );
}

#[test]
fn test_sort_indicator_on_active_column_only() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(many_screens(5));

    handle_event(&mut table, &TableEvent::HeaderClicked("name".to_string())).unwrap();
    let vm = table.compute_viewmodel();
    assert_eq!(vm.header_cells[0].indicator, Some(SortDirection::Ascending));
    assert_eq!(vm.header_cells[1].indicator, None);
    assert_eq!(vm.header_cells[2].indicator, None);
}

#[test]
fn test_empty_state_when_nothing_matches() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(many_screens(5));

    handle_event(
        &mut table,
        &TableEvent::SearchInput("zzz-no-such-screen".to_string()),
    )
    .unwrap();
    let vm = table.compute_viewmodel();
    assert!(vm.rows.is_empty());
    assert!(vm.empty_state.is_some());
    assert_eq!(vm.footer.range_label, "Showing 0 to 0 of 0 entries");
}

#[test]
fn test_search_highlights_only_text_cells() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(vec![Screen::new(1, "Screen 01", "Grand Lumiere")]);

    handle_event(&mut table, &TableEvent::SearchInput("screen".to_string())).unwrap();
    let vm = table.compute_viewmodel();
    let row = &vm.rows[0];
    assert_eq!(row.cells[0].highlight_ranges, vec![(0, 6)]);
    // Date cell never carries highlight ranges.
    assert!(row.cells[2].highlight_ranges.is_empty());
}

#[test]
fn test_missing_field_renders_as_empty_string() {
    let table_columns = vec![Column::<Screen>::new("ghost", "Ghost")];
    let mut table = initialize(&TableConfig::default(), table_columns);
    table.mount();
    table.set_rows(vec![Screen::new(1, "Screen 01", "Grand Lumiere")]);

    let vm = table.compute_viewmodel();
    assert_eq!(vm.rows[0].cells[0].text, "");
}

#[test]
fn test_filter_chips_reflect_active_filters() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(many_screens(10));

    handle_event(
        &mut table,
        &TableEvent::FilterApplied {
            column: "theatre".to_string(),
            value: FilterValue::one_of(["Palace Royal"]),
        },
    )
    .unwrap();

    let vm = table.compute_viewmodel();
    assert_eq!(vm.chips.len(), 1);
    assert_eq!(vm.chips[0].column_label, "Theatre");
    assert_eq!(vm.chips[0].summary, "Palace Royal");

    handle_event(&mut table, &TableEvent::ClearFilters).unwrap();
    let vm = table.compute_viewmodel();
    assert!(vm.chips.is_empty());
    assert_eq!(vm.rows.len(), 10);
}

#[test]
fn test_clear_filters_restores_unfiltered_rows() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(many_screens(6));
    let unfiltered: Vec<String> = table.visible_rows().iter().map(|s| s.name.clone()).collect();

    handle_event(
        &mut table,
        &TableEvent::FilterApplied {
            column: "theatre".to_string(),
            value: FilterValue::one_of(["Palace Royal"]),
        },
    )
    .unwrap();
    assert_eq!(table.total(), 3);

    handle_event(&mut table, &TableEvent::ClearFilters).unwrap();
    let restored: Vec<String> = table.visible_rows().iter().map(|s| s.name.clone()).collect();
    assert_eq!(restored, unfiltered);
}

#[test]
fn test_filter_panel_checklist_with_derived_options() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(many_screens(6));

    handle_event(&mut table, &TableEvent::OpenFilterPanel("theatre".to_string())).unwrap();
    let vm = table.compute_viewmodel();
    let panel = vm.filter_panel.expect("panel should be open");
    assert_eq!(panel.column_label, "Theatre");
    match panel.body {
        FilterPanelBody::Checklist {
            options, disabled, ..
        } => {
            assert!(!disabled);
            let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
            assert_eq!(labels, vec!["Grand Lumiere", "Palace Royal"]);
        }
        FilterPanelBody::DateRange { .. } => panic!("expected a checklist"),
    }
}

#[test]
fn test_filter_panel_option_narrowing_and_checkmarks() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(many_screens(6));

    handle_event(
        &mut table,
        &TableEvent::FilterApplied {
            column: "theatre".to_string(),
            value: FilterValue::one_of(["Palace Royal"]),
        },
    )
    .unwrap();
    handle_event(&mut table, &TableEvent::OpenFilterPanel("theatre".to_string())).unwrap();
    handle_event(&mut table, &TableEvent::FilterOptionQuery("palace".to_string())).unwrap();

    let vm = table.compute_viewmodel();
    match vm.filter_panel.expect("panel should be open").body {
        FilterPanelBody::Checklist { options, .. } => {
            assert_eq!(options.len(), 1);
            assert_eq!(options[0].label, "Palace Royal");
            assert!(options[0].checked);
        }
        FilterPanelBody::DateRange { .. } => panic!("expected a checklist"),
    }
}

#[test]
fn test_filter_panel_disabled_with_zero_options() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(Vec::new());

    handle_event(&mut table, &TableEvent::OpenFilterPanel("theatre".to_string())).unwrap();
    let vm = table.compute_viewmodel();
    match vm.filter_panel.expect("panel should be open").body {
        FilterPanelBody::Checklist { disabled, options, .. } => {
            assert!(disabled);
            assert!(options.is_empty());
        }
        FilterPanelBody::DateRange { .. } => panic!("expected a checklist"),
    }
}

#[test]
fn test_toggle_option_builds_and_empties_selection() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(many_screens(6));

    handle_event(&mut table, &TableEvent::OpenFilterPanel("theatre".to_string())).unwrap();
    handle_event(
        &mut table,
        &TableEvent::ToggleFilterOption("Palace Royal".to_string()),
    )
    .unwrap();
    assert_eq!(table.total(), 3);

    handle_event(
        &mut table,
        &TableEvent::ToggleFilterOption("Palace Royal".to_string()),
    )
    .unwrap();
    // Deselecting the last option removed the filter entirely.
    assert!(table.query.filters.is_empty());
    assert_eq!(table.total(), 6);
}

#[test]
fn test_filter_placement_follows_breakpoint() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(many_screens(3));

    handle_event(&mut table, &TableEvent::Resized { rows: 30, cols: 80 }).unwrap();
    assert_eq!(table.filter_placement(), FilterPlacement::SideSheet);

    handle_event(&mut table, &TableEvent::Resized { rows: 30, cols: 140 }).unwrap();
    assert_eq!(table.filter_placement(), FilterPlacement::Popover);
}

#[test]
fn test_resize_ignored_outside_mounted_lifecycle() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.set_rows(many_screens(3));

    let (rendered, _) =
        handle_event(&mut table, &TableEvent::Resized { rows: 50, cols: 200 }).unwrap();
    assert!(!rendered);
    assert_eq!(table.viewport.cols, 80);

    table.mount();
    handle_event(&mut table, &TableEvent::Resized { rows: 50, cols: 200 }).unwrap();
    assert_eq!(table.viewport.cols, 200);

    table.unmount();
    let (rendered, _) =
        handle_event(&mut table, &TableEvent::Resized { rows: 20, cols: 60 }).unwrap();
    assert!(!rendered);
    assert_eq!(table.viewport.cols, 200);
}

#[test]
fn test_row_and_action_events_carry_the_row() {
    use marquee::domain::{RowAction, RowActions};
    use marquee::TableAction;

    let mut table = initialize(&TableConfig::default(), columns())
        .with_actions(RowActions::Static(vec![RowAction::new("Details")]));
    table.mount();
    table.set_rows(many_screens(3));

    let (_, actions) = handle_event(&mut table, &TableEvent::RowClicked(1)).unwrap();
    assert!(matches!(
        actions.as_slice(),
        [TableAction::RowActivated(row)] if row.name == "Screen 01"
    ));

    let (_, actions) = handle_event(
        &mut table,
        &TableEvent::ActionClicked {
            row: 1,
            action: "Details".to_string(),
        },
    )
    .unwrap();
    // Exactly one action event, and no row activation alongside it.
    assert_eq!(actions.len(), 1);
    assert!(matches!(
        &actions[0],
        TableAction::RowActionInvoked { action, row } if action == "Details" && row.name == "Screen 01"
    ));
}

#[test]
fn test_unknown_row_action_is_ignored() {
    use marquee::domain::{RowAction, RowActions};

    let mut table = initialize(&TableConfig::default(), columns())
        .with_actions(RowActions::Static(vec![RowAction::new("Details")]));
    table.mount();
    table.set_rows(many_screens(3));

    let (_, actions) = handle_event(
        &mut table,
        &TableEvent::ActionClicked {
            row: 0,
            action: "Detonate".to_string(),
        },
    )
    .unwrap();
    assert!(actions.is_empty());
}

#[test]
fn test_cursor_wraps_within_visible_page() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(many_screens(3));

    handle_event(&mut table, &TableEvent::CursorUp).unwrap();
    assert_eq!(table.selected_index, 2);

    handle_event(&mut table, &TableEvent::CursorDown).unwrap();
    assert_eq!(table.selected_index, 0);
}

#[test]
fn test_shrinking_data_clamps_current_page() {
    let mut table = initialize(&TableConfig::default(), columns());
    table.mount();
    table.set_rows(many_screens(25));
    handle_event(&mut table, &TableEvent::PageSelected(3)).unwrap();

    // The collection shrinks to a single page; the stale page 3 clamps back.
    table.set_rows(many_screens(5));
    assert_eq!(table.query.page, 1);
    assert_eq!(table.visible_rows().len(), 5);
}
