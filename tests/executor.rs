use chrono::NaiveDate;
use marquee::domain::{CellValue, Column, TableRow};
use marquee::query::executor::{match_ranges, run_query};
use marquee::query::{QueryState, SortDirection, SortState};
use marquee::{Filter, FilterValue};

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    id: u32,
    name: String,
    score: i64,
    added: NaiveDate,
    tags: Vec<String>,
}

impl Entry {
    fn new(id: u32, name: &str, score: i64, added: &str, tags: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            score,
            added: NaiveDate::parse_from_str(added, "%Y-%m-%d").unwrap(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

impl TableRow for Entry {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "name" => CellValue::Text(self.name.clone()),
            "score" => CellValue::Int(self.score),
            "added" => CellValue::Date(self.added),
            "tags" => CellValue::List(self.tags.clone()),
            _ => CellValue::Missing,
        }
    }

    fn field_names() -> &'static [&'static str] {
        &["name", "score", "added", "tags"]
    }
}

fn columns() -> Vec<Column<Entry>> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("score", "Score").sortable(),
        Column::new("added", "Added").sortable().with_date_range(),
        Column::new("tags", "Tags"),
    ]
}

fn sample() -> Vec<Entry> {
    vec![
        Entry::new(1, "Alpha", 2, "2026-01-10", &["imax"]),
        Entry::new(2, "beta", 1, "2026-02-20", &["3d"]),
        Entry::new(3, "Gamma", 3, "2026-03-05", &["imax", "3d"]),
        Entry::new(4, "delta", 1, "2026-04-15", &[]),
    ]
}

fn query() -> QueryState {
    QueryState::new(10)
}

#[test]
fn test_empty_query_returns_all() {
    let rows = sample();
    let result = run_query(&rows, &columns(), &query());
    assert_eq!(result.total, 4);
    assert_eq!(result.rows, rows);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let rows = vec![
        Entry::new(1, "Alpha", 2, "2026-01-10", &[]),
        Entry::new(2, "beta", 1, "2026-02-20", &[]),
    ];
    let mut q = query();
    q.set_search_term("a");
    let result = run_query(&rows, &columns(), &q);
    // "a" appears in both "Alpha" and "beta".
    assert_eq!(result.total, 2);
}

#[test]
fn test_search_skips_non_string_fields() {
    let rows = vec![Entry::new(1, "Alpha", 42, "2026-01-10", &[])];
    let mut q = query();
    q.set_search_term("42");
    let result = run_query(&rows, &columns(), &q);
    assert_eq!(result.total, 0);
}

#[test]
fn test_search_then_filter_then_sort_ordering() {
    let rows = vec![
        Entry::new(1, "Alpha", 2, "2026-01-10", &[]),
        Entry::new(2, "beta", 1, "2026-02-20", &[]),
    ];
    let mut q = query();
    q.set_search_term("a");
    let searched = run_query(&rows, &columns(), &q);
    assert_eq!(searched.total, 2);

    q.set_filter("score", FilterValue::Scalar("1".to_string()));
    let filtered = run_query(&rows, &columns(), &q);
    assert_eq!(filtered.total, 1);
    assert_eq!(filtered.rows[0].name, "beta");

    q.cycle_sort("name");
    let sorted = run_query(&rows, &columns(), &q);
    assert_eq!(sorted.total, 1);
    assert_eq!(sorted.rows[0].name, "beta");
}

#[test]
fn test_filters_combine_with_and() {
    let rows = sample();
    let mut q = query();
    q.set_filter("score", FilterValue::Scalar("1".to_string()));
    assert_eq!(run_query(&rows, &columns(), &q).total, 2);

    q.set_filter("name", FilterValue::Scalar("beta".to_string()));
    let result = run_query(&rows, &columns(), &q);
    assert_eq!(result.total, 1);
    assert_eq!(result.rows[0].id, 2);
}

#[test]
fn test_date_range_inclusive_on_both_ends() {
    let rows = sample();
    let mut q = query();
    q.set_filter(
        "added",
        FilterValue::DateRange {
            from: NaiveDate::parse_from_str("2026-02-20", "%Y-%m-%d").ok(),
            to: NaiveDate::parse_from_str("2026-03-05", "%Y-%m-%d").ok(),
        },
    );
    let result = run_query(&rows, &columns(), &q);
    assert_eq!(result.total, 2);
    assert_eq!(result.rows[0].name, "beta");
    assert_eq!(result.rows[1].name, "Gamma");
}

#[test]
fn test_date_range_one_sided_bounds() {
    let rows = sample();
    let mut q = query();
    q.set_filter(
        "added",
        FilterValue::DateRange {
            from: NaiveDate::parse_from_str("2026-03-01", "%Y-%m-%d").ok(),
            to: None,
        },
    );
    assert_eq!(run_query(&rows, &columns(), &q).total, 2);

    q.set_filter(
        "added",
        FilterValue::DateRange {
            from: None,
            to: NaiveDate::parse_from_str("2026-01-31", "%Y-%m-%d").ok(),
        },
    );
    assert_eq!(run_query(&rows, &columns(), &q).total, 1);
}

#[test]
fn test_set_filter_matches_any_value_in_list_cells() {
    let rows = sample();
    let mut q = query();
    q.set_filter("tags", FilterValue::one_of(["imax"]));
    let result = run_query(&rows, &columns(), &q);
    assert_eq!(result.total, 2);
    assert!(result.rows.iter().all(|r| r.tags.contains(&"imax".to_string())));
}

#[test]
fn test_set_filter_membership_for_scalar_cells() {
    let rows = sample();
    let mut q = query();
    q.set_filter("name", FilterValue::one_of(["Alpha", "delta"]));
    let result = run_query(&rows, &columns(), &q);
    assert_eq!(result.total, 2);
}

#[test]
fn test_sort_ascending_and_descending() {
    let rows = sample();
    let mut q = query();
    q.cycle_sort("score");
    let asc = run_query(&rows, &columns(), &q);
    let scores: Vec<i64> = asc.rows.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![1, 1, 2, 3]);

    q.cycle_sort("score");
    let desc = run_query(&rows, &columns(), &q);
    let scores: Vec<i64> = desc.rows.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![3, 2, 1, 1]);
}

#[test]
fn test_sort_is_stable_for_ties() {
    let rows = sample();
    let mut q = query();
    q.cycle_sort("score");
    let result = run_query(&rows, &columns(), &q);
    // beta (id 2) precedes delta (id 4) in the input; both score 1.
    assert_eq!(result.rows[0].id, 2);
    assert_eq!(result.rows[1].id, 4);
}

#[test]
fn test_string_sort_ignores_case() {
    let rows = sample();
    let mut q = query();
    q.cycle_sort("name");
    let result = run_query(&rows, &columns(), &q);
    let names: Vec<&str> = result.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "beta", "delta", "Gamma"]);
}

#[test]
fn test_sort_cycle_restores_input_order() {
    let rows = sample();
    let mut q = query();
    q.cycle_sort("name");
    q.cycle_sort("name");
    q.cycle_sort("name");
    assert!(q.sort.is_none());
    let result = run_query(&rows, &columns(), &q);
    assert_eq!(result.rows, rows);
}

#[test]
fn test_missing_values_sort_first() {
    let mut rows = sample();
    rows.push(Entry::new(5, "Omega", 0, "2026-05-01", &[]));
    let cols = vec![Column::<Entry>::new("nonexistent", "Ghost").sortable()];
    let mut q = query();
    q.sort = Some(SortState {
        column: "nonexistent".to_string(),
        direction: SortDirection::Ascending,
    });
    // Every value is Missing; stable sort keeps input order and nothing panics.
    let result = run_query(&rows, &cols, &q);
    assert_eq!(result.rows, rows);
}

#[test]
fn test_filter_on_unknown_column_is_skipped() {
    let rows = sample();
    let mut q = query();
    q.filters
        .push(Filter::new("ghost", FilterValue::Scalar("x".to_string())));
    assert_eq!(run_query(&rows, &columns(), &q).total, 4);
}

#[test]
fn test_pagination_slices_after_sorting() {
    let rows: Vec<Entry> = (0..25)
        .map(|i| Entry::new(i, &format!("Device {i:02}"), i64::from(i), "2026-01-01", &[]))
        .collect();
    let mut q = QueryState::new(10);

    let page1 = run_query(&rows, &columns(), &q);
    assert_eq!(page1.total, 25);
    assert_eq!(page1.rows.len(), 10);
    assert_eq!(page1.rows[0].id, 0);

    q.set_page(3, q.total_pages(25));
    let page3 = run_query(&rows, &columns(), &q);
    assert_eq!(page3.rows.len(), 5);
    assert_eq!(page3.rows[0].id, 20);
    assert_eq!(page3.rows[4].id, 24);
}

#[test]
fn test_total_counts_matches_before_pagination() {
    let rows: Vec<Entry> = (0..25)
        .map(|i| Entry::new(i, &format!("Device {i:02}"), 1, "2026-01-01", &[]))
        .collect();
    let q = QueryState::new(10);
    let result = run_query(&rows, &columns(), &q);
    assert_eq!(result.rows.len(), 10);
    assert_eq!(result.total, 25);
}

#[test]
fn test_same_query_twice_is_idempotent() {
    let rows = sample();
    let mut q = query();
    q.set_search_term("a");
    q.cycle_sort("name");
    let first = run_query(&rows, &columns(), &q);
    let second = run_query(&rows, &columns(), &q);
    assert_eq!(first, second);
}

#[test]
fn test_match_ranges_finds_all_occurrences() {
    assert_eq!(match_ranges("Alpha", "a"), vec![(0, 1), (4, 5)]);
    assert_eq!(match_ranges("banana", "an"), vec![(1, 3), (3, 5)]);
    assert!(match_ranges("Alpha", "").is_empty());
    assert!(match_ranges("Alpha", "z").is_empty());
}
