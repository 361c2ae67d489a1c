use marquee::TableConfig;
use std::collections::BTreeMap;

#[test]
fn test_defaults() {
    let config = TableConfig::default();
    assert!(config.searchable);
    assert!(!config.delegated);
    assert!(config.show_filters);
    assert_eq!(config.page_size, 10);
    assert_eq!(config.page_size_options, vec![10, 25, 50, 100]);
    assert_eq!(config.debounce_ms, 300);
    assert_eq!(config.breakpoint_cols, 100);
}

#[test]
fn test_from_map_parses_typed_values() {
    let mut map = BTreeMap::new();
    map.insert("searchable".to_string(), "false".to_string());
    map.insert("delegated".to_string(), "true".to_string());
    map.insert("page_size".to_string(), "25".to_string());
    map.insert("page_size_options".to_string(), "25, 50, 100".to_string());
    map.insert("debounce_ms".to_string(), "150".to_string());
    map.insert("breakpoint_cols".to_string(), "120".to_string());
    map.insert("theme".to_string(), "catppuccin-latte".to_string());

    let config = TableConfig::from_map(&map);
    assert!(!config.searchable);
    assert!(config.delegated);
    assert_eq!(config.page_size, 25);
    assert_eq!(config.page_size_options, vec![25, 50, 100]);
    assert_eq!(config.debounce_ms, 150);
    assert_eq!(config.breakpoint_cols, 120);
    assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
}

#[test]
fn test_from_map_falls_back_on_invalid_values() {
    let mut map = BTreeMap::new();
    map.insert("page_size".to_string(), "zero".to_string());
    map.insert("page_size_options".to_string(), "a, b".to_string());
    map.insert("debounce_ms".to_string(), "-5".to_string());

    let config = TableConfig::from_map(&map);
    assert_eq!(config.page_size, 10);
    assert_eq!(config.page_size_options, vec![10, 25, 50, 100]);
    assert_eq!(config.debounce_ms, 300);
}

#[test]
fn test_from_map_rejects_zero_page_size() {
    let mut map = BTreeMap::new();
    map.insert("page_size".to_string(), "0".to_string());
    let config = TableConfig::from_map(&map);
    assert_eq!(config.page_size, 10);
}
