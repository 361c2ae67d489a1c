//! Demo fleet console and entry point.
//!
//! This binary is the thin host shim around the Marquee library: a cinema
//! fleet device list driven by line commands. It plays the role an embedding
//! console application would: translating input into [`TableEvent`]s,
//! executing the returned [`TableAction`]s, and rendering frames via
//! [`marquee::ui::render`].
//!
//! # Modes
//!
//! - Default: local mode; the full mock device collection is handed to the
//!   engine once and every query change recomputes in-process.
//! - `--delegated`: server-side mode; a mock backend owns the collection,
//!   receives query notifications, and supplies pre-windowed pages with a
//!   total count.
//!
//! # Commands
//!
//! ```text
//! search <text>       set the search term ("search -" clears)
//! sort <column>       cycle sort on a column
//! filter <col> <v..>  multi-select filter values for a column
//! dates <col> <from|-> <to|->   date-range filter (YYYY-MM-DD)
//! clear               clear all filters
//! page <n> | next | prev | first | last
//! size <n>            rows per page
//! open <col> | find <q> | check <label> | close    filter panel
//! j | k | enter       move cursor / activate row
//! act <label>         invoke a row action on the cursor row
//! resize <rows> <cols>
//! help | quit
//! ```

use chrono::NaiveDate;
use marquee::domain::{CellValue, Column, RowAction, RowActions, TableRow};
use marquee::query::executor::run_query;
use marquee::query::{QueryState, SortDirection, SortState};
use marquee::{
    handle_event, initialize, Filter, FilterValue, RemotePage, TableAction, TableConfig,
    TableDelegate, TableEvent, TableState,
};
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// One projection or playback device in a theatre.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FleetDevice {
    serial: String,
    name: String,
    theatre: String,
    status: String,
    screens: u32,
    last_seen: NaiveDate,
    tags: Vec<String>,
}

impl TableRow for FleetDevice {
    fn id(&self) -> String {
        self.serial.clone()
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "serial" => CellValue::Text(self.serial.clone()),
            "name" => CellValue::Text(self.name.clone()),
            "theatre" => CellValue::Text(self.theatre.clone()),
            "status" => CellValue::Text(self.status.clone()),
            "screens" => CellValue::Int(i64::from(self.screens)),
            "last_seen" => CellValue::Date(self.last_seen),
            "tags" => CellValue::List(self.tags.clone()),
            _ => CellValue::Missing,
        }
    }

    fn field_names() -> &'static [&'static str] {
        &[
            "serial", "name", "theatre", "status", "screens", "last_seen", "tags",
        ]
    }
}

/// Builds the column schema for the device list.
fn device_columns() -> Vec<Column<FleetDevice>> {
    vec![
        Column::new("name", "Device").sortable(),
        Column::new("theatre", "Theatre")
            .sortable()
            .with_derived_options(|rows| {
                let mut theatres: Vec<String> =
                    rows.iter().map(|d| d.theatre.clone()).collect();
                theatres.sort();
                theatres.dedup();
                theatres
            }),
        Column::new("status", "Status").with_options(vec![
            "Online".to_string(),
            "Offline".to_string(),
            "Degraded".to_string(),
        ]),
        Column::new("screens", "Screens")
            .sortable()
            .cell(|d| format!("{} scr", d.screens)),
        Column::new("last_seen", "Last seen").sortable().with_date_range(),
        Column::new("tags", "Tags").with_derived_options(|rows| {
            let mut tags: Vec<String> = rows
                .iter()
                .flat_map(|d| d.tags.iter().cloned())
                .collect();
            tags.sort();
            tags.dedup();
            tags
        }),
        Column::derived("seen", "Seen", |d| {
            let days = (chrono::Utc::now().date_naive() - d.last_seen).num_days();
            CellValue::Text(match days {
                d if d <= 0 => "today".to_string(),
                1 => "1d ago".to_string(),
                d => format!("{d}d ago"),
            })
        }),
    ]
}

/// Status-dependent row action menu.
fn device_actions(device: &FleetDevice) -> Vec<RowAction> {
    let mut actions = Vec::new();
    match device.status.as_str() {
        "Online" => actions.push(RowAction::new("Reboot")),
        "Offline" => actions.push(RowAction::new("Ping")),
        "Degraded" => {
            actions.push(RowAction::new("Reboot"));
            actions.push(RowAction::new("Ping"));
        }
        _ => {}
    }
    actions.push(RowAction::new("Details"));
    actions
}

/// Builds the mock device collection.
#[allow(clippy::too_many_lines)]
fn mock_devices() -> Vec<FleetDevice> {
    let seed: [(&str, &str, &str, u32, &str, &[&str]); 28] = [
        ("Orion-PRJ-01", "Grand Lumiere", "Online", 14, "2026-08-05", &["laser", "imax"]),
        ("Orion-PRJ-02", "Grand Lumiere", "Online", 14, "2026-08-06", &["laser"]),
        ("Vega-PRJ-01", "Grand Lumiere", "Degraded", 14, "2026-07-30", &["xenon"]),
        ("Lyra-SRV-01", "Grand Lumiere", "Online", 14, "2026-08-06", &["tms"]),
        ("Orion-PRJ-03", "Palace Royal", "Offline", 9, "2026-07-12", &["xenon"]),
        ("Orion-PRJ-04", "Palace Royal", "Online", 9, "2026-08-04", &["laser"]),
        ("Vega-PRJ-02", "Palace Royal", "Online", 9, "2026-08-05", &["laser", "3d"]),
        ("Lyra-SRV-02", "Palace Royal", "Degraded", 9, "2026-08-01", &["tms"]),
        ("Orion-PRJ-05", "Astoria Plaza", "Online", 6, "2026-08-06", &["xenon"]),
        ("Vega-PRJ-03", "Astoria Plaza", "Online", 6, "2026-08-03", &["laser"]),
        ("Vega-PRJ-04", "Astoria Plaza", "Offline", 6, "2026-06-21", &["xenon", "3d"]),
        ("Lyra-SRV-03", "Astoria Plaza", "Online", 6, "2026-08-06", &["tms"]),
        ("Orion-PRJ-06", "Rex Pavilion", "Degraded", 11, "2026-08-02", &["laser"]),
        ("Orion-PRJ-07", "Rex Pavilion", "Online", 11, "2026-08-05", &["laser", "imax"]),
        ("Vega-PRJ-05", "Rex Pavilion", "Online", 11, "2026-08-06", &["xenon"]),
        ("Lyra-SRV-04", "Rex Pavilion", "Online", 11, "2026-08-06", &["tms"]),
        ("Orion-PRJ-08", "Capitol Lights", "Online", 7, "2026-08-01", &["xenon"]),
        ("Vega-PRJ-06", "Capitol Lights", "Offline", 7, "2026-05-17", &["xenon"]),
        ("Vega-PRJ-07", "Capitol Lights", "Online", 7, "2026-08-06", &["laser", "3d"]),
        ("Lyra-SRV-05", "Capitol Lights", "Degraded", 7, "2026-07-28", &["tms"]),
        ("Orion-PRJ-09", "Odeon Harbor", "Online", 12, "2026-08-06", &["laser"]),
        ("Orion-PRJ-10", "Odeon Harbor", "Online", 12, "2026-08-05", &["laser"]),
        ("Vega-PRJ-08", "Odeon Harbor", "Degraded", 12, "2026-07-25", &["xenon", "imax"]),
        ("Lyra-SRV-06", "Odeon Harbor", "Online", 12, "2026-08-06", &["tms"]),
        ("Orion-PRJ-11", "Majestic Park", "Offline", 5, "2026-07-03", &["xenon"]),
        ("Orion-PRJ-12", "Majestic Park", "Online", 5, "2026-08-04", &["laser"]),
        ("Vega-PRJ-09", "Majestic Park", "Online", 5, "2026-08-06", &["laser", "3d"]),
        ("Lyra-SRV-07", "Majestic Park", "Online", 5, "2026-08-06", &["tms"]),
    ];

    seed.iter()
        .enumerate()
        .map(|(index, (name, theatre, status, screens, seen, tags))| FleetDevice {
            serial: format!("MRQ-{:04}", 1000 + index),
            name: (*name).to_string(),
            theatre: (*theatre).to_string(),
            status: (*status).to_string(),
            screens: *screens,
            last_seen: NaiveDate::parse_from_str(seen, "%Y-%m-%d")
                .unwrap_or_else(|_| chrono::Utc::now().date_naive()),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        })
        .collect()
}

/// Mock backend for delegated mode.
///
/// Owns the full device collection and mirrors the query state it is
/// notified about; each notification recomputes one windowed page through
/// the same pipeline the engine uses locally.
struct MockFleetServer {
    devices: Vec<FleetDevice>,
    columns: Vec<Column<FleetDevice>>,
    query: QueryState,
    pending: Option<RemotePage<FleetDevice>>,
}

impl MockFleetServer {
    fn new(devices: Vec<FleetDevice>, page_size: usize) -> Self {
        Self {
            devices,
            columns: device_columns(),
            query: QueryState::new(page_size),
            pending: None,
        }
    }

    /// Recomputes the current page and queues it for the host to deliver.
    fn recompute(&mut self) {
        let result = run_query(&self.devices, &self.columns, &self.query);
        self.pending = Some(RemotePage {
            rows: result.rows,
            total: result.total,
        });
    }

    /// Takes the queued page, if a notification produced one.
    fn take_page(&mut self) -> Option<RemotePage<FleetDevice>> {
        self.pending.take()
    }
}

impl TableDelegate for MockFleetServer {
    fn on_search_change(&mut self, term: &str) {
        self.query.set_search_term(term.to_string());
        self.recompute();
    }

    fn on_sort_change(&mut self, column: Option<&str>, direction: Option<SortDirection>) {
        self.query.sort = match (column, direction) {
            (Some(column), Some(direction)) => Some(SortState {
                column: column.to_string(),
                direction,
            }),
            _ => None,
        };
        self.recompute();
    }

    fn on_filter_change(&mut self, filters: &[Filter]) {
        self.query.filters = filters.to_vec();
        self.query.page = 1;
        self.recompute();
    }

    fn on_pagination_change(&mut self, page: usize, page_size: usize) {
        self.query.page_size = page_size.max(1);
        self.query.page = page.max(1);
        self.recompute();
    }
}

/// A host-side line command, parsed from stdin.
enum Command {
    Event(TableEvent<FleetDevice>),
    Theme(String),
    Help,
    Quit,
    Unknown(String),
}

/// Parses one input line into a command.
fn parse_command(line: &str, state: &TableState<FleetDevice>) -> Command {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Command::Unknown(String::new());
    };
    let rest: Vec<&str> = parts.collect();

    let event = match head {
        "search" => {
            let term = rest.join(" ");
            let term = if term == "-" { String::new() } else { term };
            TableEvent::SearchInput(term)
        }
        "sort" => match rest.first() {
            Some(column) => TableEvent::HeaderClicked((*column).to_string()),
            None => return Command::Unknown(line.to_string()),
        },
        "filter" => {
            let Some((column, values)) = rest.split_first() else {
                return Command::Unknown(line.to_string());
            };
            TableEvent::FilterApplied {
                column: (*column).to_string(),
                value: FilterValue::one_of(values.iter().map(|v| (*v).to_string())),
            }
        }
        "dates" => {
            let [column, from, to] = rest.as_slice() else {
                return Command::Unknown(line.to_string());
            };
            let parse = |s: &str| {
                if s == "-" {
                    None
                } else {
                    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
                }
            };
            TableEvent::FilterApplied {
                column: (*column).to_string(),
                value: FilterValue::DateRange {
                    from: parse(from),
                    to: parse(to),
                },
            }
        }
        "clear" => TableEvent::ClearFilters,
        "page" => match rest.first().and_then(|n| n.parse().ok()) {
            Some(page) => TableEvent::PageSelected(page),
            None => return Command::Unknown(line.to_string()),
        },
        "next" => TableEvent::NextPage,
        "prev" => TableEvent::PrevPage,
        "first" => TableEvent::FirstPage,
        "last" => TableEvent::LastPage,
        "size" => match rest.first().and_then(|n| n.parse().ok()) {
            Some(size) => TableEvent::PageSizeSelected(size),
            None => return Command::Unknown(line.to_string()),
        },
        "open" => match rest.first() {
            Some(column) => TableEvent::OpenFilterPanel((*column).to_string()),
            None => return Command::Unknown(line.to_string()),
        },
        "find" => TableEvent::FilterOptionQuery(rest.join(" ")),
        "check" => TableEvent::ToggleFilterOption(rest.join(" ")),
        "close" => TableEvent::CloseFilterPanel,
        "j" => TableEvent::CursorDown,
        "k" => TableEvent::CursorUp,
        "enter" => TableEvent::ActivateRow,
        "act" => TableEvent::ActionClicked {
            row: state.selected_index,
            action: rest.join(" "),
        },
        "resize" => {
            let [rows, cols] = rest.as_slice() else {
                return Command::Unknown(line.to_string());
            };
            match (rows.parse().ok(), cols.parse().ok()) {
                (Some(rows), Some(cols)) => TableEvent::Resized { rows, cols },
                _ => return Command::Unknown(line.to_string()),
            }
        }
        "theme" => return Command::Theme(rest.join(" ")),
        "help" => return Command::Help,
        "quit" | "q" => return Command::Quit,
        _ => return Command::Unknown(line.to_string()),
    };
    Command::Event(event)
}

/// Executes actions returned from event handling, returning status text.
fn execute_actions(
    actions: Vec<TableAction<FleetDevice>>,
    server: Option<&mut MockFleetServer>,
) -> (Vec<String>, Option<RemotePage<FleetDevice>>) {
    let mut status = Vec::new();
    let mut page = None;
    let mut server = server;

    for action in actions {
        match action {
            TableAction::Notify(notification) => {
                let wire = notification
                    .to_json()
                    .unwrap_or_else(|e| format!("<encoding error: {e}>"));
                status.push(format!("notify \u{2192} {wire}"));
                if let Some(backend) = server.as_deref_mut() {
                    backend.dispatch(&notification);
                    if let Some(p) = backend.take_page() {
                        page = Some(p);
                    }
                }
            }
            TableAction::RowActivated(row) => {
                status.push(format!("activated {} ({})", row.name, row.serial));
            }
            TableAction::RowActionInvoked { action, row } => {
                status.push(format!("{action} \u{2192} {} ({})", row.name, row.serial));
            }
        }
    }
    (status, page)
}

const HELP_TEXT: &str = "search <text|-> | sort <col> | filter <col> <v..> | dates <col> <from|-> <to|-> | \
clear | page <n> | next | prev | first | last | size <n> | open <col> | find <q> | \
check <label> | close | j | k | enter | act <label> | resize <r> <c> | theme <name> | quit";

fn main() -> marquee::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let delegated = args.iter().any(|a| a == "--delegated");

    let mut map = BTreeMap::new();
    if delegated {
        map.insert("delegated".to_string(), "true".to_string());
    }
    if let Some(position) = args.iter().position(|a| a == "--theme") {
        if let Some(name) = args.get(position + 1) {
            map.insert("theme".to_string(), name.clone());
        }
    }
    map.insert(
        "search_placeholder".to_string(),
        "Search devices\u{2026}".to_string(),
    );
    let config = TableConfig::from_map(&map);

    marquee::observability::init_tracing(&config);
    tracing::debug!(delegated = delegated, "fleet console starting");

    let mut table =
        initialize(&config, device_columns()).with_actions(RowActions::ForRow(device_actions));
    table.mount();

    let devices = mock_devices();
    let mut server = if delegated {
        let mut backend = MockFleetServer::new(devices, config.page_size);
        backend.recompute();
        if let Some(page) = backend.take_page() {
            let _ = handle_event(&mut table, &TableEvent::PageLoaded(page))?;
        }
        Some(backend)
    } else {
        table.set_rows(devices);
        None
    };

    let stdin = io::stdin();
    let mut status_lines: Vec<String> = vec![format!("mode: {:?}  (help for commands)", table.mode)];

    loop {
        draw_frame(&table, &status_lines);
        status_lines.clear();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            // An empty line still advances time, settling pending debounces.
            let (_, actions) = handle_event(&mut table, &TableEvent::Tick(Instant::now()))?;
            let (mut status, page) = execute_actions(actions, server.as_mut());
            status_lines.append(&mut status);
            if let Some(page) = page {
                let _ = handle_event(&mut table, &TableEvent::PageLoaded(page))?;
            }
            continue;
        }

        match parse_command(line, &table) {
            Command::Quit => break,
            Command::Help => status_lines.push(HELP_TEXT.to_string()),
            Command::Theme(name) => match marquee::Theme::from_name(&name) {
                Some(theme) => table.theme = theme,
                None => status_lines.push(format!("unknown theme: {name}")),
            },
            Command::Unknown(input) => {
                status_lines.push(format!("unrecognized command: {input} (try help)"));
            }
            Command::Event(event) => {
                let (_, actions) = handle_event(&mut table, &event)?;
                let (mut status, page) = execute_actions(actions, server.as_mut());
                status_lines.append(&mut status);
                if let Some(page) = page {
                    let _ = handle_event(&mut table, &TableEvent::PageLoaded(page))?;
                }
            }
        }

        // Settle any debounce that has quietly expired since the last input.
        let (_, tick_actions) = handle_event(&mut table, &TableEvent::Tick(Instant::now()))?;
        let (mut status, page) = execute_actions(tick_actions, server.as_mut());
        status_lines.append(&mut status);
        if let Some(page) = page {
            let _ = handle_event(&mut table, &TableEvent::PageLoaded(page))?;
        }
        if table.debouncer.is_pending() {
            status_lines.push("(search pending; press Enter to settle)".to_string());
        }
    }

    table.unmount();
    print!("\u{1b}[2J\u{1b}[H");
    io::stdout().flush()?;
    Ok(())
}

/// Clears the screen, renders the table, and prints status plus prompt.
fn draw_frame(table: &TableState<FleetDevice>, status_lines: &[String]) {
    let rows = table.viewport.rows;
    let cols = table.viewport.cols;

    print!("\u{1b}[2J\u{1b}[H");
    marquee::ui::render(table, rows.saturating_sub(2), cols);

    print!("\u{1b}[{};1H", rows.saturating_sub(1));
    if let Some(status) = status_lines.first() {
        print!("{status}");
    }
    print!("\u{1b}[{rows};1H> ");
    let _ = io::stdout().flush();
}
