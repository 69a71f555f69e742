//! Search and pagination over table rows.
//!
//! [`DataView`] owns the rows, the column descriptors and the
//! `(current_page, search_query)` pair. Every read recomputes from current
//! state; nothing is cached between calls.

use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ConfigError;

/// Rows shown per page unless configured otherwise.
pub const PAGE_SIZE: usize = 10;

static NON_SEARCHABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("search normalization pattern"));

/// One table row: column keys mapped to arbitrary JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    /// Empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Raw field lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the row carries `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Row {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Converts a JSON array of objects into rows.
pub fn rows_from_json(value: Value) -> Result<Vec<Row>, ConfigError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(Row(map)),
                _ => Err(ConfigError::RowNotObject { index }),
            })
            .collect(),
        other => Err(ConfigError::RowsNotArray(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Text form of a cell value, used for search and default rendering.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        compound => compound.to_string(),
    }
}

/// Lowercases `text` and drops everything outside `[a-z0-9\s]`.
pub fn normalize_search_text(text: &str) -> String {
    NON_SEARCHABLE
        .replace_all(&text.to_lowercase(), "")
        .into_owned()
}

type ValueFn = Rc<dyn Fn(&Row) -> Value>;

/// How a column turns a row into cell output.
pub enum CellRender<Out> {
    /// Show the derived value as-is.
    Value,
    /// Render from the whole row, ignoring the derived value.
    Custom(Rc<dyn Fn(&Row) -> Out>),
    /// Render from the derived value (first argument) and the row.
    Conditional(Rc<dyn Fn(&Value, &Row) -> Out>),
}

impl<Out> Clone for CellRender<Out> {
    fn clone(&self) -> Self {
        match self {
            Self::Value => Self::Value,
            Self::Custom(render) => Self::Custom(Rc::clone(render)),
            Self::Conditional(render) => Self::Conditional(Rc::clone(render)),
        }
    }
}

impl<Out> fmt::Debug for CellRender<Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Value => "Value",
            Self::Custom(_) => "Custom",
            Self::Conditional(_) => "Conditional",
        })
    }
}

/// Resolved cell content.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<Out> {
    /// Plain derived value.
    Value(Value),
    /// Output of a custom or conditional renderer.
    Rendered(Out),
}

/// Column descriptor: display label, row key and rendering strategy.
pub struct Column<Out> {
    name: String,
    key: String,
    value: Option<ValueFn>,
    render: CellRender<Out>,
}

impl<Out> Clone for Column<Out> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            key: self.key.clone(),
            value: self.value.clone(),
            render: self.render.clone(),
        }
    }
}

impl<Out> fmt::Debug for Column<Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("key", &self.key)
            .field("derived", &self.value.is_some())
            .field("render", &self.render)
            .finish()
    }
}

impl<Out> Column<Out> {
    /// Column that shows the raw `key` field under the `name` label.
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            value: None,
            render: CellRender::Value,
        }
    }

    /// Derives the column value from the row instead of reading `key`.
    pub fn with_value(mut self, value: impl Fn(&Row) -> Value + 'static) -> Self {
        self.value = Some(Rc::new(value));
        self
    }

    /// Renders the cell from the whole row. Takes precedence over any
    /// conditional renderer.
    pub fn with_custom(mut self, render: impl Fn(&Row) -> Out + 'static) -> Self {
        self.render = CellRender::Custom(Rc::new(render));
        self
    }

    /// Renders the cell from the derived value. Ignored once a custom
    /// renderer is set.
    pub fn with_conditional(mut self, render: impl Fn(&Value, &Row) -> Out + 'static) -> Self {
        if !matches!(self.render, CellRender::Custom(_)) {
            self.render = CellRender::Conditional(Rc::new(render));
        }
        self
    }

    /// Display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Row field identifier.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Active rendering strategy.
    pub fn render(&self) -> &CellRender<Out> {
        &self.render
    }

    /// Value derivation result, or the raw field (`null` when absent).
    pub fn derived_value(&self, row: &Row) -> Value {
        match &self.value {
            Some(value) => value(row),
            None => row.get(&self.key).cloned().unwrap_or(Value::Null),
        }
    }

    /// Resolves the cell for `row`: custom, then conditional, then the
    /// derived value.
    pub fn resolve_cell(&self, row: &Row) -> Cell<Out> {
        match &self.render {
            CellRender::Custom(render) => Cell::Rendered(render(row)),
            CellRender::Conditional(render) => {
                Cell::Rendered(render(&self.derived_value(row), row))
            }
            CellRender::Value => Cell::Value(self.derived_value(row)),
        }
    }

    /// Whether cells come from the raw `key` field of the row.
    pub fn reads_key(&self) -> bool {
        self.value.is_none() && !matches!(self.render, CellRender::Custom(_))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawDataViewConfig {
    paginate: bool,
    page_size: usize,
}

impl Default for RawDataViewConfig {
    fn default() -> Self {
        Self {
            paginate: false,
            page_size: PAGE_SIZE,
        }
    }
}

impl TryFrom<RawDataViewConfig> for DataViewConfig {
    type Error = ConfigError;

    fn try_from(raw: RawDataViewConfig) -> Result<Self, Self::Error> {
        DataViewConfig::new(raw.paginate).with_page_size(raw.page_size)
    }
}

/// Table view options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDataViewConfig")]
pub struct DataViewConfig {
    paginate: bool,
    page_size: usize,
}

impl Default for DataViewConfig {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DataViewConfig {
    /// Configuration with the default page size.
    pub fn new(paginate: bool) -> Self {
        Self {
            paginate,
            page_size: PAGE_SIZE,
        }
    }

    /// Overrides the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        self.page_size = page_size;
        Ok(self)
    }

    /// Whether visible rows are sliced into pages.
    pub fn paginate(&self) -> bool {
        self.paginate
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// User-driven view state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// 1-based page index.
    pub current_page: usize,
    /// Raw search query as typed.
    pub search_query: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_page: 1,
            search_query: String::new(),
        }
    }
}

/// Filtered, paginated view over a row collection.
pub struct DataView<Out> {
    columns: Vec<Column<Out>>,
    rows: Vec<Row>,
    config: DataViewConfig,
    state: ViewState,
}

impl<Out> Clone for DataView<Out> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.clone(),
            config: self.config,
            state: self.state.clone(),
        }
    }
}

impl<Out> fmt::Debug for DataView<Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataView")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("config", &self.config)
            .field("state", &self.state)
            .finish()
    }
}

impl<Out> DataView<Out> {
    /// New view on page 1 with an empty query.
    pub fn new(columns: Vec<Column<Out>>, rows: Vec<Row>, config: DataViewConfig) -> Self {
        Self {
            columns,
            rows,
            config,
            state: ViewState::default(),
        }
    }

    /// Column descriptors in display order.
    pub fn columns(&self) -> &[Column<Out>] {
        &self.columns
    }

    /// Full, unfiltered row set.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// View options.
    pub fn config(&self) -> DataViewConfig {
        self.config
    }

    /// Replaces the row set. The current page is kept even if it now points
    /// past the last page; only navigation re-validates it.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    /// Stores `query` and returns to page 1.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.state.current_page = 1;
    }

    /// Raw query as last set.
    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    /// 1-based current page.
    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    /// Moves to `page` when it lies in `1..=total_pages`; otherwise nothing
    /// changes. Returns whether the page was accepted.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.state.current_page = page;
        true
    }

    /// Steps one page forward, if there is one.
    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.state.current_page.saturating_add(1))
    }

    /// Steps one page back, if there is one.
    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.state.current_page.saturating_sub(1))
    }

    /// Rows matching the current query, in input order.
    pub fn filtered_rows(&self) -> Vec<&Row> {
        let needle = normalize_search_text(self.state.search_query.trim());
        if needle.is_empty() {
            return self.rows.iter().collect();
        }
        self.rows
            .iter()
            .filter(|row| self.row_matches(row, &needle))
            .collect()
    }

    fn row_matches(&self, row: &Row, needle: &str) -> bool {
        self.columns.iter().any(|column| {
            normalize_search_text(&cell_text(&column.derived_value(row))).contains(needle)
        })
    }

    /// Rows to display: the filtered rows, sliced to the current page when
    /// pagination is on.
    pub fn visible_rows(&self) -> Vec<&Row> {
        let filtered = self.filtered_rows();
        if !self.config.paginate {
            return filtered;
        }
        let page_size = self.config.page_size;
        let start = self
            .state
            .current_page
            .saturating_sub(1)
            .saturating_mul(page_size);
        filtered.into_iter().skip(start).take(page_size).collect()
    }

    /// `ceil(filtered / page_size)`; zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.filtered_rows().len().div_ceil(self.config.page_size)
    }

    /// Pagination controls are worth showing only when there is more than
    /// one page to move between.
    pub fn shows_pagination(&self) -> bool {
        self.config.paginate
            && self.filtered_rows().len() > self.config.page_size
            && self.total_pages() > 1
    }

    /// Page numbers for the pagination controls.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    /// Current state for persistence.
    pub fn snapshot(&self) -> ViewState {
        self.state.clone()
    }

    /// Re-applies a saved state: the query first, then the page under the
    /// usual navigation rules.
    pub fn restore(&mut self, state: ViewState) {
        self.set_search_query(state.search_query);
        self.go_to_page(state.current_page);
    }

    /// `(row index, key)` pairs where a column reads a key the row lacks.
    pub fn missing_column_keys(&self) -> Vec<(usize, &str)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(index, row)| {
                self.columns
                    .iter()
                    .filter(move |column| column.reads_key() && !row.contains_key(column.key()))
                    .map(move |column| (index, column.key()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn people(count: usize) -> Vec<Row> {
        (1..=count)
            .map(|id| {
                Row::new()
                    .with("id", id as u64)
                    .with("name", format!("Person {id}"))
            })
            .collect()
    }

    fn columns() -> Vec<Column<String>> {
        vec![Column::new("ID", "id"), Column::new("Name", "name")]
    }

    fn paged(rows: Vec<Row>) -> DataView<String> {
        DataView::new(columns(), rows, DataViewConfig::new(true))
    }

    fn ids(rows: &[&Row]) -> Vec<u64> {
        rows.iter()
            .filter_map(|row| row.get("id").and_then(Value::as_u64))
            .collect()
    }

    #[test]
    fn twelve_rows_make_two_pages() {
        let mut view = paged(people(12));
        assert_eq!(view.total_pages(), 2);
        assert_eq!(view.current_page(), 1);
        assert_eq!(ids(&view.visible_rows()), (1..=10u64).collect::<Vec<_>>());

        assert!(!view.go_to_page(3));
        assert_eq!(view.current_page(), 1);

        assert!(view.go_to_page(2));
        assert_eq!(ids(&view.visible_rows()), vec![11, 12]);
    }

    #[test]
    fn out_of_range_navigation_is_ignored() {
        let mut view = paged(people(25));
        assert!(view.go_to_page(2));
        assert!(!view.go_to_page(0));
        assert!(!view.go_to_page(4));
        assert_eq!(view.current_page(), 2);

        assert!(view.next_page());
        assert!(!view.next_page());
        assert_eq!(view.current_page(), 3);
        assert!(view.previous_page());
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn search_resets_to_first_page() {
        let mut view = paged(people(30));
        assert!(view.go_to_page(3));
        view.set_search_query("person 1");
        assert_eq!(view.current_page(), 1);
        // Person 1 and Person 10..=19.
        assert_eq!(view.filtered_rows().len(), 11);
        assert_eq!(view.total_pages(), 2);
    }

    #[test]
    fn repeated_query_is_idempotent() {
        let mut view = paged(people(30));
        view.set_search_query("person 2");
        let first = ids(&view.visible_rows());
        assert!(view.go_to_page(2));
        view.set_search_query("person 2");
        assert_eq!(view.current_page(), 1);
        assert_eq!(ids(&view.visible_rows()), first);

        view.set_search_query("person 2");
        assert_eq!(view.current_page(), 1);
        assert_eq!(ids(&view.visible_rows()), first);
    }

    #[test]
    fn query_without_matches_yields_no_pages() {
        let mut view = paged(people(12));
        view.set_search_query("nobody");
        assert_eq!(view.total_pages(), 0);
        assert!(view.visible_rows().is_empty());
        assert_eq!(view.current_page(), 1);
        assert!(!view.go_to_page(1));
        assert!(view.page_numbers().is_empty());
    }

    #[test]
    fn blank_and_punctuation_queries_match_everything() {
        let mut view = paged(people(12));
        view.set_search_query("   ");
        assert_eq!(view.filtered_rows().len(), 12);
        view.set_search_query("?!.");
        assert_eq!(view.filtered_rows().len(), 12);
    }

    #[test]
    fn search_normalization_strips_punctuation_and_case() {
        let rows = vec![
            Row::from_iter([("name", "J. Doe")]),
            Row::from_iter([("name", "J Doe")]),
            Row::from_iter([("name", "JDoe")]),
            Row::from_iter([("name", "Jane Roe")]),
        ];
        let mut view: DataView<String> =
            DataView::new(vec![Column::new("Name", "name")], rows, DataViewConfig::default());

        view.set_search_query("j. DOE");
        let names: Vec<_> = view
            .filtered_rows()
            .iter()
            .filter_map(|row| row.get("name").and_then(Value::as_str))
            .collect();
        assert_eq!(names, vec!["J. Doe", "J Doe"]);

        view.set_search_query("J.Doe");
        let names: Vec<_> = view
            .filtered_rows()
            .iter()
            .filter_map(|row| row.get("name").and_then(Value::as_str))
            .collect();
        assert_eq!(names, vec!["JDoe"]);
    }

    #[test]
    fn search_uses_derived_values() {
        let rows = vec![
            Row::new().with("first", "Ada").with("last", "Lovelace"),
            Row::new().with("first", "Alan").with("last", "Turing"),
        ];
        let full_name = Column::<String>::new("Name", "full").with_value(|row| {
            let first = row.get("first").map(cell_text).unwrap_or_default();
            let last = row.get("last").map(cell_text).unwrap_or_default();
            Value::String(format!("{first} {last}"))
        });
        let mut view = DataView::new(vec![full_name], rows, DataViewConfig::default());
        view.set_search_query("ada love");
        assert_eq!(view.filtered_rows().len(), 1);
    }

    #[test]
    fn pagination_off_returns_every_filtered_row() {
        let mut view: DataView<String> =
            DataView::new(columns(), people(25), DataViewConfig::default());
        assert_eq!(view.visible_rows().len(), 25);
        assert_eq!(view.total_pages(), 3);
        assert!(!view.shows_pagination());
        view.set_search_query("person 2");
        assert_eq!(view.visible_rows().len(), 7);
    }

    #[test]
    fn pagination_controls_need_more_than_one_page() {
        assert!(!paged(people(10)).shows_pagination());
        assert!(paged(people(11)).shows_pagination());
        let mut view = paged(people(11));
        view.set_search_query("person 11");
        assert!(!view.shows_pagination());
    }

    #[test]
    fn shrinking_rows_leaves_page_stale_until_navigation() {
        let mut view = paged(people(25));
        assert!(view.go_to_page(3));
        view.set_rows(people(5));
        assert_eq!(view.current_page(), 3);
        assert!(view.visible_rows().is_empty());
        assert!(view.go_to_page(1));
        assert_eq!(view.visible_rows().len(), 5);
    }

    #[test]
    fn custom_page_size() {
        let config = DataViewConfig::new(true).with_page_size(4).expect("page size");
        let mut view: DataView<String> = DataView::new(columns(), people(10), config);
        assert_eq!(view.total_pages(), 3);
        assert!(view.go_to_page(3));
        assert_eq!(ids(&view.visible_rows()), vec![9, 10]);
        assert_eq!(
            DataViewConfig::new(true).with_page_size(0),
            Err(ConfigError::ZeroPageSize)
        );
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: DataViewConfig = serde_json::from_str(r#"{"paginate":true}"#).expect("parse");
        assert!(config.paginate());
        assert_eq!(config.page_size(), PAGE_SIZE);
        assert!(serde_json::from_str::<DataViewConfig>(r#"{"page_size":0}"#).is_err());
    }

    #[test]
    fn cell_resolution_follows_precedence() {
        let row = Row::new().with("score", 42).with("label", "answer");

        let raw = Column::<String>::new("Score", "score");
        assert_eq!(raw.resolve_cell(&row), Cell::Value(json!(42)));

        let derived = Column::<String>::new("Score", "score").with_value(|_| json!("derived"));
        assert_eq!(derived.resolve_cell(&row), Cell::Value(json!("derived")));

        let conditional = Column::<String>::new("Score", "score")
            .with_value(|row| json!(row.get("score").and_then(Value::as_i64).unwrap_or(0) * 2))
            .with_conditional(|value, _| format!("value={value}"));
        assert_eq!(
            conditional.resolve_cell(&row),
            Cell::Rendered("value=84".to_string())
        );

        let custom_then_conditional = Column::<String>::new("Label", "label")
            .with_custom(|row| {
                let label = row.get("label").map(cell_text).unwrap_or_default();
                format!("custom:{label}")
            })
            .with_conditional(|_, _| "conditional".to_string());
        assert_eq!(
            custom_then_conditional.resolve_cell(&row),
            Cell::Rendered("custom:answer".to_string())
        );

        let conditional_then_custom = Column::<String>::new("Label", "label")
            .with_conditional(|_, _| "conditional".to_string())
            .with_custom(|_| "custom".to_string());
        assert_eq!(
            conditional_then_custom.resolve_cell(&row),
            Cell::Rendered("custom".to_string())
        );
    }

    #[test]
    fn missing_field_resolves_to_null() {
        let column = Column::<String>::new("Email", "email");
        assert_eq!(column.resolve_cell(&Row::new()), Cell::Value(Value::Null));
    }

    #[test]
    fn snapshot_and_restore_round_trip() {
        let mut view = paged(people(30));
        view.set_search_query("person");
        assert!(view.go_to_page(2));
        let saved = view.snapshot();

        let mut restored = paged(people(30));
        restored.restore(saved.clone());
        assert_eq!(restored.snapshot(), saved);

        let mut smaller = paged(people(5));
        smaller.restore(saved);
        assert_eq!(smaller.current_page(), 1);
        assert_eq!(smaller.search_query(), "person");
    }

    #[test]
    fn reports_rows_missing_column_keys() {
        let rows = vec![
            Row::new().with("id", 1).with("name", "Ada"),
            Row::new().with("id", 2),
        ];
        let derived = Column::<String>::new("Upper", "upper").with_value(|_| Value::Null);
        let view = DataView::new(
            vec![Column::new("ID", "id"), Column::new("Name", "name"), derived],
            rows,
            DataViewConfig::default(),
        );
        assert_eq!(view.missing_column_keys(), vec![(1, "name")]);
    }

    #[test]
    fn rows_from_json_validates_shape() {
        let rows = rows_from_json(json!([{ "id": 1 }, { "id": 2 }])).expect("rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows_from_json(json!({ "id": 1 })),
            Err(ConfigError::RowsNotArray("object"))
        );
        assert_eq!(
            rows_from_json(json!([{ "id": 1 }, 7])),
            Err(ConfigError::RowNotObject { index: 1 })
        );
    }

    #[test]
    fn cell_text_formats_scalars_and_compounds() {
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&json!("text")), "text");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&json!(1.5)), "1.5");
        assert_eq!(cell_text(&json!([1, 2])), "[1,2]");
    }
}
