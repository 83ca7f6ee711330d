//! A row of array cells with an optional selected cell.

use std::fmt::Write;
use std::rc::Rc;

use board_types::{DataStructure, DataStructureType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::html::{class_list, escape};

/// A value shown in one array cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(n) => n
                .as_f64()
                .map_or_else(|| Self::Text(n.to_string()), Self::Number),
            Value::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }
}

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayCell {
    /// Cell content.
    pub value: CellValue,
    /// Position in the array.
    pub index: usize,
    /// Whether this is the selected cell.
    pub is_selected: bool,
}

type CellClickHandler = Rc<dyn Fn(usize)>;

/// Renders an array as a row of cells and reports clicks by index.
#[derive(Clone, Default)]
pub struct ArrayElement {
    values: Vec<CellValue>,
    selected_index: Option<usize>,
    on_cell_click: Option<CellClickHandler>,
}

impl ArrayElement {
    /// Create an element over `values` with nothing selected.
    #[must_use]
    pub fn new<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            selected_index: None,
            on_cell_click: None,
        }
    }

    /// Build from an array data structure. Returns `None` for other kinds.
    #[must_use]
    pub fn from_structure(structure: &DataStructure) -> Option<Self> {
        (structure.kind == DataStructureType::Array)
            .then(|| Self::new(structure.elements.iter().map(CellValue::from)))
    }

    /// Select a cell.
    #[must_use]
    pub fn with_selected_index(mut self, index: usize) -> Self {
        self.selected_index = Some(index);
        self
    }

    /// Register the click callback.
    #[must_use]
    pub fn on_cell_click(mut self, handler: impl Fn(usize) + 'static) -> Self {
        self.on_cell_click = Some(Rc::new(handler));
        self
    }

    /// Cell values in order.
    #[must_use]
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    /// The selected index, if any.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Cells as they will be rendered.
    #[must_use]
    pub fn cells(&self) -> Vec<ArrayCell> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| ArrayCell {
                value: value.clone(),
                index,
                is_selected: self.selected_index == Some(index),
            })
            .collect()
    }

    /// Activate the cell at `index`.
    ///
    /// Returns `true` if a callback was invoked. Indices past the last cell
    /// have no rendered cell and are ignored.
    pub fn click(&self, index: usize) -> bool {
        if index >= self.values.len() {
            return false;
        }
        match &self.on_cell_click {
            Some(handler) => {
                handler(index);
                true
            }
            None => false,
        }
    }

    /// Render to HTML.
    #[must_use]
    pub fn render_html(&self) -> String {
        let mut html = String::from(r#"<div class="array-element">"#);
        for cell in self.cells() {
            let class = class_list("array-cell", [cell.is_selected.then_some("selected")]);
            let _ = write!(
                html,
                r#"<div class="{class}" data-index="{}">{}</div>"#,
                cell.index,
                escape(&cell.value.to_string())
            );
        }
        html.push_str("</div>");
        html
    }
}

impl std::fmt::Debug for ArrayElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayElement")
            .field("values", &self.values)
            .field("selected_index", &self.selected_index)
            .field("on_cell_click", &self.on_cell_click.is_some())
            .finish()
    }
}

/// Editing state a host keeps for an array on the board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayElementState {
    /// Current values.
    pub values: Vec<CellValue>,
    /// Selected cell.
    pub selected_index: Option<usize>,
    /// Whether a cell is being edited.
    pub is_editing: bool,
}

impl ArrayElementState {
    /// Props for rendering this state.
    #[must_use]
    pub fn to_element(&self) -> ArrayElement {
        let element = ArrayElement::new(self.values.iter().cloned());
        match self.selected_index {
            Some(index) => element.with_selected_index(index),
            None => element,
        }
    }
}
