//! Shared UI state: the three attribute choices and the hovered row.

use crate::error::ChartError;
use lcv_data::{Dataset, RowId};

/// Which of the three attribute controls a choice belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeTarget {
    /// Scatterplot x axis.
    X,
    /// Scatterplot y axis.
    Y,
    /// Bar chart value.
    Bar,
}

impl AttributeTarget {
    pub const ALL: [AttributeTarget; 3] = [AttributeTarget::X, AttributeTarget::Y, AttributeTarget::Bar];

    /// Short label for the control.
    pub fn label(self) -> &'static str {
        match self {
            AttributeTarget::X => "X axis",
            AttributeTarget::Y => "Y axis",
            AttributeTarget::Bar => "Bar value",
        }
    }
}

/// Attribute choices plus the single highlighted row shared by both charts.
///
/// Attribute names are validated against the dataset when set. The selection
/// is not: pointing it at a row outside the dataset simply highlights nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    x_attribute: String,
    y_attribute: String,
    bar_attribute: String,
    selection: Option<RowId>,
}

fn check(dataset: &Dataset, attr: &str) -> Result<String, ChartError> {
    if dataset.has_numeric_column(attr) {
        Ok(attr.to_string())
    } else {
        Err(ChartError::UnknownAttribute {
            attribute: attr.to_string(),
            available: dataset.numeric_columns().to_vec(),
        })
    }
}

impl UiState {
    pub fn new(dataset: &Dataset, x: &str, y: &str, bar: &str) -> Result<Self, ChartError> {
        Ok(Self {
            x_attribute: check(dataset, x)?,
            y_attribute: check(dataset, y)?,
            bar_attribute: check(dataset, bar)?,
            selection: None,
        })
    }

    pub fn x_attribute(&self) -> &str {
        &self.x_attribute
    }

    pub fn y_attribute(&self) -> &str {
        &self.y_attribute
    }

    pub fn bar_attribute(&self) -> &str {
        &self.bar_attribute
    }

    pub fn attribute(&self, target: AttributeTarget) -> &str {
        match target {
            AttributeTarget::X => &self.x_attribute,
            AttributeTarget::Y => &self.y_attribute,
            AttributeTarget::Bar => &self.bar_attribute,
        }
    }

    /// Change one attribute choice. On error the state is unchanged.
    pub fn set_attribute(
        &mut self,
        dataset: &Dataset,
        target: AttributeTarget,
        attr: &str,
    ) -> Result<(), ChartError> {
        let attr = check(dataset, attr)?;
        match target {
            AttributeTarget::X => self.x_attribute = attr,
            AttributeTarget::Y => self.y_attribute = attr,
            AttributeTarget::Bar => self.bar_attribute = attr,
        }
        Ok(())
    }

    pub fn set_x_attribute(&mut self, dataset: &Dataset, attr: &str) -> Result<(), ChartError> {
        self.set_attribute(dataset, AttributeTarget::X, attr)
    }

    pub fn set_y_attribute(&mut self, dataset: &Dataset, attr: &str) -> Result<(), ChartError> {
        self.set_attribute(dataset, AttributeTarget::Y, attr)
    }

    pub fn set_bar_attribute(&mut self, dataset: &Dataset, attr: &str) -> Result<(), ChartError> {
        self.set_attribute(dataset, AttributeTarget::Bar, attr)
    }

    pub fn selection(&self) -> Option<RowId> {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Option<RowId>) {
        self.selection = selection;
    }
}
