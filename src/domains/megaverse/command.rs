use std::fmt;

use crate::common::ApiResult;
use crate::domains::megaverse::goal::{Color, Direction, GoalCell, GoalGrid};
use crate::domains::megaverse::ports::MegaverseApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstralObject {
    Polyanet,
    Soloon { color: Color },
    Cometh { direction: Direction },
}

impl AstralObject {
    pub fn from_cell(cell: GoalCell) -> Option<Self> {
        match cell {
            GoalCell::Empty => None,
            GoalCell::Polyanet => Some(AstralObject::Polyanet),
            GoalCell::Soloon { color } => Some(AstralObject::Soloon { color }),
            GoalCell::Cometh { direction } => Some(AstralObject::Cometh { direction }),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AstralObject::Polyanet => "Polyanet",
            AstralObject::Soloon { .. } => "Soloon",
            AstralObject::Cometh { .. } => "Cometh",
        }
    }
}

/// A single creation request derived from one goal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreationCommand {
    pub row: usize,
    pub column: usize,
    pub object: AstralObject,
}

impl CreationCommand {
    pub fn polyanet(row: usize, column: usize) -> Self {
        Self { row, column, object: AstralObject::Polyanet }
    }

    pub fn soloon(row: usize, column: usize, color: Color) -> Self {
        Self { row, column, object: AstralObject::Soloon { color } }
    }

    pub fn cometh(row: usize, column: usize, direction: Direction) -> Self {
        Self { row, column, object: AstralObject::Cometh { direction } }
    }

    /// Dispatches the matching creation call on `api`.
    pub async fn submit(&self, api: &dyn MegaverseApi) -> ApiResult<()> {
        match self.object {
            AstralObject::Polyanet => api.create_polyanet(self.row, self.column).await,
            AstralObject::Soloon { color } => api.create_soloon(self.row, self.column, color).await,
            AstralObject::Cometh { direction } => {
                api.create_cometh(self.row, self.column, direction).await
            }
        }
    }
}

impl fmt::Display for CreationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: row {} | column {}", self.object.kind(), self.row, self.column)?;
        match self.object {
            AstralObject::Polyanet => Ok(()),
            AstralObject::Soloon { color } => write!(f, " | color {}", color),
            AstralObject::Cometh { direction } => write!(f, " | direction {}", direction),
        }
    }
}

/// One command per non-empty cell, rows ascending then columns ascending.
pub fn build_commands(grid: &GoalGrid) -> Vec<CreationCommand> {
    grid.occupied()
        .filter_map(|(row, column, cell)| {
            AstralObject::from_cell(cell).map(|object| CreationCommand { row, column, object })
        })
        .collect()
}
