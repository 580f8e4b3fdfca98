use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    White,
    Purple,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::White => "white",
            Color::Purple => "purple",
        }
    }
}

impl FromStr for Color {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blue" => Ok(Color::Blue),
            "red" => Ok(Color::Red),
            "white" => Ok(Color::White),
            "purple" => Ok(Color::Purple),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cell of the goal map as sent by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalCell {
    Empty,
    Polyanet,
    Soloon { color: Color },
    Cometh { direction: Direction },
}

impl GoalCell {
    /// Decodes a server token. Unknown tokens decode to `Empty`.
    pub fn parse(token: &str) -> Self {
        if token == "POLYANET" {
            return GoalCell::Polyanet;
        }
        if let Some(prefix) = token.strip_suffix("_SOLOON") {
            return prefix
                .parse()
                .map(|color| GoalCell::Soloon { color })
                .unwrap_or(GoalCell::Empty);
        }
        if let Some(prefix) = token.strip_suffix("_COMETH") {
            return prefix
                .parse()
                .map(|direction| GoalCell::Cometh { direction })
                .unwrap_or(GoalCell::Empty);
        }
        GoalCell::Empty
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GoalCell::Empty)
    }

    /// The token the server uses for this cell.
    pub fn token(&self) -> String {
        match self {
            GoalCell::Empty => "SPACE".to_string(),
            GoalCell::Polyanet => "POLYANET".to_string(),
            GoalCell::Soloon { color } => format!("{}_SOLOON", color.as_str().to_uppercase()),
            GoalCell::Cometh { direction } => {
                format!("{}_COMETH", direction.as_str().to_uppercase())
            }
        }
    }
}

/// Wire shape of `GET /map/{candidateId}/goal`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoalMapResponse {
    pub goal: Vec<Vec<String>>,
}

/// Row-major goal layout, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalGrid {
    rows: Vec<Vec<GoalCell>>,
}

impl GoalGrid {
    pub fn new(rows: Vec<Vec<GoalCell>>) -> Self {
        Self { rows }
    }

    pub fn from_tokens<R, S>(tokens: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = tokens
            .into_iter()
            .map(|row| row.into_iter().map(|t| GoalCell::parse(t.as_ref())).collect())
            .collect();
        Self { rows }
    }

    /// An X of Polyanets across a `size` x `size` grid, leaving `margin`
    /// empty rows at the top and bottom.
    pub fn cross(size: usize, margin: usize) -> Self {
        let rows = (0..size)
            .map(|row| {
                (0..size)
                    .map(|column| {
                        let on_diagonal = column == row || column + row + 1 == size;
                        let inside = row >= margin && row + margin < size;
                        if on_diagonal && inside {
                            GoalCell::Polyanet
                        } else {
                            GoalCell::Empty
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<GoalCell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<GoalCell> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Non-empty cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, GoalCell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| !cell.is_empty())
                .map(move |(column, cell)| (row, column, *cell))
        })
    }
}

impl From<GoalMapResponse> for GoalGrid {
    fn from(resp: GoalMapResponse) -> Self {
        GoalGrid::from_tokens(resp.goal)
    }
}

impl fmt::Display for GoalGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let tokens: Vec<String> = row.iter().map(GoalCell::token).collect();
            write!(f, "{}", tokens.join(" "))?;
        }
        Ok(())
    }
}
