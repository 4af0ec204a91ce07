//! Per-cell data for whoever draws the grid.

use serde::Serialize;

use crate::{
    BirthInput, CalendarDate, GoalStore, GridPosition, Key, Language, WeekIndex, WeekSpan, YEAR_LABEL_EVERY,
    format_range, t_with,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Lived,
    Upcoming,
}

/// Everything needed to draw one cell and its tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell<'a> {
    pub index: WeekIndex,
    pub state: CellState,
    /// Absent while there is no valid birth date
    pub span:  Option<WeekSpan>,
    pub goal:  Option<&'a str>,
}

impl Cell<'_> {
    pub const fn position(&self) -> GridPosition {
        self.index.position()
    }

    pub const fn has_goal(&self) -> bool {
        self.goal.is_some()
    }

    pub fn is_lived(&self) -> bool {
        self.state == CellState::Lived
    }
}

/// Builds every cell of the grid from scratch.
pub fn cells<'a>(birth: &BirthInput, today: CalendarDate, goals: &'a GoalStore) -> Vec<Cell<'a>> {
    let lived = birth.weeks_lived(today);
    WeekIndex::all()
        .map(|index| Cell {
            index,
            state: if index.get() < lived {
                CellState::Lived
            } else {
                CellState::Upcoming
            },
            span: birth.span_of(index),
            goal: goals.get(index),
        })
        .collect()
}

/// Hover text: week title, then the date range and goal when known.
pub fn tooltip(cell: &Cell<'_>, lang: Language) -> String {
    let position = cell.position();
    let mut lines = vec![t_with(
        lang,
        Key::WeekTitle,
        &[("year", &position.year()), ("week", &position.week())],
    )];
    if let Some(span) = &cell.span {
        lines.push(format_range(span, lang));
    }
    if let Some(goal) = cell.goal {
        lines.push(goal.to_owned());
    }
    lines.join("\n")
}

/// The one-based year number printed beside every fifth row.
pub const fn year_label(row: u16) -> Option<u16> {
    let year = row + 1;
    if year % YEAR_LABEL_EVERY == 0 {
        Some(year)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TOTAL_WEEKS;
    use crate::test_utils::{date, week};

    #[test]
    fn test_cells_split_at_lived_count() {
        let birth = BirthInput::parse("1990-01-01");
        let goals = GoalStore::new();
        let grid = cells(&birth, date(2020, 1, 1), &goals);

        assert_eq!(grid.len(), usize::from(TOTAL_WEEKS));
        assert!(grid[1559].is_lived());
        assert_eq!(grid[1560].state, CellState::Upcoming);
        assert_eq!(
            grid.iter().filter(|c| c.is_lived()).count(),
            1560
        );
        assert_eq!(grid[0].span.map(|s| s.end()), Some(date(1990, 1, 7)));
    }

    #[test]
    fn test_cells_without_birth_date() {
        let goals = GoalStore::new();
        let grid = cells(&BirthInput::Unset, date(2020, 1, 1), &goals);
        assert!(grid.iter().all(|c| c.state == CellState::Upcoming && c.span.is_none()));
    }

    #[test]
    fn test_cells_carry_goals() {
        let birth = BirthInput::parse("1990-01-01");
        let mut goals = GoalStore::new();
        goals.set(week(2000), "retire early");
        let grid = cells(&birth, date(2020, 1, 1), &goals);
        assert!(grid[2000].has_goal());
        assert_eq!(grid[2000].goal, Some("retire early"));
        assert_eq!(grid.iter().filter(|c| c.has_goal()).count(), 1);
    }

    #[test]
    fn test_tooltip() {
        let birth = BirthInput::parse("1990-01-01");
        let mut goals = GoalStore::new();
        goals.set(week(53), "learn to swim");
        let grid = cells(&birth, date(2020, 1, 1), &goals);

        assert_eq!(
            tooltip(&grid[53], Language::En),
            "Year 2, Week 2\nJan 8, 1991 - Jan 14, 1991\nlearn to swim"
        );
        assert_eq!(
            tooltip(&grid[0], Language::Ru),
            "Год 1, неделя 1\n01.01.1990 - 07.01.1990"
        );

        let bare = cells(&BirthInput::Unset, date(2020, 1, 1), &goals);
        assert_eq!(tooltip(&bare[0], Language::En), "Year 1, Week 1");
    }

    #[test]
    fn test_year_labels() {
        assert_eq!(year_label(0), None);
        assert_eq!(year_label(4), Some(5));
        assert_eq!(year_label(9), Some(10));
        assert_eq!(year_label(89), Some(90));
        assert_eq!((0..90).filter_map(year_label).count(), 18);
    }

    #[test]
    fn test_serialize_cell() {
        let birth = BirthInput::parse("1990-01-01");
        let goals = GoalStore::new();
        let grid = cells(&birth, date(1990, 1, 8), &goals);
        let json = serde_json::to_string(&grid[0]).unwrap();
        assert_eq!(
            json,
            r#"{"index":0,"state":"lived","span":"1990-01-01/1990-01-07","goal":null}"#
        );
    }
}
