#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Stateless breadth-first tile search used for enemy navigation.

use std::collections::VecDeque;

use gridfire_core::{GridView, TileCoord};

/// Finds the shortest tile path from `start` to `goal`, both inclusive.
///
/// Neighbors are scanned in a fixed up, right, down, left order, which also
/// breaks ties between equal-length paths. Only passable tiles are expanded.
/// The result is empty when either endpoint is a wall, lies outside the
/// grid, or no connecting corridor exists; callers treat an empty path as a
/// normal outcome, not a failure. The search holds no shared state, so it is
/// safe to invoke independently per enemy per tick.
#[must_use]
pub fn find_path(grid: &GridView<'_>, start: TileCoord, goal: TileCoord) -> Vec<TileCoord> {
    let columns = usize::try_from(grid.columns()).unwrap_or(0);
    let rows = usize::try_from(grid.rows()).unwrap_or(0);
    let Some(cell_count) = columns.checked_mul(rows) else {
        return Vec::new();
    };
    if cell_count == 0 {
        return Vec::new();
    }
    if !grid.is_passable(start) || !grid.is_passable(goal) {
        return Vec::new();
    }

    let mut visited = vec![false; cell_count];
    let mut parents: Vec<Option<TileCoord>> = vec![None; cell_count];
    let mut frontier = VecDeque::new();

    let Some(start_index) = index(columns, start) else {
        return Vec::new();
    };
    visited[start_index] = true;
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        if current == goal {
            return reconstruct(&parents, columns, start, goal);
        }

        for neighbor in scan_neighbors(current, grid.columns(), grid.rows()) {
            if !grid.is_passable(neighbor) {
                continue;
            }
            let Some(neighbor_index) = index(columns, neighbor) else {
                continue;
            };
            if visited[neighbor_index] {
                continue;
            }
            visited[neighbor_index] = true;
            parents[neighbor_index] = Some(current);
            frontier.push_back(neighbor);
        }
    }

    Vec::new()
}

fn reconstruct(
    parents: &[Option<TileCoord>],
    columns: usize,
    start: TileCoord,
    goal: TileCoord,
) -> Vec<TileCoord> {
    let mut path = vec![goal];
    let mut cursor = goal;
    while cursor != start {
        let Some(parent) = index(columns, cursor).and_then(|i| parents[i]) else {
            return Vec::new();
        };
        path.push(parent);
        cursor = parent;
    }
    path.reverse();
    path
}

fn scan_neighbors(tile: TileCoord, columns: u32, rows: u32) -> impl Iterator<Item = TileCoord> {
    let mut candidates = [None; 4];
    let mut count = 0;

    if let Some(row) = tile.row().checked_sub(1) {
        candidates[count] = Some(TileCoord::new(tile.column(), row));
        count += 1;
    }
    if tile.column() + 1 < columns {
        candidates[count] = Some(TileCoord::new(tile.column() + 1, tile.row()));
        count += 1;
    }
    if tile.row() + 1 < rows {
        candidates[count] = Some(TileCoord::new(tile.column(), tile.row() + 1));
        count += 1;
    }
    if let Some(column) = tile.column().checked_sub(1) {
        candidates[count] = Some(TileCoord::new(column, tile.row()));
        count += 1;
    }

    candidates.into_iter().take(count).flatten()
}

fn index(columns: usize, tile: TileCoord) -> Option<usize> {
    let column = usize::try_from(tile.column()).ok()?;
    let row = usize::try_from(tile.row()).ok()?;
    row.checked_mul(columns)?.checked_add(column)
}
