//! Win detection: does the mover own a chain between their two edges?
//!
//! The check is a reachability search over the subgraph of the mover's cells
//! under king-move adjacency, seeded from the start edge. The first target-edge
//! cell the search pops ends it, and a second pass over the same visited marks
//! walks back from that cell to the start edge to recover a witness chain.
//! The chain's ends are then grown over the player's remaining cells, so a
//! board holding a single chain yields that whole chain.

use super::adjacency::{Neighbors, neighbors};
use crate::{Coord, Edge, Goal, Goals, Grid, Player, Verdict, WinningPath};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument, trace};

/// Order in which the reachability search expands its frontier.
///
/// Both orders give the same win/no-win verdict. They may pick different
/// witness chains when more than one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOrder {
    /// Stack discipline (LIFO).
    #[default]
    DepthFirst,
    /// Queue discipline (FIFO).
    BreadthFirst,
}

impl SearchOrder {
    fn pop(self, frontier: &mut VecDeque<Coord>) -> Option<Coord> {
        match self {
            SearchOrder::DepthFirst => frontier.pop_back(),
            SearchOrder::BreadthFirst => frontier.pop_front(),
        }
    }
}

/// Per-call visited marks, one flag per cell.
struct Visited {
    size: usize,
    marks: Vec<bool>,
}

impl Visited {
    fn new(size: usize) -> Self {
        Self {
            size,
            marks: vec![false; size * size],
        }
    }

    fn is_marked(&self, coord: Coord) -> bool {
        self.marks[coord.row * self.size + coord.col]
    }

    fn mark(&mut self, coord: Coord) {
        self.marks[coord.row * self.size + coord.col] = true;
    }

    fn clear(&mut self, coord: Coord) {
        self.marks[coord.row * self.size + coord.col] = false;
    }
}

/// Connectivity engine: evaluates whether a player has connected their edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectivityEngine {
    goals: Goals,
    order: SearchOrder,
}

impl ConnectivityEngine {
    /// Creates an engine for the given edge assignment and search order.
    pub fn new(goals: Goals, order: SearchOrder) -> Self {
        Self { goals, order }
    }

    /// Edge assignment used by this engine.
    pub fn goals(&self) -> &Goals {
        &self.goals
    }

    /// Frontier order used by this engine.
    pub fn order(&self) -> SearchOrder {
        self.order
    }

    /// Evaluates `player`'s position on `grid`.
    ///
    /// Pure and total: the grid is only read, and the work is bounded by the
    /// number of cells. Calling it again on the same grid gives the same
    /// verdict.
    #[instrument(skip(self, grid), fields(size = grid.size(), order = ?self.order))]
    pub fn evaluate(&self, grid: &Grid, player: Player) -> Verdict {
        let goal = self.goals.of(player);
        let size = grid.size();
        let mut visited = Visited::new(size);
        let mut frontier = VecDeque::new();

        for coord in goal.start.coords(size) {
            if grid.get(coord).is_owned_by(player) {
                visited.mark(coord);
                frontier.push_back(coord);
            }
        }
        trace!(seeds = frontier.len(), start = %goal.start, "Seeded frontier");

        while let Some(coord) = self.order.pop(&mut frontier) {
            if goal.target.contains(coord, size) {
                let cells = trace_path(grid, player, goal, coord, &mut visited);
                debug!(%player, hit = %coord, length = cells.len(), "Spanning chain found");
                return Verdict::Win(WinningPath::new(player, cells));
            }

            for next in neighbors(coord, size) {
                if grid.get(next).is_owned_by(player) && !visited.is_marked(next) {
                    visited.mark(next);
                    frontier.push_back(next);
                }
            }
        }

        trace!(%player, "No spanning chain");
        Verdict::NoWin
    }
}

/// Walks from `hit` back to the `start` edge over cells still marked by the
/// search, clearing each mark on entry. Dead ends are popped off the trail, so
/// the trail is always a simple chain. Both ends are then grown along the
/// player's remaining cells (see [`extend_chain`]). Returns the chain ordered
/// start to target.
fn trace_path(
    grid: &Grid,
    player: Player,
    goal: Goal,
    hit: Coord,
    visited: &mut Visited,
) -> Vec<Coord> {
    let size = grid.size();
    visited.clear(hit);
    let mut trail: Vec<(Coord, Neighbors)> = vec![(hit, neighbors(hit, size))];

    while let Some((coord, steps)) = trail.last_mut() {
        if goal.start.contains(*coord, size) {
            break;
        }
        let step = steps.find(|n| visited.is_marked(*n) && grid.get(*n).is_owned_by(player));
        match step {
            Some(next) => {
                visited.clear(next);
                trail.push((next, neighbors(next, size)));
            }
            None => {
                trail.pop();
            }
        }
    }

    // Every marked cell was reached from a start-edge seed through marked
    // cells, so the walk cannot exhaust the trail.
    debug_assert!(!trail.is_empty(), "marked cells must lead back to the start edge");

    let mut cells: Vec<Coord> = trail.into_iter().map(|(coord, _)| coord).collect();
    let mut on_chain = Visited::new(size);
    for coord in &cells {
        on_chain.mark(*coord);
    }

    extend_chain(grid, player, goal.start, &mut cells, &mut on_chain);
    cells.reverse();
    extend_chain(grid, player, goal.target, &mut cells, &mut on_chain);
    cells
}

/// Grows `chain` from its last cell through the player's cells not yet on
/// it, then cuts it back to the last cell on `edge`.
///
/// The walk back from the hit stops at the first start-edge cell it meets,
/// and the search stops at the first target-edge cell it pops. A chain that
/// runs along an edge, or leaves it and comes back, continues past those
/// points; growing the ends recovers the rest of it. The tail kept always
/// ends on `edge`.
fn extend_chain(
    grid: &Grid,
    player: Player,
    edge: Edge,
    chain: &mut Vec<Coord>,
    on_chain: &mut Visited,
) {
    let size = grid.size();
    let kept = chain.len();

    while let Some(&tip) = chain.last() {
        let next = neighbors(tip, size)
            .find(|n| !on_chain.is_marked(*n) && grid.get(*n).is_owned_by(player));
        let Some(next) = next else { break };
        on_chain.mark(next);
        chain.push(next);
    }

    while chain.len() > kept && chain.last().is_some_and(|c| !edge.contains(*c, size)) {
        if let Some(dropped) = chain.pop() {
            on_chain.clear(dropped);
        }
    }

    if chain.len() > kept {
        trace!(%edge, added = chain.len() - kept, "Extended chain along edge");
    }
}

/// Evaluates `player` on `grid` with the default edges (X left to right,
/// O top to bottom) and depth-first search.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn evaluate(grid: &Grid, player: Player) -> Verdict {
    ConnectivityEngine::default().evaluate(grid, player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, Goal};

    fn grid(text: &str) -> Grid {
        text.parse().expect("valid board text")
    }

    fn cells(verdict: &Verdict) -> Vec<Coord> {
        verdict.path().expect("expected a win").cells().to_vec()
    }

    #[test]
    fn test_empty_grid_has_no_winner() {
        let g = Grid::new(7);
        assert_eq!(evaluate(&g, Player::X), Verdict::NoWin);
        assert_eq!(evaluate(&g, Player::O), Verdict::NoWin);
    }

    #[test]
    fn test_diagonal_wins_for_x() {
        let g = grid("X..\n.X.\n..X");
        let verdict = evaluate(&g, Player::X);
        assert_eq!(
            cells(&verdict),
            vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]
        );
    }

    #[test]
    fn test_single_top_cell_is_not_a_win() {
        let g = grid(".O.\n...\n...");
        assert_eq!(evaluate(&g, Player::O), Verdict::NoWin);
    }

    #[test]
    fn test_column_wins_for_o_not_x() {
        let g = grid(".O.\n.O.\n.O.");
        assert!(evaluate(&g, Player::O).is_win());
        assert_eq!(evaluate(&g, Player::X), Verdict::NoWin);
    }

    #[test]
    fn test_no_start_edge_cell_means_no_win() {
        let g = grid(".XXX\n.XXX\n.XXX\n.XXX");
        assert_eq!(evaluate(&g, Player::X), Verdict::NoWin);
    }

    #[test]
    fn test_blocked_chain() {
        let g = grid("XXO.\n..O.\n..OX\n..O.");
        assert_eq!(evaluate(&g, Player::X), Verdict::NoWin);
        assert!(evaluate(&g, Player::O).is_win());
    }

    #[test]
    fn test_path_skips_dead_ends() {
        // Branch at (1,1) heads to a dead end at (0,2); the chain runs along row 2.
        let g = grid(
            "..X..\n\
             .X...\n\
             X.XXX\n\
             .....\n\
             .....",
        );
        let verdict = evaluate(&g, Player::X);
        let path = verdict.path().expect("X connects");
        assert!(path.is_valid_on(&g, Goal::new(Edge::Left, Edge::Right)));
        assert!(!path.contains(Coord::new(0, 2)));
    }

    #[test]
    fn test_breadth_first_agrees_with_depth_first() {
        let boards = [
            "X.O.\nOX.O\n.OX.\nO..X",
            "XO..\nXO..\nXOO.\nX.O.",
            "O.X.\n.X.O\nX.O.\n.O.X",
        ];
        let bfs = ConnectivityEngine::new(Goals::default(), SearchOrder::BreadthFirst);
        let dfs = ConnectivityEngine::default();
        for text in boards {
            let g = grid(text);
            for player in [Player::X, Player::O] {
                let a = dfs.evaluate(&g, player);
                let b = bfs.evaluate(&g, player);
                assert_eq!(a.is_win(), b.is_win(), "{text} / {player}");
                if let Some(path) = b.path() {
                    assert!(path.is_valid_on(&g, bfs.goals().of(player)));
                }
            }
        }
    }

    #[test]
    fn test_custom_goals() {
        // X connects top to bottom instead of left to right.
        let goals = Goals {
            x: Goal::new(Edge::Top, Edge::Bottom),
            o: Goal::new(Edge::Left, Edge::Right),
        };
        let engine = ConnectivityEngine::new(goals, SearchOrder::DepthFirst);
        let g = grid(".X.\n.X.\n.X.");
        assert!(engine.evaluate(&g, Player::X).is_win());
        assert_eq!(evaluate(&g, Player::X), Verdict::NoWin);
    }

    #[test]
    fn test_reversed_goal_orders_path_from_start() {
        let goals = Goals {
            x: Goal::new(Edge::Right, Edge::Left),
            ..Goals::default()
        };
        let engine = ConnectivityEngine::new(goals, SearchOrder::DepthFirst);
        let g = grid("...\nXXX\n...");
        let verdict = engine.evaluate(&g, Player::X);
        assert_eq!(
            cells(&verdict),
            vec![Coord::new(1, 2), Coord::new(1, 1), Coord::new(1, 0)]
        );
    }

    fn chain(cells: &[(usize, usize)]) -> Vec<Coord> {
        cells.iter().map(|&(row, col)| Coord::new(row, col)).collect()
    }

    #[test]
    fn test_chain_running_along_start_edge_is_kept_whole() {
        let g = grid("X..\nX..\n.XX");
        for order in [SearchOrder::DepthFirst, SearchOrder::BreadthFirst] {
            let engine = ConnectivityEngine::new(Goals::default(), order);
            assert_eq!(
                cells(&engine.evaluate(&g, Player::X)),
                chain(&[(0, 0), (1, 0), (2, 1), (2, 2)]),
                "{order:?}"
            );
        }
    }

    #[test]
    fn test_chain_running_along_target_edge_is_kept_whole() {
        // The search stops at (1,3); (2,3) is never visited.
        let g = grid(
            "XXX.\n\
             ...X\n\
             ...X\n\
             ....",
        );
        assert_eq!(
            cells(&evaluate(&g, Player::X)),
            chain(&[(0, 0), (0, 1), (0, 2), (1, 3), (2, 3)])
        );
    }

    #[test]
    fn test_chain_leaving_and_rejoining_start_edge() {
        let g = grid(
            "XX...\n\
             ..X..\n\
             .X...\n\
             X....\n\
             .XXXX",
        );
        for order in [SearchOrder::DepthFirst, SearchOrder::BreadthFirst] {
            let engine = ConnectivityEngine::new(Goals::default(), order);
            assert_eq!(
                cells(&engine.evaluate(&g, Player::X)),
                chain(&[
                    (0, 0),
                    (0, 1),
                    (1, 2),
                    (2, 1),
                    (3, 0),
                    (4, 1),
                    (4, 2),
                    (4, 3),
                    (4, 4)
                ]),
                "{order:?}"
            );
        }
    }

    #[test]
    fn test_extension_ends_on_edges() {
        // Spare cells hang off both ends; the chain still starts on the left
        // column and stops on the right one.
        let g = grid(
            "X....\n\
             XX...\n\
             .XXXX\n\
             ....X\n\
             ...X.",
        );
        let path = evaluate(&g, Player::X).into_path().expect("X connects");
        assert!(path.is_valid_on(&g, Goals::default().x));
        assert_eq!(path.cells().first().map(|c| c.col), Some(0));
        assert_eq!(path.cells().last().map(|c| c.col), Some(4));
    }

    #[test]
    fn test_single_cell_grid() {
        let g = grid("X");
        assert_eq!(cells(&evaluate(&g, Player::X)), vec![Coord::new(0, 0)]);
        assert_eq!(evaluate(&g, Player::O), Verdict::NoWin);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let g = grid("X.O\nXO.\nOX.");
        let first = evaluate(&g, Player::O);
        let second = evaluate(&g, Player::O);
        assert_eq!(first, second);
        assert!(first.is_win());
    }
}
