//! Touch graph and connected groups

use std::collections::VecDeque;

use super::collision::touch;
use super::piece::Piece;
use crate::area::GameArea;

/// Undirected touch graph: `result[i]` lists the indices touching piece `i`
pub fn adjacency_list(pieces: &[Piece], area: &GameArea) -> Vec<Vec<usize>> {
    let mut neighbors = vec![Vec::new(); pieces.len()];
    for i in 0..pieces.len() {
        for j in (i + 1)..pieces.len() {
            if touch(&pieces[i], &pieces[j], area) {
                neighbors[i].push(j);
                neighbors[j].push(i);
            }
        }
    }
    neighbors
}

/// Connected components of the touch graph, as index lists
///
/// Groups come out ordered by their lowest index, members in visit order.
/// An isolated piece forms a group of one.
pub fn connected_groups(pieces: &[Piece], area: &GameArea) -> Vec<Vec<usize>> {
    let neighbors = adjacency_list(pieces, area);
    let mut visited = vec![false; pieces.len()];
    let mut groups = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..pieces.len() {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        queue.push_back(start);

        let mut group = Vec::new();
        while let Some(i) = queue.pop_front() {
            group.push(i);
            for &j in &neighbors[i] {
                if !visited[j] {
                    visited[j] = true;
                    queue.push_back(j);
                }
            }
        }
        groups.push(group);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::piece::{Face, PieceKind};

    fn piece(x: f64, y: f64) -> Piece {
        Piece::new(PieceKind::A, Face::Front, x, y, 0.0).unwrap()
    }

    #[test]
    fn test_empty_set_has_no_groups() {
        assert!(connected_groups(&[], &GameArea::default()).is_empty());
    }

    #[test]
    fn test_single_piece_is_own_group() {
        let groups = connected_groups(&[piece(0.0, 0.0)], &GameArea::default());
        assert_eq!(groups, vec![vec![0]]);
    }

    #[test]
    fn test_line_is_one_group() {
        let area = GameArea::default();
        let pieces: Vec<_> = (0..6).map(|i| piece(i as f64 * 100.0, 300.0)).collect();
        let groups = connected_groups(&pieces, &area);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 6);
    }

    #[test]
    fn test_far_pieces_split() {
        let area = GameArea::default();
        let pieces = [piece(0.0, 0.0), piece(100.0, 0.0), piece(800.0, 800.0)];
        let groups = connected_groups(&pieces, &area);
        assert_eq!(groups, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn test_turned_pieces_at_diagonal_distance_split() {
        // 45 degree turn: a world (100, 100) offset leaves a 41 unit gap
        let area = GameArea::default();
        let turned = |x: f64, y: f64| Piece::new(PieceKind::A, Face::Front, x, y, 45.0).unwrap();
        let pieces = [turned(0.0, 0.0), turned(100.0, 100.0)];
        assert_eq!(connected_groups(&pieces, &area), vec![vec![0], vec![1]]);
    }

    #[test]
    fn test_transitive_link_through_middle() {
        let area = GameArea::default();
        // 0 and 2 only connect through 1
        let pieces = [piece(0.0, 0.0), piece(200.0, 0.0), piece(100.0, 0.0)];
        let adj = adjacency_list(&pieces, &area);
        assert_eq!(adj[0], vec![2]);
        assert_eq!(adj[1], vec![2]);
        let groups = connected_groups(&pieces, &area);
        assert_eq!(groups, vec![vec![0, 2, 1]]);
    }

    #[test]
    fn test_large_chain_is_iterative() {
        let area = GameArea::default();
        let pieces: Vec<_> = (0..400).map(|i| piece(i as f64 * 100.0, 0.0)).collect();
        let groups = connected_groups(&pieces, &area);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 400);
    }
}
