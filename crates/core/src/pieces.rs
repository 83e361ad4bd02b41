//! Pieces module - shape catalog and the simple rotation rule
//!
//! One immutable table maps every piece kind to its four rotation states.
//! Board collision, locking, rotation and rendering all read from here.
//!
//! Rotation has no kick table: the forward rotation is tried first, then the
//! reverse rotation, and if neither fits the piece keeps its orientation.

use crate::types::{PieceKind, Rotation, BOARD_WIDTH};

/// Offset of a single cell relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 or 5 cell offsets from the anchor
pub type PieceShape = &'static [MinoOffset];

/// Spawn anchor for new pieces (x, y)
pub const SPAWN_POSITION: (i8, i8) = ((BOARD_WIDTH / 2) as i8, 0);

const I_SHAPES: [PieceShape; 4] = [
    &[(0, 0), (1, 0), (2, 0), (3, 0)],
    &[(1, -1), (1, 0), (1, 1), (1, 2)],
    &[(0, 1), (1, 1), (2, 1), (3, 1)],
    &[(2, -1), (2, 0), (2, 1), (2, 2)],
];

const O_SHAPES: [PieceShape; 4] = [
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
];

const T_SHAPES: [PieceShape; 4] = [
    &[(1, 0), (0, 1), (1, 1), (2, 1)],
    &[(1, 0), (1, 1), (2, 1), (1, 2)],
    &[(0, 1), (1, 1), (2, 1), (1, 2)],
    &[(1, 0), (0, 1), (1, 1), (1, 2)],
];

const L_SHAPES: [PieceShape; 4] = [
    &[(0, 0), (0, 1), (0, 2), (1, 2)],
    &[(0, 0), (1, 0), (2, 0), (0, 1)],
    &[(0, 0), (1, 0), (1, 1), (1, 2)],
    &[(2, 0), (0, 1), (1, 1), (2, 1)],
];

const J_SHAPES: [PieceShape; 4] = [
    &[(1, 0), (1, 1), (0, 2), (1, 2)],
    &[(0, 0), (0, 1), (1, 1), (2, 1)],
    &[(0, 0), (1, 0), (0, 1), (0, 2)],
    &[(0, 0), (1, 0), (2, 0), (2, 1)],
];

const Z_SHAPES: [PieceShape; 4] = [
    &[(0, 0), (1, 0), (1, 1), (2, 1)],
    &[(2, 0), (1, 1), (2, 1), (1, 2)],
    &[(0, 1), (1, 1), (1, 2), (2, 2)],
    &[(1, 0), (0, 1), (1, 1), (0, 2)],
];

const S_SHAPES: [PieceShape; 4] = [
    &[(1, 0), (2, 0), (0, 1), (1, 1)],
    &[(1, 0), (1, 1), (2, 1), (2, 2)],
    &[(1, 1), (2, 1), (0, 2), (1, 2)],
    &[(0, 0), (0, 1), (1, 1), (1, 2)],
];

const U_SHAPES: [PieceShape; 4] = [
    &[(1, 0), (0, 0), (0, 1), (0, 2), (1, 2)],
    &[(0, 1), (0, 0), (1, 0), (2, 0), (2, 1)],
    &[(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)],
    &[(0, 0), (0, 1), (1, 1), (2, 1), (2, 0)],
];

const W_SHAPES: [PieceShape; 4] = [
    &[(2, 0), (2, 1), (1, 1), (1, 2), (0, 2)],
    &[(1, 0), (1, 1), (1, 2), (0, 1), (2, 1)],
    &[(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)],
    &[(2, 0), (2, 1), (1, 1), (0, 1), (0, 2)],
];

const LONG_SHAPES: [PieceShape; 4] = [
    &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)],
    &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)],
    &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)],
    &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)],
];

const V_SHAPES: [PieceShape; 4] = [
    &[(0, 2), (1, 2), (2, 2), (0, 1), (0, 0)],
    &[(0, 0), (1, 0), (2, 0), (0, 1), (0, 2)],
    &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)],
    &[(0, 2), (1, 2), (2, 2), (2, 1), (2, 0)],
];

fn shape_table(kind: PieceKind) -> &'static [PieceShape; 4] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::L => &L_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::U => &U_SHAPES,
        PieceKind::W => &W_SHAPES,
        PieceKind::Long => &LONG_SHAPES,
        PieceKind::V => &V_SHAPES,
    }
}

/// Get the shape (cell offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    shape_table(kind)[rotation.index() as usize]
}

/// Rotations to try, in order, when rotating from `rotation`
pub fn rotation_candidates(rotation: Rotation) -> [Rotation; 2] {
    [rotation.rotate_cw(), rotation.rotate_ccw()]
}

/// Try to rotate a piece in place
///
/// `is_free` reports whether a board cell can hold part of the piece.
/// Returns the first candidate rotation whose cells are all free, or `None`
/// when the piece must keep its current rotation.
pub fn try_rotate(
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
    is_free: impl Fn(i8, i8) -> bool,
) -> Option<Rotation> {
    rotation_candidates(rotation).into_iter().find(|&candidate| {
        get_shape(kind, candidate)
            .iter()
            .all(|&(dx, dy)| is_free(x + dx, y + dy))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_pieces_have_four_cells_and_large_pieces_five() {
        for kind in PieceKind::ALL {
            let expected = if kind.id() <= 7 { 4 } else { 5 };
            for r in 0..4 {
                assert_eq!(get_shape(kind, Rotation::from_index(r)).len(), expected, "{:?}", kind);
            }
        }
    }

    #[test]
    fn o_piece_is_rotation_invariant() {
        let north = get_shape(PieceKind::O, Rotation::North);
        for r in 1..4 {
            assert_eq!(get_shape(PieceKind::O, Rotation::from_index(r)), north);
        }
    }

    #[test]
    fn long_piece_repeats_two_states() {
        assert_eq!(
            get_shape(PieceKind::Long, Rotation::North),
            get_shape(PieceKind::Long, Rotation::South)
        );
        assert_eq!(
            get_shape(PieceKind::Long, Rotation::East),
            get_shape(PieceKind::Long, Rotation::West)
        );
    }

    #[test]
    fn no_shape_repeats_a_cell() {
        for kind in PieceKind::ALL {
            for r in 0..4 {
                let shape = get_shape(kind, Rotation::from_index(r));
                for (i, a) in shape.iter().enumerate() {
                    assert!(!shape[i + 1..].contains(a), "{:?} r{} repeats {:?}", kind, r, a);
                }
            }
        }
    }

    #[test]
    fn candidates_are_forward_then_reverse() {
        assert_eq!(
            rotation_candidates(Rotation::North),
            [Rotation::East, Rotation::West]
        );
        assert_eq!(
            rotation_candidates(Rotation::West),
            [Rotation::North, Rotation::South]
        );
    }

    #[test]
    fn try_rotate_falls_back_to_reverse() {
        // Forbid every cell the forward T rotation needs that the reverse one does not.
        let forward = get_shape(PieceKind::T, Rotation::East);
        let reverse = get_shape(PieceKind::T, Rotation::West);
        let blocked: Vec<_> = forward.iter().filter(|c| !reverse.contains(c)).copied().collect();

        let result = try_rotate(PieceKind::T, Rotation::North, 0, 0, |x, y| {
            !blocked.contains(&(x, y))
        });
        assert_eq!(result, Some(Rotation::West));
    }

    #[test]
    fn try_rotate_returns_none_when_both_fail() {
        let result = try_rotate(PieceKind::T, Rotation::North, 0, 0, |_, _| false);
        assert_eq!(result, None);
    }
}
