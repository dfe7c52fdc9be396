use super::structs::Cell;

/// A line after it has been slid and merged toward its head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collapsed {
    pub cells: Vec<Cell>,
    pub score: u64,
    pub changed: bool,
}

/// Slides `line` toward index 0, merging equal neighbours.
///
/// Each tile merges at most once, and when three equal tiles line up the
/// pair nearest the head wins. [`Cell::MAX_TILE`] tiles only slide. The
/// output has the same length as the input, padded with empty cells.
pub fn collapse(line: &[Cell]) -> Collapsed {
    let tiles = line.iter().copied().filter(|c| !c.empty()).collect::<Vec<_>>();

    let mut cells = Vec::with_capacity(line.len());
    let mut score = 0;
    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i].merges_with(&tiles[i + 1]) {
            let merged = tiles[i] * 2;
            score += u64::from(merged.get());
            cells.push(merged);
            i += 2;
        } else {
            cells.push(tiles[i]);
            i += 1;
        }
    }
    cells.resize(line.len(), Cell::EMPTY);

    let changed = cells.as_slice() != line;
    Collapsed {
        cells,
        score,
        changed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(values: &[u32]) -> (Vec<u32>, u64, bool) {
        let line = values.iter().map(|&v| Cell::new(v)).collect::<Vec<_>>();
        let out = collapse(&line);
        (
            out.cells.iter().map(Cell::get).collect(),
            out.score,
            out.changed,
        )
    }

    #[test]
    fn empty_line_is_untouched() {
        assert_eq!(run(&[0, 0, 0, 0]), (vec![0, 0, 0, 0], 0, false));
    }

    #[test]
    fn single_tile_at_head_is_untouched() {
        assert_eq!(run(&[8, 0, 0, 0]), (vec![8, 0, 0, 0], 0, false));
    }

    #[test]
    fn single_tile_slides_to_head() {
        assert_eq!(run(&[0, 0, 0, 8]), (vec![8, 0, 0, 0], 0, true));
    }

    #[test]
    fn four_equal_tiles_merge_pairwise() {
        assert_eq!(run(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8, true));
    }

    #[test]
    fn trailing_pair_slides_and_merges() {
        assert_eq!(run(&[0, 0, 2, 2]), (vec![4, 0, 0, 0], 4, true));
    }

    #[test]
    fn odd_run_leaves_last_tile() {
        assert_eq!(run(&[2, 2, 2, 0]), (vec![4, 2, 0, 0], 4, true));
        assert_eq!(run(&[4, 4, 4]), (vec![8, 4, 0], 8, true));
    }

    #[test]
    fn merged_tile_does_not_merge_again() {
        assert_eq!(run(&[4, 2, 2, 0]), (vec![4, 4, 0, 0], 4, true));
        assert_eq!(run(&[2, 2, 4, 0]), (vec![4, 4, 0, 0], 4, true));
    }

    #[test]
    fn gaps_do_not_block_merges() {
        assert_eq!(run(&[2, 0, 0, 2]), (vec![4, 0, 0, 0], 4, true));
        assert_eq!(run(&[2, 0, 4, 4]), (vec![2, 8, 0, 0], 8, true));
    }

    #[test]
    fn distinct_packed_tiles_do_not_change() {
        assert_eq!(run(&[2, 4, 8, 16]), (vec![2, 4, 8, 16], 0, false));
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let line = [2, 0, 2, 8, 16, 16].map(Cell::new);
        let first = collapse(&line);
        assert_eq!(first.score, 36);
        let second = collapse(&first.cells);
        assert_eq!(second.cells, first.cells);
        assert_eq!(second.score, 0);
        assert!(!second.changed);
    }

    #[test]
    fn largest_tiles_slide_but_never_merge() {
        let max = Cell::MAX_TILE;
        assert_eq!(run(&[max, max, 0, 0]), (vec![max, max, 0, 0], 0, false));
        assert_eq!(run(&[0, max, 0, max]), (vec![max, max, 0, 0], 0, true));
        let half = max / 2;
        assert_eq!(
            run(&[half, half, 0, 0]),
            (vec![max, 0, 0, 0], u64::from(max), true)
        );
    }

    #[test]
    fn pair_created_by_a_merge_waits_for_next_pass() {
        assert_eq!(run(&[2, 2, 4, 0]), (vec![4, 4, 0, 0], 4, true));
        assert_eq!(run(&[4, 4, 0, 0]), (vec![8, 0, 0, 0], 8, true));
    }
}
