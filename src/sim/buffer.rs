//! Bounded lane storage keyed by row
//!
//! Holds a contiguous window of generated rows `[first_row, next_row)`.
//! Rows are appended at the top as the camera climbs and dropped from the
//! bottom once they fall far enough behind it.

use std::collections::VecDeque;

use super::lane::Lane;

/// Sliding window of lanes
#[derive(Debug, Clone, Default)]
pub struct LaneBuffer {
    first_row: u32,
    lanes: VecDeque<Lane>,
}

impl LaneBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest row still held
    pub fn first_row(&self) -> u32 {
        self.first_row
    }

    /// Row the next pushed lane must have
    pub fn next_row(&self) -> u32 {
        self.first_row + self.lanes.len() as u32
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Drop everything and start again from row 0
    pub fn clear(&mut self) {
        self.first_row = 0;
        self.lanes.clear();
    }

    /// Append the lane for [`next_row`](Self::next_row)
    pub fn push(&mut self, lane: Lane) {
        debug_assert_eq!(lane.row, self.next_row());
        self.lanes.push_back(lane);
    }

    pub fn get(&self, row: u32) -> Option<&Lane> {
        let index = row.checked_sub(self.first_row)?;
        self.lanes.get(index as usize)
    }

    pub fn get_mut(&mut self, row: u32) -> Option<&mut Lane> {
        let index = row.checked_sub(self.first_row)?;
        self.lanes.get_mut(index as usize)
    }

    /// Lane at `row`, or grass for rows not held
    pub fn lane_or_grass(&self, row: u32) -> Lane {
        self.get(row).cloned().unwrap_or_else(|| Lane::grass(row))
    }

    /// Discard lanes below `row`, always keeping the newest lane so
    /// generation order is never broken. Returns the number dropped.
    pub fn evict_below(&mut self, row: u32) -> usize {
        let mut dropped = 0;
        while self.first_row < row && self.lanes.len() > 1 {
            self.lanes.pop_front();
            self.first_row += 1;
            dropped += 1;
        }
        dropped
    }

    /// Mutable access to held lanes in `[from, to]`
    pub fn range_mut(&mut self, from: u32, to: u32) -> impl Iterator<Item = &mut Lane> {
        self.lanes
            .iter_mut()
            .filter(move |lane| lane.row >= from && lane.row <= to)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(rows: u32) -> LaneBuffer {
        let mut buffer = LaneBuffer::new();
        for row in 0..rows {
            buffer.push(Lane::grass(row));
        }
        buffer
    }

    #[test]
    fn test_lookup_by_row() {
        let buffer = filled(10);
        assert_eq!(buffer.next_row(), 10);
        assert_eq!(buffer.get(4).map(|l| l.row), Some(4));
        assert!(buffer.get(10).is_none());
    }

    #[test]
    fn test_evict_keeps_rows_addressable() {
        let mut buffer = filled(10);
        assert_eq!(buffer.evict_below(4), 4);
        assert_eq!(buffer.first_row(), 4);
        assert_eq!(buffer.len(), 6);
        assert!(buffer.get(3).is_none());
        assert_eq!(buffer.get(7).map(|l| l.row), Some(7));
        assert_eq!(buffer.next_row(), 10);
        assert_eq!(buffer.lane_or_grass(2), Lane::grass(2));
    }

    #[test]
    fn test_evict_never_empties() {
        let mut buffer = filled(3);
        assert_eq!(buffer.evict_below(50), 2);
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.next_row(), 3);
    }

    #[test]
    fn test_range_mut_is_inclusive() {
        let mut buffer = filled(10);
        let rows: Vec<u32> = buffer.range_mut(2, 5).map(|l| l.row).collect();
        assert_eq!(rows, vec![2, 3, 4, 5]);
    }
}
