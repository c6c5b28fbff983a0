//! Item list scanning
//!
//! The item list starts with a `JM` marker followed by the item count. Every
//! later `JM` is a candidate record, and a `JM` followed by two zero bytes
//! closes the list. The scanner always resumes one byte after the marker it
//! just examined, even when the candidate was a simple item that was skipped,
//! so markers embedded inside a skipped record are picked up as candidates.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::{ItemRecord, ITEM_MARKER};

/// Lazy iterator over the non-simple item records of a save buffer
#[derive(Debug, Clone)]
pub struct ItemScanner<'a> {
    buf: &'a [u8],
    pos: usize,
    seen_list_start: bool,
    finished: bool,
    truncated_at: Option<usize>,
}

impl<'a> ItemScanner<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            seen_list_start: false,
            finished: false,
            truncated_at: None,
        }
    }

    /// Offset of a candidate record that ran past the end of the buffer.
    ///
    /// Set once the scan stopped on a truncated record rather than on the
    /// end-of-list marker or the end of the buffer.
    pub fn truncated_at(&self) -> Option<usize> {
        self.truncated_at
    }

    fn next_marker(&self) -> Option<usize> {
        self.buf
            .get(self.pos..)?
            .windows(ITEM_MARKER.len())
            .position(|window| window == ITEM_MARKER)
            .map(|index| self.pos + index)
    }

    fn is_end_of_list(&self, offset: usize) -> bool {
        self.buf.get(offset + 2..offset + 4) == Some(&[0, 0][..])
    }
}

impl<'a> Iterator for ItemScanner<'a> {
    type Item = ItemRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let Some(offset) = self.next_marker() else {
                self.finished = true;
                break;
            };
            self.pos = offset + 1;

            if !self.seen_list_start {
                trace!(offset, "item list start");
                self.seen_list_start = true;
                continue;
            }

            if self.is_end_of_list(offset) {
                trace!(offset, "item list end");
                self.finished = true;
                break;
            }

            match ItemRecord::decode(self.buf, offset) {
                Ok(item) if item.simple => {
                    trace!(offset, "skipping simple item");
                }
                Ok(item) => return Some(item),
                Err(err) => {
                    debug!(offset, error = %err, "stopping item scan");
                    self.truncated_at = Some(offset);
                    self.finished = true;
                }
            }
        }

        None
    }
}

impl FusedIterator for ItemScanner<'_> {}

/// Offsets of every `JM` marker in a buffer, overlapping matches included
pub fn marker_offsets(buf: &[u8]) -> impl Iterator<Item = usize> + '_ {
    buf.windows(ITEM_MARKER.len())
        .enumerate()
        .filter(|(_, window)| *window == ITEM_MARKER)
        .map(|(offset, _)| offset)
}
