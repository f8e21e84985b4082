//! Compaction of many small sequences into one shared backing store.
//!
//! Sequences are appended with [`Lut::add`], which hands back a stable
//! [`Slot`]. [`Lut::compact`] rewrites the store so that sequences overlap
//! wherever their contents allow, and the slot then resolves to the
//! sequence's final start offset. This is a greedy heuristic for the
//! shortest-common-superstring problem; the result is never longer than the
//! plain concatenation of all added sequences, but is not guaranteed
//! minimal.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Handle to a sequence added to a [`Lut`]. Resolves to a start offset via
/// [`Compacted::offset`] once the table has been compacted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slot(usize);

pub struct Lut<T> {
    /// Distinct items, addressed by the integer keys used for comparisons.
    items: Vec<T>,
    keys: FxHashMap<T, usize>,
    sequences: Vec<Vec<usize>>,
}

impl<T: Clone + Eq + Hash> Lut<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            keys: FxHashMap::default(),
            sequences: Vec::new(),
        }
    }

    /// Appends a sequence, returning its slot.
    pub fn add(&mut self, sequence: impl IntoIterator<Item = T>) -> Slot {
        let keyed = sequence
            .into_iter()
            .map(|item| match self.keys.get(&item) {
                Some(&key) => key,
                None => {
                    let key = self.items.len();
                    self.keys.insert(item.clone(), key);
                    self.items.push(item);
                    key
                }
            })
            .collect();

        self.sequences.push(keyed);
        Slot(self.sequences.len() - 1)
    }

    /// Rewrites the backing store, overlapping sequences wherever possible.
    /// Consumes the table; no further sequences can be added afterwards.
    pub fn compact(self) -> Compacted<T> {
        let Self {
            items, sequences, ..
        } = self;

        let mut order: Vec<usize> = (0..sequences.len()).collect();
        order.sort_by_key(|&i| std::cmp::Reverse(sequences[i].len()));

        let mut offsets: Vec<Option<usize>> = vec![None; sequences.len()];
        let mut output: Vec<usize> = Vec::new();

        for (i, sequence) in sequences.iter().enumerate() {
            if sequence.is_empty() {
                offsets[i] = Some(0);
            }
        }

        loop {
            // The unplaced sequence with the longest exact overlap against
            // the current output wins. Zero-overlap rounds fall back to the
            // longest remaining sequence, appended at the end.
            let mut best: Option<(usize, usize, isize)> = None;

            for &i in &order {
                if offsets[i].is_some() {
                    continue;
                }

                let (overlap, position) = best_overlap(&output, &sequences[i]);

                if best.is_none_or(|(_, best_overlap, _)| overlap > best_overlap) {
                    best = Some((i, overlap, position));
                }
            }

            let Some((i, _, position)) = best else {
                break;
            };

            let final_offset = place(&mut output, &sequences[i], position, &mut offsets);
            offsets[i] = Some(final_offset);
        }

        Compacted {
            items: output.iter().map(|&key| items[key].clone()).collect(),
            offsets: offsets
                .into_iter()
                .map(|offset| offset.expect("every sequence placed"))
                .collect(),
        }
    }
}

impl<T: Clone + Eq + Hash> Default for Lut<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the placement of `sequence` against `output` with the longest
/// exact overlap. The sequence's head or tail may overhang the output in
/// either direction; every position inside the intersection must match.
/// Returns (overlap length, placement offset), defaulting to a zero-overlap
/// append at the end.
fn best_overlap(output: &[usize], sequence: &[usize]) -> (usize, isize) {
    let m = output.len() as isize;
    let n = sequence.len() as isize;
    let mut best = (0, m);

    for position in (1 - n)..m {
        let lo = position.max(0);
        let hi = (position + n).min(m);
        let overlap = (hi - lo) as usize;

        if overlap <= best.0 {
            continue;
        }

        let in_output = &output[lo as usize..hi as usize];
        let in_sequence = &sequence[(lo - position) as usize..(hi - position) as usize];

        if in_output == in_sequence {
            best = (overlap, position);
        }
    }

    best
}

/// Splices `sequence` into `output` at `position`, growing the output at
/// either end as needed. Prepending shifts every already-placed offset.
fn place(
    output: &mut Vec<usize>,
    sequence: &[usize],
    position: isize,
    offsets: &mut [Option<usize>],
) -> usize {
    let mut position = position;

    if position < 0 {
        let grown_by = (-position) as usize;
        output.splice(0..0, sequence[..grown_by].iter().copied());

        for offset in offsets.iter_mut() {
            if let Some(offset) = offset.as_mut() {
                *offset += grown_by;
            }
        }

        position = 0;
    }

    let position = position as usize;

    if position + sequence.len() > output.len() {
        let already_present = output.len() - position;
        output.extend_from_slice(&sequence[already_present..]);
    }

    position
}

/// The result of [`Lut::compact`]: the shared backing store plus the final
/// offset of every added sequence.
pub struct Compacted<T> {
    items: Vec<T>,
    offsets: Vec<usize>,
}

impl<T> Compacted<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn offset(&self, slot: Slot) -> usize {
        self.offsets[slot.0]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
