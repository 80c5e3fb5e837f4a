//! The block matrix and the filling schedule.
//!
//! Memory is a flat array of 1024-byte blocks viewed as `lanes` rows of
//! `lane_length` columns. Each lane is split into four slices; the fill
//! walks `pass -> slice -> lane`, and the slice boundary is the only
//! synchronization point: all lanes finish slice `s` before any lane
//! starts slice `s + 1`. Within a slice every lane owns its own segment
//! exclusively and reads only blocks finished before the barrier opened,
//! which is what makes the pooled executor safe.

use std::cell::UnsafeCell;

use zeroize::Zeroize;

use crate::block::Block;
use crate::compress::compress;
use crate::error::Error;
use crate::params::ThreadMode;
use crate::reference::{self, Position};
use crate::sbox::Sbox;
use crate::variant::Variant;

/// Slices per lane; the granularity of inter-lane synchronization.
pub(crate) const SYNC_POINTS: u32 = 4;

/// Matrix dimensions derived once from the cost parameters.
#[derive(Clone, Debug)]
pub(crate) struct Layout {
    pub lanes: u32,
    pub lane_length: u32,
    pub segment_length: u32,
    pub memory_blocks: u32,
}

impl Layout {
    /// Round the requested block count down to a multiple of
    /// `SYNC_POINTS * lanes` (never below two slices per lane) and derive
    /// the per-lane dimensions.
    pub(crate) fn new(mem_cost: u32, lanes: u32) -> Self {
        let min_blocks = 2 * SYNC_POINTS * lanes;
        let granularity = SYNC_POINTS * lanes;
        let memory_blocks = (mem_cost.max(min_blocks) / granularity) * granularity;
        let lane_length = memory_blocks / lanes;
        Self {
            lanes,
            lane_length,
            segment_length: lane_length / SYNC_POINTS,
            memory_blocks,
        }
    }

    /// Flat index of `(lane, slot)`.
    #[inline]
    pub(crate) fn index(&self, lane: u32, slot: u32) -> usize {
        (lane * self.lane_length + slot) as usize
    }
}

/// Provider of the backing region for the matrix.
///
/// The core depends on this capability rather than on a concrete heap;
/// release happens by dropping the returned region.
pub trait BlockAllocator {
    /// Allocate `count` blocks, or report [`Error::AllocationFailed`].
    fn allocate(&self, count: usize) -> Result<Box<[Block]>, Error>;
}

/// Allocator backed by the global heap, with allocation failure reported
/// instead of aborting.
pub struct SystemAllocator;

impl BlockAllocator for SystemAllocator {
    fn allocate(&self, count: usize) -> Result<Box<[Block]>, Error> {
        let mut region: Vec<Block> = Vec::new();
        region
            .try_reserve_exact(count)
            .map_err(|_| Error::AllocationFailed)?;
        region.resize(count, Block::ZERO);
        Ok(region.into_boxed_slice())
    }
}

/// The working matrix.
pub(crate) struct Memory {
    blocks: Box<[Block]>,
    layout: Layout,
}

impl Memory {
    pub(crate) fn allocate<A: BlockAllocator>(
        layout: Layout,
        allocator: &A,
    ) -> Result<Self, Error> {
        let blocks = allocator.allocate(layout.memory_blocks as usize)?;
        Ok(Self { blocks, layout })
    }

    pub(crate) fn layout(&self) -> &Layout {
        &self.layout
    }

    pub(crate) fn block(&self, index: usize) -> &Block {
        &self.blocks[index]
    }

    pub(crate) fn block_mut(&mut self, index: usize) -> &mut Block {
        &mut self.blocks[index]
    }

    /// Overwrite every block with zeros (the `clear_memory` flag).
    pub(crate) fn wipe(&mut self) {
        for block in self.blocks.iter_mut() {
            block.zeroize();
        }
    }
}

/// Shared view of the matrix for the per-slice lane tasks.
///
/// Within one slice the tasks write disjoint segments and read only
/// blocks finished in earlier slices or passes, plus their own fresh
/// writes; the barrier between slices makes those reads race-free. The
/// accessors are `unsafe` because that invariant lives in the schedule,
/// not in the types.
struct SharedView<'a> {
    cells: &'a [UnsafeCell<Block>],
    layout: &'a Layout,
}

unsafe impl Sync for SharedView<'_> {}

impl<'a> SharedView<'a> {
    fn new(memory: &'a mut Memory) -> Self {
        let Memory { blocks, layout } = memory;
        // UnsafeCell<Block> has the same layout as Block.
        let cells =
            unsafe { &*(&mut **blocks as *mut [Block] as *const [UnsafeCell<Block>]) };
        SharedView {
            cells,
            layout: &*layout,
        }
    }

    /// Read a block finished before the current barrier opened, or
    /// written earlier by the calling task.
    unsafe fn block(&self, index: usize) -> &Block {
        &*self.cells[index].get()
    }

    /// Write a slot owned by the calling task in the current slice.
    #[allow(clippy::mut_from_ref)]
    unsafe fn block_mut(&self, index: usize) -> &mut Block {
        &mut *self.cells[index].get()
    }
}

/// Run every pass over the matrix. The first two blocks of each lane must
/// already be seeded.
pub(crate) fn fill(memory: &mut Memory, variant: Variant, passes: u32, mode: ThreadMode) {
    let mut sbox: Option<Sbox> = None;
    for pass in 0..passes {
        // The S-box variant rebuilds its table from the first matrix
        // block between passes; pass 0 runs without one.
        if variant.uses_sbox() && pass > 0 {
            sbox = Some(Sbox::generate(memory.block(0)));
        }
        for slice in 0..SYNC_POINTS {
            let view = SharedView::new(memory);
            let sbox = sbox.as_ref();
            match mode {
                ThreadMode::Sequential => {
                    for lane in 0..view.layout.lanes {
                        fill_segment(&view, variant, passes, sbox, pass, slice, lane);
                    }
                }
                ThreadMode::Parallel => {
                    rayon::scope(|scope| {
                        for lane in 0..view.layout.lanes {
                            let view = &view;
                            scope.spawn(move |_| {
                                fill_segment(view, variant, passes, sbox, pass, slice, lane);
                            });
                        }
                    });
                }
            }
        }
    }
}

/// Fill one segment: the slots of `lane` inside `slice` during `pass`.
fn fill_segment(
    view: &SharedView<'_>,
    variant: Variant,
    passes: u32,
    sbox: Option<&Sbox>,
    pass: u32,
    slice: u32,
    lane: u32,
) {
    let layout = view.layout;

    let stream = if variant.data_independent(pass, slice) {
        let position = Position { pass, lane, slice, index: 0 };
        Some(reference::generate_addresses(layout, &position, passes, variant))
    } else {
        None
    };

    // The first segment of all starts after the two seeded blocks.
    let start = if pass == 0 && slice == 0 { 2 } else { 0 };

    for index in start..layout.segment_length {
        let slot = slice * layout.segment_length + index;
        let prev_slot = if slot == 0 { layout.lane_length - 1 } else { slot - 1 };

        // SAFETY: `prev_slot` was written by this task (or in the
        // previous slice/pass of this lane) and nothing else writes this
        // lane during the slice.
        let prev = unsafe { view.block(layout.index(lane, prev_slot)) };

        let rand = match &stream {
            Some(words) => words[index as usize],
            None => prev.word(0),
        };

        let position = Position { pass, lane, slice, index };
        let (ref_lane, ref_slot) = reference::reference_block(layout, &position, rand);

        // SAFETY: the addressor never yields a slot inside the current
        // slice of another lane, so the reference block was finished
        // before the barrier opened.
        let next = {
            let reference = unsafe { view.block(layout.index(ref_lane, ref_slot)) };
            compress(prev, reference, sbox)
        };

        // SAFETY: this task is the only writer of `lane` in this slice.
        let current = unsafe { view.block_mut(layout.index(lane, slot)) };
        if pass == 0 {
            *current = next;
        } else {
            current.xor_with(&next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary;

    #[test]
    fn every_slot_is_written() {
        let layout = Layout::new(32, 4);
        let mut memory = Memory::allocate(layout, &SystemAllocator).unwrap();
        boundary::seed_first_blocks(&mut memory, &[7u8; 64]);
        fill(&mut memory, Variant::Argon2d, 2, ThreadMode::Sequential);

        for index in 0..memory.layout().memory_blocks {
            let block = memory.block(index as usize);
            assert!(
                block.0.iter().any(|&word| word != 0),
                "block {index} was never written"
            );
        }
    }
}
