//! Reference-block selection.
//!
//! Every slot gets its second compressor input from a pseudo-random
//! 64-bit word `J`: the low half picks a position inside the reference
//! lane through a distribution skewed toward recent blocks, the high half
//! picks the lane. The window of candidate positions is exactly the set
//! of blocks already finished in the current or previous pass, minus the
//! current slice of other lanes (the slice barrier) and the slot itself.
//!
//! In data-independent mode `J` comes from a per-segment stream produced
//! by compressing counter-indexed input blocks, so the whole access
//! pattern is a pure function of the public parameters.

use crate::block::Block;
use crate::compress::compress;
use crate::memory::{Layout, SYNC_POINTS};
use crate::variant::Variant;

/// Pseudo-random words carried by one address block.
pub(crate) const ADDRESSES_IN_BLOCK: u32 = 128;

/// The slot currently being filled.
#[derive(Clone, Debug)]
pub(crate) struct Position {
    pub pass: u32,
    pub lane: u32,
    pub slice: u32,
    pub index: u32,
}

/// Resolve the pseudo-random word `rand` into `(lane, slot)` coordinates
/// of the reference block for `position`.
pub(crate) fn reference_block(layout: &Layout, position: &Position, rand: u64) -> (u32, u32) {
    let j1 = rand as u32;
    let j2 = (rand >> 32) as u32;

    // The very first slice of the very first pass has nothing finished in
    // other lanes yet.
    let ref_lane = if position.pass == 0 && position.slice == 0 {
        position.lane
    } else {
        j2 % layout.lanes
    };
    let same_lane = ref_lane == position.lane;

    // Blocks available in the reference lane. Same-lane references may
    // reach the blocks already built in the current slice; cross-lane
    // references stop at the last finished slice, and additionally skip
    // the neighbour of the slot when nothing of the current slice exists
    // yet (index 0), because that neighbour is the previous-block input.
    let reference_area_size = if position.pass == 0 {
        if position.slice == 0 {
            position.index - 1
        } else if same_lane {
            position.slice * layout.segment_length + position.index - 1
        } else if position.index == 0 {
            position.slice * layout.segment_length - 1
        } else {
            position.slice * layout.segment_length
        }
    } else if same_lane {
        layout.lane_length - layout.segment_length + position.index - 1
    } else if position.index == 0 {
        layout.lane_length - layout.segment_length - 1
    } else {
        layout.lane_length - layout.segment_length
    };

    // Skewed draw: x = J1^2 / 2^32, z = W - 1 - W*x / 2^32. The 32-bit
    // shift ordering is load-bearing; reformulating changes the rounding.
    let area = reference_area_size as u64;
    let x = (j1 as u64).wrapping_mul(j1 as u64) >> 32;
    let relative = area - 1 - ((area * x) >> 32);

    // From pass 1 on, the window starts right after the current slice of
    // the previous pass and wraps around the lane.
    let start = if position.pass == 0 || position.slice == SYNC_POINTS - 1 {
        0
    } else {
        (position.slice + 1) * layout.segment_length
    };

    let slot = ((start as u64 + relative) % layout.lane_length as u64) as u32;
    (ref_lane, slot)
}

/// Produce the data-independent pseudo-random stream for one segment.
///
/// The input block encodes the position and the public cost parameters;
/// its counter word advances every [`ADDRESSES_IN_BLOCK`] outputs, and
/// each counter value is expanded with two chained compressions of the
/// zero block.
pub(crate) fn generate_addresses(
    layout: &Layout,
    position: &Position,
    passes: u32,
    variant: Variant,
) -> Vec<u64> {
    let mut input = Block::ZERO;
    input.0[0] = position.pass as u64;
    input.0[1] = position.lane as u64;
    input.0[2] = position.slice as u64;
    input.0[3] = layout.memory_blocks as u64;
    input.0[4] = passes as u64;
    input.0[5] = variant.tag() as u64;

    let mut stream = Vec::with_capacity(layout.segment_length as usize);
    let mut address = Block::ZERO;
    for i in 0..layout.segment_length {
        if i % ADDRESSES_IN_BLOCK == 0 {
            input.0[6] += 1;
            address = compress(&Block::ZERO, &compress(&Block::ZERO, &input, None), None);
        }
        stream.push(address.word((i % ADDRESSES_IN_BLOCK) as usize));
    }
    stream
}
