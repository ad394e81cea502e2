//! Block partitioning
//!
//! A plane is divided into non-overlapping 8x8 blocks in raster order
//! (left to right, top to bottom). Block `i` sits at block coordinates
//! `(i % blocks_x, i / blocks_x)`.

use planecodec_core::consts::{BLOCK_AREA, BLOCK_SIZE};
use planecodec_core::{Plane, PlaneError, PlaneResult};

/// An 8x8 tile of samples in row-major order
pub type Block = [i32; BLOCK_AREA];

/// Number of blocks needed along one dimension
pub fn num_blocks(size: usize) -> usize {
    size / BLOCK_SIZE
}

fn check_block_aligned(width: usize, height: usize) -> PlaneResult<()> {
    if width % BLOCK_SIZE != 0 || height % BLOCK_SIZE != 0 {
        return Err(PlaneError::DimensionMismatch {
            expected_width: width.next_multiple_of(BLOCK_SIZE),
            expected_height: height.next_multiple_of(BLOCK_SIZE),
            width,
            height,
        });
    }
    Ok(())
}

/// Copy the block at block coordinates `(block_x, block_y)` out of a plane
pub fn extract_block(plane: &Plane, block_x: usize, block_y: usize) -> Block {
    let start_x = block_x * BLOCK_SIZE;
    let start_y = block_y * BLOCK_SIZE;
    let width = plane.width();
    let samples = plane.samples();

    let mut block = [0; BLOCK_AREA];
    for y in 0..BLOCK_SIZE {
        let src = (start_y + y) * width + start_x;
        let row = &samples[src..src + BLOCK_SIZE];
        block[y * BLOCK_SIZE..(y + 1) * BLOCK_SIZE].copy_from_slice(row);
    }
    block
}

/// Write a block back into a plane at block coordinates `(block_x, block_y)`
pub fn insert_block(block: &Block, plane: &mut Plane, block_x: usize, block_y: usize) {
    let start_x = block_x * BLOCK_SIZE;
    let start_y = block_y * BLOCK_SIZE;
    let width = plane.width();
    let samples = plane.samples_mut();

    for y in 0..BLOCK_SIZE {
        let dst = (start_y + y) * width + start_x;
        let row = &block[y * BLOCK_SIZE..(y + 1) * BLOCK_SIZE];
        samples[dst..dst + BLOCK_SIZE].copy_from_slice(row);
    }
}

/// Split a plane into 8x8 blocks in raster order
pub fn partition(plane: &Plane) -> PlaneResult<Vec<Block>> {
    check_block_aligned(plane.width(), plane.height())?;

    let blocks_x = num_blocks(plane.width());
    let blocks_y = num_blocks(plane.height());
    let mut blocks = Vec::with_capacity(blocks_x * blocks_y);

    for by in 0..blocks_y {
        for bx in 0..blocks_x {
            blocks.push(extract_block(plane, bx, by));
        }
    }

    log::debug!(
        "Partitioned {}x{} plane into {} blocks",
        plane.width(),
        plane.height(),
        blocks.len()
    );
    Ok(blocks)
}

/// Rebuild a `width`x`height` plane from blocks in raster order
pub fn reassemble(blocks: &[Block], width: usize, height: usize) -> PlaneResult<Plane> {
    check_block_aligned(width, height)?;

    let blocks_x = num_blocks(width);
    let expected = blocks_x * num_blocks(height);
    if blocks.len() != expected {
        return Err(PlaneError::BlockCountMismatch {
            expected,
            actual: blocks.len(),
        });
    }

    let mut plane = Plane::new(width, height);
    for (i, block) in blocks.iter().enumerate() {
        insert_block(block, &mut plane, i % blocks_x, i / blocks_x);
    }

    Ok(plane)
}
