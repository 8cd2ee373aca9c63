//! Minimal Hilbert key example: map a cell to a key and back.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // snips-start: example
    // 3D Hilbert curve on a 16x16x16 grid (order 4)
    let curve = hilbertkey::Hilbert::new(3, 4)?;
    println!("{}D Hilbert cells: {}", curve.dimension(), curve.cells());

    let cell = [5, 9, 12];
    let key = curve.key(&cell)?;
    println!("Key for {cell:?}: {key}");

    let point = curve.point(key)?;
    println!("Cell at key {key}: {:?}", point.as_slice());

    assert_eq!(point.as_slice(), &cell);
    // snips-end: example

    Ok(())
}
