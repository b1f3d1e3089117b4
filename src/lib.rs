mod heap;
mod order;

pub use heap::{Heap, MaxHeap, MinHeap, DEFAULT_CAPACITY};
pub use order::{HeapOrder, Max, Min, Mode};
