//! Process-wide projection policy.

use std::sync::atomic::{AtomicBool, Ordering};

/// The single configuration surface of the serialization layer.
///
/// `index_complex_data_types` controls whether structured types (array,
/// object, custom-serializable) produce a string projection for search
/// indexing. The flag is read as an atomic snapshot at projection time;
/// flipping it never changes serialize/unserialize results. Concurrent
/// readers during a flip observe either the old or the new value.
#[derive(Debug, Default)]
pub struct Config {
    index_complex_data_types: AtomicBool,
}

impl Config {
    pub fn new(index_complex_data_types: bool) -> Self {
        Self {
            index_complex_data_types: AtomicBool::new(index_complex_data_types),
        }
    }

    pub fn index_complex_data_types(&self) -> bool {
        self.index_complex_data_types.load(Ordering::Relaxed)
    }

    pub fn set_index_complex_data_types(&self, on: bool) {
        self.index_complex_data_types.store(on, Ordering::Relaxed);
    }
}
