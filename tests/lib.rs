mod propagation;
mod scenario;

use std::path::PathBuf;

/// Path to a file of the `data` folder of this crate
pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}
