use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::catalog::domain::dataset::Dataset;
use crate::catalog::domain::dataset_error::DatasetError;

/// Write the catalog as JSON Lines: one `{"audio_path", "transcript"}` object
/// per entry, in catalog order.
pub fn write_manifest(path: &Path, dataset: &dyn Dataset) -> Result<(), DatasetError> {
    let manifest_err = |e: serde_json::Error| DatasetError::Manifest {
        path: path.to_path_buf(),
        source: e,
    };
    let io_err = |e: std::io::Error| manifest_err(serde_json::Error::io(e));

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    for index in 0..dataset.size() {
        serde_json::to_writer(&mut writer, dataset.get(index)?).map_err(manifest_err)?;
        writer.write_all(b"\n").map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    log::info!("Wrote {} manifest lines to {}", dataset.size(), path.display());
    Ok(())
}
