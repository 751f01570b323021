//! Table cache: decoded tables stored as JSON and reloaded as is.
//! Serdes failures are reported as [Error::Io].
use crate::{error::Error, table::ObservationTable};

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

#[cfg(feature = "log")]
use log::debug;

impl ObservationTable {
    /// Dumps this [ObservationTable] into a local cache file.
    /// Every cell, missing markers included, is preserved.
    pub fn to_cache_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let fd = File::create(path)?;
        let mut writer = BufWriter::new(fd);
        serde_json::to_writer(&mut writer, self).map_err(std::io::Error::from)?;
        writer.flush()?;

        #[cfg(feature = "log")]
        debug!("table cached into \"{}\"", path.display());
        Ok(())
    }

    /// Reloads an [ObservationTable] previously cached with [Self::to_cache_file].
    /// The content is returned unchanged, without any verification.
    pub fn from_cache_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let fd = File::open(path)?;
        let reader = BufReader::new(fd);
        let table = serde_json::from_reader(reader).map_err(std::io::Error::from)?;
        Ok(table)
    }
}
