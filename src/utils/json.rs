use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

pub fn load_json<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    let data = serde_json::from_reader(reader)?;
    Ok(data)
}

pub fn save_json<T, P>(data: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
