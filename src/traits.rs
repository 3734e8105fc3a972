//! Traits for reading and writing the on-disk forms of a translation catalog.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::error::Error;

/// Reads and writes one on-disk form of the catalog.
///
/// Implementors provide the reader and writer halves; paths and in-memory buffers go
/// through the provided methods. Both the String Catalog document and the CSV table
/// implement it.
///
/// # Example
///
/// ```rust,no_run
/// use mojitalk_l10n::{formats::xcstrings::Format, traits::Parser};
/// let format = Format::read_from("Localizable.xcstrings")?;
/// format.write_to("Localizable.copy.xcstrings")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse the file at `path`.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path, replacing any existing file.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        // Dropping a BufWriter swallows flush errors.
        writer.flush()?;
        Ok(())
    }

    /// Parse an in-memory copy, e.g. `include_bytes!` data or a string's bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes))
    }
}
