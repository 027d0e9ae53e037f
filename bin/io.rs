use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Lines, Read, Write};
use tracing::instrument;

/// Line oriented text channel.
pub struct Io<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Io<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Io {
            writer,
            reader: BufReader::new(reader).lines(),
        }
    }

    /// Reads the next line, or nothing once the input is exhausted.
    #[instrument(level = "trace", skip(self), err)]
    pub fn recv(&mut self) -> io::Result<Option<String>> {
        self.reader.next().transpose()
    }

    #[instrument(level = "trace", skip(self, msg), fields(%msg), err)]
    pub fn send<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(self.writer, "{}", msg)
    }

    /// Writes a message without terminating the line.
    #[instrument(level = "trace", skip(self, msg), fields(%msg), err)]
    pub fn prompt<T: Display>(&mut self, msg: T) -> io::Result<()> {
        write!(self.writer, "{}", msg)?;
        self.writer.flush()
    }
}
