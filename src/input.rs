use std::fs::File;
use std::io::{self, BufRead, BufReader};

pub enum InputReader {
    Stdin(BufReader<io::Stdin>),
    File(BufReader<File>),
    #[cfg(test)]
    Test(BufReader<io::Cursor<Vec<u8>>>),
}

impl BufRead for InputReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            InputReader::Stdin(reader) => reader.fill_buf(),
            InputReader::File(reader) => reader.fill_buf(),
            #[cfg(test)]
            InputReader::Test(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            InputReader::Stdin(reader) => reader.consume(amt),
            InputReader::File(reader) => reader.consume(amt),
            #[cfg(test)]
            InputReader::Test(reader) => reader.consume(amt),
        }
    }
}

impl io::Read for InputReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputReader::Stdin(reader) => reader.read(buf),
            InputReader::File(reader) => reader.read(buf),
            #[cfg(test)]
            InputReader::Test(reader) => reader.read(buf),
        }
    }
}

/// Opens `path` for line-oriented reading. `-` selects stdin.
pub fn create_input_reader(path: &str) -> Result<InputReader, io::Error> {
    if path == "-" {
        Ok(InputReader::Stdin(BufReader::new(io::stdin())))
    } else {
        let file = File::open(path)?;
        Ok(InputReader::File(BufReader::new(file)))
    }
}
