use std::io::BufRead;
use std::pin::Pin;

use futures::stream::{self, Stream};

use crate::domain::traits::CommandStream;
use crate::domain::{Command, Error};

/// Reads commands one text line at a time from any `BufRead` source.
pub struct CommandReader<R: BufRead> {
    reader: Option<R>,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
        }
    }
}

impl<R: BufRead + Send + 'static> CommandStream for CommandReader<R> {
    type CmdStream = Pin<Box<dyn Stream<Item = Result<Command, Error>> + Send>>;

    fn stream(&mut self) -> Self::CmdStream {
        // The lines iterator must own the reader to be 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Reader already consumed; yield nothing.
                return Box::pin(stream::iter(Vec::<Result<Command, Error>>::new()));
            }
        };

        let iter = reader.lines().map(|line_res| match line_res {
            Ok(line) => line.parse::<Command>(),
            Err(e) => Err(Error::Io(e)),
        });

        Box::pin(stream::iter(iter))
    }
}
