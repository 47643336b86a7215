use std::io;
use std::path::PathBuf;

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        /// The frame directory is missing or can't be listed
        DirectoryNotFound(path: PathBuf, err: io::Error) {
            display("Can't read frame directory {}", path.display())
            source(err)
        }
        /// A frame file name doesn't start with a frame number
        Parse(file_name: String) {
            display("Frame file name '{}' doesn't start with a frame number", file_name)
        }
        Decode(path: PathBuf, msg: String) {
            display("Can't load {}: {}", path.display(), msg)
        }
        NoFrames {
            display("Found no frames to encode")
        }
        CreateOutput(path: PathBuf, err: io::Error) {
            display("Can't write to {}", path.display())
            source(err)
        }
        Write(err: io::Error) {
            display("Writing the GIF failed")
            source(err)
        }
        Gif(err: gif::EncodingError) {
            display("GIF encoding error: {}", err)
        }
        Quant(err: imagequant::Error) {
            from()
            display("pngquant error: {}", err)
        }
        WrongSize(msg: String) {
            display("{}", msg)
        }
        Aborted {
            display("aborted")
        }
    }
}

impl From<gif::EncodingError> for Error {
    #[cold]
    fn from(err: gif::EncodingError) -> Self {
        match err {
            gif::EncodingError::Io(err) => Error::Write(err),
            other => Error::Gif(other),
        }
    }
}

impl From<io::Error> for Error {
    #[cold]
    fn from(err: io::Error) -> Self {
        Error::Write(err)
    }
}

pub type CatResult<T, E = Error> = Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoder_io_errors_are_write_errors() {
        let err: Error = gif::EncodingError::Io(io::Error::new(io::ErrorKind::Other, "disk full")).into();
        assert!(matches!(err, Error::Write(_)));
    }

    #[test]
    fn io_cause_is_not_repeated_in_message() {
        use std::error::Error as _;

        let err = Error::DirectoryNotFound(PathBuf::from("nope"), io::Error::new(io::ErrorKind::NotFound, "no such dir"));
        let msg = err.to_string();
        assert!(msg.contains("nope"), "{}", msg);
        assert!(!msg.contains("no such dir"), "{}", msg);
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("no such dir"));

        let err = Error::Write(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert!(!err.to_string().contains("disk full"));
        assert!(err.source().is_some());
    }

    #[test]
    fn parse_error_names_the_file() {
        let msg = Error::Parse("abc.png".into()).to_string();
        assert!(msg.contains("abc.png"), "{}", msg);
    }
}
