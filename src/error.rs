// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// Failed to read the source SVG.
    ReadFailed(PathBuf, std::io::Error),

    /// Only UTF-8 content are supported.
    NotAnUtf8Str,

    /// Compressed SVG must use the GZip algorithm.
    MalformedGZip,

    /// Failed to parse the SVG data.
    ParsingFailed(String),

    /// A pixmap of the requested size cannot be allocated.
    ///
    /// Occurs when the size is zero or too big.
    InvalidSize(u32),

    /// Failed to encode or write the output PNG.
    SaveFailed(PathBuf, String),

    /// Failed to write a status line to the console.
    Output(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::ReadFailed(ref path, ref e) => {
                write!(f, "failed to read '{}' cause {}", path.display(), e)
            }
            Error::NotAnUtf8Str => {
                write!(f, "provided data has not an UTF-8 encoding")
            }
            Error::MalformedGZip => {
                write!(f, "provided data has a malformed GZip content")
            }
            Error::ParsingFailed(ref e) => {
                write!(f, "SVG data parsing failed cause {}", e)
            }
            Error::InvalidSize(size) => {
                write!(f, "cannot create a {}x{} image", size, size)
            }
            Error::SaveFailed(ref path, ref e) => {
                write!(f, "failed to save '{}' cause {}", path.display(), e)
            }
            Error::Output(ref e) => {
                write!(f, "failed to write to the console cause {}", e)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::ReadFailed(_, ref e) | Error::Output(ref e) => Some(e),
            _ => None,
        }
    }
}
