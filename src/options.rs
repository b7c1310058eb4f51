use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::errors::AdpError;
use crate::stream::ChannelLayout;

pub const USAGE: &str = "Usage: adpwave <d|e> <input> <output> <channels>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Decode,
    Encode,
}

impl Mode {
    /// * Only the first letter counts, so `d`, `D`, `decode` all mean decoding.
    pub fn parse(arg: &str) -> Result<Self, AdpError> {
        match arg.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('d') => Ok(Self::Decode),
            Some('e') => Ok(Self::Encode),
            _ => Err(AdpError::InvalidArguments(format!("unknown mode `{arg}`, expected `d` or `e`"))),
        }
    }
}

/// * What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub input: PathBuf,
    pub output: PathBuf,
    pub layout: ChannelLayout,
}

impl Options {
    /// * Parse the arguments after the program name.
    /// * The paths are taken as they are, only the mode and the channel count have to be UTF-8.
    pub fn from_args<I, S>(args: I) -> Result<Self, AdpError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let [mode, input, output, channels] = args.as_slice() else {
            return Err(AdpError::InvalidArguments(format!("expected 4 arguments, got {}", args.len())));
        };
        let channels = utf8_arg(channels, "channel count")?;
        let channels = channels
            .trim()
            .parse::<u16>()
            .map_err(|_| AdpError::InvalidArguments(format!("bad channel count `{channels}`")))?;
        Ok(Self {
            mode: Mode::parse(utf8_arg(mode, "mode")?)?,
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            layout: ChannelLayout::from_channels(channels)?,
        })
    }
}

fn utf8_arg<'a>(arg: &'a OsStr, what: &str) -> Result<&'a str, AdpError> {
    arg.to_str()
        .ok_or_else(|| AdpError::InvalidArguments(format!("the {what} `{}` is not valid UTF-8", arg.to_string_lossy())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_modes() {
        assert_eq!(Mode::parse("d"), Ok(Mode::Decode));
        assert_eq!(Mode::parse("Decode"), Ok(Mode::Decode));
        assert_eq!(Mode::parse("E"), Ok(Mode::Encode));
        assert!(Mode::parse("x").is_err());
        assert!(Mode::parse("").is_err());
    }

    #[test]
    fn parse_full_command_line() {
        let options = Options::from_args(["e", "in.raw", "out.adp", "2"]).unwrap();
        assert_eq!(options, Options {
            mode: Mode::Encode,
            input: PathBuf::from("in.raw"),
            output: PathBuf::from("out.adp"),
            layout: ChannelLayout::Stereo,
        });
    }

    #[test]
    fn wrong_argument_count() {
        assert!(matches!(Options::from_args(["d", "in", "out"]), Err(AdpError::InvalidArguments(_))));
        assert!(matches!(Options::from_args(["d", "in", "out", "1", "x"]), Err(AdpError::InvalidArguments(_))));
    }

    #[test]
    fn channel_count_is_checked() {
        assert!(matches!(Options::from_args(["d", "in", "out", "two"]), Err(AdpError::InvalidArguments(_))));
        assert_eq!(Options::from_args(["d", "in", "out", "3"]), Err(AdpError::UnsupportedChannels(3)));
        assert_eq!(Options::from_args(["d", "in", "out", "0"]), Err(AdpError::UnsupportedChannels(0)));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_paths_are_kept() {
        use std::os::unix::ffi::OsStringExt;

        let input = OsString::from_vec(vec![0xFF, 0xFE, b'.', b'r', b'a', b'w']);
        let options = Options::from_args([OsString::from("e"), input.clone(), OsString::from("out.adp"), OsString::from("1")]).unwrap();
        assert_eq!(options.input, PathBuf::from(input));
        assert_eq!(options.layout, ChannelLayout::Mono);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_mode_or_channels_are_rejected() {
        use std::os::unix::ffi::OsStringExt;

        let bad = || OsString::from_vec(vec![0xFF, 0xFE]);
        let result = Options::from_args([bad(), OsString::from("in"), OsString::from("out"), OsString::from("1")]);
        assert!(matches!(result, Err(AdpError::InvalidArguments(_))));
        let result = Options::from_args([OsString::from("d"), OsString::from("in"), OsString::from("out"), bad()]);
        assert!(matches!(result, Err(AdpError::InvalidArguments(_))));
    }
}
