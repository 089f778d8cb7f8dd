//! Interactive authoring of a new library entry
//!
//! Reads answers line by line from any `BufRead` and writes questions to any
//! `Write`, so the whole conversation can be driven from a test.

use crate::declaration::{annotated_candidates, SourceDeclaration};
use std::io::{self, BufRead, Write};

/// Asks the questions needed to build a [`SourceDeclaration`]
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Walk through every field of a new source
    pub fn prompt_source(&mut self) -> io::Result<SourceDeclaration> {
        let url = self.ask("URL:")?;
        let name = self.ask("Name:")?;
        let artist = self.ask("Artist:")?;
        let path = self.ask("Path:")?;
        let (namestamps, timestamps) = self.prompt_names_and_times()?;

        Ok(SourceDeclaration {
            name,
            artist,
            path,
            url,
            namestamps,
            timestamps,
        })
    }

    /// Try to extract names / times from a pasted description first, then
    /// fall back to asking for each one
    fn prompt_names_and_times(&mut self) -> io::Result<(Vec<String>, Vec<String>)> {
        let count = self.ask_count("How many songs are there?")?;

        writeln!(
            self.output,
            "Would you like to try and extract names / times from a description? (Y/N)"
        )?;
        if self.read_yes_no()? {
            writeln!(
                self.output,
                "Please paste that description, end with an empty line:"
            )?;
            let lines = self.read_paste()?;
            if let Some(found) = self.confirm_extraction(&lines, count)? {
                return Ok(found);
            }
            writeln!(
                self.output,
                "We couldn't extract the timestamps using our builtin patterns"
            )?;
        }

        writeln!(self.output, "Let's enter each timestamp and song name then.")?;
        writeln!(self.output, "Names:")?;
        let names = (0..count)
            .map(|_| self.read_line())
            .collect::<io::Result<Vec<_>>>()?;
        writeln!(self.output, "Timestamps:")?;
        let times = (0..count)
            .map(|_| self.read_line())
            .collect::<io::Result<Vec<_>>>()?;

        Ok((names, times))
    }

    /// Show each candidate extraction until one is accepted
    fn confirm_extraction(
        &mut self,
        lines: &[String],
        count: usize,
    ) -> io::Result<Option<(Vec<String>, Vec<String>)>> {
        if lines.len() != count {
            writeln!(
                self.output,
                "Expecting {} songs, but found {} lines",
                count,
                lines.len()
            )?;
            return Ok(None);
        }

        for (names, times) in annotated_candidates(lines, count) {
            writeln!(self.output, "Extracted the following:")?;
            for (name, time) in names.iter().zip(&times) {
                writeln!(self.output, "  {} ({})", name, time)?;
            }
            writeln!(self.output, "Does this look right to you? (Y/N)")?;
            if self.read_yes_no()? {
                return Ok(Some((names, times)));
            }
        }

        Ok(None)
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        writeln!(self.output, "{}", question)?;
        self.read_line()
    }

    fn ask_count(&mut self, question: &str) -> io::Result<usize> {
        loop {
            let answer = self.ask(question)?;
            match answer.trim().parse() {
                Ok(count) => return Ok(count),
                Err(_) => writeln!(self.output, "'{}' is not a number", answer.trim())?,
            }
        }
    }

    fn read_yes_no(&mut self) -> io::Result<bool> {
        let answer = self.read_line()?.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    /// Lines up to the first empty one or the end of input
    fn read_paste(&mut self) -> io::Result<Vec<String>> {
        let mut lines = Vec::new();
        loop {
            match self.next_line()? {
                Some(line) if !line.trim().is_empty() => lines.push(line),
                _ => return Ok(lines),
            }
        }
    }

    /// One answer line; running out of input here is an error
    fn read_line(&mut self) -> io::Result<String> {
        self.output.flush()?;
        self.next_line()?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input ended before all answers were given")
        })
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (io::Result<SourceDeclaration>, String) {
        let mut output = Vec::new();
        let result = Prompter::new(Cursor::new(script.to_string()), &mut output).prompt_source();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_extraction_accepted() {
        let script = "https://example.com/v\nDemo\nX\na/\n2\ny\n\
                      1. One (0:00)\n2. Two (1:00)\n\ny\n";
        let (result, transcript) = run(script);
        let source = result.unwrap();

        assert_eq!(source.url, "https://example.com/v");
        assert_eq!(source.name, "Demo");
        assert_eq!(source.artist, "X");
        assert_eq!(source.path, "a/");
        assert_eq!(source.namestamps, vec!["One", "Two"]);
        assert_eq!(source.timestamps, vec!["0:00", "1:00"]);
        assert!(transcript.contains("  One (0:00)"));
    }

    #[test]
    fn test_manual_entry_when_extraction_declined() {
        let script = "u\nDemo\nX\n\n2\nn\nOne\nTwo\n0:00\n1:00\n";
        let source = run(script).0.unwrap();

        assert_eq!(source.path, "");
        assert_eq!(source.namestamps, vec!["One", "Two"]);
        assert_eq!(source.timestamps, vec!["0:00", "1:00"]);
    }

    #[test]
    fn test_rejected_extraction_falls_back_to_manual() {
        let script = "u\nDemo\nX\na/\n1\nyes\n1. Only (0:00)\n\nn\nReal Name\n0:05\n";
        let (result, transcript) = run(script);
        let source = result.unwrap();

        assert_eq!(source.namestamps, vec!["Real Name"]);
        assert_eq!(source.timestamps, vec!["0:05"]);
        assert!(transcript.contains("couldn't extract"));
    }

    #[test]
    fn test_wrong_line_count_falls_back_to_manual() {
        let script = "u\nDemo\nX\na/\n2\ny\n1. Only (0:00)\n\nA\nB\n0:00\n1:00\n";
        let (result, transcript) = run(script);

        assert_eq!(result.unwrap().namestamps, vec!["A", "B"]);
        assert!(transcript.contains("Expecting 2 songs, but found 1 lines"));
    }

    #[test]
    fn test_count_is_asked_again_until_numeric() {
        let script = "u\nDemo\nX\na/\nthree\n1\nn\nOne\n0:00\n";
        let (result, transcript) = run(script);

        assert_eq!(result.unwrap().namestamps, vec!["One"]);
        assert!(transcript.contains("'three' is not a number"));
    }

    #[test]
    fn test_windows_line_endings() {
        let script = "u\r\nDemo\r\nX\r\na/\r\n1\r\nn\r\nOne\r\n0:00\r\n";
        let source = run(script).0.unwrap();
        assert_eq!(source.name, "Demo");
        assert_eq!(source.timestamps, vec!["0:00"]);
    }

    #[test]
    fn test_running_out_of_input_is_an_error() {
        let err = run("u\nDemo\n").0.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
