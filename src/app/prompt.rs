use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::utils::error::{CatalogError, Result};

/// Line-oriented prompt reader. Every `read_*` call re-prompts until the
/// input parses; only a closed input stream ends it early.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Raw line without its terminator.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CatalogError::InputClosed {
                prompt: prompt.trim().to_string(),
            });
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn read_non_empty(&mut self, prompt: &str) -> Result<String> {
        loop {
            let line = self.read_line(prompt)?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
            self.say("Value cannot be empty.")?;
        }
    }

    /// Number within `[min; max]`. Decimals use `.` as separator.
    pub fn read_in_range<T>(&mut self, prompt: &str, min: T, max: T) -> Result<T>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<T>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => self.say(format!(
                    "Enter a number in the range [{}; {}] (use '.' as the decimal separator).",
                    min, max
                ))?,
            }
        }
    }

    /// Accepts y/yes/д/да and n/no/н/нет in any case. Blank lines are
    /// skipped without a notice.
    pub fn read_bool(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let line = self.read_line(prompt)?;
            let answer = line.trim().to_lowercase();
            match answer.as_str() {
                "" => continue,
                "y" | "yes" | "д" | "да" => return Ok(true),
                "n" | "no" | "н" | "нет" => return Ok(false),
                _ => self.say("Enter y/n.")?,
            }
        }
    }
}
