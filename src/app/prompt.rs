use crate::utils::error::{IntegrationError, Result};
use std::io::{BufRead, Write};

/// Line-oriented terminal prompt. Generic over its streams so it can be
/// driven from byte buffers in tests.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(IntegrationError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim().to_string())
    }

    /// Asks until the answer parses as an integer. Range hints are shown but
    /// not enforced, negatives included; the services decide what exists.
    pub fn ask_id(&mut self, question: &str) -> Result<i64> {
        loop {
            let answer = self.read_line(question)?;
            match answer.parse::<i64>() {
                Ok(id) => return Ok(id),
                Err(_) => {
                    tracing::debug!("Rejected non-numeric id input {:?}", answer);
                    writeln!(self.output, "Please enter a valid number.")?;
                }
            }
        }
    }

    pub fn ask_ids(&mut self) -> Result<(i64, i64)> {
        let user_id = self.ask_id("\nUser id (1-10): ")?;
        let product_id = self.ask_id("Product id (1-20): ")?;
        Ok((user_id, product_id))
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn confirm_another(&mut self) -> Result<bool> {
        let answer = self.read_line("\nValidate another pair? (y/n): ")?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }
}
