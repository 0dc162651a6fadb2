//! Console dialogue for defining and expanding an L-system.
//!
//! Reads, in order: angle, axiom, rule count, each rule (first character is the
//! symbol, the rest its replacement) and iteration count. Unparseable numbers and
//! empty rules are reported and asked for again; nothing malformed reaches the
//! rewrite engine.

use crate::error::{Error, Result};
use crate::language::Sequence;
use crate::rewriting::{Ruleset, rule::Rule};
use crate::system::LSystem;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Everything a finished dialogue produced.
#[derive(Debug)]
pub struct Outcome {
    pub system: LSystem,
    pub iterations: usize,
    pub result: Sequence,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    limit: Option<usize>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            limit: None,
        }
    }

    /// Refuse expansions whose generations grow past `limit` symbols.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn run(&mut self) -> Result<Outcome> {
        let angle: f64 = self.read_number("angle", "Enter angle: ")?;
        let axiom = Sequence::from(self.prompt("starting pattern", "Enter starting pattern: ")?);
        let rule_count: usize = self.read_number("number of rules", "Enter the number of rules: ")?;

        let mut rules = Ruleset::new();
        for index in 1..=rule_count {
            rules.add_rule(self.read_rule(index)?);
        }

        let iterations: i64 =
            self.read_number("number of expansions", "Enter the number of expansions: ")?;
        let iterations =
            usize::try_from(iterations).map_err(|_| Error::NegativeIterations(iterations))?;

        let system = LSystem::new(angle, axiom, rules);
        let result = match self.limit {
            Some(limit) => system.expand_bounded(iterations, limit)?,
            None => system.expand(iterations),
        };

        writeln!(
            self.output,
            "Resulting characters after {iterations} expansions: {result}"
        )?;

        Ok(Outcome {
            system,
            iterations,
            result,
        })
    }

    /// Writes `text` and reads one line without its terminator.
    fn prompt(&mut self, field: &'static str, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::UnexpectedEof { field });
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn read_number<T: FromStr>(&mut self, field: &'static str, text: &str) -> Result<T> {
        loop {
            let input = self.prompt(field, text)?;
            let parsed = input.trim().parse();
            match parsed {
                Ok(value) => return Ok(value),
                Err(_) => self.reject(Error::NonNumeric { field, input })?,
            }
        }
    }

    fn read_rule(&mut self, index: usize) -> Result<Rule> {
        loop {
            let line = self.prompt("rule", &format!("Enter Rule {index}: "))?;
            match Rule::parse(&line) {
                Ok(rule) => return Ok(rule),
                Err(err @ Error::MalformedRule { .. }) => self.reject(err)?,
                Err(err) => return Err(err),
            }
        }
    }

    fn reject(&mut self, err: Error) -> Result<()> {
        tracing::warn!(%err, "rejected console input");
        writeln!(self.output, "{err}, please try again")?;
        Ok(())
    }
}
