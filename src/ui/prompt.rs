//! Interactive prompts on a line-based reader/writer pair.
//!
//! End of input is never an error: it answers "postpone" so a piped or
//! closed stdin stops the run and keeps what was collected.

use crate::core::check::{DayDecider, DayDecision};
use crate::errors::AppResult;
use crate::models::status::AttendanceStatus;
use crate::utils::date::describe_day;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: &str) -> AppResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Ask until one of `choices` (case-insensitive) is typed; empty input
    /// picks `default`. Returns `None` at end of input.
    pub fn choose(
        &mut self,
        question: &str,
        choices: &[&str],
        default: &str,
    ) -> AppResult<Option<String>> {
        loop {
            write!(
                self.output,
                "{} [{}] ({}): ",
                question,
                choices.join("/"),
                default
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(None);
            };

            let answer = line.trim().to_lowercase();
            if answer.is_empty() {
                return Ok(Some(default.to_string()));
            }
            if choices.contains(&answer.as_str()) {
                return Ok(Some(answer));
            }
            writeln!(self.output, "  Invalid choice '{}'", line.trim())?;
        }
    }

    /// Ask for a free-form value. Returns `None` at end of input.
    pub fn ask(&mut self, question: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}: ", question)?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|l| l.trim().to_string()))
    }

    /// Ask for a present/absent/cancelled status.
    pub fn choose_status(
        &mut self,
        question: &str,
        default: AttendanceStatus,
    ) -> AppResult<Option<AttendanceStatus>> {
        Ok(self
            .choose(question, &["p", "a", "c"], default.code())?
            .and_then(|c| AttendanceStatus::from_code(&c)))
    }

    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> DayDecider for Prompter<R, W> {
    fn decide(&mut self, day: NaiveDate, subjects: &[String]) -> AppResult<DayDecision> {
        self.say(&format!(
            "Attendance for {} ({}):",
            describe_day(day),
            subjects.join(", ")
        ))?;
        self.say("  p = all present, a = all absent, e = each subject, h = holiday, s = skip for now")?;

        let Some(choice) = self.choose("  Day", &["p", "a", "e", "h", "s"], "e")? else {
            return Ok(DayDecision::Postpone);
        };

        let decision = match choice.as_str() {
            "p" => DayDecision::AllPresent,
            "a" => DayDecision::AllAbsent,
            "h" => DayDecision::Holiday,
            "s" => DayDecision::Postpone,
            _ => {
                let mut outcomes = Vec::with_capacity(subjects.len());
                for subject in subjects {
                    let answer =
                        self.choose(&format!("    {}", subject), &["p", "a", "c", "s"], "p")?;
                    match answer.as_deref().and_then(AttendanceStatus::from_code) {
                        Some(status) => outcomes.push((subject.clone(), status)),
                        // "s" or end of input
                        None => return Ok(DayDecision::Postpone),
                    }
                }
                DayDecision::PerSubject(outcomes)
            }
        };

        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn subjects() -> Vec<String> {
        vec!["Math".into(), "Physics".into()]
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    #[test]
    fn whole_day_answers() {
        assert_eq!(
            prompter("p\n").decide(day(), &subjects()).unwrap(),
            DayDecision::AllPresent
        );
        assert_eq!(
            prompter("A\n").decide(day(), &subjects()).unwrap(),
            DayDecision::AllAbsent
        );
        assert_eq!(
            prompter("h\n").decide(day(), &subjects()).unwrap(),
            DayDecision::Holiday
        );
    }

    #[test]
    fn each_subject_with_defaults() {
        let decision = prompter("\n\nc\n").decide(day(), &subjects()).unwrap();
        assert_eq!(
            decision,
            DayDecision::PerSubject(vec![
                ("Math".into(), AttendanceStatus::Present),
                ("Physics".into(), AttendanceStatus::Cancelled),
            ])
        );
    }

    #[test]
    fn skip_postpones_even_mid_day() {
        assert_eq!(
            prompter("s\n").decide(day(), &subjects()).unwrap(),
            DayDecision::Postpone
        );
        assert_eq!(
            prompter("e\na\ns\n").decide(day(), &subjects()).unwrap(),
            DayDecision::Postpone
        );
    }

    #[test]
    fn end_of_input_postpones() {
        assert_eq!(
            prompter("").decide(day(), &subjects()).unwrap(),
            DayDecision::Postpone
        );
    }

    #[test]
    fn invalid_choice_is_asked_again() {
        let mut p = prompter("x\np\n");
        assert_eq!(p.decide(day(), &subjects()).unwrap(), DayDecision::AllPresent);
        let out = String::from_utf8(p.output).unwrap();
        assert!(out.contains("Invalid choice 'x'"));
        assert!(out.contains("Monday, 2026-01-05"));
    }
}
