#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum EnablementLevel {
    #[default]
    Auto,
    Never,
    Always,
}

impl EnablementLevel {
    pub fn resolve(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::colors_enabled(),
        }
    }
}

pub struct Report {
    pub use_color: bool,
    pub timing: bool,
}

impl Report {
    pub fn write_answer(
        &self,
        out: &mut impl std::io::Write,
        number: usize,
        answer: &dyn std::fmt::Display,
    ) -> std::io::Result<()> {
        let label = format!("Puzzle {}:", number);
        writeln!(out, "{} {}", self.style(label), answer)
    }

    pub fn write_duration(
        &self,
        out: &mut impl std::io::Write,
        elapsed: std::time::Duration,
    ) -> std::io::Result<()> {
        if self.timing {
            writeln!(out, "{} {}µs", self.style("Total Duration:".to_owned()), elapsed.as_micros())?;
        }
        Ok(())
    }

    fn style(&self, label: String) -> String {
        match self.use_color {
            true => console::style(label).bold().force_styling(true).to_string(),
            false => label,
        }
    }
}
