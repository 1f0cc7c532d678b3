use std::io::{BufRead, Write};

use crate::PlayerKind;

/// The player line-ups offered at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    CpuVsCpu,
    HumanVsCpu,
    HumanVsHuman,
}

impl Mode {
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "0" => Some(Mode::CpuVsCpu),
            "1" => Some(Mode::HumanVsCpu),
            "2" => Some(Mode::HumanVsHuman),
            _ => None,
        }
    }

    /// The kinds of the Black and the White player.
    pub fn player_kinds(self) -> (PlayerKind, PlayerKind) {
        match self {
            Mode::CpuVsCpu => (PlayerKind::Cpu, PlayerKind::Cpu),
            Mode::HumanVsCpu => (PlayerKind::Human, PlayerKind::Cpu),
            Mode::HumanVsHuman => (PlayerKind::Human, PlayerKind::Human),
        }
    }
}

/// Shows the start menu and asks until a valid choice is entered.
pub fn choose_mode(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<Mode> {
    writeln!(output, "Welcome to Reversi!")?;
    writeln!(output, "Please choose your players:")?;
    writeln!(output, "0. CPU vs CPU")?;
    writeln!(output, "1. Human vs CPU")?;
    writeln!(output, "2. Human vs Human")?;

    let mut buf = String::new();
    loop {
        write!(output, "Enter your players choice: ")?;
        output.flush()?;
        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            anyhow::bail!("Input ended before players were chosen");
        }
        match Mode::from_menu_choice(buf.trim()) {
            Some(mode) => return Ok(mode),
            None => writeln!(output, "Invalid choice {}", buf.trim())?,
        }
    }
}
