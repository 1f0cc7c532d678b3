use std::io::{BufRead, Stdout, Write};

use reversi::{Coordinate, Game, Move, Piece};

use crate::Bot;

/// Where a [`HumanPlayer`] reads its moves from, one whitespace-separated word at a time.
pub trait WordInput {
    /// Appends the next word to `word` and returns its length in bytes, 0 at the end of input.
    fn read_word(&mut self, word: &mut String) -> std::io::Result<usize>;
}

impl<R: BufRead> WordInput for R {
    fn read_word(&mut self, word: &mut String) -> std::io::Result<usize> {
        next_word(self, word)
    }
}

/// The process-wide stdin.
///
/// Every read goes through the buffer shared by all handles to stdin, and only the
/// word itself is consumed. Several players, also across several games, can take
/// turns on the same input stream.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleInput;

impl WordInput for ConsoleInput {
    fn read_word(&mut self, word: &mut String) -> std::io::Result<usize> {
        next_word(&mut std::io::stdin().lock(), word)
    }
}

/// Reads the next whitespace-separated word, leaving the rest of the input unread.
///
/// Leading whitespace, including empty lines, is skipped. Returns the length of the
/// word in bytes, so 0 means the input ended.
pub fn next_word(input: &mut impl BufRead, word: &mut String) -> std::io::Result<usize> {
    let mut bytes = Vec::new();
    loop {
        let available = input.fill_buf()?;
        if available.is_empty() {
            break;
        }
        let skip = if bytes.is_empty() {
            available.iter().take_while(|b| b.is_ascii_whitespace()).count()
        } else {
            0
        };
        let rest = &available[skip..];
        let len = rest.iter().take_while(|b| !b.is_ascii_whitespace()).count();
        bytes.extend_from_slice(&rest[..len]);
        let word_ended = len < rest.len();
        input.consume(skip + len);
        if word_ended {
            break;
        }
    }
    let read = String::from_utf8(bytes)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
    word.push_str(&read);
    Ok(read.len())
}

/// A player typing moves like `D3` on a console.
///
/// Input that can't be parsed, or that names a cell where the piece can't be
/// placed, is rejected and the player is asked again. Several moves may be
/// given on one line, separated by whitespace.
pub struct HumanPlayer<R, W> {
    piece: Piece,
    input: R,
    output: W,
    // A re-usable buffer for IO.
    buf: String,
}

impl HumanPlayer<ConsoleInput, Stdout> {
    /// A player on the console.
    pub fn stdio(piece: Piece) -> Self {
        Self::new(piece, ConsoleInput, std::io::stdout())
    }
}

impl<R: WordInput, W: Write> HumanPlayer<R, W> {
    pub fn new(piece: Piece, input: R, output: W) -> Self {
        Self {
            piece,
            input,
            output,
            buf: String::new(),
        }
    }
}

impl<R: WordInput, W: Write> Bot for HumanPlayer<R, W> {
    fn piece(&self) -> Piece {
        self.piece
    }

    fn propose_move(&mut self, game: &Game) -> anyhow::Result<Move> {
        loop {
            write!(self.output, "Enter move (e.g. A5): ")?;
            self.output.flush()?;

            self.buf.clear(); // because read_word() appends to the buffer
            if self.input.read_word(&mut self.buf)? == 0 {
                anyhow::bail!("Input ended while waiting for a move by {}", self.piece);
            }
            let input = self.buf.as_str();

            match input.parse::<Coordinate>() {
                Ok(Coordinate { row, column }) if game.board().can_put(self.piece, row, column) => {
                    return Ok(Move::new(self.piece, row, column));
                }
                _ => writeln!(self.output, "Invalid move {}", input)?,
            }
        }
    }

    fn retry_on_illegal_move(&self) -> bool {
        true
    }
}
