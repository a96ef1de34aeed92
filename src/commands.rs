use crate::error::DomainError;
use crate::input::parser::{MenuChoice, parse_days, parse_room_number};
use crate::input::prompt::LineReader;
use crate::models::types::RoomNumber;
use crate::output::Output;
use crate::state::registry::Registry;
use std::io::{BufRead, Write};
use thiserror::Error;

mod bookings;
mod check_in;
mod check_out;
mod rooms;
mod search;

pub type CommandResult<T = ()> = Result<T, CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid menu choice: {0}")]
    InvalidMenuChoice(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("input closed")]
    EndOfInput,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// Text shown to the operator before the menu is displayed again.
    pub fn operator_message(&self) -> String {
        match self {
            CommandError::InvalidMenuChoice(_) => "Invalid option. Please try again.".to_string(),
            CommandError::InvalidInput(msg) => msg.clone(),
            CommandError::EndOfInput => "No more input.".to_string(),
            CommandError::Domain(DomainError::RoomNotFound(_)) => "Invalid room number.".to_string(),
            CommandError::Domain(DomainError::RoomAlreadyOccupied(_)) => "This room is already occupied.".to_string(),
            CommandError::Domain(DomainError::RoomNotOccupied(_)) => "This room is not occupied.".to_string(),
            CommandError::Io(e) => format!("I/O error: {e}"),
        }
    }
}

/// What the shell should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Command context passed to command handlers
pub struct CmdCtx<'a, R, W> {
    /// Room and booking state
    pub registry: &'a mut Registry,
    /// Operator input, for follow-up questions
    pub input: &'a mut LineReader<R>,
    /// Console output
    pub output: &'a mut Output<W>,
}

impl<R: BufRead, W: Write> CmdCtx<'_, R, W> {
    /// Prompt and read one line. End of input aborts the command.
    pub fn ask(&mut self, question: &str) -> CommandResult<String> {
        self.output.prompt(question)?;
        self.input.read_line()?.ok_or(CommandError::EndOfInput)
    }

    pub fn ask_room_number(&mut self, question: &str) -> CommandResult<RoomNumber> {
        let raw = self.ask(question)?;
        parse_room_number(&raw).ok_or_else(|| CommandError::InvalidInput(format!("'{}' is not a room number.", raw.trim())))
    }

    /// Keeps asking until a non-blank name is given.
    pub fn ask_guest_name(&mut self, question: &str) -> CommandResult<String> {
        loop {
            let raw = self.ask(question)?;
            let name = raw.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
            self.output.error("Guest name cannot be empty.")?;
        }
    }

    /// Keeps asking until a positive number of days is given.
    pub fn ask_days(&mut self, question: &str) -> CommandResult<i32> {
        loop {
            let raw = self.ask(question)?;
            match parse_days(&raw) {
                Some(days) if days > 0 => return Ok(days),
                _ => self.output.error("Number of days must be a positive whole number.")?,
            }
        }
    }
}

pub fn process_command<R: BufRead, W: Write>(choice: MenuChoice, ctx: &mut CmdCtx<'_, R, W>) -> CommandResult<Flow> {
    tracing::debug!(choice = choice.as_str(), "processing command");
    match choice {
        MenuChoice::ViewRooms => rooms::view_rooms(ctx)?,
        MenuChoice::CheckIn => check_in::check_in(ctx)?,
        MenuChoice::CheckOut => check_out::check_out(ctx)?,
        MenuChoice::ViewBookings => bookings::view_bookings(ctx)?,
        MenuChoice::Search => search::search(ctx)?,
        MenuChoice::Exit => {
            ctx.output.system(crate::banner::FAREWELL)?;
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}
