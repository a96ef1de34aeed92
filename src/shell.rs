//! The operator console: show the menu, read a choice, run it, repeat.

use crate::banner::{BANNER, MENU_TITLE};
use crate::commands::{CmdCtx, CommandError, Flow, process_command};
use crate::config::Config;
use crate::input::parser::{MenuChoice, parse_menu_choice};
use crate::input::prompt::LineReader;
use crate::output::Output;
use crate::state::registry::Registry;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub color: bool,
    pub prompt: String,
    pub show_banner: bool,
}

impl From<&Config> for ShellOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            color: cfg.color,
            prompt: cfg.prompt.clone(),
            show_banner: true,
        }
    }
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

pub struct Shell<R, W> {
    registry: Registry,
    input: LineReader<R>,
    output: Output<W>,
    opts: ShellOptions,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: Registry, input: R, output: W, opts: ShellOptions) -> Self {
        Self {
            registry,
            input: LineReader::new(input),
            output: Output::new(output, opts.color),
            opts,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Final registry state and the console writer, once the shell is done.
    pub fn into_parts(self) -> (Registry, W) {
        (self.registry, self.output.into_inner())
    }

    /// Runs until the operator picks Exit or the input ends. Only console
    /// I/O failures are returned as errors.
    pub fn run(&mut self) -> io::Result<()> {
        if self.opts.show_banner {
            self.output.line(BANNER)?;
        }

        loop {
            self.show_menu()?;
            self.output.prompt(&self.opts.prompt)?;

            let Some(raw) = self.input.read_line()? else {
                tracing::info!("input closed, leaving shell");
                self.output.line("")?;
                return Ok(());
            };

            let Some(choice) = parse_menu_choice(&raw) else {
                self.report(CommandError::InvalidMenuChoice(raw))?;
                continue;
            };

            let mut ctx = CmdCtx {
                registry: &mut self.registry,
                input: &mut self.input,
                output: &mut self.output,
            };
            match process_command(choice, &mut ctx) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(CommandError::EndOfInput) => {
                    tracing::info!(choice = choice.as_str(), "input closed during command");
                    self.output.line("")?;
                    return Ok(());
                }
                Err(CommandError::Io(e)) => return Err(e),
                Err(e) => self.report(e)?,
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        self.output.heading(MENU_TITLE)?;
        for choice in MenuChoice::ALL {
            self.output.line(format!("{}. {}", choice.number(), choice.as_str()))?;
        }
        Ok(())
    }

    fn report(&mut self, err: CommandError) -> io::Result<()> {
        tracing::warn!(error = %err, "command rejected");
        self.output.error(err.operator_message())
    }
}
