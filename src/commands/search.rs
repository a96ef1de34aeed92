use crate::commands::{CmdCtx, CommandError, CommandResult};
use crate::input::parser::{SearchChoice, parse_search_choice};
use crate::rendering::room_line;
use std::io::{BufRead, Write};

pub fn search<R: BufRead, W: Write>(ctx: &mut CmdCtx<'_, R, W>) -> CommandResult {
    ctx.output.line("Search room by:")?;
    for (ix, choice) in [SearchChoice::ByNumber, SearchChoice::ByType].iter().enumerate() {
        ctx.output.line(format!("{}. {}", ix + 1, choice.as_str()))?;
    }

    let raw = ctx.ask("Enter your choice: ")?;
    match parse_search_choice(&raw) {
        Some(SearchChoice::ByNumber) => by_number(ctx),
        Some(SearchChoice::ByType) => by_type(ctx),
        None => Err(CommandError::InvalidInput("Invalid choice.".to_string())),
    }
}

fn by_number<R: BufRead, W: Write>(ctx: &mut CmdCtx<'_, R, W>) -> CommandResult {
    let number = ctx.ask_room_number("Enter room number: ")?;
    let color = ctx.output.color();
    match ctx.registry.find_room_by_number(number).map(|r| room_line(r, color)) {
        Some(line) => ctx.output.line(line)?,
        None => ctx.output.line("Room not found.")?,
    }
    Ok(())
}

fn by_type<R: BufRead, W: Write>(ctx: &mut CmdCtx<'_, R, W>) -> CommandResult {
    let raw = ctx.ask("Enter room type (Single/Double/Suite): ")?;
    let room_type = raw.trim();
    let color = ctx.output.color();

    let lines: Vec<String> = ctx.registry.find_rooms_by_type(room_type).into_iter().map(|r| room_line(r, color)).collect();

    ctx.output.heading("Search Results")?;
    if lines.is_empty() {
        ctx.output.line(format!("No rooms of type {room_type} found."))?;
        return Ok(());
    }
    for line in lines {
        ctx.output.line(line)?;
    }
    Ok(())
}
