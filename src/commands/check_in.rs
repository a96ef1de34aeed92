use crate::commands::{CmdCtx, CommandResult};
use crate::error::DomainError;
use crate::rendering::room_line;
use std::io::{BufRead, Write};

pub fn check_in<R: BufRead, W: Write>(ctx: &mut CmdCtx<'_, R, W>) -> CommandResult {
    let color = ctx.output.color();
    ctx.output.heading("Available Rooms")?;

    let available: Vec<String> = ctx.registry.list_available_rooms().map(|r| room_line(r, color)).collect();
    if available.is_empty() {
        ctx.output.line("No rooms available at the moment.")?;
        return Ok(());
    }
    for line in available {
        ctx.output.line(line)?;
    }

    let number = ctx.ask_room_number("\nEnter room number to check in: ")?;

    // Validate the room before asking anything else
    match ctx.registry.find_room_by_number(number) {
        None => return Err(DomainError::RoomNotFound(number).into()),
        Some(room) if room.is_occupied() => return Err(DomainError::RoomAlreadyOccupied(number).into()),
        Some(_) => {}
    }

    let guest_name = ctx.ask_guest_name("Enter guest name: ")?;
    let days = ctx.ask_days("Enter number of days: ")?;

    let booking = ctx.registry.check_in(number, guest_name, days)?;
    let (id, total) = (booking.id, booking.total_amount);

    ctx.output.system(format!("Check-in successful! Booking #{id}, total ${total:.2}."))?;
    Ok(())
}
