use crate::commands::{CmdCtx, CommandResult};
use crate::rendering::booking_line;
use std::io::{BufRead, Write};

pub fn view_bookings<R: BufRead, W: Write>(ctx: &mut CmdCtx<'_, R, W>) -> CommandResult {
    let color = ctx.output.color();
    let lines: Vec<String> = ctx.registry.list_bookings().map(|b| booking_line(b, color)).collect();
    if lines.is_empty() {
        ctx.output.line("No current bookings.")?;
        return Ok(());
    }

    ctx.output.heading("Current Bookings")?;
    for line in lines {
        ctx.output.line(line)?;
    }
    Ok(())
}
