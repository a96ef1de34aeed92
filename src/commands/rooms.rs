use crate::commands::{CmdCtx, CommandResult};
use crate::rendering::room_line;
use std::io::{BufRead, Write};

pub fn view_rooms<R: BufRead, W: Write>(ctx: &mut CmdCtx<'_, R, W>) -> CommandResult {
    let color = ctx.output.color();
    ctx.output.heading("All Rooms")?;
    for room in ctx.registry.list_rooms() {
        ctx.output.line(room_line(room, color))?;
    }
    Ok(())
}
