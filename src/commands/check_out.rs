use crate::commands::{CmdCtx, CommandResult};
use std::io::{BufRead, Write};

pub fn check_out<R: BufRead, W: Write>(ctx: &mut CmdCtx<'_, R, W>) -> CommandResult {
    let number = ctx.ask_room_number("Enter room number to check out: ")?;
    ctx.registry.check_out(number)?;
    ctx.output.system("Check-out successful!")?;
    Ok(())
}
