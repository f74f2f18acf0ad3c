use crate::print::write_messages;
use duke::api::DukeApi;
use duke::commands::CmdResult;
use duke::store::Storage;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Where command lines come from.
pub(crate) trait LineSource {
    /// The next line, or `None` once input is exhausted.
    fn next_line(&mut self) -> Option<io::Result<String>>;
}

impl<B: BufRead> LineSource for io::Lines<B> {
    fn next_line(&mut self) -> Option<io::Result<String>> {
        self.next()
    }
}

/// Reads and runs commands until `bye` or end of input. Either way the tasks
/// are saved before returning. Returns `false` if that save failed, in which
/// case the failure is written to `err` instead of `out`.
pub(crate) fn run<S, L, W, E>(
    api: &mut DukeApi<S>,
    lines: &mut L,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool>
where
    S: Storage,
    L: LineSource,
    W: Write,
    E: Write,
{
    while let Some(line) = lines.next_line() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to read input, ending session");
                break;
            }
        };

        let result = api.respond(&line);
        if result.exit {
            return finish(&result, out, err);
        }
        write_messages(out, &result.messages)?;
    }

    finish(&api.shutdown(), out, err)
}

fn finish<W: Write, E: Write>(result: &CmdResult, out: &mut W, err: &mut E) -> io::Result<bool> {
    if result.has_errors() {
        write_messages(err, &result.messages)?;
        return Ok(false);
    }
    write_messages(out, &result.messages)?;
    Ok(true)
}
