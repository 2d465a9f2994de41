use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use tracing::info;

use mal_dialogue::{Answer, DialogueSession, Script};

pub fn run(script_path: Option<&Path>) -> Result<(), String> {
    let script = match script_path {
        Some(path) => load_script(path)?,
        None => Script::malones(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    play(DialogueSession::new(script), stdin.lock(), stdout.lock())
}

fn load_script(path: &Path) -> Result<Script, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let script =
        Script::from_json(&json).map_err(|e| format!("failed to load {}: {e}", path.display()))?;
    info!(
        path = %path.display(),
        questions = script.questions().len(),
        "loaded script"
    );
    Ok(script)
}

/// Run the game until a closing reply is given or input ends.
fn play<R: BufRead, W: Write>(
    mut session: DialogueSession,
    mut reader: R,
    mut out: W,
) -> Result<(), String> {
    writeln!(out, "{}", session.start().bold()).map_err(|e| e.to_string())?;

    let mut line = String::new();
    loop {
        write!(out, "> ").map_err(|e| e.to_string())?;
        out.flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let answer = match Answer::parse(input) {
            Ok(answer) => answer,
            Err(e) => {
                writeln!(out, "{}", e.to_string().yellow()).map_err(|e| e.to_string())?;
                continue;
            }
        };

        // The library keeps the session open after a closing reply; the game ends here.
        let closing = answer == Answer::Yes || session.is_at_last_question();
        let reply = session.respond(answer);
        if closing {
            writeln!(out, "{}", reply.green().bold()).map_err(|e| e.to_string())?;
            break;
        }
        writeln!(out, "{}", reply.bold()).map_err(|e| e.to_string())?;
    }

    Ok(())
}
