use std::io::{self, BufRead, Write};
use vault_mapper::{Command, Session};

// Drives a session from standard input, one command per line:
//   n / s / e / w        move (the first move picks the portal exit)
//   link <dir>           open or close the passage towards <dir>
//   avoid / imp1 / imp2  toggle a mark on the current room
//   reset, +, -, portal, back
// Set RUST_LOG=debug to follow what the router does.

fn main() -> io::Result<()> {
    env_logger::init();
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim() == "quit" {
            break;
        }
        match line.parse::<Command>() {
            Ok(command) => match session.apply(command) {
                Ok(_) => {
                    println!("{}", session);
                    println!(
                        "player {} | {} rooms | route {:?}",
                        session.player(),
                        session.rooms().len(),
                        session.route().steps()
                    );
                }
                Err(rejected) => println!("rejected: {}", rejected),
            },
            Err(e) => println!("{}", e),
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}
