use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(Ok(line)) = lines.next() {
        println!("{}", dice_expr::roll(&line));
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
