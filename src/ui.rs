/// Console status and error output
///
/// Error messages get a colored "error" prefix when the terminal supports
/// it and fall back to plain text everywhere else.

use std::io::Write;

/// Print a status message with the "solar: " prefix.
pub fn status(s: &str) {
    println!("solar: {}", s);
}

/// Print an error message with a colored "error" prefix.
pub fn print_error(msg: &str) {
    println!();
    print_color("error", term::color::BRIGHT_RED);
    println!(": {}", msg);
    println!();
}

fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        print!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        if let Some(ref mut t) = term::stdout() {
            if t.fg(fg).is_err() {
                return false;
            }
            let _ = t.attr(term::Attr::Bold);
            if write!(t, "{}", s).is_err() {
                return false;
            }
            let _ = t.reset();
        }

        true
    }
}
